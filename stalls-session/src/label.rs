use stalls_map::SeatLocation;

/// Display label for a seat: row letter plus 1-based seat number.
///
/// Letters run backwards through the alphabet from the front of the map,
/// so row 0 of a 15-row map is "O" and the back row is "A"; seat (0, 0)
/// renders as "O1". Returns `None` when the row is outside the map or the
/// map has more than 26 rows (no letter scheme fits).
pub fn seat_label(total_rows: usize, location: SeatLocation) -> Option<String> {
    if total_rows == 0 || total_rows > 26 || location.row >= total_rows {
        return None;
    }
    let letter = (b'A' + (total_rows - 1 - location.row) as u8) as char;
    Some(format!("{}{}", letter, location.col + 1))
}
