use serde::{Deserialize, Serialize};

use crate::banding::{BandingPolicy, ConfigError, MapConfig};
use crate::seat::Seat;

/// A (row, column) coordinate into the grid, 0-based from the front row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SeatLocation {
    pub row: usize,
    pub col: usize,
}

impl SeatLocation {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for SeatLocation {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The seat grid plus the running box-office total.
///
/// Invariant: the box office always equals the sum of prices over occupied
/// seats, including after a partially-failed batch operation. Serializes
/// for snapshots but never deserializes; a map only comes into existence
/// through a validated construction.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    rows: usize,
    cols: usize,
    // Row-major: seat (row, col) lives at row * cols + col
    seats: Vec<Seat>,
    box_office_cents: u64,
}

impl SeatMap {
    /// Build a map of `rows` x `cols` seats, pricing each row from the
    /// banding policy. Fails if the policy does not exactly partition the
    /// rows or the grid would hold no seats.
    pub fn new(rows: usize, cols: usize, banding: BandingPolicy) -> Result<Self, ConfigError> {
        if cols == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        banding.validate(rows)?;

        let mut seats = Vec::with_capacity(rows * cols);
        // Validated bands are contiguous from row 0, so pushing band by
        // band yields row-major order.
        for band in &banding.bands {
            for _ in band.start_row..band.end_row {
                for _ in 0..cols {
                    seats.push(Seat::new(band.price_cents));
                }
            }
        }

        tracing::info!(
            "Built seat map: {} rows x {} cols, {} price bands",
            rows,
            cols,
            banding.bands.len()
        );

        Ok(Self {
            rows,
            cols,
            seats,
            box_office_cents: 0,
        })
    }

    pub fn from_config(config: MapConfig) -> Result<Self, ConfigError> {
        Self::new(config.rows, config.cols, config.banding)
    }

    /// Book one seat and add its price to the box office.
    pub fn book_seat(&mut self, row: usize, col: usize) -> Result<(), MapError> {
        let idx = self.index(row, col)?;
        if !self.seats[idx].book() {
            return Err(MapError::AlreadyOccupied { row, col });
        }
        self.box_office_cents += u64::from(self.seats[idx].price_cents());
        Ok(())
    }

    /// Release one seat and deduct its price from the box office.
    pub fn release_seat(&mut self, row: usize, col: usize) -> Result<(), MapError> {
        let idx = self.index(row, col)?;
        if !self.seats[idx].release() {
            return Err(MapError::AlreadyFree { row, col });
        }
        self.box_office_cents -= u64::from(self.seats[idx].price_cents());
        Ok(())
    }

    /// Book every location that can be booked, in input order.
    ///
    /// Partial success: each location is processed independently, earlier
    /// successes are never rolled back, and the rejected locations
    /// (occupied or out of bounds) come back preserving their input order.
    /// Duplicate locations are allowed; the second occurrence is rejected
    /// by the first one's success.
    pub fn book_seats(&mut self, locations: &[SeatLocation]) -> Vec<SeatLocation> {
        let mut rejected = Vec::new();
        for &loc in locations {
            if self.book_seat(loc.row, loc.col).is_err() {
                rejected.push(loc);
            }
        }
        if !rejected.is_empty() {
            tracing::debug!(
                "Batch book: {} of {} locations rejected",
                rejected.len(),
                locations.len()
            );
        }
        rejected
    }

    /// Release every location that can be released, in input order.
    /// Same partial-success contract as [`SeatMap::book_seats`].
    pub fn release_seats(&mut self, locations: &[SeatLocation]) -> Vec<SeatLocation> {
        let mut rejected = Vec::new();
        for &loc in locations {
            if self.release_seat(loc.row, loc.col).is_err() {
                rejected.push(loc);
            }
        }
        if !rejected.is_empty() {
            tracing::debug!(
                "Batch release: {} of {} locations rejected",
                rejected.len(),
                locations.len()
            );
        }
        rejected
    }

    /// Aggregate revenue over all currently occupied seats, in minor units.
    pub fn box_office_cents(&self) -> u64 {
        self.box_office_cents
    }

    /// Number of occupied seats.
    pub fn booked_seats(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, MapError> {
        let idx = self.index(row, col)?;
        Ok(self.seats[idx].is_occupied())
    }

    pub fn seat_price_cents(&self, row: usize, col: usize) -> Result<u32, MapError> {
        let idx = self.index(row, col)?;
        Ok(self.seats[idx].price_cents())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MapError> {
        if row >= self.rows || col >= self.cols {
            return Err(MapError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("seat ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("seat ({row}, {col}) is already occupied")]
    AlreadyOccupied { row: usize, col: usize },

    #[error("seat ({row}, {col}) is already free")]
    AlreadyFree { row: usize, col: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banding::PriceBand;

    fn small_map() -> SeatMap {
        // 4 rows x 3 cols, front half 2000, back half 1000
        SeatMap::new(
            4,
            3,
            BandingPolicy::new(vec![
                PriceBand {
                    start_row: 0,
                    end_row: 2,
                    price_cents: 2000,
                },
                PriceBand {
                    start_row: 2,
                    end_row: 4,
                    price_cents: 1000,
                },
            ]),
        )
        .unwrap()
    }

    fn occupied_total(map: &SeatMap) -> u64 {
        let mut total = 0;
        for row in 0..map.rows() {
            for col in 0..map.cols() {
                if map.is_occupied(row, col).unwrap() {
                    total += u64::from(map.seat_price_cents(row, col).unwrap());
                }
            }
        }
        total
    }

    #[test]
    fn test_book_updates_box_office() {
        let mut map = small_map();
        assert_eq!(map.box_office_cents(), 0);

        map.book_seat(0, 0).unwrap();
        assert_eq!(map.box_office_cents(), 2000);
        assert!(map.is_occupied(0, 0).unwrap());

        map.book_seat(3, 2).unwrap();
        assert_eq!(map.box_office_cents(), 3000);
        assert_eq!(map.booked_seats(), 2);
        assert_eq!(map.box_office_cents(), occupied_total(&map));
    }

    #[test]
    fn test_double_book_rejected_once() {
        let mut map = small_map();
        map.book_seat(1, 1).unwrap();
        let err = map.book_seat(1, 1).unwrap_err();
        assert!(matches!(err, MapError::AlreadyOccupied { row: 1, col: 1 }));

        // Price counted exactly once
        assert_eq!(map.box_office_cents(), 2000);
    }

    #[test]
    fn test_book_release_symmetry() {
        let mut map = small_map();
        map.book_seat(2, 0).unwrap();
        map.release_seat(2, 0).unwrap();

        assert_eq!(map.box_office_cents(), 0);
        assert!(!map.is_occupied(2, 0).unwrap());
        assert!(matches!(
            map.release_seat(2, 0).unwrap_err(),
            MapError::AlreadyFree { row: 2, col: 0 }
        ));
    }

    #[test]
    fn test_batch_partial_success() {
        let mut map = small_map();
        map.book_seat(1, 1).unwrap();

        let rejected = map.book_seats(&[
            SeatLocation::new(0, 0),
            SeatLocation::new(0, 0),
            SeatLocation::new(1, 1),
        ]);

        // The duplicate fails against the first entry's success; the
        // pre-occupied seat fails too. Input order is preserved.
        assert_eq!(
            rejected,
            vec![SeatLocation::new(0, 0), SeatLocation::new(1, 1)]
        );
        assert!(map.is_occupied(0, 0).unwrap());
        assert_eq!(map.box_office_cents(), 4000);
        assert_eq!(map.box_office_cents(), occupied_total(&map));
    }

    #[test]
    fn test_batch_release() {
        let mut map = small_map();
        map.book_seats(&[SeatLocation::new(0, 0), SeatLocation::new(3, 1)]);

        let rejected = map.release_seats(&[
            SeatLocation::new(0, 0),
            SeatLocation::new(2, 2), // never booked
            SeatLocation::new(3, 1),
        ]);
        assert_eq!(rejected, vec![SeatLocation::new(2, 2)]);
        assert_eq!(map.box_office_cents(), 0);
        assert_eq!(map.booked_seats(), 0);
    }

    #[test]
    fn test_out_of_bounds_leaves_state_untouched() {
        let mut map = small_map();
        assert!(matches!(
            map.book_seat(4, 0).unwrap_err(),
            MapError::OutOfBounds { row: 4, col: 0, .. }
        ));
        assert!(matches!(
            map.book_seat(0, 3).unwrap_err(),
            MapError::OutOfBounds { row: 0, col: 3, .. }
        ));
        assert_eq!(map.box_office_cents(), 0);
        assert_eq!(map.booked_seats(), 0);

        // Batch ops collect bounds failures instead of aborting
        let rejected = map.book_seats(&[SeatLocation::new(9, 9), SeatLocation::new(0, 0)]);
        assert_eq!(rejected, vec![SeatLocation::new(9, 9)]);
        assert!(map.is_occupied(0, 0).unwrap());
    }

    #[test]
    fn test_default_venue_scenario() {
        let mut map = SeatMap::from_config(MapConfig::default()).unwrap();
        assert_eq!(map.rows(), 15);
        assert_eq!(map.cols(), 40);

        map.book_seat(0, 0).unwrap();
        assert_eq!(map.box_office_cents(), 5000);

        map.book_seat(12, 3).unwrap();
        assert_eq!(map.box_office_cents(), 6500);

        map.release_seat(0, 0).unwrap();
        assert_eq!(map.box_office_cents(), 1500);
        assert_eq!(map.booked_seats(), 1);
    }

    #[test]
    fn test_construction_rejects_bad_banding() {
        let result = SeatMap::new(
            15,
            40,
            BandingPolicy::new(vec![PriceBand {
                start_row: 0,
                end_row: 10,
                price_cents: 5000,
            }]),
        );
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::CoverageMismatch {
                covered: 10,
                rows: 15
            }
        ));
    }

    #[test]
    fn test_construction_rejects_zero_columns() {
        let result = SeatMap::new(
            1,
            0,
            BandingPolicy::new(vec![PriceBand {
                start_row: 0,
                end_row: 1,
                price_cents: 100,
            }]),
        );
        assert!(matches!(result.unwrap_err(), ConfigError::ZeroColumns));
    }

    #[test]
    fn test_band_prices_assigned_by_row() {
        let map = small_map();
        assert_eq!(map.seat_price_cents(0, 2).unwrap(), 2000);
        assert_eq!(map.seat_price_cents(1, 0).unwrap(), 2000);
        assert_eq!(map.seat_price_cents(2, 0).unwrap(), 1000);
        assert_eq!(map.seat_price_cents(3, 2).unwrap(), 1000);
    }
}
