use serde::{Deserialize, Serialize};
use stalls_map::SeatLocation;

/// Seats a user has picked but not yet submitted.
///
/// The selection lives entirely on the client side; the map never sees a
/// seat until the whole selection is submitted as one batch. Insertion
/// order is preserved because it becomes the batch's processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionSet {
    locations: Vec<SeatLocation>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the seat if it is not selected, deselect it if it is.
    /// Returns true when the seat ends up selected.
    pub fn toggle(&mut self, location: SeatLocation) -> bool {
        if let Some(pos) = self.locations.iter().position(|l| *l == location) {
            self.locations.remove(pos);
            false
        } else {
            self.locations.push(location);
            true
        }
    }

    pub fn is_selected(&self, location: SeatLocation) -> bool {
        self.locations.contains(&location)
    }

    /// Selected seats in the order they were picked.
    pub fn locations(&self) -> &[SeatLocation] {
        &self.locations
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
