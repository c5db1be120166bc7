use serde::{Deserialize, Serialize};

/// A single bookable seat: a fixed price and an occupancy flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    price_cents: u32,
    occupied: bool,
}

impl Seat {
    /// Create a free seat with the given price in minor units.
    pub fn new(price_cents: u32) -> Self {
        Self {
            price_cents,
            occupied: false,
        }
    }

    /// Create a seat with an explicit initial occupancy.
    pub fn with_occupancy(price_cents: u32, occupied: bool) -> Self {
        Self {
            price_cents,
            occupied,
        }
    }

    /// Try to book the seat.
    /// Returns false, changing nothing, if it is already occupied.
    pub fn book(&mut self) -> bool {
        if self.occupied {
            return false;
        }
        self.occupied = true;
        true
    }

    /// Try to release the seat.
    /// Returns false, changing nothing, if it is already free.
    pub fn release(&mut self) -> bool {
        if !self.occupied {
            return false;
        }
        self.occupied = false;
        true
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn price_cents(&self) -> u32 {
        self.price_cents
    }
}
