use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stalls_map::{SeatLocation, SeatMap};
use uuid::Uuid;

use crate::selection::SelectionSet;

/// Result of submitting a selection: the seats the map accepted and the
/// seats it rejected, both in submission order. The caller uses the
/// rejected list to revert those picks in its view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingOutcome {
    pub booked: Vec<SeatLocation>,
    pub rejected: Vec<SeatLocation>,
}

impl BookingOutcome {
    pub fn fully_applied(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// One user's picking-and-booking flow against a shared map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub selection: SelectionSet,
}

impl BookingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            selection: SelectionSet::new(),
        }
    }

    /// Submit the current selection as one booking batch and clear it.
    ///
    /// Partial success: every bookable seat is committed even when others
    /// are rejected.
    pub fn confirm(&mut self, map: &mut SeatMap) -> BookingOutcome {
        let submitted = self.selection.locations().to_vec();
        let rejected = map.book_seats(&submitted);
        self.selection.clear();

        let outcome = split_outcome(submitted, rejected);
        tracing::info!(
            "Session {}: booked {} seats, {} rejected",
            self.id,
            outcome.booked.len(),
            outcome.rejected.len()
        );
        outcome
    }

    /// Submit the current selection as one release batch and clear it.
    pub fn release(&mut self, map: &mut SeatMap) -> BookingOutcome {
        let submitted = self.selection.locations().to_vec();
        let rejected = map.release_seats(&submitted);
        self.selection.clear();

        let outcome = split_outcome(submitted, rejected);
        tracing::info!(
            "Session {}: released {} seats, {} rejected",
            self.id,
            outcome.booked.len(),
            outcome.rejected.len()
        );
        outcome
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

// A selection holds no duplicates, so membership in the reject list fully
// determines each submitted seat's outcome.
fn split_outcome(submitted: Vec<SeatLocation>, rejected: Vec<SeatLocation>) -> BookingOutcome {
    let booked = submitted
        .into_iter()
        .filter(|l| !rejected.contains(l))
        .collect();
    BookingOutcome { booked, rejected }
}
