pub mod label;
pub mod selection;
pub mod session;

pub use label::seat_label;
pub use selection::SelectionSet;
pub use session::{BookingOutcome, BookingSession};
