pub mod banding;
pub mod map;
pub mod seat;

pub use banding::{BandingPolicy, ConfigError, MapConfig, PriceBand};
pub use map::{MapError, SeatLocation, SeatMap};
pub use seat::Seat;
