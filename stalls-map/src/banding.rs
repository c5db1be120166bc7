use serde::{Deserialize, Serialize};

/// A contiguous run of rows sharing one price.
/// Covers the half-open range `[start_row, end_row)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBand {
    pub start_row: usize,
    pub end_row: usize,
    pub price_cents: u32,
}

/// The row-to-price partition applied when a map is built.
/// Bands are ordered front to back and must exactly cover the map's rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BandingPolicy {
    pub bands: Vec<PriceBand>,
}

impl BandingPolicy {
    pub fn new(bands: Vec<PriceBand>) -> Self {
        Self { bands }
    }

    /// Check that the bands exactly partition `[0, rows)`: the first band
    /// starts at row 0, each band starts where the previous one ends, no
    /// band is empty, and the last band ends at `rows`.
    pub fn validate(&self, rows: usize) -> Result<(), ConfigError> {
        if self.bands.is_empty() {
            return Err(ConfigError::NoBands);
        }
        let mut next = 0;
        for band in &self.bands {
            if band.start_row != next {
                return Err(ConfigError::Discontinuity {
                    expected: next,
                    found: band.start_row,
                });
            }
            if band.end_row <= band.start_row {
                return Err(ConfigError::EmptyBand {
                    start_row: band.start_row,
                    end_row: band.end_row,
                });
            }
            next = band.end_row;
        }
        if next != rows {
            return Err(ConfigError::CoverageMismatch {
                covered: next,
                rows,
            });
        }
        Ok(())
    }

    /// Price for a row, if any band covers it.
    pub fn price_for_row(&self, row: usize) -> Option<u32> {
        self.bands
            .iter()
            .find(|b| b.start_row <= row && row < b.end_row)
            .map(|b| b.price_cents)
    }
}

/// Everything needed to build a map. `Default` is the observed venue:
/// 15 rows of 40 seats in three five-row price bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MapConfig {
    pub rows: usize,
    pub cols: usize,
    pub banding: BandingPolicy,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 40,
            banding: BandingPolicy::new(vec![
                PriceBand {
                    start_row: 0,
                    end_row: 5,
                    price_cents: 5000,
                },
                PriceBand {
                    start_row: 5,
                    end_row: 10,
                    price_cents: 3000,
                },
                PriceBand {
                    start_row: 10,
                    end_row: 15,
                    price_cents: 1500,
                },
            ]),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("banding policy has no bands")]
    NoBands,

    #[error("band starting at row {found} does not continue from row {expected}")]
    Discontinuity { expected: usize, found: usize },

    #[error("band [{start_row}, {end_row}) covers no rows")]
    EmptyBand { start_row: usize, end_row: usize },

    #[error("bands cover rows [0, {covered}) but the map has {rows} rows")]
    CoverageMismatch { covered: usize, rows: usize },

    #[error("map must have at least one seat per row")]
    ZeroColumns,
}
