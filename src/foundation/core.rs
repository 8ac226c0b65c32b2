use crate::foundation::error::{SortError, SortResult};
use std::time::Duration;

/// Position of a frame within one sort run, starting at 0 for the initial frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Display frame rate as a rational number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a frame rate of `num / den` frames per second.
    pub fn new(num: u32, den: u32) -> SortResult<Self> {
        if den == 0 {
            return Err(SortError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SortError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Wall-clock time one frame stays on screen.
    pub fn frame_duration(self) -> Duration {
        Duration::from_secs_f64(f64::from(self.den) / f64::from(self.num))
    }
}

/// Which cells around a value a renderer fills in.
///
/// Rows are indexed by the value they represent (`0..=max`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Only the row equal to the value.
    #[default]
    Exact,
    /// The value row and every row with a larger value (mode `1`).
    Below,
    /// The value row and every row with a smaller value (mode `2`).
    Above,
}

impl FillMode {
    /// Decode the numeric mode used on the command line: `1` fills below, `2` fills above,
    /// anything else draws the exact row only.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Below,
            2 => Self::Above,
            _ => Self::Exact,
        }
    }

    /// Numeric mode matching [`FillMode::from_code`].
    pub fn code(self) -> i64 {
        match self {
            Self::Exact => 0,
            Self::Below => 1,
            Self::Above => 2,
        }
    }

    /// Whether the cell for `row` is filled in a column holding `value`.
    pub fn covers(self, value: u32, row: u32) -> bool {
        match self {
            Self::Exact => value == row,
            Self::Below => value <= row,
            Self::Above => value >= row,
        }
    }
}

/// Parameters every sort call receives explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Inclusive upper bound for values (required by counting and radix sort).
    pub max: u32,
    /// Clock-sort delay per unit of value.
    pub clock_tick: Duration,
    /// Extra time the clock-sort collector waits past the largest scheduled delay.
    pub clock_timeout_grace: Duration,
}

impl SortConfig {
    /// Default clock-sort delay per unit of value.
    pub const DEFAULT_CLOCK_TICK: Duration = Duration::from_millis(250);
    /// Default clock-sort grace period.
    pub const DEFAULT_CLOCK_GRACE: Duration = Duration::from_secs(2);

    /// Config with the given ceiling and default clock timings.
    pub fn new(max: u32) -> Self {
        Self {
            max,
            clock_tick: Self::DEFAULT_CLOCK_TICK,
            clock_timeout_grace: Self::DEFAULT_CLOCK_GRACE,
        }
    }

    /// Replace the clock-sort tick.
    pub fn with_clock_tick(mut self, tick: Duration) -> Self {
        self.clock_tick = tick;
        self
    }

    /// Reject any value above the configured ceiling.
    pub fn check_bounds(&self, seq: &[u32]) -> SortResult<()> {
        match seq.iter().position(|&v| v > self.max) {
            Some(i) => Err(SortError::validation(format!(
                "value {} at index {i} exceeds configured max {}",
                seq[i], self.max
            ))),
            None => Ok(()),
        }
    }
}

/// Parameters shared by the ASCII and raster renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Largest value drawn; renderers produce `max + 1` rows.
    pub max: u32,
    /// Fill predicate.
    pub mode: FillMode,
}

impl RenderConfig {
    /// Number of rows a rendered frame spans.
    pub fn rows(&self) -> u32 {
        self.max.saturating_add(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
