use crate::foundation::core::{FillMode, Fps, RenderConfig, SortConfig};
use crate::foundation::error::{SortError, SortResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Settings for one invocation of the visualizer: input shape, display, and clock-sort timing.
///
/// Every field has a default, so a JSON file only needs the keys it wants to change.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Number of values in the generated input.
    pub count: usize,
    /// Inclusive value ceiling.
    pub max: u32,
    /// Numeric fill mode (`1` below, `2` above, else exact).
    pub mode: i64,
    /// Terminal frame rate.
    pub fps: u32,
    /// Seed for the input generator; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Clock-sort delay per unit of value, in milliseconds.
    pub clock_tick_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: 30,
            max: 9,
            mode: 1,
            fps: 10,
            seed: None,
            clock_tick_ms: 250,
        }
    }
}

impl RunConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SortResult<Self> {
        serde_json::from_reader(r).map_err(|e| SortError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SortResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SortError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that the settings describe a runnable configuration.
    ///
    /// `max` may be `0`: every value is then `0` and renderers draw a single row.
    pub fn validate(&self) -> SortResult<()> {
        self.fps()?;
        Ok(())
    }

    /// Terminal frame rate.
    pub fn fps(&self) -> SortResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// Sort-side view of the settings.
    pub fn sort_config(&self) -> SortConfig {
        SortConfig::new(self.max).with_clock_tick(Duration::from_millis(self.clock_tick_ms))
    }

    /// Renderer-side view of the settings.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max: self.max,
            mode: FillMode::from_code(self.mode),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
