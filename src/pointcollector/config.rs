use crate::error::{PointsError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = "pointcollector.json";

/// Configuration for pointcollector, stored in `pointcollector.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsConfig {
    /// Where teams are saved and loaded from
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Grow chart bars frame by frame when drawing to a terminal
    #[serde(default = "default_animate")]
    pub animate: bool,

    #[serde(default = "default_animation_steps")]
    pub animation_steps: u32,

    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,

    /// Width in columns of the longest chart bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_animate() -> bool {
    true
}

fn default_animation_steps() -> u32 {
    20
}

fn default_frame_delay_ms() -> u64 {
    20
}

fn default_chart_width() -> usize {
    40
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            animate: default_animate(),
            animation_steps: default_animation_steps(),
            frame_delay_ms: default_frame_delay_ms(),
            chart_width: default_chart_width(),
        }
    }
}

impl PointsConfig {
    /// Reads `pointcollector.json` from the first of `search_dirs` that has one.
    ///
    /// Falls back to defaults when none does. A file that exists but does not
    /// parse or validate is an error, not a fallback.
    pub fn load<P: AsRef<Path>>(search_dirs: &[P]) -> Result<Self> {
        for dir in search_dirs {
            let path = dir.as_ref().join(CONFIG_FILENAME);
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            let config: PointsConfig = serde_json::from_str(&content)?;
            config.validate()?;
            debug!(path = %path.display(), "loaded configuration");
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Writes the config into `dir`, creating it if needed, and returns the file path.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        fs::create_dir_all(dir.as_ref())?;
        let path = dir.as_ref().join(CONFIG_FILENAME);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    fn validate(&self) -> Result<()> {
        if self.animation_steps == 0 {
            return Err(PointsError::Config(
                "animation_steps must be at least 1".to_string(),
            ));
        }
        if self.chart_width == 0 {
            return Err(PointsError::Config(
                "chart_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
