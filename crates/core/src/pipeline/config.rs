use serde::{Deserialize, Serialize};

/// Pipeline behavior configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Advance fully organized torrents to the seeding stage.
    ///
    /// Off by default: a run that only reports what it did is safe to
    /// point at a live download directory.
    #[serde(default)]
    pub advance_completed: bool,
}

impl PipelineConfig {
    /// Sets whether fully organized torrents advance to seeding.
    pub fn with_advance_completed(mut self, advance: bool) -> Self {
        self.advance_completed = advance;
        self
    }
}
