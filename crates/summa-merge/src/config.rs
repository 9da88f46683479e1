use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// Default cap on merge rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 9999;

/// Configuration for the [`FixpointEngine`](crate::FixpointEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hard upper bound on merge rounds. Reaching it ends the call with
    /// whatever sequence the last round produced.
    pub max_iterations: usize,
    /// Emit a `warn` event when a call stops at the bound instead of at a
    /// fixpoint.
    pub warn_on_exhaustion: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            warn_on_exhaustion: true,
        }
    }
}

impl EngineConfig {
    /// Replace the round bound.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Turn the exhaustion warning on or off.
    pub fn with_exhaustion_warning(mut self, enabled: bool) -> Self {
        self.warn_on_exhaustion = enabled;
        self
    }

    /// Check that the configuration can drive an engine.
    pub fn validate(&self) -> MergeResult<()> {
        if self.max_iterations == 0 {
            return Err(MergeError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their
    /// defaults.
    pub fn from_toml_str(text: &str) -> MergeResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
