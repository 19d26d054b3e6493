//! Engine configuration.

/// Configuration for the shadow poisoning engine.
#[derive(Debug, Clone)]
pub struct ShadowConfig {
    /// Encode the straddling granule at a live/redzone boundary with its
    /// trailing-unaddressable byte count. When off, the straddling
    /// granule stays fully addressable and sub-granule overruns into the
    /// redzone go undetected.
    pub partial_boundary_reporting: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            partial_boundary_reporting: true,
        }
    }
}

impl ShadowConfig {
    /// Builder pattern: set partial boundary reporting.
    pub fn with_partial_boundary_reporting(mut self, enable: bool) -> Self {
        self.partial_boundary_reporting = enable;
        self
    }

    /// Initialize from environment variables.
    ///
    /// Checks `SHADOWGRAIN_POISON_PARTIAL`:
    /// - "0", "false", "off" -> boundary reporting disabled
    /// - anything else (or unset) -> enabled
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(val) = std::env::var("SHADOWGRAIN_POISON_PARTIAL") {
            config.partial_boundary_reporting =
                !matches!(val.to_lowercase().as_str(), "0" | "false" | "off");
        }
        config
    }
}
