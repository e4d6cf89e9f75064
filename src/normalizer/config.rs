use crate::extractors::DEFAULT_FALLBACK_PRECISION;

/// Default prefix for rendered approximate quantities.
///
/// Must not be a hedge word in any lexicon, or renderings would be matched
/// again on a second pass.
pub const DEFAULT_APPROXIMATE_PREFIX: &str = "≈";

/// Default suffix for rendered minute totals.
pub const DEFAULT_DURATION_SUFFIX: &str = "min";

/// Configuration for tag normalization.
///
/// Parsed from environment variables at call time with fallback defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizerConfig {
    /// Precision for hedges without a lexicon precision (default 0.10).
    pub fallback_precision: f64,
    /// Prefix of rendered approximate quantities (default "≈").
    pub approximate_prefix: String,
    /// Suffix of rendered minute totals (default "min").
    pub duration_suffix: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fallback_precision: DEFAULT_FALLBACK_PRECISION,
            approximate_prefix: DEFAULT_APPROXIMATE_PREFIX.to_string(),
            duration_suffix: DEFAULT_DURATION_SUFFIX.to_string(),
        }
    }
}

impl NormalizerConfig {
    /// Parses configuration from environment variables.
    ///
    /// Falls back to defaults when env vars are not set or invalid.
    ///
    /// # Environment Variables
    ///
    /// - `TAGNORM_FALLBACK_PRECISION` (f64 in [0, 1], default 0.10)
    /// - `TAGNORM_APPROX_PREFIX` (string, default "≈")
    /// - `TAGNORM_DURATION_SUFFIX` (string, default "min")
    ///
    /// # Examples
    ///
    /// ```
    /// use tagnorm::normalizer::NormalizerConfig;
    ///
    /// let config = NormalizerConfig::from_env();
    /// assert!((0.0..=1.0).contains(&config.fallback_precision));
    /// ```
    pub fn from_env() -> Self {
        let fallback_precision = std::env::var("TAGNORM_FALLBACK_PRECISION")
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|p| p.is_finite())
            .map(|p| p.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_FALLBACK_PRECISION);

        let approximate_prefix = std::env::var("TAGNORM_APPROX_PREFIX")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_APPROXIMATE_PREFIX.to_string());

        let duration_suffix = std::env::var("TAGNORM_DURATION_SUFFIX")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DURATION_SUFFIX.to_string());

        Self {
            fallback_precision,
            approximate_prefix,
            duration_suffix,
        }
    }
}
