//! Core types and structures for punygen

use crate::config_error;
use crate::error::{PunygenError, Result};
use std::str::FromStr;
use std::time::Duration;

/// Default cap on emitted word-mode results
pub const DEFAULT_MAX_COMBINATIONS: i64 = 1000;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Just the punycode results
    #[default]
    Simple,
    /// Pretty formatted with headers and counts
    Detailed,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Simple => write!(f, "simple"),
            OutputFormat::Detailed => write!(f, "detailed"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PunygenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "detailed" => Ok(OutputFormat::Detailed),
            "json" => Ok(OutputFormat::Json),
            other => Err(PunygenError::config(format!(
                "unknown output format '{}' (expected simple, detailed or json)",
                other
            ))),
        }
    }
}

/// One table alternative for a letter, paired with its encoding.
///
/// `punycode` is `None` when the encoder rejected the glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphVariant {
    pub glyph: char,
    pub punycode: Option<String>,
}

impl GlyphVariant {
    pub fn is_encoded(&self) -> bool {
        self.punycode.is_some()
    }
}

/// Every table alternative of a single letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterVariants {
    /// The lower-cased letter that was looked up
    pub letter: char,
    /// One entry per table alternative, in table order
    pub variants: Vec<GlyphVariant>,
}

impl LetterVariants {
    /// Alternatives whose encoding succeeded, as `(glyph, punycode)` pairs
    pub fn encoded(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.variants
            .iter()
            .filter_map(|v| v.punycode.as_deref().map(|p| (v.glyph, p)))
    }

    /// Number of table alternatives, encodable or not
    pub fn total(&self) -> usize {
        self.variants.len()
    }
}

/// A fully built candidate that encoded successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCandidate {
    /// The Unicode form of the candidate
    pub unicode: String,
    /// The IDNA ASCII form
    pub ascii: String,
}

/// Why an enumeration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every candidate was visited
    Exhausted,
    /// The emitted-result cap was reached
    CapReached,
    /// The caller's deadline passed
    DeadlineExceeded,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Exhausted => write!(f, "exhausted"),
            StopReason::CapReached => write!(f, "cap_reached"),
            StopReason::DeadlineExceeded => write!(f, "deadline_exceeded"),
        }
    }
}

/// Counters reported after a word enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationSummary {
    /// Product of `(1 + alternatives)` over all positions, saturating at `u128::MAX`
    pub total_combinations: u128,
    /// Successfully encoded candidates handed to the sink
    pub emitted: usize,
    /// Fully built candidates passed to the encoder
    pub visited: u64,
    /// Visited candidates the encoder rejected
    pub failed: u64,
    pub stop_reason: StopReason,
}

/// Generator defaults, read from the environment and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub format: OutputFormat,
    pub max_combinations: i64,
    pub timeout: Option<Duration>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Simple,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            timeout: None,
        }
    }
}

impl GeneratorSettings {
    /// Read `PUNYGEN_FORMAT`, `PUNYGEN_MAX_COMBINATIONS` and `PUNYGEN_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(format) = lookup("PUNYGEN_FORMAT") {
            settings.format = format.parse()?;
        }

        if let Some(max) = lookup("PUNYGEN_MAX_COMBINATIONS") {
            settings.max_combinations = max
                .trim()
                .parse()
                .map_err(|_| {
                    config_error!("PUNYGEN_MAX_COMBINATIONS is not an integer: '{}'", max)
                })?;
        }

        if let Some(secs) = lookup("PUNYGEN_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                config_error!("PUNYGEN_TIMEOUT_SECS is not a whole number of seconds: '{}'", secs)
            })?;
            settings.timeout = Some(Duration::from_secs(secs));
        }

        Ok(settings)
    }

    /// The cap as an unsigned count; non-positive values become zero
    pub fn result_cap(&self) -> usize {
        usize::try_from(self.max_combinations).unwrap_or(0)
    }
}
