//! Punygen - homoglyph punycode variant generator
//!
//! Enumerates visually confusable substitutions of a letter or word and
//! encodes each candidate to its IDNA ASCII form, for building spoofed
//! domain wordlists.

pub mod encoding;
pub mod error;
pub mod generator;
pub mod homoglyph;
pub mod input;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{PunygenError, Result};
pub use types::{
    EncodedCandidate, EnumerationSummary, GeneratorSettings, GlyphVariant, LetterVariants,
    OutputFormat, StopReason,
};

// Re-export main functionality
pub use encoding::{IdnaEncoder, PunycodeEncoder};
pub use generator::{CombinationEnumerator, LetterGenerator};
pub use homoglyph::HomoglyphTable;
pub use input::{InputItem, InputSource};
pub use output::Reporter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
