//! Homoglyph variant generation
//!
//! `letter` pairs each table alternative of one letter with its encoding.
//! `combinations` walks the substitution cross-product of a whole word.

mod combinations;
mod letter;

pub use combinations::{CombinationEnumerator, Enumeration};
pub use letter::LetterGenerator;
