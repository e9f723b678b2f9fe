//! Single-letter variant generation

use crate::encoding::IdnaEncoder;
use crate::homoglyph::HomoglyphTable;
use crate::types::{GlyphVariant, LetterVariants};

/// Pairs every table alternative of a letter with its encoding
pub struct LetterGenerator<'t, E> {
    table: &'t HomoglyphTable,
    encoder: E,
}

impl<'t, E: IdnaEncoder> LetterGenerator<'t, E> {
    pub fn new(table: &'t HomoglyphTable, encoder: E) -> Self {
        Self { table, encoder }
    }

    /// Generate variants for the first character of `input`.
    ///
    /// Returns `None` for empty input or a letter with no table entry.
    pub fn generate(&self, input: &str) -> Option<LetterVariants> {
        let letter = input.chars().next()?;
        self.generate_char(letter)
    }

    /// Generate variants for `letter` after lower-casing it.
    ///
    /// Every alternative is returned; encode failures carry `punycode: None`.
    pub fn generate_char(&self, letter: char) -> Option<LetterVariants> {
        let letter = lowercase_char(letter);
        let alternatives = self.table.lookup(letter)?;

        let variants: Vec<GlyphVariant> = alternatives
            .iter()
            .map(|&glyph| {
                let mut buf = [0u8; 4];
                let punycode = match self.encoder.to_ascii(glyph.encode_utf8(&mut buf)) {
                    Ok(ascii) => Some(ascii),
                    Err(e) => {
                        tracing::trace!(
                            letter = %letter,
                            glyph = %glyph,
                            error = %e,
                            "Glyph rejected by encoder"
                        );
                        None
                    }
                };
                GlyphVariant { glyph, punycode }
            })
            .collect();

        tracing::debug!(
            letter = %letter,
            alternatives = %variants.len(),
            encoded = %variants.iter().filter(|v| v.is_encoded()).count(),
            "Letter variants generated"
        );

        Some(LetterVariants { letter, variants })
    }
}

/// Lower-case a single character, keeping the first code point of multi-char mappings
pub(crate) fn lowercase_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PunycodeEncoder;
    use crate::error::{PunygenError, Result};

    /// Accepts only the listed glyphs
    struct AllowList(&'static [char]);

    impl IdnaEncoder for AllowList {
        fn to_ascii(&self, input: &str) -> Result<String> {
            match input.chars().next() {
                Some(c) if self.0.contains(&c) => Ok(format!("xn--{}", c as u32)),
                _ => Err(PunygenError::encoding(input, "not allowed")),
            }
        }
    }

    static TINY: &[(char, &[char])] = &[('a', &['à', 'á', 'â'])];

    #[test]
    fn test_letter_a_produces_ace_labels() {
        let generator = LetterGenerator::new(HomoglyphTable::builtin(), PunycodeEncoder::new());
        let result = generator.generate("a").unwrap();

        assert_eq!(result.letter, 'a');
        assert_eq!(result.total(), 49);
        let first = &result.variants[0];
        assert_eq!(first.glyph, 'à');
        assert!(first.punycode.as_deref().unwrap().starts_with("xn--"));
    }

    #[test]
    fn test_uppercase_input_is_lowered() {
        let generator = LetterGenerator::new(HomoglyphTable::builtin(), PunycodeEncoder::new());
        let upper = generator.generate("A").unwrap();
        let lower = generator.generate("a").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_failures_are_tagged_not_dropped() {
        let table = HomoglyphTable::new(TINY);
        let generator = LetterGenerator::new(&table, AllowList(&['á']));
        let result = generator.generate_char('a').unwrap();

        assert_eq!(result.total(), 3);
        assert_eq!(result.variants[0].punycode, None);
        assert_eq!(result.variants[1].punycode.as_deref(), Some("xn--225"));
        assert_eq!(result.variants[2].punycode, None);
        assert_eq!(result.encoded().count(), 1);
    }

    #[test]
    fn test_no_variants() {
        let generator = LetterGenerator::new(HomoglyphTable::builtin(), PunycodeEncoder::new());
        assert!(generator.generate("").is_none());
        assert!(generator.generate("7").is_none());
        assert!(generator.generate("-").is_none());
    }

    #[test]
    fn test_only_first_character_is_used() {
        let table = HomoglyphTable::new(TINY);
        let generator = LetterGenerator::new(&table, AllowList(&['à']));
        assert_eq!(generator.generate("abc").unwrap().letter, 'a');
        assert!(generator.generate("ba").is_none());
    }
}
