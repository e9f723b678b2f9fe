//! Result presentation
//!
//! Renders letter and word variants as simple, detailed or JSON output.
//! Results go to `out`; warnings and "not found" notices go to `diag`.
//! Word results are written while the enumeration runs.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::encoding::{IdnaEncoder, PunycodeEncoder};
use crate::error::Result;
use crate::generator::{CombinationEnumerator, LetterGenerator};
use crate::homoglyph::HomoglyphTable;
use crate::input::{self, InputItem, InputSource};
use crate::types::{
    EnumerationSummary, GeneratorSettings, LetterVariants, OutputFormat, StopReason,
};

const RULE_WIDTH: usize = 40;

#[derive(Serialize)]
struct LetterOutput<'a> {
    letter: String,
    variants: Vec<VariantOutput<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct VariantOutput<'a> {
    glyph: String,
    punycode: &'a str,
}

/// Writes generator results in the configured format
pub struct Reporter<'t, W, D, E = PunycodeEncoder> {
    out: W,
    diag: D,
    settings: GeneratorSettings,
    table: &'t HomoglyphTable,
    encoder: E,
}

impl<W: Write, D: Write> Reporter<'static, W, D, PunycodeEncoder> {
    /// Reporter over the builtin table and the punycode encoder
    pub fn new(out: W, diag: D, settings: GeneratorSettings) -> Self {
        Self::with_encoder(out, diag, settings, HomoglyphTable::builtin(), PunycodeEncoder::new())
    }
}

impl<'t, W: Write, D: Write, E: IdnaEncoder> Reporter<'t, W, D, E> {
    pub fn with_encoder(
        out: W,
        diag: D,
        settings: GeneratorSettings,
        table: &'t HomoglyphTable,
        encoder: E,
    ) -> Self {
        Self {
            out,
            diag,
            settings,
            table,
            encoder,
        }
    }

    /// Process the selected input source; `stdin` is only read for `InputSource::Stdin`
    pub fn run<R: BufRead>(&mut self, source: InputSource, stdin: R) -> Result<()> {
        match source {
            InputSource::Letter(letter) => self.letter(&letter),
            InputSource::Word(word) => self.word(&word).map(|_| ()),
            InputSource::Stdin => self.lines(stdin).map(|_| ()),
        }
    }

    /// Process every non-blank line of `reader` as a letter or word
    pub fn lines<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        input::for_each_line(reader, |item| self.item(item))
    }

    pub fn item(&mut self, item: InputItem) -> Result<()> {
        match item {
            InputItem::Letter(letter) => self.letter(&letter),
            InputItem::Word(word) => self.word(&word).map(|_| ()),
        }
    }

    /// Report every table alternative of the first character of `input`
    pub fn letter(&mut self, input: &str) -> Result<()> {
        let generator = LetterGenerator::new(self.table, &self.encoder);

        let Some(variants) = generator.generate(input) else {
            match input.chars().next() {
                Some(c) => writeln!(
                    self.diag,
                    "No homoglyphs found for letter: {}",
                    c.to_lowercase()
                )?,
                None => writeln!(self.diag, "No homoglyphs found for empty letter input")?,
            }
            return Ok(());
        };

        match self.settings.format {
            OutputFormat::Json => self.letter_json(&variants)?,
            OutputFormat::Detailed => self.letter_detailed(&variants)?,
            OutputFormat::Simple => {
                for (_, punycode) in variants.encoded() {
                    writeln!(self.out, "{}", punycode)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn letter_json(&mut self, variants: &LetterVariants) -> Result<()> {
        let entries: Vec<VariantOutput<'_>> = variants
            .encoded()
            .map(|(glyph, punycode)| VariantOutput {
                glyph: glyph.to_string(),
                punycode,
            })
            .collect();

        let output = LetterOutput {
            letter: variants.letter.to_string(),
            total: entries.len(),
            variants: entries,
        };

        serde_json::to_writer_pretty(&mut self.out, &output)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn letter_detailed(&mut self, variants: &LetterVariants) -> Result<()> {
        writeln!(self.out, "Punycode variants for letter: '{}'", variants.letter)?;
        rule(&mut self.out)?;
        for variant in &variants.variants {
            match &variant.punycode {
                Some(punycode) => writeln!(self.out, "{} -> {}", variant.glyph, punycode)?,
                None => writeln!(self.out, "{} -> [ENCODING FAILED]", variant.glyph)?,
            }
        }
        rule(&mut self.out)?;
        writeln!(self.out, "Total variants: {}", variants.total())?;
        Ok(())
    }

    /// Enumerate and report homoglyph combinations of `word`
    pub fn word(&mut self, word: &str) -> Result<EnumerationSummary> {
        let max = self.settings.max_combinations;
        let format = self.settings.format;

        let mut enumerator =
            CombinationEnumerator::new(self.table, &self.encoder, self.settings.result_cap());
        if let Some(timeout) = self.settings.timeout {
            enumerator = enumerator.with_timeout(timeout);
        }
        let enumeration = enumerator.enumerate(word);
        let total = enumeration.total_combinations();

        if max < 0 || total > max as u128 {
            writeln!(
                self.diag,
                "Warning: {} total combinations possible, limiting to {}",
                total, max
            )?;
        }

        match format {
            OutputFormat::Json => {
                writeln!(self.out, "{{")?;
                writeln!(self.out, "  \"word\": {},", serde_json::to_string(word)?)?;
                write!(self.out, "  \"variants\": [")?;
            }
            OutputFormat::Detailed => {
                writeln!(self.out, "Punycode variants for word: '{}'", word)?;
                rule(&mut self.out)?;
                writeln!(
                    self.out,
                    "Generating up to {} combinations from {} total possible",
                    max, total
                )?;
                rule(&mut self.out)?;
            }
            OutputFormat::Simple => {}
        }

        let out = &mut self.out;
        let mut first = true;
        let summary = enumeration.run(|candidate| {
            match format {
                OutputFormat::Json => {
                    let separator = if first { "" } else { "," };
                    let entry = serde_json::to_string(&candidate.ascii)?;
                    write!(out, "{}\n    {}", separator, entry)?;
                }
                OutputFormat::Detailed => {
                    writeln!(out, "{} -> {}", candidate.unicode, candidate.ascii)?
                }
                OutputFormat::Simple => writeln!(out, "{}", candidate.ascii)?,
            }
            first = false;
            Ok(())
        })?;

        match format {
            OutputFormat::Json => {
                if summary.emitted > 0 {
                    write!(self.out, "\n  ")?;
                }
                writeln!(self.out, "],")?;
                writeln!(self.out, "  \"total\": {}", summary.emitted)?;
                writeln!(self.out, "}}")?;
            }
            OutputFormat::Detailed => {
                rule(&mut self.out)?;
                writeln!(self.out, "Total combinations: {}", summary.emitted)?;
            }
            OutputFormat::Simple => {}
        }

        if summary.stop_reason == StopReason::DeadlineExceeded {
            writeln!(
                self.diag,
                "Warning: deadline reached after {} results",
                summary.emitted
            )?;
        }

        self.out.flush()?;
        Ok(summary)
    }
}

fn rule<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}
