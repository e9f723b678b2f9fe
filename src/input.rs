//! Input selection and line-oriented input

use std::io::BufRead;

use crate::cli_error;
use crate::error::{PunygenError, Result};

/// Where the letters and words to process come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Letter(String),
    Word(String),
    Stdin,
}

impl InputSource {
    /// Pick the single active input method.
    ///
    /// Empty strings count as not provided. Zero or more than one active
    /// method is a CLI error.
    pub fn select(letter: Option<String>, word: Option<String>, stdin: bool) -> Result<Self> {
        let letter = letter.filter(|s| !s.is_empty());
        let word = word.filter(|s| !s.is_empty());

        let active = [letter.is_some(), word.is_some(), stdin]
            .iter()
            .filter(|&&active| active)
            .count();
        match active {
            0 => Err(cli_error!("Please provide input via -l, -w, or -s")),
            1 => Ok(match (letter, word) {
                (Some(letter), _) => InputSource::Letter(letter),
                (_, Some(word)) => InputSource::Word(word),
                _ => InputSource::Stdin,
            }),
            _ => Err(cli_error!("Only one input method allowed at a time")),
        }
    }
}

/// One unit of work read from a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputItem {
    Letter(String),
    Word(String),
}

impl InputItem {
    /// Classify a trimmed line: one character is a letter, more is a word.
    ///
    /// Blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut chars = line.chars();
        match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(_), None) => Some(InputItem::Letter(line.to_string())),
            _ => Some(InputItem::Word(line.to_string())),
        }
    }
}

/// Feed every non-blank line of `reader` to `handle`, in order.
///
/// Returns the number of items handled. A read failure stops processing
/// and is reported as an `Io` error against `<stdin>`; items already
/// handled are not rolled back.
pub fn for_each_line<R, F>(reader: R, mut handle: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(InputItem) -> Result<()>,
{
    let mut handled = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            PunygenError::io(format!("line {}: {}", index + 1, e), Some("<stdin>".to_string()))
        })?;

        if let Some(item) = InputItem::from_line(&line) {
            handle(item)?;
            handled += 1;
        }
    }

    tracing::debug!(items = %handled, "Line input processed");
    Ok(handled)
}
