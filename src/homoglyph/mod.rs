//! Homoglyph substitution table
//!
//! Maps a lowercase Latin letter to the ordered set of characters that look
//! like it. The table is immutable; callers lower-case input before lookup.

mod table;

use table::LATIN_HOMOGLYPHS;

static BUILTIN: HomoglyphTable = HomoglyphTable::new(LATIN_HOMOGLYPHS);

/// Read-only mapping from a base character to its confusable alternatives
#[derive(Debug, Clone, Copy)]
pub struct HomoglyphTable {
    entries: &'static [(char, &'static [char])],
}

impl HomoglyphTable {
    /// Wrap a static list of `(base, alternatives)` entries.
    ///
    /// Keys are expected to be unique; the first matching entry wins.
    pub const fn new(entries: &'static [(char, &'static [char])]) -> Self {
        Self { entries }
    }

    /// The builtin a-z table shared by the whole process
    pub fn builtin() -> &'static HomoglyphTable {
        &BUILTIN
    }

    /// Alternatives for `c` in table order, or `None` when `c` has no entry.
    ///
    /// Performs no case folding.
    pub fn lookup(&self, c: char) -> Option<&'static [char]> {
        self.entries
            .iter()
            .find(|(base, _)| *base == c)
            .map(|(_, alternatives)| *alternatives)
    }
}
