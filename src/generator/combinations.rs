//! Combination enumerator
//!
//! Walks a word position by position. At each position the original
//! character is tried first, then every table alternative in table order.
//! Completed candidates are encoded and handed to a sink until the result
//! cap is hit, the deadline passes, or the search space is exhausted.
//!
//! The cap bounds emitted results, not work: candidates the encoder rejects
//! do not count, so a word whose candidates mostly fail can be walked in full.

use std::time::{Duration, Instant};

use crate::encoding::IdnaEncoder;
use crate::error::Result;
use crate::homoglyph::HomoglyphTable;
use crate::types::{EncodedCandidate, EnumerationSummary, StopReason};

/// Configured enumerator; cheap to build per word
pub struct CombinationEnumerator<'t, E> {
    table: &'t HomoglyphTable,
    encoder: E,
    max_results: usize,
    deadline: Option<Instant>,
}

impl<'t, E: IdnaEncoder> CombinationEnumerator<'t, E> {
    /// Create an enumerator emitting at most `max_results` encoded candidates
    pub fn new(table: &'t HomoglyphTable, encoder: E, max_results: usize) -> Self {
        Self {
            table,
            encoder,
            max_results,
            deadline: None,
        }
    }

    /// Abort the traversal once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort the traversal `timeout` from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Prepare `word` for enumeration. The word is lower-cased here.
    pub fn enumerate(&self, word: &str) -> Enumeration<'_, 't, E> {
        let positions: Vec<Position> = word
            .to_lowercase()
            .chars()
            .map(|original| Position {
                original,
                alternatives: self.table.lookup(original).unwrap_or(&[]),
            })
            .collect();

        let total_combinations = positions.iter().fold(1u128, |acc, p| {
            acc.saturating_mul(1 + p.alternatives.len() as u128)
        });

        Enumeration {
            enumerator: self,
            positions,
            total_combinations,
        }
    }

    /// Product of `(1 + alternatives)` over the lower-cased word
    pub fn total_combinations(&self, word: &str) -> u128 {
        self.enumerate(word).total_combinations()
    }

    /// Run the traversal, collecting emitted candidates in order
    pub fn collect(&self, word: &str) -> Result<(Vec<EncodedCandidate>, EnumerationSummary)> {
        let mut results = Vec::new();
        let summary = self.enumerate(word).run(|candidate| {
            results.push(candidate);
            Ok(())
        })?;
        Ok((results, summary))
    }
}

#[derive(Debug, Clone, Copy)]
struct Position {
    original: char,
    alternatives: &'static [char],
}

/// A word ready to be enumerated
pub struct Enumeration<'e, 't, E> {
    enumerator: &'e CombinationEnumerator<'t, E>,
    positions: Vec<Position>,
    total_combinations: u128,
}

impl<'e, 't, E: IdnaEncoder> Enumeration<'e, 't, E> {
    /// Size of the full search space; not clamped by the cap
    pub fn total_combinations(&self) -> u128 {
        self.total_combinations
    }

    /// Walk the search space depth first, feeding each encoded candidate to `sink`.
    ///
    /// A sink error stops the walk and is returned as is.
    pub fn run<F>(self, sink: F) -> Result<EnumerationSummary>
    where
        F: FnMut(EncodedCandidate) -> Result<()>,
    {
        let started = Instant::now();
        let capacity: usize = self
            .positions
            .iter()
            .map(|p| {
                p.alternatives
                    .iter()
                    .map(|c| c.len_utf8())
                    .max()
                    .unwrap_or(0)
                    .max(p.original.len_utf8())
            })
            .sum();

        let mut traversal = Traversal {
            positions: &self.positions,
            encoder: &self.enumerator.encoder,
            max_results: self.enumerator.max_results,
            deadline: self.enumerator.deadline,
            sink,
            buffer: String::with_capacity(capacity),
            emitted: 0,
            visited: 0,
            failed: 0,
            stopped: None,
        };

        traversal.descend(0)?;

        let summary = EnumerationSummary {
            total_combinations: self.total_combinations,
            emitted: traversal.emitted,
            visited: traversal.visited,
            failed: traversal.failed,
            stop_reason: traversal.stopped.unwrap_or(StopReason::Exhausted),
        };

        tracing::debug!(
            positions = %self.positions.len(),
            total_combinations = %summary.total_combinations,
            emitted = %summary.emitted,
            visited = %summary.visited,
            failed = %summary.failed,
            stop_reason = %summary.stop_reason,
            duration_ms = %started.elapsed().as_millis(),
            "Combination enumeration finished"
        );

        Ok(summary)
    }
}

/// Mutable state owned by one run
struct Traversal<'a, E, F> {
    positions: &'a [Position],
    encoder: &'a E,
    max_results: usize,
    deadline: Option<Instant>,
    sink: F,
    buffer: String,
    emitted: usize,
    visited: u64,
    failed: u64,
    stopped: Option<StopReason>,
}

impl<'a, E, F> Traversal<'a, E, F>
where
    E: IdnaEncoder,
    F: FnMut(EncodedCandidate) -> Result<()>,
{
    fn should_stop(&mut self) -> bool {
        if self.stopped.is_some() {
            return true;
        }
        if self.emitted >= self.max_results {
            self.stopped = Some(StopReason::CapReached);
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stopped = Some(StopReason::DeadlineExceeded);
                return true;
            }
        }
        false
    }

    fn descend(&mut self, pos: usize) -> Result<()> {
        if self.should_stop() {
            return Ok(());
        }

        let Some(&Position { original, alternatives }) = self.positions.get(pos) else {
            return self.visit();
        };

        let mark = self.buffer.len();

        // Identity branch first
        self.buffer.push(original);
        let outcome = self.descend(pos + 1);
        self.buffer.truncate(mark);
        outcome?;

        for &alternative in alternatives {
            if self.should_stop() {
                break;
            }
            self.buffer.push(alternative);
            let outcome = self.descend(pos + 1);
            self.buffer.truncate(mark);
            outcome?;
        }

        Ok(())
    }

    fn visit(&mut self) -> Result<()> {
        self.visited += 1;

        match self.encoder.to_ascii(&self.buffer) {
            Ok(ascii) => {
                self.emitted += 1;
                (self.sink)(EncodedCandidate {
                    unicode: self.buffer.clone(),
                    ascii,
                })
            }
            Err(e) => {
                self.failed += 1;
                tracing::trace!(
                    candidate = %self.buffer,
                    error = %e,
                    "Candidate rejected by encoder"
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PunycodeEncoder;
    use crate::error::PunygenError;
    use std::cell::Cell;

    /// Echoes its input, counting calls; rejects anything containing a listed char
    struct FakeEncoder {
        calls: Cell<u64>,
        reject: &'static [char],
    }

    impl FakeEncoder {
        fn accepting() -> Self {
            Self {
                calls: Cell::new(0),
                reject: &[],
            }
        }

        fn rejecting(reject: &'static [char]) -> Self {
            Self {
                calls: Cell::new(0),
                reject,
            }
        }
    }

    impl IdnaEncoder for FakeEncoder {
        fn to_ascii(&self, input: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            if input.is_empty() || input.chars().any(|c| self.reject.contains(&c)) {
                return Err(PunygenError::encoding(input, "rejected"));
            }
            Ok(input.to_string())
        }
    }

    static TABLE: &[(char, &[char])] = &[('a', &['1', '2']), ('b', &['3'])];

    fn words(results: &[EncodedCandidate]) -> Vec<&str> {
        results.iter().map(|c| c.unicode.as_str()).collect()
    }

    #[test]
    fn test_traversal_order() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 100);
        let (results, summary) = enumerator.collect("ab").unwrap();

        assert_eq!(words(&results), vec!["ab", "a3", "1b", "13", "2b", "23"]);
        assert_eq!(summary.total_combinations, 6);
        assert_eq!(summary.visited, 6);
        assert_eq!(summary.emitted, 6);
        assert_eq!(summary.stop_reason, StopReason::Exhausted);
    }

    #[test]
    fn test_pass_through_positions() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 100);
        let (results, summary) = enumerator.collect("x-b").unwrap();

        assert_eq!(words(&results), vec!["x-b", "x-3"]);
        assert_eq!(summary.total_combinations, 2);
    }

    #[test]
    fn test_cap_stops_early() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 2);
        let (results, summary) = enumerator.collect("ab").unwrap();

        assert_eq!(words(&results), vec!["ab", "a3"]);
        assert_eq!(summary.stop_reason, StopReason::CapReached);
        assert_eq!(summary.visited, 2);
        assert_eq!(encoder.calls.get(), 2);
        assert_eq!(summary.total_combinations, 6);
    }

    #[test]
    fn test_cap_zero_visits_nothing() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 0);
        let (results, summary) = enumerator.collect("ab").unwrap();

        assert!(results.is_empty());
        assert_eq!(summary.visited, 0);
        assert_eq!(encoder.calls.get(), 0);
        assert_eq!(summary.stop_reason, StopReason::CapReached);
    }

    #[test]
    fn test_failures_do_not_count_toward_cap() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::rejecting(&['1', '3']);
        let enumerator = CombinationEnumerator::new(&table, &encoder, 2);
        let (results, summary) = enumerator.collect("ab").unwrap();

        // ab, a3(x), 1b(x), 13(x), 2b
        assert_eq!(words(&results), vec!["ab", "2b"]);
        assert_eq!(summary.visited, 5);
        assert_eq!(summary.failed, 3);
        assert_eq!(summary.stop_reason, StopReason::CapReached);
    }

    #[test]
    fn test_all_failures_walks_everything() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::rejecting(&['a', '1', '2']);
        let enumerator = CombinationEnumerator::new(&table, &encoder, 1);
        let (results, summary) = enumerator.collect("aa").unwrap();

        assert!(results.is_empty());
        assert_eq!(summary.visited, 9);
        assert_eq!(summary.visited as u128, summary.total_combinations);
        assert_eq!(summary.stop_reason, StopReason::Exhausted);
    }

    #[test]
    fn test_empty_word() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 10);
        let (results, summary) = enumerator.collect("").unwrap();

        assert!(results.is_empty());
        assert_eq!(summary.total_combinations, 1);
        assert_eq!(summary.visited, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_word_is_lowercased() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 100);
        let (results, _) = enumerator.collect("AB").unwrap();
        assert_eq!(results[0].unicode, "ab");
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn test_deadline_in_the_past_stops_immediately() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator =
            CombinationEnumerator::new(&table, &encoder, 100).with_deadline(Instant::now());
        let (results, summary) = enumerator.collect("ab").unwrap();

        assert!(results.is_empty());
        assert_eq!(summary.stop_reason, StopReason::DeadlineExceeded);
    }

    #[test]
    fn test_sink_error_aborts() {
        let table = HomoglyphTable::new(TABLE);
        let encoder = FakeEncoder::accepting();
        let enumerator = CombinationEnumerator::new(&table, &encoder, 100);
        let mut seen = 0;
        let outcome = enumerator.enumerate("ab").run(|_| {
            seen += 1;
            if seen == 3 {
                Err(PunygenError::io("broken pipe", None))
            } else {
                Ok(())
            }
        });

        assert!(outcome.is_err());
        assert_eq!(seen, 3);
        assert_eq!(encoder.calls.get(), 3);
    }

    #[test]
    fn test_total_combinations_builtin() {
        let table = HomoglyphTable::builtin();
        let enumerator = CombinationEnumerator::new(table, PunycodeEncoder::new(), 1);
        assert_eq!(enumerator.total_combinations("test"), 35 * 44 * 37 * 35);
        assert_eq!(enumerator.total_combinations("123"), 1);
    }

    #[test]
    fn test_total_combinations_saturates() {
        let table = HomoglyphTable::builtin();
        let enumerator = CombinationEnumerator::new(table, PunycodeEncoder::new(), 1);
        let long = "o".repeat(200);
        assert_eq!(enumerator.total_combinations(&long), u128::MAX);
    }

    #[test]
    fn test_identity_first_with_real_encoder() {
        let table = HomoglyphTable::builtin();
        let enumerator = CombinationEnumerator::new(table, PunycodeEncoder::new(), 1);
        let (results, summary) = enumerator.collect("test").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].ascii, "test");
        assert_eq!(summary.stop_reason, StopReason::CapReached);
    }

    #[test]
    fn test_deterministic() {
        let table = HomoglyphTable::builtin();
        let enumerator = CombinationEnumerator::new(table, PunycodeEncoder::new(), 50);
        let (first, _) = enumerator.collect("go").unwrap();
        let (second, _) = enumerator.collect("go").unwrap();
        assert_eq!(first, second);
        assert!(first.len() <= 50);
    }
}
