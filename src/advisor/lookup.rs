/// Command advisor
///
/// Exact lookups, misspelling lookups, and the swappable finder behind both.

use crate::advisor::candidates::similar_words;
use crate::advisor::finder::{Finder, NotImplementedFinder, Suggestion};
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// Shortest word we bother looking for misspellings of
pub const MIN_FUZZY_LEN: usize = 3;

/// Longest word we bother looking for misspellings of
pub const MAX_FUZZY_LEN: usize = 256;

/// What the advisor found for a command that didn't run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    /// Snaps that ship the command under exactly that name
    Exact(Vec<Suggestion>),
    /// Nothing exact, but these ship something one typo away
    Misspelled(Vec<Suggestion>),
    NotFound,
}

pub struct Advisor {
    finder: RwLock<Arc<dyn Finder>>,
    min_len: usize,
    max_len: usize,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(Arc::new(NotImplementedFinder))
    }
}

impl Advisor {
    pub fn new(finder: Arc<dyn Finder>) -> Self {
        Self::with_limits(finder, MIN_FUZZY_LEN, MAX_FUZZY_LEN)
    }

    /// Create an advisor with custom bounds for `find_fuzzy`
    pub fn with_limits(finder: Arc<dyn Finder>, min_len: usize, max_len: usize) -> Self {
        Self {
            finder: RwLock::new(finder),
            min_len,
            max_len,
        }
    }

    /// The finder currently answering lookups
    pub fn finder(&self) -> Arc<dyn Finder> {
        self.finder.read().clone()
    }

    /// Swap in a new finder
    ///
    /// The previous finder comes back when the returned guard is restored
    /// or dropped.
    pub fn replace_finder(&self, finder: Arc<dyn Finder>) -> RestoreFinder<'_> {
        let previous = std::mem::replace(&mut *self.finder.write(), finder);
        RestoreFinder {
            advisor: self,
            previous: Some(previous),
        }
    }

    /// Snaps that provide exactly `command`
    pub async fn find_exact(&self, command: &str) -> Result<Vec<Suggestion>> {
        self.finder().find(command).await
    }

    /// Snaps that provide a command one edit away from `command`
    ///
    /// Words whose byte length is outside the bounds get an empty answer.
    /// Every candidate hit is appended as-is, so one suggestion can show up
    /// more than once.
    /// The first finder error aborts the whole lookup.
    pub async fn find_fuzzy(&self, command: &str) -> Result<Vec<Suggestion>> {
        let len = command.len();
        if len < self.min_len || len > self.max_len {
            trace!(command, len, "outside fuzzy length bounds");
            return Ok(Vec::new());
        }

        let finder = self.finder();
        let candidates = similar_words(command);
        debug!(command, candidates = candidates.len(), "fuzzy lookup");

        let mut alternatives = Vec::new();
        for word in &candidates {
            let found = finder.find(word).await?;
            if !found.is_empty() {
                trace!(candidate = %word, hits = found.len(), "candidate matched");
                alternatives.extend(found);
            }
        }

        Ok(alternatives)
    }

    /// Exact lookup first, misspellings only when that comes back empty
    pub async fn advise(&self, command: &str) -> Result<Advice> {
        let exact = self.find_exact(command).await?;
        if !exact.is_empty() {
            return Ok(Advice::Exact(exact));
        }

        let fuzzy = self.find_fuzzy(command).await?;
        if !fuzzy.is_empty() {
            return Ok(Advice::Misspelled(fuzzy));
        }

        Ok(Advice::NotFound)
    }
}

/// Puts the previous finder back into an `Advisor`
#[must_use = "the previous finder is restored as soon as this is dropped"]
pub struct RestoreFinder<'a> {
    advisor: &'a Advisor,
    previous: Option<Arc<dyn Finder>>,
}

impl RestoreFinder<'_> {
    pub fn restore(mut self) {
        self.put_back();
    }

    fn put_back(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.advisor.finder.write() = previous;
        }
    }
}

impl Drop for RestoreFinder<'_> {
    fn drop(&mut self) {
        self.put_back();
    }
}
