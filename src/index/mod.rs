//! In-memory prefix index over compound names.
//!
//! Every name is expanded into its right-aligned token chains, and all keys are kept
//! in a single array sorted by bytes. A query locates one key starting with the prefix
//! and then walks outwards in both directions, collecting up to `MAX_RESULTS` distinct
//! names.

mod expand;
mod handle;
mod topk;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use expand::expand;
pub use handle::IndexHandle;
pub use topk::{Dedup, TopK};

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("line {line}: invalid score '{score}' for '{name}'")]
    InvalidRecord {
        line: usize,
        name: String,
        score: String,
    },
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Input row: a compound name and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub score: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Build a record from a raw score string. `line` is only used for error reporting.
    pub fn parse(line: usize, name: &str, score: &str) -> Result<Self, IndexError> {
        match score.trim().parse::<i64>() {
            Ok(s) => Ok(Self::new(name, s)),
            Err(_) => Err(IndexError::InvalidRecord {
                line,
                name: name.to_string(),
                score: score.to_string(),
            }),
        }
    }
}

/// A single sorted key pointing back to the name it was derived from.
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: Box<str>,
    pub full_name: Arc<str>,
    pub score: i64,
}

/// A query result. Serializes as `[name, score]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion(pub String, pub i64);

/// How the first matching key is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Window bisection that moves a bound to `mid` and gives up when neither bound
    /// moves. Can miss a match sitting at the upper edge of a two-key window.
    #[default]
    Compat,
    /// lower/upper bound over the run of keys sharing the prefix. Never misses.
    Strict,
}

/// Index behaviour, read from the `[index]` config section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    pub search: SearchMode,
    pub dedup: Dedup,
    /// Maximum prefix length in bytes.
    pub max_query_len: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            search: SearchMode::Compat,
            dedup: Dedup::FirstSeen,
            max_query_len: 256,
        }
    }
}

/// Immutable, sorted index of name keys.
#[derive(Debug)]
pub struct PrefixIndex {
    entries: Vec<Entry>,
    num_records: usize,
    opts: IndexOptions,
}

impl PrefixIndex {
    /// Build an index with default options.
    pub fn build<I>(records: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = Record>,
    {
        Self::build_with(records, IndexOptions::default())
    }

    /// Expand and sort all records. Fails if there are no records.
    pub fn build_with<I>(records: I, opts: IndexOptions) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut entries = Vec::new();
        let mut num_records = 0;
        for r in records {
            entries.extend(expand(&r.name, r.score));
            num_records += 1;
        }

        if num_records == 0 {
            return Err(IndexError::EmptyDataset);
        }

        // Stable, so equal keys stay in input order.
        entries.sort_by(|a, b| a.key.as_bytes().cmp(b.key.as_bytes()));

        Ok(Self {
            entries,
            num_records,
            opts,
        })
    }

    pub fn num_records(&self) -> usize {
        self.num_records
    }

    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn options(&self) -> &IndexOptions {
        &self.opts
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Return up to `MAX_RESULTS` distinct names having a key that starts with `prefix`,
    /// highest score first.
    pub fn top_k(&self, prefix: &str) -> Result<Vec<Suggestion>, IndexError> {
        self.validate_query(prefix)?;

        if prefix.is_empty() || self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let p = prefix.as_bytes();
        let found = match self.opts.search {
            SearchMode::Compat => self.locate_compat(p),
            SearchMode::Strict => self.locate_strict(p),
        };
        let Some(mid) = found else {
            return Ok(Vec::new());
        };

        let mut acc = TopK::new(self.opts.dedup);
        let is_match = |e: &&Entry| truncate(&e.key, p.len()) == p;

        // Walk left from the match (inclusive), then right from the next key.
        for e in self.entries[..=mid].iter().rev().take_while(is_match) {
            acc.offer(&e.full_name, e.score);
        }
        for e in self.entries[mid + 1..].iter().take_while(is_match) {
            acc.offer(&e.full_name, e.score);
        }

        Ok(acc
            .into_sorted()
            .into_iter()
            .map(|(name, score)| Suggestion(name.to_string(), score))
            .collect())
    }

    fn validate_query(&self, prefix: &str) -> Result<(), IndexError> {
        if prefix.len() > self.opts.max_query_len {
            return Err(IndexError::InvalidQuery(format!(
                "prefix is longer than {} bytes",
                self.opts.max_query_len
            )));
        }
        if prefix.chars().any(char::is_control) {
            return Err(IndexError::InvalidQuery(
                "prefix contains control characters".to_string(),
            ));
        }
        Ok(())
    }

    /// Bisect `[start, end]`, moving a bound onto `mid` each step, and stop as soon as
    /// an iteration moves neither bound.
    fn locate_compat(&self, p: &[u8]) -> Option<usize> {
        let mut start = 0;
        let mut end = self.entries.len() - 1;

        loop {
            let mid = (start + end) / 2;
            let (prev_start, prev_end) = (start, end);

            match p.cmp(truncate(&self.entries[mid].key, p.len())) {
                std::cmp::Ordering::Equal => return Some(mid),
                std::cmp::Ordering::Less => end = mid,
                std::cmp::Ordering::Greater => start = mid,
            }

            if start == prev_start && end == prev_end {
                return None;
            }
        }
    }

    /// First key of the run of keys starting with `p`, if the run is non-empty.
    fn locate_strict(&self, p: &[u8]) -> Option<usize> {
        let lo = self
            .entries
            .partition_point(|e| truncate(&e.key, p.len()) < p);
        let hi = self
            .entries
            .partition_point(|e| truncate(&e.key, p.len()) <= p);
        (lo < hi).then_some(lo)
    }
}

/// First `n` bytes of a key (or the whole key if shorter).
fn truncate(key: &str, n: usize) -> &[u8] {
    let b = key.as_bytes();
    &b[..n.min(b.len())]
}
