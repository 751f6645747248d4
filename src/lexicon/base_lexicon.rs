// Copyright 2025 cmc-tokenizer contributors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fancy_regex::escape;
use hashbrown::HashSet;
use itertools::Itertools;

use crate::error::TokenizerError;

/// # Lexicon
/// A deduplicated list of literal strings, ordered longest-first so that an
/// alternation compiled from it always prefers the longest applicable
/// literal. Entries of equal length are ordered lexicographically, keeping
/// the compiled pattern deterministic across platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<String>,
}

impl Lexicon {
    /// Reads a lexicon from a plain-text file with one literal entry per
    /// line. Lines starting with `#` are comments, blank lines are ignored,
    /// surrounding whitespace is trimmed and duplicate entries are dropped.
    ///
    /// # Parameters
    /// - path (`AsRef<Path>`): path to the lexicon file
    ///
    /// # Example
    /// ```no_run
    /// use cmc_tokenizer::Lexicon;
    ///
    /// let abbreviations = Lexicon::from_file("lexicons/abbreviations.txt");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, TokenizerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TokenizerError::FileNotFound(format!(
                "{} lexicon file not found: {}",
                path.display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);
        let mut entries: Vec<String> = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| TokenizerError::LexiconParsingError(e.to_string()))?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            entries.push(entry.to_owned());
        }
        Ok(Lexicon::from_entries(entries))
    }

    /// Builds a lexicon from in-memory entries, deduplicating and ordering
    /// them longest-first.
    pub fn from_entries<I, S>(entries: I) -> Lexicon
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: HashSet<String> = entries.into_iter().map(Into::into).collect();
        let entries = unique
            .into_iter()
            .sorted_by(|a, b| {
                b.chars()
                    .count()
                    .cmp(&a.chars().count())
                    .then_with(|| a.cmp(b))
            })
            .collect();
        Lexicon { entries }
    }

    /// Returns the entries in longest-first order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins the escaped entries into a regex alternation. An empty lexicon
    /// yields a branch that cannot match anything (an empty alternation
    /// would match the empty string at every position).
    pub(crate) fn to_alternation(&self) -> String {
        if self.entries.is_empty() {
            return String::from(r"[^\s\S]");
        }
        self.entries.iter().map(|entry| escape(entry)).join("|")
    }
}
