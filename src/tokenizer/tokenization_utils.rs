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

//! # Span replacement
//!
//! Matched spans are cut out of the working text and replaced by
//! placeholders; the [`ReplacementTable`] remembers which placeholder stands
//! for which original text and token class until the final whitespace split
//! restores them.

use fancy_regex::Regex;
use hashbrown::HashMap;
use itertools::Itertools;

use crate::error::TokenizerError;
use crate::tokenizer::base_tokenizer::{Token, TokenClass};

const PLACEHOLDER_LENGTH: usize = 7;
const PLACEHOLDER_ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Per-call mapping from placeholder strings to the tokens they stand for.
///
/// A table lives for exactly one `tokenize` call: it is created empty,
/// filled by every pipeline stage and consulted once at the end. Placeholder
/// generation is deterministic — a monotonically increasing counter encoded
/// as a fixed-width lowercase string. Candidates that occur in the current
/// working text or are already registered are skipped, which bounds the
/// number of skips by the length of the input.
pub(crate) struct ReplacementTable {
    entries: HashMap<String, Token>,
    next_id: u64,
}

impl ReplacementTable {
    pub fn new() -> ReplacementTable {
        ReplacementTable {
            entries: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `original` under a fresh placeholder and returns the
    /// placeholder.
    pub fn register(&mut self, text: &str, original: &str, token_class: TokenClass) -> String {
        let placeholder = self.next_placeholder(text);
        self.entries
            .insert(placeholder.clone(), Token::new(original, token_class));
        placeholder
    }

    /// Registers each part under its own fresh placeholder and returns the
    /// placeholders joined by single spaces, so the whitespace split sees
    /// one unit per part.
    pub fn register_parts(
        &mut self,
        text: &str,
        parts: &[&str],
        token_class: TokenClass,
    ) -> String {
        parts
            .iter()
            .map(|part| self.register(text, part, token_class))
            .join(" ")
    }

    /// Maps a whitespace-split unit back to its token; units without a
    /// registered placeholder are regular text.
    pub fn restore(&self, unit: &str) -> Token {
        self.entries
            .get(unit)
            .cloned()
            .unwrap_or_else(|| Token::new(unit, TokenClass::Regular))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn next_placeholder(&mut self, text: &str) -> String {
        loop {
            let candidate = encode_placeholder(self.next_id);
            self.next_id += 1;
            if !self.entries.contains_key(&candidate) && !text.contains(&candidate) {
                return candidate;
            }
        }
    }
}

fn encode_placeholder(mut id: u64) -> String {
    let mut bytes = Vec::with_capacity(PLACEHOLDER_LENGTH);
    loop {
        bytes.push(PLACEHOLDER_ALPHABET[(id % 26) as usize]);
        id /= 26;
        if id == 0 {
            break;
        }
    }
    while bytes.len() < PLACEHOLDER_LENGTH {
        bytes.push(b'a');
    }
    bytes.iter().rev().map(|&b| b as char).collect()
}

/// Replaces every non-overlapping match of `pattern` in `text` with
/// space-wrapped placeholders registered under `token_class`.
///
/// A pattern with named capture groups is multi-part: the match is split
/// into one sub-token per group, in group-name sort order, and replaced by
/// the placeholders joined with single spaces. Identical match text at
/// different spans is registered once and the placeholder reused — both
/// spans restore to the same original text and class.
pub(crate) fn replace_spans(
    text: &str,
    pattern: &Regex,
    token_class: TokenClass,
    table: &mut ReplacementTable,
) -> Result<String, TokenizerError> {
    let group_names = sorted_group_names(pattern);
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut replacements: HashMap<String, String> = HashMap::new();
    for captures in pattern.captures_iter(text) {
        let captures = captures?;
        let matched = captures.get(0).unwrap();
        spans.push((matched.start(), matched.end()));
        if replacements.contains_key(matched.as_str()) {
            continue;
        }
        let replacement = if group_names.is_empty() {
            table.register(text, matched.as_str(), token_class)
        } else {
            let parts: Vec<&str> = group_names
                .iter()
                .filter_map(|name| captures.name(name).map(|group| group.as_str()))
                .collect();
            table.register_parts(text, &parts, token_class)
        };
        replacements.insert(matched.as_str().to_owned(), replacement);
    }
    Ok(apply_replacements(text, spans, &replacements))
}

/// Applies the collected replacements rightmost first, so that earlier edits
/// do not invalidate the spans still to be applied. Each replacement is
/// wrapped in single spaces to keep it a separate unit for the final split.
pub(crate) fn apply_replacements(
    text: &str,
    mut spans: Vec<(usize, usize)>,
    replacements: &HashMap<String, String>,
) -> String {
    let mut output = text.to_owned();
    spans.sort_unstable();
    for &(begin, end) in spans.iter().rev() {
        let replacement = &replacements[&text[begin..end]];
        output.replace_range(begin..end, &format!(" {} ", replacement));
    }
    output
}

/// Named capture groups in sort order. Group names carry `a_`/`b_`/`c_`
/// prefixes so that sort order equals positional order.
fn sorted_group_names(pattern: &Regex) -> Vec<&str> {
    pattern.capture_names().flatten().sorted().collect()
}
