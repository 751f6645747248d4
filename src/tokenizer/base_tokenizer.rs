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

use std::fmt;
use std::path::Path;

use fancy_regex::Regex;
use hashbrown::HashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TokenizerError;
use crate::lexicon::Lexicon;
use crate::tokenizer::patterns::*;
use crate::tokenizer::tokenization_utils::{apply_replacements, replace_spans, ReplacementTable};

/// # Semantic class of a token
/// The class vocabulary of the EmpiriST 2015 annotation guideline. Tokens
/// that no pattern claims are `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenClass {
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "XML_tag")]
    XmlTag,
    #[serde(rename = "email_address")]
    EmailAddress,
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "DOI")]
    Doi,
    #[serde(rename = "emoticon")]
    Emoticon,
    #[serde(rename = "mention")]
    Mention,
    #[serde(rename = "hashtag")]
    Hashtag,
    #[serde(rename = "action_word")]
    ActionWord,
    #[serde(rename = "abbreviation")]
    Abbreviation,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "ordinal")]
    Ordinal,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "amount")]
    Amount,
    #[serde(rename = "semester")]
    Semester,
    #[serde(rename = "measurement")]
    Measurement,
    #[serde(rename = "number_compound")]
    NumberCompound,
    #[serde(rename = "symbol")]
    Symbol,
}

impl TokenClass {
    /// Returns the class name used by the annotation guideline.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Regular => "regular",
            TokenClass::XmlTag => "XML_tag",
            TokenClass::EmailAddress => "email_address",
            TokenClass::Url => "URL",
            TokenClass::Doi => "DOI",
            TokenClass::Emoticon => "emoticon",
            TokenClass::Mention => "mention",
            TokenClass::Hashtag => "hashtag",
            TokenClass::ActionWord => "action_word",
            TokenClass::Abbreviation => "abbreviation",
            TokenClass::Date => "date",
            TokenClass::Time => "time",
            TokenClass::Ordinal => "ordinal",
            TokenClass::Number => "number",
            TokenClass::Amount => "amount",
            TokenClass::Semester => "semester",
            TokenClass::Measurement => "measurement",
            TokenClass::NumberCompound => "number_compound",
            TokenClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for TokenClass {
    fn default() -> TokenClass {
        TokenClass::Regular
    }
}

/// # Token
/// One unit of tokenizer output: the surface text and its semantic class.
/// Tokens are produced at the very end of the pipeline and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text, exactly as it occurred in the input
    pub text: String,
    /// Semantic class assigned by the pipeline
    pub token_class: TokenClass,
}

impl Token {
    /// Creates a new token from a text and its class.
    pub fn new(text: impl Into<String>, token_class: TokenClass) -> Token {
        Token {
            text: text.into(),
            token_class,
        }
    }

    /// Discards the class, keeping only the surface text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// What a pipeline stage does to the working text.
pub(crate) enum StageAction<'a> {
    /// Replace matches with placeholders registered under a token class
    Protect(&'a Regex, TokenClass),
    /// Rewrite matches in place, no mapping entry
    Rewrite(&'a Regex, &'static str),
    /// Collapse whitespace runs to single spaces
    CollapseWhitespace,
    /// Run the staged abbreviation resolver
    Abbreviations,
}

/// One named entry of the ordered pipeline. The order of the stage table is
/// the correctness mechanism of the whole tokenizer: every class that could
/// be corrupted by a later, broader pattern must be protected first.
pub(crate) struct Stage<'a> {
    pub name: &'static str,
    pub action: StageAction<'a>,
}

/// # Tokenizer for computer-mediated communication
/// Tokenizes one paragraph at a time according to the EmpiriST 2015
/// guideline for German social-media text. The tokenizer owns only
/// immutable compiled patterns, so one instance may serve concurrent
/// tokenization calls; all per-call state lives in a call-scoped
/// replacement table.
pub struct CmcTokenizer {
    patterns: LexiconPatterns,
    split_camel_case: bool,
}

impl CmcTokenizer {
    /// Builds a tokenizer from the four lexicon files.
    ///
    /// # Parameters
    /// - abbreviations: literal abbreviations not covered by the
    ///   letter-dot shape (`bzw.`, `usw.`, ...)
    /// - single_token_abbreviations: multi-dot abbreviations that must stay
    ///   one token (`Dipl.-Ing.`, ...)
    /// - tokens_with_plus_or_ampersand: literals like `C++` or `H&M` that
    ///   the symbol stages must not split
    /// - camel_case_tokens: camelCase words that must survive camelCase
    ///   splitting (`iPhone`, ...)
    /// - split_camel_case (`bool`): insert token boundaries at camelCase
    ///   humps
    ///
    /// # Example
    /// ```no_run
    /// use cmc_tokenizer::CmcTokenizer;
    ///
    /// let tokenizer = CmcTokenizer::from_files(
    ///     "lexicons/abbreviations.txt",
    ///     "lexicons/single_token_abbreviations.txt",
    ///     "lexicons/tokens_with_plus_or_ampersand.txt",
    ///     "lexicons/camel_case_tokens.txt",
    ///     false,
    /// );
    /// ```
    pub fn from_files(
        abbreviations: impl AsRef<Path>,
        single_token_abbreviations: impl AsRef<Path>,
        tokens_with_plus_or_ampersand: impl AsRef<Path>,
        camel_case_tokens: impl AsRef<Path>,
        split_camel_case: bool,
    ) -> Result<CmcTokenizer, TokenizerError> {
        CmcTokenizer::from_lexicons(
            Lexicon::from_file(abbreviations)?,
            Lexicon::from_file(single_token_abbreviations)?,
            Lexicon::from_file(tokens_with_plus_or_ampersand)?,
            Lexicon::from_file(camel_case_tokens)?,
            split_camel_case,
        )
    }

    /// Builds a tokenizer from a directory containing the four lexicon
    /// files under their conventional names (`abbreviations.txt`,
    /// `single_token_abbreviations.txt`, `tokens_with_plus_or_ampersand.txt`,
    /// `camel_case_tokens.txt`).
    pub fn from_lexicon_dir(
        dir: impl AsRef<Path>,
        split_camel_case: bool,
    ) -> Result<CmcTokenizer, TokenizerError> {
        let dir = dir.as_ref();
        CmcTokenizer::from_files(
            dir.join("abbreviations.txt"),
            dir.join("single_token_abbreviations.txt"),
            dir.join("tokens_with_plus_or_ampersand.txt"),
            dir.join("camel_case_tokens.txt"),
            split_camel_case,
        )
    }

    /// Builds a tokenizer from in-memory lexicons.
    pub fn from_lexicons(
        abbreviations: Lexicon,
        single_token_abbreviations: Lexicon,
        tokens_with_plus_or_ampersand: Lexicon,
        camel_case_tokens: Lexicon,
        split_camel_case: bool,
    ) -> Result<CmcTokenizer, TokenizerError> {
        let patterns = LexiconPatterns::compile(
            &abbreviations,
            &single_token_abbreviations,
            &tokens_with_plus_or_ampersand,
            &camel_case_tokens,
        )?;
        debug!(
            abbreviations = abbreviations.len(),
            single_token_abbreviations = single_token_abbreviations.len(),
            tokens_with_plus_or_ampersand = tokens_with_plus_or_ampersand.len(),
            camel_case_tokens = camel_case_tokens.len(),
            split_camel_case,
            "compiled lexicon patterns"
        );
        Ok(CmcTokenizer {
            patterns,
            split_camel_case,
        })
    }

    /// Tokenizes one paragraph (which may contain embedded newlines).
    ///
    /// Returns the tokens in original left-to-right order; empty input
    /// yields an empty sequence. Use [`Token::into_text`] to discard the
    /// class annotations.
    ///
    /// # Example
    /// ```no_run
    /// use cmc_tokenizer::CmcTokenizer;
    ///
    /// # fn main() -> Result<(), cmc_tokenizer::TokenizerError> {
    /// let tokenizer = CmcTokenizer::from_lexicon_dir("lexicons", false)?;
    /// let tokens = tokenizer.tokenize("Er kommt um 17:30 Uhr.")?;
    /// assert_eq!(tokens[3].text, "17:30");
    /// # Ok(())
    /// # }
    /// ```
    pub fn tokenize(&self, paragraph: &str) -> Result<Vec<Token>, TokenizerError> {
        let mut table = ReplacementTable::new();
        let mut text = paragraph.to_owned();
        for stage in self.stages() {
            trace!(stage = stage.name, "running pipeline stage");
            text = match stage.action {
                StageAction::Protect(pattern, token_class) => {
                    replace_spans(&text, pattern, token_class, &mut table)?
                }
                StageAction::Rewrite(pattern, replacement) => {
                    pattern.replace_all(&text, replacement).into_owned()
                }
                StageAction::CollapseWhitespace => SPACES.replace_all(&text, " ").into_owned(),
                StageAction::Abbreviations => self.replace_abbreviations(&text, &mut table)?,
            };
        }
        let tokens: Vec<Token> = text
            .split_whitespace()
            .map(|unit| table.restore(unit))
            .collect();
        trace!(
            tokens = tokens.len(),
            mappings = table.len(),
            "tokenized paragraph"
        );
        Ok(tokens)
    }

    /// Tokenizes a list of paragraphs in parallel. Safe because all
    /// per-call state is owned by each `tokenize` invocation.
    pub fn tokenize_list<S>(&self, paragraphs: &[S]) -> Result<Vec<Vec<Token>>, TokenizerError>
    where
        S: AsRef<str> + Sync,
    {
        paragraphs
            .par_iter()
            .map(|paragraph| self.tokenize(paragraph.as_ref()))
            .collect()
    }

    /// The ordered stage table. The order is contractual; the dependencies
    /// pinned by the unit tests below are the ones with a correctness
    /// argument, everything else preserves the order of the annotation
    /// guideline's reference tooling.
    pub(crate) fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![
            // structural markup may contain internal whitespace
            Stage {
                name: "xml-tag",
                action: StageAction::Protect(&*XML_TAG, TokenClass::XmlTag),
            },
            Stage {
                name: "email",
                action: StageAction::Protect(&*EMAIL, TokenClass::EmailAddress),
            },
            // stray spaces inside emoticon glyphs must be closed before URL
            // detection, URL fragments can resemble emoticons
            Stage {
                name: "spaced-emoticon",
                action: StageAction::Rewrite(&*SPACE_EMOTICON, "$1$2"),
            },
            Stage {
                name: "url-with-brackets",
                action: StageAction::Protect(&*SIMPLE_URL_WITH_BRACKETS, TokenClass::Url),
            },
            Stage {
                name: "url",
                action: StageAction::Protect(&*SIMPLE_URL, TokenClass::Url),
            },
            Stage {
                name: "doi",
                action: StageAction::Protect(&*DOI, TokenClass::Doi),
            },
            Stage {
                name: "doi-with-space",
                action: StageAction::Protect(&*DOI_WITH_SPACE, TokenClass::Doi),
            },
            Stage {
                name: "url-without-protocol",
                action: StageAction::Protect(&*URL_WITHOUT_PROTOCOL, TokenClass::Url),
            },
            Stage {
                name: "collapse-whitespace",
                action: StageAction::CollapseWhitespace,
            },
            Stage {
                name: "heart-emoticon",
                action: StageAction::Protect(&*HEART_EMOTICON, TokenClass::Emoticon),
            },
            Stage {
                name: "emoticon",
                action: StageAction::Protect(&*EMOTICON, TokenClass::Emoticon),
            },
            Stage {
                name: "mention",
                action: StageAction::Protect(&*MENTION, TokenClass::Mention),
            },
            Stage {
                name: "hashtag",
                action: StageAction::Protect(&*HASHTAG, TokenClass::Hashtag),
            },
            Stage {
                name: "action-word",
                action: StageAction::Protect(&*ACTION_WORD, TokenClass::ActionWord),
            },
            Stage {
                name: "emoji",
                action: StageAction::Protect(&*EMOJI, TokenClass::Emoticon),
            },
            Stage {
                name: "plus-ampersand-token",
                action: StageAction::Protect(
                    &self.patterns.token_with_plus_ampersand,
                    TokenClass::Regular,
                ),
            },
        ];
        if self.split_camel_case {
            stages.push(Stage {
                name: "camel-case-token",
                action: StageAction::Protect(&self.patterns.camel_case_token, TokenClass::Regular),
            });
            stages.push(Stage {
                name: "in-and-innen",
                action: StageAction::Protect(&*IN_AND_INNEN, TokenClass::Regular),
            });
            stages.push(Stage {
                name: "camel-case-split",
                action: StageAction::Rewrite(&*CAMEL_CASE_BOUNDARY, " $1"),
            });
        }
        stages.extend(vec![
            Stage {
                name: "abbreviations",
                action: StageAction::Abbreviations,
            },
            // dates and numbers, most specific first
            Stage {
                name: "three-part-date-year-first",
                action: StageAction::Protect(&*THREE_PART_DATE_YEAR_FIRST, TokenClass::Date),
            },
            Stage {
                name: "three-part-date-dmy",
                action: StageAction::Protect(&*THREE_PART_DATE_DMY, TokenClass::Date),
            },
            Stage {
                name: "three-part-date-mdy",
                action: StageAction::Protect(&*THREE_PART_DATE_MDY, TokenClass::Date),
            },
            Stage {
                name: "two-part-date",
                action: StageAction::Protect(&*TWO_PART_DATE, TokenClass::Date),
            },
            Stage {
                name: "time",
                action: StageAction::Protect(&*TIME, TokenClass::Time),
            },
            Stage {
                name: "ordinal",
                action: StageAction::Protect(&*ORDINAL, TokenClass::Ordinal),
            },
            Stage {
                name: "fraction",
                action: StageAction::Protect(&*FRACTION, TokenClass::Number),
            },
            Stage {
                name: "amount",
                action: StageAction::Protect(&*AMOUNT, TokenClass::Amount),
            },
            Stage {
                name: "semester",
                action: StageAction::Protect(&*SEMESTER, TokenClass::Semester),
            },
            Stage {
                name: "measurement",
                action: StageAction::Protect(&*MEASUREMENT, TokenClass::Measurement),
            },
            Stage {
                name: "number-compound",
                action: StageAction::Protect(&*NUMBER_COMPOUND, TokenClass::NumberCompound),
            },
            Stage {
                name: "number",
                action: StageAction::Protect(&*NUMBER, TokenClass::Number),
            },
            // punctuation and symbols
            Stage {
                name: "question-exclamation",
                action: StageAction::Protect(&*QUEST_EXCLAM, TokenClass::Symbol),
            },
            Stage {
                name: "right-arrow-gap",
                action: StageAction::Rewrite(&*SPACE_RIGHT_ARROW, "$1$2"),
            },
            Stage {
                name: "left-arrow-gap",
                action: StageAction::Rewrite(&*SPACE_LEFT_ARROW, "$1$2"),
            },
            Stage {
                name: "arrow",
                action: StageAction::Protect(&*ARROW, TokenClass::Symbol),
            },
            Stage {
                name: "paired-paren",
                action: StageAction::Rewrite(&*PAIRED_PAREN, " $1 $2 $3 "),
            },
            Stage {
                name: "paired-bracket",
                action: StageAction::Rewrite(&*PAIRED_BRACKET, " $1 $2 $3 "),
            },
            Stage {
                name: "paren",
                action: StageAction::Rewrite(&*PAREN, " $1 "),
            },
            Stage {
                name: "residual-paren",
                action: StageAction::Protect(&*ALL_PAREN, TokenClass::Symbol),
            },
            Stage {
                name: "slash",
                action: StageAction::Protect(&*SLASH, TokenClass::Symbol),
            },
            Stage {
                name: "paired-double-latex-quote",
                action: StageAction::Rewrite(&*PAIRED_DOUBLE_LATEX_QUOTE, " $1 $2 $3 "),
            },
            Stage {
                name: "paired-single-latex-quote",
                action: StageAction::Rewrite(&*PAIRED_SINGLE_LATEX_QUOTE, " $1 $2 $3 "),
            },
            Stage {
                name: "paired-single-quote",
                action: StageAction::Rewrite(&*PAIRED_SINGLE_QUOT_MARK, " $1 $2 $3 "),
            },
            Stage {
                name: "residual-quote",
                action: StageAction::Protect(&*ALL_QUOTE, TokenClass::Symbol),
            },
            Stage {
                name: "other-punctuation",
                action: StageAction::Protect(&*OTHER_PUNCTUATION, TokenClass::Symbol),
            },
            Stage {
                name: "ellipsis",
                action: StageAction::Protect(&*ELLIPSIS, TokenClass::Symbol),
            },
            Stage {
                name: "glued-dot",
                action: StageAction::Protect(&*DOT_WITHOUT_SPACE, TokenClass::Symbol),
            },
            Stage {
                name: "dot",
                action: StageAction::Protect(&*DOT, TokenClass::Symbol),
            },
        ]);
        stages
    }

    /// Removes abbreviation forms in successively broader passes, then
    /// splits composite multi-dot abbreviations (`z.B.` becomes `z.` and
    /// `B.`) while lexicon literals stay single tokens.
    fn replace_abbreviations(
        &self,
        paragraph: &str,
        table: &mut ReplacementTable,
    ) -> Result<String, TokenizerError> {
        let mut text = replace_spans(
            paragraph,
            &*SINGLE_LETTER_ELLIPSIS,
            TokenClass::Abbreviation,
            table,
        )?;
        text = replace_spans(&text, &*AND_CETERA, TokenClass::Abbreviation, table)?;
        text = replace_spans(&text, &*STR_ABBREVIATION, TokenClass::Abbreviation, table)?;
        text = replace_spans(&text, &*NR_ABBREVIATION, TokenClass::Abbreviation, table)?;
        text = replace_spans(
            &text,
            &*SINGLE_LETTER_ABBREVIATION,
            TokenClass::Abbreviation,
            table,
        )?;
        text = replace_spans(
            &text,
            &self.patterns.single_token_abbreviation,
            TokenClass::Abbreviation,
            table,
        )?;
        let text = SPACES.replace_all(&text, " ").into_owned();
        let text = replace_spans(&text, &*PS, TokenClass::Abbreviation, table)?;

        let mut spans: Vec<(usize, usize)> = Vec::new();
        let mut replacements: HashMap<String, String> = HashMap::new();
        for captures in self.patterns.abbreviation.captures_iter(&text) {
            let captures = captures?;
            let matched = captures.get(0).unwrap();
            spans.push((matched.start(), matched.end()));
            if replacements.contains_key(matched.as_str()) {
                continue;
            }
            let instance = matched.as_str();
            let replacement = if MULTIPART_ABBREVIATION.is_match(instance)? {
                let parts: Vec<String> = instance
                    .trim_matches('.')
                    .split('.')
                    .map(|part| format!("{}.", part.trim()))
                    .collect();
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                table.register_parts(&text, &parts, TokenClass::Abbreviation)
            } else {
                table.register(&text, instance, TokenClass::Abbreviation)
            };
            replacements.insert(instance.to_owned(), replacement);
        }
        Ok(apply_replacements(&text, spans, &replacements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tokenizer(split_camel_case: bool) -> CmcTokenizer {
        CmcTokenizer::from_lexicons(
            Lexicon::from_entries(vec!["bzw.", "ca.", "usw."]),
            Lexicon::from_entries(vec!["z.Hd."]),
            Lexicon::from_entries(vec!["C++", "H&M"]),
            Lexicon::from_entries(vec!["iPhone", "eBay"]),
            split_camel_case,
        )
        .unwrap()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|token| token.text.as_str()).collect()
    }

    fn stage_position(stages: &[Stage], name: &str) -> usize {
        stages
            .iter()
            .position(|stage| stage.name == name)
            .unwrap_or_else(|| panic!("stage {} not in pipeline", name))
    }

    #[test]
    fn test_stage_order_contracts() {
        //        Given
        let tokenizer = test_tokenizer(true);
        let stages = tokenizer.stages();
        let position = |name: &str| stage_position(&stages, name);

        //        Then
        // whitespace-spanning markup is protected before anything else
        assert_eq!(position("xml-tag"), 0);
        assert_eq!(position("email"), 1);
        // emoticon space-fixing precedes URL detection; emoticon detection
        // follows URL extraction
        assert!(position("spaced-emoticon") < position("url-with-brackets"));
        assert!(position("url-without-protocol") < position("heart-emoticon"));
        assert!(position("url") < position("emoticon"));
        // exception words are protected before the camelCase split
        assert!(position("camel-case-token") < position("camel-case-split"));
        assert!(position("in-and-innen") < position("camel-case-split"));
        assert!(position("camel-case-split") < position("abbreviations"));
        // abbreviations are resolved before ordinals could claim their dots
        assert!(position("abbreviations") < position("ordinal"));
        // most specific numeric classes first
        assert!(position("three-part-date-year-first") < position("two-part-date"));
        assert!(position("two-part-date") < position("time"));
        assert!(position("measurement") < position("number-compound"));
        assert!(position("number-compound") < position("number"));
        // paired delimiters are split before the residual passes
        assert!(position("right-arrow-gap") < position("arrow"));
        assert!(position("paired-paren") < position("residual-paren"));
        assert!(position("paired-single-quote") < position("residual-quote"));
        // the glued sentence-final dot is found before the catch-all dot
        assert!(position("glued-dot") < position("dot"));
        assert_eq!(position("dot"), stages.len() - 1);
    }

    #[test]
    fn test_camel_case_stages_only_when_enabled() {
        //        Given
        let tokenizer = test_tokenizer(false);

        //        Then
        assert!(tokenizer
            .stages()
            .iter()
            .all(|stage| stage.name != "camel-case-split"));
    }

    #[test]
    fn test_camel_case_split() {
        //        Given
        let tokenizer = test_tokenizer(true);

        //        When
        let tokens = tokenizer.tokenize("MeinSmartphone").unwrap();

        //        Then
        assert_eq!(texts(&tokens), ["Mein", "Smartphone"]);
    }

    #[test]
    fn test_camel_case_exceptions_survive() {
        //        Given
        let tokenizer = test_tokenizer(true);

        //        When
        let tokens = tokenizer.tokenize("Mein iPhone und die LehrerInnen").unwrap();

        //        Then
        assert_eq!(texts(&tokens), ["Mein", "iPhone", "und", "die", "LehrerInnen"]);
    }

    #[test]
    fn test_camel_case_untouched_when_disabled() {
        //        Given
        let tokenizer = test_tokenizer(false);

        //        When
        let tokens = tokenizer.tokenize("MeinSmartphone").unwrap();

        //        Then
        assert_eq!(texts(&tokens), ["MeinSmartphone"]);
    }

    #[test]
    fn test_multi_dot_abbreviation_is_split() {
        //        Given
        let tokenizer = test_tokenizer(false);

        //        When
        let tokens = tokenizer.tokenize("z.B. gibt es Regeln.").unwrap();

        //        Then
        assert_eq!(texts(&tokens), ["z.", "B.", "gibt", "es", "Regeln", "."]);
        assert_eq!(tokens[0].token_class, TokenClass::Abbreviation);
        assert_eq!(tokens[1].token_class, TokenClass::Abbreviation);
        assert_eq!(tokens[5].token_class, TokenClass::Symbol);
    }

    #[test]
    fn test_lexicon_abbreviation_stays_single_token() {
        //        Given
        let tokenizer = test_tokenizer(false);

        //        When
        let tokens = tokenizer.tokenize("Das gilt bzw. galt schon").unwrap();

        //        Then
        assert_eq!(texts(&tokens), ["Das", "gilt", "bzw.", "galt", "schon"]);
        assert_eq!(tokens[2].token_class, TokenClass::Abbreviation);
    }

    #[test]
    fn test_empty_input() {
        //        Given
        let tokenizer = test_tokenizer(false);

        //        Then
        assert!(tokenizer.tokenize("").unwrap().is_empty());
        assert!(tokenizer.tokenize("   \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_embedded_newlines_are_paragraph_internal_whitespace() {
        //        Given
        let tokenizer = test_tokenizer(false);

        //        When
        let tokens = tokenizer.tokenize("Hallo\nWelt").unwrap();

        //        Then
        assert_eq!(texts(&tokens), ["Hallo", "Welt"]);
    }

    #[test]
    fn test_tokenize_list_preserves_order() {
        //        Given
        let tokenizer = test_tokenizer(false);
        let paragraphs = ["Erster Satz.", "Zweiter Satz."];

        //        When
        let token_lists = tokenizer.tokenize_list(&paragraphs).unwrap();

        //        Then
        assert_eq!(token_lists.len(), 2);
        assert_eq!(texts(&token_lists[0]), ["Erster", "Satz", "."]);
        assert_eq!(texts(&token_lists[1]), ["Zweiter", "Satz", "."]);
    }

    #[test]
    fn test_class_names_match_guideline() {
        assert_eq!(TokenClass::XmlTag.to_string(), "XML_tag");
        assert_eq!(TokenClass::Url.to_string(), "URL");
        assert_eq!(TokenClass::NumberCompound.to_string(), "number_compound");
        assert_eq!(TokenClass::default(), TokenClass::Regular);
    }
}
