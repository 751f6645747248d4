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

//! # Pattern inventory
//!
//! Lexicon-independent patterns are compiled once into statics; patterns
//! whose alternations are built from lexicon entries live in
//! [`LexiconPatterns`] and are compiled per tokenizer instance.
//!
//! Look-behind, look-ahead and back-references are load bearing across this
//! inventory (sentence-start guards, date separator agreement, repeated
//! emoticon mouths), hence `fancy_regex` rather than plain `regex`.

use fancy_regex::{escape, Regex};
use itertools::Itertools;

use crate::error::TokenizerError;
use crate::lexicon::Lexicon;

/// Emoticons that the core eyes-nose-mouth pattern does not cover.
const EMOTICON_LITERALS: [&str; 38] = [
    "(-.-)", "(T_T)", "(♥_♥)", ")':", ")-:", "(-:", ")=", ")o:", ")x", ":'C", ":/", ":<", ":C",
    ":[", "=(", "=)", "=D", "=P", ">:", "D':", "D:", r"\:", "]:", "x(", "^^", "o.O", "oO", r"\O/",
    r"\m/", ":;))", "_))", "*_*", "._.", ":wink:", ">_<", "*<:-)", ":!:", ":;-))",
];

fn emoticon_pattern() -> String {
    let literals = EMOTICON_LITERALS
        .iter()
        .sorted_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        })
        .map(|literal| escape(literal))
        .join("|");
    format!(
        r"(?:(?:[:;]|(?<!\d)8)[-'oO]?(?:\)+|\(+|[*]|([DPp])\1*(?!\w)))|(?:xD+|XD+)|{}",
        literals
    )
}

lazy_static! {
    pub(crate) static ref SPACES: Regex = Regex::new(r"\s+").unwrap();

    // tags, e-mail addresses, URLs, DOIs
    pub(crate) static ref XML_TAG: Regex = Regex::new(
        r#"(?i)<(?:([_:A-Z][-.:\w]*)(?:\s+[_:A-Z][-.:\w]*\s*=\s*(?:"[^"]*"|'[^']*'))*\s*/?|/([_:A-Z][-.:\w]*)\s*)>"#
    )
    .unwrap();
    // e-mail address obfuscation may spell out "at" and "dot" with spaces
    pub(crate) static ref EMAIL: Regex = Regex::new(
        r"\b[\p{L}\p{N}.%+-]+(?:@| \[?at\]? )[\p{L}\p{N}.-]+(?:\.| \[?dot\]? )\p{L}{2,}\b"
    )
    .unwrap();
    pub(crate) static ref SIMPLE_URL_WITH_BRACKETS: Regex = Regex::new(
        r#"(?i)\b(?:(?:https?|ftp|svn)://|(?:https?://)?www\.)\S+?\(\S*?\)\S*(?=$|['. "!?,;\n\t])"#
    )
    .unwrap();
    pub(crate) static ref SIMPLE_URL: Regex = Regex::new(
        r#"(?i)\b(?:(?:https?|ftp|svn)://|(?:https?://)?www\.)\S+[^'. "!?,;:\n\t]"#
    )
    .unwrap();
    pub(crate) static ref DOI: Regex = Regex::new(r"(?i)\bdoi:10\.\d+/\S+").unwrap();
    pub(crate) static ref DOI_WITH_SPACE: Regex =
        Regex::new(r"(?i)(?<=\bdoi: )10\.\d+/\S+").unwrap();
    // also covers things like tagesschau.de-App
    pub(crate) static ref URL_WITHOUT_PROTOCOL: Regex = Regex::new(
        r"(?i)\b[\w./-]+\.(?:de|com|org|net|edu|info|jpg|png|gif|log|txt)(?:-\w+)?\b"
    )
    .unwrap();

    // emoticons
    pub(crate) static ref EMOTICON: Regex = Regex::new(&emoticon_pattern()).unwrap();
    pub(crate) static ref SPACE_EMOTICON: Regex = Regex::new(r"([:;])[ ]+([()])").unwrap();
    // ^3 is an emoticon, unless it is preceded by a number (with optional
    // whitespace between number and ^3)
    pub(crate) static ref HEART_EMOTICON: Regex =
        Regex::new(r"(?:^|^\D|(?<=\D[ ])|(?<=.[^\d ]))\^3").unwrap();
    pub(crate) static ref EMOJI: Regex = Regex::new(r"\bemoji\p{L}+\b").unwrap();

    // camelCase
    pub(crate) static ref IN_AND_INNEN: Regex =
        Regex::new(r"\b\p{L}+\p{Ll}In(?:nen)?\p{Ll}*\b").unwrap();
    pub(crate) static ref CAMEL_CASE_BOUNDARY: Regex =
        Regex::new(r"(?<=\p{Ll}{2})(\p{Lu})(?!\p{Lu}|\b)").unwrap();

    // abbreviations
    pub(crate) static ref SINGLE_LETTER_ELLIPSIS: Regex =
        Regex::new(r"(?<![\w.])(?P<a_letter>\p{L})(?P<b_ellipsis>\.{3})(?!\.)").unwrap();
    pub(crate) static ref AND_CETERA: Regex =
        Regex::new(r"(?<![\w.&])&c\.(?!\p{L}{1,3}\.)").unwrap();
    pub(crate) static ref STR_ABBREVIATION: Regex =
        Regex::new(r"(?i)(?<![\w.])([\p{L}-]+-Str\.)(?!\p{L})").unwrap();
    pub(crate) static ref NR_ABBREVIATION: Regex =
        Regex::new(r"(?i)(?<![\w.])(\w+\.-?Nr\.)(?!\p{L}{1,3}\.)").unwrap();
    pub(crate) static ref SINGLE_LETTER_ABBREVIATION: Regex =
        Regex::new(r"(?<![\w.])\p{L}\.(?!\p{L}{1,3}\.)").unwrap();
    pub(crate) static ref PS: Regex = Regex::new(r"(?i)(?<!\d[ ])\bps\.").unwrap();
    pub(crate) static ref MULTIPART_ABBREVIATION: Regex =
        Regex::new(r"^(?:\p{L}+\.){2,}$").unwrap();

    // mentions, hashtags, action words
    pub(crate) static ref MENTION: Regex = Regex::new(r"[@]\w+(?!\w)").unwrap();
    pub(crate) static ref HASHTAG: Regex = Regex::new(r"(?<!\w)[#]\w+(?!\w)").unwrap();
    // action words without spaces are to be treated as units
    pub(crate) static ref ACTION_WORD: Regex =
        Regex::new(r"(?<!\w)(?P<a_open>[*+])(?P<b_middle>[^\s*]+)(?P<c_close>[*])(?!\w)").unwrap();

    // dates, times, numbers
    pub(crate) static ref THREE_PART_DATE_YEAR_FIRST: Regex = Regex::new(
        r"(?<![\d.])(?P<a_year>\d{4})(?P<b_month_or_day>([/-])\d{1,2})(?P<c_day_or_month>\3\d{1,2})(?![\d.])"
    )
    .unwrap();
    pub(crate) static ref THREE_PART_DATE_DMY: Regex = Regex::new(
        r"(?<![\d.])(?P<a_day>(?:0?[1-9]|1[0-9]|2[0-9]|3[01])([./-]))(?P<b_month>(?:0?[1-9]|1[0-2])\2)(?P<c_year>(?:\d\d){1,2})(?![\d.])"
    )
    .unwrap();
    pub(crate) static ref THREE_PART_DATE_MDY: Regex = Regex::new(
        r"(?<![\d.])(?P<a_month>(?:0?[1-9]|1[0-2])([./-]))(?P<b_day>(?:0?[1-9]|1[0-9]|2[0-9]|3[01])\2)(?P<c_year>(?:\d\d){1,2})(?![\d.])"
    )
    .unwrap();
    pub(crate) static ref TWO_PART_DATE: Regex = Regex::new(
        r"(?<![\d.])(?P<a_day_or_month>\d{1,2}([./-]))(?P<b_day_or_month>\d{1,2}\2)(?![\d.])"
    )
    .unwrap();
    pub(crate) static ref TIME: Regex =
        Regex::new(r"(?<!\w)\d{1,2}(?::\d{2}){1,2}(?![\d:])").unwrap();
    pub(crate) static ref ORDINAL: Regex =
        Regex::new(r"(?<![\w.])(?:\d{1,3}|\d{5,}|[3-9]\d{3})\.(?!\d)").unwrap();
    pub(crate) static ref FRACTION: Regex = Regex::new(r"(?<!\w)\d+/\d+(?![\d/])").unwrap();
    pub(crate) static ref AMOUNT: Regex = Regex::new(r"(?<!\w)(?:\d+[\d,.]*-)(?!\w)").unwrap();
    pub(crate) static ref SEMESTER: Regex = Regex::new(
        r"(?i)(?<!\w)(?P<a_semester>[WS]S|SoSe|WiSe)(?P<b_year>\d\d(?:/\d\d)?)(?!\w)"
    )
    .unwrap();
    pub(crate) static ref MEASUREMENT: Regex = Regex::new(
        r"(?i)(?<!\w)(?P<a_amount>[−+-]?\d*[,.]?\d+)(?P<b_unit>(?:mm|cm|dm|m|km)(?:\^?[23])?|qm|g|kg|min|h|s|sek|cent|eur)(?!\w)"
    )
    .unwrap();
    // also Web2.0
    pub(crate) static ref NUMBER_COMPOUND: Regex =
        Regex::new(r"(?<!\w)(?:\d+-?[\p{L}@]+|[\p{L}@]+-?\d+(?:\.\d)?)(?!\w)").unwrap();
    pub(crate) static ref NUMBER: Regex = Regex::new(
        r"(?<!\w)(?:[−+-]?\d*[.,]?\d+(?:[eE][−+-]?\d+)?|\d+[\d.,]*\d+)(?![.,]?\d)"
    )
    .unwrap();

    // punctuation
    pub(crate) static ref QUEST_EXCLAM: Regex = Regex::new(r"([!?]+)").unwrap();
    pub(crate) static ref SPACE_RIGHT_ARROW: Regex = Regex::new(r"(-+)\s+(>)").unwrap();
    pub(crate) static ref SPACE_LEFT_ARROW: Regex = Regex::new(r"(<)\s+(-+)").unwrap();
    pub(crate) static ref ARROW: Regex = Regex::new(r"(-+>|<-+|[\x{2190}-\x{21FF}])").unwrap();
    pub(crate) static ref PAIRED_PAREN: Regex = Regex::new(r"([(])(?!inn)([^()]*)([)])").unwrap();
    pub(crate) static ref PAIRED_BRACKET: Regex = Regex::new(r"(\[)([^\]\[]*)(\])").unwrap();
    pub(crate) static ref PAREN: Regex = Regex::new(
        r"((?:(?<!\w)[\[{(](?=\w))|(?:(?<=\w)[\]})](?!\w))|(?:(?<=\s)[\]})](?=\w))|(?:(?<=\w-)[)](?=\w)))"
    )
    .unwrap();
    pub(crate) static ref ALL_PAREN: Regex = Regex::new(r"(?<=\s)[\[\](){}](?=\s)").unwrap();
    pub(crate) static ref SLASH: Regex = Regex::new(r"(/+)(?!in(?:nen)?|en)").unwrap();
    pub(crate) static ref PAIRED_DOUBLE_LATEX_QUOTE: Regex =
        Regex::new(r"(?<!`)(``)([^`']+)('')(?!')").unwrap();
    pub(crate) static ref PAIRED_SINGLE_LATEX_QUOTE: Regex =
        Regex::new(r"(?<!`)(`)([^`']+)(')(?!')").unwrap();
    pub(crate) static ref PAIRED_SINGLE_QUOT_MARK: Regex =
        Regex::new(r"(['‚‘’])([^']+)(['‘’])").unwrap();
    pub(crate) static ref ALL_QUOTE: Regex =
        Regex::new(r"(?<=\s)(?:``|''|`|['‚‘’])(?=\s)").unwrap();
    pub(crate) static ref OTHER_PUNCTUATION: Regex =
        Regex::new(r#"([<>%‰€$£₤¥°@~*„“”‚‘"»«›‹,;:+=&–])"#).unwrap();
    pub(crate) static ref ELLIPSIS: Regex = Regex::new(r"\.{2,}|…+(?:\.{2,})?").unwrap();
    // a sentence-final period glued to the next sentence's first word
    pub(crate) static ref DOT_WITHOUT_SPACE: Regex =
        Regex::new(r"(?<=\p{Ll}{2})(\.)(?=\p{Lu}\p{Ll}{2})").unwrap();
    pub(crate) static ref DOT: Regex = Regex::new(r"(\.)").unwrap();
}

/// Patterns whose alternations are derived from lexicon entries. The
/// lexicons are compiled longest-first (see [`Lexicon`]) so that the longest
/// applicable literal always wins, independent of the engine's alternation
/// semantics.
pub(crate) struct LexiconPatterns {
    pub token_with_plus_ampersand: Regex,
    pub camel_case_token: Regex,
    pub single_token_abbreviation: Regex,
    pub abbreviation: Regex,
}

impl LexiconPatterns {
    pub fn compile(
        abbreviations: &Lexicon,
        single_token_abbreviations: &Lexicon,
        tokens_with_plus_or_ampersand: &Lexicon,
        camel_case_tokens: &Lexicon,
    ) -> Result<LexiconPatterns, TokenizerError> {
        let token_with_plus_ampersand = compile(&format!(
            r"(?i)(?<!\w)(?:{})(?!\w)",
            tokens_with_plus_or_ampersand.to_alternation()
        ))?;
        let camel_case_token = compile(&format!(
            r"\b(?:{}|:Mac\p{{Lu}}\p{{Ll}}*)\b",
            camel_case_tokens.to_alternation()
        ))?;
        // abbreviations with multiple dots that constitute single tokens
        let single_token_abbreviation = compile(&format!(
            r"(?<![\w.])(?:{})(?!\p{{L}}{{1,3}}\.)",
            single_token_abbreviations.to_alternation()
        ))?;
        // the lexicon holds only abbreviations that the letter-dot shape
        // does not already cover
        let abbreviation = compile(&format!(
            r"(?i)(?<![\w.])(?:(?:\p{{L}}\.){{2,}}|{})+(?!\p{{L}}{{1,3}}\.)",
            abbreviations.to_alternation()
        ))?;
        Ok(LexiconPatterns {
            token_with_plus_ampersand,
            camel_case_token,
            single_token_abbreviation,
            abbreviation,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, TokenizerError> {
    Regex::new(pattern).map_err(|e| TokenizerError::PatternCompilationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
        pattern.find(text).unwrap().map(|m| m.as_str())
    }

    #[test]
    fn test_xml_tag() {
        assert_eq!(
            first_match(&XML_TAG, r#"Der <a href="x.html">Link"#),
            Some(r#"<a href="x.html">"#)
        );
        assert_eq!(first_match(&XML_TAG, "Ende</a>"), Some("</a>"));
        assert_eq!(first_match(&XML_TAG, "3 < 4 > 2"), None);
    }

    #[test]
    fn test_obfuscated_email() {
        assert_eq!(
            first_match(&EMAIL, "info [at] example [dot] de bitte"),
            Some("info [at] example [dot] de")
        );
        assert_eq!(
            first_match(&EMAIL, "an info@example.de schreiben"),
            Some("info@example.de")
        );
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            first_match(&SIMPLE_URL, "siehe http://example.com/foo dort"),
            Some("http://example.com/foo")
        );
        assert_eq!(
            first_match(&SIMPLE_URL_WITH_BRACKETS, "http://example.com/p(1).html da"),
            Some("http://example.com/p(1).html")
        );
        assert_eq!(
            first_match(&URL_WITHOUT_PROTOCOL, "die tagesschau.de-App dort"),
            Some("tagesschau.de-App")
        );
    }

    #[test]
    fn test_emoticons() {
        assert_eq!(first_match(&EMOTICON, "froh :-)"), Some(":-)"));
        assert_eq!(first_match(&EMOTICON, "haha xDD"), Some("xDD"));
        assert_eq!(first_match(&EMOTICON, "o.O was"), Some("o.O"));
        // the mouth may repeat, the eyes must not be part of a number
        assert_eq!(first_match(&EMOTICON, "toll :-DDD"), Some(":-DDD"));
        assert_eq!(first_match(&EMOTICON, "Um 18"), None);
    }

    #[test]
    fn test_heart_emoticon_not_after_number() {
        assert_eq!(first_match(&HEART_EMOTICON, "hab dich lieb ^3"), Some("^3"));
        assert_eq!(first_match(&HEART_EMOTICON, "3 ^3"), None);
    }

    #[test]
    fn test_dates_respect_separator_agreement() {
        assert_eq!(
            first_match(&THREE_PART_DATE_DMY, "am 13.07.2009 war"),
            Some("13.07.2009")
        );
        // mixed separators do not form a date
        assert_eq!(first_match(&THREE_PART_DATE_DMY, "am 13.07-2009 war"), None);
        assert_eq!(
            first_match(&THREE_PART_DATE_YEAR_FIRST, "2009-07-13 war"),
            Some("2009-07-13")
        );
    }

    #[test]
    fn test_number_family() {
        assert_eq!(first_match(&TIME, "um 17:30 Uhr"), Some("17:30"));
        assert_eq!(first_match(&AMOUNT, "nur 1.000,- Euro"), Some("1.000,-"));
        assert_eq!(first_match(&ORDINAL, "der 3. Juli"), Some("3."));
        assert_eq!(first_match(&FRACTION, "etwa 3/4 davon"), Some("3/4"));
        assert_eq!(first_match(&NUMBER_COMPOUND, "Web2.0 eben"), Some("Web2.0"));
        assert_eq!(first_match(&NUMBER, "bei -3,5 Grad"), Some("-3,5"));
    }

    #[test]
    fn test_lexicon_patterns_prefer_longest_entry() {
        //        Given
        let patterns = LexiconPatterns::compile(
            &Lexicon::from_entries(vec!["usw."]),
            &Lexicon::from_entries(vec!["z.Hd."]),
            &Lexicon::from_entries(vec!["H&M", "H&M Group"]),
            &Lexicon::from_entries(vec!["iPhone"]),
        )
        .unwrap();

        //        Then
        assert_eq!(
            first_match(&patterns.token_with_plus_ampersand, "bei H&M Group kaufen"),
            Some("H&M Group")
        );
    }
}
