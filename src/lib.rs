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

//! # Rule-based tokenizer for German computer-mediated communication
//!
//! This crate tokenizes informal, computer-mediated German text (social
//! media posts, chat logs) into linguistically meaningful units, each tagged
//! with a semantic class (URL, date, emoticon, abbreviation, ...), following
//! the EmpiriST 2015 annotation guideline.
//!
//! Token classes that may span whitespace or punctuation (XML tags,
//! obfuscated e-mail addresses, URLs, emoticons, multi-dot abbreviations)
//! are extracted by an ordered sequence of pattern passes. Each pass
//! replaces its matches with collision-free placeholders; once all
//! structural segmentation is done, the text is split on whitespace and the
//! placeholders are mapped back to the original text and its class.
//!
//! ```no_run
//! use cmc_tokenizer::CmcTokenizer;
//!
//! # fn main() -> Result<(), cmc_tokenizer::TokenizerError> {
//! let tokenizer = CmcTokenizer::from_lexicon_dir("lexicons", false)?;
//! for token in tokenizer.tokenize("Das kostet 1.000,- Euro :-)")? {
//!     println!("{}\t{}", token.text, token.token_class);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod lexicon;
pub mod tokenizer;

pub use crate::error::TokenizerError;
pub use crate::lexicon::Lexicon;
pub use crate::tokenizer::base_tokenizer::{CmcTokenizer, Token, TokenClass};

#[macro_use]
extern crate lazy_static;
