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

//! # Tokenizer error variants
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("File not found error: {0}")]
    FileNotFound(String),

    #[error("Error when loading lexicon file, the file may be corrupted or does not match the expected format: {0}")]
    LexiconParsingError(String),

    #[error("Error when compiling tokenization pattern: {0}")]
    PatternCompilationError(String),

    #[error("Tokenization error: {0}")]
    TokenizationError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<fancy_regex::Error> for TokenizerError {
    fn from(error: fancy_regex::Error) -> Self {
        TokenizerError::TokenizationError(error.to_string())
    }
}

impl From<std::io::Error> for TokenizerError {
    fn from(error: std::io::Error) -> Self {
        TokenizerError::IOError(error.to_string())
    }
}

impl From<serde_json::Error> for TokenizerError {
    fn from(error: serde_json::Error) -> Self {
        TokenizerError::IOError(error.to_string())
    }
}
