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

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cmc_tokenizer::{CmcTokenizer, Token, TokenizerError};

#[derive(Parser, Debug)]
#[command(name = "cmc-tokenizer")]
#[command(about = "Rule-based tokenizer for German computer-mediated communication")]
#[command(version)]
struct Args {
    /// Input file, one paragraph per line; reads stdin when omitted
    input: Option<PathBuf>,

    /// Directory containing the four lexicon files
    #[arg(long, default_value = "lexicons")]
    lexicon_dir: PathBuf,

    /// Split camelCase tokens
    #[arg(long)]
    split_camel_case: bool,

    /// Print the token class next to each token
    #[arg(long)]
    token_classes: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// One token per line, blank line between paragraphs
    Text,
    /// One JSON array of tokens per paragraph
    Json,
}

fn main() -> Result<(), TokenizerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    let tokenizer = CmcTokenizer::from_lexicon_dir(&args.lexicon_dir, args.split_camel_case)?;
    info!(lexicon_dir = %args.lexicon_dir.display(), "tokenizer initialized");

    let content = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    for paragraph in content.lines() {
        let tokens = tokenizer.tokenize(paragraph)?;
        write_paragraph(&mut output, &tokens, args.format, args.token_classes)?;
    }
    output.flush()?;
    Ok(())
}

fn write_paragraph(
    output: &mut impl Write,
    tokens: &[Token],
    format: OutputFormat,
    token_classes: bool,
) -> Result<(), TokenizerError> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                if token_classes {
                    writeln!(output, "{}\t{}", token.text, token.token_class)?;
                } else {
                    writeln!(output, "{}", token.text)?;
                }
            }
            writeln!(output)?;
        }
        OutputFormat::Json => {
            let line = if token_classes {
                serde_json::to_string(tokens)?
            } else {
                let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
                serde_json::to_string(&texts)?
            };
            writeln!(output, "{}", line)?;
        }
    }
    Ok(())
}
