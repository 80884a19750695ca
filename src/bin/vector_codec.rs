/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! vector-codec - inspect and convert vector wire payloads

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use proximadb_vector_codec::{codec, from_text, to_text, CodecConfig, Format};

#[derive(Parser)]
#[command(name = "vector-codec")]
#[command(about = "Convert vector values between text and binary wire forms")]
struct Args {
    #[arg(short, long, default_value = "codec.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a text literal such as "[1,2,3]"
    Encode {
        /// Output format; defaults to registration.default_format
        #[arg(short, long)]
        format: Option<Format>,
        input: String,
    },
    /// Decode a text literal or a hex-encoded binary payload
    Decode {
        /// Input format; defaults to registration.default_format
        #[arg(short, long)]
        format: Option<Format>,
        input: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CodecConfig::load(&args.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("Loaded configuration: {:?}", config);

    let output = match args.command {
        Command::Encode { format, input } => {
            encode_literal(&input, resolve_format(format, &config))?
        }
        Command::Decode { format, input } => {
            decode_payload(&input, resolve_format(format, &config))?
        }
    };
    println!("{}", output);

    Ok(())
}

/// An explicit `--format` wins over `registration.default_format`
fn resolve_format(requested: Option<Format>, config: &CodecConfig) -> Format {
    requested.unwrap_or(config.registration.default_format)
}

/// Parse a text literal and render it in `format`; binary prints as `\x`-prefixed hex
fn encode_literal(input: &str, format: Format) -> Result<String> {
    let vector = from_text(input).context("failed to parse vector literal")?;
    let bytes = codec::encode(&vector, format)?;
    debug!(elements = vector.len(), bytes = bytes.len(), %format, "Encoded vector");
    Ok(match format {
        Format::Text => String::from_utf8_lossy(&bytes).into_owned(),
        Format::Binary => format!("\\x{}", hex::encode(&bytes)),
    })
}

/// Decode a text literal or hex payload into its canonical text form and count
fn decode_payload(input: &str, format: Format) -> Result<String> {
    let bytes = match format {
        Format::Text => input.as_bytes().to_vec(),
        Format::Binary => decode_hex(input)?,
    };
    let vector = codec::decode(&bytes, format)?;
    Ok(format!("{}\nelements: {}", to_text(&vector), vector.len()))
}

/// Accepts bare hex or a single `\x` or `0x` prefix
fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("\\x")
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("invalid hex payload '{}'", input))
}
