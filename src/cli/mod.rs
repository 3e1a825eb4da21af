// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `serve` to run the HTTP service, `search` to run one
//! query from the terminal, and `inspect` to print what the indexer made of
//! a corpus. Settings that deployments care about (port, corpus path) can
//! also come from the environment.

pub mod display;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use folio::search::{CONTEXT_BYTES, CONTEXT_WORDS, MAX_MATCHES};
use folio::SearchOptions;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Substring and fuzzy search over a single text corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a corpus and serve it over HTTP
    Serve {
        /// Plain-text corpus to index at startup
        #[arg(short, long, env = "FOLIO_CORPUS", default_value = "completeworks.txt")]
        corpus: PathBuf,

        /// Address to bind
        #[arg(long, env = "FOLIO_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3001")]
        port: u16,

        /// Directory served at `/`
        #[arg(long, env = "FOLIO_STATIC", default_value = "static")]
        static_dir: PathBuf,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Run a single query against a corpus and print the snippets
    Search {
        /// Plain-text corpus
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Approximate word matching instead of exact substrings
        #[arg(long)]
        fuzzy: bool,

        /// Split the query on whitespace into independent terms
        #[arg(long)]
        multi: bool,

        /// Maximum number of snippets to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the snippets as a JSON array instead
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Print corpus statistics and search limits
    Inspect {
        /// Plain-text corpus
        corpus: PathBuf,
    },
}

/// Engine limits, shared by `serve` and `search`.
#[derive(Args, Debug, Clone, Copy)]
pub struct LimitArgs {
    /// Per-term cap on matches
    #[arg(long, default_value_t = MAX_MATCHES)]
    pub max_matches: usize,

    /// Bytes of context on each side of an exact match
    #[arg(long, default_value_t = CONTEXT_BYTES)]
    pub context_bytes: usize,

    /// Words of context on each side of a fuzzy match
    #[arg(long, default_value_t = CONTEXT_WORDS)]
    pub context_words: usize,
}

impl From<LimitArgs> for SearchOptions {
    fn from(args: LimitArgs) -> Self {
        SearchOptions {
            max_matches: args.max_matches,
            context_bytes: args.context_bytes,
            context_words: args.context_words,
        }
    }
}
