// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::{server, Corpus, Query, SearchOptions, Searcher};

mod cli;
use cli::{display, Cli, Commands};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve {
            corpus,
            host,
            port,
            static_dir,
            limits,
        } => run_serve(&corpus, SocketAddr::new(host, port), &static_dir, limits.into()),
        Commands::Search {
            corpus,
            query,
            fuzzy,
            multi,
            limit,
            json,
            limits,
        } => run_search(
            &corpus,
            &Query::new(&query, multi, fuzzy),
            limit,
            json,
            limits.into(),
        ),
        Commands::Inspect { corpus } => run_inspect(&corpus),
    }
}

/// Logs go to stderr so `search --json` output stays machine-readable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_searcher(path: &Path, options: SearchOptions) -> anyhow::Result<Searcher> {
    let corpus = Corpus::load(path).context("cannot start without a corpus")?;
    Ok(Searcher::with_options(corpus, options))
}

fn run_serve(
    corpus: &Path,
    addr: SocketAddr,
    static_dir: &Path,
    options: SearchOptions,
) -> anyhow::Result<()> {
    // Index fully before accepting a single connection
    let searcher = Arc::new(load_searcher(corpus, options)?);
    let app = server::router(searcher, static_dir);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        server::serve(listener, app).await.context("server error")
    })
}

fn run_search(
    corpus: &Path,
    query: &Query,
    limit: usize,
    json: bool,
    options: SearchOptions,
) -> anyhow::Result<()> {
    let searcher = load_searcher(corpus, options)?;

    let started = Instant::now();
    let results = searcher.search(query);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        let shown: Vec<&String> = results.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!(
        "{} {}",
        display::title(&format!("{} results", results.len())),
        display::dim(&format!(
            "({:?}, {} terms, {})",
            query.mode,
            query.terms.len(),
            display::timing_ms(elapsed_ms)
        ))
    );

    for (i, snippet) in results.iter().take(limit).enumerate() {
        let mut line = display::flatten(snippet);
        for term in &query.terms {
            line = display::highlight(&line, term);
        }
        println!("\n{} {}", display::dim(&format!("{:>3}.", i + 1)), line);
    }

    if results.len() > limit {
        println!(
            "\n{}",
            display::dim(&format!("... {} more (use --limit)", results.len() - limit))
        );
    }

    Ok(())
}

fn run_inspect(corpus: &Path) -> anyhow::Result<()> {
    let searcher = load_searcher(corpus, SearchOptions::default())?;
    let stats = searcher.corpus().stats();

    println!("{}", display::title(&corpus.display().to_string()));
    println!("  size            {}", display::format_size(stats.bytes));
    println!("  characters      {}", stats.chars);
    println!("  words           {}", stats.words);
    println!("  distinct words  {}", stats.distinct_words);
    println!("  suffixes        {}", stats.suffixes);
    println!(
        "  sorted          {}",
        folio::is_suffix_array_sorted(searcher.corpus().index())
    );
    println!(
        "  limits          {}",
        serde_json::to_string(searcher.options())?
    );

    Ok(())
}
