// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::File;
use std::io::{self, IsTerminal, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use untty::cli::Cli;
use untty::config::{self, defaults::DEFAULT_PATTERNS};
use untty::engine::{EngineError, FilterEngine};
use untty::error::{Error, ExitCode};
use untty::pattern::PatternSet;
use untty::trace::Tracer;

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let code = if err.use_stderr() { ExitCode::Setup } else { ExitCode::Success };
            let _ = err.print();
            return code.into();
        }
    };

    init_tracing(cli.debug);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            if err.downcast_ref::<EngineError>().is_some_and(EngineError::is_broken_pipe) {
                return ExitCode::Success.into();
            }
            eprintln!("untty: {:#}", err);
            ExitCode::for_error(&err).into()
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_env("UNTTY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    if cli.show_defaults {
        let mut stdout = io::stdout().lock();
        stdout.write_all(DEFAULT_PATTERNS.as_bytes())?;
        stdout.flush()?;
        return Ok(ExitCode::Success);
    }

    let tracer = Tracer::new(cli.debug);

    // Everything that can fail at setup happens before the first byte is read.
    let patterns = config::load(cli.patterns.as_deref())?;
    let set = PatternSet::from_text(&patterns.text, cli.match_policy())
        .with_context(|| format!("in pattern file {}", patterns.source))?;
    tracer.log(&format!("{} expressions from {}", set.len(), patterns.source));
    for (index, pattern) in set.iter().enumerate() {
        tracer.pattern(index, pattern.as_str());
    }

    let input: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(
            File::open(path).map_err(|source| Error::Input { path: path.clone(), source })?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let mut engine = FilterEngine::new(&set, cli.engine_config(), tracer);
    let summary = engine.run(input, io::stdout().lock())?;
    tracing::debug!(
        bytes_read = summary.bytes_read,
        pending = summary.pending,
        "end of input"
    );

    Ok(ExitCode::Success)
}
