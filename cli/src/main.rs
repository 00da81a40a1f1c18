//! lzwmod
//!
//! Command-line front end for lzw-core. Data flows through stdin/stdout
//! unless `--input`/`--output` name files; logs always go to stderr.

mod args;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lzw_core::prelude::*;

use crate::args::{Cli, Commands, IoArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lzwmod=info,lzw_core=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compress { mode, io: paths } => {
            let config = LzwConfig::with_mode(mode.into());
            let (input, output) = endpoints(&paths);
            let counters = compress_stream(input, output, &config)
                .with_context(|| format!("compression failed (mode {})", config.mode))?;
            report("compressed", &counters)?;
        }
        Commands::Expand { io: paths } => {
            let config = LzwConfig::default();
            let (input, output) = endpoints(&paths);
            let counters = expand_stream(input, output, &config).context("expansion failed")?;
            report("expanded", &counters)?;
        }
    }

    Ok(())
}

fn endpoints(args: &IoArgs) -> (InputSource, OutputSink) {
    let input = match &args.input {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Reader(Box::new(io::stdin())),
    };
    let output = match &args.output {
        Some(path) => OutputSink::File(path.clone()),
        None => OutputSink::Writer(Box::new(io::stdout())),
    };
    (input, output)
}

fn report(action: &str, counters: &CodecCounters) -> anyhow::Result<()> {
    info!(
        bytes_in = counters.bytes_in,
        bytes_out = counters.bytes_out,
        final_width = counters.final_width,
        "{action} {} bytes into {} bytes",
        counters.bytes_in,
        counters.bytes_out
    );
    debug!(counters = %serde_json::to_string(counters)?, "run counters");
    Ok(())
}
