mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cliptrim_core::EngineConfig;
use script::{Script, Session};

/// Command-line arguments for the cliptrim driver.
#[derive(Parser, Debug)]
#[command(name = "cliptrim")]
#[command(version)]
#[command(about = "Replay a timeline editing script and print the render plan")]
struct Args {
    /// Editing script (JSON)
    script: PathBuf,

    /// Engine config file (JSON); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let script = Script::load_from_file(&args.script)?;
    tracing::info!(
        script = %args.script.display(),
        duration = script.duration,
        commands = script.commands.len(),
        "replaying script"
    );

    let mut session =
        Session::from_script(&script, config).context("failed to set up the timeline")?;
    let summary = session
        .run(&script.commands)
        .context("script stopped on an invalid command")?;
    tracing::info!(
        applied = summary.applied,
        skipped = summary.skipped,
        clips = session.editor.clips().len(),
        "script finished"
    );

    let report = session.report(&script.render_settings());
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");
    Ok(())
}
