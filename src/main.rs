mod calculator;
mod config;
mod keys;
mod render;
mod session;
mod ui;

use anyhow::{Context, Result};
use calculator::Calculator;
use clap::Parser;
use config::Config;
use render::{LineSink, RenderSink};
use session::Session;
use std::io::stdout;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "zcalc")]
#[command(about = "A small keypad calculator for the terminal")]
#[command(version)]
struct Cli {
    /// Run a key script instead of the interactive calculator, e.g. "12+7{Enter}"
    #[arg(short, long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// With --keys, print every key's resulting display
    #[arg(long, requires = "keys")]
    steps: bool,

    /// With --keys, print the final state as JSON
    #[arg(long, requires = "keys", conflicts_with = "steps")]
    json: bool,

    /// Config file to use instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Decimal places kept after each computation
    #[arg(short, long)]
    precision: Option<u32>,

    /// Copy results to the clipboard on equals
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default(),
    }
    .with_overrides(cli.precision, cli.copy);

    match cli.keys.as_deref() {
        Some(script) => run_script(script, &cli, &config),
        None => ui::run_interactive(&config),
    }
}

/// Run a key script and print the outcome.
fn run_script(script: &str, cli: &Cli, config: &Config) -> Result<()> {
    let inputs = keys::parse_script(script).context("Invalid key script")?;
    let calculator = Calculator::with_precision(config.precision);

    if cli.steps {
        let mut session = Session::new(calculator, LineSink::new(stdout()))
            .with_copy_on_equals(config.copy_on_equals);
        session.refresh()?;
        return session.run(inputs);
    }

    let mut session =
        Session::new(calculator, Vec::<String>::new()).with_copy_on_equals(config.copy_on_equals);
    session.run(inputs)?;
    let (calculator, _frames) = session.into_parts();

    let mut out = LineSink::new(stdout());
    if cli.json {
        let state = serde_json::to_string_pretty(&calculator.state())?;
        out.render(&state)
    } else {
        out.render(calculator.display_value())
    }
}
