mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jackpot_core::{DrawSource, EntropySource, ProvablyFairRng, SpinEvaluator, SpinResult};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "jackpot", about = "Spin three reels once and check for a jackpot")]
struct Cli {
    /// TOML file overriding the printed messages
    #[arg(long)]
    config: Option<PathBuf>,
    /// Secret seed for a reproducible, provably-fair spin
    #[arg(long)]
    server_seed: Option<String>,
    /// Player-chosen seed mixed into the provably-fair draw
    #[arg(long, requires = "server_seed", default_value = "default")]
    client_seed: String,
    #[arg(long, requires = "server_seed", default_value_t = 0)]
    nonce: u64,
    /// Print one JSON object instead of two lines
    #[arg(long)]
    json: bool,
}

/// Seed triple a player needs to check a provably-fair spin.
#[derive(Debug, Serialize)]
struct Proof {
    server_seed_hash: String,
    client_seed: String,
    nonce: u64,
}

#[derive(Debug, Serialize)]
struct SpinReport<'a> {
    reels: &'a SpinResult,
    display: String,
    jackpot: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    proof: Option<Proof>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("JACKPOT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn draw_source(cli: &Cli) -> (Box<dyn DrawSource>, Option<Proof>) {
    match &cli.server_seed {
        Some(server_seed) => {
            let rng = ProvablyFairRng::new(
                server_seed.as_str(),
                cli.client_seed.as_str(),
                cli.nonce,
            );
            let proof = Proof {
                server_seed_hash: rng.server_seed_hash_hex(),
                client_seed: cli.client_seed.clone(),
                nonce: cli.nonce,
            };
            info!(hash = %proof.server_seed_hash, nonce = cli.nonce, "using provably-fair source");
            (Box::new(rng), Some(proof))
        }
        None => {
            info!("using entropy source");
            (Box::new(EntropySource::from_entropy()), None)
        }
    }
}

/// Spins once and writes the result. Returns whether it was a jackpot.
fn play<S, W>(
    evaluator: &SpinEvaluator,
    config: &GameConfig,
    source: &mut S,
    proof: Option<Proof>,
    json: bool,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: DrawSource + ?Sized,
    W: Write,
{
    let result = evaluator.spin(source);
    let jackpot = evaluator.is_jackpot(&result);
    let message = if jackpot {
        config.jackpot_message.as_str()
    } else {
        config.consolation_message.as_str()
    };
    let display = evaluator.format(&result);

    if json {
        let report = SpinReport {
            reels: &result,
            display,
            jackpot,
            message,
            proof,
        };
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "{display}")?;
        writeln!(out, "{message}")?;
    }
    Ok(jackpot)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::load_or_default(cli.config.as_deref())?;
    let evaluator = SpinEvaluator::default();
    let (mut source, proof) = draw_source(&cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let jackpot = play(&evaluator, &config, &mut source, proof, cli.json, &mut out)
        .context("writing spin result")?;
    info!(jackpot, "spin complete");
    Ok(())
}
