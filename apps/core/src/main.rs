// MindCare Entry Point
// Reads one message per stdin line, writes one JSON turn record per line to stdout.

use anyhow::Context;
use mindcare_core::brain::{Lexicon, Message, WellbeingAnalyzer};
use mindcare_core::config::AppConfig;
use mindcare_core::logging::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    init_tracing(&config).context("Failed to initialize logging")?;

    let analyzer = match &config.lexicon_path {
        Some(path) => {
            let lexicon = Lexicon::from_json_file(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display()))?;
            info!("Loaded lexicon from {}", path.display());
            WellbeingAnalyzer::with_lexicon(lexicon)
        }
        None => WellbeingAnalyzer::new(),
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut history: Vec<Message> = Vec::new();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = analyzer.respond(&line, &history, &mut rng);
        if outcome.assessment.level.is_elevated() {
            warn!(
                level = %outcome.assessment.level,
                turn = history.len() / 2 + 1,
                "Elevated stress level"
            );
        }

        serde_json::to_writer(&mut out, &outcome).context("Failed to encode turn")?;
        writeln!(out)?;
        out.flush()?;

        history.push(Message::user(line));
        history.push(outcome.reply_message());
    }

    info!(turns = history.len() / 2, "Input closed");
    Ok(())
}
