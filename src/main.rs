use anyhow::Result;
use clap::Parser;
use rps_arena_lib::app::{App, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path; created with defaults when missing
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks if nobody has won
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Resume from a save file instead of a fresh round
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Write the final state here on exit (`.gz` compresses)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Pace ticks at the configured frame rate
    #[arg(long)]
    realtime: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    rps_arena_lib::model::metrics::init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config);
    if let Some(seed) = args.seed {
        config.arena.seed = Some(seed);
    }

    let mut app = App::new(config)?;
    app.save_path = args.save;
    if let Some(path) = &args.load {
        app.load_state(path)?;
    }

    let summary = app
        .run_headless(RunOptions {
            max_ticks: args.max_ticks,
            realtime: args.realtime,
        })
        .await?;
    println!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["rps_arena"]);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert_eq!(args.max_ticks, 100_000);
        assert!(args.seed.is_none());
        assert!(!args.realtime);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "rps_arena",
            "--seed",
            "9",
            "--max-ticks",
            "500",
            "--save",
            "out.json.gz",
            "--realtime",
        ]);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.max_ticks, 500);
        assert_eq!(args.save, Some(PathBuf::from("out.json.gz")));
        assert!(args.realtime);
    }
}
