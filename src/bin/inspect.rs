use chrono::{DateTime, Utc};
use clap::Parser;
use rps_arena_lib::model::config::ArenaConfig;
use rps_arena_lib::model::data::SpeciesCounts;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize an arena save file", long_about = None)]
struct Args {
    /// Save file (`.json` or `.json.gz`)
    save: PathBuf,

    /// Config to check the save's fingerprint against
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let save = arena_io::load_state(&args.save)?;

    println!("Save: {}", args.save.display());
    println!("Version: {}", save.version);
    if save.version == 0 {
        println!("Legacy record list, no metadata");
    } else {
        println!("Run: {}", save.run_id);
        match DateTime::parse_from_rfc3339(&save.saved_at) {
            Ok(at) => {
                let age = Utc::now().signed_duration_since(at.with_timezone(&Utc));
                println!("Saved: {} ({}m ago)", save.saved_at, age.num_minutes());
            }
            Err(_) => println!("Saved: {} (unparseable)", save.saved_at),
        }
    }

    let counts = SpeciesCounts::tally(save.entities.iter().map(|r| r.species));
    println!(
        "Entities: {} (rock {}, paper {}, scissors {}, bomb {}, shield {})",
        counts.total(),
        counts.rock,
        counts.paper,
        counts.scissors,
        counts.bomb,
        counts.shield
    );
    if let Some(species) = counts.sole_base_survivor() {
        println!("Decided: {species} has already won");
    }

    if let Some(path) = &args.config {
        let content = std::fs::read_to_string(path)?;
        let config = ArenaConfig::from_toml(&content)?;
        if config.fingerprint() == save.config_fingerprint {
            println!("\n✅ Config fingerprint matches");
        } else {
            println!("\n❌ Config fingerprint differs");
            println!("Save:   {}", save.config_fingerprint);
            println!("Config: {}", config.fingerprint());
        }
    }

    Ok(())
}
