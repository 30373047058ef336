//! unwound: chord progressions and fingering diagrams from the terminal

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unwound_core::{chord_diagram, Chord, ChordDiagram, Instrument, ProgressionRequest, ScaleFamily};

use config::{config_path, load_config, Config};

#[derive(Parser)]
#[command(name = "unwound")]
#[command(about = "Generate chord progressions and instrument fingerings")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a progression in a key
    Generate {
        /// Root note, e.g. C, F#, Bb
        #[arg(short, long)]
        key: Option<String>,

        /// Major, Minor or Chromatic
        #[arg(short, long)]
        scale: Option<String>,

        /// Number of chords
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=config::MAX_COUNT as u64))]
        count: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Pick a random key, scale and length, then generate
    Surprise {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the positions for a single chord
    Chord {
        /// Chord name, e.g. Am or Eb
        name: String,

        /// guitar, bass, violin or piano
        #[arg(short, long)]
        instrument: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// guitar, bass, violin or piano
    #[arg(short, long)]
    instrument: Option<String>,

    /// Print a diagram for every chord
    #[arg(short, long)]
    diagrams: bool,

    /// Seed for reproducible pattern selection
    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Output<'a> {
    request: &'a ProgressionRequest,
    chords: &'a [Chord],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagrams: Vec<ChordDiagram>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; "unwound" also covers unwound_core
    let level = if cli.verbose { "unwound=debug" } else { "unwound=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(level.parse()?))
        .init();

    let path = cli.config.clone().unwrap_or_else(config_path);
    let config = load_config(&path);
    tracing::debug!(path = %path.display(), ?config, "Config loaded");

    match cli.command {
        Commands::Generate { key, scale, count, output } => {
            let count = count.map(|c| c as usize);
            let request = progression_request(key.as_deref(), scale.as_deref(), count, &config)?;
            run_progression(&request, &output, &config)
        }
        Commands::Surprise { output } => {
            let mut rng = seeded_rng(output.seed);
            let request = ProgressionRequest::surprise(&mut rng);
            tracing::info!(key = %request.root, family = %request.family, count = request.count, "Surprise request");
            run_progression(&request, &output, &config)
        }
        Commands::Chord { name, instrument, json } => {
            let instrument = resolve_instrument(instrument.as_deref(), &config)?;
            let diagram = chord_diagram(&name, instrument);
            if json {
                println!("{}", serde_json::to_string_pretty(&diagram)?);
            } else {
                print!("{}", render::diagram(&diagram));
            }
            Ok(())
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

/// Flags win over the config file, which already carries the built-in defaults
fn progression_request(
    key: Option<&str>,
    scale: Option<&str>,
    count: Option<usize>,
    config: &Config,
) -> Result<ProgressionRequest> {
    let family = match scale {
        Some(s) => s
            .parse::<ScaleFamily>()
            .with_context(|| format!("invalid --scale {s}"))?,
        None => config.family(),
    };
    Ok(ProgressionRequest::new(
        key.unwrap_or(&config.key),
        family,
        count.unwrap_or(config.count),
    ))
}

fn resolve_instrument(flag: Option<&str>, config: &Config) -> Result<Instrument> {
    match flag {
        Some(name) => name
            .parse::<Instrument>()
            .with_context(|| format!("invalid --instrument {name}")),
        None => Ok(config.instrument()),
    }
}

fn run_progression(request: &ProgressionRequest, output: &OutputArgs, config: &Config) -> Result<()> {
    let mut rng = seeded_rng(output.seed);
    let chords = request.generate(&mut rng);
    if chords.is_empty() {
        tracing::info!(key = %request.root, count = request.count, "No chords generated");
    }

    let show_diagrams = output.diagrams || config.diagrams;
    let diagrams: Vec<ChordDiagram> = if show_diagrams {
        let instrument = resolve_instrument(output.instrument.as_deref(), config)?;
        chords.iter().map(|c| chord_diagram(&c.name, instrument)).collect()
    } else {
        Vec::new()
    };

    if output.json {
        let out = Output { request, chords: &chords, diagrams };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", render::progression(&chords));
    for diagram in &diagrams {
        println!();
        print!("{}", render::diagram(diagram));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config() -> Config {
        Config {
            key: "Eb".to_string(),
            scale: "Minor".to_string(),
            count: 6,
            instrument: "Piano".to_string(),
            diagrams: false,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let request = progression_request(Some("A"), Some("Major"), Some(3), &config()).unwrap();
        assert_eq!(request, ProgressionRequest::new("A", ScaleFamily::Major, 3));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let request = progression_request(None, None, None, &config()).unwrap();
        assert_eq!(request, ProgressionRequest::new("Eb", ScaleFamily::HarmonicMinor, 6));

        let request = progression_request(Some("G"), None, None, &config()).unwrap();
        assert_eq!(request, ProgressionRequest::new("G", ScaleFamily::HarmonicMinor, 6));
    }

    #[test]
    fn test_defaults_when_config_is_empty() {
        let request = progression_request(None, None, None, &Config::default()).unwrap();
        assert_eq!(request, ProgressionRequest::default());
    }

    #[test]
    fn test_invalid_scale_flag_is_error() {
        assert!(progression_request(None, Some("Dorian"), None, &config()).is_err());
    }

    #[test]
    fn test_instrument_flag_and_config() {
        assert_eq!(resolve_instrument(Some("bass"), &config()).unwrap(), Instrument::FrettedFour);
        assert_eq!(resolve_instrument(None, &config()).unwrap(), Instrument::Keyboard);
        assert!(resolve_instrument(Some("kazoo"), &config()).is_err());
    }

    #[test]
    fn test_count_is_bounded() {
        let parse = |count: &str| Cli::try_parse_from(["unwound", "generate", "--count", count]);
        assert!(parse("8").is_ok());
        assert!(parse("64").is_ok());
        assert!(parse("65").is_err());
        assert!(parse("0").is_err());
        assert!(parse("100000000000").is_err());
    }
}
