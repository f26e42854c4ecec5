//! Orb Weaver CLI
//!
//! Usage:
//!   orb-weaver [OPTIONS]
//!
//! Options:
//!   -s, --settings <FILE>  Weave settings file (TOML format)
//!   --seed <N>             Seed for the random stream
//!   -f, --format <FMT>     Output format: json or toml
//!   --lint                 Report defects in the finished web on stderr
//!   -v                     Raise log verbosity (repeatable)
//!   -h, --help             Print help

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use orb_weaver::web::lint;
use orb_weaver::{export, generate, ExportConfig, ExportFormat, WeaveSettings};

#[derive(Parser)]
#[command(name = "orb-weaver")]
#[command(about = "Procedural orb-weaver spider web geometry")]
struct Cli {
    /// Weave settings file (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Canvas width
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height
    #[arg(long)]
    height: Option<f64>,

    /// Seed for the random stream (drawn at random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Largest angular gap between spokes, in degrees
    #[arg(long)]
    max_gap: Option<f64>,

    /// Fraction of a gap a new spoke keeps from its neighbours
    #[arg(long)]
    clearance: Option<f64>,

    /// Auxiliary spiral revolutions
    #[arg(long)]
    rings: Option<usize>,

    /// Capture rings per auxiliary zone
    #[arg(long)]
    capacity: Option<usize>,

    /// Frame jitter factor
    #[arg(long)]
    jitter: Option<f64>,

    /// Output format: json or toml
    #[arg(short, long, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Emit only the tagged segment list
    #[arg(long)]
    segments_only: bool,

    /// Emit output without indentation
    #[arg(long)]
    compact: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report defects in the finished web on stderr
    #[arg(long)]
    lint: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command-line values on top of `settings`
    fn apply(&self, mut settings: WeaveSettings) -> WeaveSettings {
        if let Some(width) = self.width {
            settings.canvas.width = width;
        }
        if let Some(height) = self.height {
            settings.canvas.height = height;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(degrees) = self.max_gap {
            settings.web.max_gap_degrees = degrees;
        }
        if let Some(factor) = self.clearance {
            settings.web.min_clearance_factor = factor;
        }
        if let Some(rings) = self.rings {
            settings.web.ring_count = rings;
        }
        if let Some(capacity) = self.capacity {
            settings.web.cap_capacity = capacity;
        }
        if let Some(factor) = self.jitter {
            settings.web.jitter_factor = factor;
        }
        settings
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Load settings
    let settings = match &cli.settings {
        Some(path) => {
            let source = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading settings '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            match WeaveSettings::from_str(&source) {
                Ok(s) => s,
                Err(e) => {
                    eprint!("{}", e.format(&source, &path.display().to_string()));
                    std::process::exit(1);
                }
            }
        }
        None => WeaveSettings::default(),
    };
    let settings = cli.apply(settings);

    let seed = match settings.seed {
        Some(seed) => seed,
        None => {
            let seed = settings.seed_or_random();
            log::info!("no seed given, weaving with seed {}", seed);
            seed
        }
    };

    let geometry = match generate(
        settings.canvas.width,
        settings.canvas.height,
        &settings.web,
        seed,
    ) {
        Ok(geometry) => geometry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.lint {
        for warning in lint::check(&geometry, &settings.web) {
            eprintln!("warning: {}", warning);
        }
    }

    let config = ExportConfig::new()
        .with_format(cli.format)
        .with_pretty_print(!cli.compact)
        .with_segments_only(cli.segments_only);
    let text = match export(&geometry, &config) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", text),
    }
}
