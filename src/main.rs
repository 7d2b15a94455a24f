use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use cave_automata::export::CaveSnapshot;
use cave_automata::{CaveConfig, CaveGenerator, SeedMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cave-automata", version, about = "Generate a connected cellular-automaton cave")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long, conflicts_with = "random_seed")]
    seed: Option<String>,
    /// Derive the seed from the clock (not reproducible)
    #[arg(long)]
    random_seed: bool,
    /// Percent chance an interior cell starts as wall
    #[arg(long)]
    fill: Option<u32>,
    #[arg(long)]
    smooth: Option<u32>,
    #[arg(long)]
    border: Option<usize>,
    #[arg(long)]
    wall_threshold: Option<usize>,
    #[arg(long)]
    room_threshold: Option<usize>,
    #[arg(long)]
    corridor_radius: Option<i32>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    /// Serve the generation profile over puffin_http until Enter is pressed
    #[arg(long)]
    profile: bool,
}

impl Cli {
    fn build_config(&self) -> Result<CaveConfig, cave_automata::ConfigError> {
        let mut config = match &self.config {
            Some(path) => CaveConfig::load(path)?,
            None => CaveConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = &self.seed {
            config.seed = SeedMode::Fixed(seed.clone());
        }
        if self.random_seed {
            config.seed = SeedMode::Random;
        }
        if let Some(fill) = self.fill {
            config.random_fill_percentage = fill;
        }
        if let Some(smooth) = self.smooth {
            config.smooth_amount = smooth;
        }
        if let Some(border) = self.border {
            config.border_size = border;
        }
        if let Some(threshold) = self.wall_threshold {
            config.wall_threshold = threshold;
        }
        if let Some(threshold) = self.room_threshold {
            config.room_threshold = threshold;
        }
        if let Some(radius) = self.corridor_radius {
            config.corridor_radius = radius;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.build_config()?;
    let generator = CaveGenerator::new(config)?;

    let server = if cli.profile {
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)?;
        puffin::set_scopes_on(true);
        tracing::info!(%addr, "profiler listening");
        Some(server)
    } else {
        None
    };

    let cave = generator.generate();

    match cli.format {
        OutputFormat::Ascii => println!("{}", cave.grid.to_ascii()),
        OutputFormat::Json => println!("{}", CaveSnapshot::from(&cave).to_json()?),
    }

    if let Some(_server) = server {
        puffin::GlobalProfiler::lock().new_frame();
        eprintln!("Profile ready; press Enter to exit");
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }

    Ok(())
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cave_automata=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
