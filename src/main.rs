mod cli;
mod config;
mod math;
mod user;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "factgreet", about = "Greet a user and print a factorial")]
pub struct Args {
    #[arg(long, env = "FACTGREET_NAME", help = "Name to greet (default: Alice)")]
    pub name: Option<String>,

    #[arg(
        short = 'n',
        long,
        env = "FACTGREET_N",
        allow_negative_numbers = true,
        help = "Number to compute the factorial of (default: 5)"
    )]
    pub number: Option<i64>,

    #[arg(long, value_name = "FORMAT", help = "Output format: text, json")]
    pub format: Option<String>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Debug output (print resolved settings)")]
    pub debug: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from(config_path)?
    } else {
        config::Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: failed to load config, using defaults: {}", e);
            config::Config::default()
        })
    };

    let settings = cli::prepare(&args, &cfg)?;

    if args.debug {
        match &args.config {
            Some(path) => eprintln!("[DEBUG] Config: {}", path.display()),
            None => eprintln!("[DEBUG] Config search: {:?}", config::Config::default_paths()),
        }
        eprintln!("[DEBUG] Name: {}", settings.name);
        eprintln!("[DEBUG] N: {}", settings.n);
        eprintln!("[DEBUG] Format: {}", settings.format.as_str());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&settings, &mut out)
}
