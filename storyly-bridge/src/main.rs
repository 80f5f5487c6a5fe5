use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storyly_bridge::{
    inspect, load_method_calls, load_raw_config, replay, BridgeSettings, DEFAULT_DISPLAY_WIDTH,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Story widget bridge tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a mount configuration and print the typed result
    Inspect {
        #[arg(long, value_name = "PATH", help = "JSON object with mount arguments")]
        config: PathBuf,
    },
    /// Mount a recording widget and replay host commands against it
    Replay {
        #[arg(long, value_name = "PATH", help = "JSON object with mount arguments")]
        config: PathBuf,

        #[arg(
            long,
            value_name = "PATH",
            help = "JSON lines file of {\"method\", \"arguments\"} calls"
        )]
        commands: Option<PathBuf>,

        #[arg(
            long,
            default_value_t = DEFAULT_DISPLAY_WIDTH,
            help = "Host display width used for the mount constraint"
        )]
        display_width: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Command::Inspect { config } => {
            let raw = load_raw_config(&config)?;
            println!("{}", serde_json::to_string_pretty(&inspect(&raw))?);
        }
        Command::Replay {
            config,
            commands,
            display_width,
        } => {
            let raw = load_raw_config(&config)?;
            let calls = match commands {
                Some(path) => load_method_calls(&path)?,
                None => Vec::new(),
            };
            let settings = BridgeSettings { display_width };
            println!(
                "{}",
                serde_json::to_string_pretty(&replay(&settings, raw, calls))?
            );
        }
    }
    Ok(())
}
