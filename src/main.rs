use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mancala::config::MatchConfig;
use mancala::net::PeerLink;
use mancala::{Board, Console, Side};

/// Play Kalah against an opponent on another machine.
#[derive(Parser)]
#[command(name = "mancala", about = "Two-player Mancala over TCP")]
struct Cli {
    /// Opponent's hostname or IP address (prompted if omitted)
    #[arg(long)]
    opponent: Option<String>,

    /// Your side: A or B (prompted if omitted)
    #[arg(long)]
    side: Option<Side>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "mancala.toml")]
    config: PathBuf,

    /// Override the base game port
    #[arg(long)]
    port: Option<u16>,

    /// Override the starting marbles per pit
    #[arg(long)]
    marbles: Option<u8>,

    /// Override the opponent move timeout in seconds (0 = wait forever)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Play both sides at this console, without a network
    #[arg(long)]
    local: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(marbles) = cli.marbles {
        config = config.with_marbles_per_pit(marbles);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_receive_timeout_secs(secs);
    }
    config.validate().context("invalid configuration")?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    console.say("~~~~~~~~~~~~~~~~~~~~~~~~")?;
    console.say(" ~o~o~o Mancala o~o~o~")?;
    console.say("~~~~~~~~~~~~~~~~~~~~~~~~\n")?;

    let mut board = Board::new(config.marbles_per_pit);

    if cli.local {
        let winner = console.run_match::<PeerLink>(&mut board, None, None)?;
        console.say(format_args!("Side {winner} wins!"))?;
        return Ok(());
    }

    let opponent = match cli.opponent {
        Some(host) => host,
        None => console.prompt("Enter opponent's hostname or ip address: ")?,
    };

    console.say(format_args!("{board}\n"))?;

    let side = match cli.side {
        Some(side) => side,
        None => console
            .prompt("Enter your side (A | B): ")?
            .parse::<Side>()
            .map_err(anyhow::Error::msg)?,
    };

    console.say("Waiting for opponent to connect...")?;
    let mut link = PeerLink::establish(&opponent, side, &config)
        .with_context(|| format!("connecting to {opponent}"))?;

    let winner = console
        .run_match(&mut board, Some(side), Some(&mut link))
        .context("playing match")?;
    link.close().context("closing connection")?;

    if winner == side {
        console.say("You win!")?;
    } else {
        console.say("You lose.")?;
    }
    Ok(())
}
