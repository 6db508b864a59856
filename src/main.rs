mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::LinkOutput;
use undangan_core::message::{FoodPreference, GiftRequest};

#[derive(Parser)]
#[command(name = "undangan")]
#[command(about = "Wedding invitation helper: countdown, RSVP and guestbook links, calendar export")]
struct Cli {
    /// Config file (defaults to ~/.config/undangan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starting config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Show the event details and venue links
    Info,
    /// Show the time left until the wedding
    Countdown {
        /// Keep updating every second until the event starts
        #[arg(short, long)]
        watch: bool,
    },
    /// Build a WhatsApp RSVP message
    Rsvp {
        /// Guest name ("Tamu" when left blank)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Decline instead of confirming attendance
        #[arg(long)]
        absent: bool,

        /// Number of people attending
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        party_size: u32,

        /// Reason for not attending
        #[arg(short, long)]
        reason: Option<String>,

        /// Food preference: none, vegetarian or nut-allergy
        #[arg(short, long, default_value = "none")]
        food: FoodPreference,

        #[command(flatten)]
        output: LinkOutput,
    },
    /// Request a song for the reception
    Song {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        artist: String,

        #[command(flatten)]
        output: LinkOutput,
    },
    /// Send a wish for the guestbook
    Guestbook {
        #[arg(short, long, default_value = "")]
        name: String,

        #[arg(short, long, default_value = "")]
        message: String,

        #[command(flatten)]
        output: LinkOutput,
    },
    /// Ask for digital gift details (bank or ewallet)
    Gift {
        request: GiftRequest,

        #[command(flatten)]
        output: LinkOutput,
    },
    /// Export the event to a calendar
    Calendar {
        /// Invitation page URL to embed (defaults to page_url from config)
        #[arg(long)]
        page_url: Option<String>,

        /// Write a full .ics file instead of printing a data URL
        #[arg(short, long, conflicts_with = "payload")]
        output: Option<PathBuf>,

        /// Print the raw calendar payload instead of the data URL
        #[arg(long)]
        payload: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // stdout carries links and messages, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let invitation = || config::load_invitation(config_path);

    match cli.command {
        Commands::Init { force } => commands::init::run(config_path, force),
        Commands::Info => commands::info::run(&invitation()?),
        Commands::Countdown { watch } => commands::countdown::run(&invitation()?, watch).await,
        Commands::Rsvp {
            name,
            absent,
            party_size,
            reason,
            food,
            output,
        } => commands::rsvp::run(&invitation()?, name, absent, party_size, reason, food, output),
        Commands::Song {
            title,
            artist,
            output,
        } => commands::song::run(&invitation()?, title, artist, output),
        Commands::Guestbook {
            name,
            message,
            output,
        } => commands::guestbook::run(&invitation()?, name, message, output),
        Commands::Gift { request, output } => commands::gift::run(&invitation()?, request, output),
        Commands::Calendar {
            page_url,
            output,
            payload,
        } => commands::calendar::run(&invitation()?, page_url, output, payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_rsvp_flags() {
        let cli = Cli::try_parse_from([
            "undangan", "rsvp", "--name", "Budi", "--party-size", "3", "--food", "vegetarian",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Rsvp {
                name,
                absent,
                party_size,
                food,
                output,
                ..
            } => {
                assert_eq!(name, "Budi");
                assert!(!absent);
                assert_eq!(party_size, 3);
                assert_eq!(food, FoodPreference::Vegetarian);
                assert!(output.json);
                assert!(!output.open);
            }
            _ => panic!("expected rsvp"),
        }
    }

    #[test]
    fn rejects_zero_party_size() {
        assert!(Cli::try_parse_from(["undangan", "rsvp", "--party-size", "0"]).is_err());
    }

    #[test]
    fn parses_gift_kind() {
        let cli = Cli::try_parse_from(["undangan", "gift", "ewallet"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Gift {
                request: GiftRequest::EWallet,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["undangan", "gift", "cash"]).is_err());
    }
}
