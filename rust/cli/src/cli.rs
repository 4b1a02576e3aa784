//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Play a round of Blackjack against the dealer"
)]
pub struct BlackjackCli {
    /// Subcommand to run; `play` when omitted
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Play one round against the dealer
    Play {
        /// Seed for the shuffle; the same seed deals the same cards
        #[arg(long)]
        seed: Option<u64>,
        /// Name shown for the player
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the shuffled deck for a seed
    Deck {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration
    Cfg,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Play {
            seed: None,
            name: None,
        }
    }
}
