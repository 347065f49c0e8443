use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

use crate::models::cart::Size as ModelSize;

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Aura Coffee Lounge: mood-driven menu, recommendations and table service")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (dotenv format)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the coffee menu
    Menu {
        /// Only show blends for this mood
        #[arg(short, long)]
        mood: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the AI flavor recommender
    Recommend {
        /// Mood to optimize for
        #[arg(short, long)]
        mood: Option<String>,
        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
        /// Also show the taste profile
        #[arg(long)]
        profile: bool,
    },
    /// Show the mood rooms
    Rooms {
        /// Only show rooms for this mood
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// Show the table map
    Tables,
    /// Scan a coffee card with the AR camera
    Origin {
        /// Coffee id printed on the card
        id: Option<String>,
    },
    /// Tap the table NFC tag to check in
    Checkin {
        /// Tag of a specific table, e.g. B2
        #[arg(short, long)]
        table: Option<String>,
    },
    /// Show loyalty status and rewards
    Loyalty,
    /// Price a single configured drink
    Quote {
        /// Product id
        #[arg(short, long)]
        item: String,
        /// Cup size
        #[arg(short, long, default_value = "medium")]
        size: Size,
        /// Milk type
        #[arg(long, default_value = "Regular")]
        milk: String,
        /// Serving temperature
        #[arg(short, long, default_value = "Hot")]
        temperature: String,
        /// Extra option, repeatable
        #[arg(short, long = "extra")]
        extras: Vec<String>,
        /// Number of drinks
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Start an interactive kiosk session
    Kiosk,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl From<Size> for ModelSize {
    fn from(size: Size) -> Self {
        match size {
            Size::Small => ModelSize::Small,
            Size::Medium => ModelSize::Medium,
            Size::Large => ModelSize::Large,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Small => write!(f, "small"),
            Size::Medium => write!(f, "medium"),
            Size::Large => write!(f, "large"),
        }
    }
}
