use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barakah", version, about = "A cozy terminal companion for tracking your Ramadan journey")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Toggle a prayer between prayed and not prayed
    Mark {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Day to act on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Toggle Quran reading after a prayer
    Quran {
        /// Prayer name (fajr, dhuhr, asr, maghrib, isha)
        prayer: String,
        /// Day to act on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Set the night's Tarawih rak'ah count (0-8)
    Tarawih {
        /// Rak'ahs prayed; counts above 8 are clamped
        rakahs: u8,
        /// Day to act on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Set the day's reflection note
    Note {
        /// Note text (replaces any existing note)
        text: String,
        /// Day to act on (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a day's record and score
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Personal goal management
    Goals {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Show streak, totals, and Ramadan progress
    Stats {
        /// Show a heatmap for the last 7 days
        #[arg(long)]
        week: bool,
    },
    /// Print a short reflection on the last week
    Reflect,
    /// Export a weekly text summary to stdout
    Export,
    /// Reset one day, or erase everything
    Reset {
        /// Day to reset (YYYY-MM-DD)
        #[arg(long, conflicts_with = "all")]
        day: Option<String>,
        /// Erase all history and goals
        #[arg(long)]
        all: bool,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show or update configuration
    Config {
        /// First day of Ramadan (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
        /// Hijri day offset for local moon sighting
        #[arg(long)]
        hijri_offset: Option<i32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add a goal
    Add {
        /// Goal text
        text: String,
    },
    /// List goals with their ids
    List,
    /// Toggle a goal's completed flag
    Toggle {
        /// Goal id (see `goals list`)
        id: String,
    },
    /// Delete a goal
    Delete {
        /// Goal id (see `goals list`)
        id: String,
    },
}
