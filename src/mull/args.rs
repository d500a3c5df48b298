use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mull")]
#[command(about = "A reflection and diary journal, synced to a GitHub repository", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a reflection question with your past answers
    #[command(alias = "q")]
    Question {
        /// Pick a specific question instead of a random one
        #[arg(long)]
        id: Option<u32>,
    },

    /// Save an answer to a reflection question
    #[command(alias = "r")]
    Reflect {
        /// Question id (see `mull question`)
        question_id: u32,

        /// The answer text
        text: String,
    },

    /// List every answer to one question, newest first
    Answers { question_id: u32 },

    /// Show the diary entry for a date, plus the same day in other years
    #[command(alias = "d")]
    Diary {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<String>,
    },

    /// Save the diary entry for a date (empty text removes it)
    #[command(alias = "w")]
    Write {
        /// The entry text
        text: String,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Fetch both documents from GitHub, replacing local state
    Sync,

    /// Export both documents into one JSON file
    Export {
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import a previously exported JSON file
    Import { file: PathBuf },

    /// Get or set GitHub settings (keys: repo, token, branch)
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Generate a settings share link, or apply a pasted one
    ShareLink {
        /// A pasted share link to apply; omit to generate one
        link: Option<String>,
    },

    /// Test the GitHub connection
    Check,
}
