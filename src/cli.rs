use clap::{Parser, Subcommand};

use crate::model::{Filter, Mode, Theme};

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Card-style todo list for the terminal")]
pub struct Cli {
    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new task
    #[command(aliases = ["a", "new"])]
    Add {
        /// Task text, e.g. "Hand in the essay"
        text: String,

        /// Due date: "today", "tomorrow", or "YYYY-MM-DD"
        #[arg(short = 'd', long = "due")]
        due: String,
    },

    /// List tasks as cards, sorted by due date
    #[command(aliases = ["l", "ls"])]
    List {
        /// Which tasks to show
        #[arg(short = 'f', long = "filter", value_enum, default_value = "all")]
        filter: Filter,
    },

    /// Mark a task as done by id
    #[command(alias = "d")]
    Done { id: u64 },

    /// Remove a task by id
    #[command(aliases = ["rm", "del"])]
    Remove {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Show task counts
    #[command(alias = "st")]
    Stats,

    /// Show or switch the accent theme
    Theme {
        /// Theme name to switch to
        #[arg(value_enum)]
        name: Option<Theme>,

        /// List available themes
        #[arg(short = 'l', long = "list")]
        list: bool,
    },

    /// Show, set, or toggle dark mode
    Mode {
        /// "dark" or "light"; omit to toggle
        #[arg(value_enum)]
        value: Option<Mode>,
    },

    /// Generate shell completions
    #[command(aliases = ["comp", "completions"])]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
