use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Command-line manager for student records over a REST backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the configured backend endpoint URL
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List students
    #[command(alias = "ls")]
    List {
        /// Filter the listing by a search term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a new student
    #[command(alias = "a")]
    Add {
        /// Student name
        name: String,

        /// Student age
        age: String,

        /// Explicit id to send to the backend (normally server-assigned)
        #[arg(long)]
        id: Option<String>,
    },

    /// Edit a student (opens $EDITOR unless fields are given)
    #[command(alias = "e")]
    Edit {
        /// Id of the student
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<String>,

        /// Skip the editor; unset fields keep their current values
        #[arg(long)]
        no_editor: bool,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        /// Id of the student
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search students (dedicated command)
    Search { term: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., endpoint)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
