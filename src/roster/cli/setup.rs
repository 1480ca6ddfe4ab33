use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use roster::model::{SearchField, StudentDraft, StudentEdits};
use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "ROSTER_DATA";

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep track of student records from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding students.json and config.json (default: $ROSTER_DATA or the platform data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// More diagnostic output on stderr (-vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, help_heading = "Options")]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Roll,
    Name,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Roll => SearchField::RollNumber,
            SearchBy::Name => SearchField::Name,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all students
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a student
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Roll number (must be unique)
        roll_number: String,

        /// Full name
        name: String,

        /// Age in years
        #[arg(allow_hyphen_values = true)]
        age: String,

        #[arg(long = "class", value_name = "CLASS")]
        class_name: Option<String>,

        #[arg(long)]
        section: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Skip the confirmation for unusual ages
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Search students by roll number or name
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Text to look for (case-insensitive, partial matches count)
        query: String,

        /// Field to search
        #[arg(long, value_enum, default_value = "roll")]
        by: SearchBy,
    },

    /// Show one or more students in full
    #[command(alias = "v", display_order = 4)]
    View {
        /// Roll numbers of the students
        #[arg(required = true, num_args = 1..)]
        roll_numbers: Vec<String>,
    },

    /// Change a student's details (the roll number cannot change)
    #[command(alias = "e", display_order = 5)]
    Edit {
        /// Roll number of the student
        roll_number: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        #[arg(long = "class", value_name = "CLASS")]
        class_name: Option<String>,

        #[arg(long)]
        section: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Skip the confirmation for unusual ages
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete one or more students
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Roll numbers of the students
        #[arg(required = true, num_args = 1..)]
        roll_numbers: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (data-file, min-age, max-age)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty roster
    #[command(display_order = 11)]
    Init,

    /// Print the data and config file locations
    #[command(display_order = 12)]
    Path,
}

pub fn draft_from_args(
    roll_number: String,
    name: String,
    age: String,
    class_name: Option<String>,
    section: Option<String>,
    address: Option<String>,
) -> StudentDraft {
    StudentDraft {
        roll_number,
        name,
        age,
        class_name: class_name.unwrap_or_default(),
        section: section.unwrap_or_default(),
        address: address.unwrap_or_default(),
    }
}

pub fn edits_from_args(
    name: Option<String>,
    age: Option<String>,
    class_name: Option<String>,
    section: Option<String>,
    address: Option<String>,
) -> StudentEdits {
    StudentEdits {
        name,
        age,
        class_name,
        section,
        address,
    }
}
