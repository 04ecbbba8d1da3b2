use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom", bin_name = "stockroom", version)]
#[command(
    about = "A tiny in-memory inventory manager",
    long_about = "Starts an interactive session. Type `help` inside it for the list of commands."
)]
pub struct Cli {
    /// JSON file with currency, labels and seed products
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log catalog and navigation activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed inside the session.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Show the product list
    #[command(visible_aliases = ["ls", "home"])]
    List,

    /// Open a blank form for a new product
    #[command(visible_alias = "new")]
    Add,

    /// Open the form for an existing product
    Edit {
        /// Product id (e.g. 1 or #1)
        id: String,
    },

    /// Delete a product right away
    #[command(visible_alias = "rm")]
    Delete {
        /// Product id (e.g. 1 or #1)
        id: String,
    },

    /// Navigate to a route path (/, /add, /edit/<id>)
    Open { path: String },

    /// Set the name field of the open form (spacing is kept as typed)
    Name {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the price field of the open form
    Price {
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Save the open form and return to the list
    Save,

    /// Leave the form without saving
    Back,

    /// Show the current view again
    Show,

    /// List session commands
    Help,

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

impl SessionLine {
    pub fn parse_line(line: &str) -> Result<SessionCommand, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

/// Everything after the command word, minus the single separator that follows it.
///
/// Tokenizing loses runs of spaces, so commands that take free text read it from here.
pub fn raw_argument(line: &str) -> &str {
    let line = line.trim_start();
    let rest = match line.find(char::is_whitespace) {
        Some(end) => &line[end..],
        None => return "",
    };
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}

/// (name with aliases, description) for every session command, in declaration order.
pub fn session_help_entries() -> Vec<(String, String)> {
    SessionLine::command()
        .get_subcommands()
        .map(|cmd| {
            let mut names = vec![cmd.get_name().to_string()];
            names.extend(cmd.get_visible_aliases().map(str::to_string));
            let args: Vec<String> = cmd
                .get_positionals()
                .map(|arg| format!("<{}>", arg.get_id()))
                .collect();
            let mut usage = names.join(", ");
            if !args.is_empty() {
                usage.push(' ');
                usage.push_str(&args.join(" "));
            }
            let about = cmd.get_about().map(|a| a.to_string()).unwrap_or_default();
            (usage, about)
        })
        .collect()
}
