mod commands;
mod render;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "termcal")]
#[command(about = "Terminal-styled personal calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event
    Add {
        /// Event description
        text: String,

        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM). Without it the event is all-day
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM), requires --start
        #[arg(short, long, requires = "start")]
        end: Option<String>,
    },
    /// List all events, grouped by date
    List,
    /// Remove an event by the id shown in `list`
    Remove { id: u64 },
    /// Show a month grid
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the week containing a date, Monday first
    Week {
        /// Any date inside the week (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show a single day
    Day {
        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            text,
            date,
            start,
            end,
        } => commands::add::run(&text, date.as_deref(), start.as_deref(), end.as_deref()),
        Commands::List => commands::list::run(),
        Commands::Remove { id } => commands::remove::run(id),
        Commands::Month { date } => commands::month::run(date.as_deref()),
        Commands::Week { date } => commands::week::run(date.as_deref()),
        Commands::Day { date } => commands::day::run(date.as_deref()),
    }
}
