use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bunkguard-cli", version, about = "Bunkguard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Subject management
    Subject {
        #[command(subcommand)]
        action: commands::subject::SubjectAction,
    },
    /// Mark today's class for a subject
    Mark {
        #[command(subcommand)]
        action: commands::mark::MarkAction,
    },
    /// Ranked daily agenda
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Graded events (assignments, tests, exams)
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Attendance overview across all subjects
    Status,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Subject { action } => commands::subject::run(action),
        Commands::Mark { action } => commands::mark::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Event { action } => commands::event::run(action),
        Commands::Status => commands::status::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
