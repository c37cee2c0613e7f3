mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdeck", about = "Personal task tracker", version)]
struct Cli {
    /// Path of the task file
    #[arg(long, global = true, default_value = "tasks.json")]
    file: String,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Task description
        description: String,
    },

    /// List all tasks
    List,

    /// Mark a task as complete
    Complete {
        /// Task id
        id: String,
    },

    /// Delete one task by id, or every task with 'all'
    Delete {
        /// Task id, or 'all'
        target: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { title, description } => commands::add::run(&cli.file, title, description),
        Commands::List => commands::list::run(&cli.file, cli.json),
        Commands::Complete { id } => commands::complete::run(&cli.file, id),
        Commands::Delete { target } => commands::delete::run(&cli.file, target),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
