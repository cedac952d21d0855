use clap::{Args, Parser, Subcommand};
use slate_domain::DEFAULT_COLUMN_ID;

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "A five-column task board for the terminal", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the board file (or set SLATE_FILE)
    #[arg(long, global = true, value_name = "FILE", env = "SLATE_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
    /// Show the board columns with task counts
    Show,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task
    Add(TaskAddArgs),
    /// List tasks, optionally for one column
    List {
        #[arg(long)]
        column: Option<String>,
    },
    /// Move a task to a column, optionally at a position
    Move(TaskMoveArgs),
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
pub struct TaskAddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub content: String,
    #[arg(long, default_value = DEFAULT_COLUMN_ID)]
    pub column: String,
}

#[derive(Args)]
pub struct TaskMoveArgs {
    #[arg(long)]
    pub id: String,
    /// Destination column id
    #[arg(long)]
    pub to: String,
    /// Position within the destination column (defaults to the end)
    #[arg(long)]
    pub position: Option<usize>,
}
