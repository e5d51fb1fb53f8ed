use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a to-do list in your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different store directory
    #[arg(short = 'C', long = "store-dir", global = true)]
    pub store_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List,
    /// Add a task to the end of the list
    Add(AddArgs),
    /// Toggle a task's done flag
    Toggle(IndexArgs),
    /// Delete a task
    Rm(IndexArgs),
    /// Move a task to a new position
    Mv(MvArgs),
    /// Print the store directory path
    Path,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Task index (0-based, as shown by `tk list`)
    pub index: usize,
}

#[derive(Args)]
pub struct MvArgs {
    /// Index of the task to move (0-based)
    pub from: usize,
    /// Destination position, counted with the task already removed
    pub to: usize,
}
