use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::lock::FileLock;
use crate::store::TaskStore;

// ---------------------------------------------------------------------------
// Store directory resolution
// ---------------------------------------------------------------------------

/// Resolve the store directory: `-C` flag, then `$TICK_DIR`, then
/// `$XDG_DATA_HOME/tick`, then `~/.local/share/tick`.
pub fn resolve_store_dir(flag: Option<&str>) -> PathBuf {
    if let Some(dir) = flag {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("TICK_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    let data_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_dir.join("tick")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_dir = resolve_store_dir(cli.store_dir.as_deref());

    match cli.command {
        None => {
            // No subcommand launches the TUI; main.rs handles that path
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&store_dir, json),
            Commands::Add(args) => cmd_add(&store_dir, args, json),
            Commands::Toggle(args) => cmd_toggle(&store_dir, args, json),
            Commands::Rm(args) => cmd_rm(&store_dir, args, json),
            Commands::Mv(args) => cmd_mv(&store_dir, args, json),
            Commands::Path => cmd_path(&store_dir, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Print the resulting list — `--json` as one JSON document, otherwise one
/// task per line.
fn print_list(store: &TaskStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(store.tasks()))?);
    } else {
        for line in format_task_list(store.tasks()) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_list(store_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::load(store_dir);
    print_list(&store, json)
}

fn cmd_add(
    store_dir: &Path,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(store_dir)?;
    let mut store = TaskStore::load(store_dir);
    // Empty title is a silent no-op (mirrors dismissing the add dialog)
    if !store.add(&args.title)? {
        return Ok(());
    }
    if json {
        print_list(&store, true)
    } else {
        let index = store.len() - 1;
        println!("{}", format_task_line(index, &store.tasks()[index]));
        Ok(())
    }
}

fn cmd_toggle(
    store_dir: &Path,
    args: IndexArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(store_dir)?;
    let mut store = TaskStore::load(store_dir);
    store.toggle(args.index)?;
    if json {
        print_list(&store, true)
    } else {
        println!(
            "{}",
            format_task_line(args.index, &store.tasks()[args.index])
        );
        Ok(())
    }
}

fn cmd_rm(
    store_dir: &Path,
    args: IndexArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(store_dir)?;
    let mut store = TaskStore::load(store_dir);
    let removed = store.remove(args.index)?;
    if json {
        print_list(&store, true)
    } else {
        println!("removed {}: {}", args.index, removed.title);
        Ok(())
    }
}

fn cmd_mv(
    store_dir: &Path,
    args: MvArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire_default(store_dir)?;
    let mut store = TaskStore::load(store_dir);
    store.reorder(args.from, args.to)?;
    print_list(&store, json)
}

fn cmd_path(store_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!(
            "{}",
            serde_json::json!({ "store_dir": store_dir.display().to_string() })
        );
    } else {
        println!("{}", store_dir.display());
    }
    Ok(())
}
