use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io::IsTerminal;

use crate::cli::{Cli, Commands};
use crate::display::{print_summary, print_task_list, print_theme_list, theme_name};
use crate::model::Mode;
use crate::storage::{load_state, save_state, state_path, tasks_path};
use crate::store::TaskStore;
use crate::util::{confirm, parse_due};
use crate::view::{project, summarize};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let state_path = state_path();
    let mut state = load_state(&state_path);
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let mut store = TaskStore::open(tasks_path())?;

    match cli.command {
        Commands::Completions { .. } => {
            // Handled before opening the store.
        }

        Commands::Add { text, due } => {
            let due = parse_due(&due).unwrap_or_else(|e| {
                eprintln!("Invalid due date: {e}");
                std::process::exit(2);
            });

            match store.add(&text, due)? {
                Some(task) => println!("Created task #{}", task.id),
                None => {
                    eprintln!("Task text is empty");
                    std::process::exit(2);
                }
            }
        }

        Commands::List { filter } => {
            let view = project(store.all(), filter);
            print_task_list(&view, filter, &state, color);
            println!();
            print_summary(&summarize(store.all()), &state, color);
        }

        Commands::Done { id } => {
            if store.complete(id)? {
                println!("Done #{id}");
            } else if store.get(id).is_some() {
                println!("Task #{id} is already done");
            } else {
                eprintln!("No task with id {id}");
                std::process::exit(1);
            }
        }

        Commands::Remove { id, yes } => {
            if store.get(id).is_none() {
                eprintln!("No task with id {id}");
                std::process::exit(1);
            }

            if !yes && !confirm(&format!("Remove task #{id}?")) {
                println!("Kept #{id}");
                return Ok(());
            }

            store.remove(id)?;
            println!("Removed #{id}");
        }

        Commands::Stats => {
            print_summary(&summarize(store.all()), &state, color);
        }

        Commands::Theme { name, list } => {
            if list {
                print_theme_list(&state, color);
                return Ok(());
            }

            if let Some(name) = name {
                state.theme = name;
                save_state(&state_path, &state)?;
                println!("Switched theme to {}", theme_name(name));
                return Ok(());
            }

            println!("Current theme: {}", theme_name(state.theme));
        }

        Commands::Mode { value } => {
            let next = value.unwrap_or_else(|| state.dark_mode.toggled());
            state.dark_mode = next;
            save_state(&state_path, &state)?;
            match next {
                Mode::Dark => println!("Dark mode on"),
                Mode::Light => println!("Dark mode off"),
            }
        }
    }

    Ok(())
}
