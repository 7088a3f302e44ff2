use std::env;

use clap::Parser;

use super::command::{Cli, Commands};
use super::ConsoleNotifier;
use crate::errors::AppError;
use crate::storage::parse_storage_type;
use crate::store::ContactStore;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    env::set_var("STORAGE_CHOICE", &cli.storage_choice);

    let storage = parse_storage_type()?;
    let mut store = ContactStore::new(storage, Box::new(ConsoleNotifier))?;

    match cli.command {
        Commands::Add { name, number } => {
            store.add_contact(&name, &number)?;
        }

        Commands::Delete { name } => match store.find_by_name(&name).map(|c| c.id) {
            Some(id) => {
                store.delete_contact(&id)?;
            }
            None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
        },

        Commands::Favourite { name } => match store.find_by_name(&name).map(|c| c.id) {
            Some(id) => {
                store.toggle_favourite(id)?;
            }
            None => eprintln!("{}", AppError::NotFound("Contact".to_string())),
        },

        Commands::List { filter } => {
            if let Some(filter) = filter {
                store.set_filter(&filter);
            }

            if store.contacts().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            let visible = store.visible_contacts();
            for (mut i, c) in visible.iter().enumerate() {
                i += 1;
                let marker = if store.is_favourite(&c.id) { "*" } else { " " };
                println!("{i:>3}. {} {:<20} {:15}", marker, c.name, c.number);
            }
        }
    }

    Ok(())
}
