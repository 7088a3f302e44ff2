use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Contact book with favourites and filtering")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Toggle a contact in or out of favourites
    Favourite {
        /// Name of contact to toggle
        #[arg(long)]
        name: String,
    },
    /// List contacts visible under the current filter
    List {
        /// Substring matched against names (case-insensitive) and numbers
        #[arg(long)]
        filter: Option<String>,
    },
}
