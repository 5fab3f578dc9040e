//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petshop", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "petshop.sqlite3", global = true)]
    pub db: PathBuf,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find one person with their pet
    FindPerson {
        /// Person id (sent as the `person_id` parameter)
        person_id: String,
    },
    /// Create one person
    CreatePerson {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        age: i64,
        #[arg(long)]
        pet_id: Option<i64>,
    },
    /// List every pet
    ListPets,
    /// Delete every pet with this name
    DeletePet {
        /// Pet name (sent as the `name` parameter)
        name: String,
    },
}
