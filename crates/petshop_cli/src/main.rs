//! PetShop command-line dispatcher.
//!
//! Stands in for an HTTP server: turns one command into an `HttpRequest`,
//! runs the matching view, and prints the `HttpResponse` as JSON.

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod dispatch;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args
            .log_level
            .as_deref()
            .unwrap_or(petshop_core::default_log_level());
        if let Err(err) = petshop_core::init_logging(level, log_dir) {
            eprintln!("petshop: {err}");
            return ExitCode::FAILURE;
        }
    }

    let conn = match petshop_core::db::open_db(&args.db) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("petshop: failed to open `{}`: {err}", args.db.display());
            return ExitCode::FAILURE;
        }
    };

    let response = dispatch::dispatch(&conn, args.command);
    match serde_json::to_string_pretty(&response) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("petshop: failed to render response: {err}");
            return ExitCode::FAILURE;
        }
    }

    if response.status_code >= 400 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
