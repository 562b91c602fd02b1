//! article-forge - illustrated article batches on DashScope
//!
//! Licensed by offline certificates bound to the DashScope API key

#![allow(missing_docs)]

use article_forge::cli::{self, Cli};
use article_forge::utils::init_logging;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    init_logging("info");

    let cli = Cli::parse();
    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
