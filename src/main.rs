//! justcms - Query the JustCMS public API from the command line
//!
//! This is the main entry point for the CLI application.

#[tokio::main]
async fn main() {
  justcms::cli::run().await;
}
