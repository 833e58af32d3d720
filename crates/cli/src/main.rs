//! FreshBasket CLI - render the homepage and talk to a running site.
//!
//! # Usage
//!
//! ```bash
//! # Render the homepage against a local site and write it to a file
//! fb-cli render --out homepage.html
//!
//! # Subscribe an address to the newsletter
//! fb-cli subscribe jane@example.com
//!
//! # Check that the site is up
//! fb-cli health --base-url https://freshbasket.example
//! ```
//!
//! # Commands
//!
//! - `render` - Fill the page shell with live (or fallback) content
//! - `subscribe` - Submit the newsletter form
//! - `health` - Print the health check response

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "fb-cli")]
#[command(author, version, about = "FreshBasket CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the homepage once and write the HTML
    Render {
        /// Base URL of the running site
        #[arg(long, env = "FRESHBASKET_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Page shell with region markers (defaults to the bundled index.html)
        #[arg(long)]
        shell: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Email address
        email: String,

        /// Base URL of the running site
        #[arg(long, env = "FRESHBASKET_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
    /// Check the site's health endpoint
    Health {
        /// Base URL of the running site
        #[arg(long, env = "FRESHBASKET_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Render {
            base_url,
            shell,
            out,
        } => commands::render::run(&base_url, shell.as_deref(), out.as_deref()).await?,
        Commands::Subscribe { email, base_url } => {
            commands::subscribe::run(&base_url, &email).await?;
        }
        Commands::Health { base_url } => commands::health::run(&base_url).await?,
    }
    Ok(())
}
