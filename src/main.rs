use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use menu_board::application::Application;
use menu_board::config::Config;
use menu_board::constants;
use menu_board::logging;

#[derive(Parser)]
#[command(name = constants::APP_NAME)]
#[command(version = constants::APP_VERSION)]
#[command(about = constants::APP_DESCRIPTION, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Products endpoint, overrides the configuration
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Read the products from a JSON file instead of the endpoint
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Leave out products marked as unavailable
    #[arg(long, global = true)]
    hide_unavailable: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the menu page
    Render {
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Stylesheet to link from the page
        #[arg(long)]
        stylesheet: Option<String>,

        /// Fail when the products cannot be loaded instead of rendering an empty menu
        #[arg(long)]
        strict: bool,
    },

    /// List the menu categories and their anchors
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    config.hide_unavailable |= cli.hide_unavailable;

    match cli.command {
        Commands::Render { output, title, stylesheet, strict } => {
            if let Some(title) = title {
                config.title = title;
            }
            if stylesheet.is_some() {
                config.stylesheet = stylesheet;
            }

            let application = Application::new(config);
            let page = application.render_page(cli.file.as_deref(), strict)?;
            application.write_page(&page, output.as_deref())
        }
        Commands::Categories => {
            let application = Application::new(config);
            for (category, anchor) in application.categories(cli.file.as_deref())? {
                println!("{category}\t{fragment}", fragment = anchor.header_fragment());
            }
            Ok(())
        }
    }
}
