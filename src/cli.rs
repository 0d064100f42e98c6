//! Command line interface.

use crate::error::{Error, Result};
use crate::export::{AssetSelection, ExportBuilder, ExportReport};
use crate::library::{prompt_section, PlexClient};
use crate::progress::StyleOptions;

use clap::Parser;
use dialoguer::{Input, Password};

#[derive(Parser, Debug)]
#[command(
    name = "plex-asset-exporter",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    about = "Export posters, backgrounds, banners and themes from a Plex library next to the media files"
)]
pub struct Cli {
    /// The local network URL of the Plex server (prompted when missing)
    #[arg(long = "base_url", env = "PLEX_URL")]
    pub base_url: Option<String>,

    /// Your Plex token (prompted when missing).
    /// Prefer the PLEX_TOKEN environment variable: arguments are visible in
    /// process listings.
    #[arg(long, env = "PLEX_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// The Plex server name
    #[arg(long)]
    pub server: Option<String>,

    /// The Plex library name (prompted when missing or not found)
    #[arg(long)]
    pub library: Option<String>,

    /// Which assets should be exported
    #[arg(long, value_enum, default_value_t = AssetSelection::All)]
    pub assets: AssetSelection,

    /// Overwrite existing assets
    #[arg(long)]
    pub overwrite: bool,

    /// Show extra information
    #[arg(long)]
    pub verbose: bool,

    /// Retries of transient HTTP failures per request
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Disable progress bars
    #[arg(long = "no_progress")]
    pub no_progress: bool,
}

impl Cli {
    /// Run the export described by the arguments and print the totals.
    pub async fn execute(self) -> Result<ExportReport> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Input::<String>::new()
                .with_prompt("Base Url")
                .interact_text()
                .map_err(|e| Error::Prompt(e.to_string()))?,
        };
        let token = match self.token {
            Some(token) => token,
            None => Password::new()
                .with_prompt("Plex Token")
                .interact()
                .map_err(|e| Error::Prompt(e.to_string()))?,
        };

        let plex = PlexClient::builder(base_url, token)
            .retries(self.retries)
            .build()?;

        let style_options = if self.no_progress {
            StyleOptions::hidden()
        } else {
            StyleOptions::default()
        };

        let report = ExportBuilder::new()
            .assets(self.assets)
            .overwrite(self.overwrite)
            .verbose(self.verbose)
            .server(self.server)
            .style_options(style_options)
            .build()
            .run(&plex, self.library.as_deref(), prompt_section)
            .await?;

        println!("\nTOTAL SKIPPED: {}", report.tally.skipped);
        println!("TOTAL DOWNLOADED: {}", report.tally.downloaded);
        Ok(report)
    }
}
