// ABOUTME: Command-line arguments and how they override the loaded configuration

use crate::config::{Config, StartView};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flagdeck", version, about = "Terminal console for feature flags and movie search")]
pub struct Cli {
    /// Path to a TOML config file (defaults to ~/.flagdeck/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the feature flag service API
    #[arg(long)]
    pub flags_url: Option<String>,

    /// Base URL of the movie search service API
    #[arg(long)]
    pub movies_url: Option<String>,

    /// Seconds between status and health polls
    #[arg(long)]
    pub poll_interval: Option<u64>,

    /// Default toast lifetime in milliseconds
    #[arg(long)]
    pub toast_duration: Option<u64>,

    /// Screen to open at startup
    #[arg(long, value_enum)]
    pub view: Option<StartView>,
}

impl Cli {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(url) = &self.flags_url {
            config.flags_api_url.clone_from(url);
        }
        if let Some(url) = &self.movies_url {
            config.movies_api_url.clone_from(url);
        }
        if let Some(secs) = self.poll_interval {
            config.poll_interval_secs = secs;
        }
        if let Some(ms) = self.toast_duration {
            config.toast_duration_ms = ms;
        }
        if let Some(view) = self.view {
            config.start_view = view;
        }
    }
}
