// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Takes a compose file or a single image plus registry and filter knobs.

use clap::Parser;
use docker_check_tags::check::TagFilters;
use docker_check_tags::output::OutputMode;
use docker_check_tags::registry::{DEFAULT_PAGE_SIZE, DEFAULT_REGISTRY_URL, FetchOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docker-check-tags")]
#[command(about = "Check compose services for newer image tags on Docker Hub")]
#[command(version)]
pub struct Cli {
    /// Compose file listing the services to check
    #[arg(required_unless_present = "image", conflicts_with = "image")]
    pub compose_file: Option<PathBuf>,

    /// Check a single image reference instead of a compose file
    #[arg(long, value_name = "REF")]
    pub image: Option<String>,

    /// Base URL of the Docker Hub API
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Tags requested per page
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Pause between tag pages, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub page_delay_ms: u64,

    /// Keep tags that look like alpha, beta or rc releases
    #[arg(long)]
    pub include_prereleases: bool,

    /// Keep tags with a different number of version components
    #[arg(long)]
    pub allow_shape_change: bool,

    /// Keep tags that start with a word, like ubuntu-20.04
    #[arg(long)]
    pub allow_named_releases: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Normal)]
    pub output: OutputMode,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            base_url: self.registry_url.clone(),
            page_size: self.page_size,
            page_delay: Duration::from_millis(self.page_delay_ms),
        }
    }

    pub fn filters(&self) -> TagFilters {
        TagFilters {
            release_only: !self.include_prereleases,
            same_shape: !self.allow_shape_change,
            no_named_releases: !self.allow_named_releases,
        }
    }
}
