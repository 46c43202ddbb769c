use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::api::{gateway::DEFAULT_API_URL, modrinth::{RequestedStatus, VersionStatus, VersionType}};

#[derive(Parser)]
#[command(version, about = "Publish versions to Modrinth", long_about = None)]
pub struct Args {
    /// The Modrinth personal access token, leave empty for anonymous access
    #[arg(long, short = 'k', env = "MODRINTH_TOKEN", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Base url of the api, eg. https://staging-api.modrinth.com
    #[arg(long, env = "MODRINTH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Build the request but stop short of actually submitting it
    #[arg(long)]
    pub dryrun: bool,

    /// Log more, pass twice for everything
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub subcommand: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new version for a project
    CreateVersion(CreateVersionArgs),

    /// Show a project by id or slug
    #[command(alias = "p")]
    Project {
        id: String
    },

    /// Show a version by id
    #[command(alias = "v")]
    Version {
        id: String
    },

    /// Print the api's welcome message
    Welcome,

    /// Print shell completions for specified shell
    Completion {
        #[clap(value_enum)]
        shell: Shell
    }
}

#[derive(clap::Args)]
pub struct CreateVersionArgs {
    /// Project id or slug to create the version for
    #[arg(long, short = 'p')]
    pub project: String,

    /// A friendly name for the new version
    #[arg(long, short = 'n')]
    pub name: String,

    /// Version string (semantic version, etc)
    #[arg(long, short = 'V')]
    pub version_number: Option<String>,

    /// Path to a markdown file with the changelog
    #[arg(long, short = 'c')]
    pub changelog_path: PathBuf,

    /// Add an embedded library dependency (project id, project slug, version id or file name)
    #[arg(long, visible_alias = "ed")]
    pub embedded_dep: Vec<String>,

    /// Add an incompatible dependency (project id, project slug, version id or file name)
    #[arg(long, visible_alias = "id")]
    pub incompatible_dep: Vec<String>,

    /// Add an optional dependency (project id, project slug, version id or file name)
    #[arg(long, visible_alias = "od")]
    pub optional_dep: Vec<String>,

    /// Add a required dependency (project id, project slug, version id or file name)
    #[arg(long, visible_alias = "rd")]
    pub required_dep: Vec<String>,

    /// Game version to associate the files with, can be repeated
    #[arg(long, short = 'g', required = true)]
    pub game_version: Vec<String>,

    /// The release type of the files
    #[arg(long, short = 't', value_enum)]
    pub version_type: VersionType,

    /// Loader for this version, can be repeated
    #[arg(long, short = 'l', required = true)]
    pub loader: Vec<String>,

    /// Mark this version as featured
    #[arg(long, short = 'F')]
    pub featured: bool,

    /// The initial status of the version
    #[arg(long, short = 's', value_enum, default_value_t = VersionStatus::Listed)]
    pub status: VersionStatus,

    /// The status to request once approved, defaults to --status
    #[arg(long, value_enum)]
    pub requested_status: Option<RequestedStatus>,

    /// File to upload, can be repeated. The first file is the primary one
    #[arg(long, short = 'f', required = true)]
    pub file_path: Vec<PathBuf>,
}
