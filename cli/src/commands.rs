// Command-line arguments and their dispatch onto the API client

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use donate_api_client::{ClientConfig, DonateApiClient, ProjectQuery, UserSearchQuery};
use donate_core::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use serde_json::Value;

/// `donate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "donate",
    about = "Query projects, donations, users and assets from the donate API",
    version
)]
pub struct Cli {
    /// API base URL.
    #[arg(
        long = "base-url",
        value_name = "url",
        env = API_BASE_URL_ENV,
        default_value = DEFAULT_API_BASE_URL
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show one project.
    Project { id: String },
    /// List donations received by a project.
    DonateUsers { pid: String },
    /// List projects.
    Projects {
        #[arg(long, value_name = "n")]
        limit: Option<u32>,
        #[arg(long, value_name = "n")]
        offset: Option<u32>,
        /// Only projects owned by this identity number.
        #[arg(long = "identity-number", value_name = "id")]
        identity_number: Option<String>,
    },
    /// Search users by identity number or name prefix.
    SearchUsers {
        #[arg(long = "identity-number", value_name = "id")]
        identity_number: Option<String>,
        #[arg(long, value_name = "prefix")]
        prefix: Option<String>,
    },
    /// List donations made by a user.
    UserDonations { identity_number: String },
    /// Show one user (`null` when the API has none).
    User { identity_number: String },
    /// List donatable assets with USD prices.
    Assets,
}

impl Cli {
    pub fn client(&self) -> Result<DonateApiClient> {
        let config = ClientConfig::new(self.base_url.as_str())
            .with_context(|| format!("invalid --base-url {:?}", self.base_url))?;
        DonateApiClient::new(config).context("failed to build HTTP client")
    }
}

/// Run one command and return its result as JSON.
pub async fn run(client: &DonateApiClient, command: &Command) -> Result<Value> {
    let value = match command {
        Command::Project { id } => {
            let project = client
                .get_project(id)
                .await
                .with_context(|| format!("failed to fetch project {id}"))?;
            serde_json::to_value(project)?
        }
        Command::DonateUsers { pid } => {
            let actions = client
                .get_project_donate_users(pid)
                .await
                .with_context(|| format!("failed to fetch donations for project {pid}"))?;
            serde_json::to_value(actions)?
        }
        Command::Projects {
            limit,
            offset,
            identity_number,
        } => {
            let query = ProjectQuery {
                limit: *limit,
                offset: *offset,
                identity_number: identity_number.clone(),
            };
            let projects = client
                .get_projects(&query)
                .await
                .context("failed to list projects")?;
            serde_json::to_value(projects)?
        }
        Command::SearchUsers {
            identity_number,
            prefix,
        } => {
            let query = UserSearchQuery {
                identity_number: identity_number.clone(),
                prefix: prefix.clone(),
            };
            let users = client
                .search_users(&query)
                .await
                .context("failed to search users")?;
            serde_json::to_value(users)?
        }
        Command::UserDonations { identity_number } => {
            let actions = client
                .get_user_donate_projects(identity_number)
                .await
                .with_context(|| format!("failed to fetch donations by user {identity_number}"))?;
            serde_json::to_value(actions)?
        }
        Command::User { identity_number } => {
            let user = client
                .get_user(identity_number)
                .await
                .with_context(|| format!("failed to fetch user {identity_number}"))?;
            serde_json::to_value(user)?
        }
        Command::Assets => {
            let assets = client.get_assets().await.context("failed to list assets")?;
            serde_json::to_value(assets)?
        }
    };
    Ok(value)
}
