// Core data models for the donate API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parse an RFC 3339 timestamp string into UTC.
///
/// Returns `None` for anything the backend did not emit as RFC 3339
/// (date-only strings, empty strings).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Donation project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID, assigned by the API
    pub pid: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Identity number of the project owner
    pub identity_number: String,

    #[serde(default)]
    pub img_url: String,

    /// Number of donations received
    #[serde(default)]
    pub donate_cnt: i64,

    pub created_at: String,

    #[serde(default)]
    pub link: String,

    /// Owner profile, when the API embeds it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Project {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Registered user (donor or project owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub identity_number: String,

    #[serde(default)]
    pub full_name: String,

    /// User ID on the messaging platform
    #[serde(default)]
    pub mixin_uid: String,

    #[serde(default)]
    pub avatar_url: String,

    #[serde(default)]
    pub biography: String,

    /// Account creation time on the messaging platform
    #[serde(default)]
    pub mixin_created_at: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

impl User {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Donatable asset with its chain metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub asset_id: String,

    #[serde(default)]
    pub symbol: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub icon_url: String,

    #[serde(default)]
    pub chain_id: String,

    #[serde(default)]
    pub chain_icon_url: String,

    #[serde(default)]
    pub chain_symbol: String,

    /// USD price as a decimal string (e.g. "0.9998")
    #[serde(default)]
    pub price_usd: String,
}

/// A single donation: who gave what to which project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAction {
    /// Donor identity number
    pub identity_number: String,

    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub avatar_url: String,

    #[serde(default)]
    pub biography: String,

    pub asset_id: String,

    /// Donated amount as a decimal string
    pub amount: String,

    pub asset: Asset,

    pub project: Project,

    /// Recipient (project owner)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Project paired with its owner, as returned inside list envelopes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetProjectItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl GetProjectItem {
    /// Flatten into a `Project`, attaching the owner unless the project
    /// already embeds one. Returns `None` when the item has no project.
    pub fn into_project(self) -> Option<Project> {
        let mut project = self.project?;
        if project.user.is_none() {
            project.user = self.user;
        }
        Some(project)
    }
}

/// Query for GET /projects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Only projects owned by this identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_identity_number(mut self, identity_number: impl Into<String>) -> Self {
        self.identity_number = Some(identity_number.into());
        self
    }
}

/// Query for GET /users/search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<String>,

    /// Display-name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl UserSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity_number(mut self, identity_number: impl Into<String>) -> Self {
        self.identity_number = Some(identity_number.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
