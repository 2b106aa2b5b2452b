// API client library for the donate service
//
// This crate provides one async operation per remote resource of the
// donate API. Each operation issues a single GET, decodes the JSON body
// into the records from `donate-core`, and logs one diagnostic on failure.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use donate_core::{
    Asset, ClientConfig, ConfigError, GetProjectItem, Project, ProjectQuery, User, UserAction,
    UserSearchQuery,
};
pub use errors::ApiError;
pub use http_client::{DonateApiClient, Resource};
