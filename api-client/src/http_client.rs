// HTTP client for the donate API

use crate::errors::ApiError;
use donate_core::{
    Asset, ClientConfig, ErrorResponse, GetProjectItem, Project, ProjectQuery, User, UserAction,
    UserSearchQuery,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use urlencoding::encode;

/// Remote resource targeted by an operation
///
/// Used to label diagnostics and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Project,
    ProjectDonateUsers,
    Projects,
    SearchUsers,
    UserDonateProjects,
    User,
    Assets,
}

impl Resource {
    pub fn label(self) -> &'static str {
        match self {
            Resource::Project => "project",
            Resource::ProjectDonateUsers => "project donate users",
            Resource::Projects => "projects",
            Resource::SearchUsers => "users search",
            Resource::UserDonateProjects => "user donate projects",
            Resource::User => "user",
            Resource::Assets => "assets",
        }
    }

    /// Diagnostic logged when a request for this resource fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Resource::Project => "Error fetching project",
            Resource::ProjectDonateUsers => "Error fetching project donate users",
            Resource::Projects => "Error fetching projects",
            Resource::SearchUsers => "Error searching users",
            Resource::UserDonateProjects => "Error fetching user donate projects",
            Resource::User => "Error fetching user",
            Resource::Assets => "Error fetching assets",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Placeholder for operations without query parameters
const NO_QUERY: Option<&()> = None;

/// Client for the donate API
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DonateApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl DonateApiClient {
    /// Create a client with a default `reqwest::Client`
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(config, client))
    }

    /// Create a client configured from `API_BASE_URL`
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one project via GET /project/{id}
    ///
    /// # Arguments
    /// * `id` - Project ID (percent-encoded into the path)
    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        let path = format!("/project/{}", encode(id));
        self.fetch(Resource::Project, &path, NO_QUERY, decode_json)
            .await
    }

    /// GET /donate-users/{pid} - donations received by a project
    pub async fn get_project_donate_users(&self, pid: &str) -> Result<Vec<UserAction>, ApiError> {
        let path = format!("/donate-users/{}", encode(pid));
        self.fetch(Resource::ProjectDonateUsers, &path, NO_QUERY, decode_list)
            .await
    }

    /// List projects via GET /projects
    ///
    /// Accepts either a bare project array or the `{"items": [...]}`
    /// envelope, flattening envelope items into projects.
    ///
    /// # Arguments
    /// * `query` - Paging and owner filter; unset fields are not sent
    ///
    /// # Returns
    /// Projects in the order the API returned them (empty for `null`)
    pub async fn get_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, ApiError> {
        self.fetch(Resource::Projects, "/projects", Some(query), decode_project_list)
            .await
    }

    /// Search users via GET /users/search
    ///
    /// # Arguments
    /// * `query` - Identity number and/or display-name prefix; unset fields
    ///   are not sent
    ///
    /// # Returns
    /// Matching users in API order (empty for `null`)
    pub async fn search_users(&self, query: &UserSearchQuery) -> Result<Vec<User>, ApiError> {
        self.fetch(Resource::SearchUsers, "/users/search", Some(query), decode_list)
            .await
    }

    /// GET /users-donate/{id} - donations made by a user
    pub async fn get_user_donate_projects(
        &self,
        identity_number: &str,
    ) -> Result<Vec<UserAction>, ApiError> {
        let path = format!("/users-donate/{}", encode(identity_number));
        self.fetch(Resource::UserDonateProjects, &path, NO_QUERY, decode_list)
            .await
    }

    /// Fetch one user via GET /user/{id}
    ///
    /// # Arguments
    /// * `identity_number` - User identity number (percent-encoded into the path)
    ///
    /// # Returns
    /// `Ok(None)` only when the API answers 2xx with an empty or `null`
    /// body. Every failure, 404 included, is returned as an error.
    pub async fn get_user(&self, identity_number: &str) -> Result<Option<User>, ApiError> {
        let path = format!("/user/{}", encode(identity_number));
        self.fetch(Resource::User, &path, NO_QUERY, decode_optional)
            .await
    }

    /// GET /assets
    pub async fn get_assets(&self) -> Result<Vec<Asset>, ApiError> {
        self.fetch(Resource::Assets, "/assets", NO_QUERY, decode_list)
            .await
    }

    /// Send one GET request and decode the body.
    ///
    /// Any failure is logged once with the resource's diagnostic message
    /// and returned unchanged.
    async fn fetch<T, Q>(
        &self,
        resource: Resource,
        path: &str,
        query: Option<&Q>,
        decode: fn(Resource, &[u8]) -> Result<T, ApiError>,
    ) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let result = match self.send(resource, path, query).await {
            Ok(body) => decode(resource, &body),
            Err(err) => Err(err),
        };

        result.map_err(|err| {
            tracing::error!(
                %resource,
                error = &err as &(dyn std::error::Error + 'static),
                "{}",
                resource.failure_message()
            );
            err
        })
    }

    async fn send<Q>(
        &self,
        resource: Resource,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Vec<u8>, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.config.endpoint(path));
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .map(|body| body.error);
            return Err(ApiError::Status {
                resource,
                status,
                message,
            });
        }

        Ok(body)
    }
}

fn decode_json<T: DeserializeOwned>(resource: Resource, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode { resource, source })
}

/// Lists come back as `null` when empty
fn decode_list<T: DeserializeOwned>(resource: Resource, body: &[u8]) -> Result<Vec<T>, ApiError> {
    decode_json::<Option<Vec<T>>>(resource, body).map(Option::unwrap_or_default)
}

fn decode_optional<T: DeserializeOwned>(
    resource: Resource,
    body: &[u8],
) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    decode_json(resource, body)
}

#[derive(Deserialize)]
struct ProjectEnvelope {
    #[serde(deserialize_with = "null_as_empty")]
    items: Vec<GetProjectItem>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A leading `{` selects the `items` envelope; anything else is decoded as
/// a bare (possibly `null`) array.
fn decode_project_list(resource: Resource, body: &[u8]) -> Result<Vec<Project>, ApiError> {
    let is_envelope = body
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'{');

    if !is_envelope {
        return decode_list(resource, body);
    }

    let envelope: ProjectEnvelope = decode_json(resource, body)?;
    Ok(envelope
        .items
        .into_iter()
        .filter_map(GetProjectItem::into_project)
        .collect())
}
