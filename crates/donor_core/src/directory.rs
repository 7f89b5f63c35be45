use async_trait::async_trait;
use reqwest::Client;
use shared::{error::FetchFailure, protocol::DirectoryUser};

pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Upstream user directory the donor list is built from.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, FetchFailure>;
}

/// Directory reached with a single `GET` against a fixed endpoint.
///
/// The client carries no timeout, so a hung upstream keeps the caller
/// suspended until the connection is torn down.
#[derive(Clone)]
pub struct HttpUserDirectory {
    http: Client,
    endpoint: String,
}

impl HttpUserDirectory {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_users(&self) -> Result<Vec<DirectoryUser>, FetchFailure> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| FetchFailure::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<DirectoryUser>>()
            .await
            .map_err(|err| FetchFailure::Decode(err.to_string()))
    }
}
