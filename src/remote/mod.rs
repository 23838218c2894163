use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

pub mod input;

/// Execution environment for one remote call: endpoint plus the bearer
/// credential. Passed explicitly through every call boundary, never read
/// from globals.
#[derive(Debug, Clone)]
pub struct RemoteEnv {
    pub endpoint: Url,
    pub auth: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Remote service request failed")]
    Transport(#[from] reqwest::Error),
    #[error("Remote service returned errors: {0}")]
    Graphql(String),
    #[error("Remote service response contained no data")]
    MissingData,
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlResponseError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponseError {
    message: String,
}

/// Pull the data out of a decoded response envelope, turning any reported
/// GraphQL errors into a failed result.
fn unwrap_envelope<T>(response: GraphqlResponse<T>) -> Result<T, RemoteError> {
    if !response.errors.is_empty() {
        let joined = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(RemoteError::Graphql(joined));
    }
    response.data.ok_or(RemoteError::MissingData)
}

/// Thin transport over the remote GraphQL service. Documents and variables
/// come from the catalog adapter; this type only speaks the wire envelope.
pub struct GraphqlClient {
    client: Client,
}

impl GraphqlClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn execute<V, T>(
        &self,
        env: &RemoteEnv,
        document: &str,
        variables: V,
    ) -> Result<T, RemoteError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(env.endpoint.clone())
            .header("Accept", "application/json")
            .bearer_auth(&env.auth)
            .json(&GraphqlRequest {
                query: document,
                variables,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<GraphqlResponse<T>>()
            .await?;

        unwrap_envelope(response)
    }
}

impl Default for GraphqlClient {
    fn default() -> Self {
        Self::new()
    }
}
