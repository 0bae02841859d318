//! Missive client implementation.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ClientBuilder, Config, ConfigError};
use crate::error::ApiError;
use crate::transport::TransportError;
use crate::types::{Account, RelationshipRequest, ResponseEnvelope, User};

/// Response header carrying the server's clock, in nanoseconds since epoch.
const SERVER_TIME_HEADER: &str = "x-server-time";

/// Largest tolerated divergence between the server clock and the local one.
const CLOCK_SKEW_TOLERANCE: Duration = Duration::from_secs(300);

/// Missive API client.
///
/// Every endpoint resolves each failure path to exactly one
/// [`ApiError`](crate::ApiError); callers hand that value to
/// [`describe`](crate::ApiError::describe) to get the one string shown to the
/// user.
///
/// # Example
///
/// ```rust,no_run
/// use missive::{Client, EnglishCatalog};
///
/// #[tokio::main]
/// async fn main() {
///     let client = Client::builder()
///         .access_token("token_xxx")
///         .build()
///         .expect("client config");
///
///     match client.me().await {
///         Ok(account) => println!("signed in as {}", account.full_name),
///         Err(error) => eprintln!("{}", error.describe(&EnglishCatalog)),
///     }
/// }
/// ```
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Create a new builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client from config.
    pub(crate) fn from_config(config: Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the authenticated user's own account.
    pub async fn me(&self) -> Result<Account, ApiError> {
        self.get("/me").await
    }

    /// Fetch another user's profile.
    pub async fn user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get(&format!("/users/{user_id}")).await
    }

    /// Submit a relationship change and return the updated profile.
    pub async fn update_relationship(
        &self,
        request: &RelationshipRequest,
    ) -> Result<User, ApiError> {
        self.post("/relationships", request).await
    }

    async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!(method = "GET", path, "issuing request");
        self.execute(self.http.get(self.endpoint(path))).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(method = "POST", path, "issuing request");
        self.execute(self.http.post(self.endpoint(path)).json(body))
            .await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_host)
    }

    /// Run one request through the full outcome mapping.
    ///
    /// A well-formed envelope wins over the HTTP status; only a body that is
    /// not an envelope falls back to status classification.
    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let token = self
            .config
            .access_token()
            .ok_or(ApiError::PrerequisitesNotFulfilled)?;

        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;

        if let Some(server_time) = response.headers().get(SERVER_TIME_HEADER) {
            if let Ok(value) = server_time.to_str() {
                if clock_skew_exceeded(value) {
                    warn!(server_time = value, "server clock diverges beyond tolerance");
                    return Err(ApiError::ClockSkewDetected);
                }
            }
        }

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(&e))?;

        match serde_json::from_slice::<ResponseEnvelope<T>>(&body) {
            Ok(envelope) => {
                if let Some(remote) = envelope.error {
                    warn!(
                        status = remote.status,
                        code = remote.code,
                        description = %remote.description,
                        "request rejected by server"
                    );
                    return Err(ApiError::from_remote(remote.status, remote.code));
                }
                envelope.data.ok_or(ApiError::EmptyResponse)
            }
            Err(decode_error) if status.is_success() => Err(ApiError::InvalidJson(decode_error)),
            Err(_) => Err(TransportError::unacceptable_status(status.as_u16()).into()),
        }
    }
}

fn clock_skew_exceeded(server_time: &str) -> bool {
    let Ok(server_ns) = server_time.trim().parse::<i128>() else {
        return false;
    };
    let local_ns = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos() as i128,
        Err(_) => return false,
    };

    server_ns.abs_diff(local_ns) > CLOCK_SKEW_TOLERANCE.as_nanos()
}
