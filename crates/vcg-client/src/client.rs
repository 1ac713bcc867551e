//! CloudSessionClient - reqwest implementation of `SessionClient`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, instrument};
use url::Url;

use vcg_core::{ClientError, ClientResult, ClimateRequest, CommandResult, SessionClient, Vehicle};

use crate::types::{
    CommandResponse, LoginRequest, LoginResponse, VehicleListResponse, VendorErrorResponse,
};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Renew the token when it is this close to expiry
const TOKEN_RENEWAL_MARGIN: Duration = Duration::from_secs(60);

/// Account credentials for the vendor cloud
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub pin: String,
}

/// A vendor session token and its expiry instant
struct SessionToken {
    access_token: String,
    expires_at: Instant,
}

impl SessionToken {
    fn needs_renewal(&self) -> bool {
        Instant::now() + TOKEN_RENEWAL_MARGIN >= self.expires_at
    }
}

/// Vehicle-cloud session client backed by the vendor HTTP API.
///
/// Holds the session token behind an `RwLock`; every vehicle call checks
/// the token first and re-logs-in when it is missing or near expiry, so
/// callers only ever see command-level failures.
pub struct CloudSessionClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
    token: RwLock<Option<SessionToken>>,
}

impl CloudSessionClient {
    /// Create a new client against the given vendor API base URL
    pub fn new(base_url: &str, credentials: Credentials) -> ClientResult<Self> {
        Self::with_config(base_url, credentials, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidResponse(format!("Invalid base URL: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            credentials,
            token: RwLock::new(None),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn join(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidResponse(format!("Invalid URL path: {}", e)))
    }

    /// Log in and store a fresh token, replacing any existing one
    async fn login(&self) -> ClientResult<()> {
        let url = self.join("/v2/login")?;
        debug!(username = %self.credentials.username, "Logging in to vendor cloud");

        let body = LoginRequest {
            username: &self.credentials.username,
            password: &self.credentials.password,
            pin: &self.credentials.pin,
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = extract_error_text(response).await;
            return Err(ClientError::Authentication(message));
        }
        if !status.is_success() {
            let message = extract_error_text(response).await;
            return Err(ClientError::Vendor {
                code: status.as_u16(),
                message,
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        let expires_at = Instant::now() + Duration::from_secs(login.expires_in);
        *self.token.write().await = Some(SessionToken {
            access_token: login.access_token,
            expires_at,
        });

        debug!("Vendor session token refreshed");
        Ok(())
    }

    /// Ensure a usable token exists, logging in when missing or near expiry.
    /// Returns a clone of the token value for the caller's request.
    async fn ensure_token(&self) -> ClientResult<String> {
        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref() {
                if !token.needs_renewal() {
                    return Ok(token.access_token.clone());
                }
            }
        }

        self.login().await?;

        let guard = self.token.read().await;
        let token = guard
            .as_ref()
            .ok_or_else(|| ClientError::Authentication("Login produced no token".to_string()))?;
        Ok(token.access_token.clone())
    }

    /// Issue an authenticated GET, retrying the login once on a 401
    /// (server-side token invalidation ahead of our expiry clock)
    async fn authed_get(&self, url: Url) -> ClientResult<Response> {
        let token = self.ensure_token().await?;
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.login().await?;
            let token = self.ensure_token().await?;
            return self
                .client
                .get(url)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()));
        }

        Ok(response)
    }

    /// Issue an authenticated command POST with an optional JSON body
    async fn command(
        &self,
        path: &str,
        body: Option<&ClimateRequest>,
    ) -> ClientResult<CommandResult> {
        let url = self.join(path)?;
        let token = self.ensure_token().await?;

        let mut request = self.client.post(url).bearer_auth(&token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let parsed: CommandResponse = handle_response(response).await?;
        Ok(CommandResult {
            command_id: parsed.command_id,
        })
    }
}

#[async_trait]
impl SessionClient for CloudSessionClient {
    #[instrument(skip(self))]
    async fn authenticate(&self) -> ClientResult<()> {
        // Reuse a still-valid token; otherwise perform a fresh login
        self.ensure_token().await.map(|_| ())
    }

    #[instrument(skip(self))]
    async fn refresh_all(&self) -> ClientResult<Vec<Vehicle>> {
        let url = self.join("/v2/vehicles")?;
        let response = self.authed_get(url).await?;

        let list: VehicleListResponse = handle_response(response).await?;
        let vehicles = list
            .vehicles
            .into_iter()
            .map(|v| Vehicle {
                id: v.vehicle_id,
                name: v.nickname,
                model: v.model,
                year: v.year,
            })
            .collect();

        Ok(vehicles)
    }

    #[instrument(skip(self, request))]
    async fn start_climate(
        &self,
        vehicle_id: &str,
        request: &ClimateRequest,
    ) -> ClientResult<CommandResult> {
        self.command(
            &format!("/v2/vehicles/{}/climate/start", vehicle_id),
            Some(request),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn stop_climate(&self, vehicle_id: &str) -> ClientResult<CommandResult> {
        self.command(&format!("/v2/vehicles/{}/climate/stop", vehicle_id), None)
            .await
    }

    #[instrument(skip(self))]
    async fn lock(&self, vehicle_id: &str) -> ClientResult<CommandResult> {
        self.command(&format!("/v2/vehicles/{}/door/lock", vehicle_id), None)
            .await
    }

    #[instrument(skip(self))]
    async fn unlock(&self, vehicle_id: &str) -> ClientResult<CommandResult> {
        self.command(&format!("/v2/vehicles/{}/door/unlock", vehicle_id), None)
            .await
    }
}

/// Deserialize a successful response, or map the vendor error body
async fn handle_response<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let message = extract_error_text(response).await;
        return Err(ClientError::Authentication(message));
    }
    if !status.is_success() {
        let message = extract_error_text(response).await;
        return Err(ClientError::Vendor {
            code: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Best-effort extraction of the vendor's error text
async fn extract_error_text(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => {
            match serde_json::from_str::<VendorErrorResponse>(&body) {
                Ok(err) if !err.message.is_empty() => err.message,
                Ok(err) if !err.error.is_empty() => err.error,
                _ => body,
            }
        }
        _ => format!("HTTP {}", status),
    }
}
