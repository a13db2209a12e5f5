//! BellClient: REST access to the bell API server.

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use super::{
    DeleteResponse, LogEntry, MuteRequest, MuteResponse, RingRequest, RingResponse, Status,
};
use crate::error::{ApiError, Result, ValidationError};
use crate::schedule::{
    MuteSchedule, MuteScheduleDraft, RingSchedule, RingScheduleDraft, MAX_RINGS, MIN_RINGS,
};
use crate::storage::Config;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the bell API.
#[derive(Debug, Clone)]
pub struct BellClient {
    base_url: Url,
    http_client: Client,
}

impl BellClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // `Url::join` replaces the last segment unless the base ends in a slash.
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|source| ApiError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                endpoint: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::with_timeout(&config.effective_api_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })
    }

    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, %url, "bell api request");
        let target = url.to_string();

        let mut request = self.http_client.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|source| ApiError::Transport {
            endpoint: target,
            source,
        })?;
        Self::decode(path, resp).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|source| ApiError::Transport {
            endpoint: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).trim().to_string(),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(method, path, &[], Some(body)).await
    }

    // ── Reads ──────────────────────────────────────────

    pub async fn status(&self) -> Result<Status, ApiError> {
        self.get("status", &[]).await
    }

    /// All ring schedules. Out-of-range records are rejected, not coerced.
    pub async fn ring_schedules(&self) -> Result<Vec<RingSchedule>, ApiError> {
        let schedules: Vec<RingSchedule> = self.get("schedules", &[]).await?;
        for schedule in &schedules {
            schedule.validate().map_err(|source| ApiError::InvalidData {
                endpoint: "schedules".into(),
                source,
            })?;
        }
        Ok(schedules)
    }

    pub async fn mute_schedules(&self) -> Result<Vec<MuteSchedule>, ApiError> {
        self.get("mute-schedules", &[]).await
    }

    /// The most recent `limit` log lines, oldest first.
    pub async fn logs(&self, limit: u32) -> Result<Vec<LogEntry>, ApiError> {
        self.get("logs", &[("limit", limit.to_string())]).await
    }

    // ── Mutations ──────────────────────────────────────

    pub async fn ring(&self, num_rings: u32) -> Result<RingResponse> {
        ValidationError::check_range(
            "num_rings",
            i64::from(num_rings),
            i64::from(MIN_RINGS),
            i64::from(MAX_RINGS),
        )?;
        let resp = self
            .send(Method::POST, "ring", &RingRequest { num_rings })
            .await?;
        tracing::info!(num_rings, "manual ring requested");
        Ok(resp)
    }

    pub async fn set_mute(&self, request: MuteRequest) -> Result<MuteResponse> {
        let resp = self.send(Method::POST, "mute", &request).await?;
        tracing::info!(
            muted = request.muted,
            override_schedule = request.override_schedule,
            "mute state changed"
        );
        Ok(resp)
    }

    pub async fn create_ring_schedule(&self, draft: &RingScheduleDraft) -> Result<RingSchedule> {
        draft.validate()?;
        let created: RingSchedule = self.send(Method::POST, "schedules", draft).await?;
        tracing::info!(id = created.id, "ring schedule created");
        Ok(created)
    }

    pub async fn update_ring_schedule(
        &self,
        id: i64,
        draft: &RingScheduleDraft,
    ) -> Result<RingSchedule> {
        draft.validate()?;
        let updated = self
            .send(Method::PUT, &format!("schedules/{id}"), draft)
            .await?;
        tracing::info!(id, "ring schedule updated");
        Ok(updated)
    }

    pub async fn delete_ring_schedule(&self, id: i64) -> Result<()> {
        let _: DeleteResponse = self
            .request::<(), _>(Method::DELETE, &format!("schedules/{id}"), &[], None)
            .await?;
        tracing::info!(id, "ring schedule deleted");
        Ok(())
    }

    pub async fn create_mute_schedule(&self, draft: &MuteScheduleDraft) -> Result<MuteSchedule> {
        draft.validate()?;
        let created: MuteSchedule = self.send(Method::POST, "mute-schedules", draft).await?;
        tracing::info!(id = created.id, name = %created.name, "mute schedule created");
        Ok(created)
    }

    pub async fn update_mute_schedule(
        &self,
        id: i64,
        draft: &MuteScheduleDraft,
    ) -> Result<MuteSchedule> {
        draft.validate()?;
        let updated = self
            .send(Method::PUT, &format!("mute-schedules/{id}"), draft)
            .await?;
        tracing::info!(id, "mute schedule updated");
        Ok(updated)
    }

    pub async fn delete_mute_schedule(&self, id: i64) -> Result<()> {
        let _: DeleteResponse = self
            .request::<(), _>(Method::DELETE, &format!("mute-schedules/{id}"), &[], None)
            .await?;
        tracing::info!(id, "mute schedule deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = BellClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/");
        assert_eq!(
            client.endpoint("mute-schedules/4").unwrap().as_str(),
            "http://localhost:5000/api/mute-schedules/4"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            BellClient::new("not a url"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn ring_rejects_zero_before_sending() {
        let client = BellClient::new("http://127.0.0.1:9/api").unwrap();
        let err = client.ring(0).await.unwrap_err();
        assert!(matches!(err, crate::error::CoreError::Validation(_)));
    }
}
