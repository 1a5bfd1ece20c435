use crate::{CliClientResult, ClientError, OfferFields, UserFields};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the fd-server REST API
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Optional user ID to include in X-User-Id header
    pub fn new(base_url: &str, user_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build an absolute URL, appending only the query pairs that are set
    fn url(&self, path: &str, query: &[(&str, Option<&str>)]) -> CliClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::Url {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let pairs: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.map(|v| (*key, v)))
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Build a request with optional user ID header
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }

        req
    }

    async fn send(&self, method: Method, path: &str) -> CliClientResult<Value> {
        let url = self.url(path, &[])?;
        self.execute(self.request(method, url)).await
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> CliClientResult<Value> {
        let url = self.url(path, &[])?;
        self.execute(self.request(method, url).json(body)).await
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        // Error bodies are JSON from handlers, plain text from probes
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| text.trim().to_string());

        Err(ClientError::api_error(status.as_u16(), code, message))
    }

    // =========================================================================
    // Offer Operations
    // =========================================================================

    /// List offers with optional filters
    pub async fn list_offers(
        &self,
        status: Option<&str>,
        category: Option<&str>,
        donor_id: Option<&str>,
    ) -> CliClientResult<Value> {
        let url = self.url(
            "/api/v1/offers",
            &[
                ("status", status),
                ("category", category),
                ("donor_id", donor_id),
            ],
        )?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Get an offer by ID
    pub async fn get_offer(&self, id: &str) -> CliClientResult<Value> {
        self.send(Method::GET, &format!("/api/v1/offers/{}", id)).await
    }

    /// Post a new offer as the configured user
    pub async fn create_offer(&self, fields: &OfferFields) -> CliClientResult<Value> {
        self.send_json(Method::POST, "/api/v1/offers", fields).await
    }

    /// Update an offer; only the set fields change
    pub async fn update_offer(&self, id: &str, fields: &OfferFields) -> CliClientResult<Value> {
        self.send_json(Method::PUT, &format!("/api/v1/offers/{}", id), fields).await
    }

    /// Delete an offer and its claims
    pub async fn delete_offer(&self, id: &str) -> CliClientResult<Value> {
        self.send(Method::DELETE, &format!("/api/v1/offers/{}", id)).await
    }

    // =========================================================================
    // Claim Operations
    // =========================================================================

    /// List claims with optional filters
    pub async fn list_claims(
        &self,
        offer_id: Option<&str>,
        recipient_id: Option<&str>,
    ) -> CliClientResult<Value> {
        let url = self.url(
            "/api/v1/claims",
            &[("offer_id", offer_id), ("recipient_id", recipient_id)],
        )?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Get a claim by ID
    pub async fn get_claim(&self, id: &str) -> CliClientResult<Value> {
        self.send(Method::GET, &format!("/api/v1/claims/{}", id)).await
    }

    /// Claim an offer as the configured user
    pub async fn create_claim(&self, offer_id: &str, notes: Option<&str>) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateClaimRequest<'a> {
            offer_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            notes: Option<&'a str>,
        }

        let body = CreateClaimRequest { offer_id, notes };
        self.send_json(Method::POST, "/api/v1/claims", &body).await
    }

    /// Release a claim
    pub async fn delete_claim(&self, id: &str) -> CliClientResult<Value> {
        self.send(Method::DELETE, &format!("/api/v1/claims/{}", id)).await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Register a profile. The configured user ID, if any, becomes its ID.
    pub async fn register_user(&self, fields: &UserFields) -> CliClientResult<Value> {
        self.send_json(Method::POST, "/api/v1/users", fields).await
    }

    /// Check whether an email address is registered
    pub async fn check_user(&self, email: &str) -> CliClientResult<Value> {
        let url = self.url("/api/v1/users/check", &[("email", Some(email))])?;
        self.execute(self.request(Method::GET, url)).await
    }

    /// Get a profile by ID
    pub async fn get_user(&self, id: &str) -> CliClientResult<Value> {
        self.send(Method::GET, &format!("/api/v1/users/{}", id)).await
    }

    /// Update a profile; only the set fields change
    pub async fn update_user(&self, id: &str, fields: &UserFields) -> CliClientResult<Value> {
        self.send_json(Method::PUT, &format!("/api/v1/users/{}", id), fields).await
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    /// Offer flow summary for the dashboard
    pub async fn flow_summary(&self) -> CliClientResult<Value> {
        self.send(Method::GET, "/api/v1/analytics/flow").await
    }
}
