use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct EsClient {
    base_url: String,
    client: Client,
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EsVersion {
    pub fn from_string(version_str: &str) -> Result<Self> {
        // Očekáváme formát "7.17.0" nebo "8.11.1-SNAPSHOT"
        let core = version_str.split('-').next().unwrap_or_default();
        let mut parts = core.split('.');

        let mut next = |name: &str| -> Result<u32> {
            parts
                .next()
                .ok_or_else(|| anyhow!("Invalid version format: {}", version_str))?
                .parse()
                .with_context(|| format!("Invalid {} version", name))
        };

        Ok(Self {
            major: next("major")?,
            minor: next("minor")?,
            patch: next("patch")?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RootResponse {
    version: VersionInfo,
}

#[derive(Debug, Deserialize)]
struct VersionInfo {
    number: String,
}

impl EsClient {
    pub fn new(
        base_url: String,
        insecure: bool,
        username: Option<String>,
        password: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        // Ořízni trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(insecure)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url,
            client,
            username,
            password,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.elasticsearch_url.clone(),
            config.insecure,
            config.username.clone(),
            config.password.clone(),
            config.request_timeout,
        )
    }

    /// Ověří spojení s clusterem a vrátí jeho verzi
    pub async fn detect_version(&self) -> Result<EsVersion> {
        let response: RootResponse = self.get("").await?;
        let version = EsVersion::from_string(&response.version.number)?;

        tracing::info!("Detected Elasticsearch version: {}.{}.{}",
            version.major, version.minor, version.patch);

        Ok(version)
    }

    /// Univerzální GET request
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to send GET request")?;

        self.handle_response(response).await
    }

    /// Univerzální POST request
    pub async fn post<T>(&self, path: &str, body: Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self.authorize(self.client.post(&url).json(&body))
            .send()
            .await
            .context("Failed to send POST request")?;

        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => request.basic_auth(username, Some(password)),
            _ => request,
        }
    }

    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(anyhow!("Elasticsearch error ({}): {}", status, error_text));
        }

        let body = response.json::<T>().await
            .context("Failed to parse response JSON")?;

        Ok(body)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(url: String, auth: bool) -> EsClient {
        let (username, password) = if auth {
            (Some("elastic".to_string()), Some("changeme".to_string()))
        } else {
            (None, None)
        };
        EsClient::new(url, false, username, password, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_version_parsing() {
        let v = EsVersion::from_string("7.17.0").unwrap();
        assert_eq!(v.major, 7);
        assert_eq!(v.minor, 17);
        assert_eq!(v.patch, 0);

        let v2 = EsVersion::from_string("8.11.1-SNAPSHOT").unwrap();
        assert_eq!(v2.major, 8);
        assert_eq!(v2.minor, 11);
        assert_eq!(v2.patch, 1);

        assert!(EsVersion::from_string("8.x").is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let c = client("http://localhost:9200/".to_string(), false);
        assert_eq!(c.base_url(), "http://localhost:9200");
        assert_eq!(c.url("/_cat/indices"), "http://localhost:9200/_cat/indices");
    }

    #[tokio::test]
    async fn test_detect_version_sends_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "node-1",
                "version": { "number": "7.17.9" }
            })))
            .mount(&server)
            .await;

        let version = client(server.uri(), true).detect_version().await.unwrap();
        assert_eq!(version.major, 7);
        assert_eq!(version.minor, 17);
    }

    #[tokio::test]
    async fn test_error_status_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let err = client(server.uri(), false).detect_version().await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"), "{message}");
        assert!(message.contains("unauthorized"), "{message}");
    }
}
