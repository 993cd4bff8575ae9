use std::time::Duration;

use postcraft_logging::{craft_debug, craft_info, craft_warn};
use serde::Deserialize;

use crate::{GeneratedPost, GenerationError, GenerationRequest};

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub endpoint: String,
    /// Budget for the whole round trip, connect and body included.
    pub request_timeout: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/generate".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GeneratedPost, GenerationError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGenerator {
    settings: GenerationSettings,
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl ReqwestGenerator {
    pub fn new(settings: GenerationSettings) -> Result<Self, GenerationError> {
        let endpoint = reqwest::Url::parse(&settings.endpoint).map_err(|err| {
            GenerationError::InvalidEndpoint {
                endpoint: settings.endpoint.clone(),
                reason: err.to_string(),
            }
        })?;

        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GenerationError::Network(err.to_string()))?;

        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    async fn exchange(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPost, GenerationError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| parse_body(&body).err());
            craft_warn!("Generation endpoint returned {} ({:?})", status, detail);
            return Err(GenerationError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        parse_body(&body)
    }
}

#[async_trait::async_trait]
impl Generator for ReqwestGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPost, GenerationError> {
        craft_info!(
            "Generating post topic_len={} tone={}",
            request.topic.len(),
            request.tone
        );

        // Dropping the exchange future on expiry cancels the in-flight call.
        let result = tokio::time::timeout(self.settings.request_timeout, self.exchange(request))
            .await
            .unwrap_or(Err(GenerationError::Timeout));

        match &result {
            Ok(generated) => craft_debug!("Generated post chars={}", generated.post.len()),
            Err(err) => craft_warn!("Generation failed: {}", err),
        }
        result
    }
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    post: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

fn parse_body(body: &str) -> Result<GeneratedPost, GenerationError> {
    let parsed: GenerationResponse = serde_json::from_str(body)
        .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;

    match parsed.error {
        Some(serde_json::Value::Null) | None => {}
        Some(serde_json::Value::String(message)) => {
            return Err(GenerationError::Server { message })
        }
        Some(other) => {
            return Err(GenerationError::Server {
                message: other.to_string(),
            })
        }
    }

    match parsed.post {
        Some(post) if !post.is_empty() => Ok(GeneratedPost { post }),
        _ => Err(GenerationError::MalformedResponse(
            "no post content in response".to_string(),
        )),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        return GenerationError::Timeout;
    }
    GenerationError::Network(err.to_string())
}
