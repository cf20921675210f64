use async_trait::async_trait;

use crate::{ClientError, GenerateRequest, GenerationClient, GenerationResult};

/// HTTP client for a remote generation service
pub struct HttpGenerationClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGenerationClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerationResult, ClientError> {
        let generate_url = format!("{}/api/generate", self.base_url);
        tracing::info!(
            url = %generate_url,
            team = %request.team,
            idea_len = request.idea.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(&generate_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // The service reports its own failures in the body, sometimes with a
        // non-2xx status, so the body is inspected before the status.
        match GenerationResult::from_body(&body) {
            Err(ClientError::Decode(_)) if !status.is_success() => {
                tracing::error!(status = status.as_u16(), "generation request failed");
                Err(ClientError::UnexpectedStatus(status.as_u16()))
            }
            Ok(_) if !status.is_success() => {
                tracing::error!(status = status.as_u16(), "generation request failed");
                Err(ClientError::UnexpectedStatus(status.as_u16()))
            }
            Ok(result) => {
                tracing::info!(
                    messages = result.conversations.len(),
                    document_len = result.final_document.len(),
                    "generation finished"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::error!(error = %err, "generation response rejected");
                Err(err)
            }
        }
    }

    async fn health_check(&self) -> Result<(), ClientError> {
        let health_url = format!("{}/", self.base_url);
        let response = self.client.get(&health_url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(())
    }
}
