use anyhow::{Context, Result};
use async_trait::async_trait;
use portfolio_shared::protocol::{GenerateRequest, GENERATE_ROUTE, PORTFOLIO_DATA_FIELD};
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use tracing::info;
use url::Url;

/// Delivers a [`GenerateRequest`] to the generator and returns the archive bytes.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<u8>>;
}

/// `POST {server}/generate` as multipart form data.
pub struct HttpGenerateTransport {
    http: Client,
    endpoint: Url,
}

impl HttpGenerateTransport {
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self> {
        let base = Url::parse(server_url)
            .with_context(|| format!("invalid generator url '{server_url}'"))?;
        let endpoint = base
            .join(GENERATE_ROUTE)
            .with_context(|| format!("cannot derive generate endpoint from '{server_url}'"))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn multipart_form(request: GenerateRequest) -> Result<Form> {
    let mut form = Form::new();
    for part in request.parts {
        let body = Part::bytes(part.bytes)
            .file_name(part.file_name)
            .mime_str(&part.mime_type)
            .with_context(|| format!("invalid mime type for part '{}'", part.name))?;
        form = form.part(part.name, body);
    }
    Ok(form.text(PORTFOLIO_DATA_FIELD, request.portfolio_data))
}

#[async_trait]
impl GenerateTransport for HttpGenerateTransport {
    async fn generate(&self, request: GenerateRequest) -> Result<Vec<u8>> {
        let part_count = request.parts.len();
        let form = multipart_form(request)?;
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        let status = response.status();
        let archive = response.bytes().await?;
        info!(
            endpoint = %self.endpoint,
            %status,
            part_count,
            size_bytes = archive.len(),
            "generator returned archive"
        );
        Ok(archive.to_vec())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
