use anyhow::{bail, Context};
use serde::Serialize;
use tracing::info;

use crate::deck::Request;

pub const SLIDES_API_BASE: &str = "https://slides.googleapis.com/v1";

#[derive(Debug, Serialize)]
pub struct BatchUpdate<'a> {
    pub requests: &'a [Request],
}

pub struct Slides {
    client: reqwest::Client,
    base: String,
    access_token: String,
}

impl Slides {
    pub fn new(base: String, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
            access_token,
        }
    }

    /// Submits the whole deck as a single batch.
    pub async fn batch_update(&self, presentation_id: &str, requests: &[Request]) -> anyhow::Result<()> {
        info!(presentation_id, requests = requests.len(), "making slides batch update");
        let res = self
            .client
            .post(format!("{}/presentations/{presentation_id}:batchUpdate", self.base))
            .bearer_auth(&self.access_token)
            .json(&BatchUpdate { requests })
            .send()
            .await
            .context("could not reach the slides api")?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            bail!("batch update rejected with {status}: {body}");
        }
        Ok(())
    }
}
