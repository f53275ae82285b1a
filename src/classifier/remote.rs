//! Hosted text-classification backend.
//!
//! Speaks the Hugging Face inference API shape:
//! `POST {api_url}/models/{model_id}` with `{"inputs": text}`, answered by
//! `[[{"label": .., "score": ..}, ..]]` (one list per input) or a flat list.

use super::{EmotionClassifier, EmotionScore};
use crate::config::ClassifierConfig;
use crate::error::{EmotivaError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Emotion classifier backed by an HTTP inference endpoint.
pub struct RemoteClassifier {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<EmotionScore>>),
    Single(Vec<EmotionScore>),
}

impl RemoteClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let base = config.api_url.trim_end_matches('/');
        Self {
            endpoint: format!("{base}/models/{}", config.model_id),
            api_key: config.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmotionClassifier for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn scores(&self, text: &str) -> Result<Vec<EmotionScore>> {
        let mut request = self.client.post(&self.endpoint).json(&json!({ "inputs": text }));
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmotivaError::Classifier(format!("HTTP {status}: {body}")));
        }

        let parsed: InferenceResponse = response
            .json()
            .await
            .map_err(|e| EmotivaError::Classifier(format!("bad response body: {e}")))?;
        let scores = match parsed {
            InferenceResponse::Batched(mut batches) => {
                if batches.is_empty() {
                    Vec::new()
                } else {
                    batches.swap_remove(0)
                }
            }
            InferenceResponse::Single(scores) => scores,
        };
        debug!(labels = scores.len(), "remote classifier responded");
        Ok(scores)
    }
}
