use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A category suggested for a free-text request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category_id: String,
    pub reason: String,
}

/// Maps a customer's description of a job to a service category.
/// Any failure is reported as `None`, never as an error.
#[async_trait]
pub trait CategoryRecommender: Send + Sync {
    async fn recommend(&self, query: &str) -> Option<Recommendation>;
}

/// Turns recorded audio into text for the search box
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String>;
}

/// Opens an outbound URI in a new context. Fire-and-forget.
pub trait LinkOpener {
    fn open(&self, uri: &str);
}
