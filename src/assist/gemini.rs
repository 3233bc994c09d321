use crate::assist::traits::{CategoryRecommender, Recommendation, Transcriber};
use crate::config::RecommenderConfig;
use crate::models::ServiceCategory;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini-backed recommender and transcriber
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: Option<String>,
    /// `(id, title)` of every category the model may pick from
    categories: Vec<(String, String)>,
}

impl GeminiClient {
    pub fn new(config: &RecommenderConfig, categories: &[ServiceCategory]) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            categories: categories
                .iter()
                .map(|c| (c.id.clone(), c.title.clone()))
                .collect(),
        })
    }

    fn recommendation_prompt(&self, query: &str) -> String {
        let listing = self
            .categories
            .iter()
            .map(|(id, title)| format!("- {id}: {title}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "A customer describes what they need help with:\n\"{query}\"\n\n\
             Pick the single best matching service category from this list:\n{listing}\n\n\
             Reply with JSON of the form {{\"categoryId\": \"<id>\", \"reason\": \"<one short sentence>\"}}."
        )
    }

    async fn generate(&self, parts: Value, json_reply: bool) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("no API key configured"))?;

        let mut body = json!({ "contents": [{ "parts": parts }] });
        if json_reply {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }

        let url = format!("{API_BASE}/{}:generateContent", self.model);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to reach Gemini")?
            .error_for_status()
            .context("Gemini returned an error status")?;

        let payload: Value = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;
        extract_text(&payload).ok_or_else(|| anyhow!("Gemini response had no text"))
    }
}

#[async_trait]
impl CategoryRecommender for GeminiClient {
    async fn recommend(&self, query: &str) -> Option<Recommendation> {
        let prompt = self.recommendation_prompt(query);
        match self.generate(json!([{ "text": prompt }]), true).await {
            Ok(text) => {
                let rec = parse_recommendation(&text);
                if rec.is_none() {
                    warn!("Could not read a recommendation from {:?}", text);
                }
                rec
            }
            Err(e) => {
                warn!("Category recommendation failed: {:#}", e);
                None
            }
        }
    }
}

#[async_trait]
impl Transcriber for GeminiClient {
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String> {
        info!("Transcribing {} bytes of {}", audio.len(), mime_type);
        let parts = json!([
            { "inlineData": { "mimeType": mime_type, "data": STANDARD.encode(audio) } },
            { "text": "Transcribe this audio exactly. Reply with the transcript only." }
        ]);
        let text = self.generate(parts, false).await?;
        Ok(text.trim().to_string())
    }
}

/// First text part of the first candidate
fn extract_text(payload: &Value) -> Option<String> {
    payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?
        .iter()
        .find_map(|part| part.get("text").and_then(Value::as_str))
        .map(str::to_string)
}

fn parse_recommendation(text: &str) -> Option<Recommendation> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    let rec: Recommendation = serde_json::from_str(trimmed).ok()?;
    if rec.category_id.trim().is_empty() {
        return None;
    }
    Some(rec)
}
