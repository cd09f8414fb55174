use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::json;
use tracing::{debug, warn};

use crate::model::ParsedResume;

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PROMPT_TEXT_LIMIT: usize = 2000;

/// Model replies often wrap the JSON in prose; take the outermost
/// brace pair.
static JSON_BLOB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Chat-completions endpoint settings, resolved once at startup and
/// passed in explicitly. No key configured means the caller goes
/// straight to the rule-based engine.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl AiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("LLAMA_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())?;
        Some(Self {
            api_key,
            api_url: std::env::var("LLAMA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            model: std::env::var("LLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        })
    }
}

/// Best-effort LLM parse attempt. Every failure mode — connect error,
/// timeout, bad status, non-JSON body, missing content, or content that
/// does not deserialize as a ParsedResume — is logged and collapsed to
/// None so the rule-based engine runs instead.
pub async fn parse_resume(config: &AiConfig, text: &str) -> Option<ParsedResume> {
    match request_parse(config, text).await {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("AI parsing failed: {e:#}");
            None
        }
    }
}

async fn request_parse(config: &AiConfig, text: &str) -> Result<Option<ParsedResume>> {
    let excerpt: String = text.chars().take(PROMPT_TEXT_LIMIT).collect();
    let body = json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_prompt(&excerpt) },
        ],
        "temperature": 0.3,
        "max_tokens": 800,
    });

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client
        .post(&config.api_url)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await
        .context("chat completions request failed")?;

    let status = response.status();
    if !status.is_success() {
        warn!("AI parsing failed with status {status}");
        return Ok(None);
    }

    let value: serde_json::Value = response
        .json()
        .await
        .context("response body was not JSON")?;
    let content = value["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or_default();

    Ok(extract_payload(content))
}

/// Pull a ParsedResume out of raw model output, or None when the output
/// carries no usable JSON object.
fn extract_payload(content: &str) -> Option<ParsedResume> {
    let blob = JSON_BLOB_RE.find(content)?;
    match serde_json::from_str::<ParsedResume>(blob.as_str()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("model JSON did not match the resume schema: {e}");
            None
        }
    }
}

const SYSTEM_PROMPT: &str =
    "You are an expert resume parser. Extract structured information from resumes accurately.";

fn user_prompt(text: &str) -> String {
    format!(
        r#"Parse this resume text and extract the information into the following JSON structure. Be as accurate as possible and don't make up information that isn't present:

Resume Text:
{text}

Respond ONLY with valid JSON in this exact format:
{{
    "summary": "professional summary or objective",
    "workExperience": [
        {{
            "position": "job title",
            "company": "company name",
            "duration": "start date - end date",
            "responsibilities": ["responsibility 1", "responsibility 2"]
        }}
    ],
    "education": [
        {{
            "degree": "degree name",
            "institution": "school name",
            "year": "graduation year"
        }}
    ],
    "skills": ["skill1", "skill2", "skill3"],
    "projects": [
        {{
            "name": "project name",
            "description": "project description",
            "technologies": ["tech1", "tech2"]
        }}
    ]
}}"#
    )
}

// ── Tests ──
