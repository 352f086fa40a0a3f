//! Translation gateway: one `translate` capability over an ordered list of
//! external providers.
//!
//! Providers are tried in fixed order. The first provider returning a
//! non-empty result different from the input wins; a provider that errors,
//! times out, or echoes the input back is a soft failure and the next one is
//! tried. Provider order is injected at construction, so fallback policy is
//! configuration, not code.

use crate::classify::strip_quotes;
use crate::config::Config;
use crate::error::TranslateError;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

const GOOGLE_BASE_URL: &str = "https://translate.googleapis.com";
const MYMEMORY_BASE_URL: &str = "https://api.mymemory.translated.net";
const LIBRETRANSLATE_BASE_URL: &str = "https://libretranslate.com";

/// The one-operation translation capability the pipeline is polymorphic
/// over. The batch translator only ever sees this trait.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

/// A single external translation service.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;
}

/// Ordered-fallback wrapper over zero or more providers.
pub struct TranslationGateway {
    providers: Vec<Box<dyn TranslationProvider>>,
    source_lang: String,
    target_lang: String,
}

impl TranslationGateway {
    /// An empty provider list is a configuration problem; it is logged once
    /// here rather than once per translated item.
    pub fn new(
        providers: Vec<Box<dyn TranslationProvider>>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        if providers.is_empty() {
            warn!("No translation providers configured - every translation will fail");
        }
        Self {
            providers,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Build the default provider chain (Google web endpoint, MyMemory,
    /// LibreTranslate) from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        let providers: Vec<Box<dyn TranslationProvider>> = vec![
            Box::new(GoogleWebProvider::new(
                client.clone(),
                config
                    .google_base_url
                    .clone()
                    .unwrap_or_else(|| GOOGLE_BASE_URL.to_string()),
            )),
            Box::new(MyMemoryProvider::new(
                client.clone(),
                config
                    .mymemory_base_url
                    .clone()
                    .unwrap_or_else(|| MYMEMORY_BASE_URL.to_string()),
            )),
            Box::new(LibreTranslateProvider::new(
                client,
                config
                    .libretranslate_base_url
                    .clone()
                    .unwrap_or_else(|| LIBRETRANSLATE_BASE_URL.to_string()),
            )),
        ];

        Ok(Self::new(
            providers,
            config.source_lang.clone(),
            config.target_lang.clone(),
        ))
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

#[async_trait]
impl Translate for TranslationGateway {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let clean = strip_quotes(text);
        if clean.is_empty() {
            return Err(TranslateError::EmptyInput);
        }
        if self.providers.is_empty() {
            return Err(TranslateError::NoProviders);
        }

        for provider in &self.providers {
            match provider
                .translate(clean, &self.source_lang, &self.target_lang)
                .await
            {
                Ok(result) if !result.is_empty() && result != clean => {
                    debug!(
                        "Translated '{}' to '{}' using {}",
                        clean,
                        result,
                        provider.name()
                    );
                    return Ok(result);
                }
                Ok(_) => {
                    debug!(
                        "{} returned an empty or unchanged result for '{}'",
                        provider.name(),
                        clean
                    );
                }
                Err(e) => {
                    debug!("Translation failed with {}: {}", provider.name(), e);
                }
            }
        }

        warn!("Failed to translate: {}", clean);
        Err(TranslateError::AllProvidersFailed {
            attempted: self.providers.len(),
        })
    }
}

/// Retry transient failures only: network errors, 429 and 5xx responses.
/// Other 4xx responses fail the provider immediately.
fn is_retryable(error: &TranslateError) -> bool {
    if let TranslateError::Provider { message, .. } = error {
        if let Some(rest) = message.strip_prefix("HTTP status ") {
            let status_str: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if let Ok(status) = status_str.parse::<u16>() {
                return status == 429 || status >= 500;
            }
        }
    }
    true
}

fn provider_error(provider: &'static str, message: impl Into<String>) -> TranslateError {
    TranslateError::Provider {
        provider,
        message: message.into(),
    }
}

fn check_status(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, TranslateError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(provider_error(
            provider,
            format!("HTTP status {}", status.as_u16()),
        ))
    }
}

// ==================== Google web endpoint ====================

/// Unofficial Google Translate web endpoint (`/translate_a/single`). The
/// response is a nested JSON array whose first element holds translated
/// segments.
pub struct GoogleWebProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleWebProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn request(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| provider_error("google", e.to_string()))?;
        let response = check_status("google", response)?;

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| provider_error("google", format!("invalid JSON: {}", e)))?;

        let segments = body
            .get(0)
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| provider_error("google", "unexpected response shape"))?;

        let translated: String = segments
            .iter()
            .filter_map(|seg| seg.get(0).and_then(serde_json::Value::as_str))
            .collect();

        Ok(translated)
    }
}

#[async_trait]
impl TranslationProvider for GoogleWebProvider {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        with_retry_if(
            &RetryConfig::provider_call(),
            "google translate",
            || self.request(text, source_lang, target_lang),
            is_retryable,
        )
        .await
    }
}

// ==================== MyMemory ====================

#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryData,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// MyMemory public translation API (`/get?q=...&langpair=a|b`).
pub struct MyMemoryProvider {
    client: reqwest::Client,
    base_url: String,
}

impl MyMemoryProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn request(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/get", self.base_url);
        let langpair = format!("{}|{}", source_lang, target_lang);
        let response = self
            .client
            .get(&url)
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await
            .map_err(|e| provider_error("mymemory", e.to_string()))?;
        let response = check_status("mymemory", response)?;

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| provider_error("mymemory", format!("invalid JSON: {}", e)))?;

        Ok(body.response_data.translated_text)
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        with_retry_if(
            &RetryConfig::provider_call(),
            "mymemory translate",
            || self.request(text, source_lang, target_lang),
            is_retryable,
        )
        .await
    }
}

// ==================== LibreTranslate ====================

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// LibreTranslate JSON API (`POST /translate`).
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    base_url: String,
}

impl LibreTranslateProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn request(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "q": text,
                "source": source_lang,
                "target": target_lang,
                "format": "text",
            }))
            .send()
            .await
            .map_err(|e| provider_error("libretranslate", e.to_string()))?;
        let response = check_status("libretranslate", response)?;

        let body: LibreTranslateResponse = response
            .json()
            .await
            .map_err(|e| provider_error("libretranslate", format!("invalid JSON: {}", e)))?;

        Ok(body.translated_text)
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        with_retry_if(
            &RetryConfig::provider_call(),
            "libretranslate translate",
            || self.request(text, source_lang, target_lang),
            is_retryable,
        )
        .await
    }
}
