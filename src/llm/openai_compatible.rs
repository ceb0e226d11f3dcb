// ABOUTME: OpenAI-compatible chat completion provider over HTTP
// ABOUTME: Works with OpenAI itself and self-hosted servers exposing the same API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! `OpenAI`-compatible provider
//!
//! Speaks the `/chat/completions` wire format, which covers `OpenAI` and
//! local servers (Ollama, vLLM) alike. The base URL, API key, and model
//! come from [`LlmSettings`].

use super::{ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::environment::LlmSettings;
use async_trait::async_trait;
use pantry_core::AppError;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// `OpenAI`-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Message structure for the `OpenAI`-compatible API
#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

/// `OpenAI`-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    model: String,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Chat completion provider for `OpenAI`-compatible endpoints
pub struct OpenAiCompatibleProvider {
    settings: LlmSettings,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    /// Create a provider from settings
    #[must_use]
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{path}", self.settings.base_url.trim_end_matches('/'))
    }

    /// Add authorization header if an API key is configured
    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref api_key) = self.settings.api_key {
            request.header("Authorization", format!("Bearer {api_key}"))
        } else {
            request
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.settings.model.clone());

        let messages = request
            .messages
            .iter()
            .map(|message| OpenAiMessage {
                role: message.role.as_str(),
                content: message.content.clone(),
            })
            .collect();

        let openai_request = OpenAiRequest {
            model,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Content-Type", "application/json")
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("LLM request failed: {e}");
                if e.is_connect() {
                    AppError::external_service(format!(
                        "Cannot connect to LLM server at {}",
                        self.settings.base_url
                    ))
                } else {
                    AppError::external_service(format!("LLM request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::external_service(format!("Failed to read LLM response: {e}"))
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "LLM returned HTTP {status}: {}",
                body.chars().take(500).collect::<String>()
            )));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse LLM response: {e} - body: {}",
                body.chars().take(500).collect::<String>()
            );
            AppError::external_service(format!("Failed to parse LLM response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("LLM returned no choices"))?;

        debug!(
            "LLM completion finished: reason={:?}",
            choice.finish_reason.as_deref()
        );

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            model: openai_response.model,
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
