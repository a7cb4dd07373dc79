//! services/api/src/adapters/plan_llm.rs
//!
//! This module contains the adapter for the plan-writing LLM.
//! It implements the `PlanGenerationService` port from the `core` crate against
//! any OpenAI-compatible chat completion endpoint (Groq by default).

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use study_planner_core::{
    planner::prompt::SYSTEM_INSTRUCTIONS,
    ports::{PlanGenerationService, PortError, PortResult},
};
use tracing::debug;

use crate::config::Config;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `PlanGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiPlanAdapter {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiPlanAdapter {
    /// Creates a new `OpenAiPlanAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String, temperature: f32) -> Self {
        Self {
            client,
            model,
            temperature,
        }
    }

    /// Builds the client and adapter from the loaded configuration.
    pub fn from_config(config: &Config, api_key: &str) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.model_api_base);
        Self::new(
            Client::with_config(openai_config),
            config.plan_model.clone(),
            config.plan_temperature,
        )
    }
}

//=========================================================================================
// `PlanGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl PlanGenerationService for OpenAiPlanAdapter {
    /// Sends the planning prompt and returns the text of the first choice.
    async fn generate_plan_content(&self, prompt: &str) -> PortResult<String> {
        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_INSTRUCTIONS)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        debug!("Requesting plan content from model {}", self.model);

        // Transport, auth and rate-limit failures all surface as upstream errors.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Upstream(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                PortError::Upstream("Plan LLM returned no choices in its response.".to_string())
            })?
            .message
            .content
            .ok_or_else(|| {
                PortError::Upstream("Plan LLM response contained no text content.".to_string())
            })
    }
}
