//! Optional AI acknowledgement posted shortly after a ticket opens.

use serde::{Deserialize, Serialize};
use serenity::async_trait;

use crate::server::{
    error::{internal::InternalError, AppError},
    gateway::OutboundMessage,
    model::ticket::Ticket,
};

use super::TicketService;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Generates a first reply for a newly opened ticket.
#[async_trait]
pub trait TicketAssistant: Send + Sync {
    async fn acknowledge(&self, ticket: &Ticket) -> Result<String, AppError>;
}

/// [`TicketAssistant`] backed by the OpenAI chat completions API.
pub struct OpenAiAssistant {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiAssistant {
    pub fn new(http_client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            model,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl TicketAssistant for OpenAiAssistant {
    async fn acknowledge(&self, ticket: &Ticket) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "You are a helpful Discord support assistant. Acknowledge the \
                              user's ticket in a few friendly sentences and tell them a staff \
                              member will follow up."
                        .to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "Category: {}\nPriority: {}\n\n{}",
                        ticket.category, ticket.priority, ticket.description
                    ),
                },
            ],
            max_tokens: 300,
        };

        let response: ChatResponse = self
            .http_client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| InternalError::EmptyResponse { service: "OpenAI" }.into())
    }
}

impl<'a> TicketService<'a> {
    /// Schedules the AI acknowledgement for a new ticket, if an assistant is configured.
    pub(super) fn spawn_acknowledgement(&self, ticket: &Ticket, channel_id: u64) {
        let Some(assistant) = self.desk.assistant.clone() else {
            return;
        };

        let gateway = self.desk.gateway.clone();
        let delay = self.desk.settings.assist_delay;
        let ticket = ticket.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let reply = match assistant.acknowledge(&ticket).await {
                Ok(reply) => reply,
                Err(e) => {
                    tracing::warn!(
                        "Failed to generate acknowledgement for ticket {}: {}",
                        ticket.ticket_id,
                        e
                    );
                    return;
                }
            };

            if let Err(e) = gateway
                .send_message(channel_id, OutboundMessage::text(reply))
                .await
            {
                tracing::error!(
                    "Failed to post acknowledgement for ticket {}: {}",
                    ticket.ticket_id,
                    e
                );
            }
        });
    }
}
