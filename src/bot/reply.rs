//! Delivers dispatch responses as Discord interaction responses.

use std::sync::Arc;

use serenity::all::{
    CommandInteraction, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::{
    error::AppError,
    gateway::ReplyChannel,
    model::outcome::{Outcome, Response},
};

/// Discord's message content limit.
const MAX_CONTENT_LENGTH: usize = 2000;

/// Reply channel bound to one slash command interaction.
pub struct InteractionReplyChannel {
    http: Arc<Http>,
    interaction: CommandInteraction,
}

impl InteractionReplyChannel {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self { http, interaction }
    }

    async fn follow_up_each(&self, follow_ups: &[String]) -> Result<(), AppError> {
        for follow_up in follow_ups {
            self.follow_up(follow_up, false).await?;
        }
        Ok(())
    }

    async fn follow_up(&self, content: &str, ephemeral: bool) -> Result<(), AppError> {
        self.interaction
            .create_followup(
                &self.http,
                CreateInteractionResponseFollowup::new()
                    .content(truncate(content))
                    .ephemeral(ephemeral),
            )
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ReplyChannel for InteractionReplyChannel {
    /// Sends the primary outcome as the interaction response, then each follow-up
    /// in order. Failures are shown only to the caller.
    async fn send(&self, response: &Response) -> Result<(), AppError> {
        let primary = match &response.outcome {
            Outcome::Replied(content) => CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(truncate(content)),
            ),
            Outcome::Deferred => {
                CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new())
            }
            Outcome::Failed(_, message) => CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(truncate(message))
                    .ephemeral(true),
            ),
        };

        self.interaction
            .create_response(&self.http, primary)
            .await?;

        self.follow_up_each(&response.follow_ups).await
    }

    /// Sends follow-ups after an early acknowledgement. A late failure becomes an
    /// ephemeral follow-up since the interaction response is already used.
    async fn send_follow_ups(&self, response: &Response) -> Result<(), AppError> {
        if let Outcome::Failed(_, message) = &response.outcome {
            self.follow_up(message, true).await?;
        }

        self.follow_up_each(&response.follow_ups).await
    }
}

/// Cuts content to Discord's limit on a character boundary.
pub fn truncate(content: &str) -> String {
    if content.chars().count() <= MAX_CONTENT_LENGTH {
        return content.to_string();
    }

    let mut truncated: String = content.chars().take(MAX_CONTENT_LENGTH - 1).collect();
    truncated.push('…');
    truncated
}
