use std::sync::Arc;

use serenity::all::{GuildId, UserId};
use serenity::async_trait;
use serenity::http::Http;

use crate::{error::AppError, gateway::Moderation};

/// Moderation actions performed through the Discord REST API.
pub struct HttpModeration {
    http: Arc<Http>,
}

impl HttpModeration {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Moderation for HttpModeration {
    async fn ban(
        &self,
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: Option<&str>,
    ) -> Result<(), AppError> {
        self.http
            .ban_user(
                GuildId::new(guild_id),
                UserId::new(user_id),
                delete_message_days,
                reason,
            )
            .await?;
        Ok(())
    }

    async fn kick(&self, guild_id: u64, user_id: u64, reason: Option<&str>) -> Result<(), AppError> {
        self.http
            .kick_member(GuildId::new(guild_id), UserId::new(user_id), reason)
            .await?;
        Ok(())
    }
}
