use chrono::Utc;
use serenity::async_trait;

use crate::{
    dispatch::{context::CommandContext, handler::CommandHandler},
    error::command::CommandError,
};

pub struct Uptime;

#[async_trait]
impl CommandHandler for Uptime {
    async fn execute(&self, ctx: &CommandContext) -> Result<(), CommandError> {
        let elapsed = Utc::now() - ctx.services().started_at;
        let secs = elapsed.num_seconds().max(0) as u64;

        ctx.reply(format!("Uptime: {}", format_duration(secs)));
        Ok(())
    }
}

/// Formats seconds as `1d 2h 3m 4s`, leaving out zero units.
///
/// Zero seconds is rendered as `0s`.
pub fn format_duration(total_secs: u64) -> String {
    let units = [
        (total_secs / 86_400, "d"),
        (total_secs % 86_400 / 3_600, "h"),
        (total_secs % 3_600 / 60, "m"),
        (total_secs % 60, "s"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}
