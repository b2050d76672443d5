//! Per-interaction request data handed to the dispatcher.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde_json::Value;

use crate::gateway::ReplyChannel;
use crate::model::command::Privilege;

/// One inbound command invocation.
///
/// Owned by a single dispatch and dropped when it completes. Raw argument values are
/// kept as JSON so the dispatcher stays independent of the transport that produced
/// them; they are converted to typed arguments during validation.
pub struct InboundRequest {
    pub command_name: String,
    pub raw_arguments: HashMap<String, Value>,
    pub caller_id: u64,
    /// Guild the command was invoked in, `None` for direct messages.
    pub guild_id: Option<u64>,
    pub caller_privileges: HashSet<Privilege>,
    pub reply_channel: Arc<dyn ReplyChannel>,
}

impl InboundRequest {
    pub fn new(
        command_name: impl Into<String>,
        caller_id: u64,
        reply_channel: Arc<dyn ReplyChannel>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            raw_arguments: HashMap::new(),
            caller_id,
            guild_id: None,
            caller_privileges: HashSet::new(),
            reply_channel,
        }
    }

    pub fn argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.raw_arguments.insert(name.into(), value.into());
        self
    }

    pub fn guild(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    pub fn privilege(mut self, privilege: impl Into<Privilege>) -> Self {
        self.caller_privileges.insert(privilege.into());
        self
    }
}
