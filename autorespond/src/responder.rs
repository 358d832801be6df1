//! AutoResponder: owns the trigger store and the gate; answers inbound messages and executes
//! `/autorespond` commands.

use std::path::Path;

use storage::{StorageError, TriggerEntry, TriggerStore};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::command::AutorespondCommand;
use crate::gate::{GateTransition, ResponderGate};
use crate::reply::{Reply, Tone};

/// Trigger store plus enabled flag. Store access is serialized through an async mutex so a save
/// never overlaps another save or load.
#[derive(Debug)]
pub struct AutoResponder {
    store: Mutex<TriggerStore>,
    gate: ResponderGate,
}

impl AutoResponder {
    /// Wraps an opened store; the gate starts enabled.
    pub fn new(store: TriggerStore) -> Self {
        Self {
            store: Mutex::new(store),
            gate: ResponderGate::new(),
        }
    }

    /// Opens (or initializes) the trigger file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self::new(TriggerStore::open(path).await?))
    }

    pub fn gate(&self) -> &ResponderGate {
        &self.gate
    }

    /// Returns the response for an inbound message, if any.
    ///
    /// Messages authored by the bot itself never get a response, whatever the gate says.
    pub async fn handle_message(&self, is_self_authored: bool, text: &str) -> Option<String> {
        if is_self_authored {
            return None;
        }
        if !self.gate.is_enabled() {
            debug!("Auto-respond disabled, skipping lookup");
            return None;
        }
        self.get(text).await
    }

    pub async fn get(&self, text: &str) -> Option<String> {
        self.store.lock().await.get(text).map(str::to_string)
    }

    pub async fn set(&self, trigger: &str, response: &str) -> Result<(), StorageError> {
        self.store.lock().await.set(trigger, response).await
    }

    pub async fn remove(&self, trigger: &str) -> Result<String, StorageError> {
        self.store.lock().await.remove(trigger).await
    }

    pub async fn list(&self) -> Vec<TriggerEntry> {
        self.store.lock().await.list()
    }

    pub fn enable(&self) -> GateTransition {
        self.gate.enable()
    }

    pub fn disable(&self) -> GateTransition {
        self.gate.disable()
    }

    /// Runs a command and renders its outcome.
    ///
    /// A missing trigger on remove and a redundant enable/disable become replies. Any other
    /// storage failure is returned to the caller.
    #[instrument(skip(self, command), fields(subcommand = command.name()))]
    pub async fn execute(&self, command: AutorespondCommand) -> Result<Reply, StorageError> {
        let reply = match command {
            AutorespondCommand::Set { trigger, response } => {
                self.set(&trigger, &response).await?;
                Reply::new(Tone::Success, "Auto-Respond Set")
                    .with_field("Trigger", format!("`{}`", trigger))
                    .with_field("Response", response)
            }
            AutorespondCommand::Show => {
                let entries = self.list().await;
                if entries.is_empty() {
                    Reply::new(Tone::Error, "Auto-Respond Messages")
                        .with_description("No auto-respond messages set.")
                } else {
                    entries.into_iter().fold(
                        Reply::new(Tone::Info, "Auto-Respond Messages"),
                        |reply, entry| reply.with_field(entry.trigger, entry.response),
                    )
                }
            }
            AutorespondCommand::Remove { trigger } => match self.remove(&trigger).await {
                Ok(_) => Reply::new(Tone::Success, "Auto-Respond Removed")
                    .with_description(format!("Auto-respond message '{}' removed.", trigger)),
                Err(e) if e.is_not_found() => Reply::new(Tone::Error, "Error")
                    .with_description("That auto-respond message does not exist."),
                Err(e) => return Err(e),
            },
            AutorespondCommand::Disable => match self.disable() {
                GateTransition::Changed => Reply::new(Tone::Notice, "Auto-Respond Disabled")
                    .with_description("Auto-respond messages disabled."),
                GateTransition::Unchanged => Reply::new(Tone::Error, "Error")
                    .with_description("Auto-respond messages are already disabled."),
            },
            AutorespondCommand::Enable => match self.enable() {
                GateTransition::Changed => Reply::new(Tone::Success, "Auto-Respond Enabled")
                    .with_description("Auto-respond messages enabled."),
                GateTransition::Unchanged => Reply::new(Tone::Notice, "Info").with_description(
                    "Auto-respond messages are already enabled. To disable, use /autorespond disable.",
                ),
            },
        };

        info!(title = %reply.title, tone = ?reply.tone, "Command executed");
        Ok(reply)
    }
}
