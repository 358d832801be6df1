use indexmap::IndexMap;

/// Normalized trigger → response text, in insertion order. This is also the on-disk shape.
pub type TriggerMap = IndexMap<String, String>;

/// One trigger/response pair as returned by [`crate::TriggerStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEntry {
    /// Lower-cased trigger text.
    pub trigger: String,
    /// Response text, stored verbatim.
    pub response: String,
}

impl TriggerEntry {
    pub fn new(trigger: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            response: response.into(),
        }
    }
}
