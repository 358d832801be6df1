//! Rendered command replies: a title, optional description and name/value fields, with a tone
//! that marks success, information, notices and errors.

use std::fmt;

/// Visual tone of a reply. Errors are always rendered distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Notice,
    Error,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Success => "✅",
            Tone::Info => "ℹ️",
            Tone::Notice => "🔸",
            Tone::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
}

/// A reply to an `/autorespond` command, rendered to plain text for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub tone: Tone,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<ReplyField>,
}

impl Reply {
    pub fn new(tone: Tone, title: impl Into<String>) -> Self {
        Self {
            tone,
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }

    /// Plain-text form: marker and title, then the description, then one `name: value` line per field.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tone.marker(), self.title)?;
        if let Some(description) = &self.description {
            write!(f, "\n{}", description)?;
        }
        for field in &self.fields {
            write!(f, "\n{}: {}", field.name, field.value)?;
        }
        Ok(())
    }
}
