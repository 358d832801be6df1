//! Text command surface: `/autorespond <sub-command> [args]`.

use thiserror::Error;

/// Command word the bot answers to. `/autorespond@<botname>` is accepted too.
pub const COMMAND_NAME: &str = "/autorespond";

/// Help text sent back on malformed commands.
pub const USAGE: &str = "Usage:\n\
/autorespond set <trigger> | <response>\n\
/autorespond show\n\
/autorespond remove <trigger>\n\
/autorespond enable\n\
/autorespond disable";

/// A parsed `/autorespond` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutorespondCommand {
    /// Set (or overwrite) an auto-respond message.
    Set { trigger: String, response: String },
    /// Show all auto-respond messages.
    Show,
    /// Remove an auto-respond message.
    Remove { trigger: String },
    /// Enable auto-respond messages.
    Enable,
    /// Disable auto-respond messages.
    Disable,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Missing sub-command")]
    MissingSubcommand,

    #[error("Unknown sub-command: {0}")]
    UnknownSubcommand(String),

    #[error("Missing {argument} for {subcommand}")]
    MissingArgument {
        subcommand: &'static str,
        argument: &'static str,
    },
}

impl AutorespondCommand {
    /// Parses message text. `Ok(None)` means the text is not an `/autorespond` command at all.
    ///
    /// `set` takes `<trigger> | <response>`, split on the first `|`; both sides are trimmed and
    /// must be non-empty. Sub-command names are case-insensitive.
    pub fn parse(text: &str) -> Result<Option<Self>, CommandParseError> {
        let (head, rest) = split_first_word(text.trim_start());
        if !is_command_word(head) {
            return Ok(None);
        }

        let (sub, args) = split_first_word(rest.trim_start());
        if sub.is_empty() {
            return Err(CommandParseError::MissingSubcommand);
        }
        let args = args.trim();

        let command = match sub.to_lowercase().as_str() {
            "set" => {
                let (trigger, response) =
                    args.split_once('|')
                        .ok_or(CommandParseError::MissingArgument {
                            subcommand: "set",
                            argument: "response",
                        })?;
                let (trigger, response) = (trigger.trim(), response.trim());
                if trigger.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        subcommand: "set",
                        argument: "trigger",
                    });
                }
                if response.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        subcommand: "set",
                        argument: "response",
                    });
                }
                AutorespondCommand::Set {
                    trigger: trigger.to_string(),
                    response: response.to_string(),
                }
            }
            "show" => AutorespondCommand::Show,
            "remove" => {
                if args.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        subcommand: "remove",
                        argument: "trigger",
                    });
                }
                AutorespondCommand::Remove {
                    trigger: args.to_string(),
                }
            }
            "enable" => AutorespondCommand::Enable,
            "disable" => AutorespondCommand::Disable,
            _ => return Err(CommandParseError::UnknownSubcommand(sub.to_string())),
        };

        Ok(Some(command))
    }

    /// Sub-command name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AutorespondCommand::Set { .. } => "set",
            AutorespondCommand::Show => "show",
            AutorespondCommand::Remove { .. } => "remove",
            AutorespondCommand::Enable => "enable",
            AutorespondCommand::Disable => "disable",
        }
    }
}

fn split_first_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

fn is_command_word(word: &str) -> bool {
    let name = word.split_once('@').map_or(word, |(name, _)| name);
    name.eq_ignore_ascii_case(COMMAND_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(AutorespondCommand::parse("hello"), Ok(None));
        assert_eq!(AutorespondCommand::parse(""), Ok(None));
        assert_eq!(AutorespondCommand::parse("/start"), Ok(None));
        assert_eq!(AutorespondCommand::parse("/autorespondx show"), Ok(None));
    }

    #[test]
    fn test_parse_set_splits_on_first_pipe() {
        let cmd = AutorespondCommand::parse("/autorespond set Good Morning |  Rise | shine ").unwrap();
        assert_eq!(
            cmd,
            Some(AutorespondCommand::Set {
                trigger: "Good Morning".to_string(),
                response: "Rise | shine".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_set_missing_parts() {
        assert_eq!(
            AutorespondCommand::parse("/autorespond set hello"),
            Err(CommandParseError::MissingArgument {
                subcommand: "set",
                argument: "response",
            })
        );
        assert_eq!(
            AutorespondCommand::parse("/autorespond set | hi"),
            Err(CommandParseError::MissingArgument {
                subcommand: "set",
                argument: "trigger",
            })
        );
        assert_eq!(
            AutorespondCommand::parse("/autorespond set hello |   "),
            Err(CommandParseError::MissingArgument {
                subcommand: "set",
                argument: "response",
            })
        );
    }

    #[test]
    fn test_parse_simple_subcommands() {
        assert_eq!(
            AutorespondCommand::parse("/autorespond show"),
            Ok(Some(AutorespondCommand::Show))
        );
        assert_eq!(
            AutorespondCommand::parse("  /autorespond ENABLE"),
            Ok(Some(AutorespondCommand::Enable))
        );
        assert_eq!(
            AutorespondCommand::parse("/AutoRespond disable"),
            Ok(Some(AutorespondCommand::Disable))
        );
    }

    #[test]
    fn test_parse_accepts_bot_mention() {
        assert_eq!(
            AutorespondCommand::parse("/autorespond@my_bot show"),
            Ok(Some(AutorespondCommand::Show))
        );
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            AutorespondCommand::parse("/autorespond remove  Good Morning "),
            Ok(Some(AutorespondCommand::Remove {
                trigger: "Good Morning".to_string()
            }))
        );
        assert_eq!(
            AutorespondCommand::parse("/autorespond remove"),
            Err(CommandParseError::MissingArgument {
                subcommand: "remove",
                argument: "trigger",
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            AutorespondCommand::parse("/autorespond"),
            Err(CommandParseError::MissingSubcommand)
        );
        assert_eq!(
            AutorespondCommand::parse("/autorespond list"),
            Err(CommandParseError::UnknownSubcommand("list".to_string()))
        );
    }
}
