use crate::messages::{Replacement, Replacements};
use thiserror::Error;

/// The failures raised by routing and assertions. Each maps to a locale key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EndOfRoute,
    InvalidArguments,
    InvalidCommand,
    InvalidSender,
    OnlyPlayer,
    OnlyConsole,
    Permission,
    InvalidRange,
    TooSmall,
    TooLarge,
    InvalidNumber,
    InvalidBoolean,
    InvalidEnumValue,
    InvalidMaterial,
    InvalidLength,
    NotOnline,
    UnknownPlayer,
    UnknownWorld,
    MissingArgument,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 19] = [
        ErrorKind::EndOfRoute,
        ErrorKind::InvalidArguments,
        ErrorKind::InvalidCommand,
        ErrorKind::InvalidSender,
        ErrorKind::OnlyPlayer,
        ErrorKind::OnlyConsole,
        ErrorKind::Permission,
        ErrorKind::InvalidRange,
        ErrorKind::TooSmall,
        ErrorKind::TooLarge,
        ErrorKind::InvalidNumber,
        ErrorKind::InvalidBoolean,
        ErrorKind::InvalidEnumValue,
        ErrorKind::InvalidMaterial,
        ErrorKind::InvalidLength,
        ErrorKind::NotOnline,
        ErrorKind::UnknownPlayer,
        ErrorKind::UnknownWorld,
        ErrorKind::MissingArgument,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ErrorKind::EndOfRoute => "error.endOfRoute",
            ErrorKind::InvalidArguments => "error.invalidArguments",
            ErrorKind::InvalidCommand => "error.invalidCommand",
            ErrorKind::InvalidSender => "error.invalidSender",
            ErrorKind::OnlyPlayer => "error.onlyPlayer",
            ErrorKind::OnlyConsole => "error.onlyConsole",
            ErrorKind::Permission => "error.permission",
            ErrorKind::InvalidRange => "error.invalidRange",
            ErrorKind::TooSmall => "error.tooSmall",
            ErrorKind::TooLarge => "error.tooLarge",
            ErrorKind::InvalidNumber => "error.invalidNumber",
            ErrorKind::InvalidBoolean => "error.invalidBoolean",
            ErrorKind::InvalidEnumValue => "error.invalidEnumValue",
            ErrorKind::InvalidMaterial => "error.invalidMaterial",
            ErrorKind::InvalidLength => "error.invalidLength",
            ErrorKind::NotOnline => "error.notOnline",
            ErrorKind::UnknownPlayer => "error.unknownPlayer",
            ErrorKind::UnknownWorld => "error.unknownWorld",
            ErrorKind::MissingArgument => "error.missingArgument",
        }
    }

    pub fn from_key(key: &str) -> Option<ErrorKind> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// A message or locale key shown to the sender after replacements are applied.
    #[error("{key}")]
    Message {
        key: String,
        replacements: Replacements,
    },
    /// Aborts the command without any output.
    #[error("silent command failure")]
    Silent,
}

impl CommandError {
    pub fn new(kind: ErrorKind, replacements: impl Into<Replacements>) -> Self {
        CommandError::Message {
            key: kind.key().to_string(),
            replacements: replacements.into(),
        }
    }

    /// A failure with a custom message or locale key.
    pub fn message(key: impl Into<String>) -> Self {
        CommandError::Message {
            key: key.into(),
            replacements: Replacements::new(),
        }
    }

    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        if let CommandError::Message { replacements, .. } = &mut self {
            replacements.push(replacement);
        }
        self
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CommandError::Message { key, .. } => ErrorKind::from_key(key),
            CommandError::Silent => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            CommandError::Message { key, .. } => Some(key),
            CommandError::Silent => None,
        }
    }

    pub fn replacements(&self) -> Option<&Replacements> {
        match self {
            CommandError::Message { replacements, .. } => Some(replacements),
            CommandError::Silent => None,
        }
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, CommandError::Silent)
    }
}

impl From<ErrorKind> for CommandError {
    fn from(kind: ErrorKind) -> Self {
        CommandError::new(kind, Replacements::new())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
