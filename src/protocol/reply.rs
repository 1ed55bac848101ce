//! Reply value types
//!
//! A `Reply` is the printable outcome of one dispatched command.

use bytes::Bytes;
use std::fmt;

/// Prefix put in front of every error line
pub const ERROR_PREFIX: &str = "***ERROR*** ";

/// The result of one dispatched command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Command succeeded and prints nothing (SET, UNSET, BEGIN, ...)
    None,

    /// A stored value (GET)
    Value(Bytes),

    /// A key count (NUMEQUALTO)
    Count(usize),

    /// Lookup of an absent key: prints NULL
    Null,

    /// ROLLBACK or COMMIT without an active transaction: prints NO TRANSACTION
    NoTransaction,

    /// Client error (unknown command, bad arity, invalid input)
    Error(String),
}

impl Reply {
    /// Create a value reply
    pub fn value(b: impl Into<Bytes>) -> Self {
        Reply::Value(b.into())
    }

    /// Create a count reply
    pub fn count(n: usize) -> Self {
        Reply::Count(n)
    }

    /// Create an error reply
    pub fn error(msg: impl Into<String>) -> Self {
        Reply::Error(msg.into())
    }

    /// Check if this is an error reply
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Render the reply as an output line, `None` for silent replies
    pub fn render(&self) -> Option<String> {
        match self {
            Reply::None => None,
            Reply::Value(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
            Reply::Count(n) => Some(n.to_string()),
            Reply::Null => Some("NULL".to_string()),
            Reply::NoTransaction => Some("NO TRANSACTION".to_string()),
            Reply::Error(msg) => Some(format!("{}{}", ERROR_PREFIX, msg)),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::None => write!(f, "None"),
            Reply::Value(b) => write!(f, "Value({} bytes)", b.len()),
            Reply::Count(n) => write!(f, "Count({})", n),
            Reply::Null => write!(f, "Null"),
            Reply::NoTransaction => write!(f, "NoTransaction"),
            Reply::Error(e) => write!(f, "Error({})", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reply_renders_nothing() {
        assert_eq!(Reply::None.render(), None);
    }

    #[test]
    fn test_value_and_count_render() {
        assert_eq!(Reply::value("10").render(), Some("10".to_string()));
        assert_eq!(Reply::count(2).render(), Some("2".to_string()));
    }

    #[test]
    fn test_sentinel_replies_render() {
        assert_eq!(Reply::Null.render(), Some("NULL".to_string()));
        assert_eq!(
            Reply::NoTransaction.render(),
            Some("NO TRANSACTION".to_string())
        );
    }

    #[test]
    fn test_error_reply_is_prefixed() {
        let reply = Reply::error("unknown command 'FOO'");
        assert!(reply.is_error());
        assert_eq!(
            reply.render(),
            Some("***ERROR*** unknown command 'FOO'".to_string())
        );
    }
}
