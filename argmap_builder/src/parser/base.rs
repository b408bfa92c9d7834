use thiserror::Error;

use crate::model::Kind;

pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const NEGATION_PREFIX: &str = "no-";

/// The reasons a token list may be rejected by [`crate::Registry::parse`].
///
/// Parsing stops at the first error; no partial result is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `--name` token matched no schema, neither directly nor as `--no-name`.
    #[error("Unknown option '{0}'.")]
    UnknownOption(String),

    /// A `-c` token (or a character within a `-abc` cluster) matched no shortcut.
    #[error("Unknown flag '{0}'.")]
    UnknownFlag(String),

    /// A positional token was found but no tail schema is declared.
    #[error("Unknown argument '{0}'.")]
    UnknownArgument(String),

    /// A single value option was the final token.
    #[error("Option '{0}' expects a value.")]
    MissingValue(String),

    /// A value token could not be converted to the declared kind.
    #[error("Cannot convert '{token}' to {kind} for option '{name}'.")]
    InvalidConversion {
        /// The option name.
        name: String,
        /// The offending value token.
        token: String,
        /// The declared kind.
        kind: Kind,
    },

    /// A `-abc` cluster named a non flag option.
    #[error("Cannot mix flags with options in '{0}'.")]
    MixedCluster(String),

    /// A required option was never supplied.
    #[error("Required option --{0} not set.")]
    RequiredMissing(String),
}
