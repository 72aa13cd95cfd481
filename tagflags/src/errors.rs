/*!
Error types for [`tagflags`][crate].

There are two separate channels. A [`DefinitionError`] means the bound
record's annotations are malformed; it's detected before a single argument is
scanned, and is almost always a programming mistake. A [`ParseError`] means
the command line itself was bad; it always carries the positional arguments
that were collected before the failure.
 */

use core::fmt::Display;
use std::io;

use lazy_format::lazy_format;

/// An annotation didn't match the option grammar at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error in annotation {raw:?}")]
pub struct GrammarError {
    /// The annotation, exactly as it was written
    pub raw: String,
}

/// The bound record's declaration is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The field's annotation couldn't be compiled
    #[error("field `{field}`: {source}")]
    Grammar {
        field: &'static str,
        #[source]
        source: GrammarError,
    },

    /// The annotation names neither a short nor a long spelling
    #[error("field `{field}`: annotation {annotation:?} names no option")]
    NoSpelling {
        field: &'static str,
        annotation: &'static str,
    },

    /// A text field was declared without a value placeholder, so there would
    /// be no way to give it a value
    #[error("field `{field}`: text option {option} needs a value placeholder, like `{option}=VALUE`")]
    TextWithoutValue {
        field: &'static str,
        option: String,
    },

    /// Two fields claim the same spelling
    #[error("option {spelling} is claimed by both `{first}` and `{second}`")]
    DuplicateSpelling {
        spelling: String,
        first: &'static str,
        second: &'static str,
    },
}

/// What went wrong while scanning the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The option isn't known. If it came from a cluster of short options,
    /// the whole cluster is included for context.
    #[error("invalid option: {option:?}{}", part_of(.cluster))]
    UnknownOption {
        option: String,
        cluster: Option<String>,
    },

    /// The option got an inline `=value`, but it doesn't take one
    #[error("option {option} does not take an argument")]
    OptionTakesNoValue { option: String },

    /// A value-taking short option appeared in the middle of a cluster
    #[error("option {option} requires an argument (part of {cluster:?})")]
    MissingValueInCluster { option: String, cluster: String },

    /// A value-taking option was given more than once, through any of its
    /// spellings. `option` is the combined spelling.
    #[error("option {option} was passed multiple times")]
    DuplicateOption { option: String },

    /// The value couldn't be converted to the field's type
    #[error("option {option}: invalid value {value:?}: {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },

    /// The command line ended while an option was waiting for its value
    #[error("option {option} requires an argument {placeholder}")]
    TruncatedOption { option: String, placeholder: String },
}

fn part_of(cluster: &Option<String>) -> impl Display + '_ {
    lazy_format!(match (cluster) {
        Some(cluster) => " (part of {cluster:?})",
        None => "",
    })
}

/**
Scanning the command line failed. The positional arguments that were
collected up to the failure are still available through
[`args`][ParseError::args].
 */
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    kind: ErrorKind,
    args: Vec<String>,
}

impl ParseError {
    #[inline]
    #[must_use]
    pub fn new(kind: ErrorKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    /// What went wrong
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The positional arguments collected before the failure
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (ErrorKind, Vec<String>) {
        (self.kind, self.args)
    }
}

/// Either kind of failure, for the single-call [`parse`][crate::parse] entry
/// point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The positional arguments collected before the failure. Definition
    /// errors happen before any scanning, so there are none.
    #[must_use]
    pub fn args(&self) -> &[String] {
        match self {
            Error::Definition(_) => &[],
            Error::Parse(error) => error.args(),
        }
    }
}

/// Printing help failed.
#[derive(Debug, thiserror::Error)]
pub enum HelpError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("failed to write help: {0}")]
    Io(#[from] io::Error),
}
