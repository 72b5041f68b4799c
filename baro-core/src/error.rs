/// Unified error type for the baro workspace.
///
/// This covers the empty-result signal, source connectivity failures,
/// argument validation errors, and contract violations from the record
/// source. HTTP semantics live entirely in the serving layer; this type only
/// names the condition.
///
/// `Display` and `std::error::Error` are implemented by hand because the
/// `source` fields are plain `String` names, not nested errors, and the
/// `thiserror` derive would otherwise try to expose them via `source()`.
#[derive(Debug)]
pub enum BaroError {
    /// The requested window (and tag, if any) matched zero records.
    ///
    /// This is a signal, not a failure: callers translate it into an
    /// empty-result response rather than an error payload.
    NoData,

    /// The record source could not reach its backing store.
    Connectivity {
        /// Name of the source that failed to connect.
        source: String,
    },

    /// Invalid caller-supplied argument (malformed timestamp, inverted window).
    InvalidArg(String),

    /// A record carried a tag outside the fixed channel set while the
    /// mention aggregator was running under the `Reject` policy.
    UnknownChannel {
        /// The offending tag value.
        tag: String,
    },

    /// The record source failed for a reason other than connectivity.
    Source {
        /// Name of the source that failed.
        source: String,
        /// Human-readable failure message.
        msg: String,
    },
}

impl std::fmt::Display for BaroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "no records matched the requested window"),
            Self::Connectivity { source } => {
                write!(f, "{source}: unable to connect to the database")
            }
            Self::InvalidArg(msg) => write!(f, "invalid argument: {msg}"),
            Self::UnknownChannel { tag } => {
                write!(f, "record tag {tag:?} is not a known channel")
            }
            Self::Source { source, msg } => write!(f, "{source} failed: {msg}"),
        }
    }
}

impl std::error::Error for BaroError {}

impl BaroError {
    /// Helper: build a `Connectivity` error for the named source.
    pub fn connectivity(source: impl Into<String>) -> Self {
        Self::Connectivity {
            source: source.into(),
        }
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `UnknownChannel` error for a tag value.
    pub fn unknown_channel(tag: impl Into<String>) -> Self {
        Self::UnknownChannel { tag: tag.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source: source.into(),
            msg: msg.into(),
        }
    }
}
