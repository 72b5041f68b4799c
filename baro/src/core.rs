use std::sync::Arc;

use baro_core::{BaroError, RecordSource, UnknownTagPolicy};

/// Orchestrator that runs report queries against a registered record source.
pub struct Baro {
    pub(crate) source: Arc<dyn RecordSource>,
    pub(crate) unknown_tag_policy: UnknownTagPolicy,
}

impl std::fmt::Debug for Baro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Baro")
            .field("source", &self.source.name())
            .field("unknown_tag_policy", &self.unknown_tag_policy)
            .finish()
    }
}

/// Builder for constructing a [`Baro`] orchestrator.
pub struct BaroBuilder {
    source: Option<Arc<dyn RecordSource>>,
    unknown_tag_policy: UnknownTagPolicy,
}

impl Default for BaroBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BaroBuilder {
    /// Create a new builder with the default unknown-tag policy (`Reject`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            unknown_tag_policy: UnknownTagPolicy::default(),
        }
    }

    /// Register the record source reports are served from.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn RecordSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Choose how the mention summary treats tags outside the channel set.
    ///
    /// `Reject` (the default) fails the whole request, treating the tag as a
    /// record-source contract violation; `FoldIntoOther` accumulates it under
    /// an `other` counter instead.
    #[must_use]
    pub const fn unknown_tag_policy(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tag_policy = policy;
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns `BaroError::InvalidArg` if no record source was registered.
    pub fn build(self) -> Result<Baro, BaroError> {
        let source = self
            .source
            .ok_or_else(|| BaroError::invalid_arg("a record source must be registered"))?;
        Ok(Baro {
            source,
            unknown_tag_policy: self.unknown_tag_policy,
        })
    }
}

impl Baro {
    /// Start building an orchestrator.
    #[must_use]
    pub fn builder() -> BaroBuilder {
        BaroBuilder::new()
    }
}
