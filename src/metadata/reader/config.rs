//! Reader configuration.
//!
//! The only knob is what happens when a document declares the same qualified entity type
//! name or the same entity set name twice. OData services in the wild do this when several
//! schemas are merged, so the default keeps the last declaration, which is what callers of
//! the projection have always observed.

/// Handling of colliding entity type or entity set keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later declaration replaces the earlier one
    #[default]
    LastWriteWins,
    /// The document is rejected
    Reject,
}

/// Configuration for [`crate::EdmxReader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderConfig {
    /// What to do with duplicate qualified names / entity set names
    pub duplicates: DuplicatePolicy,
}

impl ReaderConfig {
    /// Accepts duplicates, keeping the last one. Same as [`ReaderConfig::default`].
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            duplicates: DuplicatePolicy::LastWriteWins,
        }
    }

    /// Rejects documents with duplicate entity types or entity sets.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
        }
    }
}
