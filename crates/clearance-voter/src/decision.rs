//! Security-level decision
//!
//! Votes on attributes whose label starts with a configured prefix (by default
//! `SECURITY_LEVEL_`). The remainder of such a label is the minimum clearance
//! required for the protected operation.
//!
//! # Decision Order
//!
//! 1. No recognized attribute → `Abstain`, before the identity is looked at.
//! 2. Identity not [`Identity::Known`] → `Deny`.
//! 3. Any recognized requirement met by the clearance → `Grant`, else `Deny`.
//!
//! All prefix comparisons are case sensitive and untrimmed.

use crate::config::VoterConfig;
use crate::identity::{Identity, ResourceAttribute};
use crate::level::Level;
use crate::vote::Vote;

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "SECURITY_LEVEL_";

/// Decide a vote for `identity` against `attributes`, recognizing attributes by `prefix`.
///
/// Pure and total: a malformed clearance counts as [`Level::Floor`], a malformed
/// requirement as [`Level::Ceiling`], so bad input can only produce `Deny`.
pub fn decide<'a, I>(identity: &Identity, attributes: I, prefix: &str) -> Vote
where
    I: IntoIterator<Item = &'a ResourceAttribute>,
{
    let mut required = attributes
        .into_iter()
        .filter_map(|attribute| attribute.label()?.strip_prefix(prefix))
        .peekable();

    if required.peek().is_none() {
        return Vote::Abstain;
    }

    let Identity::Known { clearance } = identity else {
        return Vote::Deny;
    };

    let held = Level::clearance(clearance.as_deref());
    if required.any(|raw| held.satisfies(Level::required(raw))) {
        Vote::Grant
    } else {
        Vote::Deny
    }
}

/// Minimal voter contract consumed by a composite decision strategy.
pub trait AccessVoter: Send + Sync {
    /// Returns `true` if this voter takes part in decisions involving `attribute`.
    fn supports(&self, attribute: &ResourceAttribute) -> bool;

    /// Cast a vote for `identity` against the attributes of the protected operation.
    fn vote(&self, identity: &Identity, attributes: &[ResourceAttribute]) -> Vote;
}

/// Security-level voter with its prefix captured at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityLevelVoter {
    prefix: String,
}

impl SecurityLevelVoter {
    /// Create a voter using [`DEFAULT_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a voter recognizing attributes that start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create a voter from configuration.
    pub fn from_config(config: &VoterConfig) -> Self {
        Self::with_prefix(config.prefix.clone())
    }

    /// The prefix this voter recognizes.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if `attribute` has a label starting with the prefix.
    pub fn supports(&self, attribute: &ResourceAttribute) -> bool {
        attribute
            .label()
            .is_some_and(|label| label.starts_with(self.prefix.as_str()))
    }

    /// Cast a vote. See [`decide`].
    pub fn vote(&self, identity: &Identity, attributes: &[ResourceAttribute]) -> Vote {
        let vote = decide(identity, attributes, &self.prefix);

        tracing::debug!(
            prefix = %self.prefix,
            recognized = attributes.iter().filter(|a| self.supports(a)).count(),
            known_identity = identity.is_known(),
            vote = %vote,
            "Security level vote cast"
        );

        vote
    }
}

impl Default for SecurityLevelVoter {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessVoter for SecurityLevelVoter {
    fn supports(&self, attribute: &ResourceAttribute) -> bool {
        SecurityLevelVoter::supports(self, attribute)
    }

    fn vote(&self, identity: &Identity, attributes: &[ResourceAttribute]) -> Vote {
        SecurityLevelVoter::vote(self, identity, attributes)
    }
}
