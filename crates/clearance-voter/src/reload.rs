//! Runtime-reconfigurable voter
//!
//! Evaluations run on an `Arc` snapshot taken under a short read lock. A prefix
//! change builds a new voter and swaps the `Arc`, so a vote in flight always
//! finishes with the prefix it started with.

use crate::config::VoterConfig;
use crate::decision::{AccessVoter, SecurityLevelVoter};
use crate::errors::Result;
use crate::identity::{Identity, ResourceAttribute};
use crate::vote::Vote;
use parking_lot::RwLock;
use std::sync::Arc;

/// Copy-on-write holder for a [`SecurityLevelVoter`]
#[derive(Debug, Default)]
pub struct ReloadableVoter {
    current: RwLock<Arc<SecurityLevelVoter>>,
}

impl ReloadableVoter {
    /// Wrap an initial voter
    pub fn new(voter: SecurityLevelVoter) -> Self {
        Self {
            current: RwLock::new(Arc::new(voter)),
        }
    }

    /// The voter currently in effect
    pub fn snapshot(&self) -> Arc<SecurityLevelVoter> {
        Arc::clone(&self.current.read())
    }

    /// Replace the voter for all subsequent snapshots
    pub fn replace(&self, voter: SecurityLevelVoter) {
        let next = Arc::new(voter);
        let previous = std::mem::replace(&mut *self.current.write(), Arc::clone(&next));
        tracing::info!(
            previous_prefix = %previous.prefix(),
            prefix = %next.prefix(),
            "Security level voter reconfigured"
        );
    }

    /// Swap in a voter recognizing `prefix`
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.replace(SecurityLevelVoter::with_prefix(prefix));
    }

    /// Validate `config` and swap in a voter built from it
    ///
    /// On validation failure the current voter is left untouched.
    pub fn apply_config(&self, config: &VoterConfig) -> Result<()> {
        config.validate()?;
        self.replace(SecurityLevelVoter::from_config(config));
        Ok(())
    }
}

impl AccessVoter for ReloadableVoter {
    fn supports(&self, attribute: &ResourceAttribute) -> bool {
        self.snapshot().supports(attribute)
    }

    fn vote(&self, identity: &Identity, attributes: &[ResourceAttribute]) -> Vote {
        self.snapshot().vote(identity, attributes)
    }
}
