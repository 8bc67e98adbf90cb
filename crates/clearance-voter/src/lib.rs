//! # Clearance Voter - Security-Level Access Decisions
//!
//! A single access-control rule: compare a requester's clearance level with the
//! security levels declared on a protected operation and cast one of three votes.
//!
//! ```text
//! attributes ──▶ recognize (prefix) ──▶ identity shape ──▶ compare levels ──▶ Vote
//!                    │ none                  │ other            │ none satisfied
//!                    ▼                       ▼                  ▼
//!                 Abstain                  Deny               Deny
//! ```
//!
//! The voter is one participant in a composite decision; combining its vote with
//! other voters is left to the caller.
//!
//! # Usage
//!
//! ```rust
//! use clearance_voter::{Identity, ResourceAttribute, SecurityLevelVoter, Vote};
//!
//! let voter = SecurityLevelVoter::new();
//! let requester = Identity::known("2");
//! let required = [ResourceAttribute::new("SECURITY_LEVEL_1")];
//!
//! assert_eq!(voter.vote(&requester, &required), Vote::Grant);
//! ```

pub mod config;
pub mod decision;
pub mod errors;
pub mod identity;
pub mod level;
pub mod reload;
pub mod vote;

pub use config::VoterConfig;
pub use decision::{decide, AccessVoter, SecurityLevelVoter, DEFAULT_PREFIX};
pub use errors::{ConfigError, Result};
pub use identity::{Identity, ResourceAttribute};
pub use level::Level;
pub use reload::ReloadableVoter;
pub use vote::Vote;
