//! Tri-state vote vocabulary.

use serde::{Deserialize, Serialize};

/// Outcome of a single voter's evaluation.
///
/// `Abstain` means the voter has no opinion on the request (none of the declared
/// attributes belong to its family). There is deliberately no error outcome:
/// malformed input is reported as `Deny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    /// Access should be granted.
    Grant,
    /// Access should be denied.
    Deny,
    /// The voter does not take part in this decision.
    Abstain,
}

impl Vote {
    /// Returns `true` for [`Vote::Grant`].
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Grant)
    }

    /// Returns `true` for [`Vote::Deny`].
    pub fn is_denied(self) -> bool {
        matches!(self, Self::Deny)
    }

    /// Returns `true` for [`Vote::Abstain`].
    pub fn is_abstain(self) -> bool {
        matches!(self, Self::Abstain)
    }

    /// Stable lowercase name, used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grant => "grant",
            Self::Deny => "deny",
            Self::Abstain => "abstain",
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_match_variant() {
        assert!(Vote::Grant.is_granted());
        assert!(!Vote::Grant.is_denied());
        assert!(Vote::Deny.is_denied());
        assert!(Vote::Abstain.is_abstain());
        assert!(!Vote::Abstain.is_granted());
    }

    #[test]
    fn display_uses_snake_case_name() {
        assert_eq!(Vote::Grant.to_string(), "grant");
        assert_eq!(Vote::Abstain.to_string(), "abstain");
    }
}
