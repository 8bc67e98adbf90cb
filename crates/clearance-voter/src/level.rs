//! Security level parsing
//!
//! Clearances and requirements are compared as [`Level`] values. Parsing never
//! fails: input that is not a plain non-negative decimal integer maps to a
//! sentinel chosen so the comparison fails closed.

/// A parsed security level.
///
/// Variant order defines the ordering: `Floor < Tier(_) < Ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Below every tier. Used for a missing or malformed clearance.
    Floor,
    /// A concrete tier.
    Tier(u64),
    /// Above every tier. Used for a malformed requirement.
    Ceiling,
}

impl Level {
    /// Parse the clearance held by a requester. Missing or malformed → [`Level::Floor`].
    pub fn clearance(raw: Option<&str>) -> Self {
        raw.and_then(parse_tier).map_or(Self::Floor, Self::Tier)
    }

    /// Parse a required level (the attribute label with its prefix removed).
    /// Malformed → [`Level::Ceiling`].
    pub fn required(raw: &str) -> Self {
        parse_tier(raw).map_or(Self::Ceiling, Self::Tier)
    }

    /// Returns `true` if a requester holding `self` meets `required`.
    pub fn satisfies(self, required: Level) -> bool {
        self >= required
    }
}

/// ASCII digits only: no sign, no whitespace, no separators. Leading zeros are fine.
/// Non-ASCII decimal digits (e.g. fullwidth `１`) are rejected even though some
/// integer parsers accept them.
fn parse_tier(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflow is the only remaining failure.
    raw.parse().ok()
}
