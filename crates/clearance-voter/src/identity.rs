//! Requester identity and resource attributes
//!
//! Both types are borrowed by the voter for the duration of one evaluation; the
//! caller keeps ownership.

use serde::{Deserialize, Serialize};

/// The identity presented by the requester.
///
/// Only [`Identity::Known`] carries a clearance the voter understands. Any other
/// principal (service accounts, anonymous users, identities issued by a different
/// authentication backend) is represented as [`Identity::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    /// A principal of the shape this voter understands.
    Known {
        /// Raw clearance string as issued by the authentication pipeline.
        clearance: Option<String>,
    },
    /// A principal of some other shape.
    Other,
}

impl Identity {
    /// Create a known identity holding `clearance`.
    pub fn known(clearance: impl Into<String>) -> Self {
        Self::Known {
            clearance: Some(clearance.into()),
        }
    }

    /// Create a known identity without any clearance.
    pub fn known_without_clearance() -> Self {
        Self::Known { clearance: None }
    }

    /// Clearance string, if this is a known identity that carries one.
    pub fn clearance(&self) -> Option<&str> {
        match self {
            Self::Known { clearance } => clearance.as_deref(),
            Self::Other => None,
        }
    }

    /// Returns `true` for [`Identity::Known`].
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

/// A label attached to a protected operation.
///
/// Attributes without a string label exist in some frameworks (expression-based
/// rules, for example); they are modelled with [`ResourceAttribute::unlabeled`]
/// and are never recognized by a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceAttribute(Option<String>);

impl ResourceAttribute {
    /// Create a labelled attribute.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Some(label.into()))
    }

    /// Create an attribute that has no string label.
    pub fn unlabeled() -> Self {
        Self(None)
    }

    /// The attribute label, if any.
    pub fn label(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<String> for ResourceAttribute {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ResourceAttribute {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ResourceAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "<unlabeled>"),
        }
    }
}
