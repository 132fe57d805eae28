//! Multi-value element settings

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Raw value representing unlimited cardinality
pub const CARDINALITY_UNLIMITED: i64 = -1;

/// Maximum number of rows a multi-value field may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Cardinality {
    /// Row count grows with the add-more trigger
    #[default]
    Unlimited,
    /// Always exactly this many rows
    Limited(NonZeroUsize),
}

impl Cardinality {
    /// Create a bounded cardinality; zero is not a valid bound
    pub fn limited(bound: usize) -> Option<Self> {
        NonZeroUsize::new(bound).map(Self::Limited)
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl TryFrom<i64> for Cardinality {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw == CARDINALITY_UNLIMITED {
            return Ok(Self::Unlimited);
        }
        usize::try_from(raw)
            .ok()
            .and_then(Self::limited)
            .ok_or_else(|| format!("invalid cardinality {raw}: expected -1 or a positive bound"))
    }
}

impl From<Cardinality> for i64 {
    fn from(cardinality: Cardinality) -> Self {
        match cardinality {
            Cardinality::Unlimited => CARDINALITY_UNLIMITED,
            Cardinality::Limited(bound) => i64::try_from(bound.get()).unwrap_or(i64::MAX),
        }
    }
}

/// Settings of a multi-value element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiValue {
    pub cardinality: Cardinality,
    /// Overrides the configured add-more label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_more_label: Option<String>,
    /// Container id assigned during expansion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper_id: Option<String>,
}

impl MultiValue {
    pub fn new(cardinality: Cardinality) -> Self {
        Self {
            cardinality,
            ..Self::default()
        }
    }

    pub fn unlimited() -> Self {
        Self::new(Cardinality::Unlimited)
    }

    pub fn with_add_more_label(mut self, label: &str) -> Self {
        self.add_more_label = Some(label.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod cardinality {
        use super::*;

        #[test]
        fn test_default_is_unlimited() {
            assert!(Cardinality::default().is_unlimited());
        }

        #[test]
        fn test_limited_rejects_zero() {
            assert!(Cardinality::limited(0).is_none());
            assert!(!Cardinality::limited(3).unwrap().is_unlimited());
        }

        #[test]
        fn test_try_from_raw() {
            assert_eq!(Cardinality::try_from(-1), Ok(Cardinality::Unlimited));
            assert_eq!(Cardinality::try_from(2), Ok(Cardinality::limited(2).unwrap()));
            assert!(Cardinality::try_from(0).is_err());
            assert!(Cardinality::try_from(-5).is_err());
        }

        #[test]
        fn test_serializes_as_integer() {
            assert_eq!(serde_json::to_value(Cardinality::Unlimited).unwrap(), json!(-1));
            assert_eq!(
                serde_json::to_value(Cardinality::limited(4).unwrap()).unwrap(),
                json!(4)
            );
        }

        #[test]
        fn test_deserialize_invalid_fails() {
            assert!(serde_json::from_value::<Cardinality>(json!(0)).is_err());
        }
    }

    mod multi_value {
        use super::*;

        #[test]
        fn test_unlimited_has_no_label_override() {
            let settings = MultiValue::unlimited();
            assert!(settings.cardinality.is_unlimited());
            assert!(settings.add_more_label.is_none());
            assert!(settings.wrapper_id.is_none());
        }

        #[test]
        fn test_with_add_more_label() {
            let settings = MultiValue::unlimited().with_add_more_label("Add link");
            assert_eq!(settings.add_more_label.as_deref(), Some("Add link"));
        }

        #[test]
        fn test_deserialize_from_empty_json() {
            let settings: MultiValue = serde_json::from_str("{}").unwrap();
            assert_eq!(settings, MultiValue::default());
        }
    }
}
