//! # Failure Policy
//!
//! How repository operations treat store and parse failures.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Operation result                                  │
//! │                                                                         │
//! │   Ok(v) ────────────────────────────────► Ok(Outcome::Complete(v))      │
//! │                                                                         │
//! │   Err(Rejected) ──── any policy ────────► Err(Rejected)                 │
//! │                                                                         │
//! │   Err(Unavailable | Parse)                                              │
//! │        ├── Strict ──────────────────────► Err(e)                        │
//! │        └── Lenient ── error! log ───────► Ok(Outcome::Recovered {       │
//! │                                              value: fallback, cause })  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Lenient` is the default: callers only ever see a duplicate rejection,
//! and a write that failed looks like a write that happened unless the
//! caller inspects the [`Outcome`].

use std::fmt;
use std::str::FromStr;
use tracing::error;

use crate::error::{StoreError, StoreResult};

/// Whether store and parse failures are absorbed or returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and substitute the fallback value.
    #[default]
    Lenient,
    /// Return the failure.
    Strict,
}

impl FailurePolicy {
    /// True for [`FailurePolicy::Lenient`].
    pub fn is_lenient(self) -> bool {
        self == FailurePolicy::Lenient
    }

    /// Turns an operation result into what the caller receives.
    pub(crate) fn settle<T>(
        self,
        operation: &'static str,
        result: StoreResult<T>,
        fallback: impl FnOnce() -> T,
    ) -> StoreResult<Outcome<T>> {
        match result {
            Ok(value) => Ok(Outcome::Complete(value)),
            Err(cause) if cause.is_rejection() => Err(cause),
            Err(cause) => match self {
                FailurePolicy::Strict => Err(cause),
                FailurePolicy::Lenient => {
                    error!(operation, error = %cause, "Storage failure absorbed");
                    Ok(Outcome::Recovered {
                        value: fallback(),
                        cause,
                    })
                }
            },
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(FailurePolicy::Lenient),
            "strict" => Ok(FailurePolicy::Strict),
            other => Err(format!(
                "unknown failure policy '{other}' (expected 'lenient' or 'strict')"
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Lenient => f.write_str("lenient"),
            FailurePolicy::Strict => f.write_str("strict"),
        }
    }
}

/// Result of a repository operation that did not fail outright.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The operation ran to completion.
    Complete(T),
    /// A failure was absorbed; `value` is the fallback.
    Recovered { value: T, cause: StoreError },
}

impl<T> Outcome<T> {
    /// The value, whether real or fallback.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Complete(value) | Outcome::Recovered { value, .. } => value,
        }
    }

    /// Consumes the outcome, returning the value.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Complete(value) | Outcome::Recovered { value, .. } => value,
        }
    }

    /// The absorbed failure, if any.
    pub fn cause(&self) -> Option<&StoreError> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Recovered { cause, .. } => Some(cause),
        }
    }

    /// True when a failure was absorbed.
    pub fn is_recovered(&self) -> bool {
        matches!(self, Outcome::Recovered { .. })
    }

    /// Converts back to a plain result, surfacing any absorbed failure.
    pub fn into_result(self) -> StoreResult<T> {
        match self {
            Outcome::Complete(value) => Ok(value),
            Outcome::Recovered { cause, .. } => Err(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loja_core::CoreError;

    fn unavailable() -> StoreResult<Vec<i32>> {
        Err(StoreError::Unavailable("offline".to_string()))
    }

    #[test]
    fn test_complete_under_any_policy() {
        for policy in [FailurePolicy::Lenient, FailurePolicy::Strict] {
            let outcome = policy.settle("op", Ok(vec![1]), Vec::new).unwrap();
            assert!(!outcome.is_recovered());
            assert_eq!(outcome.into_value(), vec![1]);
        }
    }

    #[test]
    fn test_lenient_absorbs() {
        let outcome = FailurePolicy::Lenient
            .settle("op", unavailable(), Vec::new)
            .unwrap();
        assert!(outcome.is_recovered());
        assert!(outcome.value().is_empty());
        assert!(matches!(outcome.cause(), Some(StoreError::Unavailable(_))));
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn test_strict_returns() {
        let err = FailurePolicy::Strict
            .settle("op", unavailable(), Vec::new)
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test]
    fn test_rejection_always_escapes() {
        let rejected: StoreResult<()> = Err(CoreError::DuplicateProduct {
            nome: "Arroz".to_string(),
        }
        .into());
        let err = FailurePolicy::Lenient
            .settle("op", rejected, || ())
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("Strict".parse::<FailurePolicy>().unwrap(), FailurePolicy::Strict);
        assert_eq!("lenient".parse::<FailurePolicy>().unwrap(), FailurePolicy::Lenient);
        assert!("maybe".parse::<FailurePolicy>().is_err());
        assert_eq!(FailurePolicy::default(), FailurePolicy::Lenient);
    }
}
