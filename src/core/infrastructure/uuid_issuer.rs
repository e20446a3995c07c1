//! Best-effort generation of random unique identifiers.
//!
//! Discovery must not fail because the operating system could not hand out
//! entropy, so issuance degrades to the nil UUID and reports why.

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use uuid::{Builder, Uuid};

/// Failure to generate a unique identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
    /// The random source could not provide bytes
    ///
    /// # Fields
    /// * `0` - The error reported by the random source
    #[error("Entropy source error: {0}")]
    Entropy(String),
}

/// A source of unique identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait UuidSource: Send + Sync {
    /// Attempts to generate a new identifier.
    ///
    /// # Errors
    ///
    /// Returns an `IssueError` if no identifier could be generated.
    fn try_new(&self) -> Result<Uuid, IssueError>;
}

/// Generates version 4 UUIDs from the operating system's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUuidSource;

impl UuidSource for RandomUuidSource {
    fn try_new(&self) -> Result<Uuid, IssueError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| IssueError::Entropy(e.to_string()))?;
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// The result of a best-effort issuance.
///
/// Carries the nil UUID together with the failure when issuance failed, so
/// callers decide for themselves whether a nil identifier is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedUuid {
    uuid: Uuid,
    error: Option<IssueError>,
}

impl IssuedUuid {
    /// The issued identifier, nil on failure.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Returns true if a real identifier was issued.
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&IssueError> {
        self.error.as_ref()
    }
}

/// Issues a unique identifier from `source`, falling back to the nil UUID.
pub fn issue(source: &dyn UuidSource) -> IssuedUuid {
    match source.try_new() {
        Ok(uuid) => IssuedUuid { uuid, error: None },
        Err(error) => IssuedUuid {
            uuid: Uuid::nil(),
            error: Some(error),
        },
    }
}
