//! Domain-level error type used across the engine and its services.
//!
//! This error type is UI- and storage-agnostic. Embedders map it onto
//! whatever surface they expose (alert text, HTTP problem details, ...).
//! Recoverable round-validation outcomes are *not* errors: a failed trick
//! count check is reported through `AdvanceOutcome::Rejected` and leaves
//! state untouched.

use thiserror::Error;

/// Input validation / business-rule violation kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Operation invoked while the session is in the wrong phase.
    PhaseMismatch,
    /// Transition attempted on a session whose final round has committed.
    GameComplete,
    /// `start_game` called outside the supported player-count range.
    InvalidPlayerCount,
    /// A player name that is empty after trimming.
    EmptyName,
    /// A bonus total below zero.
    NegativeBonus,
    Other(String),
}

/// Semantic conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Proposed name collides (case-insensitively) with an existing one.
    DuplicateName,
    Other(String),
}

/// Missing resource in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Profile,
    Roster,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    SaveFailed,
    LoadFailed,
    Other(String),
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
