//! The module contains the errors the ledger can throw.
//!
//! The taxonomy follows the dashboard's failure model: a store that
//! cannot be read is fatal to the current view ([`Load`]), a rejected
//! overwrite must not be trusted as persisted ([`Write`]), and bad
//! form input is recoverable ([`Validation`]).
//!
//! [`Load`]: LedgerError::Load
//! [`Write`]: LedgerError::Write
//! [`Validation`]: LedgerError::Validation
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("failed to load the ledger table: {0}")]
    Load(String),
    #[error("failed to write the ledger table: {0}")]
    Write(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("\"{0}\" not found!")]
    NotFound(String),
    #[error("the ledger table carries no audit columns")]
    AuditDisabled,
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error("template placeholder without a value: {0}")]
    TemplateRender(String),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Load(a), Self::Load(b)) => a == b,
            (Self::Write(a), Self::Write(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::AuditDisabled, Self::AuditDisabled) => true,
            (Self::TemplateNotFound(a), Self::TemplateNotFound(b)) => a == b,
            (Self::TemplateRender(a), Self::TemplateRender(b)) => a == b,
            _ => false,
        }
    }
}
