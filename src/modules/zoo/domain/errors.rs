use serde::Serialize;
use thiserror::Error;

/// Domain rules that reject a requested mutation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DomainError {
    #[error("enclosure is full")]
    EnclosureFull,

    #[error("animal is already in enclosure")]
    AlreadyMember,

    #[error("animal is not in enclosure")]
    NotAMember,

    #[error("enclosure is not set")]
    NilEnclosure,

    #[error("animal is already healthy")]
    AlreadyHealthy,

    #[error("feeding schedule is already done")]
    AlreadyDone,

    #[error("enclosure still has animals")]
    EnclosureNotEmpty,
}
