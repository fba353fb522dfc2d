use serde::{Deserialize, Serialize};
use thiserror::Error;
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]

pub enum Error {
    #[error("No entry exists for the requested key")]
    EntryNotFound,

    #[error("Copy policy failed to produce an owned key")]
    KeyCopyFailed,

    #[error("Copy policy failed to produce an owned value")]
    ValueCopyFailed,
}
