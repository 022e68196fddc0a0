use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown card size `{0}` (expected sm, md, lg, xl or 2xl)")]
    UnknownSize(String),

    #[error("unknown icon `{0}`")]
    UnknownIcon(String),

    #[error("radio group has no cards")]
    EmptyGroup,

    #[error("duplicate value `{value}` in radio group `{group}`")]
    DuplicateValue { group: String, value: String },

    #[error("card `{value}` is in group `{found}`, expected `{expected}`")]
    GroupMismatch {
        expected: String,
        found: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
