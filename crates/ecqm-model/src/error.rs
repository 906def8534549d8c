use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Neither an explicit value nor a reporting year was supplied.
    #[error(
        "cannot resolve list {}: pass --year=YYYY to derive it, or supply the value explicitly",
        .missing.join(" and ")
    )]
    IdentityUnresolved { missing: Vec<&'static str> },

    /// List id would not name a file inside the output directory.
    #[error("invalid list id {list_id:?}: must not contain path separators or '..'")]
    InvalidListId { list_id: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
