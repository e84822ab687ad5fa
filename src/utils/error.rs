use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Malformed name {name:?}: expected \"First Last\" with a separating whitespace")]
    MalformedName { name: String },

    #[error("Hair color {color:?} is already in the roster")]
    DuplicateColor { color: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
