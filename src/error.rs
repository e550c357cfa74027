use thiserror::Error;

/// Top-level error type for the Envolis envelope-generation kernel.
#[derive(Debug, Error)]
pub enum EnvolisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to layout and profile operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors surfaced while resolving against, or mutating, a host model.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("level not found: {0}")]
    LevelNotFound(String),

    #[error("family type not found: {family} : {type_name}")]
    FamilyTypeNotFound { family: String, type_name: String },

    #[error("roof type not found: {family} : {type_name}")]
    RoofTypeNotFound { family: String, type_name: String },

    #[error("family type is not active: {family} : {type_name}")]
    InactiveType { family: String, type_name: String },

    #[error("stale {0} handle")]
    StaleHandle(&'static str),

    #[error("host rejected operation: {0}")]
    Rejected(String),
}

/// Convenience type alias for results using [`EnvolisError`].
pub type Result<T> = std::result::Result<T, EnvolisError>;
