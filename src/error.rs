use thiserror::Error;

/// Failures surfaced by a catalog source and propagated unchanged by the pipeline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

/// Transport failures between a `ResourceClient` and its actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
}

/// An unreachable actor is the actor adapter's form of an unavailable source.
impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        CatalogError::SourceUnavailable(e.to_string())
    }
}
