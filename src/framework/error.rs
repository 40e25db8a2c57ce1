//! Errors raised by the service plumbing itself, as opposed to the
//! resource-level errors each service defines.

/// Failures of the request/response channel or of the resource hooks.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request channel is closed (the actor has stopped).
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A resource hook returned its own error.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the resource error when the failure came from a hook.
    ///
    /// Clients use this to hand callers their own typed error back instead of
    /// a stringly wrapped one.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
