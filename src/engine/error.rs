use crate::model::{NodeKind, ResourceId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A container id was declared twice, or collides with another resource.
    DuplicateResource {
        id: ResourceId,
        first: NodeKind,
        second: NodeKind,
    },
    Conflict(ResourceId),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::DuplicateResource { id, first, second } => write!(
                f,
                "duplicate resource id '{id}': declared as {} and again as {}",
                first.label(),
                second.label()
            ),
            EngineError::Conflict(id) => write!(f, "already booked: {id}"),
        }
    }
}

impl std::error::Error for EngineError {}
