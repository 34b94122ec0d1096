use serde::Deserialize;

/// Identifier shared by every level of the hierarchy.
pub type ResourceId = String;

/// Opaque date token. Only compared for equality.
pub type Date = String;

/// Which level of the hierarchy a node lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Building,
    Section,
    Subsection,
    Vehicle,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Building => "building",
            NodeKind::Section => "section",
            NodeKind::Subsection => "subsection",
            NodeKind::Vehicle => "vehicle",
        }
    }
}

/// A single resource in the hierarchy.
///
/// `children` is already flattened into traversal order: direct vehicles
/// first, then nested containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: ResourceId,
    pub kind: NodeKind,
    pub children: Vec<ResourceId>,
}

impl Node {
    pub fn new(id: ResourceId, kind: NodeKind, children: Vec<ResourceId>) -> Self {
        Self { id, kind, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// ── Hierarchy description (JSON shape) ───────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HierarchySpec {
    #[serde(default)]
    pub resources: ResourcesSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourcesSpec {
    #[serde(default)]
    pub buildings: Vec<BuildingSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildingSpec {
    pub id: ResourceId,
    #[serde(default)]
    pub vehicles: Vec<ResourceId>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionSpec {
    pub id: ResourceId,
    #[serde(default)]
    pub vehicles: Vec<ResourceId>,
    /// Subsections. The description format reuses the `sections` key.
    #[serde(default, rename = "sections")]
    pub subsections: Vec<SubsectionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubsectionSpec {
    pub id: ResourceId,
    #[serde(default)]
    pub vehicles: Vec<ResourceId>,
}

// ── Queries ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Book,
    IsBooked,
    IsAllBooked,
    IsAvailable,
}

impl Command {
    pub const SUPPORTED: [&'static str; 4] = ["book", "is_booked", "is_all_booked", "is_available"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "book" => Some(Command::Book),
            "is_booked" => Some(Command::IsBooked),
            "is_all_booked" => Some(Command::IsAllBooked),
            "is_available" => Some(Command::IsAvailable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Book => "book",
            Command::IsBooked => "is_booked",
            Command::IsAllBooked => "is_all_booked",
            Command::IsAvailable => "is_available",
        }
    }

    pub fn is_read_only(&self) -> bool {
        !matches!(self, Command::Book)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub command: Command,
    pub resource_id: ResourceId,
    pub date: Date,
}

impl Query {
    pub fn new(command: Command, resource_id: impl Into<ResourceId>, date: impl Into<Date>) -> Self {
        Self {
            command,
            resource_id: resource_id.into(),
            date: date.into(),
        }
    }
}

/// Result token for one processed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    Failed,
    Yes,
    No,
}

impl Outcome {
    pub fn from_bool(answer: bool) -> Self {
        if answer { Outcome::Yes } else { Outcome::No }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::Failed => "failed",
            Outcome::Yes => "yes",
            Outcome::No => "no",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
