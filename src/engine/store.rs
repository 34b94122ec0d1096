use std::collections::HashMap;

use crate::model::*;

use super::EngineError;

/// Read-only resource tree, indexed by id once at load time.
#[derive(Debug, Default)]
pub struct Hierarchy {
    nodes: HashMap<ResourceId, Node>,
    buildings: Vec<ResourceId>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the description and build the id → node index.
    ///
    /// Container ids must be unique across every level and must not collide
    /// with a vehicle id. A vehicle listed under several containers is the
    /// same leaf and is accepted.
    pub fn build(spec: &HierarchySpec) -> Result<Self, EngineError> {
        let mut hierarchy = Self::new();
        for building in &spec.resources.buildings {
            let mut children = building.vehicles.clone();
            children.extend(building.sections.iter().map(|s| s.id.clone()));
            hierarchy.insert_container(&building.id, NodeKind::Building, children)?;
            hierarchy.buildings.push(building.id.clone());
            hierarchy.insert_vehicles(&building.vehicles)?;

            for section in &building.sections {
                let mut children = section.vehicles.clone();
                children.extend(section.subsections.iter().map(|s| s.id.clone()));
                hierarchy.insert_container(&section.id, NodeKind::Section, children)?;
                hierarchy.insert_vehicles(&section.vehicles)?;

                for subsection in &section.subsections {
                    hierarchy.insert_container(
                        &subsection.id,
                        NodeKind::Subsection,
                        subsection.vehicles.clone(),
                    )?;
                    hierarchy.insert_vehicles(&subsection.vehicles)?;
                }
            }
        }
        Ok(hierarchy)
    }

    fn insert_container(
        &mut self,
        id: &str,
        kind: NodeKind,
        children: Vec<ResourceId>,
    ) -> Result<(), EngineError> {
        if let Some(existing) = self.nodes.get(id) {
            return Err(EngineError::DuplicateResource {
                id: id.to_string(),
                first: existing.kind,
                second: kind,
            });
        }
        self.nodes.insert(id.to_string(), Node::new(id.to_string(), kind, children));
        Ok(())
    }

    fn insert_vehicles(&mut self, ids: &[ResourceId]) -> Result<(), EngineError> {
        for id in ids {
            match self.nodes.get(id) {
                Some(existing) if existing.kind == NodeKind::Vehicle => continue,
                Some(existing) => {
                    return Err(EngineError::DuplicateResource {
                        id: id.clone(),
                        first: existing.kind,
                        second: NodeKind::Vehicle,
                    });
                }
                None => {
                    self.nodes
                        .insert(id.clone(), Node::new(id.clone(), NodeKind::Vehicle, Vec::new()));
                }
            }
        }
        Ok(())
    }

    // ── Lookups ──────────────────────────────────────────────

    pub fn lookup(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Direct children in traversal order. Empty for vehicles and unknown ids.
    pub fn children_of(&self, id: &str) -> &[ResourceId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn resource_count(&self) -> usize {
        self.nodes.len()
    }

    /// Building ids in description order.
    pub fn building_ids(&self) -> &[ResourceId] {
        &self.buildings
    }
}
