//! Dock weaknesses: what it takes to open each kind of door or portal.

use logicgraph_requirements::RequirementSet;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// The category of a dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DockType {
    /// A regular door.
    Door,
    /// A morph-ball-sized tunnel.
    MorphBallDoor,
    /// Anything else that connects two areas.
    Other,
    /// A portal between dimensions.
    Portal,
}

/// An unlock rule for a dock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DockWeakness {
    /// Index, unique within its [`DockType`].
    pub index: u32,
    /// Display name.
    pub name: String,
    /// Whether the dock is covered by a blast shield.
    pub is_blast_shield: bool,
    /// What it takes to open the dock.
    pub requirements: RequirementSet,
}

impl core::fmt::Display for DockWeakness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Catalog of dock weaknesses per dock category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockWeaknessDatabase {
    /// Door weaknesses.
    pub door: Vec<DockWeakness>,
    /// Morph ball door weaknesses.
    pub morph_ball: Vec<DockWeakness>,
    /// Other weaknesses.
    pub other: Vec<DockWeakness>,
    /// Portal weaknesses.
    pub portal: Vec<DockWeakness>,
}

impl DockWeaknessDatabase {
    /// All weaknesses of a category, in authored order.
    pub fn get_by_type(&self, dock_type: DockType) -> &[DockWeakness] {
        match dock_type {
            DockType::Door => &self.door,
            DockType::MorphBallDoor => &self.morph_ball,
            DockType::Other => &self.other,
            DockType::Portal => &self.portal,
        }
    }

    /// The weakness of a category with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DockWeaknessNotFound`] if no such entry exists.
    pub fn get_by_type_and_index(
        &self,
        dock_type: DockType,
        index: u32,
    ) -> Result<&DockWeakness, WorldError> {
        self.get_by_type(dock_type)
            .iter()
            .find(|weakness| weakness.index == index)
            .ok_or(WorldError::DockWeaknessNotFound { dock_type, index })
    }
}
