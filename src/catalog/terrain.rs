//! Terrain groups: named role → tile id tables derived from a catalog
//!
//! The asset encodes terrain grouping only implicitly, by id ranges and image
//! naming. Groups make it explicit: the caller states which tile plays which
//! role, and construction validates the statement against the catalog once,
//! at load time. Groups are read-only views; they never outlive or mutate
//! the catalog they were built from.

use crate::catalog::bitset::TileIdSet;
use crate::catalog::tile::{TileId, TileRole};
use crate::catalog::tileset::TileCatalog;
use crate::io::error::{Result, TilesetError, invalid_assignment};

/// Roles every usable terrain group must supply
///
/// Curves, sloped edges, and refined centers are optional enhancements;
/// resolution reports their absence per query instead of rejecting the group.
pub const MINIMAL_ROLES: [TileRole; 5] = [
    TileRole::Top,
    TileRole::Bottom,
    TileRole::Left,
    TileRole::Right,
    TileRole::Center,
];

/// Named collection of tile ids partitioned into terrain roles
///
/// At most one tile id per role. Assignment order is preserved so derived
/// artifacts (reports, logs) are deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGroup {
    name: String,
    assignments: Vec<(TileRole, TileId)>,
    members: TileIdSet,
}

impl TerrainGroup {
    /// Build a group by validating role assignments against a catalog
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `InvalidAssignment` if a role is bound twice or bound to the
    ///   `unclassified` role (which takes no part in resolution)
    /// - `UnknownTileId` if an assigned id is not in the catalog
    /// - `IncompleteTerrainGroup` if any of [`MINIMAL_ROLES`] is absent
    pub fn build(
        catalog: &TileCatalog,
        name: &str,
        assignments: &[(TileRole, TileId)],
    ) -> Result<Self> {
        let mut accepted: Vec<(TileRole, TileId)> = Vec::with_capacity(assignments.len());
        let mut members = catalog
            .max_id()
            .map_or_else(TileIdSet::default, TileIdSet::with_capacity);

        for &(role, id) in assignments {
            if role == TileRole::Unclassified {
                return Err(invalid_assignment(
                    name,
                    format!("role 'unclassified' cannot be bound (attempted tile {id})"),
                ));
            }
            if accepted.iter().any(|&(seen, _)| seen == role) {
                return Err(invalid_assignment(
                    name,
                    format!("role '{}' is bound more than once", role.as_str()),
                ));
            }
            if !catalog.contains(id) {
                return Err(TilesetError::UnknownTileId { id });
            }
            accepted.push((role, id));
            members.insert(id);
        }

        let missing: Vec<TileRole> = MINIMAL_ROLES
            .into_iter()
            .filter(|required| !accepted.iter().any(|&(role, _)| role == *required))
            .collect();
        if !missing.is_empty() {
            return Err(TilesetError::IncompleteTerrainGroup {
                group: name.to_string(),
                missing,
            });
        }

        Ok(Self {
            name: name.to_string(),
            assignments: accepted,
            members,
        })
    }

    /// Group name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a role to its tile id
    ///
    /// # Errors
    ///
    /// Returns `RoleNotPresent` when the group does not define the role.
    /// Callers relying on optional roles (curves, drains) should check with
    /// [`Self::has_role`] first or be prepared for this error.
    pub fn resolve(&self, role: TileRole) -> Result<TileId> {
        self.get(role).ok_or_else(|| TilesetError::RoleNotPresent {
            group: self.name.clone(),
            role,
        })
    }

    /// Tile id bound to a role, or `None` when absent
    pub fn get(&self, role: TileRole) -> Option<TileId> {
        self.assignments
            .iter()
            .find(|&&(bound, _)| bound == role)
            .map(|&(_, id)| id)
    }

    /// Whether the group defines the role
    pub fn has_role(&self, role: TileRole) -> bool {
        self.get(role).is_some()
    }

    /// Whether the tile id belongs to this group
    pub fn contains(&self, id: TileId) -> bool {
        self.members.contains(id)
    }

    /// Member ids as a set, for overlap checks between groups
    pub const fn members(&self) -> &TileIdSet {
        &self.members
    }

    /// Iterate (role, tile id) pairs in assignment order
    pub fn iter(&self) -> std::slice::Iter<'_, (TileRole, TileId)> {
        self.assignments.iter()
    }
}
