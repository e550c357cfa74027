use slotmap::SlotMap;

use crate::error::{HostError, Result};
use crate::geometry::{GableProfile, Segment};
use crate::math::Point3;

use super::{
    Category, FamilyRef, HostModel, InstanceHandle, LevelHandle, ParamKey, ParamValue,
    RoofEdgeHandle, RoofHandle, TypeHandle, WallHandle,
};

/// A level in the in-memory catalog.
#[derive(Debug, Clone)]
pub struct LevelRecord {
    pub name: String,
    pub elevation: f64,
}

/// What kind of catalog type a [`TypeRecord`] describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// A wall-hosted family type (door or window), with its activation state.
    Hosted { category: Category, active: bool },
    /// A roof type. Roof types need no activation.
    Roof,
}

/// A family or roof type in the in-memory catalog.
#[derive(Debug, Clone)]
pub struct TypeRecord {
    pub family: FamilyRef,
    pub kind: TypeKind,
}

/// A realized wall.
#[derive(Debug, Clone)]
pub struct WallRecord {
    pub centerline: Segment,
    pub base: LevelHandle,
    pub top: LevelHandle,
}

/// A placed family instance, with every parameter write recorded.
#[derive(Debug, Clone)]
pub struct InstanceRecord {
    pub point: Point3,
    pub family_type: TypeHandle,
    pub host_wall: WallHandle,
    pub level: LevelHandle,
    pub parameters: Vec<(ParamKey, ParamValue)>,
}

/// A realized roof, in either style.
#[derive(Debug, Clone)]
pub enum RoofRecord {
    Footprint {
        footprint: Vec<Segment>,
        level: LevelHandle,
        roof_type: TypeHandle,
        edges: Vec<RoofEdgeHandle>,
    },
    Extruded {
        profile: GableProfile,
        level: LevelHandle,
        roof_type: TypeHandle,
    },
}

/// One boundary edge of a footprint roof.
#[derive(Debug, Clone)]
pub struct RoofEdgeRecord {
    pub roof: RoofHandle,
    pub edge: Segment,
    pub slope: Option<f64>,
}

/// An in-memory [`HostModel`] backed by slotmap arenas.
///
/// Catalogs are seeded up front; every realization is recorded and can be
/// inspected afterwards, which makes this host double as a dry-run target
/// and as the test double for the orchestrator.
#[derive(Debug, Default)]
pub struct MemoryHost {
    levels: SlotMap<LevelHandle, LevelRecord>,
    types: SlotMap<TypeHandle, TypeRecord>,
    walls: SlotMap<WallHandle, WallRecord>,
    instances: SlotMap<InstanceHandle, InstanceRecord>,
    roofs: SlotMap<RoofHandle, RoofRecord>,
    roof_edges: SlotMap<RoofEdgeHandle, RoofEdgeRecord>,
}

impl MemoryHost {
    /// Creates a new, empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Catalog seeding ---

    /// Adds a level to the catalog and returns its handle.
    pub fn add_level(&mut self, name: impl Into<String>, elevation: f64) -> LevelHandle {
        self.levels.insert(LevelRecord {
            name: name.into(),
            elevation,
        })
    }

    /// Adds a hosted family type (door or window) to the catalog.
    pub fn add_family_type(
        &mut self,
        category: Category,
        family: FamilyRef,
        active: bool,
    ) -> TypeHandle {
        self.types.insert(TypeRecord {
            family,
            kind: TypeKind::Hosted { category, active },
        })
    }

    /// Adds a roof type to the catalog.
    pub fn add_roof_type(&mut self, family: FamilyRef) -> TypeHandle {
        self.types.insert(TypeRecord {
            family,
            kind: TypeKind::Roof,
        })
    }

    // --- Inspection ---

    /// Returns a realized wall, or an error if the handle is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the host.
    pub fn wall(&self, id: WallHandle) -> Result<&WallRecord> {
        self.walls
            .get(id)
            .ok_or_else(|| HostError::StaleHandle("wall").into())
    }

    /// Returns a placed instance, or an error if the handle is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the host.
    pub fn instance(&self, id: InstanceHandle) -> Result<&InstanceRecord> {
        self.instances
            .get(id)
            .ok_or_else(|| HostError::StaleHandle("instance").into())
    }

    /// Returns a realized roof, or an error if the handle is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the host.
    pub fn roof(&self, id: RoofHandle) -> Result<&RoofRecord> {
        self.roofs
            .get(id)
            .ok_or_else(|| HostError::StaleHandle("roof").into())
    }

    /// Returns a footprint-roof edge, or an error if the handle is stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the host.
    pub fn roof_edge(&self, id: RoofEdgeHandle) -> Result<&RoofEdgeRecord> {
        self.roof_edges
            .get(id)
            .ok_or_else(|| HostError::StaleHandle("roof edge").into())
    }

    /// Number of realized walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Number of placed instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Number of realized roofs.
    #[must_use]
    pub fn roof_count(&self) -> usize {
        self.roofs.len()
    }
}

impl HostModel for MemoryHost {
    fn level_by_name(&self, name: &str) -> Option<LevelHandle> {
        if name.is_empty() {
            return None;
        }
        self.levels
            .iter()
            .find(|(_, record)| record.name == name)
            .map(|(id, _)| id)
    }

    fn level_elevation(&self, level: LevelHandle) -> Result<f64> {
        self.levels
            .get(level)
            .map(|record| record.elevation)
            .ok_or_else(|| HostError::StaleHandle("level").into())
    }

    fn realize_wall(
        &mut self,
        centerline: &Segment,
        base: LevelHandle,
        top: LevelHandle,
    ) -> Result<WallHandle> {
        if !self.levels.contains_key(base) || !self.levels.contains_key(top) {
            return Err(HostError::StaleHandle("level").into());
        }
        Ok(self.walls.insert(WallRecord {
            centerline: *centerline,
            base,
            top,
        }))
    }

    fn family_type(&self, category: Category, family: &FamilyRef) -> Option<TypeHandle> {
        self.types
            .iter()
            .find(|(_, record)| {
                matches!(record.kind, TypeKind::Hosted { category: c, .. } if c == category)
                    && record.family == *family
            })
            .map(|(id, _)| id)
    }

    fn activate_family_type(&mut self, family_type: TypeHandle) -> Result<()> {
        let record = self
            .types
            .get_mut(family_type)
            .ok_or(HostError::StaleHandle("type"))?;
        if let TypeKind::Hosted { active, .. } = &mut record.kind {
            *active = true;
        }
        Ok(())
    }

    fn roof_type(&self, family: &FamilyRef) -> Option<TypeHandle> {
        self.types
            .iter()
            .find(|(_, record)| record.kind == TypeKind::Roof && record.family == *family)
            .map(|(id, _)| id)
    }

    fn realize_instance(
        &mut self,
        point: Point3,
        family_type: TypeHandle,
        host_wall: WallHandle,
        level: LevelHandle,
    ) -> Result<InstanceHandle> {
        let record = self
            .types
            .get(family_type)
            .ok_or(HostError::StaleHandle("type"))?;
        match &record.kind {
            TypeKind::Hosted { active: true, .. } => {}
            TypeKind::Hosted { active: false, .. } => {
                return Err(HostError::InactiveType {
                    family: record.family.family.clone(),
                    type_name: record.family.type_name.clone(),
                }
                .into());
            }
            TypeKind::Roof => {
                return Err(
                    HostError::Rejected("roof types cannot be wall-hosted".to_owned()).into(),
                );
            }
        }
        if !self.walls.contains_key(host_wall) {
            return Err(HostError::StaleHandle("wall").into());
        }
        if !self.levels.contains_key(level) {
            return Err(HostError::StaleHandle("level").into());
        }
        Ok(self.instances.insert(InstanceRecord {
            point,
            family_type,
            host_wall,
            level,
            parameters: Vec::new(),
        }))
    }

    fn set_instance_parameter(
        &mut self,
        instance: InstanceHandle,
        key: ParamKey,
        value: ParamValue,
    ) -> Result<()> {
        let record = self
            .instances
            .get_mut(instance)
            .ok_or(HostError::StaleHandle("instance"))?;
        record.parameters.push((key, value));
        Ok(())
    }

    fn realize_footprint_roof(
        &mut self,
        footprint: &[Segment],
        level: LevelHandle,
        roof_type: TypeHandle,
    ) -> Result<(RoofHandle, Vec<RoofEdgeHandle>)> {
        if !self.levels.contains_key(level) {
            return Err(HostError::StaleHandle("level").into());
        }
        if !self.types.contains_key(roof_type) {
            return Err(HostError::StaleHandle("type").into());
        }
        let roof = self.roofs.insert(RoofRecord::Footprint {
            footprint: footprint.to_vec(),
            level,
            roof_type,
            edges: Vec::new(),
        });
        let edge_handles: Vec<RoofEdgeHandle> = footprint
            .iter()
            .map(|edge| {
                self.roof_edges.insert(RoofEdgeRecord {
                    roof,
                    edge: *edge,
                    slope: None,
                })
            })
            .collect();
        if let Some(RoofRecord::Footprint { edges, .. }) = self.roofs.get_mut(roof) {
            edges.clone_from(&edge_handles);
        }
        Ok((roof, edge_handles))
    }

    fn set_roof_edge_slope(
        &mut self,
        roof: RoofHandle,
        edge: RoofEdgeHandle,
        slope: f64,
    ) -> Result<()> {
        let record = self
            .roof_edges
            .get_mut(edge)
            .ok_or(HostError::StaleHandle("roof edge"))?;
        if record.roof != roof {
            return Err(
                HostError::Rejected("edge does not belong to the given roof".to_owned()).into(),
            );
        }
        record.slope = Some(slope);
        Ok(())
    }

    fn realize_extruded_roof(
        &mut self,
        profile: &GableProfile,
        level: LevelHandle,
        roof_type: TypeHandle,
    ) -> Result<RoofHandle> {
        if !self.levels.contains_key(level) {
            return Err(HostError::StaleHandle("level").into());
        }
        if !self.types.contains_key(roof_type) {
            return Err(HostError::StaleHandle("type").into());
        }
        Ok(self.roofs.insert(RoofRecord::Extruded {
            profile: *profile,
            level,
            roof_type,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn door_ref() -> FamilyRef {
        FamilyRef::new("Single-Flush", "0915 x 2134")
    }

    #[test]
    fn level_lookup_is_exact_and_rejects_empty_names() {
        let mut host = MemoryHost::new();
        let level = host.add_level("Level 1", 0.0);
        assert_eq!(host.level_by_name("Level 1"), Some(level));
        assert_eq!(host.level_by_name("Level 10"), None);
        assert_eq!(host.level_by_name(""), None);
    }

    #[test]
    fn family_lookup_matches_on_both_names_and_category() {
        let mut host = MemoryHost::new();
        let door = host.add_family_type(Category::Door, door_ref(), true);
        assert_eq!(host.family_type(Category::Door, &door_ref()), Some(door));
        assert_eq!(host.family_type(Category::Window, &door_ref()), None);
        assert_eq!(
            host.family_type(Category::Door, &FamilyRef::new("Single-Flush", "0813 x 2134")),
            None
        );
    }

    #[test]
    fn inactive_type_cannot_be_instanced_until_activated() {
        let mut host = MemoryHost::new();
        let base = host.add_level("Level 1", 0.0);
        let top = host.add_level("Level 2", 3000.0);
        let door = host.add_family_type(Category::Door, door_ref(), false);
        let wall = host
            .realize_wall(
                &Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)),
                base,
                top,
            )
            .unwrap();

        let point = Point3::new(5.0, 0.0, 0.0);
        assert!(host.realize_instance(point, door, wall, base).is_err());

        host.activate_family_type(door).unwrap();
        let instance = host.realize_instance(point, door, wall, base).unwrap();
        assert_eq!(host.instance(instance).unwrap().host_wall, wall);
    }

    #[test]
    fn footprint_roof_returns_one_edge_per_segment() {
        let mut host = MemoryHost::new();
        let level = host.add_level("Level 2", 3000.0);
        let roof_type = host.add_roof_type(FamilyRef::new("Basic Roof", "Generic - 125mm"));
        let footprint = vec![
            Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
            Segment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
            Segment::new(Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.0)),
            Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 0.0, 0.0)),
        ];

        let (roof, edges) = host
            .realize_footprint_roof(&footprint, level, roof_type)
            .unwrap();
        assert_eq!(edges.len(), 4);

        host.set_roof_edge_slope(roof, edges[0], 0.5).unwrap();
        let record = host.roof_edge(edges[0]).unwrap();
        assert_eq!(record.slope, Some(0.5));
        assert!(host.roof_edge(edges[1]).unwrap().slope.is_none());
    }

    #[test]
    fn parameter_writes_are_recorded_in_order() {
        let mut host = MemoryHost::new();
        let base = host.add_level("Level 1", 0.0);
        let top = host.add_level("Level 2", 3000.0);
        let window =
            host.add_family_type(Category::Window, FamilyRef::new("Fixed", "0915 x 1220"), true);
        let wall = host
            .realize_wall(
                &Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)),
                base,
                top,
            )
            .unwrap();
        let instance = host
            .realize_instance(Point3::new(2.0, 0.0, 0.0), window, wall, base)
            .unwrap();

        host.set_instance_parameter(
            instance,
            ParamKey::Named("Sill Height".to_owned()),
            ParamValue::Number(934.0),
        )
        .unwrap();

        let record = host.instance(instance).unwrap();
        assert_eq!(record.parameters.len(), 1);
        assert_eq!(
            record.parameters[0].1,
            ParamValue::Number(934.0)
        );
    }
}
