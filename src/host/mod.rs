pub mod memory;

pub use memory::MemoryHost;

use crate::error::Result;
use crate::geometry::{GableProfile, Segment};
use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a level in the host model.
    pub struct LevelHandle;
}

slotmap::new_key_type! {
    /// Unique identifier for a realized wall.
    pub struct WallHandle;
}

slotmap::new_key_type! {
    /// Unique identifier for a family or roof type in the host catalog.
    pub struct TypeHandle;
}

slotmap::new_key_type! {
    /// Unique identifier for a placed family instance.
    pub struct InstanceHandle;
}

slotmap::new_key_type! {
    /// Unique identifier for a realized roof.
    pub struct RoofHandle;
}

slotmap::new_key_type! {
    /// Unique identifier for one footprint-roof boundary edge.
    pub struct RoofEdgeHandle;
}

/// Hosted-family categories the generator places instances from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Door,
    Window,
}

/// An exact-match (family, type) catalog reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilyRef {
    /// Family name.
    pub family: String,
    /// Type name within the family.
    pub type_name: String,
}

impl FamilyRef {
    /// Creates a new catalog reference.
    #[must_use]
    pub fn new(family: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            type_name: type_name.into(),
        }
    }
}

/// Identifies an instance parameter, by display name or well-known id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// A parameter looked up by its display name.
    Named(String),
    /// A built-in parameter identified by a stable numeric id.
    Builtin(u32),
}

/// A typed parameter value, chosen at the call site.
///
/// Replaces runtime storage-type inspection: the caller states whether it
/// is writing a length-like number, a whole count, or text.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Integer(i64),
    Text(String),
}

/// The host-model collaborator the orchestrator realizes geometry against.
///
/// Implementations are expected to run every mutating call inside an
/// atomic, host-managed transaction; the kernel never opens or commits
/// transactions itself. All lengths are in the host's internal linear
/// unit; any external-unit conversion happens before these calls.
pub trait HostModel {
    /// Looks up a level by exact name. Empty or unknown names yield `None`.
    fn level_by_name(&self, name: &str) -> Option<LevelHandle>;

    /// Returns the elevation of a level.
    ///
    /// # Errors
    ///
    /// Returns an error for a stale handle.
    fn level_elevation(&self, level: LevelHandle) -> Result<f64>;

    /// Creates a wall along a centerline, constrained between two levels.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the wall.
    fn realize_wall(
        &mut self,
        centerline: &Segment,
        base: LevelHandle,
        top: LevelHandle,
    ) -> Result<WallHandle>;

    /// Looks up a hosted family type by exact (family, type) pair.
    fn family_type(&self, category: Category, family: &FamilyRef) -> Option<TypeHandle>;

    /// Activates a family type so instances of it can be placed.
    ///
    /// # Errors
    ///
    /// Returns an error for a stale handle.
    fn activate_family_type(&mut self, family_type: TypeHandle) -> Result<()>;

    /// Looks up a roof type by exact (family, type) pair.
    fn roof_type(&self, family: &FamilyRef) -> Option<TypeHandle>;

    /// Places a family instance at a point, hosted on a wall, at a level.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is inactive or any handle is stale.
    fn realize_instance(
        &mut self,
        point: Point3,
        family_type: TypeHandle,
        host_wall: WallHandle,
        level: LevelHandle,
    ) -> Result<InstanceHandle>;

    /// Sets a parameter on a placed instance.
    ///
    /// # Errors
    ///
    /// Returns an error for a stale handle.
    fn set_instance_parameter(
        &mut self,
        instance: InstanceHandle,
        key: ParamKey,
        value: ParamValue,
    ) -> Result<()>;

    /// Creates a footprint roof over a closed loop of edges, returning the
    /// roof plus one handle per boundary edge, in loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the roof.
    fn realize_footprint_roof(
        &mut self,
        footprint: &[Segment],
        level: LevelHandle,
        roof_type: TypeHandle,
    ) -> Result<(RoofHandle, Vec<RoofEdgeHandle>)>;

    /// Marks a footprint-roof edge as slope-defining with the given slope.
    ///
    /// # Errors
    ///
    /// Returns an error for a stale handle.
    fn set_roof_edge_slope(
        &mut self,
        roof: RoofHandle,
        edge: RoofEdgeHandle,
        slope: f64,
    ) -> Result<()>;

    /// Creates an extruded roof from a gable profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the roof.
    fn realize_extruded_roof(
        &mut self,
        profile: &GableProfile,
        level: LevelHandle,
        roof_type: TypeHandle,
    ) -> Result<RoofHandle>;
}
