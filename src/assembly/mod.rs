use tracing::{debug, info};

use crate::error::{HostError, OperationError, Result};
use crate::geometry::{Level, Obstruction, OpeningPlacement, OpeningSpec, Segment, WallSegment};
use crate::host::{
    Category, FamilyRef, HostModel, InstanceHandle, ParamKey, ParamValue, RoofHandle, WallHandle,
};
use crate::operations::{DistributeOpenings, FootprintProfile, GableRoofProfile, RectangleLoop};

/// The wall the door is placed into: the front wall of the loop.
const DOOR_WALL: usize = 0;

/// Catalog reference and sizing for the door.
#[derive(Debug, Clone)]
pub struct DoorConfig {
    pub family: FamilyRef,
    pub width: f64,
}

/// Catalog reference, layout spec, and optional sill parameter for windows.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub family: FamilyRef,
    pub spec: OpeningSpec,
    /// Parameter written on every placed window, typically the sill height.
    pub sill_height: Option<(ParamKey, f64)>,
}

/// Which roof geometry to synthesize over the walls.
#[derive(Debug, Clone, Copy)]
pub enum RoofStyle {
    /// Offset footprint loop with a uniform slope annotated on every edge.
    Footprint { offset: f64, slope: f64 },
    /// Extruded gable cross-section; the ridge sits `ridge_height` above
    /// the top level.
    Gable { offset: f64, ridge_height: f64 },
}

/// Catalog reference and style for the roof.
#[derive(Debug, Clone)]
pub struct RoofConfig {
    pub family: FamilyRef,
    pub style: RoofStyle,
}

/// Full parameter set for one envelope generation run.
///
/// All lengths are in the host's internal linear unit; any external-unit
/// conversion happens before this config is built.
#[derive(Debug, Clone)]
pub struct EnvelopeConfig {
    pub width: f64,
    pub depth: f64,
    pub wall_thickness: f64,
    pub base_level: Level,
    pub top_level: Level,
    pub door: DoorConfig,
    pub window: WindowConfig,
    pub roof: RoofConfig,
}

/// The roof portion of a plan, resolved as far as planning can take it.
///
/// A footprint loop is pure geometry and is computed up front; a gable
/// profile needs the top level's elevation, a host attribute, so only its
/// parameters are carried and the profile is built at commit time.
#[derive(Debug, Clone)]
pub enum RoofPlan {
    Footprint { footprint: Vec<Segment>, slope: f64 },
    Gable { offset: f64, ridge_height: f64 },
}

/// A fully computed batch of pending realizations.
///
/// Produced without any host access; committing it replays the batch
/// against a host in one pass, inside whatever transaction the host
/// wraps around the calls.
#[derive(Debug, Clone)]
pub struct ModelPlan {
    pub config: EnvelopeConfig,
    pub walls: Vec<WallSegment>,
    pub door: OpeningPlacement,
    pub windows: Vec<OpeningPlacement>,
    pub roof: RoofPlan,
}

/// Handles for everything a committed plan realized.
#[derive(Debug, Clone)]
pub struct ModelReport {
    pub walls: Vec<WallHandle>,
    pub door: InstanceHandle,
    pub windows: Vec<InstanceHandle>,
    pub roof: RoofHandle,
}

/// Sequences the envelope generation: walls, door, windows, roof.
#[derive(Debug)]
pub struct ModelAssembly {
    config: EnvelopeConfig,
}

impl ModelAssembly {
    /// Creates a new assembly from a config.
    #[must_use]
    pub fn new(config: EnvelopeConfig) -> Self {
        Self { config }
    }

    /// Computes the full placement plan.
    ///
    /// Pure geometry, no host access: the wall loop, the door at the
    /// midpoint of the front wall, windows distributed along every wall
    /// around the door, and (for the footprint style) the offset roof
    /// loop.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for malformed dimensions or
    /// a zero-size footprint, which cannot be assembled into an envelope.
    pub fn plan(&self) -> Result<ModelPlan> {
        let config = &self.config;

        let walls =
            RectangleLoop::new(config.width, config.depth, config.wall_thickness).execute()?;
        if walls.is_empty() {
            return Err(OperationError::InvalidInput(
                "cannot assemble an envelope over a zero-size footprint".to_owned(),
            )
            .into());
        }

        // The door goes in first and has nothing to avoid, so it lands at
        // the front wall's midpoint.
        let door_spec = OpeningSpec::new(config.door.width, 0.0, 0.0);
        let door = DistributeOpenings::new(walls[DOOR_WALL], door_spec, None)
            .execute()
            .into_iter()
            .next()
            .ok_or_else(|| OperationError::Failed("door placement yielded no point".to_owned()))?;

        let obstruction = Obstruction::new(Some(door.wall_index), door.point, config.door.width);

        let mut windows = Vec::new();
        for wall in &walls {
            let placed =
                DistributeOpenings::new(*wall, config.window.spec, Some(obstruction)).execute();
            debug!(wall = wall.index, count = placed.len(), "distributed windows");
            windows.extend(placed);
        }

        let roof = match config.roof.style {
            RoofStyle::Footprint { offset, slope } => RoofPlan::Footprint {
                footprint: FootprintProfile::new(walls.clone(), offset).execute()?,
                slope,
            },
            RoofStyle::Gable {
                offset,
                ridge_height,
            } => RoofPlan::Gable {
                offset,
                ridge_height,
            },
        };

        debug!(
            walls = walls.len(),
            windows = windows.len(),
            "envelope plan complete"
        );

        Ok(ModelPlan {
            config: config.clone(),
            walls,
            door,
            windows,
            roof,
        })
    }
}

impl ModelPlan {
    /// Commits the plan against a host in one pass.
    ///
    /// All catalog lookups are resolved before the first mutation, so a
    /// missing level or type aborts the batch without touching the model.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] for unresolved levels or types, or
    /// propagates whatever the host rejects.
    pub fn commit<H: HostModel>(&self, host: &mut H) -> Result<ModelReport> {
        let config = &self.config;

        let base = host
            .level_by_name(config.base_level.name())
            .ok_or_else(|| HostError::LevelNotFound(config.base_level.name().to_owned()))?;
        let top = host
            .level_by_name(config.top_level.name())
            .ok_or_else(|| HostError::LevelNotFound(config.top_level.name().to_owned()))?;

        let door_type = host
            .family_type(Category::Door, &config.door.family)
            .ok_or_else(|| HostError::FamilyTypeNotFound {
                family: config.door.family.family.clone(),
                type_name: config.door.family.type_name.clone(),
            })?;
        let window_type = host
            .family_type(Category::Window, &config.window.family)
            .ok_or_else(|| HostError::FamilyTypeNotFound {
                family: config.window.family.family.clone(),
                type_name: config.window.family.type_name.clone(),
            })?;
        let roof_type = host
            .roof_type(&config.roof.family)
            .ok_or_else(|| HostError::RoofTypeNotFound {
                family: config.roof.family.family.clone(),
                type_name: config.roof.family.type_name.clone(),
            })?;

        host.activate_family_type(door_type)?;
        host.activate_family_type(window_type)?;

        let mut wall_handles = Vec::with_capacity(self.walls.len());
        for wall in &self.walls {
            wall_handles.push(host.realize_wall(&wall.segment, base, top)?);
        }

        let door = host.realize_instance(
            self.door.point,
            door_type,
            wall_handles[self.door.wall_index],
            base,
        )?;

        let mut window_handles = Vec::with_capacity(self.windows.len());
        for window in &self.windows {
            let instance = host.realize_instance(
                window.point,
                window_type,
                wall_handles[window.wall_index],
                base,
            )?;
            if let Some((key, value)) = &config.window.sill_height {
                host.set_instance_parameter(instance, key.clone(), ParamValue::Number(*value))?;
            }
            window_handles.push(instance);
        }

        let roof = match &self.roof {
            RoofPlan::Footprint { footprint, slope } => {
                let (roof, edges) = host.realize_footprint_roof(footprint, top, roof_type)?;
                for edge in edges {
                    host.set_roof_edge_slope(roof, edge, *slope)?;
                }
                roof
            }
            RoofPlan::Gable {
                offset,
                ridge_height,
            } => {
                let base_elevation = host.level_elevation(top)?;
                let profile =
                    GableRoofProfile::new(self.walls.clone(), *offset, *ridge_height, base_elevation)
                        .execute()?;
                host.realize_extruded_roof(&profile, top, roof_type)?
            }
        };

        info!(
            walls = wall_handles.len(),
            windows = window_handles.len(),
            "envelope committed"
        );

        Ok(ModelReport {
            walls: wall_handles,
            door,
            windows: window_handles,
            roof,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> EnvelopeConfig {
        EnvelopeConfig {
            width: 10_000.0,
            depth: 5000.0,
            wall_thickness: 250.0,
            base_level: Level::new("Level 1"),
            top_level: Level::new("Level 2"),
            door: DoorConfig {
                family: FamilyRef::new("Single-Flush", "0915 x 2134"),
                width: 915.0,
            },
            window: WindowConfig {
                family: FamilyRef::new("Fixed", "0915 x 1220"),
                spec: OpeningSpec::new(915.0, 1500.0, 1200.0),
                sill_height: Some((ParamKey::Named("Sill Height".to_owned()), 934.0)),
            },
            roof: RoofConfig {
                family: FamilyRef::new("Basic Roof", "Generic - 125mm"),
                style: RoofStyle::Gable {
                    offset: 400.0,
                    ridge_height: 1500.0,
                },
            },
        }
    }

    #[test]
    fn plan_places_door_at_front_wall_midpoint() {
        let plan = ModelAssembly::new(config()).plan().unwrap();
        assert_eq!(plan.door.wall_index, 0);
        assert!(plan.door.point.x.abs() < 1e-10);
        assert!((plan.door.point.y - 2500.0).abs() < 1e-10);
    }

    #[test]
    fn plan_distributes_windows_around_the_door() {
        let plan = ModelAssembly::new(config()).plan().unwrap();
        assert_eq!(plan.walls.len(), 4);

        // Front wall is split by the door: one window per 4542.5 span.
        // The 5000 side walls fit one each; the 10000 back wall fits three.
        let per_wall: Vec<usize> = (0..4)
            .map(|i| plan.windows.iter().filter(|w| w.wall_index == i).count())
            .collect();
        assert_eq!(per_wall, vec![2, 1, 3, 1]);
        assert_eq!(plan.windows.len(), 7);
    }

    #[test]
    fn plan_windows_never_touch_the_door() {
        let plan = ModelAssembly::new(config()).plan().unwrap();
        let half_door = 915.0 / 2.0;
        for window in plan.windows.iter().filter(|w| w.wall_index == 0) {
            let clearance = (window.point - plan.door.point).norm();
            assert!(clearance >= half_door + 915.0 / 2.0 - 1e-9);
        }
    }

    #[test]
    fn plan_is_idempotent() {
        let assembly = ModelAssembly::new(config());
        let a = assembly.plan().unwrap();
        let b = assembly.plan().unwrap();
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.door, b.door);
        assert_eq!(a.windows, b.windows);
    }

    #[test]
    fn zero_footprint_cannot_be_assembled() {
        let mut cfg = config();
        cfg.width = 0.0;
        cfg.depth = 0.0;
        assert!(ModelAssembly::new(cfg).plan().is_err());
    }

    #[test]
    fn footprint_style_precomputes_the_offset_loop() {
        let mut cfg = config();
        cfg.roof.style = RoofStyle::Footprint {
            offset: 400.0,
            slope: 0.5,
        };
        let plan = ModelAssembly::new(cfg).plan().unwrap();
        match &plan.roof {
            RoofPlan::Footprint { footprint, slope } => {
                assert_eq!(footprint.len(), 4);
                assert!((slope - 0.5).abs() < 1e-12);
            }
            RoofPlan::Gable { .. } => panic!("expected a footprint roof plan"),
        }
    }
}
