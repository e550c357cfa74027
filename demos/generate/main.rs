//! Generates a complete envelope model against the in-memory host and
//! prints what was realized. Run with `RUST_LOG=debug` for the plan and
//! commit events.

use envolis::assembly::{
    DoorConfig, EnvelopeConfig, ModelAssembly, RoofConfig, RoofStyle, WindowConfig,
};
use envolis::geometry::{Level, OpeningSpec};
use envolis::host::{Category, FamilyRef, MemoryHost, ParamKey};
use tracing_subscriber::EnvFilter;

fn main() -> envolis::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = MemoryHost::new();
    host.add_level("Level 1", 0.0);
    host.add_level("Level 2", 3000.0);
    host.add_family_type(
        Category::Door,
        FamilyRef::new("Single-Flush", "0915 x 2134"),
        false,
    );
    host.add_family_type(
        Category::Window,
        FamilyRef::new("Fixed", "0915 x 1220"),
        false,
    );
    host.add_roof_type(FamilyRef::new("Basic Roof", "Generic - 125mm"));

    let config = EnvelopeConfig {
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
    };

    let plan = ModelAssembly::new(config).plan()?;
    println!("planned: {} walls, 1 door, {} windows", plan.walls.len(), plan.windows.len());

    let report = plan.commit(&mut host)?;
    println!(
        "committed: {} walls, {} windows, roof realized",
        report.walls.len(),
        report.windows.len()
    );
    Ok(())
}
