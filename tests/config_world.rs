use std::io::Write;

use rui::prelude::*;

struct Tree;
struct Leaf;

#[test]
fn test_world_from_json_config() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "delta": 0.5, "match_mode": "exact", "group_policy": "prune_on_kill" }}"#
    )?;

    let config = WorldConfig::from_json_file(file.path())?;
    let mut world = World::with_config(config)?;
    assert_eq!(world.delta(), 0.5);

    let tree = world.spawn("", (Tree, Leaf))?;
    let bare = world.spawn("", (Tree,))?;
    assert_eq!(world.get_entities_by_components::<(Tree,)>(), vec![bare]);

    world.register_entity_to_group(tree, "FOREST")?;
    world.register_entity_to_group(bare, "FOREST")?;
    world.remove_entity(tree)?;
    assert_eq!(world.get_group("FOREST")?, &[bare]);
    Ok(())
}

#[test]
fn test_out_of_range_json_delta_rejected() {
    let result = WorldConfig::from_json_str(r#"{ "delta": 1e400 }"#);
    assert!(matches!(result, Err(EcsError::ConfigError(_))));
}

#[test]
fn test_non_finite_delta_rejected_by_world() {
    let config = WorldConfig {
        delta: f64::NAN,
        ..WorldConfig::default()
    };
    assert!(matches!(config.validate(), Err(EcsError::ConfigError(_))));

    match World::with_config(config) {
        Err(EcsError::ConfigError(message)) => assert!(message.contains("delta must be finite")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("world built from a NaN delta"),
    }
}
