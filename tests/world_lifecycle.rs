use rui::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Velocity {
    x: f32,
    y: f32,
}

#[derive(Debug, PartialEq)]
struct Health(u32);

#[test]
fn test_added_entity_is_listed_and_found_by_tag() -> Result<()> {
    let mut world = World::new();
    let player = world.spawn("PLAYER", (Position { x: 0.0, y: 0.0 }, Health(100)))?;
    let rock = world.spawn("", (Position { x: 5.0, y: 5.0 },))?;

    let listed: Vec<EntityId> = world.entity_ids().collect();
    assert_eq!(listed, vec![player, rock]);
    assert_eq!(world.get_entity_by_tag("PLAYER"), Some(player));
    assert_eq!(world.get_entity_by_tag("MISSING"), None);
    Ok(())
}

#[test]
fn test_components_can_be_built_before_adding() -> Result<()> {
    let mut world = World::new();
    let entity = world.create_entity("MOVER");
    {
        let record = world.entity_mut(entity)?;
        record.add_component(Position { x: 1.0, y: 2.0 });
        record.add_component(Velocity { x: 0.5, y: 0.0 });
    }
    world.add_entity(entity)?;

    assert_eq!(
        world.get_entities_by_components::<(Position, Velocity)>(),
        vec![entity]
    );
    assert_eq!(world.get_component::<Velocity>(entity)?.x, 0.5);
    Ok(())
}

#[test]
fn test_component_removal_changes_query_results() -> Result<()> {
    let mut world = World::new();
    let entity = world.spawn("", (Position { x: 0.0, y: 0.0 }, Velocity { x: 1.0, y: 1.0 }))?;

    let removed = world.remove_component::<Velocity>(entity)?;
    assert_eq!(removed, Velocity { x: 1.0, y: 1.0 });
    assert!(world
        .get_entities_by_components::<(Position, Velocity)>()
        .is_empty());
    assert_eq!(
        world.remove_component::<Velocity>(entity),
        Err(EcsError::ComponentNotFound(std::any::type_name::<Velocity>()))
    );
    Ok(())
}

#[test]
fn test_entities_with_mut_updates_matching_records() -> Result<()> {
    let mut world = World::new();
    let moving = world.spawn("", (Position { x: 0.0, y: 0.0 }, Velocity { x: 2.0, y: 1.0 }))?;
    let still = world.spawn("", (Position { x: 9.0, y: 9.0 },))?;

    for entity in world.entities_with_mut::<(Position, Velocity)>() {
        let velocity = entity.get_component::<Velocity>().cloned();
        if let (Some(velocity), Some(position)) =
            (velocity, entity.get_component_mut::<Position>())
        {
            position.x += velocity.x;
            position.y += velocity.y;
        }
    }

    assert_eq!(world.get_component::<Position>(moving)?, &Position { x: 2.0, y: 1.0 });
    assert_eq!(world.get_component::<Position>(still)?, &Position { x: 9.0, y: 9.0 });
    assert_eq!(world.entities_with::<(Velocity,)>().count(), 1);
    Ok(())
}

#[test]
fn test_killed_handles_never_alias_new_entities() -> Result<()> {
    let mut world = World::new();
    let first = world.spawn("TAG", (Health(1),))?;
    world.remove_entity(first)?;
    let second = world.spawn("TAG", (Health(2),))?;

    assert_ne!(first, second);
    assert_eq!(world.entity(first).unwrap_err(), EcsError::DeadEntity(first));
    assert_eq!(world.get_component::<Health>(second)?, &Health(2));
    Ok(())
}

#[test]
fn test_entity_equality_is_by_id() -> Result<()> {
    let mut world = World::new();
    let a = world.spawn("", (Health(1),))?;
    let b = world.spawn("", (Health(1),))?;

    let records = world.get_entities();
    assert_eq!(records[0], records[0]);
    assert_ne!(records[0], records[1]);
    assert_eq!(records[0].id(), a);
    assert_eq!(records[1].id(), b);
    Ok(())
}
