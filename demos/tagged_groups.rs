//! Tags, groups and the errors they raise.

use rui::prelude::*;

struct Enemy;

fn main() -> Result<()> {
    println!("=== Tags & Groups Demo ===\n");

    let mut world = World::new();
    let boss = world.spawn("BOSS", (Enemy,))?;
    let grunts: Vec<EntityId> = (0..3)
        .map(|_| world.spawn("", (Enemy,)))
        .collect::<Result<_>>()?;

    for &grunt in &grunts {
        world.register_entity_to_group(grunt, "WAVE_1")?;
    }
    world.register_entity_to_group(boss, "WAVE_1")?;

    match world.spawn("BOSS", (Enemy,)) {
        Err(err) => println!("Second boss rejected: {err}"),
        Ok(id) => println!("Unexpected second boss {id}"),
    }

    world.remove_entity(grunts[0])?;
    println!("WAVE_1 entries: {}", world.get_group("WAVE_1")?.len());
    println!("WAVE_1 alive:   {}", world.group_members_alive("WAVE_1")?.len());

    if let Err(err) = world.get_tag(grunts[0]) {
        println!("Killed grunt: {err}");
    }

    for line in WorldInspector::group_summary(&world) {
        println!("{line:?}");
    }
    Ok(())
}
