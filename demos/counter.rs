//! Counter demo: one entity, one system, a few ticks.

use rui::prelude::*;

#[derive(Debug)]
struct Counter {
    count: f64,
}

struct CountSystem;

impl System for CountSystem {
    fn process(&mut self, world: &mut World, delta: f64) -> Result<()> {
        for id in world.get_entities_by_components::<(Counter,)>() {
            world.get_component_mut::<Counter>(id)?.count += delta;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Counter Demo ===\n");

    let mut world = World::new();
    let entity = world.create_entity("COUNTER");
    world.add_component(entity, Counter { count: 0.0 })?;
    world.add_entity(entity)?;
    world.add_system(CountSystem)?;

    world.run_system::<CountSystem>(1.0)?;
    println!("After direct run: {:?}", world.get_component::<Counter>(entity)?);

    for _ in 0..3 {
        world.process()?;
        println!(
            "Tick {}: {:?}",
            world.tick(),
            world.get_component::<Counter>(entity)?
        );
    }

    WorldInspector::print_summary(&world);
    Ok(())
}
