use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use crate::entity::EntityId;
use crate::error::Result;
use crate::world::World;

/// World inspector for debugging
pub struct WorldInspector;

impl WorldInspector {
    /// Get total managed entity count
    pub fn entity_count(world: &World) -> usize {
        world.entity_count()
    }

    /// Get group summary, in group creation order
    pub fn group_summary(world: &World) -> Vec<GroupInfo> {
        world
            .groups()
            .map(|name| {
                let members = world.get_group(name).map(<[EntityId]>::len).unwrap_or(0);
                let alive = world
                    .group_members_alive(name)
                    .map(|ids| ids.len())
                    .unwrap_or(0);
                GroupInfo {
                    name: name.to_owned(),
                    members,
                    stale: members - alive,
                }
            })
            .collect()
    }

    /// Get system summary, in execution order
    pub fn system_summary(world: &World) -> Vec<SystemSummary> {
        world
            .systems()
            .map(|info| SystemSummary {
                name: info.name,
                stats_avg: world.profiler().get_stats(info.type_id).map(|s| s.avg),
            })
            .collect()
    }

    pub fn summary(world: &World) -> WorldSummary {
        WorldSummary {
            entities: world.entity_count(),
            detached: world.detached_count(),
            tick: world.tick(),
            delta: world.delta(),
            groups: Self::group_summary(world),
            systems: Self::system_summary(world),
        }
    }

    /// Print world summary to console
    pub fn print_summary(world: &World) {
        println!("{}", Self::summary(world));
    }

    /// Describe one entity: tag, state and component types
    pub fn describe_entity(world: &World, id: EntityId) -> Result<String> {
        let entity = world.entity(id)?;
        let components: Vec<&str> = entity
            .get_components()
            .iter()
            .map(|slot| slot.type_name())
            .collect();
        Ok(format!(
            "{id} tag={:?} state={:?} components=[{}]",
            entity.tag(),
            entity.state(),
            components.join(", ")
        ))
    }

    /// Print entity details
    pub fn print_entity(world: &World, id: EntityId) {
        match Self::describe_entity(world, id) {
            Ok(line) => println!("{line}"),
            Err(err) => println!("{id}: {err}"),
        }
    }
}

/// Group information for debugging
#[derive(Clone, Debug, PartialEq)]
pub struct GroupInfo {
    pub name: String,
    pub members: usize,
    /// Entries pointing at entities that are no longer managed
    pub stale: usize,
}

/// System information for debugging
#[derive(Clone, Debug)]
pub struct SystemSummary {
    pub name: &'static str,
    pub stats_avg: Option<Duration>,
}

/// Snapshot of a world's bookkeeping
#[derive(Clone, Debug)]
pub struct WorldSummary {
    pub entities: usize,
    pub detached: usize,
    pub tick: u64,
    pub delta: f64,
    pub groups: Vec<GroupInfo>,
    pub systems: Vec<SystemSummary>,
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== World Summary ===")?;
        writeln!(f, "Entities: {} ({} detached)", self.entities, self.detached)?;
        writeln!(f, "Tick: {} (delta {})", self.tick, self.delta)?;

        writeln!(f, "\n=== Groups ===")?;
        for group in &self.groups {
            writeln!(
                f,
                "{}: {} members, {} stale",
                group.name, group.members, group.stale
            )?;
        }

        writeln!(f, "\n=== Systems ===")?;
        for (position, system) in self.systems.iter().enumerate() {
            match system.stats_avg {
                Some(avg) => writeln!(f, "{position}: {} (avg {avg:?})", system.name)?,
                None => writeln!(f, "{position}: {}", system.name)?,
            }
        }
        Ok(())
    }
}

/// Tick time diagnostics
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    tick_times: VecDeque<f32>,
    max_samples: usize,
}

impl Diagnostics {
    /// Create new diagnostics tracker
    pub fn new() -> Self {
        Self {
            tick_times: VecDeque::new(),
            max_samples: 60,
        }
    }

    /// Record a tick time in milliseconds
    pub fn record_tick_time(&mut self, time_ms: f32) {
        self.tick_times.push_back(time_ms);
        if self.tick_times.len() > self.max_samples {
            self.tick_times.pop_front();
        }
    }

    /// Record the world's last tick, if profiling captured one
    pub fn record_world(&mut self, world: &World) {
        if let Some(profile) = world.last_tick_profile() {
            self.record_tick_time(profile.total_time.as_secs_f32() * 1000.0);
        }
    }

    pub fn sample_count(&self) -> usize {
        self.tick_times.len()
    }

    /// Get average ticks per second
    pub fn tps(&self) -> f32 {
        let avg_ms = self.avg_tick_time();
        if avg_ms > 0.0 {
            1000.0 / avg_ms
        } else {
            0.0
        }
    }

    /// Get average tick time in milliseconds
    pub fn avg_tick_time(&self) -> f32 {
        if self.tick_times.is_empty() {
            return 0.0;
        }
        self.tick_times.iter().sum::<f32>() / self.tick_times.len() as f32
    }

    pub fn min_tick_time(&self) -> f32 {
        self.tick_times
            .iter()
            .copied()
            .fold(f32::INFINITY, f32::min)
    }

    pub fn max_tick_time(&self) -> f32 {
        self.tick_times
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Print diagnostics
    pub fn print(&self) {
        println!("=== Diagnostics ===");
        println!("TPS: {:.1}", self.tps());
        println!("Avg Tick Time: {:.2}ms", self.avg_tick_time());
        println!("Min Tick Time: {:.2}ms", self.min_tick_time());
        println!("Max Tick Time: {:.2}ms", self.max_tick_time());
    }
}
