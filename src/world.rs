// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! World: central entity, group and system registry

use ahash::{AHashMap, AHashSet};
use std::any::TypeId;
use std::time::{Duration, Instant};

#[cfg(feature = "profiling")]
use tracing::info_span;
use tracing::{debug, trace, warn};

use crate::component::{matches_signature, Bundle, Component, ComponentSet};
use crate::config::WorldConfig;
use crate::entity::{Entity, EntityId, EntityState};
use crate::error::{EcsError, Result};
use crate::group::{GroupPolicy, GroupRegistry};
use crate::profiling::{SystemProfiler, SystemTiming, TickProfile};
use crate::system::{System, SystemInfo, SystemSlot};
use crate::time::{FixedTime, Time};

/// Central ECS world
///
/// The world owns every entity record, the named groups, the ordered system
/// list and the delta broadcast to systems on each tick. Entities are
/// addressed through [`EntityId`] handles.
pub struct World {
    /// Managed entities in insertion order
    entities: Vec<Entity>,

    /// Position of each managed entity in `entities`
    entity_index: AHashMap<EntityId, usize>,

    /// Entities created but not yet added
    detached: AHashMap<EntityId, Entity>,

    /// Ids of killed entities, so stale handles report `DeadEntity`.
    /// Grows by one id per kill until `forget_dead` is called.
    dead: AHashSet<EntityId>,

    /// Tag index over managed entities (non-empty tags only)
    tags: AHashMap<String, EntityId>,

    groups: GroupRegistry,

    /// Systems in registration order, unique by concrete type
    systems: Vec<SystemSlot>,

    /// Value broadcast to every system on `process`
    delta: f64,

    /// Number of `process` calls so far
    tick: u64,

    /// Serial handed to the next registered system
    next_system_serial: u64,

    config: WorldConfig,
    profiler: SystemProfiler,
    last_profile: Option<TickProfile>,
}

impl World {
    /// Create a new, empty world with the default configuration.
    pub fn new() -> Self {
        Self::build(WorldConfig::default())
    }

    /// Create a world from a configuration.
    ///
    /// Fails with `ConfigError` if the configuration does not validate.
    pub fn with_config(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: WorldConfig) -> Self {
        Self {
            entities: Vec::new(),
            entity_index: AHashMap::new(),
            detached: AHashMap::new(),
            dead: AHashSet::new(),
            tags: AHashMap::new(),
            groups: GroupRegistry::new(),
            systems: Vec::new(),
            delta: config.delta,
            tick: 0,
            next_system_serial: 0,
            config,
            profiler: SystemProfiler::new(),
            last_profile: None,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    // ========== Entities ==========

    /// Create a detached entity.
    ///
    /// The entity can take components right away but stays invisible to
    /// queries, tags and groups until [`World::add_entity`] is called.
    pub fn create_entity(&mut self, tag: impl Into<String>) -> EntityId {
        let entity = Entity::new(tag);
        let id = entity.id();
        trace!(entity = %id, tag = entity.tag(), "entity created");
        self.detached.insert(id, entity);
        id
    }

    /// Add a detached entity to the world.
    ///
    /// Fails with `DuplicateEntity` if already managed and with
    /// `NonUniqueTag` if another managed entity holds the same tag. A failed
    /// add leaves the entity detached.
    pub fn add_entity(&mut self, id: EntityId) -> Result<()> {
        if self.entity_index.contains_key(&id) {
            return Err(EcsError::DuplicateEntity(id));
        }
        let tag = match self.detached.get(&id) {
            Some(entity) => entity.tag(),
            None => return Err(self.missing(id)),
        };
        if !tag.is_empty() && self.tags.contains_key(tag) {
            return Err(EcsError::NonUniqueTag(tag.to_owned()));
        }

        let mut entity = self.detached.remove(&id).ok_or(EcsError::EntityNotFound(id))?;
        entity.set_state(EntityState::Managed);
        if entity.has_tag() {
            self.tags.insert(entity.tag().to_owned(), id);
        }
        debug!(
            entity = %id,
            tag = entity.tag(),
            components = entity.component_count(),
            "entity added"
        );
        self.entity_index.insert(id, self.entities.len());
        self.entities.push(entity);
        Ok(())
    }

    /// Add entities in order, stopping at the first failure.
    ///
    /// Entities added before the failure stay added.
    pub fn add_entities<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = EntityId>,
    {
        for id in ids {
            self.add_entity(id)?;
        }
        Ok(())
    }

    /// Create an entity, attach a bundle of components and add it.
    ///
    /// On failure nothing is left behind in the world.
    pub fn spawn<B: Bundle>(&mut self, tag: impl Into<String>, bundle: B) -> Result<EntityId> {
        let id = self.create_entity(tag);
        if let Some(entity) = self.detached.get_mut(&id) {
            bundle.insert_into(entity);
        }
        if let Err(err) = self.add_entity(id) {
            self.detached.remove(&id);
            return Err(err);
        }
        Ok(id)
    }

    /// Kill a managed entity.
    ///
    /// Fails with `UnmanagedEntity` if the entity was never added.
    pub fn remove_entity(&mut self, id: EntityId) -> Result<()> {
        self.managed_position(id)?;
        self.kill_entity(id)
    }

    /// Kill an entity, managed or detached.
    ///
    /// The record, tag and components are dropped. Every later call with
    /// this handle fails with `DeadEntity`.
    pub fn kill_entity(&mut self, id: EntityId) -> Result<()> {
        let entity = match self.take_managed(id) {
            Some(entity) => entity,
            None => self.detached.remove(&id).ok_or_else(|| self.missing(id))?,
        };
        debug!(entity = %id, tag = entity.tag(), "entity killed");
        self.dead.insert(id);
        Ok(())
    }

    /// Get an entity record
    pub fn entity(&self, id: EntityId) -> Result<&Entity> {
        if let Some(&pos) = self.entity_index.get(&id) {
            return Ok(&self.entities[pos]);
        }
        self.detached.get(&id).ok_or_else(|| self.missing(id))
    }

    /// Get an entity record mutably
    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        let missing = self.missing(id);
        if let Some(&pos) = self.entity_index.get(&id) {
            return Ok(&mut self.entities[pos]);
        }
        self.detached.get_mut(&id).ok_or(missing)
    }

    /// Check if an entity handle refers to a live (managed or detached) entity
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entity_index.contains_key(&id) || self.detached.contains_key(&id)
    }

    pub fn is_dead(&self, id: EntityId) -> bool {
        self.dead.contains(&id)
    }

    /// Check if an entity has been added to this world
    pub fn is_managed(&self, id: EntityId) -> bool {
        self.entity_index.contains_key(&id)
    }

    /// Add a component to an entity, replacing one of the same type
    pub fn add_component<T: Component>(&mut self, id: EntityId, component: T) -> Result<()> {
        self.entity_mut(id)?.add_component(component);
        Ok(())
    }

    /// Get immutable reference to a component on an entity
    pub fn get_component<T: Component>(&self, id: EntityId) -> Result<&T> {
        self.entity(id)?
            .get_component::<T>()
            .ok_or(EcsError::ComponentNotFound(std::any::type_name::<T>()))
    }

    /// Get mutable reference to a component on an entity
    pub fn get_component_mut<T: Component>(&mut self, id: EntityId) -> Result<&mut T> {
        self.entity_mut(id)?
            .get_component_mut::<T>()
            .ok_or(EcsError::ComponentNotFound(std::any::type_name::<T>()))
    }

    /// Remove a component from an entity and return it
    pub fn remove_component<T: Component>(&mut self, id: EntityId) -> Result<T> {
        self.entity_mut(id)?
            .remove_component::<T>()
            .ok_or(EcsError::ComponentNotFound(std::any::type_name::<T>()))
    }

    pub fn get_tag(&self, id: EntityId) -> Result<&str> {
        Ok(self.entity(id)?.tag())
    }

    /// Change an entity's tag.
    ///
    /// For managed entities the tag must not be held by another managed
    /// entity. Re-setting the current tag succeeds without changes.
    pub fn set_tag(&mut self, id: EntityId, tag: impl Into<String>) -> Result<()> {
        let tag = tag.into();
        let Some(&pos) = self.entity_index.get(&id) else {
            self.entity_mut(id)?.set_tag(tag);
            return Ok(());
        };

        if self.entities[pos].tag() == tag {
            return Ok(());
        }
        if !tag.is_empty() && self.tags.contains_key(&tag) {
            return Err(EcsError::NonUniqueTag(tag));
        }

        if !tag.is_empty() {
            self.tags.insert(tag.clone(), id);
        }
        let old = self.entities[pos].set_tag(tag);
        if !old.is_empty() {
            self.tags.remove(&old);
        }
        debug!(entity = %id, old = %old, new = self.entities[pos].tag(), "entity retagged");
        Ok(())
    }

    /// Find a managed entity by tag.
    ///
    /// An empty tag matches the first untagged entity.
    pub fn get_entity_by_tag(&self, tag: &str) -> Option<EntityId> {
        if tag.is_empty() {
            return self
                .entities
                .iter()
                .find(|entity| !entity.has_tag())
                .map(Entity::id);
        }
        self.tags.get(tag).copied()
    }

    /// All managed entities, in insertion order
    pub fn get_entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(Entity::id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn detached_count(&self) -> usize {
        self.detached.len()
    }

    /// Number of killed ids the world still remembers
    pub fn dead_count(&self) -> usize {
        self.dead.len()
    }

    /// Drop the record of killed ids.
    ///
    /// Long-running worlds that spawn and kill continuously call this to
    /// bound memory. Afterwards a stale handle reports `EntityNotFound`
    /// instead of `DeadEntity`; ids are never reused, so it still cannot
    /// reach a newer entity.
    pub fn forget_dead(&mut self) {
        let forgotten = self.dead.len();
        self.dead.clear();
        debug!(forgotten, "dead entity ids forgotten");
    }

    // ========== Queries ==========

    /// Managed entities whose components match the set `Q`, in insertion order.
    ///
    /// With the default [`MatchMode::Superset`](crate::config::MatchMode) an
    /// entity matches when it carries at least every type in `Q`.
    pub fn get_entities_by_components<Q: ComponentSet>(&self) -> Vec<EntityId> {
        self.get_entities_by_type_ids(&Q::type_ids())
    }

    /// Like [`World::get_entities_by_components`] with a runtime type list
    pub fn get_entities_by_type_ids(&self, type_ids: &[TypeId]) -> Vec<EntityId> {
        let mode = self.config.match_mode;
        self.entities
            .iter()
            .filter(|entity| matches_signature(&entity.signature(), type_ids, mode))
            .map(Entity::id)
            .collect()
    }

    /// Iterate matching entity records
    pub fn entities_with<Q: ComponentSet>(&self) -> impl Iterator<Item = &Entity> + '_ {
        let query = Q::type_ids();
        let mode = self.config.match_mode;
        self.entities
            .iter()
            .filter(move |entity| matches_signature(&entity.signature(), &query, mode))
    }

    /// Iterate matching entity records mutably
    pub fn entities_with_mut<Q: ComponentSet>(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        let query = Q::type_ids();
        let mode = self.config.match_mode;
        self.entities
            .iter_mut()
            .filter(move |entity| matches_signature(&entity.signature(), &query, mode))
    }

    // ========== Groups ==========

    /// Append a managed entity to a group, creating the group if needed.
    ///
    /// Registering the same entity twice adds a second entry.
    pub fn register_entity_to_group(&mut self, id: EntityId, group: &str) -> Result<()> {
        self.managed_position(id)?;
        self.groups.register(group, id);
        debug!(entity = %id, group, "entity grouped");
        Ok(())
    }

    /// Members of a group, in registration order.
    ///
    /// Under [`GroupPolicy::Retain`] this can include killed entities.
    pub fn get_group(&self, group: &str) -> Result<&[EntityId]> {
        self.groups
            .get(group)
            .ok_or_else(|| EcsError::GroupNotFound(group.to_owned()))
    }

    /// Members of a group that are still managed
    pub fn group_members_alive(&self, group: &str) -> Result<Vec<EntityId>> {
        Ok(self
            .get_group(group)?
            .iter()
            .copied()
            .filter(|id| self.is_managed(*id))
            .collect())
    }

    /// Group names in creation order
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.names()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    // ========== Systems ==========

    /// Register a system.
    ///
    /// Fails with `DuplicateSystem` if a system of the same type is
    /// already registered.
    pub fn add_system<S: System>(&mut self, system: S) -> Result<()> {
        if self.systems.iter().any(SystemSlot::is::<S>) {
            return Err(EcsError::DuplicateSystem(std::any::type_name::<S>()));
        }
        let slot = SystemSlot::new(system, self.next_system_serial);
        self.next_system_serial += 1;
        debug!(system = slot.info.name, position = self.systems.len(), "system added");
        self.systems.push(slot);
        Ok(())
    }

    /// Unregister a system and hand it back.
    ///
    /// Returns `Ok(None)` when a system removes itself from inside its own
    /// `process`; the instance is dropped once it returns.
    pub fn remove_system<S: System>(&mut self) -> Result<Option<S>> {
        let pos = self
            .systems
            .iter()
            .position(SystemSlot::is::<S>)
            .ok_or(EcsError::UnmanagedSystem(std::any::type_name::<S>()))?;
        let slot = self.systems.remove(pos);
        debug!(system = slot.info.name, "system removed");
        self.profiler.forget(slot.info.type_id);
        Ok(slot.into_inner())
    }

    pub fn has_system<S: System>(&self) -> bool {
        self.systems.iter().any(SystemSlot::is::<S>)
    }

    /// Borrow a registered system (not while it is running)
    pub fn system<S: System>(&self) -> Option<&S> {
        self.systems
            .iter()
            .find(|slot| slot.is::<S>())
            .and_then(|slot| slot.downcast_ref::<S>())
    }

    pub fn system_mut<S: System>(&mut self) -> Option<&mut S> {
        self.systems
            .iter_mut()
            .find(|slot| slot.is::<S>())
            .and_then(|slot| slot.downcast_mut::<S>())
    }

    /// Registered systems in execution order
    pub fn systems(&self) -> impl Iterator<Item = SystemInfo> + '_ {
        self.systems.iter().map(|slot| slot.info)
    }

    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Run one registered system outside the tick with an explicit delta.
    pub fn run_system<S: System>(&mut self, delta: f64) -> Result<()> {
        let name = std::any::type_name::<S>();
        let serial = self
            .systems
            .iter()
            .find(|slot| slot.is::<S>())
            .map(|slot| slot.serial)
            .ok_or(EcsError::UnmanagedSystem(name))?;
        match self.run_slot(serial, delta) {
            Some((result, _)) => result,
            None => Err(EcsError::UnmanagedSystem(name)),
        }
    }

    // ========== Tick ==========

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    /// Number of `process` calls so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Run every system once, in registration order, with the current delta.
    ///
    /// The first failing system aborts the rest of the tick; effects of the
    /// systems that already ran are kept. Systems added during the tick run
    /// from the next tick on; systems removed during the tick are skipped.
    pub fn process(&mut self) -> Result<()> {
        self.tick += 1;
        let tick = self.tick;
        let delta = self.delta;
        let order: Vec<(SystemInfo, u64)> = self
            .systems
            .iter()
            .map(|slot| (slot.info, slot.serial))
            .collect();

        #[cfg(feature = "profiling")]
        let span = info_span!("world.process", tick, delta, systems = order.len());
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        let tick_start = Instant::now();
        let mut system_timings = Vec::with_capacity(order.len());
        let mut outcome = Ok(());

        for (info, serial) in order {
            let Some((result, duration)) = self.run_slot(serial, delta) else {
                continue;
            };
            system_timings.push(SystemTiming {
                name: info.name,
                duration,
            });
            if let Err(err) = result {
                warn!(tick, system = info.name, error = %err, "system failed, tick aborted");
                outcome = Err(err);
                break;
            }
        }

        if self.config.profile_systems {
            self.last_profile = Some(TickProfile {
                tick,
                total_time: tick_start.elapsed(),
                system_timings,
                completed: outcome.is_ok(),
            });
        }
        outcome
    }

    /// Measure elapsed wall time, use it as the delta and process one tick
    pub fn advance(&mut self, time: &mut Time) -> Result<()> {
        time.update();
        self.delta = time.delta_seconds();
        self.process()
    }

    /// Feed a frame's duration into `fixed` and process one tick per whole
    /// step, each with the fixed timestep as delta.
    ///
    /// Returns the number of ticks processed.
    pub fn advance_fixed(&mut self, fixed: &mut FixedTime, frame: Duration) -> Result<usize> {
        let steps = fixed.tick(frame);
        self.delta = fixed.timestep_seconds();
        for _ in 0..steps {
            self.process()?;
        }
        Ok(steps)
    }

    /// Timings of the most recent tick
    pub fn last_tick_profile(&self) -> Option<&TickProfile> {
        self.last_profile.as_ref()
    }

    pub fn profiler(&self) -> &SystemProfiler {
        &self.profiler
    }

    /// Kill every entity and drop all groups. Systems stay registered.
    ///
    /// Every killed id joins the dead set; see [`World::forget_dead`].
    pub fn clear(&mut self) {
        let killed = self.entities.len() + self.detached.len();
        self.dead.extend(self.entities.drain(..).map(|entity| entity.id()));
        self.dead.extend(self.detached.drain().map(|(id, _)| id));
        self.entity_index.clear();
        self.tags.clear();
        self.groups.clear();
        debug!(killed, "world cleared");
    }

    // ========== Internals ==========

    /// Error for a handle that is neither managed nor detached
    fn missing(&self, id: EntityId) -> EcsError {
        if self.dead.contains(&id) {
            EcsError::DeadEntity(id)
        } else {
            EcsError::EntityNotFound(id)
        }
    }

    fn managed_position(&self, id: EntityId) -> Result<usize> {
        match self.entity_index.get(&id) {
            Some(&pos) => Ok(pos),
            None if self.dead.contains(&id) => Err(EcsError::DeadEntity(id)),
            None => Err(EcsError::UnmanagedEntity(id)),
        }
    }

    /// Remove a managed entity from the table, tag index and (by policy) groups
    fn take_managed(&mut self, id: EntityId) -> Option<Entity> {
        let pos = self.entity_index.remove(&id)?;
        let entity = self.entities.remove(pos);
        for (offset, moved) in self.entities[pos..].iter().enumerate() {
            self.entity_index.insert(moved.id(), pos + offset);
        }
        if entity.has_tag() {
            self.tags.remove(entity.tag());
        }
        if self.config.group_policy == GroupPolicy::PruneOnKill {
            let pruned = self.groups.prune(id);
            trace!(entity = %id, pruned, "group entries pruned");
        }
        Some(entity)
    }

    /// Run the system registration identified by `serial`.
    ///
    /// Returns `None` if that registration is gone (removed, or replaced
    /// by a fresh instance of the same type) or it is already running
    /// further up the stack.
    fn run_slot(&mut self, serial: u64, delta: f64) -> Option<(Result<()>, Duration)> {
        let slot = self.systems.iter_mut().find(|slot| slot.serial == serial)?;
        let info = slot.info;
        let mut system = slot.system.take()?;

        #[cfg(feature = "profiling")]
        let span = info_span!("system.process", system = info.name, delta);
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        trace!(system = info.name, delta, "running system");
        let start = Instant::now();
        let result = system.as_system_mut().process(self, delta);
        let duration = start.elapsed();

        // The system may have been removed (or replaced) while it ran
        if let Some(slot) = self.systems.iter_mut().find(|slot| slot.serial == serial) {
            slot.system = Some(system);
            if self.config.profile_systems {
                self.profiler.record_execution(info.type_id, duration);
            }
        }
        Some((result, duration))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(dead_code)]
    use super::*;
    use crate::config::MatchMode;

    #[derive(Debug, PartialEq)]
    struct Counter {
        count: f64,
    }

    #[derive(Debug, PartialEq)]
    struct Empty;

    #[test]
    fn test_create_is_detached_until_added() -> Result<()> {
        let mut world = World::new();
        let entity = world.create_entity("");
        assert!(world.is_alive(entity));
        assert!(!world.is_managed(entity));
        assert_eq!(world.entity_count(), 0);

        world.add_entity(entity)?;
        assert!(world.is_managed(entity));
        assert_eq!(world.entity(entity)?.state(), EntityState::Managed);
        assert_eq!(world.detached_count(), 0);
        Ok(())
    }

    #[test]
    fn test_entity_index_stays_consistent_after_removal() -> Result<()> {
        let mut world = World::new();
        let ids: Vec<_> = (0..5)
            .map(|i| world.spawn(format!("e{i}"), (Counter { count: i as f64 },)))
            .collect::<Result<_>>()?;

        world.remove_entity(ids[1])?;
        world.remove_entity(ids[3])?;

        for &id in &[ids[0], ids[2], ids[4]] {
            assert_eq!(world.entity(id)?.id(), id);
        }
        assert_eq!(world.entity_ids().collect::<Vec<_>>(), vec![ids[0], ids[2], ids[4]]);
        Ok(())
    }

    #[test]
    fn test_spawn_failure_leaves_nothing_behind() -> Result<()> {
        let mut world = World::new();
        world.spawn("TAG", (Empty,))?;
        let err = world.spawn("TAG", (Counter { count: 0.0 },)).unwrap_err();
        assert_eq!(err, EcsError::NonUniqueTag("TAG".into()));
        assert_eq!(world.detached_count(), 0);
        assert_eq!(world.entity_count(), 1);
        Ok(())
    }

    #[test]
    fn test_unknown_handle_is_not_found() {
        let mut other = World::new();
        let foreign = other.create_entity("");
        let world = World::new();
        assert_eq!(
            world.entity(foreign).unwrap_err(),
            EcsError::EntityNotFound(foreign)
        );
    }

    #[test]
    fn test_retag_releases_old_tag() -> Result<()> {
        let mut world = World::new();
        let entity = world.spawn("OLD", (Empty,))?;
        world.set_tag(entity, "NEW")?;
        assert_eq!(world.get_entity_by_tag("NEW"), Some(entity));
        assert_eq!(world.get_entity_by_tag("OLD"), None);

        let other = world.spawn("OLD", (Empty,))?;
        assert_eq!(world.get_entity_by_tag("OLD"), Some(other));
        Ok(())
    }

    #[test]
    fn test_empty_tag_lookup_finds_first_untagged() -> Result<()> {
        let mut world = World::new();
        world.spawn("TAGGED", (Empty,))?;
        let untagged = world.spawn("", (Empty,))?;
        world.spawn("", (Empty,))?;
        assert_eq!(world.get_entity_by_tag(""), Some(untagged));
        Ok(())
    }

    #[test]
    fn test_exact_match_mode() -> Result<()> {
        let mut world = World::with_config(WorldConfig {
            match_mode: MatchMode::Exact,
            ..WorldConfig::default()
        })?;
        let both = world.spawn("", (Counter { count: 0.0 }, Empty))?;
        let counter_only = world.spawn("", (Counter { count: 0.0 },))?;

        assert_eq!(world.get_entities_by_components::<(Counter,)>(), vec![counter_only]);
        assert_eq!(world.get_entities_by_components::<(Empty, Counter)>(), vec![both]);
        Ok(())
    }

    #[test]
    fn test_clear_kills_everything() -> Result<()> {
        let mut world = World::new();
        let managed = world.spawn("A", (Empty,))?;
        let detached = world.create_entity("B");
        world.register_entity_to_group(managed, "G")?;

        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.group_count(), 0);
        assert!(world.is_dead(managed));
        assert!(world.is_dead(detached));
        assert_eq!(world.get_entity_by_tag("A"), None);
        Ok(())
    }

    #[test]
    fn test_forget_dead_bounds_killed_ids() -> Result<()> {
        let mut world = World::new();
        for _ in 0..10 {
            let id = world.spawn("", (Empty,))?;
            world.kill_entity(id)?;
        }
        let last = world.spawn("", (Empty,))?;
        world.clear();
        assert_eq!(world.dead_count(), 11);
        assert!(matches!(world.entity(last), Err(EcsError::DeadEntity(_))));

        world.forget_dead();
        assert_eq!(world.dead_count(), 0);
        assert!(matches!(world.entity(last), Err(EcsError::EntityNotFound(_))));
        assert!(!world.is_alive(last));
        Ok(())
    }

    #[test]
    fn test_delta_from_config() -> Result<()> {
        let world = World::with_config(WorldConfig {
            delta: 0.5,
            ..WorldConfig::default()
        })?;
        assert_eq!(world.delta(), 0.5);
        assert_eq!(world.tick(), 0);
        Ok(())
    }

    #[test]
    fn test_non_finite_delta_rejected() {
        for delta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = World::with_config(WorldConfig {
                delta,
                ..WorldConfig::default()
            });
            assert!(matches!(result, Err(EcsError::ConfigError(_))));
        }
    }
}
