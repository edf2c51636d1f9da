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

//! Entity identifiers and entity records.
//!
//! The world owns every [`Entity`] record; callers hold the copyable
//! [`EntityId`] handle and go through the world to reach the record.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::component::{Component, ComponentSignature, ComponentSlot};
use crate::utils::next_id;

/// Unique entity identifier.
///
/// Ids come from a process-wide counter and are never reused, so a handle
/// to a killed entity can never alias a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) fn fresh() -> Self {
        Self(next_id())
    }

    /// Rebuild a handle from its raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Where an entity record is in its lifecycle.
///
/// Killed entities have no record at all; the world remembers their ids
/// so later calls fail with `DeadEntity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityState {
    /// Created but not yet added to the world
    Detached,
    /// Added to the world: visible to queries, tags and groups
    Managed,
}

/// Entity record: identity, tag and components.
pub struct Entity {
    id: EntityId,
    tag: String,
    state: EntityState,
    components: Vec<ComponentSlot>,
}

impl Entity {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Self {
            id: EntityId::fresh(),
            tag: tag.into(),
            state: EntityState::Detached,
            components: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Entity tag, empty when untagged
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }

    pub fn state(&self) -> EntityState {
        self.state
    }

    pub fn is_managed(&self) -> bool {
        self.state == EntityState::Managed
    }

    pub(crate) fn set_tag(&mut self, tag: String) -> String {
        std::mem::replace(&mut self.tag, tag)
    }

    pub(crate) fn set_state(&mut self, state: EntityState) {
        self.state = state;
    }

    /// Add a component to the entity
    ///
    /// A component of the same concrete type is replaced in place, keeping
    /// its position; otherwise the component is appended.
    pub fn add_component<T: Component>(&mut self, component: T) {
        let slot = ComponentSlot::new(component);
        match self.components.iter_mut().find(|existing| **existing == slot) {
            Some(existing) => *existing = slot,
            None => self.components.push(slot),
        }
    }

    /// Get immutable reference to a component
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find(|slot| slot.is::<T>())
            .and_then(|slot| slot.downcast_ref())
    }

    /// Get mutable reference to a component
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find(|slot| slot.is::<T>())
            .and_then(|slot| slot.downcast_mut())
    }

    /// Check if entity has a specific component
    pub fn has_component<T: Component>(&self) -> bool {
        self.components.iter().any(|slot| slot.is::<T>())
    }

    /// Remove a component and return it
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        let index = self.components.iter().position(|slot| slot.is::<T>())?;
        self.components.remove(index).into_inner()
    }

    /// All components in insertion order.
    pub fn get_components(&self) -> &[ComponentSlot] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Type ids of the attached components, in insertion order
    pub fn signature(&self) -> ComponentSignature {
        self.components.iter().map(ComponentSlot::type_id).collect()
    }

    pub(crate) fn component_names(&self) -> SmallVec<[&'static str; 8]> {
        self.components.iter().map(ComponentSlot::type_name).collect()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("state", &self.state)
            .field("components", &self.component_names())
            .finish()
    }
}
