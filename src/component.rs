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

//! Component, ComponentSet and Bundle traits
//!
//! Components are data attached to entities. A component is identified only
//! by its concrete type: two components compare equal when they have the same
//! type, whatever their field values. Component sets name a list of types for
//! queries; bundles carry values for spawning.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::{smallvec, SmallVec};

use crate::config::MatchMode;
use crate::entity::Entity;

/// Maximum number of components supported by ComponentSet implementations
pub const MAX_SET_COMPONENTS: usize = 8;

/// Ordered list of component type ids
pub type ComponentSignature = SmallVec<[TypeId; MAX_SET_COMPONENTS]>;

/// Marker trait for components
///
/// Components must be 'static (no borrowed data)
pub trait Component: 'static + Send + Sync {}

/// Automatically implement Component for all valid types
impl<T: 'static + Send + Sync> Component for T {}

/// A single type-tagged component value owned by an entity.
///
/// Equality and hashing only look at the type tag.
pub struct ComponentSlot {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl ComponentSlot {
    pub fn new<T: Component>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Component>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    pub(crate) fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut()
    }

    pub(crate) fn into_inner<T: Component>(self) -> Option<T> {
        self.value.downcast().ok().map(|boxed| *boxed)
    }
}

impl PartialEq for ComponentSlot {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentSlot {}

impl Hash for ComponentSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component {}", self.type_name)
    }
}

/// A static list of component types used to query entities
pub trait ComponentSet: 'static {
    /// Get type IDs of all components in the set
    fn type_ids() -> ComponentSignature;

    /// Get type names of all components in the set (for logging)
    fn type_names() -> SmallVec<[&'static str; MAX_SET_COMPONENTS]>;
}

/// Bundle of component values
///
/// Allows spawning entities with multiple components at once.
pub trait Bundle: ComponentSet + Send + Sync {
    /// Attach every component of the bundle to `entity`
    fn insert_into(self, entity: &mut Entity);
}

// Macro for tuple ComponentSet/Bundle implementations
macro_rules! impl_component_set {
    ($($T:ident),*) => {
        impl<$($T: Component),*> ComponentSet for ($($T,)*) {
            fn type_ids() -> ComponentSignature {
                smallvec![$(TypeId::of::<$T>()),*]
            }

            fn type_names() -> SmallVec<[&'static str; MAX_SET_COMPONENTS]> {
                smallvec![$(std::any::type_name::<$T>()),*]
            }
        }

        impl<$($T: Component),*> Bundle for ($($T,)*) {
            #[allow(non_snake_case)]
            fn insert_into(self, entity: &mut Entity) {
                let ($($T,)*) = self;
                $(entity.add_component($T);)*
            }
        }
    };
}

// Implement for tuples of 1-8 components
impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);

/// Check an entity's component types against a query signature.
///
/// `Superset` accepts entities carrying at least the queried types.
/// `Exact` requires the two type sets to be equal.
pub fn matches_signature(entity_types: &[TypeId], query: &[TypeId], mode: MatchMode) -> bool {
    let covers_query = query.iter().all(|ty| entity_types.contains(ty));
    match mode {
        MatchMode::Superset => covers_query,
        MatchMode::Exact => covers_query && entity_types.iter().all(|ty| query.contains(ty)),
    }
}
