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

//! rui - a small Entity Component System
//!
//! A [`World`] owns tagged entities, named groups and an ordered list of
//! systems. Components are matched by concrete type; systems run once per
//! [`World::process`] call with the world's delta.
//!
//! ```
//! use rui::prelude::*;
//!
//! struct Counter {
//!     count: f64,
//! }
//!
//! struct CountSystem;
//!
//! impl System for CountSystem {
//!     fn process(&mut self, world: &mut World, delta: f64) -> rui::Result<()> {
//!         for entity in world.entities_with_mut::<(Counter,)>() {
//!             if let Some(counter) = entity.get_component_mut::<Counter>() {
//!                 counter.count += delta;
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut world = World::new();
//! let entity = world.spawn("", (Counter { count: 0.0 },)).unwrap();
//! world.add_system(CountSystem).unwrap();
//! world.process().unwrap();
//! assert_eq!(world.get_component::<Counter>(entity).unwrap().count, 1.0);
//! ```

pub mod component;
pub mod config;
pub mod debug;
pub mod entity;
pub mod error;
pub mod group;
pub mod prelude;
pub mod profiling;
pub mod system;
pub mod time;
pub mod utils;
pub mod world;


pub use component::*;
pub use config::*;
pub use entity::*;
pub use error::*;
pub use group::*;
pub use system::*;
pub use world::*;
