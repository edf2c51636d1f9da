//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use rui::prelude::*;
//! ```

pub use crate::component::{Bundle, Component, ComponentSet};
pub use crate::config::{MatchMode, WorldConfig};
pub use crate::debug::{Diagnostics, WorldInspector};
pub use crate::entity::{Entity, EntityId};
pub use crate::error::{EcsError, Result};
pub use crate::group::GroupPolicy;
pub use crate::system::System;
pub use crate::time::{FixedTime, Time};
pub use crate::world::World;
