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

//! Error types

use std::fmt;

use crate::entity::EntityId;

/// ECS error type
#[derive(Debug, Clone, PartialEq)]
pub enum EcsError {
    /// Entity is already managed by this world
    DuplicateEntity(EntityId),

    /// A system of the same concrete type is already registered
    DuplicateSystem(&'static str),

    /// Entity exists but is not managed by the world (still detached)
    UnmanagedEntity(EntityId),

    /// System type is not registered
    UnmanagedSystem(&'static str),

    /// Tag is already held by another managed entity
    NonUniqueTag(String),

    /// Entity has been killed
    DeadEntity(EntityId),

    /// Entity handle was never issued by this world
    EntityNotFound(EntityId),

    /// Group was never registered
    GroupNotFound(String),

    /// Entity does not carry the requested component
    ComponentNotFound(&'static str),

    /// A system reported a failure from inside `process`
    SystemFailed {
        system: &'static str,
        reason: String,
    },

    /// World configuration could not be loaded
    ConfigError(String),
}

impl EcsError {
    /// Build a [`EcsError::SystemFailed`] for system type `S`.
    pub fn system_failed<S: ?Sized>(reason: impl Into<String>) -> Self {
        EcsError::SystemFailed {
            system: std::any::type_name::<S>(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::DuplicateEntity(id) => write!(f, "{id} already exists in world"),
            EcsError::DuplicateSystem(name) => write!(f, "System {name} already exists in world"),
            EcsError::UnmanagedEntity(id) => {
                write!(f, "{id} has not been added to world")
            }
            EcsError::UnmanagedSystem(name) => {
                write!(f, "System {name} has not been added to world")
            }
            EcsError::NonUniqueTag(tag) => {
                write!(f, "Tag {tag:?} is already held by an entity in world")
            }
            EcsError::DeadEntity(id) => write!(f, "{id} has been killed"),
            EcsError::EntityNotFound(id) => write!(f, "{id} was not created by this world"),
            EcsError::GroupNotFound(name) => write!(f, "Group {name:?} not found"),
            EcsError::ComponentNotFound(name) => write!(f, "Component {name} not found"),
            EcsError::SystemFailed { system, reason } => {
                write!(f, "System {system} failed: {reason}")
            }
            EcsError::ConfigError(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for EcsError {}

impl From<serde_json::Error> for EcsError {
    fn from(err: serde_json::Error) -> Self {
        EcsError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for EcsError {
    fn from(err: std::io::Error) -> Self {
        EcsError::ConfigError(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EcsError>;
