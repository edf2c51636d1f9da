//! System trait and registry slots

use std::any::{Any, TypeId};

use crate::error::Result;
use crate::World;

/// System trait
///
/// A system is identified by its concrete type: a world holds at most one
/// instance of each system type. The world passed to `process` is the one
/// the system is registered with.
pub trait System: Send + Sync + 'static {
    /// Get system name
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Run system logic for one tick
    fn process(&mut self, world: &mut World, delta: f64) -> Result<()>;
}

/// Summary of a registered system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInfo {
    pub name: &'static str,
    pub type_id: TypeId,
}

/// Object-safe view of a concrete system that can also be downcast
pub(crate) trait SystemObject: Send + Sync {
    fn as_system_mut(&mut self) -> &mut dyn System;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<S: System> SystemObject for S {
    fn as_system_mut(&mut self) -> &mut dyn System {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Registry entry for one system type.
///
/// `system` is `None` while the system is running, so the world can be
/// lent to it mutably. `serial` is unique per registration: a system
/// removed and registered again gets a new one.
pub(crate) struct SystemSlot {
    pub(crate) info: SystemInfo,
    pub(crate) serial: u64,
    pub(crate) system: Option<Box<dyn SystemObject>>,
}

impl SystemSlot {
    pub(crate) fn new<S: System>(system: S, serial: u64) -> Self {
        Self {
            info: SystemInfo {
                name: system.name(),
                type_id: TypeId::of::<S>(),
            },
            serial,
            system: Some(Box::new(system)),
        }
    }

    pub(crate) fn is<S: System>(&self) -> bool {
        self.info.type_id == TypeId::of::<S>()
    }

    pub(crate) fn downcast_ref<S: System>(&self) -> Option<&S> {
        self.system.as_ref()?.as_any().downcast_ref()
    }

    pub(crate) fn downcast_mut<S: System>(&mut self) -> Option<&mut S> {
        self.system.as_mut()?.as_any_mut().downcast_mut()
    }

    pub(crate) fn into_inner<S: System>(self) -> Option<S> {
        self.system?.into_any().downcast().ok().map(|boxed| *boxed)
    }
}
