//! Named entity groups
//!
//! A group is an ordered list of entity handles. Registering the same entity
//! twice keeps both entries. Groups are created on first registration.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// What happens to group entries when an entity is killed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupPolicy {
    /// Keep stale handles; readers filter with `World::group_members_alive`
    #[default]
    Retain,
    /// Drop every entry for the entity when it is killed
    PruneOnKill,
}

/// Group name to member list
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: AHashMap<String, Vec<EntityId>>,
    /// Names in creation order, for stable listings
    order: Vec<String>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entity` to `group`, creating the group if needed
    pub fn register(&mut self, group: &str, entity: EntityId) {
        match self.groups.get_mut(group) {
            Some(members) => members.push(entity),
            None => {
                self.groups.insert(group.to_owned(), vec![entity]);
                self.order.push(group.to_owned());
            }
        }
    }

    pub fn get(&self, group: &str) -> Option<&[EntityId]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Remove every entry for `entity`; empty groups are kept
    ///
    /// Returns the number of entries removed.
    pub fn prune(&mut self, entity: EntityId) -> usize {
        let mut removed = 0;
        for members in self.groups.values_mut() {
            let before = members.len();
            members.retain(|member| *member != entity);
            removed += before - members.len();
        }
        removed
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_creates_group() {
        let mut groups = GroupRegistry::new();
        let a = EntityId::from_raw(1);
        assert!(groups.get("GROUP").is_none());

        groups.register("GROUP", a);
        assert_eq!(groups.get("GROUP"), Some(&[a][..]));
        assert!(groups.contains("GROUP"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut groups = GroupRegistry::new();
        let a = EntityId::from_raw(1);
        groups.register("GROUP", a);
        groups.register("GROUP", a);
        assert_eq!(groups.get("GROUP").map(<[EntityId]>::len), Some(2));
    }

    #[test]
    fn test_prune_removes_all_entries() {
        let mut groups = GroupRegistry::new();
        let a = EntityId::from_raw(1);
        let b = EntityId::from_raw(2);
        groups.register("X", a);
        groups.register("X", b);
        groups.register("X", a);
        groups.register("Y", a);

        assert_eq!(groups.prune(a), 3);
        assert_eq!(groups.get("X"), Some(&[b][..]));
        assert_eq!(groups.get("Y"), Some(&[][..]));
    }

    #[test]
    fn test_names_in_creation_order() {
        let mut groups = GroupRegistry::new();
        let a = EntityId::from_raw(1);
        groups.register("zeta", a);
        groups.register("alpha", a);
        groups.register("zeta", a);
        assert_eq!(groups.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(groups.len(), 2);
    }
}
