//! Disjoint component forest for the Borůvka driver.
//!
//! Components live in an arena of slots addressed through a stable
//! [`ComponentId`]; a vertex → slot table answers membership in O(1). Merging
//! moves the members of the smaller component into the larger component's
//! slot and assigns the union a fresh id, so total relabelling across a run is
//! O(V log V). Retired ids are never reused.

use std::{collections::BTreeSet, fmt, mem};

use crate::error::MstError;

/// Stable identifier of a component. Ids are assigned in creation order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct Slot {
    id: ComponentId,
    members: Vec<usize>,
}

/// Partition of the vertex set into disjoint, non-empty components.
///
/// # Examples
/// ```
/// use boruvka_core::ComponentForest;
///
/// let mut forest = ComponentForest::singletons(3);
/// let a = forest.component_of(0).expect("vertex 0 exists");
/// let b = forest.component_of(2).expect("vertex 2 exists");
/// let merged = forest.merge(a, b)?;
/// assert!(forest.is_same_component(0, 2));
/// assert!(!forest.is_live(a));
/// let untouched = forest.component_of(1).expect("vertex 1 exists");
/// assert_eq!(forest.live_components(), vec![untouched, merged]);
/// # Ok::<(), boruvka_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComponentForest {
    owner: Vec<usize>,
    slots: Vec<Slot>,
    slot_of: Vec<Option<usize>>,
    live: BTreeSet<ComponentId>,
}

impl ComponentForest {
    /// Creates one component per vertex; vertex `v` starts in component `v`.
    #[must_use]
    pub fn singletons(vertex_count: usize) -> Self {
        Self {
            owner: (0..vertex_count).collect(),
            slots: (0..vertex_count)
                .map(|vertex| Slot {
                    id: ComponentId(vertex),
                    members: vec![vertex],
                })
                .collect(),
            slot_of: (0..vertex_count).map(Some).collect(),
            live: (0..vertex_count).map(ComponentId).collect(),
        }
    }

    /// Returns the number of vertices covered by the forest.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.owner.len()
    }

    /// Returns the number of live components.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` while `id` names a component that has not been merged
    /// away.
    #[must_use]
    pub fn is_live(&self, id: ComponentId) -> bool {
        self.live.contains(&id)
    }

    /// Returns a snapshot of the live components in ascending id order.
    #[must_use]
    pub fn live_components(&self) -> Vec<ComponentId> {
        self.live.iter().copied().collect()
    }

    /// Returns the live component containing `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<ComponentId> {
        let slot = *self.owner.get(vertex)?;
        self.slots.get(slot).map(|slot| slot.id)
    }

    /// Returns `true` iff both vertices exist and share a live component.
    #[must_use]
    pub fn is_same_component(&self, left: usize, right: usize) -> bool {
        match (self.component_of(left), self.component_of(right)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Returns the members of a live component in merge order.
    #[must_use]
    pub fn members(&self, id: ComponentId) -> Option<&[usize]> {
        let slot = self.slot_of.get(id.0).copied().flatten()?;
        self.slots.get(slot).map(|slot| slot.members.as_slice())
    }

    /// Merges two live components and returns the id of their union.
    ///
    /// Both inputs leave the live set and the union enters it under a fresh
    /// id.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] when `left == right` or when
    /// either id is not live. Both conditions are caller bugs; the forest is
    /// left untouched.
    pub fn merge(
        &mut self,
        left: ComponentId,
        right: ComponentId,
    ) -> Result<ComponentId, MstError> {
        if left == right {
            return Err(MstError::InvariantViolation {
                invariant: "merge requires two distinct components",
                component: left.0,
            });
        }
        let left_slot = self.live_slot(left)?;
        let right_slot = self.live_slot(right)?;

        let (keep, absorb) = if self.slots[left_slot].members.len()
            >= self.slots[right_slot].members.len()
        {
            (left_slot, right_slot)
        } else {
            (right_slot, left_slot)
        };

        let moved = mem::take(&mut self.slots[absorb].members);
        for &vertex in &moved {
            self.owner[vertex] = keep;
        }

        let id = ComponentId(self.slot_of.len());
        let kept = &mut self.slots[keep];
        kept.members.extend(moved);
        kept.id = id;

        self.slot_of[left.0] = None;
        self.slot_of[right.0] = None;
        self.slot_of.push(Some(keep));
        self.live.remove(&left);
        self.live.remove(&right);
        self.live.insert(id);
        Ok(id)
    }

    fn live_slot(&self, id: ComponentId) -> Result<usize, MstError> {
        self.slot_of
            .get(id.0)
            .copied()
            .flatten()
            .ok_or(MstError::InvariantViolation {
                invariant: "merge requires live components",
                component: id.0,
            })
    }

    /// Checks that every vertex belongs to exactly one live component.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] naming the first vertex found
    /// in zero or several live components.
    pub fn validate(&self) -> Result<(), MstError> {
        let mut seen = vec![0_usize; self.owner.len()];
        for id in &self.live {
            let members = self.members(*id).ok_or(MstError::InvariantViolation {
                invariant: "live component must own a slot",
                component: id.0,
            })?;
            if members.is_empty() {
                return Err(MstError::InvariantViolation {
                    invariant: "live component must be non-empty",
                    component: id.0,
                });
            }
            for &vertex in members {
                let count = seen.get_mut(vertex).ok_or(MstError::InvariantViolation {
                    invariant: "component member must be a known vertex",
                    component: vertex,
                })?;
                *count += 1;
            }
        }
        match seen.iter().position(|&count| count != 1) {
            Some(vertex) => Err(MstError::InvariantViolation {
                invariant: "vertex must belong to exactly one live component",
                component: vertex,
            }),
            None => Ok(()),
        }
    }

    /// Consumes the forest and returns each live component's members, sorted,
    /// with components ordered by their smallest vertex.
    #[must_use]
    pub fn into_components(mut self) -> Vec<Vec<usize>> {
        let live = mem::take(&mut self.live);
        let mut components: Vec<Vec<usize>> = live
            .into_iter()
            .filter_map(|id| {
                let slot = self.slot_of.get(id.0).copied().flatten()?;
                let mut members = mem::take(&mut self.slots.get_mut(slot)?.members);
                members.sort_unstable();
                Some(members)
            })
            .collect();
        components.sort_unstable_by_key(|members| members.first().copied());
        components
    }
}
