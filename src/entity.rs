//! Navigable entities and the circular order the camera visits them in.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unique identifier for a navigable entity.
///
/// Entity IDs are strings such as `"ivern"`. They key the navigation order, the
/// camera framings and the models in the [`AssetRegistry`](crate::AssetRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub(crate) String);

impl EntityId {
    /// Create a new entity ID from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the entity ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Camera framing for an entity: where the camera sits and what it looks at
/// while that entity is focused.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Framing {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Framing {
    pub fn new(position: impl Into<Vec3>, look_at: impl Into<Vec3>) -> Self {
        Self {
            position: position.into(),
            look_at: look_at.into(),
        }
    }
}

/// A navigable point of interest. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    /// Display name, used for window titles and neighbor labels.
    pub name: String,
    pub framing: Framing,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, framing: Framing) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            framing,
        }
    }
}

/// The fixed, circular order in which entities are visited.
///
/// The last entity's next is the first, and the first entity's previous is the last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavOrder {
    ids: Vec<EntityId>,
}

impl NavOrder {
    /// Build an order from a list of ids.
    ///
    /// Returns `None` if the list is empty; uniqueness is checked by
    /// [`ShowcaseConfig::validate`](crate::ShowcaseConfig::validate).
    pub fn new(ids: impl IntoIterator<Item = impl Into<EntityId>>) -> Option<Self> {
        let ids: Vec<EntityId> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            None
        } else {
            Some(Self { ids })
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn first(&self) -> &EntityId {
        &self.ids[0]
    }

    pub fn index_of(&self, id: &EntityId) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// The id after `current`, wrapping around.
    ///
    /// An id outside the order steps to the first entry.
    pub fn next(&self, current: &EntityId) -> &EntityId {
        let len = self.ids.len();
        match self.index_of(current) {
            Some(index) => &self.ids[(index + 1) % len],
            None => &self.ids[0],
        }
    }

    /// The id before `current`, wrapping around.
    ///
    /// An id outside the order steps to the last entry.
    pub fn previous(&self, current: &EntityId) -> &EntityId {
        let len = self.ids.len();
        match self.index_of(current) {
            Some(index) => &self.ids[(index + len - 1) % len],
            None => &self.ids[len - 1],
        }
    }

    /// Both neighbors of `current` as `(previous, next)`.
    pub fn neighbors(&self, current: &EntityId) -> (&EntityId, &EntityId) {
        (self.previous(current), self.next(current))
    }
}
