//! Loaded models and their animation players, keyed by entity id.
//!
//! Models are spawned into a `hecs::World` with an [`Owner`], a [`Transform`] and,
//! when they have clips, a [`Mixer`]. Companion models carry the same owner id as
//! the entity they stand next to, so they animate whenever their entity does.

use std::collections::HashMap;

use crate::animation::{AnimationPlayer, ClipPlayer, Mixer};
use crate::entity::EntityId;
use crate::model::{ModelRole, ModelSpec, Owner, Transform};

/// Owns every loaded model for the lifetime of the program.
pub struct AssetRegistry {
    world: hecs::World,
    primaries: HashMap<EntityId, hecs::Entity>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            world: hecs::World::new(),
            primaries: HashMap::new(),
        }
    }

    /// Spawn the model for `id`, plus its companion if given.
    ///
    /// Returns the primary model. Inserting an id twice replaces the lookup entry;
    /// the earlier models stay in the world and keep animating with the entity.
    pub fn insert(
        &mut self,
        id: EntityId,
        model: &ModelSpec,
        companion: Option<&ModelSpec>,
    ) -> hecs::Entity {
        let primary = self.spawn(id.clone(), ModelRole::Primary, model);
        if let Some(companion) = companion {
            self.spawn(id.clone(), ModelRole::Companion, companion);
        }
        log::debug!(
            "Registered model '{}' for '{}'{}",
            model.path,
            id,
            if companion.is_some() { " with companion" } else { "" }
        );
        self.primaries.insert(id, primary);
        primary
    }

    fn spawn(&mut self, id: EntityId, role: ModelRole, spec: &ModelSpec) -> hecs::Entity {
        let mut builder = hecs::EntityBuilder::new();
        builder.add(Owner { id, role }).add(spec.transform());
        match spec.idle_clip {
            Some(seconds) if seconds.is_finite() && seconds > 0.0 => {
                builder.add(Mixer::new().with(ClipPlayer::looping("idle", seconds)));
            }
            Some(seconds) => {
                log::warn!("Skipping idle clip of {}s on '{}'", seconds, spec.path);
            }
            None => {}
        }
        self.world.spawn(builder.build())
    }

    /// Bind another player to the primary model of `id`.
    ///
    /// Returns `false` if no model was loaded for `id`.
    pub fn attach_player(&mut self, id: &EntityId, player: impl AnimationPlayer) -> bool {
        let Some(&entity) = self.primaries.get(id) else {
            return false;
        };
        if let Ok(mixer) = self.world.query_one_mut::<&mut Mixer>(entity) {
            mixer.push(Box::new(player));
            return true;
        }
        self.world
            .insert_one(entity, Mixer::new().with(player))
            .is_ok()
    }

    /// The primary model for `id`, or `None` if it was never loaded.
    pub fn get_model(&self, id: &EntityId) -> Option<hecs::Entity> {
        self.primaries.get(id).copied()
    }

    pub fn transform(&self, id: &EntityId) -> Option<Transform> {
        let entity = self.get_model(id)?;
        self.world
            .get::<&Transform>(entity)
            .ok()
            .map(|transform| *transform)
    }

    pub fn transform_mut(&mut self, id: &EntityId) -> Option<&mut Transform> {
        let entity = self.get_model(id)?;
        self.world.query_one_mut::<&mut Transform>(entity).ok()
    }

    /// Number of animation players bound to `id`'s models, companions included.
    pub fn player_count(&self, id: &EntityId) -> usize {
        self.world
            .query::<(&Owner, &Mixer)>()
            .iter()
            .filter(|(_, (owner, _))| owner.id == *id)
            .map(|(_, (_, mixer))| mixer.len())
            .sum()
    }

    /// Number of spawned models, companions included.
    pub fn model_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Read-only access to the model world.
    pub fn world(&self) -> &hecs::World {
        &self.world
    }

    /// Advance animations by `delta` seconds.
    ///
    /// Players of the focused entity always advance. While a flight is in progress
    /// every other entity's players advance too, so both the entity being left and
    /// the one being approached look alive. Returns whether any player advanced.
    pub fn advance(&mut self, delta: f32, focused: &EntityId, transitioning: bool) -> bool {
        let mut advanced = false;
        for (_, (owner, mixer)) in self.world.query_mut::<(&Owner, &mut Mixer)>() {
            if transitioning || owner.id == *focused {
                advanced |= mixer.advance(delta);
            }
        }
        advanced
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
