//! Camera navigation between entities.
//!
//! The [`Navigator`] is a two-state machine. While idle it accepts a navigation
//! request, starts a [`Flight`] towards the requested entity and immediately
//! reports that entity as focused. While a flight is in the air every request is
//! dropped; nothing is queued. [`Navigator::tick`] moves the camera along the arc
//! and, once it has landed exactly on the target framing, returns to idle and
//! fires the request's completion callback.

use std::collections::HashMap;

use crate::easing::Easing;
use crate::entity::{Entity, EntityId, Framing, NavOrder};
use crate::flight::Flight;
use crate::stage::{CameraPose, Stage};

/// One-shot callback fired after a flight lands.
pub type OnLand = Box<dyn FnOnce()>;

/// Default flight duration in seconds.
pub const DEFAULT_FLIGHT_DURATION: f32 = 1.4;

struct ActiveFlight {
    flight: Flight,
    on_land: Option<OnLand>,
}

/// Owns the focused entity and the (at most one) flight in progress.
pub struct Navigator {
    entities: HashMap<EntityId, Entity>,
    order: NavOrder,
    focused: EntityId,
    active: Option<ActiveFlight>,
    duration: f32,
    easing: Easing,
}

impl Navigator {
    /// Create a navigator focused on the first entity of `order`.
    ///
    /// Entities absent from `order` can still be reached with
    /// [`Navigator::focus_entity`].
    pub fn new(entities: impl IntoIterator<Item = Entity>, order: NavOrder) -> Self {
        let focused = order.first().clone();
        Self {
            entities: entities
                .into_iter()
                .map(|entity| (entity.id.clone(), entity))
                .collect(),
            order,
            focused,
            active: None,
            duration: DEFAULT_FLIGHT_DURATION,
            easing: Easing::default(),
        }
    }

    /// Set the flight duration in seconds.
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    /// Set the easing curve applied to flight progress.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Focus `id` without flying, snapping the camera straight to its framing.
    ///
    /// Used once at startup. Ignored for unknown ids or while a flight is active.
    pub fn place_at(&mut self, id: &EntityId, stage: &mut Stage) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(framing) = self.framing(id) else {
            return false;
        };
        stage.set_pose(framing.position, framing.look_at);
        self.focused = id.clone();
        true
    }

    /// Start a flight to `id`.
    ///
    /// Returns `false` and changes nothing if a flight is already active or `id`
    /// is unknown. On success the focused id is `id` immediately, before the
    /// camera has moved.
    pub fn focus_entity(&mut self, id: &EntityId, stage: &Stage, on_land: Option<OnLand>) -> bool {
        if self.active.is_some() {
            log::debug!("Ignoring focus on '{}': flight in progress", id);
            return false;
        }
        let Some(framing) = self.framing(id) else {
            log::debug!("Ignoring focus on unknown entity '{}'", id);
            return false;
        };

        let target = CameraPose::new(framing.position, framing.look_at);
        let flight = Flight::new(stage.pose(), target, self.duration, self.easing);
        log::info!(
            "Flying {} -> {} (arc height {:.2})",
            self.focused,
            id,
            flight.arc_height()
        );

        self.focused = id.clone();
        self.active = Some(ActiveFlight { flight, on_land });
        true
    }

    /// Fly to the entity after the focused one in the navigation order.
    pub fn navigate_next(&mut self, stage: &Stage, on_land: Option<OnLand>) -> bool {
        if self.active.is_some() {
            return false;
        }
        let next = self.order.next(&self.focused).clone();
        self.focus_entity(&next, stage, on_land)
    }

    /// Fly to the entity before the focused one in the navigation order.
    pub fn navigate_previous(&mut self, stage: &Stage, on_land: Option<OnLand>) -> bool {
        if self.active.is_some() {
            return false;
        }
        let previous = self.order.previous(&self.focused).clone();
        self.focus_entity(&previous, stage, on_land)
    }

    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// The focused entity, which during a flight is already the flight's target.
    pub fn focused_id(&self) -> &EntityId {
        &self.focused
    }

    pub fn focused(&self) -> Option<&Entity> {
        self.entities.get(&self.focused)
    }

    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn framing(&self, id: &EntityId) -> Option<Framing> {
        self.entities.get(id).map(|entity| entity.framing)
    }

    pub fn order(&self) -> &NavOrder {
        &self.order
    }

    /// The active flight, if any.
    pub fn flight(&self) -> Option<&Flight> {
        self.active.as_ref().map(|active| &active.flight)
    }

    /// Advance the active flight by `dt` seconds and move the camera.
    ///
    /// Does nothing while idle. When the flight finishes the camera is set to the
    /// exact target framing, the navigator becomes idle, and only then is the
    /// completion callback invoked.
    pub fn tick(&mut self, dt: f32, stage: &mut Stage) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        active.flight.advance(dt);
        let pose = active.flight.pose();
        stage.set_pose(pose.position, pose.look_at);

        if active.flight.is_finished() {
            let landed = self.active.take();
            log::info!("Landed on '{}'", self.focused);
            if let Some(on_land) = landed.and_then(|active| active.on_land) {
                on_land();
            }
        }
    }
}
