//! Animation players ("mixers") that advance a model's pose over time.

/// Something that advances a playing animation by a time delta.
///
/// Players live as components in the registry's `hecs::World`, hence the
/// `Send + Sync` bound.
pub trait AnimationPlayer: Send + Sync + 'static {
    /// Advance playback by `dt` seconds.
    fn advance(&mut self, dt: f32);
}

/// A single looping clip, such as an idle animation.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipPlayer {
    name: String,
    duration: f32,
    time: f32,
    speed: f32,
    looping: bool,
}

impl ClipPlayer {
    /// A looping clip of `duration` seconds, starting at time zero.
    pub fn looping(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
            time: 0.0,
            speed: 1.0,
            looping: true,
        }
    }

    /// A clip that plays once and holds its last frame.
    pub fn once(name: impl Into<String>, duration: f32) -> Self {
        Self {
            looping: false,
            ..Self::looping(name, duration)
        }
    }

    /// Set the playback rate multiplier.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Current playback time within the clip.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Normalized playback position in `[0, 1]`.
    pub fn phase(&self) -> f32 {
        if self.duration > 0.0 {
            self.time / self.duration
        } else {
            0.0
        }
    }
}

impl AnimationPlayer for ClipPlayer {
    fn advance(&mut self, dt: f32) {
        if self.duration <= 0.0 {
            return;
        }
        let time = self.time + dt * self.speed;
        self.time = if self.looping {
            time.rem_euclid(self.duration)
        } else {
            time.clamp(0.0, self.duration)
        };
    }
}

/// The animation players bound to one model.
#[derive(Default)]
pub struct Mixer {
    players: Vec<Box<dyn AnimationPlayer>>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, player: impl AnimationPlayer) -> Self {
        self.players.push(Box::new(player));
        self
    }

    pub fn push(&mut self, player: Box<dyn AnimationPlayer>) {
        self.players.push(player);
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Advance every player. Returns whether there was anything to advance.
    pub fn advance(&mut self, dt: f32) -> bool {
        for player in &mut self.players {
            player.advance(dt);
        }
        !self.players.is_empty()
    }
}

impl std::fmt::Debug for Mixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixer")
            .field("players", &self.players.len())
            .finish()
    }
}
