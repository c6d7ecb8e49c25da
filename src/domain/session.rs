//! One game session: both players, the chest and the score board, advanced tick by tick.

use rand_chacha::ChaCha8Rng;

use super::{
    Action, Actor, Angle, Chest, Extent, HasCollision, InputState, PlayArea, PlayerId,
    ScoreBoard,
};

/// Tuning constants. Speeds are per tick.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct SessionConfig {
    pub movement_speed: f64,
    /// Multiplier applied to `movement_speed` when backing up.
    pub reverse_factor: f64,
    pub rotation_speed: f64,
    pub winning_score: u8,
    pub actor_extent: Extent,
    pub chest_extent: Extent,
}

impl SessionConfig {
    pub const fn new(
        movement_speed: f64,
        reverse_factor: f64,
        rotation_speed: f64,
        winning_score: u8,
        actor_extent: Extent,
        chest_extent: Extent,
    ) -> Self {
        SessionConfig {
            movement_speed,
            reverse_factor,
            rotation_speed,
            winning_score,
            actor_extent,
            chest_extent,
        }
    }

    pub fn forward_throttle(&self) -> f64 {
        self.movement_speed
    }

    pub fn backward_throttle(&self) -> f64 {
        self.movement_speed * self.reverse_factor
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(10.0, -0.5, 0.1, 10, Extent::square(32.0), Extent::square(64.0))
    }
}

/// Notifications for the render and audio collaborators, in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    ChestCollected { player: PlayerId },
    ScoreChanged { player: PlayerId, score: u8 },
    Won { player: PlayerId },
    Reset,
}

pub struct GameSession {
    play_area: PlayArea,
    config: SessionConfig,
    actors: [Actor; 2],
    chest: Chest,
    score_board: ScoreBoard,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates both actors and the chest and places them at random.
    pub fn new(play_area: PlayArea, config: SessionConfig, rng: ChaCha8Rng) -> Self {
        let mut session = Self {
            play_area,
            actors: [Actor::new(config.actor_extent), Actor::new(config.actor_extent)],
            chest: Chest::new(config.chest_extent),
            score_board: ScoreBoard::new(),
            config,
            rng,
        };
        session.reset();
        session
    }

    pub fn play_area(&self) -> &PlayArea {
        &self.play_area
    }

    pub fn actor(&self, player: PlayerId) -> &Actor {
        &self.actors[index(player)]
    }

    pub fn actor_mut(&mut self, player: PlayerId) -> &mut Actor {
        &mut self.actors[index(player)]
    }

    pub fn chest(&self) -> &Chest {
        &self.chest
    }

    pub fn score_board(&self) -> &ScoreBoard {
        &self.score_board
    }

    /// Advances the session by one tick: steer, reset on request, collect, wrap.
    pub fn tick(&mut self, input: &InputState) -> Vec<SessionEvent> {
        let mut events = vec![];

        for player in PlayerId::iter() {
            self.steer(*player, input);
        }

        if input.is_held(Action::Reset) {
            self.reset();
            events.push(SessionEvent::Reset);
        }

        // Player one is tested first and wins ties
        if let Some(player) = PlayerId::iter().copied().find(|player| self.collect(*player)) {
            events.push(SessionEvent::ChestCollected { player });
            self.award_point(player, &mut events);
        }

        for actor in &mut self.actors {
            actor.wrap(&self.play_area);
        }

        events
    }

    /// Zeroes the scores and scatters both actors and the chest.
    pub fn reset(&mut self) {
        self.score_board.clear();
        for actor in &mut self.actors {
            actor.set_position(
                self.play_area
                    .random_position(&mut self.rng, self.config.actor_extent),
            );
        }
        self.chest.relocate(&self.play_area, &mut self.rng);
    }

    fn steer(&mut self, player: PlayerId, input: &InputState) {
        let forward = self.config.forward_throttle();
        let backward = self.config.backward_throttle();
        let turn = Angle::new(self.config.rotation_speed);
        let actor = self.actor_mut(player);

        if input.is_held(Action::Forward(player)) {
            actor.apply_motion(forward);
        }
        if input.is_held(Action::Backward(player)) {
            actor.apply_motion(backward);
        }
        if input.is_held(Action::TurnRight(player)) {
            actor.apply_rotation(turn);
        }
        if input.is_held(Action::TurnLeft(player)) {
            actor.apply_rotation(-turn);
        }
    }

    /// Relocates the chest if the player's actor overlaps it.
    fn collect(&mut self, player: PlayerId) -> bool {
        if self.actors[index(player)].has_collision(&self.chest) {
            self.chest.relocate(&self.play_area, &mut self.rng);
            true
        } else {
            false
        }
    }

    fn award_point(&mut self, player: PlayerId, events: &mut Vec<SessionEvent>) {
        let score = self.score_board.increment(player);
        if score >= self.config.winning_score {
            self.declare_winner(player, events);
        } else {
            events.push(SessionEvent::ScoreChanged { player, score });
        }
    }

    fn declare_winner(&mut self, player: PlayerId, events: &mut Vec<SessionEvent>) {
        events.push(SessionEvent::Won { player });
        self.reset();
        events.push(SessionEvent::Reset);
    }
}

fn index(player: PlayerId) -> usize {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => 1,
    }
}
