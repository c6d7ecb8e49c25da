//! Player-controlled actor that drives along its facing and turns in place.

use std::{fmt, slice::Iter};

use super::{Angle, BoundingBox, Extent, HasCollision, PlayArea, Position};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Players in collision priority order.
    pub fn iter() -> Iter<'static, PlayerId> {
        static PLAYERS: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];
        PLAYERS.iter()
    }

    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Actor {
    position: Position,
    rotation: Angle,
    extent: Extent,
}

impl Actor {
    pub fn new(extent: Extent) -> Self {
        Self {
            position: Position::default(),
            rotation: Angle::default(),
            extent,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Moves `throttle` units along the current facing. Negative throttle backs up.
    pub fn apply_motion(&mut self, throttle: f64) {
        self.position = self.position + self.rotation.facing() * throttle;
    }

    pub fn apply_rotation(&mut self, delta: Angle) {
        self.rotation = self.rotation + delta;
    }

    /// Wraps each axis independently onto the opposite edge of the play area.
    pub fn wrap(&mut self, area: &PlayArea) {
        self.position = Position::new(
            wrap_coordinate(self.position.x(), area.width()),
            wrap_coordinate(self.position.y(), area.height()),
        );
    }
}

fn wrap_coordinate(value: f64, bound: f64) -> f64 {
    if value > bound {
        0.0
    } else if value < 0.0 {
        bound
    } else {
        value
    }
}

impl HasCollision for Actor {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.position, self.extent)
    }
}
