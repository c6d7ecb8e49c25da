//! The single treasure chest players race for.

use rand::Rng;

use super::{BoundingBox, Extent, HasCollision, PlayArea, Position};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Chest {
    position: Position,
    extent: Extent,
}

impl Chest {
    pub fn new(extent: Extent) -> Self {
        Self {
            position: Position::default(),
            extent,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn relocate(&mut self, area: &PlayArea, rng: &mut impl Rng) {
        self.position = area.random_position(rng, self.extent);
    }
}

impl HasCollision for Chest {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.position, self.extent)
    }
}
