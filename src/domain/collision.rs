//! Collision detection based on axis-aligned bounding boxes.

use super::{Extent, Position};

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.bounding_box().overlaps(&other.bounding_box())
    }

    fn bounding_box(&self) -> BoundingBox;
}

/// Rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct BoundingBox {
    pub position: Position,
    pub extent: Extent,
}

impl BoundingBox {
    pub fn new(position: Position, extent: Extent) -> Self {
        Self { position, extent }
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.position.x() + self.extent.width > other.position.x()
            && self.position.x() < other.position.x() + other.extent.width
            && self.position.y() + self.extent.height > other.position.y()
            && self.position.y() < other.position.y() + other.extent.height
    }
}

impl HasCollision for BoundingBox {
    fn bounding_box(&self) -> BoundingBox {
        *self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn bbox(x: f64, y: f64, width: f64, height: f64) -> BoundingBox {
        BoundingBox::new(Position::new(x, y), Extent::new(width, height))
    }

    #[rstest]
    #[case::chest_covers_corner(bbox(100.0, 100.0, 32.0, 32.0), bbox(110.0, 110.0, 64.0, 64.0), true)]
    #[case::contained(bbox(120.0, 120.0, 8.0, 8.0), bbox(100.0, 100.0, 64.0, 64.0), true)]
    #[case::identical(bbox(5.0, 5.0, 32.0, 32.0), bbox(5.0, 5.0, 32.0, 32.0), true)]
    #[case::left_of(bbox(0.0, 100.0, 32.0, 32.0), bbox(100.0, 100.0, 64.0, 64.0), false)]
    #[case::above(bbox(100.0, 0.0, 32.0, 32.0), bbox(100.0, 100.0, 64.0, 64.0), false)]
    #[case::touching_right_edge(bbox(68.0, 100.0, 32.0, 32.0), bbox(100.0, 100.0, 64.0, 64.0), false)]
    #[case::touching_bottom_edge(bbox(100.0, 164.0, 32.0, 32.0), bbox(100.0, 100.0, 64.0, 64.0), false)]
    #[case::barely_overlapping(bbox(68.5, 100.0, 32.0, 32.0), bbox(100.0, 100.0, 64.0, 64.0), true)]
    fn test_bounding_box_overlaps(
        #[case] first: BoundingBox,
        #[case] second: BoundingBox,
        #[case] expected: bool,
    ) {
        assert_eq!(first.overlaps(&second), expected);
        assert_eq!(second.overlaps(&first), expected);
        assert_eq!(first.has_collision(&second), expected);
    }
}
