//! Basic building blocks.
//!
//! Coordinates follow the screen convention: the origin is the top-left corner of the play
//! area and y grows downwards.

use std::{
    f64::consts::FRAC_PI_2,
    ops::{Add, Neg},
};

use nalgebra::{Rotation2, Vector2};
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Add<Vector2<f64>> for Position {
    type Output = Position;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Facing angle in radians. Zero faces up, positive angles turn clockwise on screen.
///
/// The angle is never normalized; it only ever feeds trigonometric functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    /// Unit vector pointing where the angle faces.
    pub fn facing(self) -> Vector2<f64> {
        Rotation2::new(self.0 - FRAC_PI_2) * Vector2::x()
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl From<Angle> for f32 {
    fn from(value: Angle) -> Self {
        value.0 as f32
    }
}

/// Width and height of a rectangular entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(length: f64) -> Self {
        Self::new(length, length)
    }
}

/// The rectangle `[0, width] × [0, height]` the game is played on.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PlayArea {
    width: f64,
    height: f64,
}

impl PlayArea {
    pub fn new(width: f64, height: f64) -> Result<Self, PlayAreaError> {
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlayAreaError::InvalidDimension(name, value));
            }
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether an entity of the given extent can be placed without being clamped.
    pub fn fits(&self, extent: Extent) -> bool {
        self.width - extent.width > 1.0 && self.height - extent.height > 1.0
    }

    /// Uniformly random whole-unit position such that an entity of the given extent lies
    /// inside the area: `1 <= x < width - extent.width`, same for y.
    pub fn random_position(&self, rng: &mut impl Rng, extent: Extent) -> Position {
        Position::new(
            random_coordinate(rng, self.width - extent.width),
            random_coordinate(rng, self.height - extent.height),
        )
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

fn random_coordinate(rng: &mut impl Rng, upper: f64) -> f64 {
    // An empty range collapses onto the first valid coordinate; areas wider than
    // `u32::MAX` only ever use the first `u32::MAX` units
    let upper = upper.ceil().clamp(2.0, f64::from(u32::MAX)) as u32;
    rng.random_range(1..upper) as f64
}

#[derive(Error, Debug, PartialEq)]
pub enum PlayAreaError {
    #[error("play area {0} must be positive and finite, got {1}")]
    InvalidDimension(&'static str, f64),
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::seeded_rng;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[rstest]
    #[case::up(        0.0,        ( 0.0, -1.0) )]
    #[case::right(     0.5 * PI,   ( 1.0,  0.0) )]
    #[case::down(      PI,         ( 0.0,  1.0) )]
    #[case::left(     -0.5 * PI,   (-1.0,  0.0) )]
    #[case::full_turn( 2.0 * PI,   ( 0.0, -1.0) )]
    #[case::many_turns(20.0 * PI,  ( 0.0, -1.0) )]
    fn test_angle_facing(#[case] radians: f64, #[case] expected: (f64, f64)) {
        let facing = Angle::new(radians).facing();
        assert_abs_diff_eq!(facing.x, expected.0, epsilon = 1e-12);
        assert_abs_diff_eq!(facing.y, expected.1, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_arithmetic() {
        let angle = Angle::new(0.3) + -Angle::new(0.1);
        assert_abs_diff_eq!(f64::from(angle), 0.2, epsilon = 1e-12);
    }

    #[rstest]
    #[case(0.0, 600.0, "width")]
    #[case(800.0, -1.0, "height")]
    #[case(f64::NAN, 600.0, "width")]
    #[case(800.0, f64::INFINITY, "height")]
    fn test_play_area_rejects_invalid_dimensions(
        #[case] width: f64,
        #[case] height: f64,
        #[case] name: &str,
    ) {
        match PlayArea::new(width, height) {
            Err(PlayAreaError::InvalidDimension(dimension, _)) => assert_eq!(dimension, name),
            Ok(area) => panic!("accepted {area:?}"),
        }
    }

    #[test]
    fn test_play_area_random_position_within_bounds() {
        let area = PlayArea::new(800.0, 600.0).unwrap();
        let extent = Extent::square(64.0);
        let mut rng = seeded_rng();
        for _ in 0..10_000 {
            let position = area.random_position(&mut rng, extent);
            assert!(position.x() >= 1.0 && position.x() < 800.0 - 64.0);
            assert!(position.y() >= 1.0 && position.y() < 600.0 - 64.0);
            assert_eq!(position.x().fract(), 0.0);
        }
    }

    #[rstest]
    #[case::smaller_than_entity(Extent::square(32.0), 10.0, 10.0)]
    #[case::equal_to_entity(Extent::square(32.0), 32.0, 32.0)]
    #[case::one_unit_margin(Extent::square(32.0), 33.0, 33.0)]
    fn test_play_area_random_position_degenerate(
        #[case] extent: Extent,
        #[case] width: f64,
        #[case] height: f64,
    ) {
        let area = PlayArea::new(width, height).unwrap();
        assert!(!area.fits(extent));
        let position = area.random_position(&mut seeded_rng(), extent);
        assert_abs_diff_eq!(position, Position::new(1.0, 1.0));
    }

    #[test]
    fn test_play_area_random_position_in_huge_area() {
        let area = PlayArea::new(1e12, 600.0).unwrap();
        let mut rng = seeded_rng();
        for _ in 0..1_000 {
            let position = area.random_position(&mut rng, Extent::square(64.0));
            assert!(position.x() >= 1.0 && position.x() < f64::from(u32::MAX));
            assert!(position.y() >= 1.0 && position.y() < 600.0 - 64.0);
        }
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }
}
