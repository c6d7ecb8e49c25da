//! The domain module encapsulates the core game rules. It defines the `Actor`, `Chest` and
//! `ScoreBoard` entities, the logical `InputState`, and the `GameSession` that advances them.
//!
//! The module has no dependency on the game engine. It talks to rendering and audio only by
//! returning `SessionEvent`s from each tick.

mod actor;
mod basis;
mod chest;
mod collision;
mod input;
mod score;
mod session;

pub use actor::{Actor, PlayerId};
pub use basis::{Angle, Extent, PlayArea, Position};
pub use chest::Chest;
pub use collision::{BoundingBox, HasCollision};
pub use input::{Action, InputState};
pub use score::{score_label, ScoreBoard};
pub use session::{GameSession, SessionConfig, SessionEvent};
