//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::{event::Event, system::Resource};

use crate::domain;

#[derive(Resource)]
pub struct SessionRes(domain::GameSession);

impl Deref for SessionRes {
    type Target = domain::GameSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SessionRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::GameSession> for SessionRes {
    fn from(value: domain::GameSession) -> Self {
        Self(value)
    }
}

#[derive(Resource, Default)]
pub struct InputRes(domain::InputState);

impl Deref for InputRes {
    type Target = domain::InputState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for InputRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// A session event broadcast to the render and audio plugins.
#[derive(Event, Clone, Copy, Debug)]
pub struct SessionEventMsg(pub domain::SessionEvent);
