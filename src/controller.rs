//! Controller translating keyboard events into held game actions.
//!
//! Player one steers with the arrow keys, player two with W, A, S and D, and R resets the
//! game. Keys without a binding are ignored.

use bevy::{
    ecs::schedule::SystemConfigs,
    input::{keyboard::KeyboardInput, ButtonState, InputSystem},
    prelude::*,
    window::WindowFocused,
};

use crate::{
    domain::{Action, PlayerId},
    resource::InputRes,
};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputRes>()
            .add_systems(PreUpdate, input_systems().after(InputSystem));
    }
}

/// Focus loss is applied after the frame's key events, so it always wins.
fn input_systems() -> SystemConfigs {
    (control, release_on_focus_loss).chain()
}

pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::ArrowUp => Some(Action::Forward(PlayerId::One)),
        KeyCode::ArrowDown => Some(Action::Backward(PlayerId::One)),
        KeyCode::ArrowLeft => Some(Action::TurnLeft(PlayerId::One)),
        KeyCode::ArrowRight => Some(Action::TurnRight(PlayerId::One)),
        KeyCode::KeyW => Some(Action::Forward(PlayerId::Two)),
        KeyCode::KeyS => Some(Action::Backward(PlayerId::Two)),
        KeyCode::KeyA => Some(Action::TurnLeft(PlayerId::Two)),
        KeyCode::KeyD => Some(Action::TurnRight(PlayerId::Two)),
        KeyCode::KeyR => Some(Action::Reset),
        _ => None,
    }
}

fn control(mut keyboard: EventReader<KeyboardInput>, mut input: ResMut<InputRes>) {
    for event in keyboard.read() {
        let Some(action) = action_for_key(event.key_code) else {
            continue;
        };
        match event.state {
            ButtonState::Pressed => input.press(action),
            ButtonState::Released => input.release(action),
        }
    }
}

// Key-up events are lost while the window is unfocused
fn release_on_focus_loss(mut focus: EventReader<WindowFocused>, mut input: ResMut<InputRes>) {
    if focus.read().any(|event| !event.focused) {
        input.release_all();
    }
}
