//! Logical control actions and which of them are currently held.

use std::{collections::BTreeMap, slice::Iter};

use super::PlayerId;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Action {
    Forward(PlayerId),
    Backward(PlayerId),
    TurnLeft(PlayerId),
    TurnRight(PlayerId),
    Reset,
}

impl Action {
    pub fn iter() -> Iter<'static, Action> {
        static ACTIONS: [Action; 9] = [
            Action::Forward(PlayerId::One),
            Action::Backward(PlayerId::One),
            Action::TurnLeft(PlayerId::One),
            Action::TurnRight(PlayerId::One),
            Action::Forward(PlayerId::Two),
            Action::Backward(PlayerId::Two),
            Action::TurnLeft(PlayerId::Two),
            Action::TurnRight(PlayerId::Two),
            Action::Reset,
        ];
        ACTIONS.iter()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputState {
    held: BTreeMap<Action, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: BTreeMap::from_iter(Action::iter().map(|action| (*action, false))),
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.get(&action).copied().unwrap_or_default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action, true);
    }

    pub fn release(&mut self, action: Action) {
        self.held.insert(action, false);
    }

    pub fn release_all(&mut self) {
        for held in self.held.values_mut() {
            *held = false;
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_starts_released() {
        let input = InputState::new();
        assert_eq!(Action::iter().len(), 9);
        assert!(Action::iter().all(|action| !input.is_held(*action)));
    }

    #[test]
    fn test_input_state_press_and_release() {
        let mut input = InputState::new();
        input.press(Action::Forward(PlayerId::Two));
        input.press(Action::Reset);
        assert!(input.is_held(Action::Forward(PlayerId::Two)));
        assert!(input.is_held(Action::Reset));
        assert!(!input.is_held(Action::Forward(PlayerId::One)));

        input.release(Action::Forward(PlayerId::Two));
        assert!(!input.is_held(Action::Forward(PlayerId::Two)));
        assert!(input.is_held(Action::Reset));

        input.release_all();
        assert_eq!(input, InputState::default());
    }
}
