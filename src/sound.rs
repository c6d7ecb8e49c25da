//! Fire-and-forget sound cues for chest collections and wins.

use bevy::prelude::*;

use crate::{domain::SessionEvent, resource::SessionEventMsg};

pub struct Sound;

impl Plugin for Sound {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds)
            .add_systems(Update, play_cues);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    ChestCollected,
    Fanfare,
}

impl Cue {
    pub fn for_event(event: SessionEvent) -> Option<Cue> {
        match event {
            SessionEvent::ChestCollected { .. } => Some(Cue::ChestCollected),
            SessionEvent::Won { .. } => Some(Cue::Fanfare),
            SessionEvent::ScoreChanged { .. } | SessionEvent::Reset => None,
        }
    }
}

#[derive(Resource)]
struct Sounds {
    chest_collected: Handle<AudioSource>,
    fanfare: Handle<AudioSource>,
}

impl Sounds {
    fn get(&self, cue: Cue) -> Handle<AudioSource> {
        match cue {
            Cue::ChestCollected => self.chest_collected.clone(),
            Cue::Fanfare => self.fanfare.clone(),
        }
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(Sounds {
        chest_collected: asset_server.load("audio/chest.mp3"),
        fanfare: asset_server.load("audio/fanfare.mp3"),
    });
}

fn play_cues(
    mut commands: Commands,
    mut events: EventReader<SessionEventMsg>,
    sounds: Option<Res<Sounds>>,
) {
    let Some(sounds) = sounds else {
        return;
    };

    for cue in events.read().filter_map(|event| Cue::for_event(event.0)) {
        commands.spawn(AudioBundle {
            source: sounds.get(cue),
            settings: PlaybackSettings::DESPAWN,
        });
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::PlayerId;

    #[rstest]
    #[case(SessionEvent::ChestCollected { player: PlayerId::Two }, Some(Cue::ChestCollected))]
    #[case(SessionEvent::Won { player: PlayerId::One }, Some(Cue::Fanfare))]
    #[case(SessionEvent::ScoreChanged { player: PlayerId::One, score: 4 }, None)]
    #[case(SessionEvent::Reset, None)]
    fn test_cue_for_event(#[case] event: SessionEvent, #[case] cue: Option<Cue>) {
        assert_eq!(Cue::for_event(event), cue);
    }
}
