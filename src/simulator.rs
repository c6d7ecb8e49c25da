//! Simulation of the game session.
//!
//! The session is created at start-up from the primary window's size and then advanced by
//! one fixed tick at 60 Hz. Every tick reads the held actions and broadcasts the resulting
//! session events to the render and audio plugins.

use bevy::{prelude::*, window::PrimaryWindow};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    domain::{GameSession, PlayArea, SessionEvent},
    resource::{InputRes, SessionEventMsg, SessionRes},
    settings::Settings,
};

const TICK_RATE_HZ: f64 = 60.0;

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_event::<SessionEventMsg>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_systems(Startup, start_session)
            .add_systems(FixedUpdate, simulate);
    }
}

fn start_session(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<Settings>,
) {
    let (width, height) = windows
        .get_single()
        .map(|window| (window.width(), window.height()))
        .unwrap_or((settings.window_width, settings.window_height));

    let play_area = PlayArea::new(width.into(), height.into()).unwrap_or_else(|err| {
        warn!("{err}, using the default play area");
        PlayArea::default()
    });

    let config = settings.session.clone();
    if !play_area.fits(config.chest_extent) || !play_area.fits(config.actor_extent) {
        warn!(
            "play area {}x{} is too small, placement is clamped",
            play_area.width(),
            play_area.height()
        );
    }

    let rng = match settings.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    info!(
        "starting session on a {}x{} play area",
        play_area.width(),
        play_area.height()
    );
    commands.insert_resource(SessionRes::from(GameSession::new(play_area, config, rng)));
}

fn simulate(
    session: Option<ResMut<SessionRes>>,
    input: Res<InputRes>,
    mut events: EventWriter<SessionEventMsg>,
) {
    let Some(mut session) = session else {
        return;
    };

    for event in session.tick(&input) {
        match event {
            SessionEvent::Won { player } => info!("{player} won!"),
            SessionEvent::ChestCollected { player } => debug!("{player} collected the chest"),
            SessionEvent::Reset => debug!("game reset"),
            SessionEvent::ScoreChanged { .. } => {}
        }
        events.send(SessionEventMsg(event));
    }
}
