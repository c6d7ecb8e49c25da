//! 2D visualization.

use bevy::{prelude::*, sprite::Anchor};

use crate::{
    domain::{
        score_label, Actor, Extent, PlayArea, PlayerId, Position, ScoreBoard, SessionEvent,
    },
    resource::{SessionEventMsg, SessionRes},
};

const CONTROL_SCHEME: &str = "Controls\n\nPlayer 1 - Arrows\nPlayer 2 - W, A, S, D\nR - Reset Game";
const FONT_SIZE: f32 = 24.0;
const TEXT_MARGIN: f32 = 30.0;

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::rgb_u8(0x00, 0xA1, 0x86)))
            .add_systems(Startup, set_up)
            .add_systems(Update, (update_score_text, update_actors, update_chest));
    }
}

#[derive(Component)]
struct ActorSprite(PlayerId);

#[derive(Component)]
struct ChestSprite;

#[derive(Component)]
struct ScoreText(PlayerId);

fn set_up(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn(Camera2dBundle::default());

    for (player, texture) in [
        (PlayerId::One, "graphics/p1.png"),
        (PlayerId::Two, "graphics/p2.png"),
    ] {
        commands.spawn((
            SpriteBundle {
                texture: asset_server.load(texture),
                sprite: Sprite {
                    anchor: Anchor::TopLeft,
                    ..default()
                },
                transform: Transform::from_xyz(0.0, 0.0, 2.0),
                ..default()
            },
            ActorSprite(player),
        ));
    }

    commands.spawn((
        SpriteBundle {
            texture: asset_server.load("graphics/chest.png"),
            sprite: Sprite {
                anchor: Anchor::TopLeft,
                ..default()
            },
            transform: Transform::from_xyz(0.0, 0.0, 1.0),
            ..default()
        },
        ChestSprite,
    ));

    create_text(&mut commands);
}

fn text_style() -> TextStyle {
    TextStyle {
        font_size: FONT_SIZE,
        color: Color::rgb_u8(0xF0, 0xF0, 0xF0),
        ..default()
    }
}

fn create_text(commands: &mut Commands) {
    commands.spawn((
        TextBundle::from_section(score_label(PlayerId::One, 0), text_style()).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(TEXT_MARGIN),
            ..default()
        }),
        ScoreText(PlayerId::One),
    ));
    commands.spawn((
        TextBundle::from_section(score_label(PlayerId::Two, 0), text_style()).with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            right: Val::Px(TEXT_MARGIN),
            ..default()
        }),
        ScoreText(PlayerId::Two),
    ));
    commands.spawn(
        TextBundle::from_section(CONTROL_SCHEME, text_style()).with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(TEXT_MARGIN),
            left: Val::Px(TEXT_MARGIN),
            ..default()
        }),
    );
}

fn update_score_text(
    mut events: EventReader<SessionEventMsg>,
    session: Option<Res<SessionRes>>,
    mut texts: Query<(&mut Text, &ScoreText)>,
) {
    let changed = events
        .read()
        .filter(|SessionEventMsg(event)| {
            matches!(
                event,
                SessionEvent::ScoreChanged { .. } | SessionEvent::Reset
            )
        })
        .count()
        > 0;
    let Some(session) = session else {
        return;
    };

    if changed {
        for (mut text, score_text) in texts.iter_mut() {
            text.sections[0].value = score_text_for(session.score_board(), score_text.0);
        }
    }
}

fn score_text_for(board: &ScoreBoard, player: PlayerId) -> String {
    score_label(player, board.score(player))
}

fn update_actors(
    session: Option<Res<SessionRes>>,
    mut sprites: Query<(&mut Transform, &mut Sprite, &ActorSprite)>,
) {
    let Some(session) = session else {
        return;
    };

    for (mut transform, mut sprite, actor_sprite) in sprites.iter_mut() {
        let actor = session.actor(actor_sprite.0);
        *transform = actor_transform(actor, session.play_area(), transform.translation.z);
        sprite.custom_size = Some(to_bevy_size(actor.extent()));
    }
}

fn update_chest(
    session: Option<Res<SessionRes>>,
    mut sprites: Query<(&mut Transform, &mut Sprite), With<ChestSprite>>,
) {
    let Some(session) = session else {
        return;
    };

    let chest = session.chest();
    for (mut transform, mut sprite) in sprites.iter_mut() {
        transform.translation =
            to_bevy_position(chest.position(), session.play_area(), transform.translation.z);
        sprite.custom_size = Some(to_bevy_size(chest.extent()));
    }
}

fn actor_transform(actor: &Actor, area: &PlayArea, z: f32) -> Transform {
    Transform {
        translation: to_bevy_position(actor.position(), area, z),
        // Screen angles turn clockwise, bevy's counter-clockwise
        rotation: Quat::from_rotation_z(-f32::from(actor.rotation())),
        ..default()
    }
}

fn to_bevy_size(extent: Extent) -> Vec2 {
    Vec2::new(extent.width as f32, extent.height as f32)
}

/// Maps top-left-origin play-area coordinates onto bevy's centred, y-up world.
fn to_bevy_position(position: Position, area: &PlayArea, z: f32) -> Vec3 {
    Vec3::new(
        (position.x() - area.width() / 2.0) as f32,
        (area.height() / 2.0 - position.y()) as f32,
        z,
    )
}
