//! View glue: draws the level and the player as flat sprites.
//!
//! Reads simulation state only. World space is y-down with a top-left
//! origin; sprites are placed through [`WorldBounds::world_to_display`].

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::GameplayDefaults;
use crate::level::{CollisionWorld, Platform, WorldBounds};
use crate::movement::{Motion, Player, PlayerBody};

const IDLE_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
const MOVE_COLOR: Color = Color::srgb(1.0, 0.85, 0.4);
const SPENT_PUSH_COLOR: Color = Color::srgb(0.55, 0.55, 0.7);

/// Marker for sprites mirroring a platform of the current level.
#[derive(Component, Debug)]
pub struct PlatformSprite;

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, apply_window_size))
            .add_systems(
                Update,
                (rebuild_platform_sprites, attach_player_sprite, sync_player_sprite).chain(),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn apply_window_size(
    defaults: Res<GameplayDefaults>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window
        .resolution
        .set(defaults.world.width, defaults.world.height);
}

const PLAYER_Z: f32 = 1.0;

fn sprite_center(bounds: WorldBounds, top_left: Vec2, size: Vec2) -> Vec2 {
    bounds.world_to_display(top_left + size / 2.0)
}

fn platform_color(platform: &Platform) -> Color {
    let [r, g, b] = platform.tag().color;
    Color::srgb_u8(r, g, b)
}

/// Respawn platform sprites whenever the level is swapped.
fn rebuild_platform_sprites(
    mut commands: Commands,
    world: Res<CollisionWorld>,
    existing: Query<Entity, With<PlatformSprite>>,
) {
    if !world.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let bounds = world.bounds();
    for platform in world.iter() {
        let rect = platform.rect();
        let size = Vec2::new(rect.width, rect.height);
        commands.spawn((
            PlatformSprite,
            Sprite {
                color: platform_color(platform),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(
                sprite_center(bounds, Vec2::new(rect.x, rect.y), size).extend(0.0),
            ),
        ));
    }
}

fn attach_player_sprite(
    mut commands: Commands,
    added: Query<(Entity, &PlayerBody), Added<PlayerBody>>,
) {
    for (entity, body) in &added {
        commands.entity(entity).insert((
            Sprite {
                color: IDLE_COLOR,
                custom_size: Some(body.size()),
                ..default()
            },
            Transform::default(),
        ));
    }
}

fn sync_player_sprite(
    world: Res<CollisionWorld>,
    mut players: Query<(&PlayerBody, &mut Sprite, &mut Transform), With<Player>>,
) {
    for (body, mut sprite, mut transform) in &mut players {
        let pose = body.pose();
        sprite.flip_x = pose.mirrored;
        sprite.color = match (pose.motion, body.can_push()) {
            (_, false) => SPENT_PUSH_COLOR,
            (Motion::Move, true) => MOVE_COLOR,
            (Motion::Idle, true) => IDLE_COLOR,
        };
        transform.translation =
            sprite_center(world.bounds(), body.position(), body.size()).extend(PLAYER_Z);
    }
}
