//! Movement domain: input sampling into the tick snapshot.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::level::CollisionWorld;
use crate::movement::{AimTarget, InputSnapshot};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<InputSnapshot>,
) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.jump = keyboard.pressed(KeyCode::KeyW)
        || keyboard.pressed(KeyCode::ArrowUp)
        || keyboard.pressed(KeyCode::Space);

    // Latched until a fixed tick consumes it; frames can outpace ticks.
    if keyboard.just_pressed(KeyCode::KeyE) || mouse.just_pressed(MouseButton::Left) {
        input.push = true;
    }
}

pub(crate) fn read_aim(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    world: Res<CollisionWorld>,
    mut aim: ResMut<AimTarget>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Some((camera, camera_transform)) = cameras.iter().next() else {
        return;
    };
    let Ok(display) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    aim.0 = world.bounds().display_to_world(display);
}
