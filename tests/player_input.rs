use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use gemrun::core::components::{AnimationMode, Player};
use gemrun::core::config::config::GameConfig;
use gemrun::gameplay::player::apply_player_input;

fn test_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_systems(Update, apply_player_input);
    let player = app
        .world_mut()
        .spawn((Player, Velocity::zero(), AnimationMode::default()))
        .id();
    (app, player)
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn velocity(app: &App, player: Entity) -> Velocity {
    *app.world().entity(player).get::<Velocity>().unwrap()
}

fn mode(app: &App, player: Entity) -> AnimationMode {
    *app.world().entity(player).get::<AnimationMode>().unwrap()
}

#[test]
fn left_input_runs_at_reverse_factor_speed() {
    let (mut app, player) = test_app();
    press(&mut app, KeyCode::ArrowLeft);
    app.update();

    assert_eq!(velocity(&app, player).linvel.x, -280.0); // -0.7 * 400
    assert_eq!(mode(&app, player), AnimationMode::Run);
}

#[test]
fn right_input_runs_at_base_speed() {
    let (mut app, player) = test_app();
    press(&mut app, KeyCode::ArrowRight);
    app.update();

    assert_eq!(velocity(&app, player).linvel.x, 400.0);
    assert_eq!(mode(&app, player), AnimationMode::Run);
}

#[test]
fn no_horizontal_input_idles() {
    let (mut app, player) = test_app();
    // carry some stale horizontal motion into the frame
    app.world_mut()
        .entity_mut(player)
        .get_mut::<Velocity>()
        .unwrap()
        .linvel
        .x = 123.0;
    app.update();

    assert_eq!(velocity(&app, player).linvel.x, 0.0);
    assert_eq!(mode(&app, player), AnimationMode::Idle);
}

#[test]
fn vertical_speed_past_threshold_selects_jump() {
    let (mut app, player) = test_app();
    app.world_mut()
        .entity_mut(player)
        .get_mut::<Velocity>()
        .unwrap()
        .linvel
        .y = -200.0;
    press(&mut app, KeyCode::ArrowRight);
    app.update();

    // jump animation overrides the horizontal-derived choice
    assert_eq!(mode(&app, player), AnimationMode::Jump);
    assert_eq!(velocity(&app, player).linvel.x, 400.0);
}

#[test]
fn up_press_applies_jump_impulse_when_grounded() {
    let (mut app, player) = test_app();
    press(&mut app, KeyCode::ArrowUp);
    app.update();

    assert_eq!(velocity(&app, player).linvel.y, 600.0);
}

#[test]
fn jump_impulse_not_reapplied_past_threshold() {
    let (mut app, player) = test_app();
    // already descending faster than the airborne threshold
    app.world_mut()
        .entity_mut(player)
        .get_mut::<Velocity>()
        .unwrap()
        .linvel
        .y = -100.0;
    press(&mut app, KeyCode::ArrowUp);
    app.update();

    // the up press must not re-trigger the impulse mid-flight
    assert_eq!(velocity(&app, player).linvel.y, -100.0);
    assert_eq!(mode(&app, player), AnimationMode::Jump);
}

#[test]
fn threshold_is_exclusive() {
    let (mut app, player) = test_app();
    // exactly at the threshold counts as grounded
    app.world_mut()
        .entity_mut(player)
        .get_mut::<Velocity>()
        .unwrap()
        .linvel
        .y = 64.0;
    app.update();

    assert_eq!(mode(&app, player), AnimationMode::Idle);
}
