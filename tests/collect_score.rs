use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use gemrun::core::components::{Collectible, Player};
use gemrun::core::config::config::GameConfig;
use gemrun::gameplay::collect::collect_on_overlap;
use gemrun::gameplay::score::Score;

fn test_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.init_resource::<Score>();
    app.add_event::<CollisionEvent>();
    app.add_systems(Update, collect_on_overlap);
    let player = app.world_mut().spawn(Player).id();
    (app, player)
}

fn overlap(app: &mut App, player: Entity, collectible: Entity) {
    app.world_mut().send_event(CollisionEvent::Started(
        player,
        collectible,
        CollisionEventFlags::SENSOR,
    ));
}

fn score(app: &App) -> u32 {
    app.world().resource::<Score>().0
}

#[test]
fn overlap_with_live_collectible_scores_and_removes_it() {
    let (mut app, player) = test_app();
    let gem = app.world_mut().spawn(Collectible).id();

    overlap(&mut app, player, gem);
    app.update();

    assert_eq!(score(&app), 10);
    assert!(
        app.world().get_entity(gem).is_err(),
        "collected gem should be despawned"
    );
}

#[test]
fn dead_collectible_never_scores_twice() {
    let (mut app, player) = test_app();
    let gem = app.world_mut().spawn(Collectible).id();

    overlap(&mut app, player, gem);
    app.update();
    assert_eq!(score(&app), 10);

    // a second contact report against the removed instance is ignored
    overlap(&mut app, player, gem);
    app.update();
    assert_eq!(score(&app), 10);
}

#[test]
fn duplicate_events_in_one_frame_count_once() {
    let (mut app, player) = test_app();
    let gem = app.world_mut().spawn(Collectible).id();

    overlap(&mut app, player, gem);
    overlap(&mut app, player, gem);
    app.update();

    assert_eq!(score(&app), 10);
}

#[test]
fn score_is_ten_per_distinct_collectible() {
    let (mut app, player) = test_app();
    let gems: Vec<Entity> = (0..3)
        .map(|_| app.world_mut().spawn(Collectible).id())
        .collect();

    for gem in &gems {
        overlap(&mut app, player, *gem);
    }
    app.update();

    assert_eq!(score(&app), 30);
}

#[test]
fn non_collectible_contacts_are_ignored() {
    let (mut app, player) = test_app();
    // terrain-like entity without the Collectible marker
    let wall = app.world_mut().spawn_empty().id();

    overlap(&mut app, player, wall);
    app.update();

    assert_eq!(score(&app), 0);
    assert!(app.world().get_entity(wall).is_ok());
}

#[test]
fn event_order_does_not_matter() {
    let (mut app, player) = test_app();
    let gem = app.world_mut().spawn(Collectible).id();

    // collectible listed first in the pair
    app.world_mut().send_event(CollisionEvent::Started(
        gem,
        player,
        CollisionEventFlags::SENSOR,
    ));
    app.update();

    assert_eq!(score(&app), 10);
}
