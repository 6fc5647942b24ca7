use bevy::prelude::Vec2;

use gemrun::core::level::layout::is_solid;
use gemrun::core::level::source::load_level_file;

#[test]
fn shipped_meadow_level_loads() {
    let level = load_level_file("meadow").expect("meadow level should parse");

    assert_eq!(level.tile_size, 64.0);
    assert_eq!(level.rows(), 15);
    assert_eq!(level.columns(), 30);
    assert_eq!(level.collectibles.len(), 5);
    assert_eq!(Vec2::from(level.player_spawn.clone()), Vec2::new(64.0, 448.0));

    // full-width ground row must collapse into a single strip among the set
    let strips = level.solid_strips();
    assert!(!strips.is_empty(), "expected terrain strips from the grid");
    let ground = strips
        .iter()
        .find(|s| s.half_extents.x == 30.0 * 64.0 * 0.5)
        .expect("ground row should merge into one full-width strip");
    assert_eq!(ground.center.y, 32.0);

    // every tile id used by the level is within the solid range or empty
    for row in &level.tiles {
        for &id in row {
            assert!(id == 0 || is_solid(id), "unexpected tile id {id}");
        }
    }
}

#[test]
fn missing_level_id_is_an_error() {
    assert!(load_level_file("no_such_level").is_err());
}
