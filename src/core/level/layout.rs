use bevy::prelude::*;
use serde::Deserialize;

/// Tile ids inside this range are solid terrain; everything else (including
/// 0 = empty) is pass-through. The range is part of the level contract, not
/// a tunable.
pub const SOLID_ID_MIN: u16 = 1;
pub const SOLID_ID_MAX: u16 = 2000;

#[derive(Debug, Deserialize, Clone)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}
impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectibleDef {
    pub pos: Vec2Def,
}

/// Level description: a row-major tile grid (row 0 = top) plus object
/// placements, all in world units with the origin at the grid's bottom-left.
#[derive(Debug, Deserialize, Clone)]
pub struct LevelFile {
    pub version: u32,
    pub tile_size: f32,
    pub tiles: Vec<Vec<u16>>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleDef>,
    pub player_spawn: Vec2Def,
}

/// Axis-aligned terrain collider covering a horizontal run of solid tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidStrip {
    pub center: Vec2,
    pub half_extents: Vec2,
}

pub fn is_solid(id: u16) -> bool {
    (SOLID_ID_MIN..=SOLID_ID_MAX).contains(&id)
}

impl LevelFile {
    pub fn parse(txt: &str) -> Result<Self, String> {
        let level: LevelFile = ron::from_str(txt).map_err(|e| format!("parse level: {e}"))?;
        level.validate()?;
        Ok(level)
    }

    fn validate(&self) -> Result<(), String> {
        if self.version != 1 {
            return Err(format!("LevelFile version {} unsupported (expected 1)", self.version));
        }
        if !(self.tile_size > 0.0) {
            return Err(format!("tile_size {} must be positive", self.tile_size));
        }
        let Some(first) = self.tiles.first() else {
            return Err("tile grid is empty".into());
        };
        if first.is_empty() {
            return Err("tile grid rows are empty".into());
        }
        for (i, row) in self.tiles.iter().enumerate() {
            if row.len() != first.len() {
                return Err(format!(
                    "tile grid is not rectangular: row {i} has {} columns, expected {}",
                    row.len(),
                    first.len()
                ));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn columns(&self) -> usize {
        self.tiles.first().map_or(0, |r| r.len())
    }

    /// World-space center of the tile at (col, row); row 0 is the top row.
    pub fn tile_center(&self, col: usize, row: usize) -> Vec2 {
        let ts = self.tile_size;
        Vec2::new(
            col as f32 * ts + ts * 0.5,
            (self.rows() - 1 - row) as f32 * ts + ts * 0.5,
        )
    }

    /// Derive the static solidity mask as merged horizontal strips, one
    /// collider per run of adjacent solid tiles.
    pub fn solid_strips(&self) -> Vec<SolidStrip> {
        let ts = self.tile_size;
        let mut strips = Vec::new();
        for (row, ids) in self.tiles.iter().enumerate() {
            let mut run_start: Option<usize> = None;
            for col in 0..=ids.len() {
                let solid = col < ids.len() && is_solid(ids[col]);
                match (run_start, solid) {
                    (None, true) => run_start = Some(col),
                    (Some(start), false) => {
                        let len = col - start;
                        let left = self.tile_center(start, row).x - ts * 0.5;
                        strips.push(SolidStrip {
                            center: Vec2::new(
                                left + len as f32 * ts * 0.5,
                                self.tile_center(start, row).y,
                            ),
                            half_extents: Vec2::new(len as f32 * ts * 0.5, ts * 0.5),
                        });
                        run_start = None;
                    }
                    _ => {}
                }
            }
        }
        strips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        version: 1,
        tile_size: 64.0,
        tiles: [
            [0, 0, 0, 0],
            [0, 2, 2, 0],
            [1, 1, 0, 1],
        ],
        collectibles: [(pos: (x: 96.0, y: 160.0))],
        player_spawn: (x: 32.0, y: 96.0),
    )"#;

    #[test]
    fn solid_range_bounds() {
        assert!(!is_solid(0));
        assert!(is_solid(SOLID_ID_MIN));
        assert!(is_solid(50));
        assert!(is_solid(SOLID_ID_MAX));
        assert!(!is_solid(SOLID_ID_MAX + 1));
    }

    #[test]
    fn parses_sample_level() {
        let level = LevelFile::parse(SAMPLE).expect("sample should parse");
        assert_eq!(level.rows(), 3);
        assert_eq!(level.columns(), 4);
        assert_eq!(level.collectibles.len(), 1);
        assert_eq!(Vec2::from(level.player_spawn.clone()), Vec2::new(32.0, 96.0));
    }

    #[test]
    fn tile_centers_are_y_up() {
        let level = LevelFile::parse(SAMPLE).unwrap();
        // bottom-left tile of the grid
        assert_eq!(level.tile_center(0, 2), Vec2::new(32.0, 32.0));
        // top-left tile
        assert_eq!(level.tile_center(0, 0), Vec2::new(32.0, 160.0));
    }

    #[test]
    fn adjacent_solid_tiles_merge_into_strips() {
        let level = LevelFile::parse(SAMPLE).unwrap();
        let strips = level.solid_strips();
        // one strip for [2,2], one for [1,1], one for the lone trailing [1]
        assert_eq!(strips.len(), 3);
        let wide = strips
            .iter()
            .find(|s| s.half_extents.x == 64.0)
            .expect("two-tile run should merge into one 128-wide strip");
        assert_eq!(wide.half_extents.y, 32.0);
    }

    #[test]
    fn rejects_bad_version_and_ragged_grids() {
        let bad_version = SAMPLE.replace("version: 1", "version: 3");
        assert!(LevelFile::parse(&bad_version).is_err());

        let ragged = r#"(
            version: 1,
            tile_size: 64.0,
            tiles: [[1, 1], [1]],
            player_spawn: (x: 0.0, y: 0.0),
        )"#;
        assert!(LevelFile::parse(ragged).is_err());
    }
}
