//! Embedded / disk dual-mode level sourcing.
//!
//! Native builds read level RON from `assets/levels/` on disk; wasm32 builds
//! (and native builds with the `embedded_levels` feature) compile the level
//! set into the binary via `include_str!`, so the web target performs no
//! runtime filesystem IO.

use super::layout::LevelFile;

#[cfg(any(target_arch = "wasm32", feature = "embedded_levels"))]
const EMBEDDED_LEVELS: &[(&str, &str)] =
    &[("meadow", include_str!("../../../assets/levels/meadow.ron"))];

/// Resolve a level id to its parsed description.
#[cfg(any(target_arch = "wasm32", feature = "embedded_levels"))]
pub fn load_level_file(id: &str) -> Result<LevelFile, String> {
    let ron = EMBEDDED_LEVELS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, ron)| *ron)
        .ok_or_else(|| format!("embedded level '{id}' not found"))?;
    LevelFile::parse(ron)
}

#[cfg(not(any(target_arch = "wasm32", feature = "embedded_levels")))]
pub fn load_level_file(id: &str) -> Result<LevelFile, String> {
    use std::path::PathBuf;
    let crate_root = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let path: PathBuf = PathBuf::from(crate_root)
        .join("assets")
        .join("levels")
        .join(format!("{id}.ron"));
    let txt =
        std::fs::read_to_string(&path).map_err(|e| format!("read level {path:?}: {e}"))?;
    LevelFile::parse(&txt)
}
