pub mod map;
pub mod play;
pub mod simulate;

use std::path::Path;

use dx_core::WorldMap;
use dx_core::world::preset;

/// Load a world from a JSON file, or the built-in dungeon when no path is given.
fn load_world(path: Option<&Path>) -> Result<WorldMap, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let world = WorldMap::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
            tracing::debug!(path = %path.display(), locations = world.location_count(), "world loaded");
            Ok(world)
        }
        None => preset::dungeon().map_err(|e| e.to_string()),
    }
}
