pub mod exec;
pub mod export;
pub mod new;
pub mod play;
pub mod show;

use std::fs;
use std::path::Path;

use vigil_core::{Navigator, PromptTable, SessionConfig, Sheet};

/// Read a sheet from a JSON file.
fn load_sheet(path: &Path) -> Result<Sheet, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("invalid sheet {}: {e}", path.display()))
}

/// Write a sheet as pretty-printed JSON.
fn save_sheet(path: &Path, sheet: &Sheet) -> Result<(), String> {
    let json = serde_json::to_string_pretty(sheet)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    fs::write(path, json + "\n").map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), "sheet saved");
    Ok(())
}

/// Build a navigator over the bundled prompts or a replacement table.
fn load_navigator(prompts: Option<&Path>) -> Result<Navigator, String> {
    let table = match prompts {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            PromptTable::from_json(&json)
                .map_err(|e| format!("invalid prompt table {}: {e}", path.display()))?
        }
        None => PromptTable::builtin().map_err(|e| format!("bundled prompts are invalid: {e}"))?,
    };
    Ok(Navigator::new(table))
}

/// Session config for a sheet. Without an explicit seed the default seed is
/// offset by the number of moves so far, so resumed games keep rolling fresh
/// dice.
fn session_config(sheet: &Sheet, seed: Option<u64>) -> SessionConfig {
    let config = SessionConfig::default();
    let seed = seed.unwrap_or_else(|| {
        let moves = u64::try_from(sheet.prompts().history().len()).unwrap_or(u64::MAX);
        config.seed.wrapping_add(moves)
    });
    config.with_seed(seed)
}
