use std::fs;
use std::path::Path;

use colored::Colorize;

use vigil_core::{CharacterCreation, Sheet};

pub fn run(
    file: &Path,
    name: Option<&str>,
    from: Option<&Path>,
    force: bool,
) -> Result<(), String> {
    if file.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let sheet = match (from, name) {
        (Some(path), _) => {
            let json = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let creation: CharacterCreation = serde_json::from_str(&json)
                .map_err(|e| format!("invalid creation file {}: {e}", path.display()))?;
            Sheet::from_creation(&creation).map_err(|e| e.to_string())?
        }
        (None, Some(name)) if !name.trim().is_empty() => Sheet::new(name.trim()),
        (None, _) => return Err("a character name is required".into()),
    };

    super::save_sheet(file, &sheet)?;

    println!(
        "  {} {} in {}",
        "Created".green().bold(),
        sheet.biography.display_name(),
        file.display()
    );
    if sheet.needs_creation() {
        println!("  The sheet is blank; add traits with `vigil exec` or start with `vigil play`.");
    }
    Ok(())
}
