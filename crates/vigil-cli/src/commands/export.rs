use std::path::Path;

pub fn run(file: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;
    let title = sheet.biography.display_name();

    let content = match format {
        "markdown" | "md" => sheet.journal().export_markdown(title),
        "text" | "txt" => sheet.journal().export_text(title),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, text"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
