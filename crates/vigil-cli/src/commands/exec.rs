use std::path::Path;

use colored::Colorize;

use vigil_core::Session;

pub fn run(
    file: &Path,
    command: &str,
    yes: bool,
    seed: Option<u64>,
    prompts: Option<&Path>,
) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;
    let navigator = super::load_navigator(prompts)?;
    let config = super::session_config(&sheet, seed).with_confirmation(!yes);

    let before = sheet.clone();
    let mut session = Session::new(sheet, navigator, config);
    let output = session.process(command).map_err(|e| e.to_string())?;
    if !output.is_empty() {
        println!("{output}");
    }
    if session.pending().is_some() {
        println!("  {}", "Re-run with --yes to confirm.".yellow());
    }

    let sheet = session.into_sheet();
    if sheet != before {
        super::save_sheet(file, &sheet)?;
    }
    Ok(())
}
