use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use vigil_core::Session;

pub fn run(file: &Path, seed: Option<u64>, prompts: Option<&Path>) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;
    let navigator = super::load_navigator(prompts)?;
    let config = super::session_config(&sheet, seed);

    println!(
        "  {} the story of {}",
        "Resuming".bold(),
        sheet.biography.display_name()
    );
    println!(
        "  Prompt {} | Seed: {}",
        sheet.prompts().current(),
        config.seed
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let mut session = Session::new(sheet, navigator, config);
    let mut saved = session.sheet().clone();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }

        if session.sheet() != &saved {
            super::save_sheet(file, session.sheet())?;
            saved = session.sheet().clone();
        }
    }

    Ok(())
}
