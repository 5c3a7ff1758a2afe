use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use vigil_core::Sheet;
use vigil_core::ledger::{MemoryState, TraitState};

pub fn run(file: &Path) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;
    let bio = &sheet.biography;

    println!("  {}", bio.display_name().bold());
    if !bio.origin.is_empty() || !bio.era.is_empty() {
        println!("  {} {}", bio.origin, bio.era.dimmed());
    }
    let prompts = sheet.prompts();
    println!(
        "  Prompt {}{} ({} moves)",
        prompts.current(),
        sheet.current_variant(),
        prompts.history().len()
    );
    if let Some(reason) = &sheet.game_state().end_reason {
        println!("  {} {reason}", "The End.".red().bold());
    }
    println!();

    print_memories(&sheet);
    print_traits(&sheet);
    print_summary(&sheet);

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn print_memories(sheet: &Sheet) {
    let mut table = new_table(vec!["#", "State", "Theme", "Experiences"]);
    for (i, memory) in sheet.ledger().memories().iter().enumerate() {
        let state = match memory.state {
            MemoryState::Active => "active",
            MemoryState::Diary => "diary",
            MemoryState::Published => "published",
            MemoryState::StruckOut => "struck out",
        };
        let experiences: Vec<&str> = memory.filled_experiences().collect();
        let experiences = if experiences.is_empty() {
            "—".to_string()
        } else {
            experiences.join("\n")
        };
        table.add_row(vec![
            (i + 1).to_string(),
            state.to_string(),
            memory.theme.clone().unwrap_or_default(),
            experiences,
        ]);
    }
    println!("{table}");
    println!();
}

fn print_traits(sheet: &Sheet) {
    let ledger = sheet.ledger();
    let mut table = new_table(vec!["#", "Kind", "Name", "Notes"]);

    for (i, skill) in ledger.skills().iter().enumerate() {
        let notes = match (skill.state, skill.checked) {
            (TraitState::Lost, _) => "lost",
            (TraitState::Active, true) => "checked",
            (TraitState::Active, false) => "",
        };
        table.add_row(vec![
            (i + 1).to_string(),
            "Skill".to_string(),
            skill.name.clone(),
            notes.to_string(),
        ]);
    }

    for (i, resource) in ledger.resources().iter().enumerate() {
        let mut notes = Vec::new();
        if resource.stationary {
            notes.push("stationary");
        }
        if !resource.is_active() {
            notes.push("lost");
        }
        table.add_row(vec![
            (i + 1).to_string(),
            "Resource".to_string(),
            resource.name.clone(),
            notes.join(", "),
        ]);
    }

    for (i, character) in ledger.characters().iter().enumerate() {
        let mut notes = Vec::new();
        if !character.relationship.is_empty() {
            notes.push(character.relationship.clone());
        }
        if !character.is_alive() {
            notes.push("dead".to_string());
        }
        table.add_row(vec![
            (i + 1).to_string(),
            character.kind.to_string(),
            character.name.clone(),
            notes.join(", "),
        ]);
    }

    for (i, mark) in ledger.marks().iter().enumerate() {
        let notes = if mark.is_active() { "" } else { "removed" };
        table.add_row(vec![
            (i + 1).to_string(),
            "Mark".to_string(),
            mark.description.clone(),
            notes.to_string(),
        ]);
    }

    let empty = ledger.skills().is_empty()
        && ledger.resources().is_empty()
        && ledger.characters().is_empty()
        && ledger.marks().is_empty();
    if empty {
        println!("  No traits yet.");
    } else {
        println!("{table}");
    }
    println!();
}

fn print_summary(sheet: &Sheet) {
    let summary = sheet.ledger().summary();
    let mut table = new_table(vec!["Count", "Value"]);
    let rows = [
        ("Memory slots", summary.total_memory_slots.to_string()),
        ("Slots used", summary.used_memory_slots.to_string()),
        ("Slots free", summary.available_memory_slots.to_string()),
        ("Diary memories", summary.diary_memories.to_string()),
        ("Published memories", summary.published_memories.to_string()),
        ("Experiences", summary.experiences.to_string()),
        (
            "Skills (checked/unchecked/lost)",
            format!(
                "{}/{}/{}",
                summary.checked_skills, summary.unchecked_skills, summary.lost_skills
            ),
        ),
        ("Resources", summary.active_resources.to_string()),
        ("Living mortals", summary.living_mortals.to_string()),
        ("Living immortals", summary.living_immortals.to_string()),
        ("Marks", summary.active_marks.to_string()),
        ("Journal entries", sheet.journal().len().to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    println!("{table}");
}
