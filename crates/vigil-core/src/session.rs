//! Line-based play session.
//!
//! `Session` owns a [`Sheet`], a [`Navigator`] and a seeded RNG, and turns
//! one line of input at a time into sheet operations. Trait arguments are
//! 1-based positions in the sheet's lists, lost and dead entries included,
//! so numbers stay stable as the story goes on.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::ledger::{CharacterKind, MemoryState, TraitId, TraitState};
use crate::prompt::dice::describe_movement;
use crate::prompt::{Navigator, Visit, roll_prompt_dice};
use crate::sheet::{Action, Sheet};

/// Journal entries shown by the `journal` command.
const RECENT_JOURNAL_ENTRIES: usize = 5;

/// An interactive play session over one sheet.
pub struct Session {
    sheet: Sheet,
    navigator: Navigator,
    config: SessionConfig,
    rng: StdRng,
    pending: Option<Action>,
}

impl Session {
    /// Create a session over a sheet.
    pub fn new(sheet: Sheet, navigator: Navigator, config: SessionConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            sheet,
            navigator,
            config,
            rng,
            pending: None,
        }
    }

    /// The sheet being played.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Give the sheet back.
    pub fn into_sheet(self) -> Sheet {
        self.sheet
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The destructive action waiting for `yes` or `no`.
    pub fn pending(&self) -> Option<&Action> {
        self.pending.as_ref()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = split_word(trimmed);
        let cmd = cmd.to_lowercase();

        match cmd.as_str() {
            "yes" | "y" => return self.confirm(),
            "no" | "n" => return self.cancel(),
            _ => {}
        }
        if let Some(dropped) = self.pending.take() {
            tracing::debug!(action = %dropped.describe(), "pending action dropped");
        }

        match cmd.as_str() {
            "roll" => self.do_roll(),
            "goto" => self.do_goto(rest),
            "prompt" => Ok(self.do_prompt()),
            "write" => self.do_write(rest),
            "skill" => self.do_skill(rest),
            "resource" => self.do_resource(rest),
            "character" => self.do_character(rest),
            "mark" => self.do_mark(rest),
            "memory" => self.do_memory(rest),
            "slot" => self.do_slot(rest),
            "diary" => self.do_diary(rest),
            "rename" => self.do_rename(rest),
            "end" => self.run(Action::EndGame {
                reason: non_empty(rest),
            }),
            "sheet" | "status" => Ok(self.do_status()),
            "history" => Ok(self.do_history()),
            "journal" => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "help" => Ok(help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(cmd)),
        }
    }

    fn confirm(&mut self) -> SessionResult<String> {
        let action = self.pending.take().ok_or(SessionError::NothingPending)?;
        self.commit(action)
    }

    fn cancel(&mut self) -> SessionResult<String> {
        let action = self.pending.take().ok_or(SessionError::NothingPending)?;
        Ok(format!("Cancelled: {}.", action.describe()))
    }

    /// Apply an action, parking destructive ones for confirmation.
    fn run(&mut self, action: Action) -> SessionResult<String> {
        if action.is_destructive() && self.config.confirm_destructive {
            if !self.sheet.check(&action)? {
                return Ok("Nothing to change.".to_string());
            }
            let question = format!(
                "Are you sure you want to {}? Type 'yes' to confirm or 'no' to cancel.",
                action.describe()
            );
            self.pending = Some(action);
            return Ok(question);
        }
        self.commit(action)
    }

    fn commit(&mut self, action: Action) -> SessionResult<String> {
        Ok(match self.sheet.apply(action)? {
            Some(event) => event.to_string(),
            None => "Nothing to change.".to_string(),
        })
    }

    fn do_roll(&mut self) -> SessionResult<String> {
        if self.sheet.is_game_over() {
            return Err(SessionError::GameOver);
        }
        let roll = roll_prompt_dice(&mut self.rng);
        let visit = self.sheet.advance(&self.navigator, roll);
        let mut out = format!("Rolled {roll}: {}.\n", describe_movement(roll.delta()));
        out.push_str(&render_visit(&visit));
        Ok(out)
    }

    fn do_goto(&mut self, rest: &str) -> SessionResult<String> {
        let (number, entry) = split_word(rest);
        let number: u32 = number
            .parse()
            .map_err(|_| usage("goto <prompt number> [a|b|c]"))?;
        let entry = match entry {
            "" => None,
            letter => Some(
                crate::prompt::Variant::parse(letter)
                    .ok_or_else(|| usage("goto <prompt number> [a|b|c]"))?,
            ),
        };
        let visit = self.sheet.go_to(&self.navigator, number, entry);
        Ok(render_visit(&visit))
    }

    fn do_prompt(&self) -> String {
        let prompts = self.sheet.prompts();
        let variant = self.sheet.current_variant();
        format!(
            "Prompt {}{variant}: {}",
            prompts.current(),
            self.navigator.text(prompts.current(), variant)
        )
    }

    fn do_write(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(usage("write <journal text>"));
        }
        self.run(Action::WriteJournal {
            prompt: self.sheet.prompts().current(),
            variant: self.sheet.current_variant(),
            content: rest.to_string(),
        })
    }

    fn do_rename(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(usage("rename <new name>"));
        }
        self.run(Action::Rename {
            name: rest.to_string(),
        })
    }

    fn do_skill(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str = "skill add <name> | skill check|uncheck|lose <n>";
        let (sub, arg) = split_word(rest);
        let action = match sub.to_lowercase().as_str() {
            "add" if !arg.is_empty() => Action::AddSkill {
                name: arg.to_string(),
            },
            "check" => Action::CheckSkill {
                id: self.skill_at(arg)?,
            },
            "uncheck" => Action::UncheckSkill {
                id: self.skill_at(arg)?,
            },
            "lose" => Action::LoseSkill {
                id: self.skill_at(arg)?,
            },
            _ => return Err(usage(USAGE)),
        };
        self.run(action)
    }

    fn do_resource(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str = "resource add|add-stationary <name> | resource lose <n>";
        let (sub, arg) = split_word(rest);
        let action = match sub.to_lowercase().as_str() {
            "add" if !arg.is_empty() => Action::AddResource {
                name: arg.to_string(),
                stationary: false,
            },
            "add-stationary" if !arg.is_empty() => Action::AddResource {
                name: arg.to_string(),
                stationary: true,
            },
            "lose" => Action::LoseResource {
                id: self.resource_at(arg)?,
            },
            _ => return Err(usage(USAGE)),
        };
        self.run(action)
    }

    fn do_character(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str =
            "character add mortal|immortal <name> | character kill <n> | character relate <n> <relationship>";
        let (sub, arg) = split_word(rest);
        let action = match sub.to_lowercase().as_str() {
            "add" => {
                let (kind, name) = split_word(arg);
                let kind = CharacterKind::parse(kind).ok_or_else(|| usage(USAGE))?;
                if name.is_empty() {
                    return Err(usage(USAGE));
                }
                Action::AddCharacter {
                    kind,
                    name: name.to_string(),
                    description: String::new(),
                }
            }
            "kill" => Action::KillCharacter {
                id: self.character_at(arg)?,
            },
            "relate" => {
                let (n, relationship) = split_word(arg);
                if relationship.is_empty() {
                    return Err(usage(USAGE));
                }
                Action::SetRelationship {
                    id: self.character_at(n)?,
                    relationship: relationship.to_string(),
                }
            }
            _ => return Err(usage(USAGE)),
        };
        self.run(action)
    }

    fn do_mark(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str = "mark add <description> | mark remove <n>";
        let (sub, arg) = split_word(rest);
        let action = match sub.to_lowercase().as_str() {
            "add" if !arg.is_empty() => Action::AddMark {
                description: arg.to_string(),
            },
            "remove" => Action::RemoveMark {
                id: self.mark_at(arg)?,
            },
            _ => return Err(usage(USAGE)),
        };
        self.run(action)
    }

    fn do_memory(&mut self, rest: &str) -> SessionResult<String> {
        const USAGE: &str =
            "memory form <text> | memory write <n> <text> | memory strike|publish|diary <n>";
        let (sub, arg) = split_word(rest);
        let action = match sub.to_lowercase().as_str() {
            "form" if !arg.is_empty() => Action::FormMemory {
                text: arg.to_string(),
            },
            "write" => {
                let (n, text) = split_word(arg);
                if text.is_empty() {
                    return Err(usage(USAGE));
                }
                Action::WriteExperience {
                    index: self.memory_at(n)?,
                    text: text.to_string(),
                }
            }
            "strike" => Action::StrikeOutMemory {
                index: self.memory_at(arg)?,
            },
            "publish" => Action::PublishMemory {
                index: self.memory_at(arg)?,
            },
            "diary" => Action::MoveMemoryToDiary {
                index: self.memory_at(arg)?,
            },
            _ => return Err(usage(USAGE)),
        };
        self.run(action)
    }

    fn do_slot(&mut self, rest: &str) -> SessionResult<String> {
        let (sub, theme) = split_word(rest);
        match sub.to_lowercase().as_str() {
            "gain" => self.run(Action::AddMemorySlot {
                theme: non_empty(theme),
            }),
            "lose" => self.run(Action::LoseMemorySlot),
            _ => Err(usage("slot gain [theme] | slot lose")),
        }
    }

    fn do_diary(&mut self, rest: &str) -> SessionResult<String> {
        let (sub, description) = split_word(rest);
        match sub.to_lowercase().as_str() {
            "create" => self.run(Action::CreateDiary {
                description: non_empty(description),
            }),
            _ => Err(usage("diary create [description]")),
        }
    }

    fn do_status(&self) -> String {
        render_sheet(&self.sheet)
    }

    fn do_history(&self) -> String {
        let history = self.sheet.prompts().history();
        if history.is_empty() {
            return "No prompts visited yet.".to_string();
        }
        let mut out = String::from("Prompt history:\n");
        for (i, visit) in history.iter().enumerate() {
            out.push_str(&format!(
                "  {:>3}. {} -> {}{}",
                i + 1,
                visit.from,
                visit.to,
                visit.variant
            ));
            if let Some(roll) = visit.roll {
                out.push_str(&format!(" ({roll})"));
            } else if visit.manual {
                out.push_str(" (manual)");
            } else if let Some(delta) = visit.delta {
                out.push_str(&format!(" ({delta:+})"));
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    fn do_journal_show(&self) -> String {
        let journal = self.sheet.journal();
        if journal.is_empty() {
            return "The journal is empty.".to_string();
        }
        let skip = journal.len().saturating_sub(RECENT_JOURNAL_ENTRIES);
        let mut out = format!("Journal ({} entries):\n", journal.len());
        for entry in journal.entries().iter().skip(skip) {
            out.push_str(&format!("  [{}] {}\n", entry.label(), entry.content));
        }
        out.trim_end().to_string()
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        let title = self.sheet.biography.display_name();
        let journal = self.sheet.journal();
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(journal.export_markdown(title)),
            "text" | "txt" => Ok(journal.export_text(title)),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn skill_at(&self, arg: &str) -> SessionResult<TraitId> {
        let n = position(arg, self.sheet.ledger().skills().len(), "skill")?;
        Ok(self.sheet.ledger().skills()[n].id)
    }

    fn resource_at(&self, arg: &str) -> SessionResult<TraitId> {
        let n = position(arg, self.sheet.ledger().resources().len(), "resource")?;
        Ok(self.sheet.ledger().resources()[n].id)
    }

    fn character_at(&self, arg: &str) -> SessionResult<TraitId> {
        let n = position(arg, self.sheet.ledger().characters().len(), "character")?;
        Ok(self.sheet.ledger().characters()[n].id)
    }

    fn mark_at(&self, arg: &str) -> SessionResult<TraitId> {
        let n = position(arg, self.sheet.ledger().marks().len(), "mark")?;
        Ok(self.sheet.ledger().marks()[n].id)
    }

    fn memory_at(&self, arg: &str) -> SessionResult<usize> {
        position(arg, self.sheet.ledger().memories().len(), "memory")
    }
}

/// Render a prompt move for display.
fn render_visit(visit: &Visit) -> String {
    let mut out = String::new();
    if visit.spilled {
        out.push_str(&format!(
            "Prompt {} has been exhausted; moving on to prompt {}.\n",
            visit.to - 1,
            visit.to
        ));
    }
    out.push_str(&format!(
        "Prompt {}{}: {}",
        visit.to, visit.variant, visit.text
    ));
    out
}

/// Render the whole sheet as plain text.
pub fn render_sheet(sheet: &Sheet) -> String {
    let ledger = sheet.ledger();
    let summary = ledger.summary();
    let bio = &sheet.biography;

    let mut out = bio.display_name().to_string();
    if bio.current_name != bio.name && !bio.name.is_empty() {
        out.push_str(&format!(" (born {})", bio.name));
    }
    out.push_str(&format!(
        "\nPrompt {}{}",
        sheet.prompts().current(),
        sheet.current_variant()
    ));
    if let Some(reason) = &sheet.game_state().end_reason {
        out.push_str(&format!(" - THE END: {reason}"));
    }

    out.push_str(&format!(
        "\n\nMemories ({} of {} slots used, {} free):\n",
        summary.used_memory_slots, summary.total_memory_slots, summary.available_memory_slots
    ));
    for (i, memory) in ledger.memories().iter().enumerate() {
        let tag = match memory.state {
            MemoryState::Active => "",
            MemoryState::Diary => " [diary]",
            MemoryState::Published => " [published]",
            MemoryState::StruckOut => " [struck out]",
        };
        let theme = memory
            .theme
            .as_ref()
            .map(|t| format!(" ({t})"))
            .unwrap_or_default();
        let experiences: Vec<&str> = memory.filled_experiences().collect();
        let body = if experiences.is_empty() {
            "-".to_string()
        } else {
            experiences.join(" / ")
        };
        out.push_str(&format!("  {}.{tag}{theme} {body}\n", i + 1));
    }

    out.push_str("\nSkills:\n");
    for (i, skill) in ledger.skills().iter().enumerate() {
        let state = match (skill.state, skill.checked) {
            (TraitState::Lost, _) => " [lost]",
            (TraitState::Active, true) => " [checked]",
            (TraitState::Active, false) => "",
        };
        out.push_str(&format!("  {}. {}{state}\n", i + 1, skill.name));
    }

    out.push_str("\nResources:\n");
    for (i, resource) in ledger.resources().iter().enumerate() {
        let stationary = if resource.stationary { " (stationary)" } else { "" };
        let lost = if resource.is_active() { "" } else { " [lost]" };
        out.push_str(&format!(
            "  {}. {}{stationary}{lost}\n",
            i + 1,
            resource.name
        ));
    }

    out.push_str("\nCharacters:\n");
    for (i, character) in ledger.characters().iter().enumerate() {
        let relationship = if character.relationship.is_empty() {
            String::new()
        } else {
            format!(", {}", character.relationship)
        };
        let dead = if character.is_alive() { "" } else { " [dead]" };
        out.push_str(&format!(
            "  {}. {} ({}{relationship}){dead}\n",
            i + 1,
            character.name,
            character.kind
        ));
    }

    out.push_str("\nMarks:\n");
    for (i, mark) in ledger.marks().iter().enumerate() {
        let removed = if mark.is_active() { "" } else { " [removed]" };
        out.push_str(&format!("  {}. {}{removed}\n", i + 1, mark.description));
    }

    if ledger.diary().exists {
        out.push_str(&format!(
            "\nDiary: {} ({} of {} memories)\n",
            ledger.diary().description,
            summary.diary_memories,
            crate::ledger::MAX_DIARY_MEMORIES
        ));
    }
    out.push_str(&format!("\nJournal: {} entries", sheet.journal().len()));
    out
}

fn help(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "prompt" | "prompts" | "roll" => "\
Prompt Commands:
  roll                          Roll d10 - d6 and move to the next prompt
  goto <n> [a|b|c]              Jump to a prompt (explicit variant keeps visit counts)
  prompt                        Show the current prompt
  history                       Show every prompt visited

A prompt visited a fourth time passes you on to the next one."
            .to_string(),
        "memory" | "memories" | "slot" | "diary" => "\
Memory Commands:
  memory form <text>            Form a new memory (needs a free slot)
  memory write <n> <text>       Add an experience to memory n
  memory strike <n>             Forget memory n
  memory publish <n>            Publish memory n; it can never change again
  memory diary <n>              Record memory n in the diary (max 4)
  slot gain [theme]             Gain a memory slot with a fresh memory
  slot lose                     Permanently lose a memory slot
  diary create [description]    Create the diary"
            .to_string(),
        "trait" | "traits" | "skill" | "resource" | "character" | "mark" => "\
Trait Commands:
  skill add <name>              Add a skill
  skill check|uncheck|lose <n>  Check, uncheck or lose skill n
  resource add <name>           Add a resource
  resource add-stationary <name>  Add a stationary resource
  resource lose <n>             Lose resource n
  character add mortal|immortal <name>
  character kill <n>            A character dies
  character relate <n> <text>   Set a relationship
  mark add <description>        Add a mark
  mark remove <n>               Remove mark n"
            .to_string(),
        "journal" | "write" => "\
Journal Commands:
  write <text>                  Write a journal entry for the current prompt
  journal                       Show recent entries
  export [markdown|text]        Export the full journal"
            .to_string(),
        _ => "\
Vigil Commands:
  roll                          Move to the next prompt
  goto <n> [a|b|c]              Jump to a prompt
  prompt                        Show the current prompt
  write <text>                  Write a journal entry
  rename <name>                 Take a new name
  skill|resource|character|mark Manage traits
  memory|slot|diary             Manage memories
  end [reason]                  End the game
  sheet                         Show the character sheet
  history                       Show prompt history
  journal                       Show the journal
  export [markdown|text]        Export the journal
  yes | no                      Confirm or cancel a pending action
  help [topic]                  Show help (prompt, memory, trait, journal)
  quit                          Exit"
            .to_string(),
    }
}

/// Split off the first whitespace-separated word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

/// Parse a 1-based list position into an index.
fn position(arg: &str, len: usize, what: &str) -> SessionResult<usize> {
    let n: usize = arg.trim().parse().map_err(|_| {
        SessionError::InvalidChoice(format!("expected a {what} number, got '{arg}'"))
    })?;
    if n == 0 || n > len {
        return Err(SessionError::InvalidChoice(format!("no {what} numbered {n}")));
    }
    Ok(n - 1)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn usage(text: &str) -> SessionError {
    SessionError::InvalidChoice(format!("usage: {text}"))
}
