//! Building a ready-to-play sheet from character creation answers.

use serde::{Deserialize, Serialize};

use super::{Biography, Sheet};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::characters::CREATOR;
use crate::ledger::{
    BASE_MEMORY_SLOTS, Character, CharacterKind, Ledger, Mark, Resource, Skill, clean,
};

/// Minimum mortals, skills and resources a new character starts with.
pub const MIN_STARTING_TRAITS: usize = 3;

/// Description given to the creator when none is supplied.
pub const DEFAULT_CREATOR_DESCRIPTION: &str = "The creature who cursed you with unlife";

/// A character introduced during creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    /// Name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A resource chosen during creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResource {
    /// Name.
    pub name: String,
    /// Tied to a place.
    #[serde(default)]
    pub stationary: bool,
}

/// Everything decided while creating a vampire.
///
/// `experiences` holds the opening experience of each of the five starting
/// memories: mortal life first, the transformation last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCreation {
    /// Mortal name.
    pub mortal_name: String,
    /// Where the character comes from.
    #[serde(default)]
    pub origin: String,
    /// When the character was born.
    #[serde(default)]
    pub era: String,
    /// One opening experience per starting memory.
    pub experiences: Vec<String>,
    /// Mortals from the character's life.
    pub mortals: Vec<NewCharacter>,
    /// Skills from mortal life.
    pub skills: Vec<String>,
    /// Resources from mortal life.
    pub resources: Vec<NewResource>,
    /// The immortal who turned the character.
    pub immortal: NewCharacter,
    /// The mark left by the transformation.
    pub mark: String,
}

impl CharacterCreation {
    /// Check every required answer, reporting the first gap.
    pub fn validate(&self) -> LedgerResult<()> {
        let invalid = |reason: &str| Err(LedgerError::InvalidCreation(reason.to_string()));

        if clean(&self.mortal_name).is_none() {
            return invalid("a mortal name is required");
        }
        if self.experiences.len() != BASE_MEMORY_SLOTS as usize
            || self.experiences.iter().any(|e| clean(e).is_none())
        {
            return invalid("exactly five opening experiences are required");
        }
        if self.mortals.len() < MIN_STARTING_TRAITS
            || self.mortals.iter().any(|m| clean(&m.name).is_none())
        {
            return invalid("at least three named mortals are required");
        }
        if self.skills.len() < MIN_STARTING_TRAITS
            || self.skills.iter().any(|s| clean(s).is_none())
        {
            return invalid("at least three named skills are required");
        }
        if self.resources.len() < MIN_STARTING_TRAITS
            || self.resources.iter().any(|r| clean(&r.name).is_none())
        {
            return invalid("at least three named resources are required");
        }
        if clean(&self.immortal.name).is_none() {
            return invalid("the immortal who turned you needs a name");
        }
        if clean(&self.mark).is_none() {
            return invalid("a mark is required");
        }
        Ok(())
    }
}

impl Sheet {
    /// Build a sheet from validated creation answers.
    ///
    /// The prompt log starts over at prompt 1.
    pub fn from_creation(creation: &CharacterCreation) -> LedgerResult<Self> {
        creation.validate()?;
        let name = creation.mortal_name.trim().to_string();

        let mut biography = Biography::named(name.clone());
        biography.origin = clean(&creation.origin).unwrap_or_else(|| format!("{name}'s origin"));
        biography.era = creation.era.trim().to_string();

        let mut ledger = Ledger::new();
        for (memory, text) in ledger.memories.iter_mut().zip(&creation.experiences) {
            memory.experiences[0] = text.trim().to_string();
        }
        ledger.skills = creation.skills.iter().map(|s| Skill::new(s.trim())).collect();
        ledger.resources = creation
            .resources
            .iter()
            .map(|r| Resource::new(r.name.trim(), r.stationary))
            .collect();

        ledger.characters = creation
            .mortals
            .iter()
            .map(|m| {
                let mut mortal = Character::new(m.name.trim(), CharacterKind::Mortal);
                mortal.description = m.description.trim().to_string();
                mortal
            })
            .collect();
        let mut creator = Character::new(creation.immortal.name.trim(), CharacterKind::Immortal);
        creator.description = clean(&creation.immortal.description)
            .unwrap_or_else(|| DEFAULT_CREATOR_DESCRIPTION.to_string());
        creator.relationship = CREATOR.to_string();
        ledger.characters.push(creator);

        ledger.marks = vec![Mark::new(creation.mark.trim())];

        tracing::debug!(%name, "character created");
        Ok(Self {
            biography,
            ledger,
            ..Self::new(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creation() -> CharacterCreation {
        CharacterCreation {
            mortal_name: "Mircea".to_string(),
            origin: String::new(),
            era: "1450s".to_string(),
            experiences: vec![
                "I was a ferryman's son.".to_string(),
                "I learned to fence.".to_string(),
                "I married Ana.".to_string(),
                "I buried my father.".to_string(),
                "A stranger drank from me.".to_string(),
            ],
            mortals: ["Ana", "Radu", "Old Ion"]
                .into_iter()
                .map(|name| NewCharacter {
                    name: name.to_string(),
                    description: String::new(),
                })
                .collect(),
            skills: vec!["Fencing".into(), "Rowing".into(), "Prayer".into()],
            resources: vec![
                NewResource {
                    name: "The ferry".into(),
                    stationary: true,
                },
                NewResource {
                    name: "A silver cross".into(),
                    stationary: false,
                },
                NewResource {
                    name: "My father's boots".into(),
                    stationary: false,
                },
            ],
            immortal: NewCharacter {
                name: "The Stranger".to_string(),
                description: String::new(),
            },
            mark: "My shadow lags behind me".to_string(),
        }
    }

    #[test]
    fn builds_full_sheet() {
        let sheet = Sheet::from_creation(&creation()).unwrap();
        assert_eq!(sheet.biography.name, "Mircea");
        assert_eq!(sheet.biography.current_name, "Mircea");
        assert_eq!(sheet.biography.origin, "Mircea's origin");
        assert_eq!(sheet.biography.era, "1450s");

        let ledger = sheet.ledger();
        assert_eq!(ledger.experience_count(), 5);
        assert_eq!(ledger.memories()[4].experiences[0], "A stranger drank from me.");
        assert_eq!(ledger.skills().len(), 3);
        assert_eq!(ledger.resources().len(), 3);
        assert!(ledger.resources()[0].stationary);
        assert_eq!(ledger.living_mortals().count(), 3);
        assert_eq!(ledger.marks().len(), 1);

        let creator = ledger.living_immortals().next().unwrap();
        assert_eq!(creator.relationship, CREATOR);
        assert_eq!(creator.description, DEFAULT_CREATOR_DESCRIPTION);

        assert_eq!(sheet.prompts().current(), 1);
        assert!(sheet.prompts().history().is_empty());
        assert!(!sheet.needs_creation());
    }

    #[test]
    fn keeps_given_origin() {
        let mut c = creation();
        c.origin = "Wallachia".to_string();
        let sheet = Sheet::from_creation(&c).unwrap();
        assert_eq!(sheet.biography.origin, "Wallachia");
    }

    #[test]
    fn rejects_missing_name() {
        let mut c = creation();
        c.mortal_name = "  ".to_string();
        assert!(matches!(
            Sheet::from_creation(&c),
            Err(LedgerError::InvalidCreation(_))
        ));
    }

    #[test]
    fn rejects_too_few_traits() {
        let mut c = creation();
        c.skills.pop();
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("skills"));

        let mut c = creation();
        c.mortals.truncate(2);
        assert!(c.validate().unwrap_err().to_string().contains("mortals"));
    }

    #[test]
    fn rejects_blank_entries() {
        let mut c = creation();
        c.experiences[2] = String::new();
        assert!(c.validate().is_err());

        let mut c = creation();
        c.resources[1].name = " ".to_string();
        assert!(c.validate().is_err());

        let mut c = creation();
        c.mark = String::new();
        assert!(c.validate().is_err());
    }

    #[test]
    fn parses_from_json() {
        let json = r#"{
            "mortalName": "Mircea",
            "experiences": ["a", "b", "c", "d", "e"],
            "mortals": [{"name": "Ana"}, {"name": "Radu"}, {"name": "Ion"}],
            "skills": ["Fencing", "Rowing", "Prayer"],
            "resources": [{"name": "Ferry", "stationary": true}, {"name": "Cross"}, {"name": "Boots"}],
            "immortal": {"name": "The Stranger"},
            "mark": "Cold skin"
        }"#;
        let c: CharacterCreation = serde_json::from_str(json).unwrap();
        assert!(c.validate().is_ok());
    }
}
