//! The diary: a single book that can hold a few memories outside the mind.

use serde::{Deserialize, Serialize};

use super::{Ledger, clean};
use crate::error::{LedgerError, LedgerResult};
use crate::event::LedgerEvent;

/// Description used when none is given.
pub const DEFAULT_DIARY_DESCRIPTION: &str = "A leather-bound journal";

/// The character's diary. Created at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diary {
    /// Whether the diary has been created.
    pub exists: bool,
    /// What it looks like.
    #[serde(default)]
    pub description: String,
}

impl Ledger {
    /// Create the diary, adding it to the resources as well.
    pub fn create_diary(&mut self, description: Option<&str>) -> LedgerResult<Option<LedgerEvent>> {
        if self.diary.exists {
            return Err(LedgerError::DiaryExists);
        }
        let description = description
            .and_then(clean)
            .unwrap_or_else(|| DEFAULT_DIARY_DESCRIPTION.to_string());

        let mut resource = super::Resource::new(format!("Diary: {description}"), false);
        resource.is_diary = true;
        self.resources.push(resource);
        self.diary = Diary {
            exists: true,
            description: description.clone(),
        };
        Ok(Some(LedgerEvent::DiaryCreated { description }))
    }
}
