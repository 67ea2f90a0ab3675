use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::containers::domain::Guarded;
use crate::core::error::{LabError, LabResult};
use crate::utils::validate::{ensure_positive_count, parse_validated};

/// Notebook counts how many of its pages hold notes.
///
/// ```
/// use oop_labs::containers::domain::notebook::Notebook;
///
/// let mut notebook = Notebook::new(100, 20).unwrap();
/// assert_eq!(80, notebook.get_free_pages());
/// assert!(notebook.remove_note(30).is_err());
/// notebook.add_note(5).unwrap();
/// assert_eq!(75, notebook.get_free_pages());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NotebookRecord")]
pub struct Notebook {
    pages: u32,
    used_pages: u32,
}

#[derive(Debug, Deserialize)]
struct NotebookRecord {
    pages: u32,
    used_pages: u32,
}

impl Notebook {
    pub fn new(pages: u32, used_pages: u32) -> LabResult<Self> {
        let pages = ensure_positive_count(pages, "page count")?;
        if used_pages > pages {
            return Err(LabError::validation(
                format!("used pages {} exceed page count {}", used_pages, pages).as_str(),
                Some("over_capacity".to_string())));
        }
        Ok(Self { pages, used_pages })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<NotebookRecord, Self>(json)
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn used_pages(&self) -> u32 {
        self.used_pages
    }

    pub fn add_note(&mut self, pages_needed: u32) -> LabResult<()> {
        let pages_needed = ensure_positive_count(pages_needed, "pages needed")?;
        let used_pages = self.used_pages.checked_add(pages_needed)
            .filter(|used| *used <= self.pages)
            .ok_or_else(|| LabError::validation(
                format!("not enough free pages: {} free, {} needed", self.get_free_pages(), pages_needed).as_str(),
                Some("over_capacity".to_string())))?;
        self.used_pages = used_pages;
        debug!(pages_needed, used_pages, "note added");
        Ok(())
    }

    pub fn remove_note(&mut self, pages_to_remove: u32) -> LabResult<()> {
        let pages_to_remove = ensure_positive_count(pages_to_remove, "pages to remove")?;
        if pages_to_remove > self.used_pages {
            return Err(LabError::validation(
                format!("cannot free {} pages, only {} are used", pages_to_remove, self.used_pages).as_str(),
                Some("under_usage".to_string())));
        }
        self.used_pages -= pages_to_remove;
        debug!(pages_to_remove, used_pages = self.used_pages, "note removed");
        Ok(())
    }

    pub fn get_free_pages(&self) -> u32 {
        self.pages - self.used_pages
    }
}

impl Guarded for Notebook {
    type Amount = u32;

    fn usage(&self) -> u32 {
        self.used_pages
    }

    fn bound(&self) -> Option<u32> {
        Some(self.pages)
    }

    fn increase(&mut self, amount: u32) -> LabResult<()> {
        self.add_note(amount)
    }

    fn decrease(&mut self, amount: u32) -> LabResult<()> {
        self.remove_note(amount)
    }
}

impl TryFrom<NotebookRecord> for Notebook {
    type Error = LabError;

    fn try_from(other: NotebookRecord) -> Result<Self, Self::Error> {
        Notebook::new(other.pages, other.used_pages)
    }
}
