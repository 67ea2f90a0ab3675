use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::error::{LabError, LabResult};
use crate::utils::validate::{ensure_positive_count, parse_validated};

// Book is a catalog record. The id is assigned by the caller, usually from
// Catalog::next_identifier, and never by the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    id: u64,
    name: String,
    pages: u32,
}

// BookRecord is the unchecked shape of a book in a JSON seed
#[derive(Debug, Deserialize)]
pub(crate) struct BookRecord {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) pages: u32,
}

impl Book {
    pub fn new(id: u64, name: &str, pages: u32) -> LabResult<Self> {
        let id = ensure_positive_count(id, "book id")?;
        let pages = ensure_positive_count(pages, "page count")?;
        Ok(Self {
            id,
            name: name.to_string(),
            pages,
        })
    }

    pub fn from_json(json: &str) -> LabResult<Self> {
        parse_validated::<BookRecord, Self>(json)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl Identifiable for Book {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Book \"{}\"", self.name)
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = LabError;

    fn try_from(other: BookRecord) -> Result<Self, Self::Error> {
        Book::new(other.id, other.name.as_str(), other.pages)
    }
}
