pub mod library;
pub mod model;

use crate::catalog::domain::model::Book;
use crate::core::error::LabResult;

// Catalog abstracts an ordered collection of uniquely identified books
pub trait Catalog {
    fn next_identifier(&self) -> u64;
    fn index_of(&self, id: u64) -> LabResult<usize>;
    fn find_book_by_id(&self, id: u64) -> LabResult<&Book>;
    fn add_book(&mut self, name: &str, pages: u32) -> LabResult<&Book>;
    fn insert(&mut self, book: Book) -> LabResult<()>;
    fn remove_book(&mut self, id: u64) -> LabResult<Book>;
}
