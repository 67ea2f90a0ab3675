use tracing::debug;
use crate::catalog::domain::Catalog;
use crate::catalog::domain::model::Book;
use crate::core::domain::Identifiable;
use crate::core::error::{LabError, LabResult};

/// Library keeps books in insertion order and hands out ids one past the last record.
///
/// ```
/// use oop_labs::catalog::domain::Catalog;
/// use oop_labs::catalog::domain::library::Library;
/// use oop_labs::catalog::domain::model::Book;
///
/// let empty = Library::new();
/// assert_eq!(1, empty.next_identifier());
///
/// let library = Library::with_books(vec![
///     Book::new(1, "test_name_1", 200).unwrap(),
///     Book::new(2, "test_name_2", 400).unwrap(),
/// ]);
/// assert_eq!(3, library.next_identifier());
/// assert_eq!(1, library.index_of(2).unwrap());
/// assert!(library.index_of(99).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self { books: vec![] }
    }

    // ids are expected to grow with position; this is not checked
    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        self.books.as_slice()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn not_found(id: u64) -> LabError {
        LabError::not_found(format!("book with id {} does not exist", id).as_str())
    }
}

impl Catalog for Library {
    fn next_identifier(&self) -> u64 {
        self.books.last().map_or(1, |book| book.id().saturating_add(1))
    }

    fn index_of(&self, id: u64) -> LabResult<usize> {
        self.books.iter()
            .position(|book| book.id() == id)
            .ok_or_else(|| Self::not_found(id))
    }

    fn find_book_by_id(&self, id: u64) -> LabResult<&Book> {
        self.books.iter()
            .find(|book| book.id() == id)
            .ok_or_else(|| Self::not_found(id))
    }

    fn add_book(&mut self, name: &str, pages: u32) -> LabResult<&Book> {
        let book = Book::new(self.next_identifier(), name, pages)?;
        let index = self.books.len();
        self.insert(book)?;
        Ok(&self.books[index])
    }

    fn insert(&mut self, book: Book) -> LabResult<()> {
        if self.books.iter().any(|existing| existing.id() == book.id()) {
            return Err(LabError::duplicate_key(
                format!("book with id {} already exists", book.id()).as_str()));
        }
        debug!(book_id = book.id(), name = book.name(), "book added");
        self.books.push(book);
        Ok(())
    }

    fn remove_book(&mut self, id: u64) -> LabResult<Book> {
        let index = self.index_of(id)?;
        let book = self.books.remove(index);
        debug!(book_id = id, "book removed");
        Ok(book)
    }
}
