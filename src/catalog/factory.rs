use crate::catalog::domain::library::Library;
use crate::catalog::domain::model::{Book, BookRecord};
use crate::core::error::LabResult;

// builds a library from a JSON array of `{ "id", "name", "pages" }` objects
pub fn create_library(seed_json: &str) -> LabResult<Library> {
    let records: Vec<BookRecord> = serde_json::from_str(seed_json)?;
    let books = records.into_iter()
        .map(Book::try_from)
        .collect::<LabResult<Vec<Book>>>()?;
    Ok(Library::with_books(books))
}

#[cfg(test)]
mod tests {
    use crate::catalog::domain::Catalog;
    use crate::catalog::factory::create_library;
    use crate::core::error::LabError;

    const BOOKS_DATABASE: &str = r#"[
        {"id": 1, "name": "test_name_1", "pages": 200},
        {"id": 2, "name": "test_name_2", "pages": 400}
    ]"#;

    #[test]
    fn test_should_create_library_from_seed() {
        let library = create_library(BOOKS_DATABASE).expect("should load seed");
        assert_eq!(2, library.len());
        assert_eq!(3, library.next_identifier());
        assert_eq!(0, library.index_of(1).expect("should find book"));
    }

    #[test]
    fn test_should_create_empty_library() {
        let library = create_library("[]").expect("should load empty seed");
        assert_eq!(1, library.next_identifier());
    }

    #[test]
    fn test_should_reject_bad_seeds() {
        assert!(matches!(create_library(r#"[{"id": 1, "name": "x", "pages": "many"}]"#), Err(LabError::TypeMismatch { .. })));
        assert!(matches!(create_library(r#"[{"id": 1, "name": "x"}]"#), Err(LabError::TypeMismatch { .. })));
        assert!(matches!(create_library(r#"[{"id": 1"#), Err(LabError::Serialization { .. })));
        assert!(matches!(create_library(r#"[{"id": 0, "name": "x", "pages": 1}]"#), Err(LabError::Validation { .. })));
    }
}
