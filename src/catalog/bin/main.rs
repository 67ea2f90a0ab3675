use tracing::{info, warn};
use oop_labs::catalog::domain::Catalog;
use oop_labs::catalog::domain::library::Library;
use oop_labs::catalog::factory::create_library;
use oop_labs::core::domain::Configuration;
use oop_labs::core::error::LabError;
use oop_labs::utils::logging::setup_tracing;

const BOOKS_DATABASE: &str = r#"[
    {"id": 1, "name": "test_name_1", "pages": 200},
    {"id": 2, "name": "test_name_2", "pages": 400}
]"#;

fn main() -> Result<(), LabError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let empty_library = Library::new();
    info!(next_id = empty_library.next_identifier(), "empty library");

    let mut library = create_library(BOOKS_DATABASE)?;
    info!(books = library.len(), next_id = library.next_identifier(), "seeded library");
    info!(book_id = 1, index = library.index_of(1)?, "located book");

    let added = library.add_book("test_name_3", 150)?;
    info!(book = %added, "added book");

    match library.index_of(99) {
        Ok(index) => info!(index, "located book"),
        Err(err) => warn!(error = %err, "lookup failed"),
    }
    Ok(())
}
