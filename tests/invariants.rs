use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use oop_labs::catalog::domain::Catalog;
use oop_labs::catalog::factory::create_library;
use oop_labs::containers::domain::Guarded;
use oop_labs::containers::domain::bank_account::BankAccount;
use oop_labs::containers::domain::notebook::Notebook;
use oop_labs::containers::domain::trunk::Trunk;
use oop_labs::core::domain::Identifiable;
use oop_labs::core::error::LabError;
use oop_labs::vehicles::domain::Vehicle;
use oop_labs::vehicles::domain::car::Car;
use oop_labs::vehicles::domain::model::Chassis;
use oop_labs::vehicles::domain::truck::Truck;

const STEPS: usize = 2_000;

// Applies random increases and decreases and checks that the container stays within its
// bound after each one and that a failed call changed nothing.
fn exercise<G, F>(container: &mut G, rng: &mut StdRng, mut amount: F)
    where G: Guarded + Clone + PartialEq + std::fmt::Debug,
          G::Amount: Default + std::fmt::Debug,
          F: FnMut(&mut StdRng) -> G::Amount {
    for _ in 0..STEPS {
        let before = container.clone();
        let value = amount(rng);
        let res = if rng.gen_bool(0.5) {
            container.increase(value)
        } else {
            container.decrease(value)
        };
        if res.is_err() {
            assert_eq!(before, *container);
        }
        assert!(container.usage() >= G::Amount::default());
        if let Some(bound) = container.bound() {
            assert!(container.usage() <= bound);
        }
    }
}

#[test]
fn test_should_keep_balance_non_negative() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut account = BankAccount::new("John Doe", 1000.0).expect("should build account");
    exercise(&mut account, &mut rng, |rng| rng.gen_range(-100.0..600.0));
}

#[test]
fn test_should_keep_trunk_within_capacity() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut trunk = Trunk::new(500.0, 100.0).expect("should build trunk");
    exercise(&mut trunk, &mut rng, |rng| rng.gen_range(-50.0..300.0));
}

#[test]
fn test_should_keep_notebook_within_pages() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut notebook = Notebook::new(100, 20).expect("should build notebook");
    exercise(&mut notebook, &mut rng, |rng| rng.gen_range(0..40));
}

#[test]
fn test_should_reject_non_positive_amounts_everywhere() {
    let mut account = BankAccount::new("John Doe", 10.0).expect("should build account");
    let mut trunk = Trunk::new(50.0, 10.0).expect("should build trunk");
    let mut notebook = Notebook::new(50, 10).expect("should build notebook");
    for amount in [0.0, -1.0] {
        assert!(account.increase(amount).expect_err("should reject").is_domain());
        assert!(account.decrease(amount).expect_err("should reject").is_domain());
        assert!(trunk.increase(amount).expect_err("should reject").is_domain());
        assert!(trunk.decrease(amount).expect_err("should reject").is_domain());
    }
    assert!(notebook.increase(0).is_err());
    assert!(notebook.decrease(0).is_err());
    assert_eq!(10.0, account.usage());
    assert_eq!(10.0, trunk.usage());
    assert_eq!(10, notebook.usage());
}

#[test]
fn test_should_drive_any_vehicle() {
    let mut fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Chassis::new("Toyota", "Corolla", 2020, 15000.5).expect("vehicle")),
        Box::new(Car::new("Toyota", "Corolla", 2020, 299950.0, 4).expect("car")),
        Box::new(Truck::new("Volvo", "FH16", 2018, 250000.0, 20.5).expect("truck")),
    ];
    let results: Vec<bool> = fleet.iter_mut().map(|vehicle| vehicle.drive(100.0).is_ok()).collect();
    assert_eq!(vec![true, false, true], results);
    let rendered: Vec<String> = fleet.iter().map(|vehicle| vehicle.to_string()).collect();
    assert_eq!(vec![
        "Toyota Corolla, 2020, mileage: 15100.5 km".to_string(),
        "Toyota Corolla, 2020, mileage: 299950.0 km, doors: 4".to_string(),
        "Volvo FH16, 2018, mileage: 250100.0 km, max load: 20.5 t".to_string(),
    ], rendered);
}

#[test]
fn test_should_grow_catalog_sequentially() {
    let mut library = create_library(r#"[{"id": 1, "name": "test_name_1", "pages": 200}]"#).expect("should load seed");
    for n in 0..5u32 {
        let book = library.add_book(format!("volume {}", n).as_str(), 10 + n).expect("should add book");
        assert_eq!(u64::from(n) + 2, book.id());
    }
    assert_eq!(7, library.next_identifier());
    let ids: Vec<u64> = library.books().iter().map(|book| book.id()).collect();
    assert_eq!(vec![1, 2, 3, 4, 5, 6], ids);
    assert!(matches!(library.index_of(42), Err(LabError::NotFound { .. })));
}
