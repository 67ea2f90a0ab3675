use tracing::{info, warn};
use oop_labs::core::domain::Configuration;
use oop_labs::core::error::LabError;
use oop_labs::utils::logging::setup_tracing;
use oop_labs::vehicles::domain::Vehicle;
use oop_labs::vehicles::domain::car::Car;
use oop_labs::vehicles::domain::model::Chassis;
use oop_labs::vehicles::domain::truck::Truck;

fn main() -> Result<(), LabError> {
    let config = Configuration::from_env()?;
    setup_tracing(&config);

    let truck = Truck::new("Volvo", "FH16", 2018, 250000.0, 20.5)?;
    truck.load_cargo(15.0)?;
    if let Err(err) = truck.load_cargo(25.0) {
        warn!(error = %err, "cargo rejected");
    }

    let mut fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Chassis::new("Toyota", "Corolla", 2020, 15000.5)?),
        Box::new(Car::with_config(&config, "Toyota", "Corolla", 2020, 299950.0, 4)?),
        Box::new(truck),
    ];
    for vehicle in fleet.iter_mut() {
        match vehicle.drive(100.0) {
            Ok(()) => info!(vehicle = %vehicle, "drove 100 km"),
            Err(err) => warn!(vehicle = %vehicle, error = %err, "drive rejected"),
        }
    }
    Ok(())
}
