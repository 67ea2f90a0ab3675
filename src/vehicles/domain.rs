use std::fmt::Display;
use crate::core::error::LabResult;
use crate::vehicles::domain::model::Chassis;

pub mod car;
pub mod model;
pub mod truck;

// Vehicle is the capability shared by every kind of vehicle: it renders itself and it can
// be driven. Kind-specific operations such as Truck::load_cargo stay off this trait.
pub trait Vehicle: Display + Send + Sync {
    fn chassis(&self) -> &Chassis;

    // adds `distance` km to the mileage, or fails without touching it
    fn drive(&mut self, distance: f64) -> LabResult<()>;

    fn mileage(&self) -> f64 {
        self.chassis().mileage()
    }
}
