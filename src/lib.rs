pub mod catalog;
pub mod containers;
pub mod core;
pub mod utils;
pub mod vehicles;
