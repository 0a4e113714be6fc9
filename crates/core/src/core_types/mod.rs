//! Core value types shared by every engine component

pub mod geo;
pub mod observation;
pub mod units;

pub use geo::GeoPoint;
pub use observation::WeatherObservation;
pub use units::{Celsius, Kelvin, Kilometers, KilometersPerHour, Percent};
