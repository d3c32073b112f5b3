//! Data models for the NutriKids backend.
//!
//! Field names follow the bundled food document and the mobile client's expectations.

mod food;
mod meal;
mod quiz;

pub use food::*;
pub use meal::*;
pub use quiz::*;
