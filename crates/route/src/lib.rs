//! Route façade crate: coverage filtering, landing selection, and passing times.

pub mod coverage;
pub mod flight;
pub mod passing;
pub mod plan;
pub mod selection;

pub use facade::*;

mod facade;
