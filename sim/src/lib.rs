//! Drawn-track coaster core
//!
//! Raw points are smoothed into a rail path (`curve`), the path is sampled by
//! arc length (`path`), and carts are integrated along it (`physics`) until
//! they either keep riding or fly off (`detach`).
//! `Simulation` ties the pieces together behind a `tick(dt)` call.

extern crate nalgebra as na;

pub mod curve;
pub mod detach;
pub mod my_float;
pub mod path;
pub mod physics;
pub mod simulation;
pub mod track;


pub use coaster_config as config;
pub use simulation::Simulation;
