// src/core/mod.rs

pub mod euclid_integer;
pub mod gcd_calculator;
pub mod logging;
