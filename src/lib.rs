// src/lib.rs

pub mod config;
pub mod core;
pub mod integer_math;

pub use crate::config::{GcdConfig, SignPolicy};
pub use crate::core::euclid_integer::EuclidInteger;
pub use crate::core::gcd_calculator::GcdCalculator;
pub use crate::integer_math::gcd::{gcd, gcd_euclid, gcd_magnitude, gcd_normalized, EuclidSteps};
