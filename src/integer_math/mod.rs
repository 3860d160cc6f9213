// src/integer_math/mod.rs

pub mod gcd;
