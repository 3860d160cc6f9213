// src/core/gcd_calculator.rs

use log::{debug, log_enabled, trace, warn, Level};

use crate::config::{GcdConfig, SignPolicy};
use crate::core::euclid_integer::EuclidInteger;
use crate::integer_math::gcd::{gcd_euclid, gcd_normalized, EuclidSteps};

/// Euclidean GCD with a configured sign policy and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GcdCalculator {
    sign_policy: SignPolicy,
}

impl GcdCalculator {
    pub fn new(sign_policy: SignPolicy) -> Self {
        GcdCalculator { sign_policy }
    }

    pub fn from_config(config: &GcdConfig) -> Self {
        Self::new(config.sign_policy)
    }

    pub fn sign_policy(&self) -> SignPolicy {
        self.sign_policy
    }

    /// Compute gcd(a, b) and apply the sign policy.
    ///
    /// `Literal` never fails. `Normalized` fails when the result is `T::MIN`.
    pub fn compute<T: EuclidInteger>(&self, a: T, b: T) -> Result<T, String> {
        if log_enabled!(Level::Trace) {
            for (step, (x, y)) in EuclidSteps::new(a, b).enumerate() {
                trace!("gcd<{}> step {}: ({}, {})", T::width_name(), step, x, y);
            }
        }

        let result = match self.sign_policy {
            SignPolicy::Literal => Ok(gcd_euclid(a, b)),
            SignPolicy::Normalized => gcd_normalized(a, b),
        };

        match &result {
            Ok(g) => debug!("gcd<{}>({}, {}) = {} [{:?}]", T::width_name(), a, b, g, self.sign_policy),
            Err(e) => warn!("{}", e),
        }

        result
    }
}
