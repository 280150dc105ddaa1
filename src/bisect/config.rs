//! Continuous-driver configuration.

/// Configuration for the continuous (real-valued) bisection driver.
///
/// The termination tolerance has no universally sensible value — spacing
/// problems tolerate 1e-6 where calibration problems need 1e-12 — so
/// `epsilon` is a required constructor argument rather than a default.
///
/// # Examples
///
/// ```
/// use u_bisect::bisect::RealBisectConfig;
///
/// let config = RealBisectConfig::new(1e-9).with_max_iterations(128);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealBisectConfig {
    /// Termination tolerance: the search stops once the interval width
    /// drops below this.
    pub epsilon: f64,

    /// Hard cap on bisection steps. Guards termination when `epsilon` is
    /// below the floating-point resolution of the interval.
    pub max_iterations: usize,
}

impl RealBisectConfig {
    /// Creates a configuration with the caller's tolerance.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            max_iterations: 256,
        }
    }

    /// Sets the bisection step cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}
