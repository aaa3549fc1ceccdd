//! Simulation Timing
//!
//! Artificial latencies that make the offline demo feel like it talks to a
//! backend, and how long toasts stay on screen.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AgriError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub auth_delay_ms: u32,
    pub prediction_delay_ms: u32,
    pub soil_delay_ms: u32,
    pub chat_delay_min_ms: u32,
    pub chat_delay_max_ms: u32,
    pub success_toast_ms: u32,
    pub error_toast_ms: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            auth_delay_ms: 800,
            prediction_delay_ms: 1500,
            soil_delay_ms: 2000,
            chat_delay_min_ms: 1000,
            chat_delay_max_ms: 2000,
            success_toast_ms: 3000,
            error_toast_ms: 5000,
        }
    }
}

impl SimulationConfig {
    /// No delays at all
    pub const fn instant() -> Self {
        Self {
            auth_delay_ms: 0,
            prediction_delay_ms: 0,
            soil_delay_ms: 0,
            chat_delay_min_ms: 0,
            chat_delay_max_ms: 0,
            success_toast_ms: 3000,
            error_toast_ms: 5000,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.chat_delay_min_ms > self.chat_delay_max_ms {
            return Err(AgriError::Config(format!(
                "chat delay min ({}ms) exceeds max ({}ms)",
                self.chat_delay_min_ms, self.chat_delay_max_ms
            )));
        }
        Ok(())
    }

    /// Assistant "typing" time, uniform in `[min, max]`
    pub fn chat_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let (lo, hi) = if self.chat_delay_min_ms <= self.chat_delay_max_ms {
            (self.chat_delay_min_ms, self.chat_delay_max_ms)
        } else {
            (self.chat_delay_max_ms, self.chat_delay_min_ms)
        };
        rng.gen_range(lo..=hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.auth_delay_ms, 800);
        assert_eq!(config.prediction_delay_ms, 1500);
        assert_eq!(config.soil_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chat_delay_in_range() {
        let config = SimulationConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let delay = config.chat_delay(&mut rng);
            assert!((1000..=2000).contains(&delay));
        }
        assert_eq!(SimulationConfig::instant().chat_delay(&mut rng), 0);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = SimulationConfig {
            chat_delay_min_ms: 3000,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AgriError::Config(_))));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"auth_delay_ms": 10}"#).unwrap();
        assert_eq!(config.auth_delay_ms, 10);
        assert_eq!(config.error_toast_ms, 5000);
    }
}
