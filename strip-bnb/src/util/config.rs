use anyhow::{Result, ensure};
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Duration;

///Configuration of the branch-and-bound search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BnbConfig {
    ///Maximum number of search nodes to explore. Unlimited if undefined
    #[serde(default)]
    pub node_limit: Option<u64>,
    ///Maximum wall-clock time of the search in seconds. Unlimited if undefined
    #[serde(default)]
    pub time_limit_sec: Option<f64>,
    ///Number of explored nodes between two consecutive clock reads
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,
    ///Only branch on the first unplaced item among items with identical dimensions
    #[serde(default)]
    pub break_symmetries: bool,
}

fn default_check_interval() -> u64 {
    1_000
}

impl BnbConfig {
    /// Checks the values a config file could get wrong.
    pub fn validate(&self) -> Result<()> {
        if let Some(sec) = self.time_limit_sec {
            ensure!(
                sec.is_finite() && sec >= 0.0,
                "time_limit_sec should be a finite, non-negative number of seconds, got {sec}"
            );
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit_sec {
            Some(sec) if sec.is_finite() && sec >= 0.0 => Some(Duration::from_secs_f64(sec)),
            Some(sec) => {
                warn!(
                    "[CONFIG] ignoring invalid time limit of {sec} seconds, the search is not time limited"
                );
                None
            }
            None => None,
        }
    }
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            time_limit_sec: None,
            check_interval: default_check_interval(),
            break_symmetries: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None; "no_limit")]
    #[test_case(Some(0.0); "zero")]
    #[test_case(Some(2.5); "positive")]
    fn valid_time_limit(time_limit_sec: Option<f64>) {
        let config = BnbConfig {
            time_limit_sec,
            ..BnbConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.time_limit(), time_limit_sec.map(Duration::from_secs_f64));
    }

    #[test_case(-1.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn invalid_time_limit(sec: f64) {
        let config = BnbConfig {
            time_limit_sec: Some(sec),
            ..BnbConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.time_limit(), None);
    }

    #[test]
    fn negative_time_limit_from_json_is_rejected() {
        let config: BnbConfig = serde_json::from_str(r#"{"time_limit_sec": -3.0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
