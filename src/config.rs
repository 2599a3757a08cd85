//! Driver configuration.
//!
//! The engine has no clock; the binary owns the tick interval and its ramp.
//! Defaults come from `tui_stage_types` and can be overridden from the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `STAGE_TICK_MS` | 300 | Initial interval between `update()` calls |
//! | `STAGE_TICK_STEP_MS` | 1 | Interval reduction per locked piece |
//! | `STAGE_MIN_TICK_MS` | 50 | Interval floor |
//! | `STAGE_SEED` | clock | Seed for piece selection |

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::{INITIAL_TICK_MS, MIN_TICK_MS, TICK_STEP_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub tick_ms: u32,
    pub tick_step_ms: u32,
    pub min_tick_ms: u32,
    /// Fixed seed; `None` derives one from the clock
    pub seed: Option<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_ms: INITIAL_TICK_MS,
            tick_step_ms: TICK_STEP_MS,
            min_tick_ms: MIN_TICK_MS,
            seed: None,
        }
    }
}

impl DriverConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults; values that do not parse are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let tick_ms = parse_var(&lookup, "STAGE_TICK_MS")?.unwrap_or(defaults.tick_ms);
        let tick_step_ms =
            parse_var(&lookup, "STAGE_TICK_STEP_MS")?.unwrap_or(defaults.tick_step_ms);
        let min_tick_ms = parse_var(&lookup, "STAGE_MIN_TICK_MS")?.unwrap_or(defaults.min_tick_ms);
        let seed = parse_var(&lookup, "STAGE_SEED")?;

        if tick_ms == 0 || min_tick_ms == 0 {
            return Err(anyhow!("config: tick intervals must be at least 1ms"));
        }
        if min_tick_ms > tick_ms {
            return Err(anyhow!(
                "config: STAGE_MIN_TICK_MS ({}) exceeds STAGE_TICK_MS ({})",
                min_tick_ms,
                tick_ms
            ));
        }

        Ok(Self {
            tick_ms,
            tick_step_ms,
            min_tick_ms,
            seed,
        })
    }

    /// The configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Interval after one more piece locked, never below the floor
    pub fn next_tick_ms(&self, current_ms: u32) -> u32 {
        current_ms
            .saturating_sub(self.tick_step_ms)
            .max(self.min_tick_ms)
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<u32>> {
    let raw = match lookup(name) {
        Some(v) => v,
        None => return Ok(None),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| anyhow!("config: invalid {} value: {}", name, raw))
}
