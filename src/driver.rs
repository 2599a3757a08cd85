//! Fixed-interval driver state, kept apart from terminal I/O.
//!
//! The binary polls keys and sleeps; everything it decides per tick lives here.
//! Game over is latched after an `update()` that spawned into the stack. A lateral
//! move can leave the falling piece over a `Fixed` cell in its own row, so
//! `Stage::is_end` is not consulted between ticks.

use std::time::Duration;

use crate::config::DriverConfig;
use crate::core::{RandomSource, SimpleRng, Stage, StageSnapshot};
use crate::types::Key;

pub struct Driver<R = SimpleRng> {
    stage: Stage<R>,
    config: DriverConfig,
    tick_ms: u32,
    game_over: bool,
}

impl Driver<SimpleRng> {
    /// Driver over a stage seeded from `config`
    pub fn from_config(config: DriverConfig) -> Self {
        let stage = Stage::with_seed(config.resolve_seed());
        Self::new(stage, config)
    }
}

impl<R: RandomSource> Driver<R> {
    pub fn new(stage: Stage<R>, config: DriverConfig) -> Self {
        Self {
            tick_ms: config.tick_ms,
            stage,
            config,
            game_over: false,
        }
    }

    /// Forward a key press; ignored once the game is over.
    pub fn press(&mut self, key: Key) {
        if !self.game_over {
            self.stage.input(key);
        }
    }

    /// Run one tick and return whether the game is over.
    ///
    /// A tick that locks a piece also shortens the interval.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return true;
        }

        self.stage.update();
        if self.stage.is_fix() {
            self.tick_ms = self.config.next_tick_ms(self.tick_ms);
            self.game_over = self.stage.is_end();
        }
        self.game_over
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Current interval between ticks
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    pub fn stage(&self) -> &Stage<R> {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage<R> {
        &mut self.stage
    }

    /// Snapshot for the view; `is_end` reflects the latched game-over flag.
    pub fn snapshot_into(&self, out: &mut StageSnapshot) {
        self.stage.snapshot_into(out);
        out.is_end = self.game_over;
    }
}
