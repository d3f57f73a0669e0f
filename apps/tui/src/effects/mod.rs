//! TachyonFX effects integration for the Folio TUI.
//!
//! Drives the one-shot section reveals and the compact-menu transitions.

use std::time::Duration;

use ratatui::prelude::*;
use tachyonfx::{EffectManager, EffectTimer, Interpolation};

pub mod menu_animations;
pub mod reveal;

/// Wrapper around the TachyonFX effect manager with an app-side cap.
pub struct AppEffectManager {
    manager: EffectManager<()>,
    /// Maximum concurrent effects to prevent performance issues
    max_effects: usize,
    /// Count of effects currently managed (the 0.21 `EffectManager` exposes no
    /// counter, so we track it here alongside the manager).
    active: usize,
}

impl AppEffectManager {
    pub fn new() -> Self {
        Self {
            manager: EffectManager::default(),
            max_effects: 12,
            active: 0,
        }
    }

    /// Processes all active effects with the given delta time.
    pub fn process_effects(&mut self, delta: Duration, buffer: &mut Buffer, area: Rect) {
        self.manager.process_effects(delta.into(), buffer, area);
        // Completed effects are dropped inside the manager; reconcile our count
        // once everything has drained.
        if !self.manager.is_running() {
            self.active = 0;
        }
    }

    /// Adds an effect unless the cap is already reached.
    pub fn add_effect(&mut self, effect: tachyonfx::Effect) {
        if self.active >= self.max_effects {
            return;
        }
        self.manager.add_effect(effect);
        self.active += 1;
    }

    /// Returns the number of active effects.
    pub fn active_effect_count(&self) -> usize {
        self.active
    }

    /// Clears all effects.
    pub fn clear(&mut self) {
        self.manager = EffectManager::default();
        self.active = 0;
    }
}

impl Default for AppEffectManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a timer with interpolation.
pub fn create_timer(duration_ms: u64, interpolation: Interpolation) -> EffectTimer {
    EffectTimer::from_ms(duration_ms as u32, interpolation)
}
