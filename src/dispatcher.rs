use raylib::prelude::*;
use tracing::{debug, warn};

use crate::assets::AssetStore;
use crate::constants::*;
use crate::deck::Deck;
use crate::handles::TimerSet;
use crate::renderers::{self, Renderer};
use crate::surface::Surface;

/// Owns the step pointer, the busy flag and the animation handle set, and
/// runs the transition that retires one step's visualization and activates
/// the next. Requests are debounced (last index in the window wins) and
/// dropped outright while a transition is settling; nothing is queued.
pub struct StepDispatcher {
    current: Option<usize>,
    renderer: Option<Box<dyn Renderer>>,
    timers: TimerSet,
    pending: Option<usize>,
    debounce_remaining: f32,
    busy: bool,
    settle_remaining: f32,
    transitions: u64,
}

impl StepDispatcher {
    pub fn new() -> Self {
        Self {
            current: None,
            renderer: None,
            timers: TimerSet::new(),
            pending: None,
            debounce_remaining: 0.0,
            busy: false,
            settle_remaining: 0.0,
            transitions: 0,
        }
    }

    pub fn current_step(&self) -> Option<usize> {
        self.current
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn active_renderer(&self) -> Option<&'static str> {
        self.renderer.as_ref().map(|r| r.name())
    }

    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    /// Handles in the set that belong to a step other than the current one.
    pub fn foreign_handle_count(&self) -> usize {
        match self.current {
            Some(step) => self.timers.foreign_count(step),
            None => self.timers.len(),
        }
    }

    /// Ask for `index` to become the active step. Fire-and-forget: duplicate
    /// requests for the active step are no-ops, requests during the busy
    /// window are dropped, and a burst inside the coalescing window collapses
    /// to a single transition for the last index requested.
    pub fn request_step(&mut self, index: usize) {
        if self.current == Some(index) {
            return;
        }
        if self.busy {
            debug!(index, "step request dropped, transition in progress");
            return;
        }
        self.pending = Some(index);
        self.debounce_remaining = DEBOUNCE_WINDOW;
    }

    pub fn update(&mut self, dt: f32, deck: &Deck, surface: &Surface) {
        self.timers.update(dt);

        if self.busy {
            self.settle_remaining -= dt;
            if self.settle_remaining <= 0.0 {
                self.busy = false;
            }
        }

        if self.pending.is_some() {
            self.debounce_remaining -= dt;
            if self.debounce_remaining <= 0.0 {
                if let Some(index) = self.pending.take() {
                    self.transition(index, deck, surface);
                }
            }
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.update(dt, &mut self.timers);
        }
    }

    // The transition runs synchronously and is never interleaved with
    // another: teardown of the old step strictly precedes setup of the new.
    fn transition(&mut self, index: usize, deck: &Deck, surface: &Surface) {
        // 1. cancel every handle the previous step registered
        if let Some(step) = self.current {
            self.timers.cancel_step(step);
        }
        // 2. halt the previous renderer's continuous machinery before its
        //    nodes go away; for all but the icon cloud this is a no-op
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.stop(&mut self.timers);
        }
        // 3+4. drop in-flight tweens along with the rendered content
        self.renderer = None;

        // 5. busy until the settle delay runs out
        self.busy = true;
        self.settle_remaining = SETTLE_DELAY;

        // 6. no slide record is a caller/data error, not a fatal one
        let Some(slide) = deck.slide(index) else {
            warn!(index, "no slide for requested step");
            self.busy = false;
            return;
        };

        // 7+8. move the pointer, build the matching renderer
        self.current = Some(index);
        self.renderer = renderers::build(slide, surface, &mut self.timers);
        self.transitions += 1;
        debug!(
            step = index,
            renderer = self.active_renderer().unwrap_or("none"),
            "step transition"
        );
        // 9. settle countdown happens in update()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, assets: &AssetStore) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.draw(d, surface, assets);
        }
    }
}

impl Default for StepDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
