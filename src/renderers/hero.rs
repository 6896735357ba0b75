use rand::Rng;
use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::handles::{Handle, TimerSet};
use crate::renderers::{FadeIn, Renderer, faded};
use crate::surface::Surface;

/// Emblem glyphs scattered at randomized positions and sizes. Each fades in
/// with a stagger, then a single one-shot drift eases every glyph to a nearby
/// randomized position.
pub struct HeroRenderer {
    floaters: Vec<Floater>,
    drift_start: Handle,
    drift_timer: f32,
}

struct Floater {
    glyph: &'static str,
    pos: Vector2,
    size: f32,
    fade: FadeIn,
    tween_drift_x: ease::Tween,
    tween_drift_y: ease::Tween,
}

impl HeroRenderer {
    pub fn new(step: usize, surface: &Surface, timers: &mut TimerSet) -> Self {
        let mut rng = rand::rng();
        let size_scale = if surface.is_compact() { 0.7 } else { 1.0 };

        let mut floaters = Vec::with_capacity(HERO_COUNT);
        for (i, glyph) in HERO_GLYPHS.iter().copied().cycle().take(HERO_COUNT).enumerate() {
            let home = Vector2::new(
                rng.random_range(0.08..0.92),
                rng.random_range(0.08..0.92),
            );
            let target = Vector2::new(
                (home.x + rng.random_range(-0.06..0.06)).clamp(0.05, 0.95),
                (home.y + rng.random_range(-0.06..0.06)).clamp(0.05, 0.95),
            );
            floaters.push(Floater {
                glyph,
                pos: home,
                size: rng.random_range(28.0..64.0) * size_scale,
                fade: FadeIn::new(step, i as f32 * HERO_STAGGER, timers),
                tween_drift_x: ease::Tween::new(ease::sine_in_out, home.x, target.x, HERO_DRIFT_DURATION),
                tween_drift_y: ease::Tween::new(ease::sine_in_out, home.y, target.y, HERO_DRIFT_DURATION),
            });
        }

        Self {
            floaters,
            drift_start: timers.after(step, HERO_DRIFT_DELAY),
            drift_timer: 0.0,
        }
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.floaters.len()
    }
}

impl Renderer for HeroRenderer {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn update(&mut self, dt: f32, timers: &mut TimerSet) {
        for floater in &mut self.floaters {
            floater.fade.update(dt, timers);
        }
        if timers.fired(self.drift_start) && self.drift_timer < HERO_DRIFT_DURATION {
            self.drift_timer += dt;
            for floater in &mut self.floaters {
                floater.pos.x = floater.tween_drift_x.apply(dt);
                floater.pos.y = floater.tween_drift_y.apply(dt);
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, _assets: &AssetStore) {
        for floater in &self.floaters {
            let p = surface.point(floater.pos);
            let half = floater.size * CHAR_WIDTH_RATIO * 0.5;
            d.draw_text(
                floater.glyph,
                (p.x - half) as i32,
                (p.y - floater.size * 0.5) as i32,
                floater.size as i32,
                faded(Color::GOLD, floater.fade.alpha),
            );
        }
    }
}
