use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::handles::TimerSet;
use crate::renderers::{Renderer, faded};
use crate::surface::Surface;

/// Three dots pulsing opacity in a repeating stagger. A loading motif only;
/// nothing is actually being waited on.
pub struct DotsRenderer {
    clock: f32,
}

impl DotsRenderer {
    pub fn new() -> Self {
        Self { clock: 0.0 }
    }
}

fn dot_alpha(clock: f32, index: usize) -> f32 {
    let phase = clock * DOT_PULSE_SPEED - index as f32 * DOT_PHASE_OFFSET;
    0.25 + 0.75 * (0.5 + 0.5 * phase.sin())
}

impl Renderer for DotsRenderer {
    fn name(&self) -> &'static str {
        "text-with-dots"
    }

    fn update(&mut self, dt: f32, _timers: &mut TimerSet) {
        self.clock += dt;
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, _assets: &AssetStore) {
        let center = surface.center();
        for i in 0..3 {
            let x = center.x + (i as f32 - 1.0) * DOT_GAP;
            d.draw_circle_v(
                Vector2::new(x, center.y),
                DOT_RADIUS,
                faded(Color::RAYWHITE, dot_alpha(self.clock, i)),
            );
        }
    }
}
