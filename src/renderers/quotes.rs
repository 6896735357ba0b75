use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::deck::Quote;
use crate::handles::TimerSet;
use crate::renderers::{FadeIn, Renderer, faded};
use crate::surface::Surface;
use crate::text::{estimated_chars_per_line, wrap_estimated};

/// Chat bubbles stacked vertically, an author label over word-wrapped body
/// text, fading in one after the other. Wrapping uses the estimated character
/// width, not exact measurement.
pub struct QuoteBubblesRenderer {
    bubbles: Vec<Bubble>,
}

struct Bubble {
    author: String,
    lines: Vec<String>,
    fade: FadeIn,
}

impl QuoteBubblesRenderer {
    pub fn new(step: usize, quotes: &[Quote], surface: &Surface, timers: &mut TimerSet) -> Self {
        let bubble_width = surface.bounds().width * BUBBLE_WIDTH_FRAC;
        let budget =
            estimated_chars_per_line(bubble_width - BUBBLE_PADDING * 2.0, BUBBLE_FONT_SIZE);
        let bubbles = quotes
            .iter()
            .enumerate()
            .map(|(i, quote)| Bubble {
                author: quote.author.clone(),
                lines: wrap_estimated(&quote.text, budget),
                fade: FadeIn::new(step, i as f32 * ITEM_STAGGER * 2.0, timers),
            })
            .collect();
        Self { bubbles }
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.bubbles.len()
    }
}

impl Renderer for QuoteBubblesRenderer {
    fn name(&self) -> &'static str {
        "quote-bubbles"
    }

    fn update(&mut self, dt: f32, timers: &mut TimerSet) {
        for bubble in &mut self.bubbles {
            bubble.fade.update(dt, timers);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, _assets: &AssetStore) {
        let bounds = surface.bounds();
        let width = bounds.width * BUBBLE_WIDTH_FRAC;
        let line_height = BUBBLE_FONT_SIZE as f32 + 4.0;
        let mut y = bounds.y + bounds.height * 0.08;

        for (i, bubble) in self.bubbles.iter().enumerate() {
            let body_height = bubble.lines.len() as f32 * line_height;
            let height = body_height + line_height + BUBBLE_PADDING * 2.0;
            // alternate left/right like a chat thread
            let x = if i % 2 == 0 {
                bounds.x + bounds.width * 0.04
            } else {
                bounds.x + bounds.width - width - bounds.width * 0.04
            };
            let alpha = bubble.fade.alpha;

            d.draw_rectangle_rounded(
                Rectangle::new(x, y, width, height),
                0.25,
                8,
                faded(Color::new(45, 52, 71, 255), alpha),
            );
            d.draw_text(
                &bubble.author,
                (x + BUBBLE_PADDING) as i32,
                (y + BUBBLE_PADDING) as i32,
                BUBBLE_FONT_SIZE,
                faded(Color::GOLD, alpha),
            );
            for (line_no, line) in bubble.lines.iter().enumerate() {
                d.draw_text(
                    line,
                    (x + BUBBLE_PADDING) as i32,
                    (y + BUBBLE_PADDING + line_height * (line_no as f32 + 1.0)) as i32,
                    BUBBLE_FONT_SIZE,
                    faded(Color::RAYWHITE, alpha),
                );
            }
            y += height + 12.0;
        }
    }
}
