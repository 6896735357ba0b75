use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::deck::KpiCard;
use crate::handles::{Handle, TimerSet};
use crate::renderers::{FadeIn, Renderer, faded};
use crate::surface::Surface;

/// KPI counter cards. Card chrome fades in first; once a card's count timer
/// fires, its value eases from 0 to the target and lands exactly on it.
pub struct KpiRenderer {
    cards: Vec<CardAnim>,
}

struct CardAnim {
    label: String,
    target: f64,
    unit: String,
    prefix: String,
    accent: Color,
    emphasis: bool,
    chrome: FadeIn,
    count_start: Handle,
    count_timer: f32,
    shown: f64,
}

impl KpiRenderer {
    pub fn new(step: usize, cards: &[KpiCard], timers: &mut TimerSet) -> Self {
        let cards = cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let stagger = i as f32 * ITEM_STAGGER;
                CardAnim {
                    label: card.label.clone(),
                    target: card.value,
                    unit: card.unit.clone(),
                    prefix: card.prefix.clone(),
                    accent: card.accent(),
                    emphasis: card.emphasis,
                    chrome: FadeIn::new(step, stagger, timers),
                    count_start: timers.after(step, stagger + KPI_CHROME_LEAD),
                    count_timer: 0.0,
                    shown: 0.0,
                }
            })
            .collect();
        Self { cards }
    }
}

impl CardAnim {
    fn advance(&mut self, dt: f32, timers: &TimerSet) {
        self.chrome.update(dt, timers);
        if !timers.fired(self.count_start) || self.count_timer >= KPI_COUNT_DURATION {
            return;
        }
        self.count_timer += dt;
        let t = (self.count_timer / KPI_COUNT_DURATION).min(1.0);
        let eased = 1.0 - (1.0 - t as f64).powi(3);
        self.shown = self.target * eased;
        if self.count_timer >= KPI_COUNT_DURATION {
            self.shown = self.target;
        }
    }

    fn display(&self) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            crate::text::group_thousands(self.shown.round() as i64),
            self.unit
        )
    }
}

impl Renderer for KpiRenderer {
    fn name(&self) -> &'static str {
        "kpi-cards"
    }

    fn update(&mut self, dt: f32, timers: &mut TimerSet) {
        for card in &mut self.cards {
            card.advance(dt, timers);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, _assets: &AssetStore) {
        if self.cards.is_empty() {
            return;
        }
        let bounds = surface.bounds();
        let count = self.cards.len() as f32;
        let gap = 18.0;

        for (i, card) in self.cards.iter().enumerate() {
            // side by side on wide panels, stacked on compact ones
            let rect = if surface.is_compact() {
                let height = (bounds.height - gap * (count + 1.0)) / count;
                Rectangle::new(
                    bounds.x + gap,
                    bounds.y + gap + i as f32 * (height + gap),
                    bounds.width - gap * 2.0,
                    height,
                )
            } else {
                let width = (bounds.width - gap * (count + 1.0)) / count;
                Rectangle::new(
                    bounds.x + gap + i as f32 * (width + gap),
                    bounds.y + bounds.height * 0.28,
                    width,
                    bounds.height * 0.44,
                )
            };
            let alpha = card.chrome.alpha;

            d.draw_rectangle_rounded(rect, 0.12, 8, faded(Color::new(45, 52, 71, 255), alpha));
            if card.emphasis {
                // emphasized cards get an accent bar down the left edge
                d.draw_rectangle_rec(
                    Rectangle::new(rect.x, rect.y, 5.0, rect.height),
                    faded(card.accent, alpha),
                );
            }
            d.draw_text(
                &card.label,
                (rect.x + 16.0) as i32,
                (rect.y + 14.0) as i32,
                KPI_LABEL_FONT_SIZE,
                faded(Color::LIGHTGRAY, alpha),
            );
            let value_size = if card.emphasis {
                KPI_VALUE_FONT_SIZE + 10
            } else {
                KPI_VALUE_FONT_SIZE
            };
            d.draw_text(
                &card.display(),
                (rect.x + 16.0) as i32,
                (rect.y + rect.height * 0.45) as i32,
                value_size,
                faded(card.accent, alpha),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(value: f64) -> KpiCard {
        KpiCard {
            label: "Users".into(),
            value,
            unit: String::new(),
            prefix: String::new(),
            color: None,
            emphasis: false,
        }
    }

    fn tick(renderer: &mut KpiRenderer, timers: &mut TimerSet, dt: f32) {
        timers.update(dt);
        renderer.update(dt, timers);
    }

    #[test]
    fn counts_from_zero_monotonically_to_target() {
        let mut timers = TimerSet::new();
        let mut renderer = KpiRenderer::new(0, &[card(12500.0)], &mut timers);
        assert_eq!(renderer.cards[0].shown, 0.0);

        // chrome lead: nothing counts yet
        tick(&mut renderer, &mut timers, KPI_CHROME_LEAD * 0.5);
        assert_eq!(renderer.cards[0].shown, 0.0);

        let mut last = 0.0;
        let mut elapsed = 0.0;
        while elapsed < KPI_CHROME_LEAD + KPI_COUNT_DURATION + 0.5 {
            tick(&mut renderer, &mut timers, 1.0 / 60.0);
            elapsed += 1.0 / 60.0;
            let shown = renderer.cards[0].shown;
            assert!(shown >= last, "displayed value must never decrease");
            last = shown;
        }
        assert_eq!(renderer.cards[0].shown, 12500.0);
        assert_eq!(renderer.cards[0].display(), "12,500");
    }

    #[test]
    fn prefix_and_unit_frame_the_formatted_value() {
        let mut timers = TimerSet::new();
        let cards = vec![KpiCard {
            label: "Revenue".into(),
            value: 45000.0,
            unit: "+".into(),
            prefix: "$".into(),
            color: Some("#ff8000".into()),
            emphasis: true,
        }];
        let mut renderer = KpiRenderer::new(0, &cards, &mut timers);
        for _ in 0..300 {
            tick(&mut renderer, &mut timers, 1.0 / 60.0);
        }
        assert_eq!(renderer.cards[0].display(), "$45,000+");
    }

    #[test]
    fn later_cards_start_counting_later() {
        let mut timers = TimerSet::new();
        let mut renderer = KpiRenderer::new(0, &[card(100.0), card(100.0)], &mut timers);
        // advance to just past the first card's count start
        tick(&mut renderer, &mut timers, KPI_CHROME_LEAD + ITEM_STAGGER * 0.5);
        tick(&mut renderer, &mut timers, 0.05);
        assert!(renderer.cards[0].shown > 0.0);
        assert_eq!(renderer.cards[1].shown, 0.0);
    }
}
