mod chart;
mod collage;
mod dots;
mod hero;
mod icon_cloud;
mod kpi;
mod quotes;

use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::deck::{Slide, SlideContent};
use crate::handles::{Handle, TimerSet};
use crate::surface::Surface;

pub use icon_cloud::IconCloudRenderer;

/// One visualization, self-contained: built from slide content, advanced by
/// the frame loop, drawn into the surface. Renderers never touch the step
/// pointer. `stop` halts continuous machinery; only the icon cloud has any.
pub trait Renderer {
    fn name(&self) -> &'static str;
    fn update(&mut self, dt: f32, timers: &mut TimerSet);
    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, assets: &AssetStore);
    fn stop(&mut self, _timers: &mut TimerSet) {}
}

/// Renderer for a slide's content. Exhaustive over the closed catalog;
/// narrative-only slides (`list`, `text`) leave the panel empty.
pub fn build(
    slide: &Slide,
    surface: &Surface,
    timers: &mut TimerSet,
) -> Option<Box<dyn Renderer>> {
    let step = slide.step;
    match &slide.content {
        SlideContent::Hero => Some(Box::new(hero::HeroRenderer::new(step, surface, timers))),
        SlideContent::List { .. } | SlideContent::Text => None,
        SlideContent::IconCloud {
            icons,
            count,
            icon_size,
        } => Some(Box::new(IconCloudRenderer::new(
            step, icons, *count, *icon_size, timers,
        ))),
        SlideContent::KpiCards { cards } => {
            Some(Box::new(kpi::KpiRenderer::new(step, cards, timers)))
        }
        SlideContent::LineChart {
            label,
            historical,
            projection,
            y_cap,
        } => Some(Box::new(chart::LineChartRenderer::new(
            step, label, historical, projection, *y_cap, timers,
        ))),
        SlideContent::ScatteredImages { images } => Some(Box::new(
            collage::CollageRenderer::scattered(step, images, surface, timers),
        )),
        SlideContent::ImageGrid { images, columns } => Some(Box::new(
            collage::CollageRenderer::grid(step, images, *columns, surface, timers),
        )),
        SlideContent::ImageSingle { image } => {
            Some(Box::new(collage::CollageRenderer::single(step, image, timers)))
        }
        SlideContent::TextWithDots => Some(Box::new(dots::DotsRenderer::new())),
        SlideContent::QuoteBubbles { quotes } => Some(Box::new(
            quotes::QuoteBubblesRenderer::new(step, quotes, surface, timers),
        )),
    }
}

/// Delayed fade-in shared by the staggered renderers. Holds at zero until its
/// handle fires, then eases to full opacity.
pub(crate) struct FadeIn {
    delay: Handle,
    timer: f32,
    pub alpha: f32,
}

impl FadeIn {
    pub fn new(step: usize, delay: f32, timers: &mut TimerSet) -> Self {
        Self {
            delay: timers.after(step, delay),
            timer: 0.0,
            alpha: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32, timers: &TimerSet) {
        if !timers.fired(self.delay) || self.timer >= FADE_DURATION {
            return;
        }
        self.timer += dt;
        let t = (self.timer / FADE_DURATION).min(1.0);
        self.alpha = 1.0 - (1.0 - t).powi(3); // easeOutCubic
    }

    pub fn done(&self) -> bool {
        self.timer >= FADE_DURATION
    }
}

pub(crate) fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{KpiCard, Quote};

    fn surface() -> Surface {
        Surface::new(Rectangle::new(0.0, 0.0, 800.0, 600.0))
    }

    fn slide(step: usize, content: SlideContent) -> Slide {
        Slide {
            step,
            title: String::new(),
            text: String::new(),
            content,
        }
    }

    #[test]
    fn narrative_only_slides_have_no_renderer() {
        let mut timers = TimerSet::new();
        let s = surface();
        assert!(build(&slide(0, SlideContent::Text), &s, &mut timers).is_none());
        let list = SlideContent::List { items: vec!["a".into()] };
        assert!(build(&slide(0, list), &s, &mut timers).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn every_visual_type_builds_its_renderer() {
        let mut timers = TimerSet::new();
        let s = surface();
        let cases: Vec<(SlideContent, &str)> = vec![
            (SlideContent::Hero, "hero"),
            (
                SlideContent::IconCloud {
                    icons: vec!["a".into()],
                    count: 8,
                    icon_size: 24.0,
                },
                "icon-cloud",
            ),
            (
                SlideContent::KpiCards {
                    cards: vec![KpiCard {
                        label: "Users".into(),
                        value: 10.0,
                        unit: String::new(),
                        prefix: String::new(),
                        color: None,
                        emphasis: false,
                    }],
                },
                "kpi-cards",
            ),
            (
                SlideContent::LineChart {
                    label: String::new(),
                    historical: vec![],
                    projection: vec![],
                    y_cap: 100.0,
                },
                "line-chart",
            ),
            (
                SlideContent::ScatteredImages { images: vec!["a.jpg".into()] },
                "scattered-images",
            ),
            (
                SlideContent::ImageGrid {
                    images: vec!["a.jpg".into()],
                    columns: None,
                },
                "image-grid",
            ),
            (
                SlideContent::ImageSingle { image: "a.jpg".into() },
                "image-single",
            ),
            (SlideContent::TextWithDots, "text-with-dots"),
            (
                SlideContent::QuoteBubbles {
                    quotes: vec![Quote {
                        author: "a".into(),
                        text: "hello there".into(),
                    }],
                },
                "quote-bubbles",
            ),
        ];
        for (content, expected) in cases {
            let renderer = build(&slide(3, content), &s, &mut timers).unwrap();
            assert_eq!(renderer.name(), expected);
        }
    }

    #[test]
    fn fade_in_waits_for_its_delay() {
        let mut timers = TimerSet::new();
        let mut fade = FadeIn::new(0, 0.2, &mut timers);
        timers.update(0.1);
        fade.update(0.1, &timers);
        assert_eq!(fade.alpha, 0.0);
        timers.update(0.15);
        for _ in 0..60 {
            fade.update(FADE_DURATION / 30.0, &timers);
        }
        assert!(fade.done());
        assert!((fade.alpha - 1.0).abs() < 1e-4);
    }
}
