use rand::Rng;
use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::handles::TimerSet;
use crate::renderers::{FadeIn, Renderer, faded};
use crate::surface::Surface;

/// Photo cards in one of three arrangements: randomized scatter, a 1-3 column
/// grid, or a single centered image. Every card fades in with a stagger
/// proportional to its index.
pub struct CollageRenderer {
    name: &'static str,
    items: Vec<CollageItem>,
}

struct CollageItem {
    image: String,
    pos: Vector2,
    rotation: f32,
    width_frac: f32, // card width as a fraction of the panel width
    fade: FadeIn,
}

impl CollageRenderer {
    pub fn scattered(
        step: usize,
        images: &[String],
        surface: &Surface,
        timers: &mut TimerSet,
    ) -> Self {
        let mut rng = rand::rng();
        let margin = surface.scatter_margin();
        let width_base = if surface.is_compact() { 0.30 } else { 0.24 };
        let items = images
            .iter()
            .enumerate()
            .map(|(i, image)| CollageItem {
                image: image.clone(),
                pos: Vector2::new(
                    rng.random_range(margin..1.0 - margin),
                    rng.random_range(margin..1.0 - margin),
                ),
                rotation: rng.random_range(-12.0..12.0),
                width_frac: width_base * rng.random_range(0.85..1.2),
                fade: FadeIn::new(step, i as f32 * ITEM_STAGGER, timers),
            })
            .collect();
        Self {
            name: "scattered-images",
            items,
        }
    }

    pub fn grid(
        step: usize,
        images: &[String],
        columns: Option<usize>,
        surface: &Surface,
        timers: &mut TimerSet,
    ) -> Self {
        let columns = grid_columns(images.len(), columns, surface);
        let rows = images.len().div_ceil(columns.max(1));
        let col_step = 1.0 / columns.max(1) as f32;
        let row_step = 1.0 / rows.max(1) as f32;
        let items = images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let col = i % columns.max(1);
                let row = i / columns.max(1);
                CollageItem {
                    image: image.clone(),
                    pos: Vector2::new(
                        col_step * (col as f32 + 0.5),
                        row_step * (row as f32 + 0.5),
                    ),
                    rotation: 0.0,
                    width_frac: col_step * 0.82,
                    fade: FadeIn::new(step, i as f32 * ITEM_STAGGER, timers),
                }
            })
            .collect();
        Self {
            name: "image-grid",
            items,
        }
    }

    pub fn single(step: usize, image: &str, timers: &mut TimerSet) -> Self {
        Self {
            name: "image-single",
            items: vec![CollageItem {
                image: image.to_string(),
                pos: Vector2::new(0.5, 0.5),
                rotation: 0.0,
                width_frac: 0.6,
                fade: FadeIn::new(step, 0.0, timers),
            }],
        }
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        self.items.len()
    }
}

/// 1-3 columns: explicit hint wins (clamped), otherwise the panel width
/// decides; never more columns than images.
fn grid_columns(image_count: usize, hint: Option<usize>, surface: &Surface) -> usize {
    let auto = if surface.is_compact() {
        1
    } else if surface.bounds().width < 1000.0 {
        2
    } else {
        3
    };
    hint.unwrap_or(auto).clamp(1, 3).min(image_count.max(1))
}

impl Renderer for CollageRenderer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn update(&mut self, dt: f32, timers: &mut TimerSet) {
        for item in &mut self.items {
            item.fade.update(dt, timers);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, assets: &AssetStore) {
        for item in &self.items {
            let center = surface.point(item.pos);
            let width = item.width_frac * surface.bounds().width;
            let height = width * 0.75;
            let alpha = item.fade.alpha;

            // drop shadow, then the card face
            let shadow = Rectangle::new(center.x + 5.0, center.y + 6.0, width, height);
            d.draw_rectangle_pro(
                shadow,
                Vector2::new(width * 0.5, height * 0.5),
                item.rotation,
                faded(Color::BLACK, alpha * 0.35),
            );
            let card = Rectangle::new(center.x, center.y, width, height);
            d.draw_rectangle_pro(
                card,
                Vector2::new(width * 0.5, height * 0.5),
                item.rotation,
                faded(Color::RAYWHITE, alpha),
            );

            let inset = width * 0.05;
            let inner_w = width - inset * 2.0;
            let inner_h = height - inset * 2.0;
            match assets.texture(&item.image) {
                Some(texture) => {
                    d.draw_texture_pro(
                        texture,
                        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                        Rectangle::new(center.x, center.y, inner_w, inner_h),
                        Vector2::new(inner_w * 0.5, inner_h * 0.5),
                        item.rotation,
                        faded(Color::WHITE, alpha),
                    );
                }
                None => {
                    // image missing on disk: keep the card, mute the face
                    d.draw_rectangle_pro(
                        Rectangle::new(center.x, center.y, inner_w, inner_h),
                        Vector2::new(inner_w * 0.5, inner_h * 0.5),
                        item.rotation,
                        faded(Color::LIGHTGRAY, alpha),
                    );
                }
            }
        }
    }
}
