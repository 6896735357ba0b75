use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::deck::ChartPoint;
use crate::handles::{Handle, TimerSet};
use crate::renderers::{FadeIn, Renderer, faded};
use crate::surface::Surface;
use crate::text::group_thousands;

/// Dual-series line chart: a solid historical line revealed left to right,
/// then a dashed projection revealed the same way once the historical reveal
/// completes. The Y axis is capped so early, small values stay legible;
/// values above the cap plot at the cap and carry their true value as a text
/// annotation.
pub struct LineChartRenderer {
    label: String,
    historical: Vec<ChartPoint>,
    projection: Vec<ChartPoint>,
    y_cap: f64,
    year_min: i32,
    year_max: i32,
    hist_timer: f32,
    proj_start: Handle,
    proj_timer: f32,
    hist_fades: Vec<FadeIn>,
    proj_fades: Vec<FadeIn>,
}

impl LineChartRenderer {
    pub fn new(
        step: usize,
        label: &str,
        historical: &[ChartPoint],
        projection: &[ChartPoint],
        y_cap: f64,
        timers: &mut TimerSet,
    ) -> Self {
        let years = historical.iter().chain(projection.iter()).map(|p| p.year);
        let year_min = years.clone().min().unwrap_or(0);
        let year_max = years.max().unwrap_or(1);

        // each point fades in as its line's reveal sweeps past it
        let hist_fades = stagger_fades(step, historical.len(), 0.0, timers);
        let proj_fades = stagger_fades(step, projection.len(), CHART_REVEAL_DURATION, timers);

        Self {
            label: label.to_string(),
            historical: historical.to_vec(),
            projection: projection.to_vec(),
            y_cap,
            year_min,
            year_max,
            hist_timer: 0.0,
            proj_start: timers.after(step, CHART_REVEAL_DURATION),
            proj_timer: 0.0,
            hist_fades,
            proj_fades,
        }
    }

    fn plot_rect(surface: &Surface) -> Rectangle {
        let b = surface.bounds();
        Rectangle::new(
            b.x + b.width * 0.10,
            b.y + b.height * 0.14,
            b.width * 0.82,
            b.height * 0.70,
        )
    }

    fn point_at(&self, point: &ChartPoint, plot: Rectangle) -> Vector2 {
        let x = x_fraction(point.year, self.year_min, self.year_max);
        let y = y_fraction(point.value, self.y_cap);
        Vector2::new(plot.x + x * plot.width, plot.y + plot.height * (1.0 - y))
    }

    fn draw_series(
        &self,
        d: &mut RaylibDrawHandle,
        plot: Rectangle,
        points: &[ChartPoint],
        fades: &[FadeIn],
        reveal: f32,
        dashed: bool,
        color: Color,
    ) {
        if points.len() >= 2 && reveal > 0.0 {
            let span = (points.len() - 1) as f32 * reveal.min(1.0);
            let full = span.floor() as usize;
            for i in 0..full {
                let a = self.point_at(&points[i], plot);
                let b = self.point_at(&points[i + 1], plot);
                draw_segment(d, a, b, dashed, color);
            }
            let partial = span - full as f32;
            if full < points.len() - 1 && partial > 0.0 {
                let a = self.point_at(&points[full], plot);
                let b = self.point_at(&points[full + 1], plot);
                let tip = Vector2::new(
                    a.x + (b.x - a.x) * partial,
                    a.y + (b.y - a.y) * partial,
                );
                draw_segment(d, a, tip, dashed, color);
            }
        }
        for (point, fade) in points.iter().zip(fades) {
            let p = self.point_at(point, plot);
            d.draw_circle_v(p, CHART_POINT_RADIUS, faded(color, fade.alpha));
            if let Some(annotation) = annotation_for(point, self.y_cap) {
                d.draw_text(
                    &annotation,
                    (p.x - 20.0) as i32,
                    (p.y - 22.0) as i32,
                    16,
                    faded(Color::RAYWHITE, fade.alpha),
                );
            }
        }
    }
}

fn stagger_fades(step: usize, count: usize, base: f32, timers: &mut TimerSet) -> Vec<FadeIn> {
    (0..count)
        .map(|i| {
            let along = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            FadeIn::new(step, base + along * CHART_REVEAL_DURATION, timers)
        })
        .collect()
}

fn x_fraction(year: i32, year_min: i32, year_max: i32) -> f32 {
    if year_max == year_min {
        return 0.0;
    }
    (year - year_min) as f32 / (year_max - year_min) as f32
}

/// Height fraction 0..1 from the plot floor; values above the cap clamp to 1.
fn y_fraction(value: f64, cap: f64) -> f32 {
    (value.min(cap).max(0.0) / cap) as f32
}

/// A point clamped by the cap keeps its true value as a text annotation.
fn annotation_for(point: &ChartPoint, cap: f64) -> Option<String> {
    if point.value > cap {
        Some(group_thousands(point.value.round() as i64))
    } else {
        None
    }
}

fn draw_segment(d: &mut RaylibDrawHandle, a: Vector2, b: Vector2, dashed: bool, color: Color) {
    if !dashed {
        d.draw_line_ex(a, b, 3.0, color);
        return;
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length <= f32::EPSILON {
        return;
    }
    let (ux, uy) = (dx / length, dy / length);
    let mut travelled = 0.0;
    while travelled < length {
        let end = (travelled + CHART_DASH_LENGTH).min(length);
        d.draw_line_ex(
            Vector2::new(a.x + ux * travelled, a.y + uy * travelled),
            Vector2::new(a.x + ux * end, a.y + uy * end),
            3.0,
            color,
        );
        travelled = end + CHART_DASH_GAP;
    }
}

impl Renderer for LineChartRenderer {
    fn name(&self) -> &'static str {
        "line-chart"
    }

    fn update(&mut self, dt: f32, timers: &mut TimerSet) {
        if self.hist_timer < CHART_REVEAL_DURATION {
            self.hist_timer += dt;
        }
        if timers.fired(self.proj_start) && self.proj_timer < CHART_REVEAL_DURATION {
            self.proj_timer += dt;
        }
        for fade in self.hist_fades.iter_mut().chain(self.proj_fades.iter_mut()) {
            fade.update(dt, timers);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, _assets: &AssetStore) {
        let plot = Self::plot_rect(surface);
        let axis = Color::new(120, 128, 148, 255);

        d.draw_text(
            &self.label,
            (plot.x) as i32,
            (surface.bounds().y + surface.bounds().height * 0.05) as i32,
            20,
            Color::RAYWHITE,
        );
        // axes and the year extremes
        d.draw_line_ex(
            Vector2::new(plot.x, plot.y),
            Vector2::new(plot.x, plot.y + plot.height),
            1.0,
            axis,
        );
        d.draw_line_ex(
            Vector2::new(plot.x, plot.y + plot.height),
            Vector2::new(plot.x + plot.width, plot.y + plot.height),
            1.0,
            axis,
        );
        d.draw_text(
            &self.year_min.to_string(),
            plot.x as i32,
            (plot.y + plot.height + 8.0) as i32,
            16,
            axis,
        );
        d.draw_text(
            &self.year_max.to_string(),
            (plot.x + plot.width - 36.0) as i32,
            (plot.y + plot.height + 8.0) as i32,
            16,
            axis,
        );

        let hist_reveal = self.hist_timer / CHART_REVEAL_DURATION;
        let proj_reveal = self.proj_timer / CHART_REVEAL_DURATION;
        self.draw_series(
            d,
            plot,
            &self.historical,
            &self.hist_fades,
            hist_reveal,
            false,
            Color::SKYBLUE,
        );
        self.draw_series(
            d,
            plot,
            &self.projection,
            &self.proj_fades,
            proj_reveal,
            true,
            Color::ORANGE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[(i32, f64)]) -> Vec<ChartPoint> {
        values
            .iter()
            .map(|&(year, value)| ChartPoint { year, value })
            .collect()
    }

    #[test]
    fn values_above_the_cap_plot_at_the_cap() {
        assert_eq!(y_fraction(250.0, 100.0), y_fraction(100.0, 100.0));
        assert_eq!(y_fraction(100.0, 100.0), 1.0);
        assert!(y_fraction(50.0, 100.0) < 1.0);
        assert_eq!(y_fraction(-5.0, 100.0), 0.0);
    }

    #[test]
    fn clamped_points_are_annotated_with_their_true_value() {
        let over = ChartPoint { year: 2030, value: 1200.0 };
        let under = ChartPoint { year: 2020, value: 80.0 };
        assert_eq!(annotation_for(&over, 100.0).as_deref(), Some("1,200"));
        assert_eq!(annotation_for(&under, 100.0), None);
    }

    #[test]
    fn x_axis_spans_both_series() {
        let mut timers = TimerSet::new();
        let chart = LineChartRenderer::new(
            0,
            "growth",
            &points(&[(1990, 1.0), (2020, 80.0)]),
            &points(&[(2020, 80.0), (2050, 4000.0)]),
            100.0,
            &mut timers,
        );
        assert_eq!(chart.year_min, 1990);
        assert_eq!(chart.year_max, 2050);
        assert_eq!(x_fraction(1990, chart.year_min, chart.year_max), 0.0);
        assert_eq!(x_fraction(2050, chart.year_min, chart.year_max), 1.0);
    }

    #[test]
    fn projection_reveal_waits_for_the_historical_reveal() {
        let mut timers = TimerSet::new();
        let mut chart = LineChartRenderer::new(
            0,
            "",
            &points(&[(2000, 10.0), (2010, 20.0)]),
            &points(&[(2010, 20.0), (2020, 40.0)]),
            100.0,
            &mut timers,
        );
        let dt = 1.0 / 60.0;
        let mut elapsed = 0.0;
        while elapsed < CHART_REVEAL_DURATION - 0.1 {
            timers.update(dt);
            chart.update(dt, &mut timers);
            elapsed += dt;
        }
        assert!(chart.hist_timer > 0.0);
        assert_eq!(chart.proj_timer, 0.0);
        while elapsed < CHART_REVEAL_DURATION + 0.5 {
            timers.update(dt);
            chart.update(dt, &mut timers);
            elapsed += dt;
        }
        assert!(chart.proj_timer > 0.0);
    }

    #[test]
    fn empty_series_build_without_handles_firing_anything() {
        let mut timers = TimerSet::new();
        let mut chart = LineChartRenderer::new(0, "", &[], &[], 100.0, &mut timers);
        timers.update(5.0);
        chart.update(5.0, &mut timers);
        assert!(chart.hist_fades.is_empty());
        assert!(chart.proj_fades.is_empty());
    }
}
