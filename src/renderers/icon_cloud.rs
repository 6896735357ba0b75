use rand::Rng;
use raylib::prelude::*;

use crate::assets::AssetStore;
use crate::constants::*;
use crate::handles::{Handle, TimerSet};
use crate::renderers::{Renderer, faded};
use crate::surface::Surface;

/// Force-directed glyph cloud. The glyph set is replicated up to the target
/// node count; a continuously running simulation combines mutual repulsion,
/// centering and collision avoidance, and an interval timer injects small
/// random velocity kicks so the cloud never settles. The only renderer with
/// unbounded continuous motion, so the only one whose `stop` does real work.
pub struct IconCloudRenderer {
    nodes: Vec<Node>,
    perturb: Handle,
    running: bool,
}

struct Node {
    glyph: String,
    pos: Vector2,
    vel: Vector2,
    size: f32,
    radius: f32,
    alpha: f32,
}

impl IconCloudRenderer {
    pub fn new(
        step: usize,
        icons: &[String],
        count: usize,
        icon_size: f32,
        timers: &mut TimerSet,
    ) -> Self {
        let mut rng = rand::rng();
        let count = if icons.is_empty() { 0 } else { count };

        let mut nodes = Vec::with_capacity(count);
        for glyph in icons.iter().cycle().take(count) {
            let size = icon_size * rng.random_range(0.6..1.4);
            nodes.push(Node {
                glyph: glyph.clone(),
                pos: Vector2::new(
                    0.5 + rng.random_range(-0.25..0.25),
                    0.5 + rng.random_range(-0.25..0.25),
                ),
                vel: Vector2::new(0.0, 0.0),
                size,
                radius: size / CLOUD_REF_EXTENT,
                alpha: rng.random_range(0.45..1.0),
            });
        }

        Self {
            nodes,
            perturb: timers.every(step, CLOUD_PERTURB_INTERVAL),
            running: true,
        }
    }

    /// Halts the simulation tick and the perturbation timer. After this
    /// returns, no perturbation fires and no node moves.
    pub fn halt(&mut self, timers: &mut TimerSet) {
        self.running = false;
        timers.cancel(self.perturb);
    }

    fn step_simulation(&mut self, dt: f32) {
        let count = self.nodes.len();
        // centering pull toward the middle of the surface
        for node in &mut self.nodes {
            node.vel.x += (0.5 - node.pos.x) * CLOUD_CENTER_PULL * dt;
            node.vel.y += (0.5 - node.pos.y) * CLOUD_CENTER_PULL * dt;
        }
        // pairwise repulsion and collision avoidance
        for i in 0..count {
            for j in (i + 1)..count {
                let (left, right) = self.nodes.split_at_mut(j);
                let a = &mut left[i];
                let b = &mut right[0];
                let dx = a.pos.x - b.pos.x;
                let dy = a.pos.y - b.pos.y;
                let dist_sq = (dx * dx + dy * dy).max(1e-5);
                let dist = dist_sq.sqrt();
                let (ux, uy) = (dx / dist, dy / dist);

                let push = CLOUD_REPULSION * dt / dist_sq;
                a.vel.x += ux * push;
                a.vel.y += uy * push;
                b.vel.x -= ux * push;
                b.vel.y -= uy * push;

                let min_dist = a.radius + b.radius;
                if dist < min_dist {
                    let overlap = (min_dist - dist) * 0.5;
                    a.pos.x += ux * overlap;
                    a.pos.y += uy * overlap;
                    b.pos.x -= ux * overlap;
                    b.pos.y -= uy * overlap;
                }
            }
        }
        // integrate with drag, keep nodes inside the margins
        let drag = (1.0 - CLOUD_DRAG * dt).clamp(0.0, 1.0);
        for node in &mut self.nodes {
            node.vel.x *= drag;
            node.vel.y *= drag;
            node.pos.x += node.vel.x * dt;
            node.pos.y += node.vel.y * dt;
            if node.pos.x < CLOUD_MARGIN || node.pos.x > 1.0 - CLOUD_MARGIN {
                node.pos.x = node.pos.x.clamp(CLOUD_MARGIN, 1.0 - CLOUD_MARGIN);
                node.vel.x = -node.vel.x * 0.5;
            }
            if node.pos.y < CLOUD_MARGIN || node.pos.y > 1.0 - CLOUD_MARGIN {
                node.pos.y = node.pos.y.clamp(CLOUD_MARGIN, 1.0 - CLOUD_MARGIN);
                node.vel.y = -node.vel.y * 0.5;
            }
        }
    }

    fn perturb_nodes(&mut self) {
        let mut rng = rand::rng();
        for node in &mut self.nodes {
            node.vel.x += rng.random_range(-CLOUD_PERTURB_KICK..CLOUD_PERTURB_KICK);
            node.vel.y += rng.random_range(-CLOUD_PERTURB_KICK..CLOUD_PERTURB_KICK);
        }
    }

    #[cfg(test)]
    fn positions(&self) -> Vec<(f32, f32)> {
        self.nodes.iter().map(|n| (n.pos.x, n.pos.y)).collect()
    }
}

impl Renderer for IconCloudRenderer {
    fn name(&self) -> &'static str {
        "icon-cloud"
    }

    fn update(&mut self, dt: f32, timers: &mut TimerSet) {
        if !self.running {
            return;
        }
        for _ in 0..timers.take_ticks(self.perturb) {
            self.perturb_nodes();
        }
        self.step_simulation(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, surface: &Surface, _assets: &AssetStore) {
        for node in &self.nodes {
            let p = surface.point(node.pos);
            d.draw_text(
                &node.glyph,
                (p.x - node.size * CHAR_WIDTH_RATIO * 0.5) as i32,
                (p.y - node.size * 0.5) as i32,
                node.size as i32,
                faded(Color::RAYWHITE, node.alpha),
            );
        }
    }

    fn stop(&mut self, timers: &mut TimerSet) {
        self.halt(timers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn replicates_glyphs_to_the_target_count() {
        let mut timers = TimerSet::new();
        let cloud = IconCloudRenderer::new(2, &icons(), 10, 24.0, &mut timers);
        assert_eq!(cloud.nodes.len(), 10);
        assert_eq!(cloud.nodes[0].glyph, "a");
        assert_eq!(cloud.nodes[3].glyph, "a");
        assert_eq!(timers.len(), 1); // the perturbation interval
    }

    #[test]
    fn empty_glyph_set_builds_an_empty_cloud() {
        let mut timers = TimerSet::new();
        let cloud = IconCloudRenderer::new(2, &[], 10, 24.0, &mut timers);
        assert!(cloud.nodes.is_empty());
    }

    #[test]
    fn simulation_moves_nodes_while_running() {
        let mut timers = TimerSet::new();
        let mut cloud = IconCloudRenderer::new(2, &icons(), 12, 24.0, &mut timers);
        let before = cloud.positions();
        for _ in 0..30 {
            timers.update(1.0 / 60.0);
            cloud.update(1.0 / 60.0, &mut timers);
        }
        assert_ne!(before, cloud.positions());
    }

    #[test]
    fn stop_halts_simulation_and_perturbation() {
        let mut timers = TimerSet::new();
        let mut cloud = IconCloudRenderer::new(2, &icons(), 12, 24.0, &mut timers);
        for _ in 0..10 {
            timers.update(1.0 / 60.0);
            cloud.update(1.0 / 60.0, &mut timers);
        }
        cloud.stop(&mut timers);
        assert!(timers.is_empty());

        let frozen = cloud.positions();
        // drive far past several perturbation intervals: nothing may move
        for _ in 0..10 {
            timers.update(CLOUD_PERTURB_INTERVAL);
            cloud.update(CLOUD_PERTURB_INTERVAL, &mut timers);
        }
        assert_eq!(frozen, cloud.positions());
        assert_eq!(timers.take_ticks(cloud.perturb), 0);
    }

    #[test]
    fn restart_produces_the_same_shape() {
        let mut timers = TimerSet::new();
        let first = IconCloudRenderer::new(2, &icons(), 9, 24.0, &mut timers);
        timers.cancel_step(2);
        let second = IconCloudRenderer::new(2, &icons(), 9, 24.0, &mut timers);
        assert_eq!(first.nodes.len(), second.nodes.len());
        assert_eq!(timers.len(), 1);
    }
}
