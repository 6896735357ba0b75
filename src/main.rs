use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scrollshow::assets::AssetStore;
use scrollshow::constants::*;
use scrollshow::deck::Deck;
use scrollshow::dispatcher::StepDispatcher;
use scrollshow::narrative;
use scrollshow::scroll::ScrollTracker;
use scrollshow::surface::Surface;

/// Scroll-driven, slide-based data story player.
#[derive(Parser)]
#[command(name = "scrollshow", version)]
struct Args {
    /// Deck description file (JSON)
    deck: PathBuf,

    /// Directory the deck's image names are resolved against
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let deck = Deck::load(&args.deck)?;
    info!(slides = deck.len(), title = %deck.title, "deck loaded");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(if deck.title.is_empty() { "scrollshow" } else { &deck.title })
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let assets = AssetStore::load(&mut rl, &thread, &args.assets, &deck.image_refs());

    let mut tracker = ScrollTracker::new(deck.len());
    let mut dispatcher = StepDispatcher::new();
    let mut surface = Surface::new(panel_bounds(args.width, args.height));

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            tracker.scroll_by(-wheel * WHEEL_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN) || rl.is_key_pressed(KeyboardKey::KEY_PAGE_DOWN)
        {
            tracker.jump_to(tracker.step() + 1);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_UP) || rl.is_key_pressed(KeyboardKey::KEY_PAGE_UP) {
            tracker.jump_to(tracker.step().saturating_sub(1));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
            tracker.jump_to(0);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_END) {
            tracker.jump_to(deck.len().saturating_sub(1));
        }

        // --- Update ---
        let screen_w = rl.get_screen_width();
        let screen_h = rl.get_screen_height();
        surface.set_bounds(panel_bounds(screen_w, screen_h));
        dispatcher.request_step(tracker.step());
        dispatcher.update(dt, &deck, &surface);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(18, 20, 27, 255));

        narrative::draw_narrative(
            &mut d,
            &deck,
            dispatcher.current_step(),
            narrative_bounds(screen_w, screen_h),
        );

        // panel chrome behind the active visualization
        let panel = surface.bounds();
        d.draw_rectangle_rounded(panel, 0.04, 8, Color::new(28, 31, 41, 255));
        dispatcher.draw(&mut d, &surface, &assets);

        // progress rail along the bottom
        let rail_y = screen_h as f32 - 6.0;
        d.draw_rectangle_rec(
            Rectangle::new(0.0, rail_y, screen_w as f32 * tracker.progress(), 6.0),
            Color::GOLD,
        );
    }

    Ok(())
}

fn panel_bounds(screen_w: i32, screen_h: i32) -> Rectangle {
    let w = screen_w as f32;
    let h = screen_h as f32;
    Rectangle::new(w * 0.40, h * 0.04, w * 0.56, h * 0.90)
}

fn narrative_bounds(screen_w: i32, screen_h: i32) -> Rectangle {
    let w = screen_w as f32;
    let h = screen_h as f32;
    Rectangle::new(0.0, 0.0, w * 0.40, h)
}
