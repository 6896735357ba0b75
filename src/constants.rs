pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const DEFAULT_WIDTH: i32 = 1280;          // Initial window size
pub const DEFAULT_HEIGHT: i32 = 720;

pub const DEBOUNCE_WINDOW: f32 = 0.1;         // Coalescing window for step requests (seconds)
pub const SETTLE_DELAY: f32 = 0.5;            // Cooldown after a transition's synchronous setup

pub const COMPACT_WIDTH: f32 = 640.0;         // Panel narrower than this switches to compact layouts

pub const FADE_DURATION: f32 = 0.45;          // Per-item fade-in duration
pub const ITEM_STAGGER: f32 = 0.12;           // Delay between consecutive item fade-ins

// Scroll tracker
pub const STEP_SCROLL_EXTENT: f32 = 320.0;    // Virtual scroll distance covered by one step
pub const WHEEL_STEP: f32 = 48.0;             // Scroll offset per wheel notch

// Hero floaters
pub const HERO_GLYPHS: &[&str] = &["*", "+", "o", "#", "@", "~"];
pub const HERO_COUNT: usize = 14;
pub const HERO_STAGGER: f32 = 0.08;
pub const HERO_DRIFT_DELAY: f32 = 1.6;        // One-shot drift starts this long after setup
pub const HERO_DRIFT_DURATION: f32 = 2.4;

// Text-with-dots loader motif
pub const DOT_RADIUS: f32 = 10.0;
pub const DOT_GAP: f32 = 36.0;
pub const DOT_PULSE_SPEED: f32 = 4.0;         // Radians per second
pub const DOT_PHASE_OFFSET: f32 = 0.9;        // Stagger between neighbouring dots

// Quote bubbles
pub const BUBBLE_FONT_SIZE: i32 = 18;
pub const BUBBLE_WIDTH_FRAC: f32 = 0.78;      // Bubble width as a fraction of the panel
pub const BUBBLE_PADDING: f32 = 14.0;
pub const CHAR_WIDTH_RATIO: f32 = 0.55;       // Estimated glyph width as a fraction of font size

// KPI cards
pub const KPI_CHROME_LEAD: f32 = 0.35;        // Card chrome fades in this long before counting starts
pub const KPI_COUNT_DURATION: f32 = 1.6;
pub const KPI_LABEL_FONT_SIZE: i32 = 18;
pub const KPI_VALUE_FONT_SIZE: i32 = 44;

// Line chart
pub const CHART_REVEAL_DURATION: f32 = 1.8;   // Stroke reveal, per series
pub const CHART_DEFAULT_Y_CAP: f64 = 100.0;
pub const CHART_DASH_LENGTH: f32 = 8.0;
pub const CHART_DASH_GAP: f32 = 6.0;
pub const CHART_POINT_RADIUS: f32 = 4.0;

// Icon cloud
pub const CLOUD_DEFAULT_COUNT: usize = 36;
pub const CLOUD_DEFAULT_ICON_SIZE: f32 = 30.0;
pub const CLOUD_REF_EXTENT: f32 = 1000.0;     // Pixel size to normalized-radius conversion base
pub const CLOUD_CENTER_PULL: f32 = 0.8;
pub const CLOUD_REPULSION: f32 = 0.0025;
pub const CLOUD_DRAG: f32 = 1.6;
pub const CLOUD_MARGIN: f32 = 0.06;
pub const CLOUD_PERTURB_INTERVAL: f32 = 2.5;  // Seconds between random velocity kicks
pub const CLOUD_PERTURB_KICK: f32 = 0.06;
