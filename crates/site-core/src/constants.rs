// Shared tuning constants for the particle field, scroll system, and UI.

// Particle field
pub const NARROW_VIEWPORT_PX: f32 = 768.0; // below this, the smaller pool is used
pub const SMALL_POOL: usize = 15;
pub const LARGE_POOL: usize = 30;
pub const OFFSCREEN_MARGIN: f32 = 20.0; // a particle past height + margin respawns
pub const RESPAWN_Y: f32 = -20.0; // respawn just above the viewport
pub const DRIFT_AMPLITUDE: f32 = 0.5; // horizontal sway per step
pub const SIZE_MIN: f32 = 4.0;
pub const SIZE_MAX: f32 = 12.0;
pub const SPEED_MIN: f32 = 1.0;
pub const SPEED_MAX: f32 = 3.0;
pub const ROTATION_SPEED_LIMIT: f32 = 0.05;
pub const ALPHA_MIN: f32 = 0.2;
pub const ALPHA_MAX: f32 = 0.5;

// The two leaf hues, as CSS rgb component triples
pub const LEAF_HUES: [&str; 2] = ["34, 197, 94", "16, 185, 129"];

// Scroll system
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0; // strictly above -> header "scrolled"
pub const NAV_PROBE_OFFSET: f64 = 150.0; // probe line below the viewport top
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const RESIZE_DEBOUNCE_MS: f64 = 200.0;

// Contact form
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xeelnlog";

// Notifications
pub const NOTIFICATION_VISIBLE_MS: u32 = 3000;
pub const NOTIFICATION_FADE_MS: u32 = 300;

// About-section stat counters
pub const STAT_COUNT_DURATION_MS: f64 = 2000.0;
pub const EXPERIENCE_START_MS: f64 = 1_719_792_000_000.0; // 2024-07-01T00:00:00Z
pub const MS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 30.44 * 12.0;
