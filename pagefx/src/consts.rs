//! Shared numeric constants for the page behavior layer.

// ── Scroll thresholds ───────────────────────────────────────────

/// Scroll offset in pixels past which the navbar takes its compact style.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Scroll offset in pixels past which the back-to-top button shows.
pub const BACK_TO_TOP_PX: f64 = 500.0;

/// Lookahead added to the scroll position when resolving the active section,
/// so a section activates as its heading approaches the navbar.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// Height of the fixed navbar; nav-link scrolls stop this far above a section.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// Viewport width in pixels above which the mobile menu no longer applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Event throttling ────────────────────────────────────────────

/// Trailing-edge window for scroll handling (one frame at 60 Hz).
pub const SCROLL_THROTTLE_MS: u32 = 16;

/// Trailing-edge window for resize handling.
pub const RESIZE_THROTTLE_MS: u32 = 100;

// ── Particle field ──────────────────────────────────────────────

/// Hard cap on the particle count regardless of viewport width.
pub const PARTICLE_MAX_COUNT: usize = 50;

/// One particle per this many pixels of viewport width, up to the cap.
pub const PARTICLE_SPACING_PX: f64 = 30.0;

/// Smallest particle diameter in pixels.
pub const PARTICLE_SIZE_MIN: f64 = 2.0;

/// Width of the uniform size range; diameters land in `[min, min + span)`.
pub const PARTICLE_SIZE_SPAN: f64 = 4.0;

/// Velocity components are sampled uniformly in `[-span/2, span/2)` px/frame.
pub const PARTICLE_SPEED_SPAN: f64 = 0.5;

// ── Staged transitions ──────────────────────────────────────────

/// Delay before a newly shown project card settles to full opacity.
pub const CARD_SETTLE_DELAY_MS: u32 = 100;

/// Fade-out duration before a filtered-out card is removed from layout.
pub const CARD_HIDE_DELAY_MS: u32 = 300;

/// Delay before an expanded detail panel settles to full opacity.
pub const DETAILS_SETTLE_DELAY_MS: u32 = 10;

/// Fade-out duration before a collapsed detail panel leaves layout.
pub const DETAILS_HIDE_DELAY_MS: u32 = 300;

// ── Startup timing ──────────────────────────────────────────────

/// How long the loader overlay stays before fading.
pub const LOADER_HOLD_MS: u32 = 1500;

/// Loader fade-out duration before its node leaves layout.
pub const LOADER_FADE_MS: u32 = 500;

/// Pause before the hero typewriter starts.
pub const TYPE_START_DELAY_MS: u32 = 1000;

/// Per-character typewriter cadence.
pub const TYPE_SPEED_MS: u32 = 100;
