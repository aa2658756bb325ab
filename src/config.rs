// Layout and timing constants for the site scripts.

/// Viewports at or below this width use the narrow layout.
pub const NARROW_VIEWPORT_MAX: f64 = 768.0;
/// The mobile menu collapses once the viewport reaches this width.
pub const MENU_COLLAPSE_WIDTH: f64 = 769.0;
/// Height of the sticky header overlay on narrow layouts.
pub const STICKY_HEADER_OFFSET: f64 = 70.0;

pub const SNAP_DURATION_MS: f64 = 400.0;
pub const LOCK_MS_WIDE: u32 = 400;
pub const LOCK_MS_NARROW: u32 = 280;
/// Slack when deciding whether the offset already sits on the last snap point.
pub const ESCAPE_TOLERANCE: f64 = 2.0;

pub const HEADER_SCROLLED_AFTER: f64 = 20.0;
pub const BACK_TO_TOP_AFTER: f64 = 300.0;

// Reveal band, as fractions of the viewport height from the top.
pub const REVEAL_BAND_BOTTOM: f64 = 0.85;
pub const REVEAL_BAND_TOP: f64 = 0.15;
pub const REVEAL_READY_DELAY_MS: u32 = 1_000;

pub const FAQ_SCROLL_DELAY_MS: u32 = 100;

// Hero letter animation, seconds.
pub const TITLE_LETTER_STEP: f64 = 0.02;
pub const SUBTITLE_START: f64 = 0.25;
pub const SUBTITLE_LETTER_STEP: f64 = 0.01;

pub fn is_narrow(viewport_width: f64) -> bool {
    viewport_width <= NARROW_VIEWPORT_MAX
}

pub fn get_form_relay_url() -> &'static str {
    "https://formsubmit.co/ajax/ancaralucasmyle@contact.com"
}
