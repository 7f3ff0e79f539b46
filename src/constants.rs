/// Page behaviour tuning constants.
///
/// Selectors, class names, timings and user-facing text live here so the
/// wiring modules stay free of magic strings and numbers.

// Particle network
pub const PARTICLE_COUNT: usize = 40;
pub const CONNECTION_DISTANCE: f32 = 150.0; // pairs closer than this get a line
pub const PARTICLE_RADIUS: f32 = 2.0;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // per axis, per frame
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;
pub const ACCENT_RGB: [u8; 3] = [100, 255, 218]; // #64ffda

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const REVEAL_CANDIDATE_SELECTOR: &str = ".hidden-element";
pub const REVEALED_CLASS: &str = "show-element";

// Drawing surface
pub const CANVAS_ID: &str = "neural-canvas";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const SUBMIT_SELECTOR: &str = ".btn-submit";
pub const DEFAULT_FORM_METHOD: &str = "POST";
pub const STATUS_CLEAR_DELAY_MS: i32 = 6000;

pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SENT: &str = "Thanks! Your message has been sent.";
pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";
pub const MSG_UNREACHABLE: &str = "Unable to send the request. Check your connection.";

// Mobile navigation
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_PANEL_SELECTOR: &str = ".nav-links";
pub const NAV_OPEN_CLASS: &str = "open";
pub const NAV_DESKTOP_MIN_WIDTH: f64 = 768.0; // strictly wider than this closes the panel
