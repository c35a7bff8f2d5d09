// DOM-facing constants for the web front-end.

// Canvases carrying this attribute are mounted automatically at start.
pub const AUTO_MOUNT_SELECTOR: &str = "canvas[data-retro-swirl]";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Canvas 2D composite mode for additive blending
pub const ADDITIVE_COMPOSITE: &str = "lighter";

// Events
pub const RESIZE_EVENT: &str = "resize";
pub const PAGEHIDE_EVENT: &str = "pagehide";
pub const PAGESHOW_EVENT: &str = "pageshow";
