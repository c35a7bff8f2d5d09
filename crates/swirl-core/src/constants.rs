// Tuning constants for the swirl background.
//
// Every number the per-frame painter uses lives here so the geometry module
// reads as formulas rather than magic values.

// Trail
pub const TRAIL_ALPHA: f64 = 0.08; // black overlay per frame; lower = longer trails

// Layout
pub const BASE_RADIUS_FRACTION: f64 = 0.36; // of min(width, height)

// Per-curve shape
pub const K_BASE: f64 = 2.2; // petal frequency of curve 0
pub const K_STEP: f64 = 0.23; // added per curve index
pub const PHASE_PER_INDEX: f64 = 0.7;
pub const PHASE_PER_SEC: f64 = 0.9;
pub const ROTATION_PER_SEC: f64 = 0.18;
pub const ROTATION_PER_INDEX: f64 = 0.05;
pub const PULSE_AMPLITUDE: f64 = 0.12;
pub const PULSE_RATE: f64 = 1.3;
pub const RADIUS_BASE: f64 = 0.55;
pub const RADIUS_SWING: f64 = 0.35;

// Tracing
pub const CURVE_STEPS: usize = 520;
pub const CURVE_TURNS: f64 = 2.5;

// Color
pub const HUE_DRIFT_PER_SEC: f64 = 12.0;
pub const SATURATION_PCT: f64 = 95.0;
pub const LIGHTNESS_PCT: f64 = 60.0;
pub const STROKE_ALPHA: f64 = 0.18; // scaled by glow
pub const SHADOW_ALPHA: f64 = 0.7; // scaled by glow
pub const SHADOW_BLUR: f64 = 24.0; // scaled by glow

// Stroke width oscillation
pub const LINE_WIDTH_BASE: f64 = 1.2;
pub const LINE_WIDTH_SWING: f64 = 0.6;

// Device pixel ratio clamp
pub const PIXEL_RATIO_MIN: f64 = 1.0;
pub const PIXEL_RATIO_MAX: f64 = 2.0;

// Configuration defaults and limits
pub const DEFAULT_SPEED: f64 = 1.0;
pub const DEFAULT_DENSITY: u32 = 7;
pub const DEFAULT_GLOW: f64 = 1.0;
pub const DEFAULT_Y_BIAS: f64 = 0.5;
pub const MAX_DENSITY: u32 = 64;

// Native driver frame pacing (~60 Hz)
pub const NATIVE_FRAME_INTERVAL_MS: u64 = 16;
