//! Per-frame geometry for the swirl curves.
//!
//! Each curve is a rose-like polar curve `r(θ) = base · pulse · (0.55 + 0.35
//! cos(kθ + phase))` traced over a few turns and stroked as a polyline. All
//! parameters are derived from the curve index and the scaled elapsed time,
//! so a frame is fully described by a [`FramePlan`].

use crate::config::SwirlConfig;
use crate::constants::*;
use crate::sizing::Size;
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    #[inline]
    pub fn swirl(hue: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation: SATURATION_PCT,
            lightness: LIGHTNESS_PCT,
            alpha,
        }
    }
}

/// CSS color syntax, e.g. `hsla(120, 95%, 60%, 0.18)`.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Hsla,
    pub shadow_color: Hsla,
    pub shadow_blur: f64,
    pub line_width: f64,
}

/// Scaled elapsed time in seconds. Timestamps before `start_ms` read as 0.
#[inline]
pub fn elapsed_seconds(now_ms: f64, start_ms: f64, speed: f64) -> f64 {
    ((now_ms - start_ms).max(0.0) / 1000.0) * speed
}

/// Hue of curve `index`: evenly spread around the wheel, drifting with time.
#[inline]
pub fn hue_at(index: u32, density: u32, t: f64) -> f64 {
    let spread = 360.0 * index as f64 / density.max(1) as f64;
    (spread + HUE_DRIFT_PER_SEC * t).rem_euclid(360.0)
}

#[inline]
pub fn center(size: Size, y_bias: f64) -> DVec2 {
    DVec2::new(size.width / 2.0, y_bias.clamp(0.0, 1.0) * size.height)
}

#[inline]
pub fn base_radius(size: Size) -> f64 {
    BASE_RADIUS_FRACTION * size.min_side()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    pub index: u32,
    pub k: f64,
    pub phase: f64,
    pub rotation: f64,
    pub radius_pulse: f64,
    pub hue: f64,
    pub line_width: f64,
}

impl CurveParams {
    pub fn at(index: u32, density: u32, t: f64) -> Self {
        let i = index as f64;
        Self {
            index,
            k: K_BASE + K_STEP * i,
            phase: PHASE_PER_INDEX * i + PHASE_PER_SEC * t,
            rotation: ROTATION_PER_SEC * t + ROTATION_PER_INDEX * i,
            radius_pulse: 1.0 + PULSE_AMPLITUDE * (PULSE_RATE * t + i).sin(),
            hue: hue_at(index, density, t),
            line_width: LINE_WIDTH_BASE + LINE_WIDTH_SWING * (t + i).sin(),
        }
    }

    pub fn style(&self, glow: f64) -> StrokeStyle {
        StrokeStyle {
            color: Hsla::swirl(self.hue, STROKE_ALPHA * glow),
            shadow_color: Hsla::swirl(self.hue, SHADOW_ALPHA * glow),
            shadow_blur: SHADOW_BLUR * glow,
            line_width: self.line_width,
        }
    }

    /// Point `step` of `CURVE_STEPS`; step 0 and step `CURVE_STEPS` are the
    /// two ends of the traced arc.
    #[inline]
    pub fn point_at(&self, step: usize, center: DVec2, base_radius: f64) -> DVec2 {
        let theta = (step as f64 / CURVE_STEPS as f64) * (TAU * CURVE_TURNS) + self.rotation;
        let r = base_radius
            * self.radius_pulse
            * (RADIUS_BASE + RADIUS_SWING * (self.k * theta + self.phase).cos());
        center + r * DVec2::new(theta.cos(), theta.sin())
    }

    /// Replace `out` with the `CURVE_STEPS + 1` polyline vertices.
    pub fn trace_into(&self, center: DVec2, base_radius: f64, out: &mut Vec<DVec2>) {
        out.clear();
        out.extend((0..=CURVE_STEPS).map(|s| self.point_at(s, center, base_radius)));
    }
}

/// Everything needed to paint one frame.
#[derive(Clone, Debug)]
pub struct FramePlan {
    pub t: f64,
    pub size: Size,
    pub center: DVec2,
    pub base_radius: f64,
    pub glow: f64,
    pub curves: SmallVec<[CurveParams; 16]>,
}

impl FramePlan {
    pub fn new(config: &SwirlConfig, size: Size, t: f64) -> Self {
        let curves = (0..config.density)
            .map(|i| CurveParams::at(i, config.density, t))
            .collect();
        Self {
            t,
            size,
            center: center(size, config.y_bias),
            base_radius: base_radius(size),
            glow: config.glow,
            curves,
        }
    }
}
