//! Reduced width:height ratios for ratio-locked resize.

use serde::{Deserialize, Serialize};

/// Width:height in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl AspectRatio {
    /// Reduce `width:height`. Sides are rounded to whole units, at least 1.
    pub fn of(width: f32, height: f32) -> Self {
        let w = whole(width);
        let h = whole(height);
        let d = gcd(w, h);
        Self {
            width: w / d,
            height: h / d,
        }
    }

    /// Height change that keeps the ratio for a width change of `dx`.
    pub fn height_for(&self, dx: f32) -> f32 {
        dx * self.height as f32 / self.width as f32
    }

    /// Width over height.
    pub fn value(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

fn whole(side: f32) -> u32 {
    if side.is_finite() && side >= 1.0 {
        side.round() as u32
    } else {
        1
    }
}
