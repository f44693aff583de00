/// Minimal 3D vector for direction math. Not a general linear-algebra type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Vec3 {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
}

impl Vec3 {
    pub(crate) const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    pub(crate) const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub(crate) fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rotate about the x axis. Positive angles turn +z toward -y.
    pub(crate) fn rotate_x(self, sin: f64, cos: f64) -> Self {
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }

    /// Rotate about the y axis. Positive angles turn +z toward +x.
    pub(crate) fn rotate_y(self, sin: f64, cos: f64) -> Self {
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }
}

/// Wrap `x` into `[0, period)`.
#[inline]
pub(crate) fn wrap(x: f64, period: f64) -> f64 {
    let r = x.rem_euclid(period);
    // rem_euclid can round up to `period` for tiny negative inputs.
    if r >= period { 0.0 } else { r }
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub(crate) fn round_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
