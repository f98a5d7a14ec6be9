use serde::{Deserialize, Serialize};

/// An 8-bit RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Linear interpolation between `a` and `b`. Extrapolates for `t` outside [0, 1].
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Component-wise linear interpolation between two colors.
///
/// Channels are truncated to integers, not rounded.
pub fn lerp_color(start: Rgb, end: Rgb, t: f32) -> Rgb {
    Rgb(
        lerp(start.0 as f32, end.0 as f32, t) as u8,
        lerp(start.1 as f32, end.1 as f32, t) as u8,
        lerp(start.2 as f32, end.2 as f32, t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_color_identity() {
        let color = Rgb(42, 180, 7);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(lerp_color(color, color, t), color);
        }
    }

    #[test]
    fn lerp_color_truncates_midpoint() {
        let mid = lerp_color(Rgb(0, 0, 0), Rgb(255, 255, 255), 0.5);
        assert_eq!(mid, Rgb(127, 127, 127));
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb(255, 127, 0).to_hex(), "#ff7f00");
        assert_eq!(Rgb(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb(255, 255, 255).to_hex(), "#ffffff");
    }
}
