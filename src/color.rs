use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Heat ramp for bar shading
// ---------------------------------------------------------------------------

/// Map `t` in `[0, 1]` onto a red heat ramp: pale red for small counts,
/// saturated dark red for the largest bar.
pub fn heat_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let hsl = Hsl::new(8.0, 0.55 + 0.30 * t, 0.78 - 0.40 * t);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_darkens_with_increasing_t() {
        let low = heat_color(0.0);
        let high = heat_color(1.0);
        let brightness = |c: Color32| u32::from(c.r()) + u32::from(c.g()) + u32::from(c.b());
        assert!(brightness(low) > brightness(high));
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(heat_color(-1.0), heat_color(0.0));
        assert_eq!(heat_color(2.0), heat_color(1.0));
    }
}
