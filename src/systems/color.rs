/// Hue for a point displaced by `wave`; not wrapped, CSS accepts any angle
#[inline]
pub fn wave_hue(base_hue: f32, hue_shift: f32, wave: f32) -> f32 {
    base_hue + hue_shift * wave
}

/// CSS `hsla()` fill style
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> String {
    format!("hsla({}, {}%, {}%, {})", hue, saturation, lightness, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_surface_keeps_base_hue() {
        assert_eq!(wave_hue(200.0, 2.0, 0.0), 200.0);
    }

    #[test]
    fn crests_and_troughs_shift_hue_both_ways() {
        assert_eq!(wave_hue(200.0, 2.0, 25.0), 250.0);
        assert_eq!(wave_hue(200.0, 2.0, -25.0), 150.0);
    }

    #[test]
    fn formats_css_hsla() {
        assert_eq!(hsla(200.0, 100.0, 60.0, 0.5), "hsla(200, 100%, 60%, 0.5)");
    }
}
