mod tests {
    use sand_ring_effects::color::{
        GreenBias, Rgbw, clamp, color_blend, color_from_u32, color_to_u32, is_diff, rgbw, wheel,
        wrap_hue,
    };

    const RED: Rgbw = rgbw(255, 0, 0, 0);
    const BLUE: Rgbw = rgbw(0, 0, 255, 0);
    const FADED: Rgbw = rgbw(0, 0, 0, 128);

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5), 0.0);
        assert_eq!(clamp(0.0), 0.0);
        assert_eq!(clamp(0.25), 0.25);
        assert_eq!(clamp(1.0), 1.0);
        assert_eq!(clamp(7.0), 1.0);
        assert_eq!(clamp(f32::NAN), 0.0);
        assert_eq!(clamp(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.25), 0.25);
        assert_eq!(wrap_hue(1.0), 0.0);
        assert_eq!(wrap_hue(1.5), 0.5);
        assert_eq!(wrap_hue(-0.25), 0.75);
    }

    #[test]
    fn test_wheel_band_boundaries() {
        assert_eq!(wheel(0.0, GreenBias::Full), rgbw(0, 255, 0, 0));
        assert_eq!(wheel(0.0, GreenBias::Halved), rgbw(0, 127, 0, 0));
        assert_eq!(wheel(1.0 / 3.0, GreenBias::Halved), rgbw(255, 0, 0, 0));
        assert_eq!(wheel(2.0 / 3.0, GreenBias::Halved), rgbw(0, 0, 255, 0));
        assert_eq!(wheel(1.0, GreenBias::Full), rgbw(0, 255, 0, 0));
    }

    #[test]
    fn test_wheel_mid_band() {
        // 0.5 * 767 = 383, 127 steps into the red -> blue band
        assert_eq!(wheel(0.5, GreenBias::Halved), rgbw(128, 0, 127, 0));
        assert_eq!(wheel(0.5, GreenBias::Full), rgbw(128, 0, 127, 0));
    }

    #[test]
    fn test_wheel_out_of_range_is_clamped() {
        assert_eq!(wheel(-3.0, GreenBias::Full), wheel(0.0, GreenBias::Full));
        assert_eq!(wheel(3.0, GreenBias::Full), wheel(1.0, GreenBias::Full));
    }

    #[test]
    fn test_wheel_halved_green_never_exceeds_half() {
        for step in 0..=100u8 {
            let color = wheel(f32::from(step) / 100.0, GreenBias::Halved);
            assert!(color.g <= 127);
            assert_eq!(color.a.0, 0);
        }
    }

    #[test]
    fn test_color_blend() {
        assert_eq!(color_blend(RED, BLUE, 0.0), RED);
        assert_eq!(color_blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(color_blend(RED, BLUE, 0.5), rgbw(127, 0, 127, 0));
        assert_eq!(color_blend(RED, FADED, 0.05), rgbw(242, 0, 0, 6));
        assert_eq!(color_blend(RED, BLUE, 4.0), BLUE);
    }

    #[test]
    fn test_is_diff() {
        assert!(!is_diff(RED, RED));
        assert!(is_diff(RED, BLUE));
        assert!(is_diff(FADED, rgbw(0, 0, 0, 127)));
    }

    #[test]
    fn test_packed_colors() {
        let color = color_from_u32(0x80FF_2010);
        assert_eq!(color, rgbw(0xFF, 0x20, 0x10, 0x80));
        assert_eq!(color_to_u32(color), 0x80FF_2010);
        assert_eq!(color_to_u32(FADED), 0x8000_0000);
    }
}
