//! Unit tests for display-list opcode bit packing.
//!
//! These run on the host via `cargo test`. Expected values are the chip's
//! wire encodings; a mismatch here means visible corruption on hardware.

use bt81x_core::dl;
use bt81x_core::Primitive;

mod begin_end {
    use super::*;

    #[test]
    fn begin_carries_primitive_in_low_bits() {
        assert_eq!(dl::begin(Primitive::Bitmaps), 0x1F00_0001);
        assert_eq!(dl::begin(Primitive::Points), 0x1F00_0002);
        assert_eq!(dl::begin(Primitive::Rects), 0x1F00_0009);
    }

    #[test]
    fn end_and_display_are_fixed_words() {
        assert_eq!(dl::end(), 0x2100_0000);
        assert_eq!(dl::display(), 0x0000_0000);
    }
}

mod colors {
    use super::*;

    #[test]
    fn clear_color_component_layout() {
        assert_eq!(dl::clear_color_rgb(0, 0, 0), 0x0200_0000);
        assert_eq!(dl::clear_color_rgb(0xFF, 0, 0), 0x02FF_0000);
        assert_eq!(dl::clear_color_rgb(0, 0xFF, 0), 0x0200_00FF);
        assert_eq!(dl::clear_color_rgb(0, 0, 0xFF), 0x0200_FF00);
    }

    #[test]
    fn color_component_layout() {
        assert_eq!(dl::color_rgb(0x11, 0x22, 0x33), 0x0411_3322);
        assert_eq!(dl::color_rgb(0xFF, 0xFF, 0xFF), 0x04FF_FFFF);
    }

    #[test]
    fn clear_flag_bits() {
        assert_eq!(dl::clear(true, true, true), 0x2600_0007);
        assert_eq!(dl::clear(true, false, false), 0x2600_0004);
        assert_eq!(dl::clear(false, true, false), 0x2600_0002);
        assert_eq!(dl::clear(false, false, true), 0x2600_0001);
    }
}

mod handles_and_cells {
    use super::*;

    #[test]
    fn bitmap_handle_in_range() {
        assert_eq!(dl::bitmap_handle(0).unwrap(), 0x0500_0000);
        assert_eq!(dl::bitmap_handle(31).unwrap(), 0x0500_001F);
    }

    #[test]
    fn bitmap_handle_overflow_rejected() {
        let err = dl::bitmap_handle(32).unwrap_err();
        assert_eq!(err.value, 32);
        assert_eq!(err.max, 31);
    }

    #[test]
    fn cell_in_range() {
        assert_eq!(dl::cell(b'A').unwrap(), 0x0600_0041);
        assert_eq!(dl::cell(127).unwrap(), 0x0600_007F);
    }

    #[test]
    fn cell_overflow_rejected() {
        assert!(dl::cell(128).is_err());
    }
}

mod points {
    use super::*;

    #[test]
    fn point_size_in_sixteenths() {
        // 20 px radius = 320 sixteenths.
        assert_eq!(dl::point_size(320).unwrap(), 0x0D00_0140);
        assert_eq!(dl::point_size(0x1FFF).unwrap(), 0x0D00_1FFF);
    }

    #[test]
    fn point_size_overflow_rejected() {
        assert!(dl::point_size(0x2000).is_err());
    }
}

mod vertices {
    use super::*;

    #[test]
    fn vertex2f_packs_two_15_bit_fields() {
        assert_eq!(dl::vertex2f(0, 0).unwrap(), 0x4000_0000);
        assert_eq!(
            dl::vertex2f(320, 240).unwrap(),
            0x4000_0000 | 320 << 15 | 240
        );
        assert_eq!(
            dl::vertex2f(16383, 16383).unwrap(),
            0x4000_0000u32 | 16383 << 15 | 16383
        );
    }

    #[test]
    fn vertex2f_negative_coordinates_sign_wrap() {
        // Two's complement within the 15-bit field.
        assert_eq!(dl::vertex2f(-1, -1).unwrap(), 0x7FFF_FFFF);
        assert_eq!(
            dl::vertex2f(-16384, 0).unwrap(),
            0x4000_0000 | 0x4000 << 15
        );
    }

    #[test]
    fn vertex2f_out_of_field_rejected() {
        assert!(dl::vertex2f(16384, 0).is_err());
        assert!(dl::vertex2f(0, -16385).is_err());
        let err = dl::vertex2f(20000, 0).unwrap_err();
        assert_eq!(err.field, "vertex x");
        assert_eq!(err.min, -16384);
        assert_eq!(err.max, 16383);
    }

    #[test]
    fn vertex2ii_packs_four_fields() {
        assert_eq!(
            dl::vertex2ii(400, 300, 31, 127).unwrap(),
            0x8000_0000u32 | 400 << 21 | 300 << 12 | 31 << 7 | 127
        );
        assert_eq!(dl::vertex2ii(0, 0, 0, 0).unwrap(), 0x8000_0000);
    }

    #[test]
    fn vertex2ii_field_overflow_rejected() {
        assert!(dl::vertex2ii(512, 0, 0, 0).is_err());
        assert!(dl::vertex2ii(0, 512, 0, 0).is_err());
        assert!(dl::vertex2ii(0, 0, 32, 0).is_err());
        assert!(dl::vertex2ii(0, 0, 0, 128).is_err());
    }

    #[test]
    fn vertex_format_range() {
        assert_eq!(dl::vertex_format(0).unwrap(), 0x2700_0000);
        assert_eq!(dl::vertex_format(4).unwrap(), 0x2700_0004);
        assert!(dl::vertex_format(5).is_err());
    }
}

mod determinism {
    use super::*;

    #[test]
    fn packing_is_pure() {
        for _ in 0..3 {
            assert_eq!(dl::vertex2f(123, -456).unwrap(), dl::vertex2f(123, -456).unwrap());
            assert_eq!(dl::color_rgb(1, 2, 3), dl::color_rgb(1, 2, 3));
        }
    }
}
