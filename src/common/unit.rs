//! Length units used by slide geometry.
//!
//! All geometry is expressed in EMU (English Metric Units), the native unit of
//! DrawingML, so rectangles can be written to the package without rounding.
//! Font sizes stay in points.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert whole inches expressed as a fraction (e.g. `0.5`) to EMU.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

/// Font size in hundredths of a point, as DrawingML `sz` attributes expect.
///
/// DrawingML rejects sizes below 1pt, so the value is clamped there.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    ((pt * 100.0).floor() as u32).max(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        assert_eq!(inches_to_emu(1.0), EMUS_PER_INCH);
        assert_eq!(inches_to_emu(0.5), 457_200);
        assert_eq!(inches_to_emu(13.333_333_333), 12_192_000);
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(pt_to_emu_f64(72.0), EMUS_PER_INCH);
        assert!((emu_to_pt_f64(EMUS_PER_INCH) - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(pt_to_centipoints(0.01), 100);
    }
}
