mod display;
mod linear;

pub use display::DisplayColor;
pub use linear::LinearColor;

/// Quantizes each channel as `(c * 255) as u8`, truncating toward zero.
///
/// Channels are expected to be saturated already. Nothing is clamped here, but
/// the float to int cast saturates, so out of range values land on 0 or 255
/// and NaN on 0.
#[inline]
pub fn to_display(c: LinearColor) -> DisplayColor {
    #[cfg(feature = "strict_checks")]
    debug_assert!(
        [c.r, c.g, c.b].iter().all(|x| (0.0..=1.0).contains(x)),
        "converting unsaturated color {:?}",
        c
    );
    DisplayColor::new(
        (c.r * 255.0) as u8,
        (c.g * 255.0) as u8,
        (c.b * 255.0) as u8,
    )
}

impl From<LinearColor> for DisplayColor {
    fn from(c: LinearColor) -> Self {
        to_display(c)
    }
}
