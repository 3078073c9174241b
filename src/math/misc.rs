/// Restricts `x` to `[lo, hi]`, computed as `max(lo, min(hi, x))`.
///
/// Unlike [`f32::clamp`] this never panics. If `lo > hi` the result is `lo`,
/// and a NaN `x` comes back as `hi` since `f32::min` discards NaN operands.
#[inline(always)]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(x))
}
