/// Маппинг диопазонов
/// *-------х-------*
/// ^min    ^v      ^max
/// percent = (v - min) / (max - min)
///
/// *-------x-------*
/// ^left   ^res    ^right
/// res = left + (right - left) * percent
///
/// `v` is clamped to `min..=max`, reversed output ranges are allowed.
pub fn map(v: u32, min: u32, max: u32, left: u32, right: u32) -> u32 {
    if max <= min {
        return left;
    }
    let v = v.clamp(min, max);

    let span = (v - min) as u64;
    let range = (max - min) as u64;
    let mapped_len = (left.abs_diff(right) as u64 * span + range / 2) / range;
    if left < right {
        left + mapped_len as u32
    } else {
        left - mapped_len as u32
    }
}
