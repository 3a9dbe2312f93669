/// Requested shift reduced modulo a ring of `len` cells.
///
/// Returns `None` for an empty ring. Negative shifts wrap around, so `-1`
/// on a ring of 8 becomes 7.
pub fn effective_shift(shift: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len_i = i128::try_from(len).ok()?;
    let e = i128::from(shift).rem_euclid(len_i);
    usize::try_from(e).ok()
}

/// Cyclic rotation towards the end: afterwards `values[i]` holds what was at
/// `(i - e) mod len`, where `e` is the effective shift. Returns `e`.
///
/// Sequences of length 0 or 1 are left as they are.
pub fn rotate_right<T>(values: &mut [T], shift: i64) -> usize {
    if values.len() <= 1 {
        return 0;
    }
    match effective_shift(shift, values.len()) {
        Some(e) if e > 0 => {
            values.rotate_right(e);
            e
        }
        _ => 0,
    }
}
