/// The integer every call mechanism adds. A machine word, like a native `int`.
pub type Int = i64;

/// Converts a loop index into the integer being summed.
/// Indices past `Int::MAX` wrap around, as a native word would.
#[inline(always)]
pub(crate) fn index_to_int(i: u64) -> Int {
    i as Int
}
