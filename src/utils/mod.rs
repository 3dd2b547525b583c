pub mod logger;

/// Convert a byte index into `input` to a character index.
///
/// `byte_index` must fall on a char boundary.
pub fn char_offset(input: &str, byte_index: usize) -> usize {
    if input.is_ascii() {
        return byte_index;
    }
    input[..byte_index].chars().count()
}

/// Byte index of the first occurrence of `needle` in `input`, or 0 when it
/// does not occur.
pub fn find_or_zero(input: &str, needle: &str) -> usize {
    input.find(needle).unwrap_or(0)
}
