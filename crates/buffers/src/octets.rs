//! Hex formatting for short byte runs (tags, header prefixes).

/// Formats a byte slice as space-separated lowercase hex.
///
/// At most `max` bytes are printed; any remainder is summarised.
///
/// ```
/// use tile3d_buffers::print_octets;
///
/// assert_eq!(print_octets(b"b3dm", 16), "62 33 64 6d");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = octets
        .iter()
        .take(max)
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}
