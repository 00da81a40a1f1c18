/// Render a byte sequence for error messages: printable ASCII as a byte
/// string, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Bytes needed to hold `bits` once the final byte is zero-padded.
pub fn padded_len(bits: u64) -> u64 {
    bits.div_ceil(8)
}
