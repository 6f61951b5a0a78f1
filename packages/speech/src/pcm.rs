//! PCM payload decoding.

/// Decodes signed 16-bit little-endian PCM into normalized f32 samples in
/// [-1.0, 1.0). A trailing odd byte is ignored.
pub fn decode_i16_le(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_samples() {
        // 0, i16::MAX, i16::MIN as little-endian pairs.
        let data = [0x00, 0x00, 0xFF, 0x7F, 0x00, 0x80];
        let samples = decode_i16_le(&data);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 32767.0 / 32768.0).abs() < f32::EPSILON);
        assert_eq!(samples[2], -1.0);
    }

    #[test]
    fn test_decode_ignores_trailing_odd_byte() {
        let samples = decode_i16_le(&[0x00, 0x00, 0x12]);
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_i16_le(&[]).is_empty());
    }
}
