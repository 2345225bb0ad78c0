//! Variable length integer encoding for HID short items.
//!
//! Item data is 0, 1, 2 or 4 bytes little-endian; there is no 3-byte
//! form (HID 1.11 ch. 6.2.2.2).

use crate::sink::Sink;

/// Minimum number of data bytes needed for an unsigned value.
pub fn unsigned_size(value: u32) -> usize {
    if value > 0xFFFF {
        4
    } else if value > 0xFF {
        2
    } else {
        1
    }
}

/// Minimum number of data bytes needed for a signed value.
pub fn signed_size(value: i32) -> usize {
    // negative values count from -1, the bit complement gives the
    // matching magnitude without overflowing on i32::MIN
    let magnitude = if value < 0 { !value } else { value };
    if magnitude > 0x7FFF {
        4
    } else if magnitude > 0x7F {
        2
    } else {
        1
    }
}

/// Maps a data byte count to the two size bits of an item prefix.
pub fn size_code(len: usize) -> u32 {
    match len {
        4 => 3,
        2 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Writes `len` bytes of `value` little-endian.
pub fn emit<W: Sink + ?Sized>(sink: &mut W, value: u32, len: usize) {
    sink.write(value as u8);
    if len > 1 {
        sink.write((value >> 8) as u8);
        if len > 2 {
            sink.write((value >> 16) as u8);
            sink.write((value >> 24) as u8);
        }
    }
}

/// Writes `value` with the smallest unsigned encoding.
pub fn emit_unsigned<W: Sink + ?Sized>(sink: &mut W, value: u32) {
    emit(sink, value, unsigned_size(value));
}

/// Writes `value` with the smallest sign-preserving encoding.
pub fn emit_signed<W: Sink + ?Sized>(sink: &mut W, value: i32) {
    match signed_size(value) {
        4 => emit(sink, value as u32, 4),
        2 => emit(sink, value as u16 as u32, 2),
        _ => emit(sink, value as u8 as u32, 1),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unsigned_sizes() {
        assert_eq!(unsigned_size(0), 1);
        assert_eq!(unsigned_size(0xFF), 1);
        assert_eq!(unsigned_size(0x100), 2);
        assert_eq!(unsigned_size(0xFFFF), 2);
        assert_eq!(unsigned_size(0x10000), 4);
        assert_eq!(unsigned_size(u32::MAX), 4);
    }

    #[test]
    fn signed_sizes() {
        assert_eq!(signed_size(0), 1);
        assert_eq!(signed_size(127), 1);
        assert_eq!(signed_size(-128), 1);
        assert_eq!(signed_size(128), 2);
        assert_eq!(signed_size(-129), 2);
        assert_eq!(signed_size(32767), 2);
        assert_eq!(signed_size(-32768), 2);
        assert_eq!(signed_size(32768), 4);
        assert_eq!(signed_size(-32769), 4);
        assert_eq!(signed_size(i32::MAX), 4);
        assert_eq!(signed_size(i32::MIN), 4);
    }

    #[test]
    fn size_codes() {
        assert_eq!(size_code(0), 0);
        assert_eq!(size_code(1), 1);
        assert_eq!(size_code(2), 2);
        assert_eq!(size_code(4), 3);
    }

    #[test]
    fn emits_little_endian() {
        let mut out = Vec::new();
        emit(&mut out, 0x0403_0201, 4);
        assert_eq!(out, [0x01, 0x02, 0x03, 0x04]);

        let mut out = Vec::new();
        emit_unsigned(&mut out, 0x100);
        assert_eq!(out, [0x00, 0x01]);
    }

    fn decode_signed(bytes: &[u8]) -> i32 {
        let mut value: u32 = 0;
        for (i, &b) in bytes.iter().enumerate() {
            value |= u32::from(b) << (8 * i);
        }
        match bytes.len() {
            1 => value as u8 as i8 as i32,
            2 => value as u16 as i16 as i32,
            _ => value as i32,
        }
    }

    #[test]
    fn signed_round_trip() {
        let samples = [
            0,
            1,
            -1,
            127,
            -128,
            128,
            -129,
            32767,
            -32768,
            32768,
            -32769,
            i32::MAX,
            i32::MIN,
        ];
        for value in samples {
            let mut out = Vec::new();
            emit_signed(&mut out, value);
            assert_eq!(out.len(), signed_size(value));
            assert_eq!(decode_signed(&out), value, "value: {value}");
        }
    }
}
