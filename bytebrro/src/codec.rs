/*
Copyright 2024 NetApp, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    https://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use crate::error::{CodecError, Result};

/// Encoded width of the 8-byte kinds (i64, f64)
pub const I64_WIDTH: usize = 8;
/// Encoded width of the 4-byte kinds (i32, f32)
pub const I32_WIDTH: usize = 4;
/// Encoded width of the 2-byte kinds (char16, i16)
pub const I16_WIDTH: usize = 2;

/// Encodes an i64 into 8 big-endian bytes.
///
/// Bytes are produced least-significant first by shifting and masking, then
/// the array is reversed so the most-significant byte ends up in front. The
/// byte order is spelled out here rather than delegated, so it stays
/// auditable at a glance.
pub fn encode_i64(value: i64) -> [u8; I64_WIDTH] {
    let mut bytes = [0u8; I64_WIDTH];
    for (pos, byte) in bytes.iter_mut().enumerate() {
        *byte = ((value >> (8 * pos)) & 0xFF) as u8;
    }
    bytes.reverse();
    bytes
}

/// Rebuilds an i64 from exactly 8 big-endian bytes.
pub fn decode_i64(bytes: &[u8]) -> Result<i64> {
    if bytes.len() != I64_WIDTH {
        return Err(CodecError::WrongLength {
            op: "decode_i64",
            expected: I64_WIDTH,
            actual: bytes.len(),
        });
    }
    let mut value = 0i64;
    // Least significant byte first, shift left by one byte every time
    for (i, byte) in bytes.iter().rev().enumerate() {
        value |= (*byte as i64) << (8 * i);
    }
    Ok(value)
}

/// Encodes an i32 into 4 big-endian bytes. Same shape as the i64 path.
pub fn encode_i32(value: i32) -> [u8; I32_WIDTH] {
    let mut bytes = [0u8; I32_WIDTH];
    for (pos, byte) in bytes.iter_mut().enumerate() {
        *byte = ((value >> (8 * pos)) & 0xFF) as u8;
    }
    bytes.reverse();
    bytes
}

/// Rebuilds an i32 from exactly 4 big-endian bytes.
pub fn decode_i32(bytes: &[u8]) -> Result<i32> {
    if bytes.len() != I32_WIDTH {
        return Err(CodecError::WrongLength {
            op: "decode_i32",
            expected: I32_WIDTH,
            actual: bytes.len(),
        });
    }
    let mut value = 0i32;
    for (i, byte) in bytes.iter().rev().enumerate() {
        value |= (*byte as i32) << (8 * i);
    }
    Ok(value)
}

/// Encodes an f64 into 8 big-endian bytes of its IEEE-754 bit pattern.
///
/// `to_bits` is a pure reinterpretation, never an arithmetic conversion, so
/// NaN payloads and -0.0 encode exactly as they are.
pub fn encode_f64(value: f64) -> [u8; I64_WIDTH] {
    encode_i64(value.to_bits() as i64)
}

/// Rebuilds an f64 from exactly 8 big-endian bytes of its bit pattern.
pub fn decode_f64(bytes: &[u8]) -> Result<f64> {
    Ok(f64::from_bits(decode_i64(bytes)? as u64))
}

/// Encodes an f32 into 4 big-endian bytes of its IEEE-754 bit pattern.
pub fn encode_f32(value: f32) -> [u8; I32_WIDTH] {
    encode_i32(value.to_bits() as i32)
}

/// Rebuilds an f32 from exactly 4 big-endian bytes of its bit pattern.
pub fn decode_f32(bytes: &[u8]) -> Result<f32> {
    Ok(f32::from_bits(decode_i32(bytes)? as u32))
}

/// Encodes a UTF-16 code unit into 2 big-endian bytes.
///
/// Widens to i32, encodes through the 4-byte path and keeps the low-order
/// half. The 2-byte kinds ride on the 4-byte codec so the two can never
/// drift apart.
pub fn encode_char(code: u16) -> [u8; I16_WIDTH] {
    let wide = encode_i32(code as i32);
    [wide[2], wide[3]]
}

/// Rebuilds a UTF-16 code unit from exactly 2 big-endian bytes.
pub fn decode_char(bytes: &[u8]) -> Result<u16> {
    if bytes.len() != I16_WIDTH {
        return Err(CodecError::WrongLength {
            op: "decode_char",
            expected: I16_WIDTH,
            actual: bytes.len(),
        });
    }
    // Zero-pad to the full 4 bytes and take the low 16 bits back out
    let mut padded = [0u8; I32_WIDTH];
    padded[I32_WIDTH - I16_WIDTH..].copy_from_slice(bytes);
    Ok(decode_i32(&padded)? as u16)
}

/// Encodes an i16 into 2 big-endian bytes, through the 4-byte path.
///
/// The widen sign-extends, but the kept low-order half is the two's
/// complement bytes of the original value either way.
pub fn encode_i16(value: i16) -> [u8; I16_WIDTH] {
    let wide = encode_i32(value as i32);
    [wide[2], wide[3]]
}

/// Rebuilds an i16 from exactly 2 big-endian bytes.
pub fn decode_i16(bytes: &[u8]) -> Result<i16> {
    if bytes.len() != I16_WIDTH {
        return Err(CodecError::WrongLength {
            op: "decode_i16",
            expected: I16_WIDTH,
            actual: bytes.len(),
        });
    }
    let mut padded = [0u8; I32_WIDTH];
    padded[I32_WIDTH - I16_WIDTH..].copy_from_slice(bytes);
    Ok(decode_i32(&padded)? as i16)
}
