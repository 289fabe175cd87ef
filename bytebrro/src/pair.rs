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

use std::any::Any;

use log::debug;

use crate::codec;
use crate::error::{CodecError, Result};

/// One value of the six encodable kinds.
///
/// Closed set, so encoding dispatch is exhaustive at compile time. The
/// `Char` variant carries a UTF-16 code unit, which is what keeps the
/// 2-byte width exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I64(i64),
    I32(i32),
    F64(f64),
    F32(f32),
    Char(u16),
    I16(i16),
}

impl Value {
    /// Encoded width in bytes of this value's kind.
    pub fn width(&self) -> usize {
        match self {
            Value::I64(_) | Value::F64(_) => codec::I64_WIDTH,
            Value::I32(_) | Value::F32(_) => codec::I32_WIDTH,
            Value::Char(_) | Value::I16(_) => codec::I16_WIDTH,
        }
    }

    /// Encodes this value with the codec matching its kind.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::I64(v) => {
                debug!("Encoding as i64");
                codec::encode_i64(*v).to_vec()
            }
            Value::I32(v) => {
                debug!("Encoding as i32");
                codec::encode_i32(*v).to_vec()
            }
            Value::F64(v) => {
                debug!("Encoding as f64");
                codec::encode_f64(*v).to_vec()
            }
            Value::F32(v) => {
                debug!("Encoding as f32");
                codec::encode_f32(*v).to_vec()
            }
            Value::Char(v) => {
                debug!("Encoding as char16");
                codec::encode_char(*v).to_vec()
            }
            Value::I16(v) => {
                debug!("Encoding as i16");
                codec::encode_i16(*v).to_vec()
            }
        }
    }

    /// Runtime bridge for call sites where the element type is generic.
    ///
    /// Anything outside the six supported kinds is refused. Within the
    /// closed set, prefer constructing the variant directly.
    pub fn from_any(value: &dyn Any) -> Result<Self> {
        if let Some(v) = value.downcast_ref::<i64>() {
            Ok(Value::I64(*v))
        } else if let Some(v) = value.downcast_ref::<i32>() {
            Ok(Value::I32(*v))
        } else if let Some(v) = value.downcast_ref::<f64>() {
            Ok(Value::F64(*v))
        } else if let Some(v) = value.downcast_ref::<f32>() {
            Ok(Value::F32(*v))
        } else if let Some(v) = value.downcast_ref::<u16>() {
            Ok(Value::Char(*v))
        } else if let Some(v) = value.downcast_ref::<i16>() {
            Ok(Value::I16(*v))
        } else {
            Err(CodecError::UnsupportedType { op: "from_any" })
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Char(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::I16(v)
    }
}

/// Concatenates the encodings of two values, first then second.
///
/// No delimiter or length prefix goes in between; the caller has to know
/// both widths to split the result again.
pub fn encode_pair(first: &Value, second: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(first.width() + second.width());
    out.extend_from_slice(&first.to_bytes());
    out.extend_from_slice(&second.to_bytes());
    out
}

/// Pair encoding for call sites that only have `&dyn Any` elements.
pub fn encode_pair_any(first: &dyn Any, second: &dyn Any) -> Result<Vec<u8>> {
    let first = Value::from_any(first)?;
    let second = Value::from_any(second)?;
    Ok(encode_pair(&first, &second))
}

/// Splits 16 bytes into two i64 values, in original order.
///
/// Only the i64/i64 combination gets a decoder. The bytes carry no record
/// of the split point, so every other combination would need its own
/// width-pair entry point; not built out until something needs one.
pub fn decode_pair_i64(bytes: &[u8]) -> Result<(i64, i64)> {
    if bytes.len() != 2 * codec::I64_WIDTH {
        return Err(CodecError::WrongLength {
            op: "decode_pair_i64",
            expected: 2 * codec::I64_WIDTH,
            actual: bytes.len(),
        });
    }
    debug!("Decoding pair as i64/i64");
    let (first, second) = bytes.split_at(codec::I64_WIDTH);
    Ok((codec::decode_i64(first)?, codec::decode_i64(second)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_i64_roundtrip() {
        let encoded = encode_pair(&Value::I64(5), &Value::I64(7));
        assert_eq!(encoded.len(), 16);
        assert_eq!(decode_pair_i64(&encoded).unwrap(), (5, 7));
    }

    #[test]
    fn test_pair_mixed_widths() {
        let encoded = encode_pair(&Value::I16(258), &Value::F32(1.0));
        assert_eq!(encoded, [1, 2, 63, 128, 0, 0]);
    }

    #[test]
    fn test_pair_wrong_length() {
        assert_eq!(
            decode_pair_i64(&[0; 12]),
            Err(CodecError::WrongLength {
                op: "decode_pair_i64",
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn test_from_any() {
        assert_eq!(Value::from_any(&5i64).unwrap(), Value::I64(5));
        assert_eq!(Value::from_any(&65u16).unwrap(), Value::Char(65));
        let err = Value::from_any(&"nope").unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedType { .. }));
    }

    #[test]
    fn test_encode_pair_any() {
        let encoded = encode_pair_any(&5i64, &7i64).unwrap();
        assert_eq!(decode_pair_i64(&encoded).unwrap(), (5, 7));
        assert!(encode_pair_any(&5i64, &"seven").is_err());
    }
}
