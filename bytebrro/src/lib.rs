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

//! Fixed-width big-endian byte encoding of primitive values.
//!
//! Every supported type encodes to a byte sequence of a fixed, known width
//! (8, 4 or 2 bytes) and decodes back bit-for-bit. Floats go through their
//! IEEE-754 bit pattern, so NaN payloads and signed zero survive the trip.
//! A pair of values can be concatenated into a single sequence; the caller
//! has to know the two widths to take it apart again, nothing is embedded.

pub mod codec;
pub mod error;
pub mod pair;

pub use error::{CodecError, Result};
pub use pair::Value;
