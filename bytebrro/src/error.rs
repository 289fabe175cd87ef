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

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A decode was handed a byte sequence of the wrong length.
    #[error("{op}: expected {expected} bytes, got {actual}")]
    WrongLength {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value outside the six supported primitive kinds was offered.
    #[error("{op}: unsupported value type")]
    UnsupportedType { op: &'static str },
}

pub type Result<T> = std::result::Result<T, CodecError>;
