// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding of text into Unicode scalar values.

use alloc::string::String;

/// Text that can be walked as a sequence of Unicode scalar values.
///
/// The classifiers only ever see code points, never code units, so characters
/// outside the Basic Multilingual Plane count once no matter how they are encoded.
/// Calling [`scalars`](Self::scalars) again restarts the walk from the beginning.
///
/// `None` behaves like empty text.
pub trait ScalarSource {
    /// Returns the code points of the text in logical order.
    fn scalars(&self) -> impl Iterator<Item = u32> + '_;
}

impl ScalarSource for str {
    fn scalars(&self) -> impl Iterator<Item = u32> + '_ {
        self.chars().map(u32::from)
    }
}

impl ScalarSource for String {
    fn scalars(&self) -> impl Iterator<Item = u32> + '_ {
        self.as_str().scalars()
    }
}

impl ScalarSource for [char] {
    fn scalars(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter().copied().map(u32::from)
    }
}

/// UTF-16 code units.
///
/// Surrogate pairs decode to a single scalar value. An unpaired surrogate is
/// yielded as its own code unit value: no script covers the surrogate block, so
/// it classifies as Unknown.
impl ScalarSource for [u16] {
    fn scalars(&self) -> impl Iterator<Item = u32> + '_ {
        char::decode_utf16(self.iter().copied()).map(|unit| match unit {
            Ok(ch) => u32::from(ch),
            Err(err) => u32::from(err.unpaired_surrogate()),
        })
    }
}

impl<T: ScalarSource + ?Sized> ScalarSource for Option<&T> {
    fn scalars(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter().flat_map(|text| text.scalars())
    }
}
