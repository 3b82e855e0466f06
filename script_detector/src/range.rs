// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{ScriptCode, ScriptId};

/// An inclusive interval of code points carrying some payload.
///
/// Tables of ranges are kept sorted by [`start`](Self::start) and never overlap,
/// which is what [`find_range`] relies on.
pub trait ScalarRange {
    /// First code point of the range.
    fn start(&self) -> u32;

    /// Last code point of the range (inclusive).
    fn end(&self) -> u32;

    /// Returns `true` if `scalar` lies within the range.
    #[inline]
    fn contains(&self, scalar: u32) -> bool {
        self.start() <= scalar && scalar <= self.end()
    }
}

/// A maximal run of code points that all belong to the same script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodepointRange {
    /// First code point.
    pub start: u32,
    /// Last code point (inclusive).
    pub end: u32,
    /// The owning script.
    pub script: ScriptId,
}

impl ScalarRange for CodepointRange {
    #[inline(always)]
    fn start(&self) -> u32 {
        self.start
    }

    #[inline(always)]
    fn end(&self) -> u32 {
        self.end
    }
}

/// A maximal run of code points sharing the same Script_Extensions value.
///
/// Boundaries are independent of [`CodepointRange`] boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedPropertyRange {
    /// First code point.
    pub start: u32,
    /// Last code point (inclusive).
    pub end: u32,
    /// The scripts the code points may be used with, sorted and without duplicates.
    pub scripts: Vec<ScriptCode>,
}

impl ExtendedPropertyRange {
    /// Returns `true` if `script` is one of the extension scripts.
    #[inline]
    pub fn allows(&self, script: ScriptCode) -> bool {
        self.scripts.contains(&script)
    }
}

impl ScalarRange for ExtendedPropertyRange {
    #[inline(always)]
    fn start(&self) -> u32 {
        self.start
    }

    #[inline(always)]
    fn end(&self) -> u32 {
        self.end
    }
}

/// Finds the range covering `scalar` in a sorted, non-overlapping table.
///
/// This is a binary search on the range starts, `O(log n)` in the table size.
pub fn find_range<R: ScalarRange>(ranges: &[R], scalar: u32) -> Option<&R> {
    // Index of the first range starting after `scalar`; the candidate is just before it.
    let after = ranges.partition_point(|range| range.start() <= scalar);
    let candidate = ranges.get(after.checked_sub(1)?)?;
    candidate.contains(scalar).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::{find_range, CodepointRange, ExtendedPropertyRange, ScalarRange};
    use crate::{ScriptCode, ScriptId};
    use alloc::vec;

    fn ranges() -> [CodepointRange; 3] {
        [
            CodepointRange {
                start: 0x41,
                end: 0x5A,
                script: ScriptId(0),
            },
            CodepointRange {
                start: 0x5B,
                end: 0x60,
                script: ScriptId(1),
            },
            CodepointRange {
                start: 0x5D0,
                end: 0x5EA,
                script: ScriptId(2),
            },
        ]
    }

    #[test]
    fn finds_covering_range() {
        let ranges = ranges();
        assert_eq!(find_range(&ranges, 0x41).map(|r| r.script), Some(ScriptId(0)));
        assert_eq!(find_range(&ranges, 0x5A).map(|r| r.script), Some(ScriptId(0)));
        assert_eq!(find_range(&ranges, 0x5B).map(|r| r.script), Some(ScriptId(1)));
        assert_eq!(find_range(&ranges, 0x5E0).map(|r| r.script), Some(ScriptId(2)));
    }

    #[test]
    fn gaps_and_edges_find_nothing() {
        let ranges = ranges();
        assert!(find_range(&ranges, 0).is_none());
        assert!(find_range(&ranges, 0x40).is_none());
        assert!(find_range(&ranges, 0x61).is_none());
        assert!(find_range(&ranges, 0x5EB).is_none());
        assert!(find_range(&ranges, 0x10FFFF).is_none());
        assert!(find_range::<CodepointRange>(&[], 0x41).is_none());
    }

    #[test]
    fn every_match_contains_the_scalar() {
        let ranges = ranges();
        for scalar in 0..0x700 {
            let matches = ranges.iter().filter(|r| r.contains(scalar)).count();
            match find_range(&ranges, scalar) {
                Some(range) => {
                    assert!(range.start <= scalar && scalar <= range.end, "{scalar:#x}");
                    assert_eq!(matches, 1, "{scalar:#x} must be covered exactly once");
                }
                None => assert_eq!(matches, 0, "{scalar:#x} is covered but was not found"),
            }
        }
    }

    #[test]
    fn extended_ranges_use_the_same_lookup() {
        let arab = ScriptCode::parse("Arab").unwrap();
        let syrc = ScriptCode::parse("Syrc").unwrap();
        let ranges = [
            ExtendedPropertyRange {
                start: 0x60C,
                end: 0x60C,
                scripts: vec![arab, syrc],
            },
            ExtendedPropertyRange {
                start: 0x640,
                end: 0x640,
                scripts: vec![arab],
            },
        ];
        let comma = find_range(&ranges, 0x60C).unwrap();
        assert!(comma.allows(syrc));
        assert!(!comma.allows(ScriptCode::parse("Latn").unwrap()));
        assert!(find_range(&ranges, 0x60D).is_none());
    }
}
