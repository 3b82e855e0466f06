// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use crate::{
    CodepointRange, ExtendedPropertyRange, ScalarRange, Script, ScriptCode, ScriptId, TableError,
    TableSet,
};

const MAX_SCALAR: u32 = 0x10FFFF;

/// Assembles a [`TableSet`] from script names and code point ranges.
///
/// Ranges may be pushed in any order. Adjacent ranges with the same payload are
/// merged, so feeding one code point at a time still produces compact tables.
/// All validation happens in [`build`](Self::build); a built table set is never
/// checked again.
#[derive(Clone, Debug, Default)]
pub struct TableSetBuilder {
    scripts: Vec<Script>,
    ranges: Vec<CodepointRange>,
    extended: Vec<ExtendedPropertyRange>,
}

impl TableSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a script and returns its id.
    ///
    /// Registering the same short name again returns the existing id and keeps the
    /// first long name.
    pub fn script(
        &mut self,
        short_name: ScriptCode,
        long_name: &str,
    ) -> Result<ScriptId, TableError> {
        if let Some(script) = self.scripts.iter().find(|s| s.short_name() == short_name) {
            return Ok(script.id());
        }
        let index =
            u16::try_from(self.scripts.len()).map_err(|_| TableError::TooManyScripts)?;
        let id = ScriptId(index);
        self.scripts
            .push(Script::new(short_name, String::from(long_name), id));
        Ok(id)
    }

    /// Assigns the code points in `range` to `script`.
    pub fn push_range(&mut self, range: RangeInclusive<u32>, script: ScriptId) {
        let next = CodepointRange {
            start: *range.start(),
            end: *range.end(),
            script,
        };
        push_coalesced(&mut self.ranges, next);
    }

    /// Records the Script_Extensions value of the code points in `range`.
    pub fn push_extended(
        &mut self,
        range: RangeInclusive<u32>,
        scripts: impl IntoIterator<Item = ScriptCode>,
    ) {
        let mut scripts: Vec<ScriptCode> = scripts.into_iter().collect();
        scripts.sort_unstable();
        scripts.dedup();
        let next = ExtendedPropertyRange {
            start: *range.start(),
            end: *range.end(),
            scripts,
        };
        push_coalesced(&mut self.extended, next);
    }

    /// Validates, sorts and merges the collected data.
    ///
    /// The reserved pseudo-scripts `Zyyy`, `Zinh` and `Zzzz` are registered if they
    /// are missing.
    pub fn build(mut self) -> Result<TableSet, TableError> {
        for (code, name) in [
            (ScriptCode::COMMON, "Common"),
            (ScriptCode::INHERITED, "Inherited"),
            (ScriptCode::UNKNOWN, "Unknown"),
        ] {
            self.script(code, name)?;
        }

        for (index, script) in self.scripts.iter().enumerate() {
            let duplicate = self.scripts[..index]
                .iter()
                .any(|earlier| earlier.long_name().eq_ignore_ascii_case(script.long_name()));
            if duplicate {
                return Err(TableError::DuplicateLongName(script.long_name().into()));
            }
        }

        if let Some(range) = self
            .ranges
            .iter()
            .find(|range| range.script.index() >= self.scripts.len())
        {
            return Err(TableError::UnregisteredScript(range.script));
        }

        let codepoint_scripts = coalesce(self.ranges)?;
        let extended_properties = coalesce(self.extended)?;

        log::debug!(
            "built script tables: {} scripts, {} ranges, {} extended ranges",
            self.scripts.len(),
            codepoint_scripts.len(),
            extended_properties.len()
        );

        Ok(TableSet {
            scripts: self.scripts,
            codepoint_scripts,
            extended_properties,
        })
    }
}

/// Ranges that can absorb an adjacent successor with the same payload.
trait Coalesce: ScalarRange {
    fn same_payload(&self, other: &Self) -> bool;

    fn set_end(&mut self, end: u32);

    fn is_valid(&self) -> bool {
        self.start() <= self.end() && self.end() <= MAX_SCALAR
    }

    fn try_absorb(&mut self, next: &Self) -> bool {
        let adjacent = self.end().checked_add(1) == Some(next.start());
        if adjacent && self.is_valid() && next.is_valid() && self.same_payload(next) {
            self.set_end(next.end());
            true
        } else {
            false
        }
    }
}

impl Coalesce for CodepointRange {
    fn same_payload(&self, other: &Self) -> bool {
        self.script == other.script
    }

    fn set_end(&mut self, end: u32) {
        self.end = end;
    }
}

impl Coalesce for ExtendedPropertyRange {
    fn same_payload(&self, other: &Self) -> bool {
        self.scripts == other.scripts
    }

    fn set_end(&mut self, end: u32) {
        self.end = end;
    }
}

fn push_coalesced<R: Coalesce>(ranges: &mut Vec<R>, next: R) {
    if let Some(last) = ranges.last_mut() {
        if last.try_absorb(&next) {
            return;
        }
    }
    ranges.push(next);
}

fn coalesce<R: Coalesce>(mut ranges: Vec<R>) -> Result<Vec<R>, TableError> {
    if let Some(range) = ranges.iter().find(|range| !range.is_valid()) {
        return Err(TableError::InvalidRange {
            start: range.start(),
            end: range.end(),
        });
    }

    ranges.sort_by_key(|range| range.start());

    let mut merged: Vec<R> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                return Err(TableError::Overlap {
                    start: range.start(),
                    end: range.end(),
                });
            }
            if last.try_absorb(&range) {
                continue;
            }
        }
        merged.push(range);
    }
    Ok(merged)
}
