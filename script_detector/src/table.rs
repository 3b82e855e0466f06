// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{find_range, CodepointRange, ExtendedPropertyRange, Script, ScriptId};

/// The immutable script tables every classification runs against.
///
/// A table set is built once with [`TableSetBuilder`](crate::TableSetBuilder) and never
/// changes afterwards, so it can be shared between threads without locking. Moving to
/// a newer Unicode version means building a new table set.
#[derive(Clone, Debug)]
pub struct TableSet {
    pub(crate) scripts: Vec<Script>,
    pub(crate) codepoint_scripts: Vec<CodepointRange>,
    pub(crate) extended_properties: Vec<ExtendedPropertyRange>,
}

impl TableSet {
    /// Returns a copy of all known scripts, ordered by [`ScriptId`].
    pub fn scripts(&self) -> Vec<Script> {
        self.scripts.clone()
    }

    /// Returns a copy of the script ranges, sorted by start.
    pub fn codepoint_scripts(&self) -> Vec<CodepointRange> {
        self.codepoint_scripts.clone()
    }

    /// Returns a copy of the Script_Extensions ranges, sorted by start.
    pub fn extended_properties(&self) -> Vec<ExtendedPropertyRange> {
        self.extended_properties.clone()
    }

    /// Returns the script with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was handed out by a different table set and is out of range here.
    #[inline]
    pub fn script(&self, id: ScriptId) -> &Script {
        &self.scripts[id.index()]
    }

    /// Finds a script by short or long name, ignoring ASCII case.
    pub fn resolve(&self, name: &str) -> Option<&Script> {
        self.scripts.iter().find(|script| script.is_named(name))
    }

    /// Returns the script of a single code point, or `None` if no range covers it.
    pub fn script_of(&self, scalar: u32) -> Option<&Script> {
        self.range_of(scalar).map(|range| self.script(range.script))
    }

    #[inline]
    pub(crate) fn range_of(&self, scalar: u32) -> Option<&CodepointRange> {
        find_range(&self.codepoint_scripts, scalar)
    }

    #[inline]
    pub(crate) fn extended_range_of(&self, scalar: u32) -> Option<&ExtendedPropertyRange> {
        find_range(&self.extended_properties, scalar)
    }
}
