// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use crate::ScriptId;

/// The script name passed to a membership query matches no known script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownScriptError {
    name: String,
}

impl UnknownScriptError {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The name that could not be resolved.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid short or long script name: {:?}", self.name)
    }
}

impl core::error::Error for UnknownScriptError {}

/// An error returned from [`TableSetBuilder::build`](crate::TableSetBuilder::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// More scripts were registered than a [`ScriptId`] can address.
    TooManyScripts,
    /// Two different scripts were registered under the same long name.
    DuplicateLongName(String),
    /// A range ends before it starts, or goes past `U+10FFFF`.
    InvalidRange {
        /// First code point of the offending range.
        start: u32,
        /// Last code point of the offending range.
        end: u32,
    },
    /// A range overlaps the range before it.
    Overlap {
        /// First code point of the offending range.
        start: u32,
        /// Last code point of the offending range.
        end: u32,
    },
    /// A range refers to a script that was never registered.
    UnregisteredScript(ScriptId),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyScripts => f.write_str("too many scripts"),
            Self::DuplicateLongName(name) => write!(f, "duplicate script long name {name:?}"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid code point range U+{start:04X}..U+{end:04X}")
            }
            Self::Overlap { start, end } => {
                write!(f, "code point range U+{start:04X}..U+{end:04X} overlaps its predecessor")
            }
            Self::UnregisteredScript(id) => write!(f, "range refers to unregistered script {id:?}"),
        }
    }
}

impl core::error::Error for TableError {}
