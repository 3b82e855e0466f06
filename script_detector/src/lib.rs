// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classifies text by the Unicode script (Latin, Hebrew, Arabic, …) of each character.
//!
//! All queries run against a [`TableSet`]: the list of scripts, the sorted code point
//! ranges of the `Script` property, and the sorted ranges of the `Script_Extensions`
//! property. A table set is assembled once with [`TableSetBuilder`] and is immutable
//! afterwards; the `script_detector_data` crate builds one from the Unicode Character
//! Database.
//!
//! Two questions can be asked of a text:
//!
//! - [`TableSet::used_scripts`]: which scripts is it written in, and in what share?
//!   Common characters such as digits and spaces are ignored.
//! - [`TableSet::probably_in_script`] / [`TableSet::is_in_script`]: how much of it can be
//!   written in one given script? Common characters match any script here.
//!
//! Text is anything implementing [`ScalarSource`]; UTF-8 and UTF-16 are both walked
//! as Unicode scalar values.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use script_detector::{ScriptCode, TableSetBuilder};
//!
//! let mut builder = TableSetBuilder::new();
//! let common = builder.script(ScriptCode::COMMON, "Common").unwrap();
//! let latin = builder.script(ScriptCode::parse("Latn").unwrap(), "Latin").unwrap();
//! let hebrew = builder.script(ScriptCode::parse("Hebr").unwrap(), "Hebrew").unwrap();
//! builder.push_range(0x20..=0x40, common);
//! builder.push_range(0x41..=0x5A, latin);
//! builder.push_range(0x61..=0x7A, latin);
//! builder.push_range(0x5D0..=0x5EA, hebrew);
//! let tables = builder.build().unwrap();
//!
//! let used = tables.used_scripts("Shalom שלום");
//! assert_eq!(used.len(), 2);
//! assert_eq!(used[0].long_name, "Latin");
//! assert!((used[0].probability - 0.6).abs() < 1e-6);
//!
//! assert_eq!(tables.probably_in_script("123", "latin"), Ok(1.0));
//! assert_eq!(tables.is_in_script("abc def", "Latn"), Ok(true));
//! assert!(tables.is_in_script("abc", "Klingon").is_err());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod builder;
mod distribution;
mod error;
mod membership;
mod range;
mod scalars;
mod script;
mod table;

#[cfg(test)]
mod testing;

pub use builder::TableSetBuilder;
pub use distribution::{DistributionOptions, ScriptProbability};
pub use error::{TableError, UnknownScriptError};
pub use membership::MembershipOptions;
pub use range::{find_range, CodepointRange, ExtendedPropertyRange, ScalarRange};
pub use scalars::ScalarSource;
pub use script::{ParseScriptCodeError, Script, ScriptCode, ScriptId, ScriptKind};
pub use table::TableSet;
