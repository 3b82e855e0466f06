// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `script_detector_data` builds the Unicode script tables that `script_detector` classifies against.
//! The data comes from ICU4X's compiled Unicode Character Database, so the Unicode version follows the
//! `icu_properties` release in use.
//!
//! [`tables`] returns the process-wide [`TableSet`], built on first use. The free functions of this
//! crate are shorthands for querying it.
//!
//! ```
//! let used = script_detector_data::used_scripts("Hello translates in Hebrew to: שלום");
//! assert_eq!(used[0].long_name, "Latin");
//! assert_eq!(used[1].long_name, "Hebrew");
//!
//! assert_eq!(script_detector_data::is_in_script("123 +", "Latn"), Ok(true));
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

use std::sync::OnceLock;

use icu_properties::props::Script as IcuScript;
use icu_properties::script::ScriptWithExtensions;
use icu_properties::{CodePointMapData, PropertyNamesLong, PropertyNamesShort};
use script_detector::{
    CodepointRange, DistributionOptions, ExtendedPropertyRange, MembershipOptions, ScalarSource,
    Script, ScriptCode, ScriptId, ScriptProbability, TableError, TableSet, TableSetBuilder,
    UnknownScriptError,
};

/// ICU4C script values are small integers; this leaves room for future scripts.
const ICU_SCRIPT_VALUE_LIMIT: u16 = 1024;

const MAX_SCALAR: u32 = 0x10FFFF;

/// Returns the table set built from the compiled Unicode data.
///
/// The first call builds the tables; every later call, from any thread, sees the
/// same fully built instance.
pub fn tables() -> &'static TableSet {
    static TABLES: OnceLock<TableSet> = OnceLock::new();
    TABLES.get_or_init(|| {
        build_tables().expect("ICU4X script data is sorted and non-overlapping by construction")
    })
}

/// Builds a fresh table set from the compiled Unicode data.
///
/// Every script with both a short and a long property value name is registered, in
/// ICU4C value order. Every code point whose Script_Extensions value differs from its
/// Script value gets an extended range.
pub fn build_tables() -> Result<TableSet, TableError> {
    let short_names = PropertyNamesShort::<IcuScript>::new();
    let long_names = PropertyNamesLong::<IcuScript>::new();

    let mut builder = TableSetBuilder::new();
    // Indexed by ICU4C value.
    let mut registered: Vec<Option<(ScriptId, ScriptCode)>> = Vec::new();
    let mut long_seen: Vec<&str> = Vec::new();
    for value in 0..ICU_SCRIPT_VALUE_LIMIT {
        let script = IcuScript::from_icu4c_value(value);
        let names = short_names
            .get(script)
            .and_then(|short| ScriptCode::parse(short).ok())
            .zip(long_names.get(script).filter(|long| !long.is_empty()));
        let entry = match names {
            // ICU4C-only aliases can repeat a long name; the first value wins.
            Some((_, long)) if long_seen.contains(&long) => None,
            Some((code, long)) => {
                long_seen.push(long);
                Some((builder.script(code, long)?, code))
            }
            None => None,
        };
        registered.push(entry);
    }
    let lookup = |script: IcuScript| {
        registered
            .get(usize::from(script.to_icu4c_value()))
            .copied()
            .flatten()
    };

    let scripts = CodePointMapData::<IcuScript>::new();
    let extensions = ScriptWithExtensions::new();
    let mut unnamed = 0_usize;

    for cp in 0..=MAX_SCALAR {
        let script = scripts.get32(cp);
        if script == IcuScript::Unknown {
            // Not covered means Unknown.
            continue;
        }
        let Some((id, _)) = lookup(script) else {
            unnamed += 1;
            continue;
        };
        builder.push_range(cp..=cp, id);

        let scx = extensions.get_script_extensions_val32(cp);
        if scx.iter().eq([script]) {
            continue;
        }
        let codes = scx.iter().filter_map(|ext| lookup(ext).map(|(_, code)| code));
        builder.push_extended(cp..=cp, codes);
    }

    if unnamed > 0 {
        log::warn!(
            "{unnamed} code points belong to scripts without names and are treated as Unknown"
        );
    }

    let tables = builder.build()?;
    log::debug!(
        "loaded Unicode script tables: {} scripts, {} ranges, {} extended ranges",
        tables.scripts().len(),
        tables.codepoint_scripts().len(),
        tables.extended_properties().len()
    );
    Ok(tables)
}

/// Returns a copy of all known scripts. See [`TableSet::scripts`].
pub fn scripts() -> Vec<Script> {
    tables().scripts()
}

/// Returns a copy of the script ranges. See [`TableSet::codepoint_scripts`].
pub fn codepoint_scripts() -> Vec<CodepointRange> {
    tables().codepoint_scripts()
}

/// Returns a copy of the Script_Extensions ranges. See [`TableSet::extended_properties`].
pub fn extended_properties() -> Vec<ExtendedPropertyRange> {
    tables().extended_properties()
}

/// See [`TableSet::used_scripts`].
pub fn used_scripts<T: ScalarSource + ?Sized>(text: &T) -> Vec<ScriptProbability> {
    tables().used_scripts(text)
}

/// See [`TableSet::used_scripts_with`].
pub fn used_scripts_with<T: ScalarSource + ?Sized>(
    text: &T,
    options: DistributionOptions,
) -> Vec<ScriptProbability> {
    tables().used_scripts_with(text, options)
}

/// See [`TableSet::probably_in_script`].
pub fn probably_in_script<T: ScalarSource + ?Sized>(
    text: &T,
    script_name: &str,
) -> Result<f32, UnknownScriptError> {
    tables().probably_in_script(text, script_name)
}

/// See [`TableSet::probably_in_script_with`].
pub fn probably_in_script_with<T: ScalarSource + ?Sized>(
    text: &T,
    script_name: &str,
    options: MembershipOptions,
) -> Result<f32, UnknownScriptError> {
    tables().probably_in_script_with(text, script_name, options)
}

/// See [`TableSet::is_in_script`].
pub fn is_in_script<T: ScalarSource + ?Sized>(
    text: &T,
    script_name: &str,
) -> Result<bool, UnknownScriptError> {
    tables().is_in_script(text, script_name)
}

/// See [`TableSet::is_in_script_with`].
pub fn is_in_script_with<T: ScalarSource + ?Sized>(
    text: &T,
    script_name: &str,
    options: MembershipOptions,
) -> Result<bool, UnknownScriptError> {
    tables().is_in_script_with(text, script_name, options)
}
