// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{CodepointRange, ScalarSource, ScriptCode, ScriptKind, TableSet, UnknownScriptError};

/// Options for [`TableSet::probably_in_script_with`] and [`TableSet::is_in_script_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MembershipOptions {
    /// Common characters (digits, spaces, punctuation) never match.
    ///
    /// Defaults to `false`.
    pub strict: bool,
    /// A Common character whose Script_Extensions value does not list the target
    /// script is a mismatch. Has no effect when [`strict`](Self::strict) is set.
    ///
    /// Defaults to `true`.
    pub apply_extended_properties: bool,
}

impl Default for MembershipOptions {
    fn default() -> Self {
        Self {
            strict: false,
            apply_extended_properties: true,
        }
    }
}

impl TableSet {
    /// Returns the fraction of characters in `text` that can be written in `script_name`.
    ///
    /// Equivalent to [`probably_in_script_with`](Self::probably_in_script_with) with default options.
    pub fn probably_in_script<T: ScalarSource + ?Sized>(
        &self,
        text: &T,
        script_name: &str,
    ) -> Result<f32, UnknownScriptError> {
        self.probably_in_script_with(text, script_name, MembershipOptions::default())
    }

    /// Returns the fraction of characters in `text` that can be written in `script_name`.
    ///
    /// `script_name` is a short or long name (`Latn`, `latin`), matched ignoring ASCII case.
    /// Unlike [`used_scripts`](Self::used_scripts), every character counts towards the
    /// denominator: Unknown and uncovered characters are mismatches, Common characters
    /// match unless excluded by `options`, and Inherited characters match if the last
    /// non-Common character did.
    ///
    /// Empty or `None` text returns `1.0` without resolving `script_name`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownScriptError`] if `text` is not empty and `script_name` names
    /// no known script.
    pub fn probably_in_script_with<T: ScalarSource + ?Sized>(
        &self,
        text: &T,
        script_name: &str,
        options: MembershipOptions,
    ) -> Result<f32, UnknownScriptError> {
        let mut scalars = text.scalars().peekable();
        // Empty text passes before the name is looked at.
        if scalars.peek().is_none() {
            return Ok(1.0);
        }
        let target = self
            .resolve(script_name)
            .ok_or_else(|| UnknownScriptError::new(script_name))?;

        let mut matched = 0_usize;
        let mut total = 0_usize;
        let mut last: Option<&CodepointRange> = None;

        for scalar in scalars {
            total += 1;
            let Some(range) = self.range_of(scalar) else {
                continue;
            };
            let range = match self.script(range.script).kind() {
                ScriptKind::Unknown => continue,
                ScriptKind::Common => {
                    if self.common_matches(scalar, target.short_name(), options) {
                        matched += 1;
                    }
                    continue;
                }
                // Script_Extensions of the mark itself are not consulted.
                ScriptKind::Inherited => match last {
                    Some(previous) => previous,
                    None => continue,
                },
                ScriptKind::Normal => range,
            };
            if range.script == target.id() {
                matched += 1;
            }
            last = Some(range);
        }

        log::trace!("{matched} of {total} characters match {}", target.short_name());
        Ok(matched as f32 / total as f32)
    }

    /// Returns `true` if every character in `text` can be written in `script_name`.
    ///
    /// Equivalent to [`is_in_script_with`](Self::is_in_script_with) with default options.
    pub fn is_in_script<T: ScalarSource + ?Sized>(
        &self,
        text: &T,
        script_name: &str,
    ) -> Result<bool, UnknownScriptError> {
        self.is_in_script_with(text, script_name, MembershipOptions::default())
    }

    /// Returns `true` if [`probably_in_script_with`](Self::probably_in_script_with) is exactly `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownScriptError`] if `script_name` names no known script.
    pub fn is_in_script_with<T: ScalarSource + ?Sized>(
        &self,
        text: &T,
        script_name: &str,
        options: MembershipOptions,
    ) -> Result<bool, UnknownScriptError> {
        let probability = self.probably_in_script_with(text, script_name, options)?;
        #[allow(clippy::float_cmp, reason = "only a full match counts")]
        let full = probability == 1.0;
        Ok(full)
    }

    fn common_matches(&self, scalar: u32, target: ScriptCode, options: MembershipOptions) -> bool {
        if options.strict {
            return false;
        }
        if !options.apply_extended_properties {
            return true;
        }
        self.extended_range_of(scalar).is_none_or(|extended| extended.allows(target))
    }
}
