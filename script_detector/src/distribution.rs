// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{CodepointRange, ScalarSource, ScriptCode, ScriptKind, TableSet};

/// Options for [`TableSet::used_scripts_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionOptions {
    /// Skip Inherited characters instead of counting them towards the preceding script.
    ///
    /// Defaults to `true`.
    pub ignore_inherited: bool,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            ignore_inherited: true,
        }
    }
}

/// The share of a text written in one script.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptProbability {
    /// ISO 15924 code of the script.
    pub short_name: ScriptCode,
    /// Long property value name of the script.
    pub long_name: String,
    /// Fraction of the counted characters, in `0.0..=1.0`.
    pub probability: f32,
}

impl TableSet {
    /// Returns the scripts a text is written in, most probable first.
    ///
    /// Equivalent to [`used_scripts_with`](Self::used_scripts_with) with default options.
    pub fn used_scripts<T: ScalarSource + ?Sized>(&self, text: &T) -> Vec<ScriptProbability> {
        self.used_scripts_with(text, DistributionOptions::default())
    }

    /// Returns the scripts a text is written in, most probable first.
    ///
    /// Common and Unknown characters are not counted at all, so `"abc 123"` is fully
    /// Latin. An Inherited character counts for the script of the last counted character
    /// unless [`ignore_inherited`](DistributionOptions::ignore_inherited) is set; one with
    /// nothing before it is skipped.
    ///
    /// The result is empty when no character could be attributed to a script, which
    /// includes empty text. Scripts with equal probability keep [`ScriptId`](crate::ScriptId) order.
    pub fn used_scripts_with<T: ScalarSource + ?Sized>(
        &self,
        text: &T,
        options: DistributionOptions,
    ) -> Vec<ScriptProbability> {
        let mut buckets = vec![0_usize; self.scripts.len()];
        let mut total = 0_usize;
        let mut last: Option<&CodepointRange> = None;

        for scalar in text.scalars() {
            let Some(range) = self.range_of(scalar) else {
                continue;
            };
            let range = match self.script(range.script).kind() {
                ScriptKind::Unknown | ScriptKind::Common => continue,
                ScriptKind::Inherited if options.ignore_inherited => continue,
                ScriptKind::Inherited => match last {
                    Some(previous) => previous,
                    None => continue,
                },
                ScriptKind::Normal => range,
            };
            total += 1;
            buckets[range.script.index()] += 1;
            last = Some(range);
        }

        if total == 0 {
            return Vec::new();
        }

        let mut results: Vec<ScriptProbability> = buckets
            .iter()
            .zip(&self.scripts)
            .filter(|(count, _)| **count > 0)
            .map(|(count, script)| ScriptProbability {
                short_name: script.short_name(),
                long_name: script.long_name().into(),
                probability: *count as f32 / total as f32,
            })
            .collect();
        // Stable, so ties stay in id order.
        results.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        log::trace!(
            "{} script(s) in {total} counted characters, top: {}",
            results.len(),
            results[0].short_name
        );
        results
    }
}
