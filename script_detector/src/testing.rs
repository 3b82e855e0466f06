// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small excerpt of the Unicode script data for unit tests.

use crate::{ScriptCode, TableSet, TableSetBuilder};

pub(crate) fn code(s: &str) -> ScriptCode {
    ScriptCode::parse(s).unwrap()
}

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    let diff = a - b;
    -1e-3 < diff && diff < 1e-3
}

/// Latin, Hebrew, Arabic and Gothic with the surrounding Common and Inherited blocks.
///
/// `U+E000..U+E0FF` is explicitly marked Unknown; CJK is left uncovered.
pub(crate) fn fixture() -> TableSet {
    let mut builder = TableSetBuilder::new();
    let common = builder.script(ScriptCode::COMMON, "Common").unwrap();
    let inherited = builder.script(ScriptCode::INHERITED, "Inherited").unwrap();
    let unknown = builder.script(ScriptCode::UNKNOWN, "Unknown").unwrap();
    let latin = builder.script(code("Latn"), "Latin").unwrap();
    let hebrew = builder.script(code("Hebr"), "Hebrew").unwrap();
    let arabic = builder.script(code("Arab"), "Arabic").unwrap();
    let gothic = builder.script(code("Goth"), "Gothic").unwrap();
    builder.script(code("Syrc"), "Syriac").unwrap();
    builder.script(code("Deva"), "Devanagari").unwrap();

    for (range, script) in [
        (0x0000..=0x0040, common),
        (0x0041..=0x005A, latin),
        (0x005B..=0x0060, common),
        (0x0061..=0x007A, latin),
        (0x007B..=0x00A9, common),
        (0x00AA..=0x00AA, latin),
        (0x00AB..=0x00B9, common),
        (0x00BA..=0x00BA, latin),
        (0x00BB..=0x00BF, common),
        (0x00C0..=0x00D6, latin),
        (0x00D7..=0x00D7, common),
        (0x00D8..=0x00F6, latin),
        (0x00F7..=0x00F7, common),
        (0x00F8..=0x024F, latin),
        (0x0300..=0x036F, inherited),
        (0x0591..=0x05C7, hebrew),
        (0x05D0..=0x05EA, hebrew),
        (0x05EF..=0x05F4, hebrew),
        (0x060C..=0x060C, common),
        (0x0620..=0x063F, arabic),
        (0x0640..=0x0640, common),
        (0x0641..=0x064A, arabic),
        (0x064B..=0x0655, inherited),
        (0x0656..=0x066F, arabic),
        (0x0964..=0x0965, common),
        (0xE000..=0xE0FF, unknown),
        (0x10330..=0x1034A, gothic),
    ] {
        builder.push_range(range, script);
    }

    builder.push_extended(0x060C..=0x060C, [code("Arab"), code("Syrc"), code("Thaa")]);
    builder.push_extended(0x0640..=0x0640, [code("Arab"), code("Syrc"), code("Mand")]);
    builder.push_extended(0x064B..=0x0655, [code("Arab"), code("Syrc")]);
    builder.push_extended(0x0964..=0x0965, [code("Beng"), code("Deva"), code("Gujr")]);

    builder.build().unwrap()
}
