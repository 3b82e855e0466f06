// Copyright 2026 the Script Detector Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// The four-letter ISO 15924 code naming a script, as in the Unicode `sc` property.
///
/// Codes are stored capitalized (`Latn`, `Hebr`) whatever the case they were parsed from,
/// so equal codes compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptCode {
    letters: [u8; 4],
}

impl ScriptCode {
    /// `Zyyy`: digits, punctuation and other characters shared between scripts.
    pub const COMMON: Self = Self { letters: *b"Zyyy" };

    /// `Zinh`: marks that belong to the script of the character they follow.
    pub const INHERITED: Self = Self { letters: *b"Zinh" };

    /// `Zzzz`: unassigned and private use characters.
    pub const UNKNOWN: Self = Self { letters: *b"Zzzz" };

    /// The code as ASCII bytes.
    #[must_use]
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.letters
    }

    /// The code as text, e.g. `Latn`.
    #[must_use]
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.letters).expect("letters are ASCII")
    }

    /// Parses a code such as `latn` or `LATN` into `Latn`.
    #[inline(always)]
    pub fn parse(s: &str) -> Result<Self, ParseScriptCodeError> {
        s.parse()
    }

    /// Returns `true` if `name` spells this code, ignoring ASCII case.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Debug for ScriptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptCode({})", self.as_str())
    }
}

impl fmt::Display for ScriptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptCode {
    type Err = ParseScriptCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ParseScriptCodeError::WrongLength(s.len()))?;
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(ParseScriptCodeError::NotAlphabetic);
        }
        let [first, rest @ ..] = letters;
        let [second, third, fourth] = rest.map(|b| b.to_ascii_lowercase());
        Ok(Self {
            letters: [first.to_ascii_uppercase(), second, third, fourth],
        })
    }
}

/// A string that is not a four-letter script code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseScriptCodeError {
    /// The string is this many bytes long instead of four.
    WrongLength(usize),
    /// The string contains something other than ASCII letters.
    NotAlphabetic,
}

impl fmt::Display for ParseScriptCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(f, "script codes have 4 letters, got {len} bytes"),
            Self::NotAlphabetic => f.write_str("script codes contain only ASCII letters"),
        }
    }
}

impl core::error::Error for ParseScriptCodeError {}

/// How the classifiers treat the characters of a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    /// A regular writing system such as Latin or Hebrew.
    Normal,
    /// `Zyyy`: usable with any script, unless restricted by Script_Extensions.
    Common,
    /// `Zinh`: takes the script of the preceding character.
    Inherited,
    /// `Zzzz`: never part of any script.
    Unknown,
}

impl ScriptKind {
    /// Derives the kind from the reserved pseudo-script codes.
    pub const fn of(code: ScriptCode) -> Self {
        match code.letters {
            [b'Z', b'y', b'y', b'y'] => Self::Common,
            [b'Z', b'i', b'n', b'h'] => Self::Inherited,
            [b'Z', b'z', b'z', b'z'] => Self::Unknown,
            _ => Self::Normal,
        }
    }
}

/// Dense index of a [`Script`] inside one [`TableSet`](crate::TableSet).
///
/// Ids are assigned while the tables are built and differ between Unicode versions,
/// so they must not be persisted or compared across table sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptId(pub(crate) u16);

impl ScriptId {
    /// Returns the id as an index into per-script arrays.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One of the writing scripts defined in Unicode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    short_name: ScriptCode,
    long_name: String,
    kind: ScriptKind,
    id: ScriptId,
}

impl Script {
    pub(crate) fn new(short_name: ScriptCode, long_name: String, id: ScriptId) -> Self {
        Self {
            short_name,
            long_name,
            kind: ScriptKind::of(short_name),
            id,
        }
    }

    /// The ISO 15924 code, e.g. `Latn`.
    #[inline]
    pub fn short_name(&self) -> ScriptCode {
        self.short_name
    }

    /// The property value alias, e.g. `Latin` or `Old_Italic`.
    #[inline]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// See [`ScriptKind`].
    #[inline]
    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    /// The build-local id of this script.
    #[inline]
    pub fn id(&self) -> ScriptId {
        self.id
    }

    /// Returns `true` if `name` is either the short or the long name, ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.short_name.matches(name) || self.long_name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseScriptCodeError, Script, ScriptCode, ScriptId, ScriptKind};
    use alloc::string::ToString;

    #[test]
    fn parse_normalizes_case() {
        let code = ScriptCode::parse("hEBR").unwrap();
        assert_eq!(code.as_str(), "Hebr");
        assert_eq!(code.to_bytes(), *b"Hebr");
        assert_eq!(code.to_string(), "Hebr");
    }

    #[test]
    fn invalid_codes_error() {
        assert_eq!(
            ScriptCode::parse("Lat").unwrap_err(),
            ParseScriptCodeError::WrongLength(3)
        );
        assert_eq!(
            ScriptCode::parse("La1n").unwrap_err(),
            ParseScriptCodeError::NotAlphabetic
        );
        // Four bytes, but not four ASCII letters.
        assert_eq!(
            ScriptCode::parse("Lé1").unwrap_err(),
            ParseScriptCodeError::NotAlphabetic
        );
        let err = ScriptCode::parse("Latin").unwrap_err();
        assert_eq!(err, ParseScriptCodeError::WrongLength(5));
        assert_eq!(err.to_string(), "script codes have 4 letters, got 5 bytes");
    }

    #[test]
    fn kind_follows_reserved_codes() {
        assert_eq!(ScriptKind::of(ScriptCode::COMMON), ScriptKind::Common);
        assert_eq!(ScriptKind::of(ScriptCode::INHERITED), ScriptKind::Inherited);
        assert_eq!(ScriptKind::of(ScriptCode::UNKNOWN), ScriptKind::Unknown);
        assert_eq!(
            ScriptKind::of(ScriptCode::parse("zyyy").unwrap()),
            ScriptKind::Common
        );
        assert_eq!(
            ScriptKind::of(ScriptCode::parse("Latn").unwrap()),
            ScriptKind::Normal
        );
    }

    #[test]
    fn script_is_named_by_either_name() {
        let script = Script::new(
            ScriptCode::parse("Ital").unwrap(),
            "Old_Italic".to_string(),
            ScriptId(3),
        );
        assert!(script.is_named("ital"));
        assert!(script.is_named("OLD_ITALIC"));
        assert!(!script.is_named("Old Italic"));
        assert_eq!(script.kind(), ScriptKind::Normal);
        assert_eq!(script.id().index(), 3);
    }
}
