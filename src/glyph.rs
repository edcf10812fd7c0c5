use std::fmt;

/// The Unicode codepoint a glyph is mapped to, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codepoint {
    Mapped(u32),
    /// Font-internal glyph (ligature, component, alternate, ...) with no cmap entry.
    Unmapped,
}

impl Codepoint {
    pub fn value(self) -> Option<u32> {
        match self {
            Codepoint::Mapped(cp) => Some(cp),
            Codepoint::Unmapped => None,
        }
    }

    pub fn is_mapped(self) -> bool {
        matches!(self, Codepoint::Mapped(_))
    }

    /// Whether `self` is the codepoint directly after `previous`.
    pub fn follows(self, previous: Codepoint) -> bool {
        match (previous, self) {
            (Codepoint::Mapped(prev), Codepoint::Mapped(cp)) => prev.checked_add(1) == Some(cp),
            _ => false,
        }
    }

    // Unmapped counts as -1 in range arithmetic.
    fn ordinal(self) -> i64 {
        match self {
            Codepoint::Mapped(cp) => i64::from(cp),
            Codepoint::Unmapped => -1,
        }
    }
}

impl From<Option<u32>> for Codepoint {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Codepoint::Unmapped, Codepoint::Mapped)
    }
}

/// Number of codepoints spanned by `start..=last`.
///
/// This is plain arithmetic on the endpoints, not a count of visited glyphs. A run
/// that began on a mapped glyph and was extended by an unmapped one yields a
/// non-positive value.
pub fn span_len(start: Codepoint, last: Codepoint) -> i64 {
    last.ordinal() - start.ordinal() + 1
}

/// A glyph as read from a font: its codepoint and its internal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub codepoint: Codepoint,
    pub name: String,
}

impl Glyph {
    pub fn new(codepoint: Codepoint, name: impl Into<String>) -> Self {
        Glyph {
            codepoint,
            name: name.into(),
        }
    }

    pub fn mapped(codepoint: u32, name: impl Into<String>) -> Self {
        Self::new(Codepoint::Mapped(codepoint), name)
    }

    pub fn unmapped(name: impl Into<String>) -> Self {
        Self::new(Codepoint::Unmapped, name)
    }

    /// `U+XXXXXX` for mapped glyphs, the glyph name otherwise.
    pub fn display_name(&self) -> DisplayName<'_> {
        DisplayName(self)
    }
}

pub struct DisplayName<'a>(&'a Glyph);

impl fmt::Display for DisplayName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.codepoint {
            Codepoint::Mapped(cp) => write!(f, "U+{:06X}", cp),
            Codepoint::Unmapped => f.write_str(&self.0.name),
        }
    }
}
