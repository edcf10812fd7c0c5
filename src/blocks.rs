use std::fmt;

use crate::data::UNICODE_BLOCKS;
use crate::glyph::Codepoint;

/// Group name shared by unmapped glyphs and codepoints outside every block.
pub const NON_UNICODE_GLYPHS: &str = "Non Unicode Glyphs";

/// A named, inclusive range of codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

impl UnicodeBlock {
    pub fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }
}

/// The full block table in ascending order.
pub fn unicode_blocks() -> &'static [UnicodeBlock] {
    UNICODE_BLOCKS
}

/// Result of looking a codepoint up in the block table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Index into [`unicode_blocks`].
    Block(usize),
    NonUnicode,
}

impl Classification {
    pub fn block(self) -> Option<&'static UnicodeBlock> {
        match self {
            Classification::Block(index) => UNICODE_BLOCKS.get(index),
            Classification::NonUnicode => None,
        }
    }

    pub fn name(self) -> &'static str {
        self.block().map_or(NON_UNICODE_GLYPHS, |block| block.name)
    }

    /// Whether a glyph with `codepoint` stays in the group opened by `self`.
    ///
    /// The non-Unicode group only keeps unmapped glyphs; a mapped codepoint in a
    /// table gap always opens a fresh group even though it classifies the same.
    pub(crate) fn admits(self, codepoint: Codepoint) -> bool {
        match (self.block(), codepoint) {
            (Some(block), Codepoint::Mapped(cp)) => block.contains(cp),
            (Some(_), Codepoint::Unmapped) => false,
            (None, codepoint) => !codepoint.is_mapped(),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn block_index(codepoint: u32) -> Option<usize> {
    // Last block starting at or before the codepoint is the only candidate.
    let index = UNICODE_BLOCKS
        .partition_point(|block| block.start <= codepoint)
        .checked_sub(1)?;
    UNICODE_BLOCKS[index].contains(codepoint).then_some(index)
}

pub fn block_containing(codepoint: u32) -> Option<&'static UnicodeBlock> {
    block_index(codepoint).map(|index| &UNICODE_BLOCKS[index])
}

pub fn classify(codepoint: Codepoint) -> Classification {
    codepoint
        .value()
        .and_then(block_index)
        .map_or(Classification::NonUnicode, Classification::Block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_disjoint() {
        for block in UNICODE_BLOCKS {
            assert!(block.start <= block.end, "{} is inverted", block.name);
        }
        for pair in UNICODE_BLOCKS.windows(2) {
            let &[prev, curr] = pair else { unreachable!() };
            assert!(
                prev.end < curr.start,
                "{} overlaps {}",
                prev.name,
                curr.name
            );
        }
    }

    #[test]
    fn table_stays_within_unicode() {
        assert_eq!(UNICODE_BLOCKS.first().map(|b| b.start), Some(0));
        assert_eq!(UNICODE_BLOCKS.last().map(|b| b.end), Some(0x10FFFF));
    }

    #[test]
    fn endpoints_and_midpoints_classify_to_their_block() {
        for (index, block) in UNICODE_BLOCKS.iter().enumerate() {
            let mid = block.start + (block.end - block.start) / 2;
            for cp in [block.start, mid, block.end] {
                assert_eq!(
                    classify(Codepoint::Mapped(cp)),
                    Classification::Block(index),
                    "U+{:06X} in {}",
                    cp,
                    block.name
                );
            }
        }
    }

    #[test]
    fn binary_search_matches_linear_scan() {
        for cp in (0..=0x10FFFFu32).step_by(7).chain([0x085F, 0x0860, 0x089F]) {
            let linear = UNICODE_BLOCKS.iter().position(|b| b.contains(cp));
            assert_eq!(block_index(cp), linear, "U+{:06X}", cp);
        }
    }

    #[test]
    fn unmapped_is_non_unicode() {
        assert_eq!(classify(Codepoint::Unmapped), Classification::NonUnicode);
        assert_eq!(Classification::NonUnicode.name(), "Non Unicode Glyphs");
    }

    #[test]
    fn gaps_are_non_unicode() {
        // Between Mandaic and Arabic Extended-A.
        assert_eq!(classify(Codepoint::Mapped(0x0870)), Classification::NonUnicode);
        assert!(block_containing(0x30000).is_none());
        assert!(block_containing(0x110000).is_none());
    }

    #[test]
    fn names() {
        assert_eq!(classify(Codepoint::Mapped(0x41)).name(), "Basic Latin");
        assert_eq!(classify(Codepoint::Mapped(0x100)).name(), "Latin Extended-A");
        assert_eq!(
            classify(Codepoint::Mapped(0x1D400)).to_string(),
            "Mathematical Alphanumeric Symbols"
        );
    }

    #[test]
    fn admits() {
        let latin = classify(Codepoint::Mapped(0x41));
        assert!(latin.admits(Codepoint::Mapped(0x7F)));
        assert!(!latin.admits(Codepoint::Mapped(0x80)));
        assert!(!latin.admits(Codepoint::Unmapped));

        let non_unicode = Classification::NonUnicode;
        assert!(non_unicode.admits(Codepoint::Unmapped));
        assert!(!non_unicode.admits(Codepoint::Mapped(0x0870)));
        assert!(!non_unicode.admits(Codepoint::Mapped(0x41)));
    }
}
