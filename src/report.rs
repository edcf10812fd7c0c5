use std::io::{self, Write};

use crate::blocks::{Classification, classify};
use crate::glyph::{Codepoint, Glyph, span_len};

/// The open run: where it started and the glyph that last extended it.
struct Chunk<'g> {
    start: Codepoint,
    last: &'g Glyph,
}

/// Grouping state for a single font's glyph sequence.
///
/// Glyphs must be pushed in font order. A group is every glyph reported under one
/// block header; within a group, consecutive codepoints are folded into one chunk
/// line.
pub struct ReportState<'g> {
    current: Option<Classification>,
    chunk: Option<Chunk<'g>>,
    group_count: usize,
}

impl<'g> ReportState<'g> {
    pub fn new() -> Self {
        ReportState {
            current: None,
            chunk: None,
            group_count: 0,
        }
    }

    pub fn push<W: Write + ?Sized>(&mut self, out: &mut W, glyph: &'g Glyph) -> io::Result<()> {
        let opens_group = match self.current {
            Some(current) => !current.admits(glyph.codepoint),
            None => true,
        };

        if opens_group {
            self.close_chunk(out)?;
            self.close_group(out)?;

            let classification = classify(glyph.codepoint);
            self.current = Some(classification);
            writeln!(out)?;
            writeln!(out, "** {} **", classification)?;
            self.open_chunk(out, glyph)?;
        } else {
            let previous = self.chunk.as_ref().map(|chunk| chunk.last.codepoint);
            match previous {
                Some(previous) if glyph.codepoint.follows(previous) => {
                    self.extend_chunk(glyph);
                }
                Some(_) if !glyph.codepoint.is_mapped() => {
                    write!(out, ", {}", glyph.display_name())?;
                    self.extend_chunk(glyph);
                }
                _ => {
                    self.close_chunk(out)?;
                    self.open_chunk(out, glyph)?;
                }
            }
        }

        self.group_count += 1;
        Ok(())
    }

    /// Flush the open chunk and the trailing total of the last group.
    pub fn finish<W: Write + ?Sized>(mut self, out: &mut W) -> io::Result<()> {
        self.close_chunk(out)?;
        self.close_group(out)
    }

    fn open_chunk<W: Write + ?Sized>(&mut self, out: &mut W, glyph: &'g Glyph) -> io::Result<()> {
        write!(out, "{}", glyph.display_name())?;
        self.chunk = Some(Chunk {
            start: glyph.codepoint,
            last: glyph,
        });
        Ok(())
    }

    fn extend_chunk(&mut self, glyph: &'g Glyph) {
        if let Some(chunk) = self.chunk.as_mut() {
            chunk.last = glyph;
        }
    }

    fn close_chunk<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(chunk) = self.chunk.take() else {
            return Ok(());
        };

        if chunk.start == chunk.last.codepoint {
            writeln!(out)
        } else {
            writeln!(
                out,
                "-{} ({} glyphs)",
                chunk.last.display_name(),
                span_len(chunk.start, chunk.last.codepoint)
            )
        }
    }

    fn close_group<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        if self.current.is_some() && self.group_count > 1 {
            writeln!(out, "Total: {} glyphs.", self.group_count)?;
        }
        self.group_count = 0;
        Ok(())
    }
}

impl Default for ReportState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the block/run report for one font's glyphs, in the order given.
pub fn write_report<'g, W, I>(out: &mut W, glyphs: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'g Glyph>,
{
    let mut state = ReportState::new();
    for glyph in glyphs {
        state.push(out, glyph)?;
    }
    state.finish(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(glyphs: &[Glyph]) -> String {
        let mut out = Vec::new();
        write_report(&mut out, glyphs).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn mapped(cps: &[u32]) -> Vec<Glyph> {
        cps.iter()
            .map(|&cp| Glyph::mapped(cp, format!("uni{:04X}", cp)))
            .collect()
    }

    #[test]
    fn contiguous_run_is_one_range() {
        assert_eq!(
            report(&mapped(&[0x41, 0x42, 0x43])),
            "\n** Basic Latin **\nU+000041-U+000043 (3 glyphs)\nTotal: 3 glyphs.\n"
        );
    }

    #[test]
    fn gap_splits_run() {
        assert_eq!(
            report(&mapped(&[0x41, 0x43])),
            "\n** Basic Latin **\nU+000041\nU+000043\nTotal: 2 glyphs.\n"
        );
    }

    #[test]
    fn run_then_single() {
        assert_eq!(
            report(&mapped(&[0x41, 0x42, 0x43, 0x45])),
            "\n** Basic Latin **\nU+000041-U+000043 (3 glyphs)\nU+000045\nTotal: 4 glyphs.\n"
        );
    }

    #[test]
    fn single_unmapped_glyph_before_block() {
        let glyphs = vec![Glyph::unmapped("lig1"), Glyph::mapped(0x41, "A")];
        assert_eq!(
            report(&glyphs),
            "\n** Non Unicode Glyphs **\nlig1\n\n** Basic Latin **\nU+000041\n"
        );
    }

    #[test]
    fn unmapped_glyphs_share_a_line() {
        let glyphs = vec![
            Glyph::unmapped("lig1"),
            Glyph::unmapped("lig2"),
            Glyph::unmapped("lig3"),
        ];
        assert_eq!(
            report(&glyphs),
            "\n** Non Unicode Glyphs **\nlig1, lig2, lig3\nTotal: 3 glyphs.\n"
        );
    }

    #[test]
    fn each_block_gets_a_header() {
        assert_eq!(
            report(&mapped(&[0x41, 0x100])),
            "\n** Basic Latin **\nU+000041\n\n** Latin Extended-A **\nU+000100\n"
        );
    }

    #[test]
    fn consecutive_codepoints_across_blocks_are_not_joined() {
        assert_eq!(
            report(&mapped(&[0x7E, 0x7F, 0x80])),
            "\n** Basic Latin **\nU+00007E-U+00007F (2 glyphs)\nTotal: 2 glyphs.\n\
             \n** Latin-1 Supplement **\nU+000080\n"
        );
    }

    #[test]
    fn unmapped_glyph_leaves_a_block() {
        let glyphs = vec![
            Glyph::mapped(0x41, "A"),
            Glyph::mapped(0x42, "B"),
            Glyph::unmapped("A.sc"),
            Glyph::mapped(0x43, "C"),
        ];
        assert_eq!(
            report(&glyphs),
            "\n** Basic Latin **\nU+000041-U+000042 (2 glyphs)\nTotal: 2 glyphs.\n\
             \n** Non Unicode Glyphs **\nA.sc\n\
             \n** Basic Latin **\nU+000043\n"
        );
    }

    #[test]
    fn gap_codepoints_each_open_a_group() {
        assert_eq!(
            report(&mapped(&[0x0870, 0x0871])),
            "\n** Non Unicode Glyphs **\nU+000870\n\n** Non Unicode Glyphs **\nU+000871\n"
        );
    }

    #[test]
    fn gap_codepoint_extended_by_unmapped_glyph_keeps_arithmetic() {
        let glyphs = vec![Glyph::mapped(0x0870, "u0870"), Glyph::unmapped("lig")];
        assert_eq!(
            report(&glyphs),
            "\n** Non Unicode Glyphs **\nU+000870, lig-lig (-2160 glyphs)\nTotal: 2 glyphs.\n"
        );
    }

    #[test]
    fn empty_font_writes_nothing() {
        assert_eq!(report(&[]), "");
    }

    #[test]
    fn state_is_not_shared_between_reports() {
        let glyphs = mapped(&[0x41, 0x42]);
        assert_eq!(report(&glyphs), report(&glyphs));
        // A new report starts with a header even if the block matches the last one.
        assert!(report(&mapped(&[0x43])).starts_with("\n** Basic Latin **\n"));
    }

    #[test]
    fn manual_state_drive() {
        let glyphs = mapped(&[0x391, 0x392, 0x3B1]);
        let mut out = Vec::new();
        let mut state = ReportState::default();
        for glyph in &glyphs {
            state.push(&mut out, glyph).unwrap();
        }
        state.finish(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n** Greek and Coptic **\nU+000391-U+000392 (2 glyphs)\nU+0003B1\nTotal: 3 glyphs.\n"
        );
    }
}
