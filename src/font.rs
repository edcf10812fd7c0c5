use std::path::Path;

use ttf_parser::{Face, FaceParsingError, GlyphId};
use tracing::debug;

use crate::error::ReportError;
use crate::glyph::{Codepoint, Glyph};

/// Lowest Unicode codepoint mapped to each glyph id, across all Unicode cmap subtables.
fn glyph_codepoints(face: &Face<'_>) -> Vec<Option<u32>> {
    let mut codepoints = vec![None; usize::from(face.number_of_glyphs())];

    let Some(cmap) = face.tables().cmap else {
        debug!("Font has no cmap table");
        return codepoints;
    };

    for subtable in cmap.subtables {
        debug!(
            "cmap subtable: platform={:?} encoding={} format={:?}",
            subtable.platform_id, subtable.encoding_id, subtable.format
        );
        if !subtable.is_unicode() {
            continue;
        }

        subtable.codepoints(|codepoint| {
            let Some(gid) = subtable.glyph_index(codepoint) else {
                return;
            };
            if let Some(slot) = codepoints.get_mut(usize::from(gid.0)) {
                *slot = Some(slot.map_or(codepoint, |cp: u32| cp.min(codepoint)));
            }
        });
    }

    codepoints
}

/// Parse font data and list its glyphs in glyph id order.
pub fn load_glyphs(data: &[u8]) -> Result<Vec<Glyph>, FaceParsingError> {
    let face = Face::parse(data, 0)?;
    let num_glyphs = face.number_of_glyphs();
    debug!("Font has {} total glyphs", num_glyphs);

    let codepoints = glyph_codepoints(&face);
    let glyphs: Vec<Glyph> = (0..num_glyphs)
        .zip(codepoints)
        .map(|(gid, codepoint)| {
            let name = face
                .glyph_name(GlyphId(gid))
                .map(str::to_owned)
                .unwrap_or_else(|| format!("glyph{}", gid));
            Glyph::new(Codepoint::from(codepoint), name)
        })
        .collect();

    debug!(
        "{} glyphs have a Unicode mapping",
        glyphs.iter().filter(|g| g.codepoint.is_mapped()).count()
    );
    Ok(glyphs)
}

/// Read and parse the font file at `path`.
pub fn read_glyphs<P: AsRef<Path>>(path: P) -> Result<Vec<Glyph>, ReportError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| ReportError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    load_glyphs(&data).map_err(|source| ReportError::FontError {
        path: path.to_path_buf(),
        source,
    })
}
