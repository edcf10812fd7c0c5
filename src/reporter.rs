use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ReportError;
use crate::font::read_glyphs;
use crate::report::write_report;

/// Builder for configuring a [`GlyphReporter`].
///
/// # Examples
///
/// ```no_run
/// use glyph_report::GlyphReporter;
///
/// let reporter = GlyphReporter::builder()
///     .font_dir("fonts/otf")
///     .keep_going(true)
///     .build();
/// let failed = reporter.report_fonts(["Main-Regular", "Math-Italic"], &mut std::io::stdout())?;
/// # Ok::<(), glyph_report::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GlyphReporterBuilder {
    font_dir: PathBuf,
    extension: String,
    keep_going: bool,
}

impl Default for GlyphReporterBuilder {
    fn default() -> Self {
        GlyphReporterBuilder {
            font_dir: PathBuf::from("."),
            extension: "otf".to_owned(),
            keep_going: false,
        }
    }
}

impl GlyphReporterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the font base names are resolved against.
    pub fn font_dir(mut self, font_dir: impl Into<PathBuf>) -> Self {
        self.font_dir = font_dir.into();
        self
    }

    /// File extension appended to each font base name, without the dot.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Continue with the next font when one fails to load.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn build(self) -> GlyphReporter {
        GlyphReporter {
            font_dir: self.font_dir,
            extension: self.extension,
            keep_going: self.keep_going,
        }
    }
}

/// Writes glyph reports for fonts found in one directory.
#[derive(Debug, Clone)]
pub struct GlyphReporter {
    font_dir: PathBuf,
    extension: String,
    keep_going: bool,
}

impl Default for GlyphReporter {
    fn default() -> Self {
        GlyphReporterBuilder::default().build()
    }
}

impl GlyphReporter {
    pub fn builder() -> GlyphReporterBuilder {
        GlyphReporterBuilder::new()
    }

    pub fn font_dir(&self) -> &Path {
        &self.font_dir
    }

    /// `<font_dir>/<name>.<extension>`
    pub fn font_path(&self, name: &str) -> PathBuf {
        self.font_dir.join(format!("{}.{}", name, self.extension))
    }

    /// Report a single font: delimiter line, groups, trailing blank line.
    ///
    /// The delimiter is written before the font is opened, so it is present even
    /// when loading fails.
    pub fn report_font<W: Write + ?Sized>(&self, name: &str, out: &mut W) -> Result<(), ReportError> {
        writeln!(out, "=== {} ===", name)?;

        let path = self.font_path(name);
        info!("Reading glyphs from {}", path.display());
        let glyphs = read_glyphs(&path)?;

        write_report(out, &glyphs)?;
        writeln!(out)?;
        Ok(())
    }

    /// Report each font in order and return how many failed.
    ///
    /// Without `keep_going` the first failure is returned as an error and the
    /// remaining fonts are not processed. Output errors always abort.
    pub fn report_fonts<I, S, W>(&self, names: I, out: &mut W) -> Result<usize, ReportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        let mut failed = 0;
        for name in names {
            match self.report_font(name.as_ref(), out) {
                Ok(()) => {}
                Err(ReportError::OutputError(e)) => return Err(ReportError::OutputError(e)),
                Err(e) if self.keep_going => {
                    warn!("Skipping {}: {}", name.as_ref(), e);
                    failed += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_dir() -> PathBuf {
        std::env::temp_dir().join("glyph-report-no-such-dir")
    }

    #[test]
    fn builder_defaults() {
        let reporter = GlyphReporter::default();
        assert_eq!(reporter.font_path("Main-Regular"), Path::new("./Main-Regular.otf"));
        assert!(!reporter.keep_going);
    }

    #[test]
    fn font_path_uses_dir_and_extension() {
        let reporter = GlyphReporter::builder()
            .font_dir("/fonts")
            .extension("ttf")
            .build();
        assert_eq!(reporter.font_dir(), Path::new("/fonts"));
        assert_eq!(reporter.font_path("Size1"), Path::new("/fonts/Size1.ttf"));
    }

    #[test_log::test]
    fn first_failure_aborts() {
        let reporter = GlyphReporter::builder().font_dir(missing_dir()).build();
        let mut out = Vec::new();
        let err = reporter.report_fonts(["A", "B"], &mut out).unwrap_err();

        assert!(matches!(err, ReportError::IoError { .. }));
        assert_eq!(err.path(), Some(&reporter.font_path("A")));
        assert_eq!(String::from_utf8(out).unwrap(), "=== A ===\n");
    }

    #[test_log::test]
    fn keep_going_counts_failures() {
        let reporter = GlyphReporter::builder()
            .font_dir(missing_dir())
            .keep_going(true)
            .build();
        let mut out = Vec::new();
        let failed = reporter.report_fonts(["A", "B"], &mut out).unwrap();

        assert_eq!(failed, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "=== A ===\n=== B ===\n");
    }

    #[test]
    fn no_fonts_is_no_output() {
        let mut out = Vec::new();
        let names: [&str; 0] = [];
        assert_eq!(GlyphReporter::default().report_fonts(names, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
