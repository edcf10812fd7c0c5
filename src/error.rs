use std::fmt::Formatter;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReportError {
    /// The font file could not be read.
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The font file is not a font ttf-parser understands.
    FontError {
        path: PathBuf,
        source: ttf_parser::FaceParsingError,
    },
    /// Writing the report failed.
    OutputError(std::io::Error),
}

impl ReportError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ReportError::IoError { path, .. } | ReportError::FontError { path, .. } => Some(path),
            ReportError::OutputError(_) => None,
        }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ReportError::IoError { path, source } => {
                write!(f, "IO error reading {}: {}", path.display(), source)
            }
            ReportError::FontError { path, source } => {
                write!(f, "Font error in {}: {}", path.display(), source)
            }
            ReportError::OutputError(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::IoError { source, .. } => Some(source),
            ReportError::FontError { source, .. } => Some(source),
            ReportError::OutputError(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError::OutputError(e)
    }
}
