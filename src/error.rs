//! Error types for loading weave settings

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur when loading or parsing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SettingsError {
    /// Location of the offending text, when the error has one
    pub fn span(&self) -> Option<Span> {
        match self {
            SettingsError::Io(_) => None,
            SettingsError::Toml(err) => err.span(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match (self, self.span()) {
            (SettingsError::Toml(err), Some(span)) => (span, err.message().to_string()),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid weave settings")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toml_error(source: &str) -> SettingsError {
        toml::from_str::<toml::Table>(source).unwrap_err().into()
    }

    #[test]
    fn test_toml_error_has_span() {
        let source = "seed = \n";
        let err = toml_error(source);
        let span = err.span().unwrap();
        assert!(span.start <= source.len());
    }

    #[test]
    fn test_format_includes_filename_and_source() {
        let source = "[canvas]\nwidth = = 3\n";
        let report = toml_error(source).format(source, "web.toml");
        assert!(report.contains("web.toml"));
        assert!(report.contains("invalid weave settings"));
    }

    #[test]
    fn test_io_error_formats_plainly() {
        let err = SettingsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        insta::assert_snapshot!(err.format("", "web.toml"), @"failed to read settings file: no such file");
    }
}
