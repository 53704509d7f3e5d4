/// Severity of an architecture diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    Error,
    Warning,
}

/// A half-open [start, end) byte range inside a single option argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgSpan {
    pub start: usize,
    pub end: usize,
}

impl ArgSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Structured diagnostic suitable for tooling integration.
#[derive(Debug, Clone)]
pub struct ArchDiagnostic {
    pub level: DiagnosticLevel,
    pub code: &'static str,
    pub message: String,
    pub span: Option<ArgSpan>,
}

impl ArchDiagnostic {
    pub fn new(
        level: DiagnosticLevel,
        code: &'static str,
        message: impl Into<String>,
        span: Option<ArgSpan>,
    ) -> Self {
        Self {
            level,
            code,
            message: message.into(),
            span,
        }
    }

    pub fn format_human(&self) -> String {
        let location = self
            .span
            .map(|span| format!("column {}", span.start + 1))
            .unwrap_or_else(|| "<unknown>".to_string());
        format!(
            "{level:?} {code}: {message} @ {location}",
            level = self.level,
            code = self.code,
            message = self.message,
            location = location
        )
    }
}
