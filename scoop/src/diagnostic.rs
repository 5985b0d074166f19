use thiserror::Error;

/// A malformed span found while scanning. Never fatal: the scanner reports it
/// and carries on from the next position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Unexpected character '{ch}'.")]
    UnexpectedCharacter { line: usize, ch: char },
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. } | ScanError::UnterminatedString { line } => {
                *line
            }
        }
    }
}

/// Every diagnostic from one scan, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render(.0))]
pub struct ScanErrors(pub Vec<ScanError>);

fn render(errors: &[ScanError]) -> String {
    errors
        .iter()
        .map(|err| format!("[line {}] Error: {}", err.line(), err))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Receives diagnostics while a scan is in progress.
pub trait DiagnosticSink {
    fn report(&mut self, error: ScanError);
}

impl DiagnosticSink for Vec<ScanError> {
    fn report(&mut self, error: ScanError) {
        self.push(error);
    }
}
