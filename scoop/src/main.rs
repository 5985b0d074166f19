use std::{
    io::{BufRead, Write},
    path::PathBuf,
    process::exit,
};

use scoop::{DiagnosticSink, ScanError, Scanner};
use thiserror::Error;

fn main() {
    scoop::init_tracing();

    let mut args = std::env::args();
    if args.len() > 2 {
        println!("Usage: scoop [script]");
        exit(64);
    }
    args.next(); // first arg is program name
    let mut scoop = Scoop::default();
    let result = match args.next() {
        Some(arg) => scoop.run_file(arg.into()),
        None => scoop.run_prompt(),
    };

    match result {
        Ok(()) if scoop.had_error => exit(65),
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            exit(66);
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read input: {0}")]
    Stdin(#[from] std::io::Error),
}

#[derive(Default)]
struct Scoop {
    had_error: bool,
}

impl Scoop {
    fn run_file(&mut self, path: PathBuf) -> Result<(), RunError> {
        tracing::debug!(path = %path.display(), "running file");
        let program = std::fs::read_to_string(&path)
            .map_err(|source| RunError::ReadFile { path, source })?;
        self.run(&program);
        Ok(())
    }

    fn run_prompt(&mut self) -> Result<(), RunError> {
        let mut reader = std::io::BufReader::new(std::io::stdin());
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            self.run(strip_line_ending(&line));
            self.had_error = false;
        }
        Ok(())
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source).scan_tokens(self);
        for token in tokens {
            println!("{token}");
        }
    }
}

impl DiagnosticSink for Scoop {
    fn report(&mut self, error: ScanError) {
        eprintln!("[line {}] Error: {}", error.line(), error);
        self.had_error = true;
    }
}

/// Each prompt line is scanned on its own, as line 1.
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scoop::{Token, TokenTy};

    use super::*;

    #[test]
    fn prompt_lines_end_on_their_first_line() {
        assert_eq!(strip_line_ending("print 1;\r\n"), "print 1;");
        assert_eq!(strip_line_ending("print 1;"), "print 1;");

        let mut errors = Vec::new();
        let tokens = Scanner::new(strip_line_ending("print 1;\n")).scan_tokens(&mut errors);
        assert!(errors.is_empty());
        assert_eq!(tokens.last(), Some(&Token::eof(1)));
        assert_eq!(tokens[0].ty, TokenTy::Print);
    }
}
