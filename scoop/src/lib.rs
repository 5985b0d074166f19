pub mod ast_printer;
pub mod diagnostic;
pub mod expr;
pub mod generate_ast;
pub mod literal;
pub mod scanner;
pub mod token;
pub mod token_type;

pub use diagnostic::{DiagnosticSink, ScanError, ScanErrors};
pub use scanner::{scan, Scanner};
pub use token::Token;
pub use token_type::TokenTy;

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and is safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(EnvFilter::from_default_env())
        .try_init();
}
