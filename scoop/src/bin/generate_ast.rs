use std::process::exit;

use scoop::generate_ast::{write_ast, EXPR_TYPES};

fn main() {
    scoop::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [output_dir] = args.as_slice() else {
        eprintln!("Usage: generate_ast <output directory>");
        exit(64);
    };

    match write_ast(output_dir.as_ref(), "Expr", EXPR_TYPES) {
        Ok(path) => println!("{}", path.display()),
        Err(err) => {
            eprintln!("{err}");
            exit(74);
        }
    }
}
