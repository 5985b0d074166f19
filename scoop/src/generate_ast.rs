//! Emits the Rust source for an expression-tree enum and its visitor trait
//! from short `Name : Type field, Type field` descriptions.

use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Node descriptions for [`crate::expr::Expr`].
pub const EXPR_TYPES: &[&str] = &[
    "Binary   : Box<Expr> left, Token operator, Box<Expr> right",
    "Grouping : Box<Expr> expression",
    "Literal  : Literal value",
    "Unary    : Token operator, Box<Expr> right",
];

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("malformed type description {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, GenerateError>;

struct Field<'a> {
    ty: &'a str,
    name: &'a str,
}

struct NodeType<'a> {
    name: &'a str,
    fields: Vec<Field<'a>>,
}

fn parse_type(description: &str) -> Result<NodeType<'_>> {
    let malformed = || GenerateError::Malformed(description.to_owned());

    let (name, fields) = description.split_once(':').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(malformed());
    }

    let fields = fields.trim();
    if fields.is_empty() {
        return Ok(NodeType {
            name,
            fields: Vec::new(),
        });
    }

    let fields = fields
        .split(',')
        .map(|field| {
            let (ty, name) = field.trim().rsplit_once(' ').ok_or_else(malformed)?;
            let (ty, name) = (ty.trim(), name.trim());
            if ty.is_empty() || name.is_empty() {
                Err(malformed())
            } else {
                Ok(Field { ty, name })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(NodeType { name, fields })
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Visitor methods borrow through boxes.
fn param_type(ty: &str) -> String {
    match ty.strip_prefix("Box<").and_then(|rest| rest.strip_suffix('>')) {
        Some(inner) => format!("&{inner}"),
        None => format!("&{ty}"),
    }
}

pub fn define_ast(base_name: &str, types: &[&str]) -> Result<String> {
    let types = types
        .iter()
        .map(|description| parse_type(description))
        .collect::<Result<Vec<_>>>()?;

    let mut out = String::new();
    writeln!(out, "use crate::{{literal::Literal, token::Token}};")?;
    writeln!(out)?;

    writeln!(out, "pub enum {base_name} {{")?;
    for node in &types {
        if node.fields.is_empty() {
            writeln!(out, "    {},", node.name)?;
            continue;
        }
        writeln!(out, "    {} {{", node.name)?;
        for field in &node.fields {
            writeln!(out, "        {}: {},", field.name, field.ty)?;
        }
        writeln!(out, "    }},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    define_visitor(&mut out, &types)?;
    writeln!(out)?;

    writeln!(out, "impl {base_name} {{")?;
    writeln!(
        out,
        "    pub fn accept<R>(&self, visitor: &mut impl Visitor<R>) -> R {{"
    )?;
    writeln!(out, "        match self {{")?;
    for node in &types {
        let names = node
            .fields
            .iter()
            .map(|field| field.name)
            .collect::<Vec<_>>()
            .join(", ");
        let method = snake_case(node.name);
        if node.fields.is_empty() {
            writeln!(
                out,
                "            {base_name}::{} => visitor.visit_{method}(),",
                node.name
            )?;
        } else {
            writeln!(
                out,
                "            {base_name}::{} {{ {names} }} => visitor.visit_{method}({names}),",
                node.name
            )?;
        }
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

fn define_visitor(out: &mut String, types: &[NodeType<'_>]) -> Result<()> {
    writeln!(out, "pub trait Visitor<R> {{")?;
    for node in types {
        write!(out, "    fn visit_{}(&mut self", snake_case(node.name))?;
        for field in &node.fields {
            write!(out, ", {}: {}", field.name, param_type(field.ty))?;
        }
        writeln!(out, ") -> R;")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Writes `<output_dir>/<base_name in snake case>.rs` and returns its path.
pub fn write_ast(output_dir: &Path, base_name: &str, types: &[&str]) -> Result<PathBuf> {
    let source = define_ast(base_name, types)?;
    let path = output_dir.join(format!("{}.rs", snake_case(base_name)));
    std::fs::write(&path, source)?;
    tracing::info!(path = %path.display(), "wrote ast definitions");
    Ok(path)
}
