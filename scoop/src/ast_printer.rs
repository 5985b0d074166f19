use crate::{
    expr::{Expr, Visitor},
    literal::Literal,
    token::Token,
};

/// Renders an expression tree in parenthesized prefix form, e.g.
/// `(* (- 123) (group 45.67))`.
#[derive(Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut str = String::new();
        str.push('(');
        str.push_str(name);
        for expr in exprs {
            str.push(' ');
            str.push_str(&expr.accept(self));
        }
        str.push(')');
        str
    }
}

impl Visitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &Literal) -> String {
        format!("{value}")
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }
}

pub fn ast_to_string(expr: &Expr) -> String {
    AstPrinter.print(expr)
}
