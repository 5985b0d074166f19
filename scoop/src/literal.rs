/// Decoded value carried next to a lexeme.
///
/// The scanner only ever attaches `Number` and `String`; `Boolean` and `Nil`
/// exist for literal nodes in the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Boolean(bool),
    Nil,
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Self::Nil
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => n.fmt(f),
            Literal::String(s) => s.fmt(f),
            Literal::Boolean(b) => b.fmt(f),
            Literal::Nil => "nil".fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Literal;

    #[test]
    fn displays_like_source_values() {
        assert_eq!(Literal::from(45.67).to_string(), "45.67");
        assert_eq!(Literal::from(123.0).to_string(), "123");
        assert_eq!(Literal::from("hi there").to_string(), "hi there");
        assert_eq!(Literal::from(false).to_string(), "false");
        assert_eq!(Literal::from(()).to_string(), "nil");
    }
}
