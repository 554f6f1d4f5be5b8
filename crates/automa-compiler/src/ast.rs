//! Syntax tree for regular expressions.

/// A regex parse tree node.
///
/// Built bottom-up during postfix reduction, immutable afterwards. Each
/// operand is owned exclusively by its parent: this is a tree, not a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(char),
    Concat(Box<Expr>, Box<Expr>),
    Union(Box<Expr>, Box<Expr>),
    Star(Box<Expr>),
    Plus(Box<Expr>),
    Optional(Box<Expr>),
}

impl Expr {
    pub fn concat(left: Expr, right: Expr) -> Expr {
        Expr::Concat(Box::new(left), Box::new(right))
    }

    pub fn union(left: Expr, right: Expr) -> Expr {
        Expr::Union(Box::new(left), Box::new(right))
    }

    pub fn star(inner: Expr) -> Expr {
        Expr::Star(Box::new(inner))
    }

    pub fn plus(inner: Expr) -> Expr {
        Expr::Plus(Box::new(inner))
    }

    pub fn optional(inner: Expr) -> Expr {
        Expr::Optional(Box::new(inner))
    }
}
