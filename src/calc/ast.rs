// Expression tree for the calculator

use std::fmt;

/// Binary operators, in the order the parser binds them (loosest first)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
            BinOp::Pow => left.powf(right),
        }
    }
}

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
}

/// A parsed arithmetic expression.
///
/// The tree only has number leaves and arithmetic nodes, so evaluating it
/// cannot do anything beyond floating point math.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate with IEEE-754 semantics. Division by zero yields an infinity
    /// or NaN here; callers decide what to do with non-finite values.
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Unary { op, operand } => {
                let value = operand.eval();
                match op {
                    UnaryOp::Neg => -value,
                    UnaryOp::Plus => value,
                }
            }
            Expr::Binary { op, left, right } => op.apply(left.eval(), right.eval()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Unary { op: UnaryOp::Neg, operand } => write!(f, "(-{})", operand),
            Expr::Unary { op: UnaryOp::Plus, operand } => write!(f, "(+{})", operand),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op.symbol(), right),
        }
    }
}
