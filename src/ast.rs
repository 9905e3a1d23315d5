/// An abstract syntax tree (AST) node representing one parsed expression.
///
/// `Expr` is a closed set of variants produced by the parser and consumed by
/// the evaluator. Every node owns its children; the parser never leaves an
/// operand slot empty, so a tree built from valid input is always complete.
///
/// Assignment is an expression too: it yields the value it stores.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    NumberLiteral(f64),
    /// A string literal with its escapes already resolved.
    StringLiteral(String),
    /// `true` or `false`.
    BooleanLiteral(bool),
    /// Reference to a variable by name.
    Variable(String),
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (arithmetic, comparison or logic).
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Builtin function call (e.g. `sqrt(x)`).
    Call {
        /// Name of the function being called, as written.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// `let name = value`.
    Assign {
        /// Name of the variable, as written.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Binary`] node, boxing both operands.
    ///
    /// ## Example
    /// ```
    /// use seals::ast::{ArithmeticOperator, BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(ArithmeticOperator::Add,
    ///                        Expr::NumberLiteral(1.0),
    ///                        Expr::NumberLiteral(2.0));
    ///
    /// let add = BinaryOperator::Arithmetic(ArithmeticOperator::Add);
    /// assert!(matches!(sum, Expr::Binary { op, .. } if op == add));
    /// ```
    #[must_use]
    pub fn binary(op: impl Into<BinaryOperator>, left: Self, right: Self) -> Self {
        Self::Binary { op: op.into(),
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a [`Expr::Unary`] node, boxing the operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// ## Example
    /// ```
    /// use seals::{parse, tokenize};
    ///
    /// assert_eq!(parse(&tokenize("x").unwrap()).unwrap().height(), 1);
    /// assert_eq!(parse(&tokenize("1 + 2 * -y").unwrap()).unwrap().height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let below = match self {
            Self::NumberLiteral(_)
            | Self::StringLiteral(_)
            | Self::BooleanLiteral(_)
            | Self::Variable(_) => 0,
            Self::Unary { operand, .. } => operand.height(),
            Self::Binary { left, right, .. } => left.height().max(right.height()),
            Self::Call { arguments, .. } => arguments.iter().map(Self::height).max().unwrap_or(0),
            Self::Assign { value, .. } => value.height(),
        };
        below + 1
    }
}

/// Represents a binary operator, grouped by the family that evaluates it.
///
/// Each family is its own enum, so a handler for one family can only ever be
/// given an operator it knows how to apply.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`, `-`, `*`, `/` and `^`.
    Arithmetic(ArithmeticOperator),
    /// Equality and ordering.
    Comparison(ComparisonOperator),
    /// The short-circuiting `and` and `or`.
    Logical(LogicalOperator),
}

/// Operators producing a number, or text for concatenation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition or text concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Operators producing a boolean from two values of any kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Operators that may skip their right operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl From<ArithmeticOperator> for BinaryOperator {
    fn from(op: ArithmeticOperator) -> Self {
        Self::Arithmetic(op)
    }
}

impl From<ComparisonOperator> for BinaryOperator {
    fn from(op: ComparisonOperator) -> Self {
        Self::Comparison(op)
    }
}

impl From<LogicalOperator> for BinaryOperator {
    fn from(op: LogicalOperator) -> Self {
        Self::Logical(op)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x` or `!x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arithmetic(op) => write!(f, "{op}"),
            Self::Comparison(op) => write!(f, "{op}"),
            Self::Logical(op) => write!(f, "{op}"),
        }
    }
}

impl std::fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not "),
        }
    }
}

/// Writes the tree back as fully parenthesized source, which makes grouping
/// and associativity visible.
///
/// ## Example
/// ```
/// use seals::{parse, tokenize};
///
/// let tree = parse(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "((2 ^ 3) ^ 2)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberLiteral(n) => write!(f, "{}", crate::util::num::format_number(*n)),
            Self::StringLiteral(s) => write!(f, "{s:?}"),
            Self::BooleanLiteral(b) => write!(f, "{b}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::Assign { name, value } => write!(f, "let {name} = {value}"),
        }
    }
}
