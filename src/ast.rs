/// The root of a parsed program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Statements have effects: they bind variables, print values, or run nested
/// statement lists. Nested lists never introduce a new scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `dhori <name> = <value>;`
    VariableDeclaration {
        /// Name of the variable.
        name:  String,
        /// Initial value.
        value: Expr,
    },
    /// `<name> = <value>;`, also used for the update clause of a loop.
    Assignment {
        /// Name of the variable.
        name:  String,
        /// New value.
        value: Expr,
    },
    /// `dekhao <value>;`
    Print {
        /// The printed expression.
        value: Expr,
    },
    /// `jodi <condition> { ... } [nahole { ... }]`
    If {
        /// Truthy when non-zero.
        condition:   Expr,
        /// Runs when the condition is truthy.
        then_branch: Vec<Self>,
        /// Runs when the condition is zero, if present.
        else_branch: Option<Vec<Self>>,
    },
    /// `ghuri (<init> <condition>; <update>) { ... }`
    For(ForLoop),
}

/// Header and body of a `ghuri` loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForLoop {
    /// Runs once before the first condition check.
    pub init:      Box<Statement>,
    /// Checked before every iteration.
    pub condition: Expr,
    /// Runs after every iteration. Always an [`Statement::Assignment`].
    pub update:    Box<Statement>,
    /// The loop body.
    pub body:      Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to an integer. There is no unary node: `-x` is
/// parsed as `0 - x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// Reference to a variable by name.
    Variable(String),
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::BinaryOp`] from its parts.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

// Operator chains such as `1 + 1 + ... + 1` are as deep as they are long, so
// the default recursive drop could exhaust the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let Self::BinaryOp { left, right, .. } = self else {
            return;
        };

        let mut pending = vec![std::mem::replace(left.as_mut(), Self::Number(0)),
                               std::mem::replace(right.as_mut(), Self::Number(0))];

        while let Some(mut expr) = pending.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut expr {
                pending.push(std::mem::replace(left.as_mut(), Self::Number(0)));
                pending.push(std::mem::replace(right.as_mut(), Self::Number(0)));
            }
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal to (`==`)
    Equal,
}

impl BinaryOperator {
    /// Binding strength used by the precedence-climbing parser.
    ///
    /// Higher binds tighter: `* /` are 2, `+ -` are 1, comparisons are 0.
    ///
    /// # Example
    /// ```
    /// use bpp::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Equal.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
            Self::Greater | Self::Less | Self::GreaterEqual | Self::LessEqual | Self::Equal => 0,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Equal => "==",
        };
        write!(f, "{operator}")
    }
}
