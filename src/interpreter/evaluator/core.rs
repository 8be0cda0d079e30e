use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::{Error, RuntimeError},
    interpreter::evaluator::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one program run.
///
/// An `Interpreter` owns its [`Environment`] and the lines printed so far.
/// It is consumed by [`Interpreter::interpret`], so state never leaks from one
/// run into the next; concurrent runs simply use separate interpreters.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Variable bindings of the current run.
    pub environment: Environment,
    /// One entry per evaluated print statement, in execution order.
    pub output:      Vec<String>,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment and no output.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(),
               output:      Vec::new(), }
    }

    /// Runs every statement of `program` and returns the printed lines.
    ///
    /// Execution stops at the first runtime error; lines printed before it
    /// are dropped together with the interpreter.
    ///
    /// # Errors
    /// Returns [`Error::Runtime`], whose message carries the `Runtime error:`
    /// prefix.
    ///
    /// # Example
    /// ```
    /// use bpp::{
    ///     ast::{BinaryOperator, Expr, Program, Statement},
    ///     interpreter::evaluator::core::Interpreter,
    /// };
    ///
    /// let program =
    ///     Program { statements: vec![Statement::Print { value: Expr::binary(Expr::Number(7),
    ///                                                                        BinaryOperator::Div,
    ///                                                                        Expr::Number(2)) }] };
    ///
    /// assert_eq!(Interpreter::new().interpret(&program).unwrap(), vec!["3"]);
    ///
    /// let program = Program { statements: vec![Statement::Print { value:
    ///                                                                 Expr::Variable("y".into()) }] };
    /// let err = Interpreter::new().interpret(&program).unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "Runtime error: undefined variable: y");
    /// ```
    pub fn interpret(mut self, program: &Program) -> Result<Vec<String>, Error> {
        debug!(statements = program.statements.len(), "interpreting program");

        if let Err(e) = self.exec_block(&program.statements) {
            debug!(error = %e, printed = self.output.len(), "evaluation aborted");
            return Err(Error::Runtime(e));
        }

        debug!(lines = self.output.len(), "evaluation finished");
        Ok(self.output)
    }

    /// Evaluates an expression to an integer.
    ///
    /// Evaluation is pure apart from reading the environment. Both operands of
    /// a binary operation are always evaluated, left first.
    ///
    /// The left spine of an operator chain is walked in a loop, so long
    /// left-associative chains do not grow the call stack. Right operands
    /// nest only as deep as the parser allows.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        let mut spine = Vec::new();
        let mut leftmost = expr;

        let mut acc = loop {
            match leftmost {
                Expr::Number(value) => break *value,
                Expr::Variable(name) => break self.environment.lookup(name)?,
                Expr::BinaryOp { left, op, right } => {
                    spine.push((*op, right.as_ref()));
                    leftmost = left.as_ref();
                },
            }
        };

        for (op, right) in spine.into_iter().rev() {
            let right = self.eval(right)?;
            acc = Self::eval_binary(op, acc, right)?;
        }

        Ok(acc)
    }

    /// Executes a single statement.
    ///
    /// Declarations and assignments behave identically: both insert or
    /// overwrite the binding. Printing appends the decimal form of the value
    /// to the output.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::VariableDeclaration { name, value }
            | Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                trace!(%name, value, "bind");
                self.environment.assign(name, value);
            },
            Statement::Print { value } => {
                let value = self.eval(value)?;
                self.output.push(value.to_string());
            },
            Statement::If { condition,
                            then_branch,
                            else_branch, } => {
                self.exec_if(condition, then_branch, else_branch.as_deref())?;
            },
            Statement::For(for_loop) => self.exec_for(for_loop)?,
        }

        Ok(())
    }
}
