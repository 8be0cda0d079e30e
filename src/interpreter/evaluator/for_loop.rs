use tracing::trace;

use crate::{
    ast::ForLoop,
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::is_truthy,
};

impl Interpreter {
    /// Executes a `ghuri` loop.
    ///
    /// The init clause runs once. Then, for as long as the condition is
    /// non-zero, the body runs followed by the update clause. The condition is
    /// checked before the first iteration too, so a loop may run zero times.
    ///
    /// The loop variable is an ordinary variable: it stays bound after the loop
    /// and the body may reassign it.
    ///
    /// # Example
    /// ```
    /// use bpp::{
    ///     ast::{BinaryOperator, Expr, ForLoop, Program, Statement},
    ///     interpreter::evaluator::core::Interpreter,
    /// };
    ///
    /// // ghuri (dhori i = 0; i < 3; i = i + 1) { dekhao i; }
    /// let for_loop =
    ///     ForLoop { init:      Box::new(Statement::VariableDeclaration { name:  "i".into(),
    ///                                                                    value: Expr::Number(0), }),
    ///               condition: Expr::binary(Expr::Variable("i".into()),
    ///                                       BinaryOperator::Less,
    ///                                       Expr::Number(3)),
    ///               update:    Box::new(Statement::Assignment { name:  "i".into(),
    ///                                                           value:
    ///                                                               Expr::binary(Expr::Variable("i".into()),
    ///                                                                            BinaryOperator::Add,
    ///                                                                            Expr::Number(1)), }),
    ///               body:      vec![Statement::Print { value: Expr::Variable("i".into()) }], };
    ///
    /// let program = Program { statements: vec![Statement::For(for_loop)] };
    ///
    /// assert_eq!(Interpreter::new().interpret(&program).unwrap(),
    ///            vec!["0", "1", "2"]);
    /// ```
    pub fn exec_for(&mut self, for_loop: &ForLoop) -> EvalResult<()> {
        self.exec_statement(&for_loop.init)?;

        let mut iterations = 0_usize;
        while is_truthy(self.eval(&for_loop.condition)?) {
            self.exec_block(&for_loop.body)?;
            self.exec_statement(&for_loop.update)?;
            iterations += 1;
        }

        trace!(iterations, "loop finished");
        Ok(())
    }
}
