use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::is_truthy,
};

impl Interpreter {
    /// Executes statements in order, stopping at the first error.
    ///
    /// No scope is pushed: bindings made inside the block stay visible after
    /// it.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.exec_statement(statement)?;
        }

        Ok(())
    }

    /// Executes a `jodi` statement.
    ///
    /// Any non-zero condition selects `then_branch`. A zero condition selects
    /// `else_branch`, or does nothing when there is none.
    pub fn exec_if(&mut self,
                   condition: &Expr,
                   then_branch: &[Statement],
                   else_branch: Option<&[Statement]>)
                   -> EvalResult<()> {
        if is_truthy(self.eval(condition)?) {
            self.exec_block(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.exec_block(else_branch)
        } else {
            Ok(())
        }
    }
}
