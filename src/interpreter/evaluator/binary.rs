use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
    util::num::{bool_to_int, floor_div},
};

impl Interpreter {
    /// Evaluates a binary operation between two integers.
    ///
    /// Arithmetic is checked: results outside the `i64` range fail with
    /// [`RuntimeError::Overflow`]. Division floors the quotient and fails with
    /// [`RuntimeError::DivisionByZero`] for a zero divisor. Comparisons yield
    /// `1` for true and `0` for false.
    ///
    /// # Example
    /// ```
    /// use bpp::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Interpreter};
    ///
    /// assert_eq!(Interpreter::eval_binary(BinaryOperator::Div, -7, 2), Ok(-4));
    /// assert_eq!(Interpreter::eval_binary(BinaryOperator::GreaterEqual, 3, 3), Ok(1));
    /// assert_eq!(Interpreter::eval_binary(BinaryOperator::Div, 1, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Sub};

        match op {
            Add => left.checked_add(right).ok_or(RuntimeError::Overflow),
            Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow),
            Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                floor_div(left, right).ok_or(RuntimeError::Overflow)
            },
            Greater => Ok(bool_to_int(left > right)),
            Less => Ok(bool_to_int(left < right)),
            GreaterEqual => Ok(bool_to_int(left >= right)),
            LessEqual => Ok(bool_to_int(left <= right)),
            Equal => Ok(bool_to_int(left == right)),
        }
    }
}
