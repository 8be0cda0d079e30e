/// Divides `dividend` by `divisor`, rounding the quotient toward negative
/// infinity.
///
/// ## Returns
/// - `Some(i64)`: The floored quotient.
/// - `None`: If `divisor` is zero or the quotient overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use bpp::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(-7, -2), Some(3));
/// assert_eq!(floor_div(1, 0), None);
/// ```
#[must_use]
pub const fn floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };

    if dividend % divisor != 0 && ((dividend < 0) != (divisor < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Converts a comparison result to the language's truth values.
///
/// ## Example
/// ```
/// use bpp::util::num::bool_to_int;
///
/// assert_eq!(bool_to_int(true), 1);
/// assert_eq!(bool_to_int(false), 0);
/// ```
#[must_use]
pub const fn bool_to_int(value: bool) -> i64 {
    if value { 1 } else { 0 }
}

/// Returns whether an integer counts as true in a condition.
///
/// Every non-zero value is truthy.
#[must_use]
pub const fn is_truthy(value: i64) -> bool {
    value != 0
}
