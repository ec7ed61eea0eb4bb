//! Macros for ergonomic pipeline construction.

/// Build a [`Pipeline`](crate::core::Pipeline) that applies its steps left
/// to right.
///
/// # Example
///
/// ```
/// use kata::pipe;
///
/// let add_then_double = pipe![|x: f64| x + 5.0, |x: f64| x * 2.0];
/// assert_eq!(add_then_double.apply(10.0), 30.0);
/// ```
#[macro_export]
macro_rules! pipe {
    ($($step:expr),* $(,)?) => {
        $crate::core::Pipeline::identity()$(.then($step))*
    };
}

/// Build a [`Pipeline`](crate::core::Pipeline) that applies its steps right
/// to left.
///
/// # Example
///
/// ```
/// use kata::compose;
///
/// let double_then_add = compose![|x: f64| x + 5.0, |x: f64| x * 2.0];
/// assert_eq!(double_then_add.apply(10.0), 25.0);
/// ```
#[macro_export]
macro_rules! compose {
    ($($step:expr),* $(,)?) => {
        $crate::core::Pipeline::identity()$(.before($step))*
    };
}
