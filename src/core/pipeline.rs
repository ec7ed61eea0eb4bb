//! Function composition: `pipe` (left to right) and `compose` (right to left).
//!
//! Both produce a [`Pipeline`], an immutable ordered list of unary steps that
//! is applied to one value at a time. An empty pipeline is the identity.

use std::fmt;

/// A boxed unary step. Steps must be thread-safe so pipelines can be shared.
pub type Step<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Ordered sequence of unary functions, stored in application order.
///
/// # Example
///
/// ```rust
/// use kata::core::Pipeline;
///
/// let add_then_double = Pipeline::identity()
///     .then(|x: f64| x + 5.0)
///     .then(|x: f64| x * 2.0);
///
/// assert_eq!(add_then_double.apply(10.0), 30.0);
/// ```
pub struct Pipeline<T = f64> {
    steps: Vec<Step<T>>,
}

impl<T: 'static> Pipeline<T> {
    /// Pipeline with no steps; returns its input unchanged.
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step that runs after every existing step.
    pub fn then<F>(mut self, step: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Prepend a step that runs before every existing step.
    pub fn before<F>(mut self, step: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.steps.insert(0, Box::new(step));
        self
    }

    /// Run every step in order, feeding each output into the next step.
    pub fn apply(&self, input: T) -> T {
        self.steps.iter().fold(input, |acc, step| step(acc))
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the pipeline is the identity.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Turn the pipeline into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T + Send + Sync {
        move |input| self.apply(input)
    }
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Compose steps left to right: `pipe(vec![f, g]).apply(x) == g(f(x))`.
pub fn pipe<T: 'static>(steps: Vec<Step<T>>) -> Pipeline<T> {
    Pipeline { steps }
}

/// Compose steps right to left: `compose(vec![f, g]).apply(x) == f(g(x))`.
pub fn compose<T: 'static>(mut steps: Vec<Step<T>>) -> Pipeline<T> {
    steps.reverse();
    Pipeline { steps }
}

/// Step that adds `amount`.
pub fn adder(amount: f64) -> impl Fn(f64) -> f64 + Send + Sync + Copy {
    move |x| x + amount
}

/// Step that multiplies by `factor`.
///
/// ```rust
/// use kata::core::multiplier;
///
/// let triple = multiplier(3.0);
/// let quadruple = multiplier(4.0);
/// assert_eq!(triple(5.0), 15.0);
/// assert_eq!(quadruple(5.0), 20.0);
/// ```
pub fn multiplier(factor: f64) -> impl Fn(f64) -> f64 + Send + Sync + Copy {
    move |x| x * factor
}

/// Step that squares its input.
pub fn square(x: f64) -> f64 {
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add5(x: f64) -> f64 {
        x + 5.0
    }

    fn double(x: f64) -> f64 {
        x * 2.0
    }

    fn subtract3(x: f64) -> f64 {
        x - 3.0
    }

    #[test]
    fn pipe_applies_left_to_right() {
        let steps: Vec<Step<f64>> = vec![Box::new(add5), Box::new(double), Box::new(subtract3)];
        let calc = pipe(steps);

        assert_eq!(calc.apply(10.0), 27.0);
    }

    #[test]
    fn compose_applies_right_to_left() {
        let steps: Vec<Step<f64>> = vec![Box::new(subtract3), Box::new(double), Box::new(add5)];
        let calc = compose(steps);

        assert_eq!(calc.apply(10.0), 27.0);
    }

    #[test]
    fn compose_square_double_add_one() {
        let steps: Vec<Step<f64>> = vec![Box::new(square), Box::new(double), Box::new(adder(1.0))];
        let calc = compose(steps);

        assert_eq!(calc.apply(2.0), 36.0);
    }

    #[test]
    fn empty_pipelines_are_identity() {
        assert_eq!(pipe::<f64>(Vec::new()).apply(7.5), 7.5);
        assert_eq!(compose::<f64>(Vec::new()).apply(-3.0), -3.0);
        assert!(Pipeline::<f64>::identity().is_empty());
    }

    #[test]
    fn then_and_before_control_order() {
        let pipeline = Pipeline::identity().then(double).before(add5);

        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.apply(1.0), 12.0);
    }

    #[test]
    fn pipeline_is_reusable() {
        let pipeline = Pipeline::identity().then(add5).then(double);

        assert_eq!(pipeline.apply(10.0), 30.0);
        assert_eq!(pipeline.apply(10.0), 30.0);
    }

    #[test]
    fn works_over_other_types() {
        let shout: Pipeline<String> = Pipeline::identity()
            .then(|s: String| s.to_uppercase())
            .then(|s: String| format!("{s}!"));

        assert_eq!(shout.apply("hello".to_string()), "HELLO!");
    }

    #[test]
    fn into_fn_produces_closure() {
        let f = Pipeline::identity().then(multiplier(3.0)).into_fn();

        assert_eq!(f(4.0), 12.0);
    }

    #[test]
    fn pipeline_can_be_shared_across_threads() {
        let pipeline = std::sync::Arc::new(Pipeline::identity().then(add5));
        let worker = std::sync::Arc::clone(&pipeline);

        let handle = std::thread::spawn(move || worker.apply(1.0));

        assert_eq!(handle.join().unwrap(), 6.0);
        assert_eq!(pipeline.apply(1.0), 6.0);
    }
}
