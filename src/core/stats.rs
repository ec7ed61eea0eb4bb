//! Array reductions and descriptive statistics.
//!
//! Reductions are total: an empty slice reduces to the operation's identity.
//! Statistics are undefined on empty input and report [`StatsError`].

/// Errors from statistics over a slice of numbers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Cannot compute {operation} of an empty slice")]
    EmptyInput { operation: &'static str },
}

/// Sum of all numbers. Empty input sums to `0`.
pub fn sum_all(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |acc, n| acc + n)
}

/// Product of all numbers. Empty input multiplies to `1`.
pub fn multiply_all(numbers: &[f64]) -> f64 {
    numbers.iter().fold(1.0, |acc, n| acc * n)
}

/// Sum of the numbers that satisfy `predicate`.
///
/// ```rust
/// use kata::core::filter_and_sum;
///
/// assert_eq!(filter_and_sum(&[1.0, 2.0, 3.0, 4.0, 5.0], |x| x > 2.0), 12.0);
/// ```
pub fn filter_and_sum<P>(numbers: &[f64], predicate: P) -> f64
where
    P: Fn(f64) -> bool,
{
    numbers
        .iter()
        .copied()
        .filter(|n| predicate(*n))
        .fold(0.0, |acc, n| acc + n)
}

/// Sum of the numbers after applying `transform` to each.
pub fn transform_and_sum<F>(numbers: &[f64], transform: F) -> f64
where
    F: Fn(f64) -> f64,
{
    numbers
        .iter()
        .copied()
        .map(transform)
        .fold(0.0, |acc, n| acc + n)
}

/// Arithmetic mean.
pub fn average(numbers: &[f64]) -> Result<f64, StatsError> {
    non_empty(numbers, "average")?;
    Ok(sum_all(numbers) / numbers.len() as f64)
}

/// Middle value after sorting; the mean of the two middle values when the
/// length is even.
pub fn median(numbers: &[f64]) -> Result<f64, StatsError> {
    non_empty(numbers, "median")?;

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Most frequent value. Ties go to the value seen first.
pub fn mode(numbers: &[f64]) -> Result<f64, StatsError> {
    non_empty(numbers, "mode")?;

    // (value, occurrences) in first-seen order
    let mut tallies: Vec<(f64, usize)> = Vec::new();
    for &n in numbers {
        match tallies.iter_mut().find(|(value, _)| value.to_bits() == n.to_bits()) {
            Some((_, count)) => *count += 1,
            None => tallies.push((n, 1)),
        }
    }

    let mut best = tallies[0];
    for &(value, count) in &tallies[1..] {
        if count > best.1 {
            best = (value, count);
        }
    }
    Ok(best.0)
}

/// Spread between the largest and smallest value.
pub fn range(numbers: &[f64]) -> Result<f64, StatsError> {
    non_empty(numbers, "range")?;

    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(max - min)
}

fn non_empty(numbers: &[f64], operation: &'static str) -> Result<(), StatsError> {
    if numbers.is_empty() {
        return Err(StatsError::EmptyInput { operation });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 6] = [1.0, 2.0, 2.0, 3.0, 4.0, 5.0];
    const NUMBERS: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    #[test]
    fn reductions_over_numbers() {
        assert_eq!(sum_all(&NUMBERS), 15.0);
        assert_eq!(multiply_all(&NUMBERS), 120.0);
        assert_eq!(filter_and_sum(&NUMBERS, |x| x > 2.0), 12.0);
        assert_eq!(transform_and_sum(&NUMBERS, |x| x * 2.0), 30.0);
    }

    #[test]
    fn reductions_over_empty_input_use_identity() {
        assert_eq!(sum_all(&[]), 0.0);
        assert_eq!(multiply_all(&[]), 1.0);
        assert_eq!(filter_and_sum(&[], |_| true), 0.0);
        assert_eq!(transform_and_sum(&[], |x| x + 1.0), 0.0);
    }

    #[test]
    fn statistics_over_sample_data() {
        let avg = average(&DATA).unwrap();
        assert!((avg - 17.0 / 6.0).abs() < 1e-12);
        assert_eq!(median(&DATA).unwrap(), 2.5);
        assert_eq!(mode(&DATA).unwrap(), 2.0);
        assert_eq!(range(&DATA).unwrap(), 4.0);
    }

    #[test]
    fn median_of_odd_length_is_middle_value() {
        assert_eq!(median(&[9.0, 1.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn mode_tie_prefers_first_seen() {
        assert_eq!(mode(&[3.0, 1.0, 1.0, 3.0]).unwrap(), 3.0);
        assert_eq!(mode(&[7.0]).unwrap(), 7.0);
    }

    #[test]
    fn statistics_reject_empty_input() {
        assert_eq!(
            average(&[]),
            Err(StatsError::EmptyInput {
                operation: "average"
            })
        );
        assert!(median(&[]).is_err());
        assert!(mode(&[]).is_err());
        assert!(range(&[]).is_err());
    }

    #[test]
    fn empty_input_error_names_operation() {
        let err = median(&[]).unwrap_err();

        assert_eq!(err.to_string(), "Cannot compute median of an empty slice");
    }
}
