use crate::utils::Float;

/// Gets mean of values using given slice.
pub fn get_mean_slice(values: &[Float]) -> Float {
    if values.is_empty() { 0. } else { values.iter().sum::<Float>() / values.len() as Float }
}

/// Returns sample standard deviation (Bessel's correction applied). Less than two values
/// have no spread, so zero is returned.
pub fn get_sample_stdev(values: &[Float]) -> Float {
    if values.len() < 2 {
        return 0.;
    }

    let mean = get_mean_slice(values);
    let sum_squares = values.iter().map(|value| (value - mean).powi(2)).sum::<Float>();

    (sum_squares / (values.len() - 1) as Float).sqrt()
}
