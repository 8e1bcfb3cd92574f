pub struct MseLoss;

impl MseLoss {
    /// Sum of squared errors: Σ(expected - predicted)²
    pub fn squared_error(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum()
    }

    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        MseLoss::squared_error(predicted, expected) / predicted.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_and_means() {
        let predicted = [0.5, -1.0];
        let expected = [1.0, 1.0];
        assert_eq!(MseLoss::squared_error(&predicted, &expected), 0.25 + 4.0);
        assert_eq!(MseLoss::loss(&predicted, &expected), (0.25 + 4.0) / 2.0);
    }
}
