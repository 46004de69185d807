//! Concordance statistics between expected and observed VAFs.

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

///
/// Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` for empty or mismatched input, or when either sample has zero variance.
///
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (mut num, mut denom_x, mut denom_y) = (0.0, 0.0, 0.0);
    for (&xx, &yy) in x.iter().zip(y.iter()) {
        let dx = xx - mean_x;
        let dy = yy - mean_y;
        num += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    let denom = denom_x.sqrt() * denom_y.sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(num / denom)
}

/// Squared Pearson correlation.
pub fn r_squared(x: &[f64], y: &[f64]) -> Option<f64> {
    pearson_correlation(x, y).map(|r| r * r)
}

///
/// Ordinary least-squares fit of `y` on `x`.
///
/// Returns `None` for empty or mismatched input, or when all `x` are equal.
///
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (mut num, mut denom) = (0.0, 0.0);
    for (&xx, &yy) in x.iter().zip(y.iter()) {
        let dx = xx - mean_x;
        num += dx * (yy - mean_y);
        denom += dx * dx;
    }

    if denom == 0.0 {
        return None;
    }

    let slope = num / denom;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    fn test_perfect_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson_correlation(&x, &y).unwrap() - 1.0).abs() < EPSILON);

        let y_rev = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson_correlation(&x, &y_rev).unwrap() + 1.0).abs() < EPSILON);
        assert!((r_squared(&x, &y_rev).unwrap() - 1.0).abs() < EPSILON);
    }

    #[rstest]
    fn test_r_squared_of_fixture_vafs() {
        let found = [12.0, 17.0, 22.0, 27.0, 33.0, 68.0];
        let expected = [10.0, 15.0, 20.0, 25.0, 30.0, 75.0];
        let r2 = r_squared(&found, &expected).unwrap();
        assert!(r2 > 0.99 && r2 <= 1.0);
        assert_eq!(format!("{:.2}", r2), "0.99");
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1.0, 2.0], &[1.0])]
    #[case(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0])]
    #[case(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0])]
    fn test_undefined_correlation(#[case] x: &[f64], #[case] y: &[f64]) {
        assert_eq!(pearson_correlation(x, y), None);
    }

    #[rstest]
    fn test_linear_fit() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = linear_fit(&x, &y).unwrap();

        assert!((fit.slope - 2.0).abs() < EPSILON);
        assert!((fit.intercept - 1.0).abs() < EPSILON);
        assert!((fit.predict(10.0) - 21.0).abs() < EPSILON);
    }

    #[rstest]
    fn test_linear_fit_vertical() {
        assert_eq!(linear_fit(&[3.0, 3.0], &[1.0, 2.0]), None);
        assert_eq!(linear_fit(&[], &[]), None);
    }
}
