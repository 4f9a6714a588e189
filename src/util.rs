use itertools::Itertools;

pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

pub fn std_dev(data: &[f64]) -> Option<f64> {
    match (mean(data), data.len()) {
        (Some(data_mean), count) if count > 0 => {
            let variance = data
                .iter()
                .map(|value| {
                    let diff = data_mean - *value;

                    diff * diff
                })
                .sum::<f64>()
                / count as f64;

            Some(variance.sqrt())
        }
        _ => None,
    }
}

/// Index of the smallest value; ties go to the earliest entry
pub fn position_min(data: &[f64]) -> Option<usize> {
    data.iter().position_min_by(|a, b| a.total_cmp(b))
}

/// Milliseconds between two instants, as a float
pub fn elapsed_ms(earlier: std::time::Instant, later: std::time::Instant) -> f64 {
    later.saturating_duration_since(earlier).as_secs_f64() * 1000.0
}
