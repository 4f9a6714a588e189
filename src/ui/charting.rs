use blink::time_series::LatencyPoint;

/// Compute X (round) and Y (ms) bounds for the results chart
pub fn compute_chart_params(points: &[LatencyPoint]) -> (f64, f64) {
    let mut highest_ms = 0.0;
    for p in points {
        if p.ms > highest_ms {
            highest_ms = p.ms;
        }
    }

    let mut last_round = match points.last() {
        Some(p) => p.round as f64,
        None => 1.0,
    };
    // a single point still needs a non-empty x range
    if last_round < 2.0 {
        last_round = 2.0;
    }

    // leave headroom above the slowest round, in steps of 50 ms
    let y_max = if highest_ms > 0.0 {
        ((highest_ms / 50.0).floor() + 1.0) * 50.0
    } else {
        0.0
    };

    (last_round, y_max)
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_chart_params_empty() {
        let (x, y) = compute_chart_params(&[]);
        assert_eq!(x, 2.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_compute_chart_params_headroom() {
        let points = [
            LatencyPoint::new(1, 200.0),
            LatencyPoint::new(2, 400.0),
            LatencyPoint::new(3, 250.0),
        ];
        let (x, y) = compute_chart_params(&points);
        assert_eq!(x, 3.0);
        assert_eq!(y, 450.0);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(1.0), "1");
        assert_eq!(format_label(1.2345), "1.23");
    }
}
