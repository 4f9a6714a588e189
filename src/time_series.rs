#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyPoint {
    pub round: usize,
    pub ms: f64,
}

impl LatencyPoint {
    pub fn new(round: usize, ms: f64) -> Self {
        Self { round, ms }
    }
}

impl From<LatencyPoint> for (f64, f64) {
    fn from(p: LatencyPoint) -> Self {
        (p.round as f64, p.ms)
    }
}
