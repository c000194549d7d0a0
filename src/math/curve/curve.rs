
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    /// Defaults to zero.
    fn second_derivative(&self, _x: f64) -> f64 {
        0.0
    }
}
