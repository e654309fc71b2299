/// Stopping criterion for bracket-narrowing searches.
pub trait IsConverged {
    fn is_converged(&self, x_valid: f64, x_nan: f64) -> bool;
}

/// Converged once the bracket is no wider than an absolute tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BracketWidth {
    tolerance: f64,
}

impl BracketWidth {
    pub fn new(tolerance: f64) -> BracketWidth {
        assert!(tolerance > 0.0);
        assert!(tolerance.is_finite());
        BracketWidth { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl IsConverged for BracketWidth {
    fn is_converged(&self, x_valid: f64, x_nan: f64) -> bool {
        (x_valid - x_nan).abs() <= self.tolerance
    }
}
