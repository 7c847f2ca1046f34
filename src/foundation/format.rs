use std::fmt;

/// Path-data number: rounded to 1/1000, shortest form, never `-0`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut v = (self.0 * 1000.0).round() / 1000.0;
        if v == 0.0 || !v.is_finite() {
            v = 0.0;
        }
        write!(f, "{v}")
    }
}
