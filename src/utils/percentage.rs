use std::{fmt::Display, ops::Deref};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Percentage {
    pub fn new_opt(value: f64) -> Option<Percentage> {
        if value < 0. {
            None
        } else {
            Some(Percentage(value))
        }
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Share of `part` in `whole`, used for the dashboard's mood distribution.
pub fn count_percentage(part: usize, whole: usize) -> Percentage {
    Percentage::new_opt(part as f64 / whole as f64 * 100.)
        .expect("Percentage should always be at least 0")
}

#[cfg(test)]
mod tests {
    use super::count_percentage;

    #[test]
    fn count_percentage_basic() {
        assert_eq!(*count_percentage(1, 4), 25.);
        assert_eq!(*count_percentage(0, 3), 0.);
        assert_eq!(*count_percentage(2, 2), 100.);
    }
}
