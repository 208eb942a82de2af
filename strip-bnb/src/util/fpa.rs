use std::cmp::Ordering;
use std::fmt::{Debug, Display};

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl<T> From<T> for FPA
where
    T: Into<f32>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::FPA;

    #[test]
    fn tolerates_rounding_noise() {
        let sum = 0.1_f32 + 0.2_f32;
        assert_eq!(FPA(sum), FPA(0.3));
        assert!(FPA(sum) <= FPA(0.3));
        assert!(!(FPA(sum) < FPA(0.3)));
    }

    #[test]
    fn orders_distinct_values() {
        assert!(FPA(4.0) < FPA(5.0));
        assert!(FPA(5.0) < FPA(f32::INFINITY));
        assert!(FPA(6.0) > FPA(5.0));
    }
}
