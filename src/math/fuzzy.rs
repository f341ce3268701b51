//! Epsilon-tolerant equality.
//!
//! Types opt in by implementing [`FuzzyEq::fuzzy_eq`]; the negation
//! [`FuzzyEq::fuzzy_ne`] comes for free.

/// Equality up to a tolerance.
pub trait FuzzyEq<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` are equal within `epsilon`.
    fn fuzzy_eq(&self, other: &Rhs, epsilon: f64) -> bool;

    /// Negation of [`fuzzy_eq`](FuzzyEq::fuzzy_eq).
    fn fuzzy_ne(&self, other: &Rhs, epsilon: f64) -> bool {
        !self.fuzzy_eq(other, epsilon)
    }
}

/// `|a - b| <= epsilon`.
#[must_use]
pub fn fuzzy_eq_numbers(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Compares two values through their [`FuzzyEq`] implementation.
#[must_use]
pub fn fuzzy_eq<A, B>(a: &A, b: &B, epsilon: f64) -> bool
where
    A: FuzzyEq<B> + ?Sized,
    B: ?Sized,
{
    a.fuzzy_eq(b, epsilon)
}

/// Negation of [`fuzzy_eq`].
#[must_use]
pub fn fuzzy_ne<A, B>(a: &A, b: &B, epsilon: f64) -> bool
where
    A: FuzzyEq<B> + ?Sized,
    B: ?Sized,
{
    a.fuzzy_ne(b, epsilon)
}

impl FuzzyEq for f64 {
    fn fuzzy_eq(&self, other: &f64, epsilon: f64) -> bool {
        fuzzy_eq_numbers(*self, *other, epsilon)
    }
}

/// Sequences of different length are never equal.
impl<R> FuzzyEq<R> for [f64]
where
    R: AsRef<[f64]> + ?Sized,
{
    fn fuzzy_eq(&self, other: &R, epsilon: f64) -> bool {
        let other = other.as_ref();
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| fuzzy_eq_numbers(*a, *b, epsilon))
    }
}

impl<T: FuzzyEq> FuzzyEq for Option<T> {
    fn fuzzy_eq(&self, other: &Self, epsilon: f64) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.fuzzy_eq(b, epsilon),
            (None, None) => true,
            _ => false,
        }
    }
}
