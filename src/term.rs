use std::fmt::Display;

// A single monomial `coeff * x^exp`.
// Never stored with `coeff == 0`; `Polynomial::add_term` guarantees this.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term<R> {
    pub(crate) coeff: R,
    pub(crate) exp: usize,
}

impl<R> Term<R> {
    pub(crate) fn new(coeff: R, exp: usize) -> Self {
        Self { coeff, exp }
    }
}

impl<R> Display for Term<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.exp {
            0 => write!(f, "{}", self.coeff),
            1 => write!(f, "{}x", self.coeff),
            e => write!(f, "{}x^{e}", self.coeff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Term::new(5, 0).to_string(), "5");
        assert_eq!(Term::new(3, 1).to_string(), "3x");
        assert_eq!(Term::new(1, 2).to_string(), "1x^2");
        assert_eq!(Term::new(-4, 3).to_string(), "-4x^3");
    }
}
