use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use auto_impl_ops::auto_ops;
use itertools::Itertools;
use num_traits::{FromPrimitive, Zero};

use crate::term::Term;

// A univariate polynomial over `R`, stored sparsely as terms in strictly
// decreasing exponent order. Invariants, maintained by `add_term`:
//
//   1. no two terms share an exponent,
//   2. exponents are strictly decreasing (the leading term comes first),
//   3. no stored term has a zero coefficient.
//
// The empty term sequence is the zero polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<R> {
    terms: Vec<Term<R>>,
}

impl<R> Polynomial<R> {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&R, usize)> {
        self.terms.iter().map(|t| (&t.coeff, t.exp))
    }

    pub fn lead_term(&self) -> Option<(&R, usize)> {
        self.terms.first().map(|t| (&t.coeff, t.exp))
    }

    pub fn lead_exp(&self) -> Option<usize> {
        self.terms.first().map(|t| t.exp)
    }
}

impl<R> Polynomial<R>
where R: Zero {
    pub fn from_coeffs<I>(coeffs: I) -> Self
    where I: IntoIterator<Item = R> {
        let mut p = Self::new();
        for (exp, coeff) in coeffs.into_iter().enumerate() {
            p.add_term(coeff, exp);
        }
        p
    }

    // The single mutating primitive. Merges `coeff * x^exp` into the term
    // sequence, accumulating into an existing term of the same exponent and
    // dropping it if the coefficients cancel.
    pub fn add_term(&mut self, coeff: R, exp: usize) {
        if coeff.is_zero() {
            return;
        }

        // first position whose exponent does not exceed `exp`.
        let Some(i) = self.terms.iter().position(|t| t.exp <= exp) else {
            self.terms.push(Term::new(coeff, exp));
            return;
        };

        if self.terms[i].exp == exp {
            let acc = std::mem::replace(&mut self.terms[i].coeff, R::zero()) + coeff;
            if acc.is_zero() {
                self.terms.remove(i);
            } else {
                self.terms[i].coeff = acc;
            }
        } else {
            self.terms.insert(i, Term::new(coeff, exp));
        }
    }
}

impl<R> Polynomial<R>
where R: Zero + Clone {
    pub fn coeff_for(&self, exp: usize) -> R {
        self.terms.iter()
            .find(|t| t.exp == exp)
            .map(|t| t.coeff.clone())
            .unwrap_or_else(R::zero)
    }

    // Dense coefficient sequence, index = exponent. Empty for zero.
    pub fn to_vec(&self) -> Vec<R> {
        let Some(e) = self.lead_exp() else {
            return vec![];
        };
        let mut res = vec![R::zero(); e + 1];
        for t in &self.terms {
            res[t.exp] = t.coeff.clone();
        }
        res
    }
}

impl<R> Polynomial<R>
where R: Zero + Clone + Mul<Output = R> + FromPrimitive {
    // Formal derivative: (c, e) ↦ (c·e, e−1) for e > 0, constants vanish.
    pub fn differentiate(&self) -> Self {
        let mut res = Self::new();
        for t in &self.terms {
            if t.exp > 0 {
                let e = R::from_usize(t.exp)
                    .expect("exponent not representable as a coefficient");
                res.add_term(t.coeff.clone() * e, t.exp - 1);
            }
        }
        res
    }
}

impl<R> Default for Polynomial<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> From<Vec<R>> for Polynomial<R>
where R: Zero {
    fn from(coeffs: Vec<R>) -> Self {
        Self::from_coeffs(coeffs)
    }
}

#[auto_ops]
impl<R> AddAssign<&Polynomial<R>> for Polynomial<R>
where R: Zero + Clone {
    fn add_assign(&mut self, rhs: &Polynomial<R>) {
        for t in &rhs.terms {
            self.add_term(t.coeff.clone(), t.exp);
        }
    }
}

#[auto_ops]
impl<R> MulAssign<&Polynomial<R>> for Polynomial<R>
where R: Zero + Clone + Mul<Output = R> {
    fn mul_assign(&mut self, rhs: &Polynomial<R>) {
        let mut res = Polynomial::new();
        for s in &self.terms {
            for t in &rhs.terms {
                res.add_term(s.coeff.clone() * t.coeff.clone(), s.exp + t.exp);
            }
        }
        *self = res;
    }
}

impl<R> Zero for Polynomial<R>
where R: Zero + Clone {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<R> Display for Polynomial<R>
where R: Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        let s = self.terms.iter().join(" + ");
        f.write_str(&s.replace("+ -", "- "))
    }
}
