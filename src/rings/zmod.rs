use num_traits::{One, Zero};
use std::fmt;
use std::ops;

/// Integer modulo `P`, always kept in `[0, P)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zmod<const P: u64> {
    value: u64,
}

impl<const P: u64> Zmod<P> {
    pub fn new(value: u64) -> Self {
        assert!(P > 0, "Modulus must be positive");
        Zmod { value: value % P }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub const fn modulus() -> u64 {
        P
    }
}

impl<const P: u64> From<u64> for Zmod<P> {
    fn from(value: u64) -> Self {
        Zmod::new(value)
    }
}

impl<const P: u64> ops::Add for Zmod<P> {
    type Output = Zmod<P>;

    fn add(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 + rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Sub for Zmod<P> {
    type Output = Zmod<P>;

    fn sub(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: if rhs.value > self.value {
                self.value + (P - rhs.value)
            } else {
                self.value - rhs.value
            },
        }
    }
}

impl<const P: u64> ops::Mul for Zmod<P> {
    type Output = Zmod<P>;

    fn mul(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 * rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Neg for Zmod<P> {
    type Output = Zmod<P>;

    fn neg(self) -> Zmod<P> {
        Zmod::zero() - self
    }
}

impl<const P: u64> Zero for Zmod<P> {
    fn zero() -> Zmod<P> {
        Zmod::new(0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const P: u64> One for Zmod<P> {
    fn one() -> Zmod<P> {
        Zmod::new(1)
    }
}

impl<const P: u64> fmt::Display for Zmod<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
