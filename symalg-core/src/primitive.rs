//! Functions to construct [`Integer`]s, [`Float`]s, and [`Complex`] numbers from various types.

use rug::{Assign, Complex, Float, Integer};

/// The number of bits of precision to use when computing values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_precision() {
        assert_eq!(float(1).prec(), PRECISION);
        assert_eq!(complex((1, 2)).prec(), (PRECISION, PRECISION));
    }

    #[test]
    fn float_from_integer() {
        assert_eq!(float(&int(12)), 12);
    }
}
