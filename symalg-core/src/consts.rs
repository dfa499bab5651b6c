//! Additional constants used in the library. This module consists of static constants that return
//! [`Float`]s with the given value.

use once_cell::sync::Lazy;
use rug::Float;
use super::primitive::float;

pub static ONE_HALF: Lazy<Float> = Lazy::new(|| float(1) / float(2));

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| float(1).exp());

pub static PI: Lazy<Float> = Lazy::new(|| float(-1).acos());

pub static HALF_PI: Lazy<Float> = Lazy::new(|| float(&*PI) / float(2));
