use std::borrow::Borrow;

use num_traits::Num;

use crate::View;

/// Fold of pairwise products of `a` and `b` onto `init`, truncating to
/// the shorter operand.
///
/// Accepts views yielding `T` or `&T`.
pub fn inner_product<T, A, B>(a: &A, b: &B, init: T) -> T
where
    T: Num + Copy,
    A: View,
    B: View,
    A::Item: Borrow<T>,
    B::Item: Borrow<T>,
{
    a.iter()
        .zip(b.iter())
        .fold(init, |acc, (x, y)| acc + *x.borrow() * *y.borrow())
}
