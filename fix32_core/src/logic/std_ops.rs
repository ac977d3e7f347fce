use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::Fix32;

// The operators have the same in-band overflow behavior as the functions of
// the same names, so `x * y` returns `Fix32::OVERFLOW` where `x.mul(y)` does.

macro_rules! impl_ops {
    ($($op:ident $op_fn:ident $assign:ident $assign_fn:ident $f:ident);*;) => {
        $(
            impl $op for Fix32 {
                type Output = Self;

                #[inline]
                fn $op_fn(self, rhs: Self) -> Self {
                    Fix32::$f(self, rhs)
                }
            }

            impl $assign for Fix32 {
                #[inline]
                fn $assign_fn(&mut self, rhs: Self) {
                    *self = Fix32::$f(*self, rhs);
                }
            }
        )*
    };
}

impl_ops!(
    Add add AddAssign add_assign add;
    Sub sub SubAssign sub_assign sub;
    Mul mul MulAssign mul_assign mul;
    Div div DivAssign div_assign div;
    Rem rem RemAssign rem_assign rem;
);

impl Neg for Fix32 {
    type Output = Self;

    /// Wrapping negation, so `-Fix32::MIN` is `Fix32::MIN`
    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(self.raw().wrapping_neg())
    }
}
