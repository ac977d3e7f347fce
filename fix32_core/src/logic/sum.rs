use crate::Fix32;

/// # Summation
impl Fix32 {
    /// Returns `self + rhs`, or `None` if the result overflows
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        // overflow can only happen when the signs agree, and then the sign of the
        // sum differs from both
        match self.raw().overflowing_add(rhs.raw()) {
            (sum, false) => Some(Self::from_raw(sum)),
            (_, true) => None,
        }
    }

    /// Returns `self - rhs`, or `None` if the result overflows
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.raw().overflowing_sub(rhs.raw()) {
            (diff, false) => Some(Self::from_raw(diff)),
            (_, true) => None,
        }
    }

    /// Returns `self + rhs`, or [Fix32::OVERFLOW] if the result overflows
    pub const fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => Self::OVERFLOW,
        }
    }

    /// Returns `self - rhs`, or [Fix32::OVERFLOW] if the result overflows
    pub const fn sub(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Some(diff) => diff,
            None => Self::OVERFLOW,
        }
    }

    /// Saturating addition. Any result with the bit pattern of
    /// [Fix32::OVERFLOW] is mapped to [Fix32::MAX] if `self` is nonnegative
    /// and to [Fix32::MIN] otherwise. Note that this also maps an exact result
    /// of [Fix32::MIN] when `self` is nonnegative, for example
    /// `Fix32::ZERO.saturating_add(Fix32::MIN) == Fix32::MAX`.
    pub const fn saturating_add(self, rhs: Self) -> Self {
        let sum = self.add(rhs);
        if sum.is_overflow() {
            Self::saturate_by_sign(!self.is_negative())
        } else {
            sum
        }
    }

    /// Saturating subtraction, mapped the same way as
    /// [Fix32::saturating_add]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        let diff = self.sub(rhs);
        if diff.is_overflow() {
            Self::saturate_by_sign(!self.is_negative())
        } else {
            diff
        }
    }

    #[inline]
    pub(crate) const fn saturate_by_sign(positive: bool) -> Self {
        if positive {
            Self::MAX
        } else {
            Self::MIN
        }
    }
}
