use crate::Fix32;

/// `rand_support` functions
impl Fix32 {
    // this is also tested by `testcrate/tests/rand.rs`

    /// Creates a `Fix32` with a uniformly random raw value using a
    /// `rand_core::RngCore` random number generator. This works by calling
    /// `RngCore::try_fill_bytes` on the eight little endian bytes of the raw
    /// value.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use fix32::Fix32;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng0 = Xoshiro128StarStar::seed_from_u64(0);
    /// let mut rng1 = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = Fix32::rand_using(&mut rng0).unwrap();
    /// assert_eq!(x, Fix32::rand_using(&mut rng1).unwrap());
    /// assert_ne!(x, Fix32::rand_using(&mut rng0).unwrap());
    /// ```
    pub fn rand_using<R>(rng: &mut R) -> Result<Self, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut bytes = [0u8; 8];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_raw(i64::from_le_bytes(bytes)))
    }

    /// Creates a `Fix32` uniformly distributed in `0..1`, in steps of
    /// [Fix32::EPSILON]
    pub fn rand_unit_using<R>(rng: &mut R) -> Result<Self, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut bytes = [0u8; 4];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_raw(u32::from_le_bytes(bytes) as i64))
    }
}
