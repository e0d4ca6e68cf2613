use rand::{RngCore, SeedableRng};

/// Largest register value, used as the divisor when mapping draws onto `[0, 1]`.
pub const REGISTER_MAX: f64 = 0xFFFF_FFFF_u32 as f64;

/// How the middle `>> 17` step treats the high bit of the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RightShift {
    /// Standard xorshift32: the register is shifted as an unsigned value.
    #[default]
    Logical,
    /// The register is reinterpreted as `i32` and shifted with sign extension,
    /// reproducing rows rendered by the legacy dashboard.
    Arithmetic,
}

/// xorshift32 over a single 32-bit register.
///
/// A zero seed is a fixed point: every draw stays at zero.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
    shift: RightShift,
}

impl Xorshift32 {
    pub const fn new(seed: u32) -> Self {
        Self::with_shift(seed, RightShift::Logical)
    }

    pub const fn with_shift(seed: u32, shift: RightShift) -> Self {
        Self { state: seed, shift }
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the register and returns its new value.
    pub const fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= match self.shift {
            RightShift::Logical => x >> 17,
            RightShift::Arithmetic => ((x as i32) >> 17) as u32,
        };
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Advances the register and returns it scaled onto the closed interval `[0, 1]`.
    pub fn next(&mut self) -> f64 {
        self.step() as f64 / REGISTER_MAX
    }
}

impl RngCore for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.step() as u64;
        let hi = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Xorshift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // 1609459200000 mod 2^32
    const NEW_YEAR_2021: u32 = 3_141_431_296;

    fn registers(mut rng: Xorshift32) -> [u32; 4] {
        core::array::from_fn(|_| rng.step())
    }

    #[test]
    fn logical_shift_matches_reference_sequence() {
        assert_eq!(
            registers(Xorshift32::new(NEW_YEAR_2021)),
            [3_539_409_279, 180_671_475, 2_279_968_366, 4_079_155_770]
        );
    }

    #[test]
    fn arithmetic_shift_diverges_once_high_bit_is_set() {
        assert_eq!(
            registers(Xorshift32::with_shift(NEW_YEAR_2021, RightShift::Arithmetic)),
            [3_539_409_279, 180_671_475, 2_280_263_278, 48_071_389]
        );
    }

    #[test]
    fn classic_seed_one() {
        // First output of Marsaglia's xorshift32 from a seed of 1.
        let mut rng = Xorshift32::new(1);
        assert_eq!(rng.step(), 270_369);
    }

    #[test]
    fn zero_seed_is_a_fixed_point() {
        for shift in [RightShift::Logical, RightShift::Arithmetic] {
            let mut rng = Xorshift32::with_shift(0, shift);
            for _ in 0..16 {
                assert_eq!(rng.next(), 0.0);
            }
            assert_eq!(rng.state(), 0);
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = Xorshift32::new(0xDEAD_BEEF);
        for _ in 0..10_000 {
            let draw = rng.next();
            assert!((0.0..=1.0).contains(&draw), "draw {draw} out of range");
        }
    }

    #[test]
    fn draws_are_not_idempotent() {
        let mut rng = Xorshift32::new(NEW_YEAR_2021);
        let first = rng.next();
        let second = rng.next();
        assert!(first != second);
    }

    #[test]
    fn rng_core_and_seedable_agree_with_step() {
        let mut a = Xorshift32::from_seed(NEW_YEAR_2021.to_le_bytes());
        let mut b = Xorshift32::new(NEW_YEAR_2021);
        assert_eq!(a.next_u32(), b.step());

        let mut bytes = [0u8; 8];
        a.fill_bytes(&mut bytes);
        let mut expected = [0u8; 8];
        expected[..4].copy_from_slice(&b.step().to_le_bytes());
        expected[4..].copy_from_slice(&b.step().to_le_bytes());
        assert_eq!(bytes, expected);
    }
}
