use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{PasswordError, DIGITS, LOWERCASE, SPECIAL_CHARS, UPPERCASE};

/// Requested password shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: i64,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            use_upper: true,
            use_lower: true,
            use_special: true,
        }
    }
}

/// Password generator owning its random source.
///
/// Digits are always part of the alphanumeric pool. When special characters
/// are requested every output character is drawn independently: with
/// probability 2/3 from the alphanumeric pool, 1/3 from the special pool.
/// There is no minimum count per class, so short passwords may contain no
/// special character at all.
pub struct PasswordGenerator<R = StdRng> {
    rng: R,
}

impl PasswordGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PasswordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(
        &mut self,
        length: i64,
        use_upper: bool,
        use_lower: bool,
        use_special: bool,
    ) -> Result<String, PasswordError> {
        if length < 1 {
            return Err(PasswordError::InvalidLength(length));
        }
        let length = usize::try_from(length).map_err(|_| PasswordError::InvalidLength(length))?;

        let mut alphanumeric = String::new();
        if use_lower {
            alphanumeric.push_str(LOWERCASE);
        }
        if use_upper {
            alphanumeric.push_str(UPPERCASE);
        }
        alphanumeric.push_str(DIGITS);
        let alphanumeric = alphanumeric.as_bytes();

        if !use_special {
            return Ok(self.draw_from(alphanumeric, length));
        }

        let special = SPECIAL_CHARS.as_bytes();
        let password = (0..length)
            .map(|_| {
                // 0 and 1 pick alphanumeric, 2 picks special: 2:1 weighting
                if self.rng.random_range(0..3) < 2 {
                    self.pick(alphanumeric)
                } else {
                    self.pick(special)
                }
            })
            .collect();

        Ok(password)
    }

    pub fn generate_with(&mut self, options: &PasswordOptions) -> Result<String, PasswordError> {
        self.generate(
            options.length,
            options.use_upper,
            options.use_lower,
            options.use_special,
        )
    }

    fn draw_from(&mut self, pool: &[u8], length: usize) -> String {
        (0..length).map(|_| self.pick(pool)).collect()
    }

    fn pick(&mut self, pool: &[u8]) -> char {
        pool[self.rng.random_range(0..pool.len())] as char
    }
}
