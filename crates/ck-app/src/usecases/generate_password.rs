use ck_core::{PasswordError, PasswordGenerator, PasswordOptions};
use std::sync::Mutex;
use tracing::debug;

/// Shares one password generator (and its random source) between callers.
pub struct GeneratePassword {
    generator: Mutex<PasswordGenerator>,
}

impl Default for GeneratePassword {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratePassword {
    pub fn new() -> Self {
        Self::with_generator(PasswordGenerator::new())
    }

    pub fn with_generator(generator: PasswordGenerator) -> Self {
        Self {
            generator: Mutex::new(generator),
        }
    }

    pub fn execute(&self, options: &PasswordOptions) -> Result<String, PasswordError> {
        let mut generator = self
            .generator
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let password = generator.generate_with(options)?;
        debug!(
            length = options.length,
            upper = options.use_upper,
            lower = options.use_lower,
            special = options.use_special,
            "generated password"
        );
        Ok(password)
    }
}
