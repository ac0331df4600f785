// src/generator.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::charset;
use crate::models::PasswordOptions;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be a positive number")]
    InvalidLength,

    #[error("At least one character type must be selected")]
    NoClassesSelected,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate a random password satisfying the class constraints in `options`.
///
/// Every enabled class contributes at least one character, so the result is
/// longer than `options.length` when more classes are enabled than the
/// requested length can hold.
pub fn generate(options: &PasswordOptions) -> Result<String> {
    if options.length == 0 {
        return Err(GeneratorError::InvalidLength);
    }

    let classes = options.enabled();
    if classes.is_empty() {
        return Err(GeneratorError::NoClassesSelected);
    }

    let pool = charset::build_pool(&classes);

    let mut rng = OsRng;
    let mut password: Vec<u8> = Vec::with_capacity(options.length.max(classes.len()));

    // One character drawn from each enabled class's own set guarantees coverage.
    for class in &classes {
        password.push(*class.members().choose(&mut rng).unwrap());
    }

    // Fill the remainder from the union of the enabled sets.
    for _ in password.len()..options.length {
        password.push(*pool.choose(&mut rng).unwrap());
    }

    // Shuffle so the per-class characters are not predictably placed first.
    password.shuffle(&mut rng);

    Ok(password.into_iter().map(char::from).collect())
}
