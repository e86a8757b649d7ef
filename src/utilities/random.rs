//! Random helpers
//!
//! Used to seed demo data. Callers pass the generator so runs can be
//! reproduced with a seeded `StdRng`.

use rand::Rng;

use crate::domain::DomainError;

/// Random integer in the inclusive range `[ceil(min), floor(max)]`.
///
/// # Errors
/// - `DomainError::InvalidRange` if the rounded bounds are inverted
pub fn random_integer<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<i64, DomainError> {
    let min = min.ceil() as i64;
    let max = max.floor() as i64;

    if min > max {
        return Err(DomainError::InvalidRange { min, max });
    }

    Ok(rng.gen_range(min..=max))
}

/// Uniformly pick one element; `None` for an empty slice.
pub fn random_array_element<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}
