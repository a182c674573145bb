use libra_common::error::{LibraryError, LibraryResult};

/// Rejects text that is empty once surrounding whitespace is removed.
pub(crate) fn required(field: &'static str, value: &str) -> LibraryResult<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn rating(value: f32) -> LibraryResult<()> {
    if !(0.0..=5.0).contains(&value) {
        return Err(LibraryError::validation(
            "rating",
            format!("{value} is outside 0.0..=5.0"),
        ));
    }
    Ok(())
}
