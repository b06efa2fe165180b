use serde::Serialize;

use crate::error::AppError;

/// Pretty JSON for `--json` output
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", to_json(value)?);
    Ok(())
}
