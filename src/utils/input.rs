use std::io::{IsTerminal, Read};

use crate::error::AppError;

/// Resolve a text argument, reading stdin when it is absent or `-`.
///
/// An absent argument on an interactive terminal yields an empty string so
/// the caller reports the usual "Please enter ..." message instead of blocking.
pub(crate) fn read_text_arg(arg: Option<&str>) -> Result<String, AppError> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        Some(_) => read_stdin(),
        None if std::io::stdin().is_terminal() => Ok(String::new()),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String, AppError> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
