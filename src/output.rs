//! JSON output helpers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::UnimodelError;

/// Write `value` as pretty JSON followed by a newline.
pub fn emit_json<T: Serialize>(value: &T, writer: &mut impl Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

/// Write `value` to `path`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<(), UnimodelError> {
    match path {
        Some(path) => {
            let mut buffer = Vec::new();
            emit_json(value, &mut buffer).map_err(|e| UnimodelError::io(path, e))?;
            fs::write(path, buffer).map_err(|e| UnimodelError::io(path, e))
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            emit_json(value, &mut handle)
                .and_then(|_| handle.flush())
                .map_err(|e| UnimodelError::io("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unimodel_core::model::UnifiedModel;

    #[test]
    fn emitted_model_parses_back() {
        let model = UnifiedModel::new();
        let mut output = Vec::new();
        emit_json(&model, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(UnifiedModel::from_json(&text).unwrap(), model);
    }

    #[test]
    fn output_is_deterministic() {
        let model = UnifiedModel::new();
        let mut first = Vec::new();
        let mut second = Vec::new();
        emit_json(&model, &mut first).unwrap();
        emit_json(&model, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
