use crate::Result;
use crate::results::RawResult;
use camino::Utf8Path;
use ohno::IntoAppError;
use std::fs;

/// Load one raw result document from a file.
///
/// Fails when the file cannot be read or does not decode as JSON. The error
/// carries the offending path so the batch driver can report it and move on
/// to the remaining inputs.
pub fn load(path: &Utf8Path) -> Result<RawResult> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading result file '{path}'"))?;
    let doc = serde_json::from_str(&text).into_app_err_with(|| format!("decoding result file '{path}'"))?;
    Ok(RawResult::new(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::io::Write;

    fn write_temp_file(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("result.json")).unwrap();
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_document() {
        let (_dir, path) = write_temp_file(r#"{"config": {"entries": 10}}"#);
        let raw = load(&path).unwrap();
        assert_eq!(raw.config_u64("entries"), 10);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load(Utf8Path::new("/nonexistent/result.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/result.json"));
    }

    #[test]
    fn test_load_malformed_json_reports_path() {
        let (_dir, path) = write_temp_file("{not json");
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("result.json"));
    }
}
