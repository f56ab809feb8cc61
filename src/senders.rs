use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::SweepError;

/// Resolve the list of senders to purge, in source order. Senders given
/// on the command line win over the senders file.
pub fn resolve_senders(config: &Config) -> Result<Vec<String>, SweepError> {
    if !config.senders.is_empty() {
        return Ok(config.senders.clone());
    }
    load_senders(&config.senders_path)
}

/// Read and parse a JSON array of sender addresses.
pub fn load_senders(path: &Path) -> Result<Vec<String>, SweepError> {
    let data = fs::read_to_string(path).map_err(|e| SweepError::SenderList {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let senders: Vec<String> =
        serde_json::from_str(&data).map_err(|e| SweepError::SenderList {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(senders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::purge::DeleteStrategy;

    fn config_with(senders: Vec<String>, senders_path: PathBuf) -> Config {
        Config {
            credentials_path: PathBuf::from("credentials.json"),
            token_path: PathBuf::from("token.json"),
            senders_path,
            senders,
            strategy: DeleteStrategy::Batch,
        }
    }

    #[test]
    fn file_order_is_preserved() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["c@x.com", "a@x.com", "b@x.com"]"#).unwrap();

        let senders = load_senders(file.path()).unwrap();
        assert_eq!(senders, vec!["c@x.com", "a@x.com", "b@x.com"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_senders(Path::new("does-not-exist.json"));
        assert!(matches!(result, Err(SweepError::SenderList { .. })));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let result = load_senders(file.path());
        assert!(matches!(result, Err(SweepError::SenderList { .. })));
    }

    #[test]
    fn explicit_senders_skip_the_file() {
        // senders_path points nowhere, which must not matter here
        let config = config_with(
            vec!["spam@x.com".to_string()],
            PathBuf::from("does-not-exist.json"),
        );
        let senders = resolve_senders(&config).unwrap();
        assert_eq!(senders, vec!["spam@x.com"]);
    }

    #[test]
    fn empty_explicit_list_falls_back_to_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["a@x.com"]"#).unwrap();

        let config = config_with(Vec::new(), file.path().to_path_buf());
        let senders = resolve_senders(&config).unwrap();
        assert_eq!(senders, vec!["a@x.com"]);
    }
}
