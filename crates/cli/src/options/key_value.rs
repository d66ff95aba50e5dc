use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyValueError {
    #[error("expected KEY=VALUE, got \"{0}\"")]
    MissingSeparator(String),
    #[error("key cannot be empty in \"{0}\"")]
    EmptyKey(String),
}

/// `KEY=VALUE` argument such as `--set build.flavor=release` or `--artifact jar=build/libs/lib.jar`.
///
/// Splits on the first `=`, so values may contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl FromStr for KeyValue {
    type Err = KeyValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| KeyValueError::MissingSeparator(s.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(KeyValueError::EmptyKey(s.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl From<KeyValue> for (String, String) {
    fn from(pair: KeyValue) -> Self {
        (pair.key, pair.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a=1", "a", "1")]
    #[case(" build.flavor =release", "build.flavor", "release")]
    #[case("url=https://x.org/?a=b", "url", "https://x.org/?a=b")]
    #[case("empty=", "empty", "")]
    fn test_key_value_parse(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
        let pair: KeyValue = input.parse().unwrap();
        assert_eq!(pair.key, key);
        assert_eq!(pair.value, value);
    }

    #[test]
    fn test_key_value_errors() {
        assert_eq!(
            "novalue".parse::<KeyValue>(),
            Err(KeyValueError::MissingSeparator("novalue".to_string()))
        );
        assert_eq!(
            "=1".parse::<KeyValue>(),
            Err(KeyValueError::EmptyKey("=1".to_string()))
        );
    }
}
