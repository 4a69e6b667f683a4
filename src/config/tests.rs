use super::*;
use std::io::Write;

#[test]
fn test_default_config_is_valid() {
    let config = SplitterConfig::default();
    assert_eq!(config.chunk_size(), 4000);
    assert_eq!(config.chunk_overlap(), 200);
    assert_eq!(config.separators(), &["\n\n", "\n", " ", ""]);
    assert_eq!(config.length("héllo"), 5);
}

#[test]
fn test_overlap_equal_to_size_rejected() {
    let result = SplitterConfig::new(5, 5);
    assert_eq!(
        result.unwrap_err(),
        ConfigError::OverlapTooLarge {
            overlap: 5,
            size: 5
        }
    );
}

#[test]
fn test_overlap_larger_than_size_rejected() {
    assert!(matches!(
        SplitterConfig::new(10, 50),
        Err(ConfigError::OverlapTooLarge { overlap: 50, size: 10 })
    ));
}

#[test]
fn test_zero_chunk_size_rejected() {
    // Zero size is reported before the overlap check
    let result = SplitterConfig::builder().chunk_size(0).build();
    assert_eq!(result.unwrap_err(), ConfigError::ZeroChunkSize);
}

#[test]
fn test_empty_separator_list_rejected() {
    let result = SplitterConfig::builder()
        .separators(Vec::<String>::new())
        .build();
    assert_eq!(result.unwrap_err(), ConfigError::NoSeparators);
}

#[test]
fn test_zero_overlap_allowed() {
    let config = SplitterConfig::new(1, 0).unwrap();
    assert_eq!(config.chunk_size(), 1);
    assert_eq!(config.chunk_overlap(), 0);
}

#[test]
fn test_builder_custom_length_function() {
    let config = SplitterConfig::builder()
        .chunk_size(10)
        .chunk_overlap(2)
        .separators([" "])
        .length_function(|text: &str| text.split_whitespace().count())
        .build()
        .unwrap();

    assert_eq!(config.separators(), &[" "]);
    assert_eq!(config.length("one two three"), 3);
}

#[test]
fn test_byte_and_char_count_differ_on_multibyte() {
    assert_eq!(CharCount.length("ñandú"), 5);
    assert_eq!(ByteCount.length("ñandú"), 7);
    assert_eq!(CharCount.length(""), 0);
}

#[test]
fn test_error_messages() {
    let err = ConfigError::OverlapTooLarge {
        overlap: 300,
        size: 200,
    };
    assert_eq!(
        err.to_string(),
        "Chunk overlap (300) must be smaller than chunk size (200)"
    );
}

#[test]
fn test_settings_partial_json_uses_defaults() {
    let settings = SplitterSettings::from_json(r#"{"chunk_size": 1000}"#).unwrap();
    assert_eq!(settings.chunk_size, 1000);
    assert_eq!(settings.chunk_overlap, DEFAULT_CHUNK_OVERLAP);
    assert_eq!(settings.length, LengthUnit::Chars);

    let config = settings.into_config().unwrap();
    assert_eq!(config.chunk_size(), 1000);
    assert_eq!(config.separators().len(), 4);
}

#[test]
fn test_settings_bytes_unit() {
    let json = r#"{"chunk_size": 8, "chunk_overlap": 0, "separators": [""], "length": "bytes"}"#;
    let config = SplitterSettings::from_json(json)
        .unwrap()
        .into_config()
        .unwrap();
    assert_eq!(config.length("ñ"), 2);
    assert_eq!(config.separators(), &[""]);
}

#[test]
fn test_settings_unknown_field_rejected() {
    let result = SplitterSettings::from_json(r#"{"chunk_sise": 10}"#);
    assert!(result.is_err());
}

#[test]
fn test_settings_invalid_values_fail_validation() {
    let settings = SplitterSettings::from_json(r#"{"chunk_size": 100, "chunk_overlap": 100}"#)
        .unwrap();
    assert!(matches!(
        settings.into_config(),
        Err(ConfigError::OverlapTooLarge { .. })
    ));
}

#[test]
fn test_settings_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"chunk_size": 500, "chunk_overlap": 50, "separators": ["\n\n", " "]}}"#
    )
    .unwrap();

    let settings = SplitterSettings::from_path(file.path()).unwrap();
    assert_eq!(settings.chunk_size, 500);
    assert_eq!(settings.chunk_overlap, 50);
    assert_eq!(settings.separators, vec!["\n\n".to_string(), " ".to_string()]);
}

#[test]
fn test_settings_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SplitterSettings::from_path(&dir.path().join("missing.json"));
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read settings file"));
}
