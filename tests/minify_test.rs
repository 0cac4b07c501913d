use anyhow::Result;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use token_minify::{minify_json, ErrorKind, MinifyError};

fn write_tokens_file(temp_dir: &TempDir, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let tokens = temp_dir.path().join("tokens");
    fs::create_dir_all(&tokens)?;
    let path = tokens.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_empty_object() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_tokens_file(&temp_dir, "empty.json", "{ }\n")?;

    let output = minify_json(&input)?.expect("output path");
    assert_eq!(output, temp_dir.path().join("tokens/empty.min.json"));
    assert_eq!(fs::read_to_string(&output)?, "{}");
    Ok(())
}

#[test]
fn test_whitespace_removed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_tokens_file(&temp_dir, "ab.json", "{\"a\": 1, \"b\": 2}")?;

    let output = minify_json(&input)?.expect("output path");
    assert_eq!(fs::read_to_string(output)?, "{\"a\":1,\"b\":2}");
    Ok(())
}

#[test]
fn test_key_order_preserved() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_tokens_file(
        &temp_dir,
        "colors.json",
        r##"{
    "zeta": {"value": "#fff", "type": "color"},
    "alpha": {"value": "#000", "type": "color"},
    "mid": [3, 2, 1]
}"##,
    )?;

    let output = minify_json(&input)?.expect("output path");
    assert_eq!(
        fs::read_to_string(output)?,
        r##"{"zeta":{"value":"#fff","type":"color"},"alpha":{"value":"#000","type":"color"},"mid":[3,2,1]}"##
    );
    Ok(())
}

#[test]
fn test_round_trip_preserves_value() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let documents = [
        json!({}),
        json!([]),
        json!(null),
        json!("a string with  spaces\tand\nnewlines"),
        json!(-12.5),
        json!({"nested": {"deep": [true, false, null, {"x": "y z"}]}, "n": 1e-7}),
        json!([{"unicode": "héllo ✓"}, {"escaped": "quote \" backslash \\"}]),
    ];

    for (i, doc) in documents.iter().enumerate() {
        let pretty = serde_json::to_string_pretty(doc)?;
        let input = write_tokens_file(&temp_dir, &format!("doc{i}.json"), &pretty)?;

        let output = minify_json(&input)?.expect("output path");
        let written = fs::read_to_string(&output)?;
        let reparsed: Value = serde_json::from_str(&written)?;

        assert_eq!(&reparsed, doc, "document {i} changed value");
        assert!(written.len() <= pretty.len());
    }
    Ok(())
}

#[test]
fn test_existing_output_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_tokens_file(&temp_dir, "a.json", "[1, 2]")?;
    write_tokens_file(&temp_dir, "a.min.json", "stale")?;

    let output = minify_json(&input)?.expect("output path");
    assert_eq!(fs::read_to_string(output)?, "[1,2]");
    Ok(())
}

#[test]
fn test_minified_input_is_noop() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_tokens_file(&temp_dir, "a.min.json", "{ \"a\": 1 }")?;

    assert_eq!(minify_json(&input)?, None);
    assert_eq!(fs::read_to_string(&input)?, "{ \"a\": 1 }");
    assert_eq!(fs::read_dir(temp_dir.path().join("tokens"))?.count(), 1);
    Ok(())
}

#[test]
fn test_missing_file_is_read_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("tokens/missing.json");

    let err = minify_json(&input).unwrap_err();
    assert!(matches!(err, MinifyError::Read { .. }));
    assert_eq!(err.kind(), ErrorKind::ReadOrParse);
    assert_eq!(err.path(), input.as_path());
    Ok(())
}

#[test]
fn test_invalid_json_is_parse_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_tokens_file(&temp_dir, "bad.json", "{\"a\": 1,}")?;

    let err = minify_json(&input).unwrap_err();
    assert!(matches!(err, MinifyError::Parse { .. }));
    assert_eq!(err.kind(), ErrorKind::ReadOrParse);
    assert!(err.to_string().contains("bad.json"));
    assert!(!temp_dir.path().join("tokens/bad.min.json").exists());
    Ok(())
}

#[test]
fn test_unwritable_destination_is_write_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_tokens_file(&temp_dir, "a.json", "{}")?;
    // A directory squatting on the output name makes the write fail.
    fs::create_dir(temp_dir.path().join("tokens/a.min.json"))?;

    let err = minify_json(temp_dir.path().join("tokens/a.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);
    assert_eq!(err.path(), temp_dir.path().join("tokens/a.json").as_path());
    match &err {
        MinifyError::Write { output, .. } => {
            assert_eq!(output, &temp_dir.path().join("tokens/a.min.json"))
        }
        other => panic!("expected a write error, got {other:?}"),
    }
    Ok(())
}
