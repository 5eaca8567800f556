use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const GREETING: &str = r#"
export function Greeting() {
    // <LocalizeText id="commented.out" defaultMessage="Hidden" />
    return (
        <h1>
            <LocalizeText
                id="greeting.title"
                description="Main heading"
                defaultMessage="Hi {{ name }}!"
            />
            <LocalizeText id="greeting.subtitle" defaultMessage='Say "hello"' />
        </h1>
    );
}
"#;

#[test]
fn test_extract_json_default() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", GREETING)?;

    let output = run(&mut test.extract_command())?;

    assert_eq!(output.code, Some(0));
    let records: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        records,
        serde_json::json!([
            {
                "file": "src/Greeting.jsx",
                "id": "greeting.title",
                "description": "Main heading",
                "defaultMessage": "Hi {{ name }}!"
            },
            {
                "file": "src/Greeting.jsx",
                "id": "greeting.subtitle",
                "description": null,
                "defaultMessage": "Say \"hello\""
            }
        ])
    );

    Ok(())
}

#[test]
fn test_extract_csv() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", GREETING)?;

    let output = run(test.extract_command().args(["--format", "csv"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        concat!(
            r#""greeting.title","Hi {{ name }}!","Main heading","src/Greeting.jsx""#,
            "\n",
            r#""greeting.subtitle","Say ""hello""","","src/Greeting.jsx""#,
            "\n",
        )
    );

    Ok(())
}

#[test]
fn test_extract_key_value_last_write_wins() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a/First.jsx", r#"<LocalizeText id="dup" defaultMessage="First" />"#)?;
    test.write_file("b/Second.jsx", r#"<LocalizeText id="dup" defaultMessage="Second" />"#)?;

    let output = run(test.extract_command().args(["-f", "key-value"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "{\n  \"dup\": \"Second\"\n}\n");

    Ok(())
}

#[test]
fn test_extract_empty_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.extract_command())?;
    assert_eq!(output.stdout, "[]\n");

    let output = run(test.extract_command().args(["-f", "csv"]))?;
    assert_eq!(output.stdout, "\n");

    let output = run(test.extract_command().args(["-f", "key-value"]))?;
    assert_eq!(output.stdout, "{}\n");

    Ok(())
}

#[test]
fn test_extract_to_output_file() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", GREETING)?;
    test.write_file("messages.json", "old content")?;

    let output = run(test
        .extract_command()
        .args(["-f", "key-value", "-o", "messages.json"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Messages written to"));
    assert!(output.stdout.contains("messages.json"));

    let written: Value = serde_json::from_str(&test.read_file("messages.json")?)?;
    assert_eq!(
        written,
        serde_json::json!({
            "greeting.title": "Hi {{ name }}!",
            "greeting.subtitle": "Say \"hello\""
        })
    );

    Ok(())
}

#[test]
fn test_extract_output_write_failure() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", GREETING)?;

    let output = run(test
        .extract_command()
        .args(["-o", "missing-dir/messages.json"]))?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("error: Failed to write"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_extract_unreadable_file_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", GREETING)?;
    std::os::unix::fs::symlink(
        test.root().join("src/Deleted.jsx"),
        test.root().join("src/Broken.jsx"),
    )?;

    let output = run(&mut test.extract_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("Failed to read file"));
    assert!(output.stderr.contains("Broken.jsx"));

    Ok(())
}

#[test]
fn test_extract_invalid_utf8_is_not_fatal() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.jsx", GREETING)?;
    std::fs::write(
        test.root().join("src/Latin1.jsx"),
        b"<LocalizeText id=\"latin1\" defaultMessage=\"Caf\xe9\" />",
    )?;

    let output = run(test.extract_command().args(["-f", "key-value"]))?;

    assert_eq!(output.code, Some(0));
    let messages: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(messages["latin1"], "Caf\u{fffd}");
    assert_eq!(messages["greeting.title"], "Hi {{ name }}!");

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_extract_follows_symlinked_file() -> Result<()> {
    let test = CliTest::with_file(
        "shared/Shared.jsx",
        r#"<LocalizeText id="shared" defaultMessage="Shared" />"#,
    )?;
    std::fs::create_dir_all(test.root().join("src"))?;
    std::os::unix::fs::symlink(
        test.root().join("shared/Shared.jsx"),
        test.root().join("src/Shared.jsx"),
    )?;

    let output = run(test.command().args(["extract", "src", "-f", "csv"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\"shared\",\"Shared\",\"\",\"Shared.jsx\"\n");

    Ok(())
}

#[test]
fn test_extract_blank_component_argument() -> Result<()> {
    let test = CliTest::with_file("App.jsx", r#"<br /><LocalizeText id="a" />"#)?;

    let output = run(test.extract_command().args(["--component", ""]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("component"));

    Ok(())
}

#[test]
fn test_extract_respects_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".localizerc.json",
        r#"{ "ignores": ["**/generated/**"], "format": "csv" }"#,
    )?;
    test.write_file("src/App.jsx", r#"<LocalizeText id="app" />"#)?;
    test.write_file("src/generated/Gen.jsx", r#"<LocalizeText id="gen" />"#)?;

    let output = run(&mut test.extract_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "\"app\",\"\",\"\",\"src/App.jsx\"\n");

    Ok(())
}

#[test]
fn test_extract_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localizerc.json", r#"{ "ignores": ["**/[oops"] }"#)?;

    let output = run(&mut test.extract_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_extract_verbose_notes() -> Result<()> {
    let test = CliTest::with_file("App.jsx", r#"<LocalizeText defaultMessage="No id" />"#)?;

    let output = run(test.extract_command().args(["-f", "key-value", "-v"]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "{\n  \"null\": \"No id\"\n}\n");
    assert!(output.stderr.contains("Scanned 1 file (0 ignored), found 1 message"));
    assert!(output.stderr.contains("warning: 1 message without an id"));

    Ok(())
}

#[test]
fn test_extract_invalid_format_argument() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.extract_command().args(["-f", "yaml"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.is_empty());

    Ok(())
}
