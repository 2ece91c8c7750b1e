use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const PLACEHOLDER: &str = "MISSING TRANSLATION";

#[test]
fn test_scan_creates_catalog() -> Result<()> {
    let test = CliTest::with_file("app.js", "alert(translate('Hello'));")?;

    let output = test.scan_command().args(["-t", "es,fr"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "Hello": { "es": PLACEHOLDER, "fr": PLACEHOLDER } })
    );
    assert_eq!(
        stdout(&output),
        "✓ Created translations.json (1 new key, 2 new values - 2 missing)\n\
         ✓ Processed 1 directory, 1 file - 1 key added, 2 translations missing\n"
    );

    Ok(())
}

#[test]
fn test_scan_preserves_existing_translations() -> Result<()> {
    let test = CliTest::with_file("app.js", "translate('Hello'); translate('World');")?;
    test.write_file(
        "translations.json",
        r#"{ "Hello": { "es": "Hola" }, "Removed": { "es": "Quitado" } }"#,
    )?;

    let output = test.scan_command().args(["-t", "es"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("translations.json")?,
        json!({
            "Hello": { "es": "Hola" },
            "Removed": { "es": "Quitado" },
            "World": { "es": PLACEHOLDER },
        })
    );

    Ok(())
}

#[test]
fn test_scan_twice_is_stable() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<h1>{{ translate("Title") }}</h1>"#)?;

    test.scan_command().args(["-t", "de"]).output()?;
    let first = test.read_file("translations.json")?;

    let output = test.scan_command().args(["-t", "de"]).output()?;
    let second = test.read_file("translations.json")?;

    assert_eq!(first, second);
    assert_eq!(
        stdout(&output),
        "✓ Processed 1 directory, 1 file - 0 keys added, 1 translation missing\n"
    );

    Ok(())
}

#[test]
fn test_scan_adds_newly_requested_language() -> Result<()> {
    let test = CliTest::with_file("app.js", "translate('Hello')")?;
    test.write_file("translations.json", r#"{ "Hello": { "es": "Hola" } }"#)?;

    test.scan_command().args(["-t", "es,it"]).output()?;

    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "Hello": { "es": "Hola", "it": PLACEHOLDER } })
    );

    Ok(())
}

#[test]
fn test_scan_reports_non_literal() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "var a = 1;\nalert(translate(name));\n")?;

    let output = test.scan_command().args(["-t", "es"]).output()?;

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("warning: non-literal argument to translate(): name"));
    assert!(err.contains("--> src/app.js:2"));
    assert_eq!(
        test.read_json("src/translations.json")?,
        json!({ "FOUND VARIABLE INPUT: name": { "es": PLACEHOLDER } })
    );

    Ok(())
}

#[test]
fn test_scan_recursive_by_default() -> Result<()> {
    let test = CliTest::with_file("a.js", "translate('top')")?;
    test.write_file("lib/b.js", "translate('nested')")?;

    test.scan_command().output()?;

    assert_eq!(test.read_json("translations.json")?, json!({ "top": {} }));
    assert_eq!(test.read_json("lib/translations.json")?, json!({ "nested": {} }));
    assert!(!test.root().join(".git").join("translations.json").exists());

    Ok(())
}

#[test]
fn test_scan_no_recursive() -> Result<()> {
    let test = CliTest::with_file("a.js", "translate('top')")?;
    test.write_file("lib/b.js", "translate('nested')")?;

    let output = test.scan_command().arg("-R").output()?;

    assert!(output.status.success());
    assert!(test.root().join("translations.json").exists());
    assert!(!test.root().join("lib").join("translations.json").exists());

    Ok(())
}

#[test]
fn test_scan_output_dir() -> Result<()> {
    let test = CliTest::with_file("web/a.js", "translate('web')")?;
    test.write_file("other/b.js", "translate('other')")?;

    let output = test.scan_command().args(["-o", "web"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("web").join("translations.json").exists());
    assert!(!test.root().join("other").join("translations.json").exists());
    assert!(!test.root().join("translations.json").exists());

    Ok(())
}

#[test]
fn test_scan_extensions() -> Result<()> {
    let test = CliTest::with_file("a.vue", "<p>{{ translate('vue') }}</p>")?;
    test.write_file("b.js", "translate('js')")?;

    test.scan_command().args(["-e", "vue"]).output()?;

    assert_eq!(test.read_json("translations.json")?, json!({ "vue": {} }));

    Ok(())
}

#[test]
fn test_scan_language_sets_placeholder() -> Result<()> {
    let test = CliTest::with_file("a.js", "translate('Hello')")?;

    test.scan_command().args(["-l", "fr", "-t", "de"]).output()?;

    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "Hello": { "de": "TRADUCTION MANQUANTE" } })
    );

    Ok(())
}

#[test]
fn test_scan_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("a.js", "t('Hello'); translate('Ignored')")?;
    test.write_file(
        ".xlocalizerc.json",
        r#"{ "marker": "t", "language": "es", "translateTo": ["en"] }"#,
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "Hello": { "en": "FALTA TRADUCCIÓN" } })
    );

    Ok(())
}

#[test]
fn test_scan_config_ignores() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "translate('src')")?;
    test.write_file("node_modules/pkg/index.js", "translate('dependency')")?;
    test.write_file(".xlocalizerc.json", r#"{ "ignores": ["**/node_modules/**"] }"#)?;

    test.scan_command().output()?;

    assert!(test.root().join("src").join("translations.json").exists());
    assert!(!test.root().join("node_modules").join("translations.json").exists());
    assert!(
        !test
            .root()
            .join("node_modules/pkg")
            .join("translations.json")
            .exists()
    );

    Ok(())
}

#[test]
fn test_scan_dry_run() -> Result<()> {
    let test = CliTest::with_file("a.js", "translate('Hello')")?;

    let output = test.scan_command().args(["--dry-run", "-t", "es"]).output()?;

    assert!(output.status.success());
    assert!(
        stdout(&output)
            .contains("Would update translations.json (1 new key, 1 new value - 1 missing)")
    );
    assert!(!test.root().join("translations.json").exists());

    Ok(())
}

#[test]
fn test_scan_malformed_catalog() -> Result<()> {
    let test = CliTest::with_file("a.js", "translate('top')")?;
    test.write_file("translations.json", r#"{ "top": "not an entry" }"#)?;
    test.write_file("lib/b.js", "translate('nested')")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("malformed catalog"));
    assert_eq!(
        test.read_file("translations.json")?,
        r#"{ "top": "not an entry" }"#
    );
    assert!(test.root().join("lib").join("translations.json").exists());

    Ok(())
}

#[test]
fn test_scan_missing_output_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().args(["-o", "missing"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Output directory does not exist"));

    Ok(())
}

#[test]
fn test_scan_invalid_language() -> Result<()> {
    let test = CliTest::with_file("a.js", "translate('x')")?;

    let output = test.scan_command().args(["-t", "es,not a code"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid language code in 'translateTo'"));
    assert!(!test.root().join("translations.json").exists());

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));

    Ok(())
}

#[test]
fn test_scan_paren_inside_string_argument() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        "translate(mood ? ':(' : x);\ntranslate('Next');\n",
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_json("translations.json")?,
        json!({ "FOUND VARIABLE INPUT: mood ? ':(' : x": {}, "Next": {} })
    );

    Ok(())
}
