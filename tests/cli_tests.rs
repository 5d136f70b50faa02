use assert_cmd::Command;
use assert_fs::prelude::{FileWriteStr, PathChild};
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

const EXPECTED_STYLISH: &str = "{
    common: {
      + follow: false
        setting1: Value 1
      - setting2: 200
      - setting3: true
      + setting3: null
      + setting4: blah blah
      + setting5: {
            key5: value5
        }
        setting6: {
            doge: {
              - wow: one
              + wow: so much
            }
            key: value
          + ops: vops
        }
    }
    group1: {
      - baz: bas
      + baz: bars
        foo: bar
      - nest: {
            key: value
        }
      + nest: str
    }
  - group2: {
        abc: 12345
        deep: {
            id: 45
        }
    }
  + group3: {
        deep: {
            id: {
                number: 45
            }
        }
        fee: 100500
    }
}
";

const EXPECTED_PLAIN: &str = "Property 'common.follow' was added with value: false
Property 'common.setting2' was removed
Property 'common.setting3' was updated. From true to null
Property 'common.setting4' was added with value: 'blah blah'
Property 'common.setting5' was added with value: [complex value]
Property 'common.setting6.doge.wow' was updated. From 'one' to 'so much'
Property 'common.setting6.ops' was added with value: 'vops'
Property 'group1.baz' was updated. From 'bas' to 'bars'
Property 'group1.nest' was updated. From [complex value] to 'str'
Property 'group2' was removed
Property 'group3' was added with value: [complex value]
";

#[test]
fn json_files_render_stylish_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg(fixture("file1.json")).arg(fixture("file2.json"));

    sut.assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED_STYLISH));

    Ok(())
}

#[test]
fn yaml_files_render_the_same_diff() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg(fixture("file1.yml")).arg(fixture("file2.yml"));

    sut.assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED_STYLISH));

    Ok(())
}

#[test]
fn mixed_json_and_yaml_inputs_compare_by_content() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg(fixture("file1.json")).arg(fixture("file2.yml"));

    sut.assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED_STYLISH));

    Ok(())
}

#[test]
fn plain_format_prints_one_sentence_per_change() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--format")
        .arg("plain")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    sut.assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED_PLAIN));

    Ok(())
}

#[test]
fn format_can_come_from_the_environment() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.env("GENDIFF_FORMAT", "plain")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    sut.assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED_PLAIN));

    Ok(())
}

#[test]
fn json_format_serializes_the_node_tree() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("-f")
        .arg("json")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    let output = sut.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output)?;

    let expected = serde_json::json!([
        {
            "state": "nested",
            "key": "common",
            "children": [
                {"state": "added", "key": "follow", "value": false},
                {"state": "unchanged", "key": "setting1", "value": "Value 1"},
                {"state": "removed", "key": "setting2", "value": 200},
                {"state": "updated", "key": "setting3", "oldValue": true, "newValue": null},
                {"state": "added", "key": "setting4", "value": "blah blah"},
                {"state": "added", "key": "setting5", "value": {"key5": "value5"}},
                {
                    "state": "nested",
                    "key": "setting6",
                    "children": [
                        {
                            "state": "nested",
                            "key": "doge",
                            "children": [
                                {
                                    "state": "updated",
                                    "key": "wow",
                                    "oldValue": "one",
                                    "newValue": "so much",
                                },
                            ],
                        },
                        {"state": "unchanged", "key": "key", "value": "value"},
                        {"state": "added", "key": "ops", "value": "vops"},
                    ],
                },
            ],
        },
        {
            "state": "nested",
            "key": "group1",
            "children": [
                {"state": "updated", "key": "baz", "oldValue": "bas", "newValue": "bars"},
                {"state": "unchanged", "key": "foo", "value": "bar"},
                {
                    "state": "updated",
                    "key": "nest",
                    "oldValue": {"key": "value"},
                    "newValue": "str",
                },
            ],
        },
        {
            "state": "removed",
            "key": "group2",
            "value": {"abc": 12345, "deep": {"id": 45}},
        },
        {
            "state": "added",
            "key": "group3",
            "value": {"deep": {"id": {"number": 45}}, "fee": 100500},
        },
    ]);

    assert_eq!(parsed, expected);

    Ok(())
}

#[test]
fn identical_files_show_no_markers() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg(fixture("file1.json")).arg(fixture("file1.json"));

    sut.assert()
        .success()
        .stdout(predicate::str::contains("setting1: Value 1"))
        .stdout(predicate::str::contains("+").not())
        .stdout(predicate::str::contains("-").not());

    Ok(())
}

#[test]
fn empty_documents_produce_an_empty_diff() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let left = dir.child("left.json");
    left.write_str("{}")?;
    let right = dir.child("right.json");
    right.write_str("{}")?;

    let mut sut = Command::cargo_bin("gendiff")?;
    sut.arg(left.path()).arg(right.path());

    sut.assert().success().stdout(predicate::str::diff("{\n\n}\n"));

    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg(fixture("data.txt")).arg(fixture("file2.json"));

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"))
        .stderr(predicate::str::contains("data.txt"));

    Ok(())
}

#[test]
fn missing_file_reports_the_path() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("no/such/file.json").arg(fixture("file2.json"));

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("no/such/file.json"));

    Ok(())
}

#[test]
fn malformed_json_reports_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let broken = dir.child("broken.json");
    broken.write_str(r#"{"host": }"#)?;

    let mut sut = Command::cargo_bin("gendiff")?;
    sut.arg(broken.path()).arg(fixture("file2.json"));

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"))
        .stderr(predicate::str::contains("JSON"));

    Ok(())
}

#[test]
fn scalar_root_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg(fixture("scalar.yml")).arg(fixture("file2.yml"));

    sut.assert().failure().stderr(predicate::str::contains(
        "first document must be an object at the top level, found string",
    ));

    Ok(())
}

#[test]
fn unknown_format_is_rejected_by_the_parser() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("-f")
        .arg("fancy")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'fancy'"));

    Ok(())
}

#[test]
fn filter_narrows_the_comparison_to_a_subtree() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--filter")
        .arg("/common/setting6")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    let expected = "{
    doge: {
      - wow: one
      + wow: so much
    }
    key: value
  + ops: vops
}
";

    sut.assert().success().stdout(predicate::str::diff(expected));

    Ok(())
}

#[test]
fn filter_missing_on_one_side_compares_against_empty() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--filter")
        .arg("/group2")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    let expected = "{
  - abc: 12345
  - deep: {
        id: 45
    }
}
";

    sut.assert().success().stdout(predicate::str::diff(expected));

    Ok(())
}

#[test]
fn filter_pointing_at_a_scalar_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--filter")
        .arg("/common/setting1")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("must resolve to an object"))
        .stderr(predicate::str::contains("/common/setting1"));

    Ok(())
}

#[test]
fn filter_with_bad_syntax_reports_the_position() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--filter")
        .arg("common/setting6")
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"));

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path syntax"));

    Ok(())
}

#[test]
fn help_describes_the_tool() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--help");

    sut.assert().success().stdout(predicate::str::contains(
        "Compares two configuration files and shows a difference.",
    ));

    Ok(())
}

#[test]
fn version_prints_the_crate_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut sut = Command::cargo_bin("gendiff")?;

    sut.arg("--version");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("gendiff"));

    Ok(())
}
