use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn convert_prints_the_converted_value() {
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "int64", "\"8.99\""]);
    cmd.assert().success().code(0).stdout("8\n");

    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "string", "3.140"]);
    cmd.assert().success().stdout("3.14\n");

    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "bool", "\"On\""]);
    cmd.assert().success().stdout("true\n");
}

#[test]
fn negative_numbers_are_input_not_flags() {
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "int64", "-8.5"]);
    cmd.assert().success().stdout("-8\n");

    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["inspect", "-1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("error(conversion_fail)"));
}

#[test]
fn convert_collections_print_canonical_json() {
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "slice", r#"{"b":2,"a":1}"#]);
    cmd.assert().success().stdout("[1,2]\n");

    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "int_map", r#"{"2":"x","10":"y"}"#]);
    cmd.assert().success().stdout("{\"10\":\"y\",\"2\":\"x\"}\n");
}

#[test]
fn conversion_failure_exits_2_and_prints_error_to_stderr() {
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "uint8", "\"256\""]);
    cmd.assert().failure().code(2).stdout("").stderr(predicate::str::contains(
        "unable to convert \"256\" of type string to uint8, out of limit value(255)",
    ));

    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "uint32", "-8"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unable to convert -8 of type int64 to uint32"));
}

#[test]
fn invalid_json_exits_1() {
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "int64", "{"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input is not valid JSON"));
}

#[test]
fn input_can_be_read_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    std::fs::write(&path, r#"["1", 2.5, true]"#).unwrap();

    let arg = format!("@{}", path.display());
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "slice", arg.as_str()]);
    cmd.assert().success().stdout("[\"1\",2.5,true]\n");

    let missing = format!("@{}", dir.path().join("missing.json").display());
    let mut cmd = cargo_bin_cmd!("cvt");
    cmd.args(["convert", "slice", missing.as_str()]);
    cmd.assert().failure().code(1);
}
