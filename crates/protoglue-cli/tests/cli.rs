use clap::Parser;
use pretty_assertions::assert_eq;
use protoglue_cli::Cli;
use std::path::{Path, PathBuf};

const ORDER_PROTO: &str = r#"
syntax = "proto3";
package shop;

import "common/money.proto";

message Order {
  string id = 1;
  int32 quantity = 2;
  common.Money total = 3;
  bytes signature = 4;
}
"#;

const MONEY_PROTO: &str = r#"
syntax = "proto3";
package common;

message Money {
  string currency = 1;
  int64 units = 2;
}
"#;

fn write(root: &Path, name: &str, src: &str) -> PathBuf {
    let path = root.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, src).unwrap();
    path
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["protoglue"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)?.run()
}

#[test]
fn compact_output_with_include_and_map() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vendor/common/money.proto", MONEY_PROTO);
    let proto = write(dir.path(), "order.proto", ORDER_PROTO);
    let vendor = dir.path().join("vendor");

    let output = run(&[
        proto.to_str().unwrap(),
        "-I",
        vendor.to_str().unwrap(),
        "--map",
        "int32=BIG_INT",
        "--compact",
    ])
    .unwrap();

    assert_eq!(
        output,
        concat!(
            r#"[{"name":"id","type":"string"},"#,
            r#"{"name":"quantity","type":"bigint"},"#,
            r#"{"name":"total","type":"struct<currency:string,units:bigint>"},"#,
            r#"{"name":"signature","type":"string"}]"#,
        )
    );
}

#[test]
fn config_file_supplies_includes_and_mapping() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "vendor/common/money.proto", MONEY_PROTO);
    let proto = write(dir.path(), "order.proto", ORDER_PROTO);
    let config = write(
        dir.path(),
        "protoglue.toml",
        r#"
        include = ["vendor"]

        [mapping]
        bytes = "BINARY"
        int32 = "SMALL_INT"
        "#,
    );

    let output = run(&[
        proto.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--map",
        "int32=TINY_INT",
        "--message",
        "shop.Order",
    ])
    .unwrap();

    let columns: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
    let types: Vec<_> = columns
        .iter()
        .map(|column| column["type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        [
            "string",
            "tinyint",
            "struct<currency:string,units:bigint>",
            "binary"
        ]
    );
    assert!(output.contains('\n'), "expected pretty output");
}

#[test]
fn unknown_message_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let proto = write(dir.path(), "money.proto", MONEY_PROTO);

    let err = run(&[proto.to_str().unwrap(), "--message", "Money"]).unwrap_err();
    let err = err.root_cause().to_string();
    assert_eq!(err, "message type not found: Money");
}

#[test]
fn invalid_mapping_type_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let proto = write(dir.path(), "money.proto", MONEY_PROTO);

    let err = run(&[proto.to_str().unwrap(), "--map", "int64=HUGE_INT"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type mapping: unknown catalog type `HUGE_INT`"
    );
}

#[test]
fn missing_config_file_is_reported() {
    let err = run(&["a.proto", "--config", "/nonexistent/protoglue.toml"]).unwrap_err();
    assert!(err.to_string().starts_with("failed to read config file"));
}
