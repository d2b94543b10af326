//! Integration tests for the build command

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::utm_cmd;

#[test]
fn test_build_full_campaign() {
    utm_cmd()
        .args([
            "build",
            "https://plataforma.io/",
            "--source",
            "src",
            "--medium",
            "med",
            "--campaign",
            "nme",
            "--id",
            "id",
            "--term",
            "trm",
            "--content",
            "ctn",
        ])
        .assert()
        .success()
        .stdout(
            "https://plataforma.io/?utm_source=src&utm_medium=med&utm_campaign=nme\
             &utm_id=id&utm_term=trm&utm_content=ctn\n",
        );
}

#[test]
fn test_build_partial_campaign_keeps_order() {
    utm_cmd()
        .args(["build", "https://x.io/", "--content", "footer", "--source", "ads"])
        .assert()
        .success()
        .stdout("https://x.io/?utm_source=ads&utm_content=footer\n");
}

#[test]
fn test_build_empty_value_is_omitted() {
    utm_cmd()
        .args(["build", "https://x.io/", "--source", "ads", "--medium", ""])
        .assert()
        .success()
        .stdout("https://x.io/?utm_source=ads\n");
}

#[test]
fn test_build_without_attributes_keeps_question_mark() {
    utm_cmd()
        .args(["build", "https://x.io/"])
        .assert()
        .success()
        .stdout("https://x.io/?\n")
        .stderr(predicate::str::contains("no campaign attributes"));
}

#[test]
fn test_build_invalid_address() {
    utm_cmd()
        .args(["build", "youtube", "--source", "ads"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid URL"))
        .stderr(predicate::str::contains("http or https"));
}

#[test]
fn test_removed_init_subcommand() {
    utm_cmd().arg("init").assert().failure();
}
