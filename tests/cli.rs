use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use series_seek::core::api::API_ADDRESS_ENV;

fn series_seek() -> Command {
    Command::cargo_bin("series-seek").unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn reports_when_no_results_are_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "Bar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    series_seek()
        .env(API_ADDRESS_ENV, server.uri())
        .args(["--seriesname", "Bar", "--long", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'Bar'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_the_search_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "Game of Thrones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "score": 0.91,
                "show": {
                    "id": 82,
                    "name": "Game of Thrones",
                    "genres": ["Drama", "Adventure"],
                    "premiered": "2011-04-17",
                    "image": null
                }
            }
        ])))
        .mount(&server)
        .await;

    series_seek()
        .env(API_ADDRESS_ENV, server.uri())
        .args(["--seriesname", "Game of Thrones", "--long", "b", "--feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game of Thrones (2011) - Drama, Adventure"));
}

#[tokio::test(flavor = "multi_thread")]
async fn json_log_config_is_applied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, r#"{{"level": "debug", "ansi": false}}"#).unwrap();

    series_seek()
        .env(API_ADDRESS_ENV, server.uri())
        .args(["--seriesname", "Foo", "--long", "a"])
        .arg("--log-config")
        .arg(config_file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found for 'Foo'"));
}

#[test]
fn invalid_json_log_config_is_fatal() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, "{{not valid json").unwrap();

    series_seek()
        .args(["--seriesname", "Foo", "--long", "a"])
        .arg("--log-config")
        .arg(config_file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is not valid json, cannot continue."));
}

#[test]
fn unreadable_log_config_is_an_error() {
    series_seek()
        .args(["--seriesname", "Foo", "--long", "a"])
        .args(["--log-config", "/nonexistent/logging.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read the logging config file"));
}

#[test]
fn missing_seriesname_is_a_usage_error() {
    series_seek()
        .args(["--long", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--seriesname"));
}

#[test]
fn missing_long_parameter_is_a_usage_error() {
    series_seek()
        .args(["--seriesname", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--long"));
}

#[test]
fn unknown_log_level_is_a_usage_error() {
    series_seek()
        .args(["--seriesname", "Foo", "--long", "a", "--log-level", "verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
