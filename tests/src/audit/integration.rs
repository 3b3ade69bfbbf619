#![cfg(test)]
use std::path::Path;

use nsprune_common::config::{Config, Credentials};
use nsprune_core::audit::{AuditService, RunError};
use nsprune_protocols::NitroClient;
use nsprune_protocols::nitro::{LOGIN_PATH, LOGOUT_PATH, RUNNING_CONFIG_PATH};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RUNNING_CONFIG: &str = "\
#NS13.1 Build 52.19
set ns config -IPAddress 10.10.10.5 -netmask 255.255.255.0
add server 10.0.0.1 10.0.0.1
add server 10.0.0.2 10.0.0.2
add server 10.0.0.3 10.0.0.3
add server app01 10.0.0.4
add server 10.0.0.20 10.0.0.20 -comment \"decommissioned\"
add service svc-web 10.0.0.1 HTTP 80 -gslb NONE -maxClient 0
add serviceGroup sg-api HTTP -maxClient 0
add lb vserver vs-web HTTP 10.0.1.1 80
bind servicegroup sg-api 10.0.0.2 8080
bind servicegroup sg-api app01 8080
bind lb vserver vs-web svc-web
";

fn config(server: &MockServer, dir: &Path) -> Config {
    let mut cfg = Config::new(server.address().to_string(), Credentials::new("nsroot", "nsroot"));
    cfg.output_dir = dir.to_path_buf();
    cfg
}

async fn mount_login(server: &MockServer, status: u16) {
    let body = if status < 300 {
        json!({ "errorcode": 0, "message": "Done", "severity": "NONE", "sessionid": "##SESSION" })
    } else {
        json!({ "errorcode": 354, "message": "Invalid username or password", "severity": "ERROR" })
    };
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_running_config(server: &MockServer, text: &str) {
    Mock::given(method("GET"))
        .and(path(RUNNING_CONFIG_PATH))
        .and(header("Cookie", "NITRO_AUTH_TOKEN=##SESSION"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errorcode": 0,
            "message": "Done",
            "severity": "NONE",
            "nsrunningconfig": { "response": text }
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_logout(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(LOGOUT_PATH))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn run(cfg: &Config) -> Result<nsprune_core::audit::AuditReport, RunError> {
    let client = NitroClient::new(cfg).unwrap();
    AuditService::new(Box::new(client)).run(cfg).await
}

fn files_in(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

/// Full run: only unreferenced IP-named servers end up in the script.
#[tokio::test]
async fn audit_writes_sorted_removal_script() {
    let server = MockServer::start().await;
    mount_login(&server, 201).await;
    mount_running_config(&server, RUNNING_CONFIG).await;
    mount_logout(&server, 201, 1).await;
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&server, dir.path());

    let report = run(&cfg).await.expect("audit failed");

    assert_eq!(report.servers, 4);
    assert_eq!(report.services, 1);
    assert_eq!(report.group_members, 1);

    let expected_name = format!("rmserver_{}.txt", cfg.device.replace('.', "_"));
    assert_eq!(report.artifact, dir.path().join(expected_name));
    assert_eq!(
        std::fs::read_to_string(&report.artifact).unwrap(),
        "rm server 10.0.0.20\nrm server 10.0.0.3\n"
    );
}

#[tokio::test]
async fn audit_with_nothing_stale_writes_empty_script() {
    let server = MockServer::start().await;
    mount_login(&server, 201).await;
    mount_running_config(
        &server,
        "add server 10.0.0.1 10.0.0.1\nbind servicegroup sg1 10.0.0.1 80\n",
    )
    .await;
    mount_logout(&server, 201, 1).await;
    let dir = tempfile::tempdir().unwrap();

    let report = run(&config(&server, dir.path())).await.unwrap();

    assert!(report.stale.is_empty());
    assert_eq!(std::fs::read_to_string(&report.artifact).unwrap(), "");
}

#[tokio::test]
async fn rejected_login_leaves_no_artifact() {
    let server = MockServer::start().await;
    mount_login(&server, 401).await;
    mount_logout(&server, 201, 0).await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(&config(&server, dir.path())).await.unwrap_err();

    assert!(matches!(err, RunError::Authentication { .. }));
    assert_eq!(files_in(dir.path()), 0);
}

#[tokio::test]
async fn failed_fetch_leaves_no_artifact() {
    let server = MockServer::start().await;
    mount_login(&server, 201).await;
    Mock::given(method("GET"))
        .and(path(RUNNING_CONFIG_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errorcode": 1, "message": "Internal error", "severity": "ERROR"
        })))
        .mount(&server)
        .await;
    mount_logout(&server, 201, 1).await;
    let dir = tempfile::tempdir().unwrap();

    let err = run(&config(&server, dir.path())).await.unwrap_err();

    assert!(matches!(err, RunError::Fetch { .. }));
    assert_eq!(files_in(dir.path()), 0);
}

#[tokio::test]
async fn failed_logout_does_not_fail_the_run() {
    let server = MockServer::start().await;
    mount_login(&server, 201).await;
    mount_running_config(&server, "add server 10.0.0.9 10.0.0.9\n").await;
    mount_logout(&server, 500, 1).await;
    let dir = tempfile::tempdir().unwrap();

    let report = run(&config(&server, dir.path())).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&report.artifact).unwrap(),
        "rm server 10.0.0.9\n"
    );
}

#[tokio::test]
async fn unreachable_appliance_is_an_authentication_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = Config::new("127.0.0.1:1", Credentials::new("nsroot", "nsroot"));
    cfg.output_dir = dir.path().to_path_buf();

    let err = run(&cfg).await.unwrap_err();

    assert!(matches!(err, RunError::Authentication { .. }));
    assert_eq!(files_in(dir.path()), 0);
}
