#[cfg(test)]
mod cli_tests {
    use assert_cmd::prelude::*;
    use filez::Configuration;
    use predicates::prelude::*;
    use serde_json::json;
    use std::{path::Path, process::Command};
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    /// The `filez` binary isolated from the caller's environment.
    fn filez(config_dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("filez").unwrap();
        cmd.env_remove("FILEZ_CONFIG")
            .env_remove("FILEZ_SUBJECT")
            .env_remove("RUST_LOG")
            .env("FILEZ_CONFIG_DIR", config_dir);
        cmd
    }

    #[test]
    fn test_cli_help_output() {
        let directory = tempfile::tempdir().unwrap();
        let assert_result = filez(directory.path()).arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Commands:"));
        for group in ["config", "user", "team", "file", "auth"] {
            assert!(help_output.contains(group), "missing {}", group);
        }
        assert!(help_output.contains("--subject"));
        assert!(help_output.contains("-V, --version"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        let directory = tempfile::tempdir().unwrap();
        let cases = vec![
            ("config", vec!["path", "show", "set"]),
            ("user", vec!["create", "info", "list"]),
            ("team", vec!["list", "info", "users"]),
            (
                "file",
                vec![
                    "list", "info", "delete", "mkdir", "copy", "move", "upload", "rename",
                    "history", "preview", "download",
                ],
            ),
            ("auth", vec!["grant", "revoke", "list"]),
        ];

        for (group, subcommands) in cases {
            let assert_result = filez(directory.path())
                .arg(group)
                .arg("--help")
                .assert()
                .success();
            let output = assert_result.get_output();
            let help_output = String::from_utf8_lossy(&output.stdout);

            for subcommand in subcommands {
                assert!(
                    help_output.contains(subcommand),
                    "'{}' help does not list '{}'",
                    group,
                    subcommand
                );
            }
        }
    }

    #[test]
    fn test_invalid_path_type_is_rejected_by_parser() {
        let directory = tempfile::tempdir().unwrap();
        filez(directory.path())
            .args(["file", "mkdir", "--path", "/a", "--path-type", "shared"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("shared"));
    }

    #[test]
    fn test_missing_subject_is_a_usage_error() {
        let directory = tempfile::tempdir().unwrap();
        filez(directory.path())
            .args(["team", "list"])
            .assert()
            .code(64)
            .stderr(predicate::str::contains("--subject"))
            .stderr(predicate::str::contains("[Command line usage error]"));
    }

    #[test]
    fn test_missing_configuration_is_a_config_error() {
        let directory = tempfile::tempdir().unwrap();
        filez(directory.path())
            .args(["--subject", "admin", "team", "list"])
            .assert()
            .code(78)
            .stderr(predicate::str::contains("[Configuration error]"));
    }

    #[test]
    fn test_config_set_then_show_masks_secret() {
        let directory = tempfile::tempdir().unwrap();
        let config_file = directory.path().join("config.yml");

        filez(directory.path())
            .args(["config", "set", "--app-key", "key", "--app-secret", "secret"])
            .args(["--host", "filez.example.com:3333"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.yml"));

        let saved = Configuration::load_from_file(&config_file).unwrap();
        assert_eq!(saved.app_secret(), "secret");
        assert_eq!(saved.version(), "v2");

        filez(directory.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("filez.example.com:3333"))
            .stdout(predicate::str::contains("********"))
            .stdout(predicate::str::contains("app_secret: secret").not());
    }

    #[test]
    fn test_config_path_honours_config_dir() {
        let directory = tempfile::tempdir().unwrap();
        let expected = directory.path().join("config.yml");
        filez(directory.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.display().to_string()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_team_commands_against_mock_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "abc"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/api/team"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"teams": [{"tid": 2}]})),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/api/team/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("team 99 not found"))
            .mount(&mock_server)
            .await;

        let directory = tempfile::tempdir().unwrap();
        Configuration::new("key", "secret", mock_server.address().to_string())
            .unwrap()
            .save(&directory.path().join("config.yml"))
            .unwrap();

        let config_dir = directory.path().to_path_buf();
        let (listed, missing) = tokio::task::spawn_blocking(move || {
            let listed = filez(&config_dir)
                .args(["--subject", "admin", "team", "list"])
                .output()
                .unwrap();
            let missing = filez(&config_dir)
                .args(["--subject", "admin", "team", "info", "--tid", "99"])
                .output()
                .unwrap();
            (listed, missing)
        })
        .await
        .unwrap();

        assert_eq!(listed.status.code(), Some(0));
        assert_eq!(
            String::from_utf8_lossy(&listed.stdout).trim(),
            r#"{"teams":[{"tid":2}]}"#
        );

        assert_eq!(missing.status.code(), Some(102));
        assert!(String::from_utf8_lossy(&missing.stderr).contains("team 99 not found"));
    }
}
