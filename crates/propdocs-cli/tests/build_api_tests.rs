mod common;

use std::fs;
use std::path::PathBuf;

use common::{BADGE, Repo};
use propdocs_cli::CliError;
use propdocs_cli::commands::build_api::{BuildRequest, build_api};
use propdocs_cli::config::PropdocsConfig;
use regex::Regex;

fn config(repo: &Repo) -> PropdocsConfig {
    PropdocsConfig {
        root: repo.root().to_path_buf(),
        max_parallel: Some(2),
        ..PropdocsConfig::default()
    }
}

fn request(repo: &Repo, grep: Option<&str>) -> BuildRequest {
    BuildRequest {
        output_directory: repo.out(),
        component_directories: vec![PathBuf::from("src")],
        grep: grep.map(|pattern| Regex::new(pattern).unwrap()),
    }
}

#[tokio::test]
async fn test_writes_records_and_translations() {
    let repo = Repo::new();
    let summary = build_api(&config(&repo), &request(&repo, None), repo.root())
        .await
        .unwrap();

    assert_eq!(summary.written, vec!["Button", "Chip"]);
    assert_eq!(summary.skipped, vec!["Ripple"]);
    assert!(summary.pruned.is_empty());

    let button = repo.read_json("components/Button.json");
    assert_eq!(button["name"], "Button");
    assert_eq!(button["filename"], "/src/Button/Button.js");
    assert_eq!(button["usedInPages"][0], "/components/buttons");
    assert_eq!(button["styles"]["classNames"][0], "root");
    assert_eq!(button["styles"]["classNames"][1], "disabled");
    assert_eq!(button["styles"]["generatedClassNames"]["disabled"], "Mui-disabled");

    let translations = repo.read_json("translations/Chip/Chip.json");
    assert_eq!(
        translations["description"],
        "Chips represent complex entities in small blocks."
    );
    assert_eq!(translations["propSize"], "The size of the chip.");

    assert!(!repo.out().join("components/Ripple.json").exists());
}

#[tokio::test]
async fn test_output_is_stable_across_runs() {
    let repo = Repo::new();
    build_api(&config(&repo), &request(&repo, None), repo.root())
        .await
        .unwrap();
    let first = fs::read_to_string(repo.out().join("components/Button.json")).unwrap();

    build_api(&config(&repo), &request(&repo, None), repo.root())
        .await
        .unwrap();
    let second = fs::read_to_string(repo.out().join("components/Button.json")).unwrap();

    assert_eq!(first, second);
    assert!(first.ends_with("}\n"));
}

#[tokio::test]
async fn test_one_failure_fails_the_batch_without_writing() {
    let repo = Repo::new();
    repo.write("src/Badge/Badge.js", BADGE);
    fs::create_dir_all(repo.out().join("components")).unwrap();
    fs::write(repo.out().join("components/Old.json"), "{}").unwrap();

    let err = build_api(&config(&repo), &request(&repo, None), repo.root())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::ComponentsFailed {
            failed: 1,
            total: 4
        }
    ));
    assert!(!repo.out().join("components/Button.json").exists());
    assert!(!repo.out().join("translations/Button").exists());
}

#[tokio::test]
async fn test_grep_keeps_translations_of_filtered_components() {
    let repo = Repo::new();
    build_api(&config(&repo), &request(&repo, None), repo.root())
        .await
        .unwrap();
    fs::create_dir_all(repo.out().join("translations/Removed")).unwrap();

    let summary = build_api(&config(&repo), &request(&repo, Some("Chip")), repo.root())
        .await
        .unwrap();

    assert_eq!(summary.written, vec!["Chip"]);
    assert_eq!(summary.pruned, vec!["Removed"]);
    assert!(repo.out().join("translations/Button/Button.json").exists());
    assert!(!repo.out().join("components/Button.json").exists());
    assert!(repo.out().join("components/Chip.json").exists());
}

#[tokio::test]
async fn test_missing_component_directory() {
    let repo = Repo::new();
    let request = BuildRequest {
        component_directories: vec![PathBuf::from("nope")],
        ..request(&repo, None)
    };

    let err = build_api(&config(&repo), &request, repo.root())
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::FileNotFound(_)));
}
