//! Tests for CatalogService

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use dockwrap::application::services::CatalogService;
use dockwrap::application::ApplicationError;
use dockwrap::domain::DomainError;

fn debian() -> serde_json::Value {
    json!({
        "name": "Debian",
        "supported_versions": [
            {"version": "12 Bookworm", "release_date": "10/06/23", "end_date": "10/06/28"}
        ]
    })
}

#[test]
fn given_new_catalog_when_list_then_seeded_in_order() {
    let catalog = CatalogService::new();

    let names: Vec<_> = catalog.list().iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["Ubuntu", "Kali Linux", "CentOS"]);
}

#[test]
fn given_valid_record_when_add_then_appended_last() {
    // Arrange
    let mut catalog = CatalogService::new();

    // Act
    catalog.add(debian()).unwrap();

    // Assert
    assert_eq!(catalog.list().len(), 4);
    assert_eq!(catalog.list()[3].name, "Debian");
}

#[test]
fn given_record_without_name_when_add_then_rejected_and_catalog_unchanged() {
    let mut catalog = CatalogService::new();

    let err = catalog
        .add(json!({"supported_versions": []}))
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::InvalidRelease("Missing required fields: name or supported_versions".into())
    );
    assert_eq!(catalog.list().len(), 3);
}

#[test]
fn given_lowercase_name_when_describe_then_matches_case_insensitively() {
    let catalog = CatalogService::new();

    let summary = catalog.describe("kali linux").unwrap();

    assert_eq!(
        summary,
        "Distro Name: Kali Linux, Supported Versions: Kali 2024.2, Kali 2023.4, \
         End Dates: 05/06/29, 05/12/26"
    );
}

#[test]
fn given_unknown_distro_when_describe_then_not_found_with_capitalized_name() {
    let catalog = CatalogService::new();

    let err = catalog.describe("arch").unwrap_err();

    assert_eq!(err, DomainError::ReleaseNotFound("Arch".into()));
    assert_eq!(err.to_string(), "Linux distribution 'Arch' not found");
}

#[test]
fn given_added_record_when_describe_then_found() {
    let mut catalog = CatalogService::with_releases(vec![]);
    catalog.add(debian()).unwrap();

    assert_eq!(
        catalog.describe("DEBIAN").unwrap(),
        "Distro Name: Debian, Supported Versions: 12 Bookworm, End Dates: 10/06/28"
    );
}

#[test]
fn given_json_array_file_when_load_file_then_records_appended() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("releases.json");
    fs::write(&path, serde_json::to_string(&json!([debian()])).unwrap()).unwrap();
    let mut catalog = CatalogService::new();

    // Act
    let added = catalog.load_file(&path).unwrap();

    // Assert
    assert_eq!(added, 1);
    assert!(catalog.find("debian").is_some());
}

#[test]
fn given_missing_file_when_load_file_then_operation_failed() {
    let temp = TempDir::new().unwrap();
    let mut catalog = CatalogService::new();

    let result = catalog.load_file(&temp.path().join("missing.json"));

    match result {
        Err(ApplicationError::OperationFailed { context, .. }) => {
            assert!(context.starts_with("read catalog"))
        }
        other => panic!("expected OperationFailed, got {other:?}"),
    }
}

#[test]
fn given_invalid_record_in_file_when_load_file_then_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("releases.json");
    fs::write(&path, r#"[{"name": "Fedora"}]"#).unwrap();
    let mut catalog = CatalogService::new();

    let result = catalog.load_file(&path);

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::InvalidRelease(_)))
    ));
}
