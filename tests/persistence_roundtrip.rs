//! Integration tests for import and persistence.
//!
//! Imports YAML documents, stores the library on disk through the file
//! blob store and reads it back with a fresh repository.

use tempfile::TempDir;

use decision_matrix::adapters::{
    example_document, ExampleKind, FileBlobStore, MatrixRepository, YamlMatrixImporter,
};
use decision_matrix::config::StorageConfig;
use decision_matrix::domain::analysis::WinnerAnalyzer;
use decision_matrix::domain::library::MatrixLibrary;
use decision_matrix::domain::matrix::MatrixEdit;
use decision_matrix::ports::{BlobStore, ImportError, MatrixImporter};

#[tokio::test]
async fn imported_matrices_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let importer = YamlMatrixImporter::new();

    let car = importer.import(&example_document(ExampleKind::Car)).unwrap();
    let job = importer.import(&example_document(ExampleKind::Job)).unwrap();
    let car = car
        .apply(&MatrixEdit::SetValue {
            option: "Honda Civic".to_string(),
            criterion: "Price".to_string(),
            value: 2,
        })
        .apply(&MatrixEdit::SetValue {
            option: "BMW 3 Series".to_string(),
            criterion: "Comfort".to_string(),
            value: 5,
        });
    let library = MatrixLibrary::empty().with_added(car.clone()).with_added(job);

    let repository = MatrixRepository::new(FileBlobStore::new(temp_dir.path()));
    repository.save_library(&library).await;

    let reopened = MatrixRepository::new(FileBlobStore::new(temp_dir.path()));
    let loaded = reopened.load_library().await;

    assert_eq!(loaded, library);
    assert_eq!(loaded.templates().len(), 1);
    assert_eq!(
        WinnerAnalyzer::analyze(loaded.get(&car.id()).unwrap()),
        WinnerAnalyzer::analyze(&car)
    );
}

#[tokio::test]
async fn empty_directory_yields_starter_library() {
    let temp_dir = TempDir::new().unwrap();
    let config = StorageConfig {
        data_dir: temp_dir.path().join("fresh"),
        ..StorageConfig::default()
    };

    let library = config.file_repository().load_library().await;

    assert_eq!(library, MatrixLibrary::starter());
}

#[tokio::test]
async fn newer_envelope_on_disk_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileBlobStore::new(temp_dir.path());
    store
        .set(
            "decision-matrices",
            r#"{"version":7,"matrices":[{"unknown":"shape"}],"timestamp":"2030-01-01T00:00:00Z"}"#,
        )
        .await
        .unwrap();

    let repository = MatrixRepository::new(store);

    assert!(repository.load().await.is_none());
    assert_eq!(repository.load_library().await, MatrixLibrary::starter());
}

#[tokio::test]
async fn storage_info_tracks_saved_size() {
    let temp_dir = TempDir::new().unwrap();
    let repository = MatrixRepository::new(FileBlobStore::new(temp_dir.path()));

    repository.save_library(&MatrixLibrary::starter()).await;
    let info = repository.storage_info().await;

    let on_disk = std::fs::metadata(temp_dir.path().join("decision-matrices.json"))
        .unwrap()
        .len() as usize;
    assert!(info.available);
    assert_eq!(info.used_bytes, on_disk);

    repository.clear().await;
    assert_eq!(repository.storage_info().await.used_bytes, 0);
}

#[test]
fn import_errors_are_reported_not_stored() {
    let importer = YamlMatrixImporter::new();
    let err = importer
        .validate("title: Broken\ncriteria:\n  - name: Price\n    weight: 9\noptions: [A]")
        .unwrap_err();

    assert_eq!(err, ImportError::InvalidCriterionWeight { index: 0 });
    assert_eq!(err.field(), "criteria[0].weight");
}
