//! Integration tests for the input pipeline

use ats_scorer::error::AtsScorerError;
use ats_scorer::input::file_detector::{JOB_EXTENSIONS, RESUME_EXTENSIONS};
use ats_scorer::input::InputManager;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Data Scientist"));
    assert!(text.contains("Summary\n======="));
    assert!(text.contains("$250000"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Data Scientist"));
    assert!(text.contains("pandas"));
    assert!(text.contains("- Built predictive modeling pipelines"));
    // Markup is gone
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_job.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AtsScorerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(AtsScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_job_description_rejects_pdf() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_restricted(Path::new("tests/fixtures/job.pdf"), JOB_EXTENSIONS)
        .await;
    assert!(matches!(result, Err(AtsScorerError::UnsupportedFormat(_))));

    let text = manager
        .extract_restricted(Path::new("tests/fixtures/sample_resume.md"), RESUME_EXTENSIONS)
        .await
        .unwrap();
    assert!(text.contains("Jane Doe"));
}
