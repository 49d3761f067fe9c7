// tests/integration_tests/locate_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use retitle::{Config, Error, locate_article};

#[test]
fn test_locate_unique_article() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = Config::with_defaults()?;

    let article = locate_article(temp_dir.path(), &config.article_pattern)?;

    assert_eq!(article, temp_dir.path().join("comunicat.txt"));
    Ok(())
}

#[test]
fn test_locate_rejects_empty_and_ambiguous_directories() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config = Config::with_defaults()?;

    let none = locate_article(temp_dir.path(), &config.article_pattern);
    assert!(
        matches!(none, Err(Error::NoUniqueMatch { found: 0, .. })),
        "Empty directory has no article"
    );

    create_test_file(temp_dir.path(), "one.txt", "One\n-----\n")?;
    create_test_file(temp_dir.path(), "two.txt", "Two\n-----\n")?;
    let many = locate_article(temp_dir.path(), &config.article_pattern);
    assert!(
        matches!(many, Err(Error::NoUniqueMatch { found: 2, .. })),
        "Two articles are ambiguous"
    );
    Ok(())
}
