// tests/integration_tests/title_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use retitle::{Error, Substitutions, detect_title, normalize_title};

#[test]
fn test_title_with_institution_name() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let title = detect_title(
        &temp_dir.path().join("comunicat.txt"),
        &Substitutions::default(),
    )?;

    assert_eq!(title, "Exercitiu_al_ISU");
    Ok(())
}

#[test]
fn test_title_missing_divider_names_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    create_test_file(temp_dir.path(), "bad.txt", "Hello\n\nworld\n")?;
    let path = temp_dir.path().join("bad.txt");

    let err = detect_title(&path, &Substitutions::default()).unwrap_err();

    assert!(matches!(err, Error::NoTitle { .. }));
    assert!(
        err.to_string().contains("bad.txt"),
        "Error should name the article: {err}"
    );
    Ok(())
}

#[test]
fn test_normalization_without_substitutions() {
    let table = Substitutions::empty();

    assert_eq!(normalize_title("I.S.U. Cluj", &table), "I_S_U__Cluj");
    assert_eq!(normalize_title("Ăsta", &table), "sta");
}
