// tests/integration_tests/end_to_end_test.rs
use super::common::{create_test_file, file_names, setup_test_directory};
use anyhow::Result;
use retitle::Args;

fn args_for(dir: &std::path::Path, dry_run: bool) -> Args {
    Args {
        directory: dir.to_path_buf(),
        config: None,
        dry_run,
        verbose: false,
    }
}

#[test]
fn test_article_and_single_image() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    create_test_file(
        temp_dir.path(),
        "article.txt",
        "My Title\n-----\nSome text.\n",
    )?;
    create_test_file(temp_dir.path(), "img1.jpg", "jpeg")?;

    retitle::run(args_for(temp_dir.path(), false))?;

    assert_eq!(
        file_names(temp_dir.path())?,
        vec!["My_Title.txt", "My_Title_1.jpg"]
    );
    Ok(())
}

#[test]
fn test_press_release_folder() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    retitle::run(args_for(temp_dir.path(), false))?;

    assert_eq!(
        file_names(temp_dir.path())?,
        vec![
            "Exercitiu_al_ISU.txt",
            "Exercitiu_al_ISU_1.jpg",
            "Exercitiu_al_ISU_2.jpg",
            "Exercitiu_al_ISU_3.jpg",
        ]
    );
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("Exercitiu_al_ISU_3.jpg"))?,
        "cover"
    );
    assert!(temp_dir.path().join("raw/DSC_0001.jpg").exists());
    Ok(())
}

#[test]
fn test_dry_run_changes_nothing() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let before = file_names(temp_dir.path())?;

    retitle::run(args_for(temp_dir.path(), true))?;

    assert_eq!(file_names(temp_dir.path())?, before);
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    retitle::run(args_for(temp_dir.path(), false))?;
    let after_first = file_names(temp_dir.path())?;
    retitle::run(args_for(temp_dir.path(), false))?;

    assert_eq!(file_names(temp_dir.path())?, after_first);
    Ok(())
}
