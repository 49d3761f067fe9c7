// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_config_file(dir: &Path, content: &str) -> Result<()> {
    create_test_file(dir, retitle::core::config::CONFIG_FILE_NAME, content)
}

/// Regular file names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// A press-release folder: one article with front matter and three photos.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "comunicat.txt",
        "---\nsursa: ISU Cluj\n---\n\nExercițiu al Inspectoratului pentru Situații de Urgență\n--------------------\nAstăzi a avut loc un exercițiu.\n",
    )?;
    create_test_file(temp_dir.path(), "DSC_0042.jpg", "photo 42")?;
    create_test_file(temp_dir.path(), "DSC_0007.jpg", "photo 7")?;
    create_test_file(temp_dir.path(), "cover.jpg", "cover")?;
    create_test_file(temp_dir.path(), "raw/DSC_0001.jpg", "not picked up")?;

    Ok(temp_dir)
}
