use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input directory: {0}")]
    InvalidInputDir(PathBuf),
}

/// Read a markdown file and return its content
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML, creating parent directories as needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html).map_err(IoError::Io)
}

/// The output path for `input` inside `out_dir`: same stem, `.html` extension.
pub fn html_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".html");
    out_dir.join(name)
}

/// Recursively collect `*.md` files under `dir`, sorted
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidInputDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_scan_nested_directories() {
        // Given an input directory with nested structure
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "root.md", "# 見出し");
        let sub_dir = dir.path().join("章");
        fs::create_dir(&sub_dir).unwrap();
        fs::write(sub_dir.join("nested.md"), "本文").unwrap();

        // When scanning for files
        let files = scan_markdown_files(dir.path()).unwrap();

        // Then we find both root and nested files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "root.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.md"));
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let dir = TempDir::new().unwrap();
        create_test_file(&dir, "document.md", "# Markdown");
        create_test_file(&dir, "image.png", "fake image data");
        create_test_file(&dir, "notes.txt", "text");

        let files = scan_markdown_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "document.md");
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidInputDir(_))));
    }

    #[test]
    fn test_read_markdown() {
        let dir = TempDir::new().unwrap();
        let path = create_test_file(&dir, "test.md", "段落\n");
        assert_eq!(read_markdown(&path).unwrap(), "段落\n");

        let missing = read_markdown(&dir.path().join("missing.md"));
        assert!(matches!(missing, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_html_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out/sub/page.html");
        write_html(&out, "<p>　段落</p>\n").unwrap();
        assert_eq!(fs::read_to_string(out).unwrap(), "<p>　段落</p>\n");
    }

    #[test]
    fn test_html_path_for() {
        assert_eq!(
            html_path_for(Path::new("docs/intro.md"), Path::new("site")),
            PathBuf::from("site/intro.html")
        );
        assert_eq!(
            html_path_for(Path::new("v1.2.md"), Path::new("site")),
            PathBuf::from("site/v1.2.html")
        );
    }
}
