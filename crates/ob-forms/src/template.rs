//! Directory lister: enumerates fillable templates in a role directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FormError;

/// Extensions offered as templates, compared case-insensitively.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

/// A source document available for copying. Identity is its path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    /// File name including extension, as shown in the list
    pub name: String,
    pub path: PathBuf,
}

impl Template {
    pub fn new(path: PathBuf) -> Self {
        let name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
        Self { name, path }
    }

    /// File name without its final extension.
    pub fn base(&self) -> &str {
        split_extension(&self.name).0
    }

    /// Final extension including the leading dot, original case preserved.
    pub fn extension(&self) -> &str {
        split_extension(&self.name).1
    }
}

/// Split "Intake.Form.pdf" into ("Intake.Form", ".pdf").
/// Dotfiles like ".pdf" have no extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEMPLATE_EXTENSIONS.iter().any(|t| t.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// List templates in `dir`, sorted by lowercase file name.
pub fn list_templates(dir: &Path) -> Result<Vec<Template>, FormError> {
    if !dir.is_dir() {
        return Err(FormError::DirectoryUnavailable(dir.to_path_buf()));
    }

    let unreadable = |e: std::io::Error| FormError::DirectoryUnreadable { path: dir.to_path_buf(), reason: e.to_string() };

    let mut templates = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() && is_template_file(&path) {
            templates.push(Template::new(path));
        }
    }

    templates.sort_by_cached_key(|t| t.name.to_lowercase());
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn lists_only_supported_extensions_sorted_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "policy.DOCX");
        touch(tmp.path(), "Intake.pdf");
        touch(tmp.path(), "allergies.doc");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "README");
        fs::create_dir(tmp.path().join("Filled_Forms")).unwrap();
        fs::create_dir(tmp.path().join("folder.pdf")).unwrap();

        let names: Vec<String> = list_templates(tmp.path()).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["allergies.doc", "Intake.pdf", "policy.DOCX"]);
    }

    #[test]
    fn empty_directory_is_not_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(list_templates(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = list_templates(&missing).unwrap_err();
        assert!(matches!(err, FormError::DirectoryUnavailable(p) if p == missing));
    }

    #[test]
    fn base_and_extension_split_on_last_dot() {
        let t = Template::new(PathBuf::from("/forms/Medical.Release.PDF"));
        assert_eq!(t.base(), "Medical.Release");
        assert_eq!(t.extension(), ".PDF");

        let bare = Template::new(PathBuf::from("/forms/.pdf"));
        assert_eq!(bare.base(), ".pdf");
        assert_eq!(bare.extension(), "");
    }
}
