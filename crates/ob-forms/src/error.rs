use std::fmt;
use std::path::PathBuf;

/// Which half of the name form failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    pub fn label(self) -> &'static str {
        match self {
            NameField::First => "First Name",
            NameField::Last => "Last Name",
        }
    }
}

/// Typed error for every kiosk operation.
///
/// None of these are fatal: the UI shows them in a dialog and the session
/// stays usable.
#[derive(Debug)]
pub enum FormError {
    /// A required name field was empty after trimming
    Validation { field: NameField },
    /// Role text was neither "Parent" nor "Staff"
    InvalidRole(String),
    /// An operation ran before the session reached the state it needs
    SessionIncomplete(&'static str),
    /// The active forms directory is missing or not a directory
    DirectoryUnavailable(PathBuf),
    /// The directory exists but could not be iterated
    DirectoryUnreadable { path: PathBuf, reason: String },
    /// The template was not part of the last listing
    NotListed(PathBuf),
    /// The original template vanished before it could be copied
    SourceNotFound(PathBuf),
    /// I/O failure while creating the copy
    CopyFailed { path: PathBuf, reason: String },
    /// The platform opener could not be run or reported failure
    LaunchFailed { path: PathBuf, reason: String },
}

impl FormError {
    /// Short dialog title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::Validation { field: NameField::First } => "First Name Required",
            FormError::Validation { field: NameField::Last } => "Last Name Required",
            FormError::InvalidRole(_) => "Error",
            FormError::SessionIncomplete(_) => "Error",
            FormError::DirectoryUnavailable(_) => "Forms Directory Not Found",
            FormError::DirectoryUnreadable { .. } => "Error Reading Forms",
            FormError::NotListed(_) => "Error",
            FormError::SourceNotFound(_) => "Error",
            FormError::CopyFailed { .. } => "Error Copying Form",
            FormError::LaunchFailed { .. } => "Error Opening Form",
        }
    }

    /// Whether the UI should present this as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, FormError::DirectoryUnavailable(_))
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Validation { field } => write!(f, "Please enter {}.", field.label()),
            FormError::InvalidRole(role) => write!(f, "Invalid user type selected: '{}'", role),
            FormError::SessionIncomplete(what) => write!(f, "{}. Please restart the selection process.", what),
            FormError::DirectoryUnavailable(path) => write!(f, "Forms directory not found: '{}'", path.display()),
            FormError::DirectoryUnreadable { path, reason } => {
                write!(f, "Error reading forms in '{}': {}", path.display(), reason)
            }
            FormError::NotListed(path) => write!(f, "Form is not in the current list: {}", path.display()),
            FormError::SourceNotFound(path) => write!(f, "Original form not found: {}", path.display()),
            FormError::CopyFailed { path, reason } => {
                write!(f, "Could not copy form to '{}': {}", path.display(), reason)
            }
            FormError::LaunchFailed { path, reason } => {
                let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_else(|| path.to_string_lossy());
                write!(f, "Could not open file '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for FormError {}
