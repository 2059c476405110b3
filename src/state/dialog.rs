use ob_forms::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
}

/// A modal message box. Dismissed with Enter, Esc or Space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Info, title: title.into(), message: message.into() }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Warning, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Error, title: title.into(), message: message.into() }
    }

    pub fn from_error(err: &FormError) -> Self {
        if err.is_warning() { Self::warning(err.title(), err.to_string()) } else { Self::error(err.title(), err.to_string()) }
    }
}
