use chrono::NaiveDateTime;

use crate::role::Role;
use crate::template::Template;

/// Subdirectory of the role directory that receives issued copies.
pub const FILLED_FORMS_SUBDIR: &str = "Filled_Forms";

/// Second-granularity stamp embedded in copy names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Replace every character outside `[A-Za-z0-9 _-]` with `_`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-') { c } else { '_' })
        .collect()
}

/// `{base}_{role}_{sanitizedName}_{timestamp}{ext}`
pub fn copy_file_name(template: &Template, role: Role, user_name: &str, at: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}_{}{}",
        template.base(),
        role,
        sanitize_name(user_name),
        at.format(TIMESTAMP_FORMAT),
        template.extension()
    )
}
