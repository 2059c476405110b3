//! Session form tracker.
//!
//! Owns the per-session bookkeeping: which role and name are active, which
//! templates have been opened, the copy issued for each template, and the
//! one-shot "all forms processed" flag. Everything is discarded when the user
//! backs out to role selection.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::clock::Clock;
use crate::config::KioskConfig;
use crate::error::{FormError, NameField};
use crate::launcher::Launcher;
use crate::naming::{FILLED_FORMS_SUBDIR, copy_file_name};
use crate::role::Role;
use crate::template::{Template, list_templates};

/// Coarse position in the kiosk flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NoRole,
    RoleSelected,
    NameEntered,
    Browsing,
    /// A form was just handed to the launcher; the next listing returns to `Browsing`
    FormOpened,
}

/// Whether an open produced a fresh copy or reused the recorded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenKind {
    New,
    Reopened,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOutcome {
    pub copy_path: PathBuf,
    pub kind: OpenKind,
    /// Set on the single open that completed the listing for this session
    pub all_processed: bool,
}

/// Read-only view of the session for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub role: Option<Role>,
    pub active_dir: Option<PathBuf>,
    pub user_name: Option<String>,
    pub opened: usize,
    pub listed: usize,
    pub completion_notified: bool,
}

pub struct FormTracker {
    config: KioskConfig,
    launcher: Box<dyn Launcher>,
    clock: Box<dyn Clock>,
    role: Option<Role>,
    active_dir: Option<PathBuf>,
    user_name: Option<String>,
    /// Last successful listing, `None` until listed for this session
    listed: Option<Vec<Template>>,
    issued: HashMap<PathBuf, PathBuf>,
    opened: HashSet<PathBuf>,
    /// Copy handed to the launcher since the last listing
    last_opened: Option<PathBuf>,
    completion_notified: bool,
}

impl FormTracker {
    pub fn new(config: KioskConfig, launcher: Box<dyn Launcher>, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            launcher,
            clock,
            role: None,
            active_dir: None,
            user_name: None,
            listed: None,
            issued: HashMap::new(),
            opened: HashSet::new(),
            last_opened: None,
            completion_notified: false,
        }
    }

    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn active_dir(&self) -> Option<&Path> {
        self.active_dir.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Templates from the last listing; empty before the first listing.
    pub fn templates(&self) -> &[Template] {
        self.listed.as_deref().unwrap_or(&[])
    }

    pub fn is_opened(&self, template: &Template) -> bool {
        self.opened.contains(&template.path)
    }

    pub fn opened_count(&self) -> usize {
        self.opened.len()
    }

    pub fn completion_notified(&self) -> bool {
        self.completion_notified
    }

    /// Copy recorded for `template` in this session, if any.
    pub fn issued_copy(&self, template: &Template) -> Option<&Path> {
        self.issued.get(&template.path).map(PathBuf::as_path)
    }

    pub fn stage(&self) -> Stage {
        match (self.role, &self.user_name, &self.listed) {
            (None, _, _) => Stage::NoRole,
            (Some(_), None, _) => Stage::RoleSelected,
            (Some(_), Some(_), None) => Stage::NameEntered,
            (Some(_), Some(_), Some(_)) if self.last_opened.is_some() => Stage::FormOpened,
            (Some(_), Some(_), Some(_)) => Stage::Browsing,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            role: self.role,
            active_dir: self.active_dir.clone(),
            user_name: self.user_name.clone(),
            opened: self.opened.len(),
            listed: self.templates().len(),
            completion_notified: self.completion_notified,
        }
    }

    /// Start a fresh session for `role`.
    pub fn select_role(&mut self, role: Role) {
        let dir = self.config.role_dir(role).path.clone();
        tracing::info!(%role, dir = %dir.display(), "role selected");
        self.reset_session();
        self.role = Some(role);
        self.active_dir = Some(dir);
    }

    /// Like [`select_role`](Self::select_role) for free-text input.
    pub fn select_role_named(&mut self, role: &str) -> Result<Role, FormError> {
        let role: Role = role.parse()?;
        self.select_role(role);
        Ok(role)
    }

    /// Drop all session state including the role.
    pub fn back_to_roles(&mut self) {
        self.reset_session();
        self.role = None;
        self.active_dir = None;
    }

    fn reset_session(&mut self) {
        self.user_name = None;
        self.listed = None;
        self.issued.clear();
        self.opened.clear();
        self.last_opened = None;
        self.completion_notified = false;
    }

    pub fn submit_name(&mut self, first: &str, last: &str) -> Result<&str, FormError> {
        if self.role.is_none() {
            return Err(FormError::SessionIncomplete("User type not selected"));
        }
        let first = first.trim();
        let last = last.trim();
        if first.is_empty() {
            return Err(FormError::Validation { field: NameField::First });
        }
        if last.is_empty() {
            return Err(FormError::Validation { field: NameField::Last });
        }

        let name = self.user_name.insert(format!("{} {}", first, last));
        tracing::info!(user = %name, "name submitted");
        Ok(name.as_str())
    }

    /// Re-read the active directory. On failure the listing becomes empty.
    pub fn list_templates(&mut self) -> Result<&[Template], FormError> {
        let Some(dir) = self.active_dir.as_deref() else {
            return Err(FormError::SessionIncomplete("Forms directory not set"));
        };

        self.last_opened = None;
        let templates = match list_templates(dir) {
            Ok(templates) => templates,
            Err(e) => {
                tracing::warn!("listing failed: {}", e);
                self.listed = Some(Vec::new());
                self.opened.clear();
                return Err(e);
            }
        };

        // Opened entries must stay a subset of what is listed.
        let present: HashSet<&PathBuf> = templates.iter().map(|t| &t.path).collect();
        self.opened.retain(|p| present.contains(p));

        tracing::debug!(count = templates.len(), dir = %dir.display(), "listed templates");
        let listed = self.listed.insert(templates);
        Ok(listed.as_slice())
    }

    /// Issue (or reuse) the user's copy of `template` and open it.
    pub fn open_template(&mut self, template: &Template) -> Result<OpenOutcome, FormError> {
        let (Some(role), Some(user_name)) = (self.role, self.user_name.as_deref()) else {
            return Err(FormError::SessionIncomplete("User name not set"));
        };
        let Some(dir) = self.active_dir.as_deref().filter(|d| d.is_dir()) else {
            let dir = self.active_dir.clone().unwrap_or_default();
            return Err(FormError::DirectoryUnavailable(dir));
        };
        if !self.templates().iter().any(|t| t.path == template.path) {
            return Err(FormError::NotListed(template.path.clone()));
        }

        let filled_dir = dir.join(FILLED_FORMS_SUBDIR);
        let target = filled_dir.join(copy_file_name(template, role, user_name, self.clock.now()));

        let reusable = match self.issued.get(&template.path) {
            Some(existing) if *existing == target && existing.exists() => true,
            Some(existing) => {
                tracing::warn!(
                    "recorded copy {} for '{}' is stale; creating a new copy",
                    existing.display(),
                    template.name
                );
                false
            }
            None => false,
        };

        let kind = if reusable {
            tracing::info!(user = %user_name, path = %target.display(), "reopening existing copy");
            OpenKind::Reopened
        } else {
            copy_template(&template.path, &filled_dir, &target)?;
            tracing::info!(user = %user_name, path = %target.display(), "copied new form");
            self.issued.insert(template.path.clone(), target.clone());
            OpenKind::New
        };

        if let Err(e) = self.launcher.open(&target) {
            tracing::error!("{}", e);
            return Err(e);
        }

        self.opened.insert(template.path.clone());
        self.last_opened = Some(target.clone());

        let listed = self.templates().len();
        let all_processed = !self.completion_notified && listed > 0 && self.opened.len() == listed;
        if all_processed {
            self.completion_notified = true;
            tracing::info!(user = %user_name, count = listed, "all forms processed");
        }

        Ok(OpenOutcome { copy_path: target, kind, all_processed })
    }
}

/// Copy bytes, permissions and modification time of `source` to `target`.
fn copy_template(source: &Path, filled_dir: &Path, target: &Path) -> Result<(), FormError> {
    let copy_failed = |e: io::Error| FormError::CopyFailed { path: target.to_path_buf(), reason: e.to_string() };

    let meta = match fs::metadata(source) {
        Ok(meta) if meta.is_file() => meta,
        Ok(_) => return Err(FormError::SourceNotFound(source.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(FormError::SourceNotFound(source.to_path_buf())),
        Err(e) => return Err(copy_failed(e)),
    };

    fs::create_dir_all(filled_dir).map_err(copy_failed)?;
    fs::copy(source, target).map_err(copy_failed)?;

    // Modification time is best effort; the copy itself already succeeded.
    if let Ok(modified) = meta.modified()
        && let Ok(file) = fs::File::options().write(true).open(target)
    {
        let _ = file.set_modified(modified);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::launcher::RecordingLauncher;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::rc::Rc;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
        launcher: Rc<RecordingLauncher>,
        clock: Rc<FixedClock>,
        tracker: FormTracker,
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn fixture(files: &[&str]) -> Fixture {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), format!("template {}", name)).unwrap();
        }
        let launcher = Rc::new(RecordingLauncher::new());
        let clock = Rc::new(FixedClock::new(noon()));
        let config = KioskConfig::single_dir("Test", dir.path());
        let tracker = FormTracker::new(config, Box::new(launcher.clone()), Box::new(clock.clone()));
        Fixture { dir, launcher, clock, tracker }
    }

    fn browsing(files: &[&str], role: Role) -> Fixture {
        let mut fx = fixture(files);
        fx.tracker.select_role(role);
        fx.tracker.submit_name("Jane", "Doe").unwrap();
        fx.tracker.list_templates().unwrap();
        fx
    }

    fn filled(fx: &Fixture) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(fx.dir.path().join(FILLED_FORMS_SUBDIR))
            .map(|rd| rd.map(|e| e.unwrap().file_name().to_string_lossy().to_string()).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    #[test]
    fn stage_follows_the_flow() {
        let mut fx = fixture(&["Intake.pdf"]);
        assert_eq!(fx.tracker.stage(), Stage::NoRole);
        fx.tracker.select_role(Role::Parent);
        assert_eq!(fx.tracker.stage(), Stage::RoleSelected);
        fx.tracker.submit_name("Jane", "Doe").unwrap();
        assert_eq!(fx.tracker.stage(), Stage::NameEntered);
        fx.tracker.list_templates().unwrap();
        assert_eq!(fx.tracker.stage(), Stage::Browsing);
        fx.tracker.back_to_roles();
        assert_eq!(fx.tracker.stage(), Stage::NoRole);
        assert_eq!(fx.tracker.user_name(), None);
        assert!(fx.tracker.templates().is_empty());
    }

    #[test]
    fn submit_name_trims_and_joins() {
        let mut fx = fixture(&[]);
        fx.tracker.select_role(Role::Staff);
        assert_eq!(fx.tracker.submit_name("  Jane ", "\tDoe\n").unwrap(), "Jane Doe");
        assert_eq!(fx.tracker.user_name(), Some("Jane Doe"));
    }

    #[test]
    fn whitespace_name_is_rejected_without_state_change() {
        let mut fx = fixture(&[]);
        fx.tracker.select_role(Role::Staff);

        let err = fx.tracker.submit_name(" ", "Doe").unwrap_err();
        assert!(matches!(err, FormError::Validation { field: NameField::First }));
        let err = fx.tracker.submit_name("Jane", "   ").unwrap_err();
        assert!(matches!(err, FormError::Validation { field: NameField::Last }));
        assert_eq!(fx.tracker.user_name(), None);
        assert_eq!(fx.tracker.stage(), Stage::RoleSelected);
    }

    #[test]
    fn submit_name_needs_a_role() {
        let mut fx = fixture(&[]);
        assert!(matches!(fx.tracker.submit_name("Jane", "Doe"), Err(FormError::SessionIncomplete(_))));
    }

    #[test]
    fn invalid_role_name_leaves_session_alone() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let err = fx.tracker.select_role_named("Visitor").unwrap_err();
        assert!(matches!(err, FormError::InvalidRole(_)));
        assert_eq!(fx.tracker.role(), Some(Role::Parent));
        assert_eq!(fx.tracker.user_name(), Some("Jane Doe"));

        assert_eq!(fx.tracker.select_role_named("staff").unwrap(), Role::Staff);
        assert_eq!(fx.tracker.user_name(), None);
    }

    #[test]
    fn staff_example_creates_two_copies_and_completes() {
        let mut fx = browsing(&["Intake.pdf", "Policy.docx"], Role::Staff);
        let templates = fx.tracker.templates().to_vec();
        assert_eq!(templates.len(), 2);

        let first = fx.tracker.open_template(&templates[0]).unwrap();
        assert_eq!(first.kind, OpenKind::New);
        assert!(!first.all_processed);
        assert!(fx.tracker.is_opened(&templates[0]));

        let second = fx.tracker.open_template(&templates[1]).unwrap();
        assert_eq!(second.kind, OpenKind::New);
        assert!(second.all_processed);
        assert!(fx.tracker.completion_notified());

        assert_eq!(
            filled(&fx),
            vec!["Intake_Staff_Jane Doe_20240101_120000.pdf", "Policy_Staff_Jane Doe_20240101_120000.docx"]
        );
        assert_eq!(fx.launcher.opened(), vec![first.copy_path.clone(), second.copy_path.clone()]);
        assert_eq!(fs::read_to_string(&first.copy_path).unwrap(), "template Intake.pdf");
    }

    #[test]
    fn same_second_reopen_reuses_the_copy() {
        let mut fx = browsing(&["Intake.pdf", "Policy.docx"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();

        let first = fx.tracker.open_template(&intake).unwrap();
        let again = fx.tracker.open_template(&intake).unwrap();
        assert_eq!(again.kind, OpenKind::Reopened);
        assert_eq!(again.copy_path, first.copy_path);
        assert_eq!(filled(&fx).len(), 1);
        assert_eq!(fx.launcher.opened().len(), 2);
        assert_eq!(fx.tracker.opened_count(), 1);
    }

    #[test]
    fn later_reopen_makes_a_new_copy() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();

        let first = fx.tracker.open_template(&intake).unwrap();
        fx.clock.advance_secs(1);
        let second = fx.tracker.open_template(&intake).unwrap();

        assert_eq!(second.kind, OpenKind::New);
        assert_ne!(second.copy_path, first.copy_path);
        assert_eq!(fx.tracker.issued_copy(&intake), Some(second.copy_path.as_path()));
        assert_eq!(filled(&fx).len(), 2);
    }

    #[test]
    fn deleted_copy_is_not_reused() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();

        let first = fx.tracker.open_template(&intake).unwrap();
        fs::remove_file(&first.copy_path).unwrap();
        let again = fx.tracker.open_template(&intake).unwrap();
        assert_eq!(again.kind, OpenKind::New);
        assert!(again.copy_path.exists());
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();

        assert!(fx.tracker.open_template(&intake).unwrap().all_processed);
        fx.clock.advance_secs(5);
        assert!(!fx.tracker.open_template(&intake).unwrap().all_processed);
        fx.tracker.list_templates().unwrap();
        assert!(!fx.tracker.open_template(&intake).unwrap().all_processed);
    }

    #[test]
    fn completion_resets_with_a_new_role_session() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        assert!(fx.tracker.open_template(&intake).unwrap().all_processed);

        fx.tracker.back_to_roles();
        fx.tracker.select_role(Role::Staff);
        fx.tracker.submit_name("Sam", "Lee").unwrap();
        fx.tracker.list_templates().unwrap();
        assert_eq!(fx.tracker.opened_count(), 0);
        assert!(fx.tracker.open_template(&intake).unwrap().all_processed);
    }

    #[test]
    fn missing_source_commits_nothing() {
        let mut fx = browsing(&["Intake.pdf", "Policy.docx"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        fs::remove_file(&intake.path).unwrap();

        let err = fx.tracker.open_template(&intake).unwrap_err();
        assert!(matches!(err, FormError::SourceNotFound(ref p) if *p == intake.path));
        assert!(!fx.tracker.is_opened(&intake));
        assert_eq!(fx.tracker.issued_copy(&intake), None);
        assert!(fx.launcher.opened().is_empty());
    }

    #[test]
    fn copy_failure_commits_nothing() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        // A plain file where the output directory should be
        fs::write(fx.dir.path().join(FILLED_FORMS_SUBDIR), b"in the way").unwrap();

        let err = fx.tracker.open_template(&intake).unwrap_err();
        assert!(matches!(err, FormError::CopyFailed { .. }));
        assert!(!fx.tracker.is_opened(&intake));
        assert_eq!(fx.tracker.issued_copy(&intake), None);
        assert!(!fx.tracker.completion_notified());
        assert!(fx.launcher.opened().is_empty());
        assert_eq!(fx.tracker.stage(), Stage::Browsing);
    }

    #[test]
    fn failed_copy_keeps_the_previous_issued_entry() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        let first = fx.tracker.open_template(&intake).unwrap().copy_path;

        fx.clock.advance_secs(1);
        fs::remove_file(&intake.path).unwrap();
        let err = fx.tracker.open_template(&intake).unwrap_err();

        assert!(matches!(err, FormError::SourceNotFound(_)));
        assert_eq!(fx.tracker.issued_copy(&intake), Some(first.as_path()));
        assert!(fx.tracker.is_opened(&intake));
    }

    #[test]
    fn form_opened_lasts_until_the_next_listing() {
        let mut fx = browsing(&["Intake.pdf", "Policy.docx"], Role::Staff);
        let intake = fx.tracker.templates()[0].clone();
        assert_eq!(fx.tracker.stage(), Stage::Browsing);

        fx.tracker.open_template(&intake).unwrap();
        assert_eq!(fx.tracker.stage(), Stage::FormOpened);

        fx.tracker.list_templates().unwrap();
        assert_eq!(fx.tracker.stage(), Stage::Browsing);

        fx.tracker.open_template(&intake).unwrap();
        fx.tracker.back_to_roles();
        assert_eq!(fx.tracker.stage(), Stage::NoRole);
    }

    #[test]
    fn failed_launch_does_not_enter_form_opened() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        fx.launcher.fail_with(Some("no viewer"));

        assert!(fx.tracker.open_template(&intake).is_err());
        assert_eq!(fx.tracker.stage(), Stage::Browsing);
    }

    #[test]
    fn launch_failure_keeps_copy_but_not_opened() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        fx.launcher.fail_with(Some("no viewer"));

        let err = fx.tracker.open_template(&intake).unwrap_err();
        assert!(matches!(err, FormError::LaunchFailed { .. }));
        assert!(!fx.tracker.is_opened(&intake));
        let copy = fx.tracker.issued_copy(&intake).unwrap().to_path_buf();
        assert!(copy.exists());
        assert!(!fx.tracker.completion_notified());

        fx.launcher.fail_with(None);
        let outcome = fx.tracker.open_template(&intake).unwrap();
        assert_eq!(outcome.kind, OpenKind::Reopened);
        assert!(outcome.all_processed);
    }

    #[test]
    fn open_requires_name_and_listing() {
        let mut fx = fixture(&["Intake.pdf"]);
        let intake = Template::new(fx.dir.path().join("Intake.pdf"));
        fx.tracker.select_role(Role::Parent);
        assert!(matches!(fx.tracker.open_template(&intake), Err(FormError::SessionIncomplete(_))));

        fx.tracker.submit_name("Jane", "Doe").unwrap();
        assert!(matches!(fx.tracker.open_template(&intake), Err(FormError::NotListed(_))));
    }

    #[test]
    fn missing_directory_yields_empty_listing() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        let config = KioskConfig::single_dir("Test", &gone);
        let mut tracker = FormTracker::new(config, Box::new(RecordingLauncher::new()), Box::new(FixedClock::new(noon())));
        tracker.select_role(Role::Staff);
        tracker.submit_name("Jane", "Doe").unwrap();

        assert!(matches!(tracker.list_templates(), Err(FormError::DirectoryUnavailable(_))));
        assert!(tracker.templates().is_empty());
        assert_eq!(tracker.stage(), Stage::Browsing);
    }

    #[test]
    fn relisting_prunes_vanished_templates_from_opened() {
        let mut fx = browsing(&["Intake.pdf", "Policy.docx"], Role::Parent);
        let templates = fx.tracker.templates().to_vec();
        fx.tracker.open_template(&templates[0]).unwrap();
        fx.tracker.open_template(&templates[1]).unwrap();
        assert_eq!(fx.tracker.opened_count(), 2);

        fs::remove_file(&templates[0].path).unwrap();
        fx.tracker.list_templates().unwrap();
        assert_eq!(fx.tracker.templates().len(), 1);
        assert_eq!(fx.tracker.opened_count(), 1);
        assert!(fx.tracker.opened_count() <= fx.tracker.templates().len());
    }

    #[test]
    fn copy_preserves_modification_time() {
        let mut fx = browsing(&["Intake.pdf"], Role::Parent);
        let intake = fx.tracker.templates()[0].clone();
        let outcome = fx.tracker.open_template(&intake).unwrap();

        let src = fs::metadata(&intake.path).unwrap().modified().unwrap();
        let dst = fs::metadata(&outcome.copy_path).unwrap().modified().unwrap();
        assert_eq!(src, dst);
    }
}
