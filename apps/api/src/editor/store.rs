//! The working copy of the resume while in edit mode.
//!
//! Every accepted operation builds a fresh `ResumeData` and swaps it in; a
//! snapshot handed out earlier is never modified. Leaving edit mode discards
//! the working copy and restores the pristine default: view mode always shows
//! the loaded resume, never an edited one.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::editor::ids::IdGenerator;
use crate::editor::tags;
use crate::models::portfolio::Project;
use crate::models::resume::{Education, Experience, PersonalInfoPatch, ResumeData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Skills,
    Technologies,
    Achievements,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Technologies => "technologies",
            Section::Achievements => "achievements",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Resume is not in edit mode")]
    NotEditing,

    #[error("Cannot remove: at least one {0} entry is required")]
    CannotRemoveLast(Section),

    /// Caller passed a position that does not exist in the current list.
    #[error("{section} index {index} is out of range (len {len})")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("Invalid {section} value '{value}': values must be non-empty and unique")]
    InvalidValue { section: Section, value: String },
}

pub type EditResult = Result<Arc<ResumeData>, StoreError>;

pub struct ResumeEditor {
    pristine: Arc<ResumeData>,
    current: Arc<ResumeData>,
    edit_mode: bool,
    ids: IdGenerator,
}

impl ResumeEditor {
    pub fn new(default: ResumeData) -> Self {
        let pristine = Arc::new(default);
        Self {
            current: Arc::clone(&pristine),
            pristine,
            edit_mode: false,
            ids: IdGenerator::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    /// The aggregate currently on display: the working copy in edit mode,
    /// the pristine default otherwise.
    pub fn snapshot(&self) -> Arc<ResumeData> {
        if self.edit_mode {
            Arc::clone(&self.current)
        } else {
            Arc::clone(&self.pristine)
        }
    }

    pub fn enter_edit(&mut self) -> Arc<ResumeData> {
        if !self.edit_mode {
            info!("Entering resume edit mode");
            self.edit_mode = true;
        }
        self.snapshot()
    }

    /// Leaves edit mode and throws the working copy away.
    pub fn exit_edit(&mut self) -> Arc<ResumeData> {
        if self.edit_mode {
            info!("Leaving resume edit mode; edits discarded");
        }
        self.edit_mode = false;
        self.current = Arc::clone(&self.pristine);
        self.snapshot()
    }

    // ── Experience ─────────────────────────────────────────────────────────

    pub fn add_experience(&mut self) -> EditResult {
        self.ensure_editing()?;
        let id = self
            .ids
            .next_id(self.current.experience.iter().map(|e| e.id.as_str()));
        self.apply(|resume| {
            resume.experience.push(Experience {
                id,
                ..Default::default()
            });
            Ok(())
        })
    }

    pub fn update_experience(&mut self, index: usize, record: Experience) -> EditResult {
        self.apply(|resume| {
            check_index(Section::Experience, index, resume.experience.len())?;
            resume.experience[index] = record;
            Ok(())
        })
    }

    pub fn remove_experience(&mut self, index: usize) -> EditResult {
        self.apply(|resume| {
            check_index(Section::Experience, index, resume.experience.len())?;
            if resume.experience.len() <= 1 {
                return Err(StoreError::CannotRemoveLast(Section::Experience));
            }
            resume.experience.remove(index);
            Ok(())
        })
    }

    pub fn add_achievement(&mut self, experience_index: usize, text: &str) -> EditResult {
        self.apply(|resume| {
            let entry = entry_mut(&mut resume.experience, Section::Experience, experience_index)?;
            if let Some(next) = tags::append_trimmed(&entry.achievements, text) {
                entry.achievements = next;
            }
            Ok(())
        })
    }

    pub fn remove_achievement(&mut self, experience_index: usize, item: usize) -> EditResult {
        self.apply(|resume| {
            let entry = entry_mut(&mut resume.experience, Section::Experience, experience_index)?;
            let len = entry.achievements.len();
            entry.achievements =
                tags::remove_at(&entry.achievements, item).ok_or(StoreError::IndexOutOfRange {
                    section: Section::Achievements,
                    index: item,
                    len,
                })?;
            Ok(())
        })
    }

    // ── Education ──────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> EditResult {
        self.ensure_editing()?;
        let id = self
            .ids
            .next_id(self.current.education.iter().map(|e| e.id.as_str()));
        self.apply(|resume| {
            resume.education.push(Education {
                id,
                ..Default::default()
            });
            Ok(())
        })
    }

    pub fn update_education(&mut self, index: usize, record: Education) -> EditResult {
        self.apply(|resume| {
            check_index(Section::Education, index, resume.education.len())?;
            resume.education[index] = record;
            Ok(())
        })
    }

    pub fn remove_education(&mut self, index: usize) -> EditResult {
        self.apply(|resume| {
            check_index(Section::Education, index, resume.education.len())?;
            if resume.education.len() <= 1 {
                return Err(StoreError::CannotRemoveLast(Section::Education));
            }
            resume.education.remove(index);
            Ok(())
        })
    }

    // ── Projects ───────────────────────────────────────────────────────────

    pub fn add_project(&mut self) -> EditResult {
        self.ensure_editing()?;
        let id = self
            .ids
            .next_id(self.current.projects().iter().map(|p| p.id.as_str()));
        self.apply(|resume| {
            resume.projects.get_or_insert_with(Vec::new).push(Project {
                id,
                ..Default::default()
            });
            Ok(())
        })
    }

    /// Replaces the project wholesale. Its technologies must already be
    /// free of blanks and duplicates.
    pub fn update_project(&mut self, index: usize, record: Project) -> EditResult {
        self.apply(|resume| {
            let projects = resume.projects.get_or_insert_with(Vec::new);
            check_index(Section::Projects, index, projects.len())?;
            if let Some(bad) = tags::first_invalid(&record.technologies) {
                return Err(StoreError::InvalidValue {
                    section: Section::Technologies,
                    value: bad.to_string(),
                });
            }
            projects[index] = record;
            Ok(())
        })
    }

    /// No minimum length: the projects section is optional.
    pub fn remove_project(&mut self, index: usize) -> EditResult {
        self.apply(|resume| {
            let projects = resume.projects.get_or_insert_with(Vec::new);
            check_index(Section::Projects, index, projects.len())?;
            projects.remove(index);
            Ok(())
        })
    }

    pub fn add_technology(&mut self, project_index: usize, tech: &str) -> EditResult {
        self.apply(|resume| {
            let projects = resume.projects.get_or_insert_with(Vec::new);
            let project = entry_mut(projects, Section::Projects, project_index)?;
            if let Some(next) = tags::add_unique(&project.technologies, tech) {
                project.technologies = next;
            }
            Ok(())
        })
    }

    pub fn remove_technology(&mut self, project_index: usize, tech: &str) -> EditResult {
        self.apply(|resume| {
            let projects = resume.projects.get_or_insert_with(Vec::new);
            let project = entry_mut(projects, Section::Projects, project_index)?;
            project.technologies = tags::remove_value(&project.technologies, tech);
            Ok(())
        })
    }

    // ── Personal info & skills ─────────────────────────────────────────────

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) -> EditResult {
        self.apply(|resume| {
            resume.personal_info = resume.personal_info.patched(patch);
            Ok(())
        })
    }

    /// Replaces the skills list exactly as given; blank or repeated values
    /// are rejected rather than cleaned up.
    pub fn set_skills(&mut self, skills: Vec<String>) -> EditResult {
        self.apply(|resume| {
            if let Some(bad) = tags::first_invalid(&skills) {
                return Err(StoreError::InvalidValue {
                    section: Section::Skills,
                    value: bad.to_string(),
                });
            }
            resume.skills = skills;
            Ok(())
        })
    }

    pub fn add_skill(&mut self, name: &str) -> EditResult {
        self.ensure_editing()?;
        match tags::add_unique(&self.current.skills, name) {
            Some(next) => self.set_skills(next),
            None => Ok(self.snapshot()),
        }
    }

    pub fn remove_skill(&mut self, name: &str) -> EditResult {
        self.ensure_editing()?;
        let next = tags::remove_value(&self.current.skills, name);
        self.set_skills(next)
    }

    // ── Internals ──────────────────────────────────────────────────────────

    fn ensure_editing(&self) -> Result<(), StoreError> {
        if self.edit_mode {
            Ok(())
        } else {
            warn!("Rejected resume edit outside edit mode");
            Err(StoreError::NotEditing)
        }
    }

    /// Runs `edit` against a copy of the working resume and swaps the copy
    /// in only if the edit succeeds.
    fn apply<F>(&mut self, edit: F) -> EditResult
    where
        F: FnOnce(&mut ResumeData) -> Result<(), StoreError>,
    {
        self.ensure_editing()?;
        let mut next = ResumeData::clone(&self.current);
        match edit(&mut next) {
            Ok(()) => {
                self.current = Arc::new(next);
                Ok(Arc::clone(&self.current))
            }
            Err(err @ StoreError::IndexOutOfRange { .. }) => {
                error!("Resume edit contract violation: {err}");
                Err(err)
            }
            Err(err) => {
                warn!("Rejected resume edit: {err}");
                Err(err)
            }
        }
    }
}

fn check_index(section: Section, index: usize, len: usize) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfRange {
            section,
            index,
            len,
        })
    }
}

fn entry_mut<T>(list: &mut [T], section: Section, index: usize) -> Result<&mut T, StoreError> {
    let len = list.len();
    list.get_mut(index).ok_or(StoreError::IndexOutOfRange {
        section,
        index,
        len,
    })
}
