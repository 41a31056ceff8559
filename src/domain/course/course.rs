//! Course aggregate.
//!
//! A course owns four ordered sequences: lessons, modules and labs (simple
//! completable items) plus scored assessments. `progress_percent` is a cache
//! derived from those sequences and is refreshed after every mutation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::{
    CourseId, DomainError, ErrorCode, ItemId, Percentage, Timestamp, UserId, ValidationError,
};

use super::ProgressCalculator;

/// Default maximum score for an assessment when none is given.
pub const DEFAULT_MAX_SCORE: f64 = 100.0;

/// A lesson, module or lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl CourseItem {
    fn new(title: String) -> Self {
        Self {
            id: ItemId::new(),
            title,
            completed: false,
        }
    }
}

/// A scored assessment. `score` is `None` until graded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub score: Option<f64>,
    pub max_score: f64,
}

impl Assessment {
    /// Score used in aggregate formulas; ungraded counts as zero.
    pub fn effective_score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// The completable item sequences a caller can address by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSection {
    Lesson,
    Module,
    Lab,
}

impl ItemSection {
    /// Capitalized singular label, used in not-found messages.
    pub fn label(&self) -> &'static str {
        match self {
            ItemSection::Lesson => "Lesson",
            ItemSection::Module => "Module",
            ItemSection::Lab => "Lab",
        }
    }
}

impl fmt::Display for ItemSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemSection::Lesson => "lesson",
            ItemSection::Module => "module",
            ItemSection::Lab => "lab",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ItemSection {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(ItemSection::Lesson),
            "module" => Ok(ItemSection::Module),
            "lab" => Ok(ItemSection::Lab),
            _ => Err(CourseError::InvalidSection(s.to_string())),
        }
    }
}

/// Errors raised by course mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CourseError {
    #[error("Invalid section")]
    InvalidSection(String),

    #[error("{} not found", .0.label())]
    ItemNotFound(ItemSection),

    #[error("Assessment not found")]
    AssessmentNotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<CourseError> for DomainError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::InvalidSection(section) => {
                DomainError::new(ErrorCode::ValidationFailed, "Invalid section")
                    .with_detail("section", section)
            }
            CourseError::ItemNotFound(_) | CourseError::AssessmentNotFound => {
                DomainError::new(ErrorCode::ItemNotFound, err.to_string())
            }
            CourseError::Validation(v) => v.into(),
        }
    }
}

/// A course tracked by a single student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub user_id: UserId,
    pub title: String,
    pub code: String,
    pub semester: String,
    pub lessons: Vec<CourseItem>,
    pub modules: Vec<CourseItem>,
    pub labs: Vec<CourseItem>,
    pub assessments: Vec<Assessment>,
    pub progress_percent: Percentage,
    pub created_at: Timestamp,
}

impl Course {
    /// Creates an empty course. Title and code are required after trimming.
    pub fn new(
        user_id: UserId,
        title: &str,
        code: &str,
        semester: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        let code = code.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if code.is_empty() {
            return Err(ValidationError::empty_field("code"));
        }

        Ok(Self {
            id: CourseId::new(),
            user_id,
            title: title.to_string(),
            code: code.to_string(),
            semester: semester.map(str::trim).unwrap_or_default().to_string(),
            lessons: Vec::new(),
            modules: Vec::new(),
            labs: Vec::new(),
            assessments: Vec::new(),
            progress_percent: Percentage::ZERO,
            created_at: Timestamp::now(),
        })
    }

    /// Ownership check used for every id-based lookup.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Items of a completable section.
    pub fn items(&self, section: ItemSection) -> &[CourseItem] {
        match section {
            ItemSection::Lesson => &self.lessons,
            ItemSection::Module => &self.modules,
            ItemSection::Lab => &self.labs,
        }
    }

    fn items_mut(&mut self, section: ItemSection) -> &mut Vec<CourseItem> {
        match section {
            ItemSection::Lesson => &mut self.lessons,
            ItemSection::Module => &mut self.modules,
            ItemSection::Lab => &mut self.labs,
        }
    }

    /// Appends an uncompleted item and refreshes progress.
    pub fn add_item(&mut self, section: ItemSection, title: &str) -> Result<ItemId, CourseError> {
        let title = require_title(title)?;
        let item = CourseItem::new(title);
        let id = item.id;
        self.items_mut(section).push(item);
        self.refresh_progress();
        Ok(id)
    }

    /// Appends an assessment and refreshes progress.
    pub fn add_assessment(
        &mut self,
        title: &str,
        max_score: Option<f64>,
        score: Option<f64>,
    ) -> Result<ItemId, CourseError> {
        let title = require_title(title)?;
        let max_score = max_score.unwrap_or(DEFAULT_MAX_SCORE);
        if !max_score.is_finite() || max_score <= 0.0 {
            return Err(ValidationError::invalid_format("max_score", "must be a positive number").into());
        }
        validate_score(score, max_score)?;

        let assessment = Assessment {
            id: ItemId::new(),
            title,
            score,
            max_score,
        };
        let id = assessment.id;
        self.assessments.push(assessment);
        self.refresh_progress();
        Ok(id)
    }

    /// Flips the completion flag of an item and refreshes progress.
    ///
    /// Returns the new completion state.
    pub fn toggle_item(&mut self, section: ItemSection, item_id: &ItemId) -> Result<bool, CourseError> {
        let item = self
            .items_mut(section)
            .iter_mut()
            .find(|item| &item.id == item_id)
            .ok_or(CourseError::ItemNotFound(section))?;
        item.completed = !item.completed;
        let completed = item.completed;
        self.refresh_progress();
        Ok(completed)
    }

    /// Records (or clears) an assessment score and refreshes progress.
    pub fn set_assessment_score(
        &mut self,
        assessment_id: &ItemId,
        score: Option<f64>,
    ) -> Result<(), CourseError> {
        let assessment = self
            .assessments
            .iter_mut()
            .find(|a| &a.id == assessment_id)
            .ok_or(CourseError::AssessmentNotFound)?;
        validate_score(score, assessment.max_score)?;
        assessment.score = score;
        self.refresh_progress();
        Ok(())
    }

    /// Recomputes the cached progress from the item sequences.
    pub fn refresh_progress(&mut self) -> Percentage {
        self.progress_percent = ProgressCalculator::calculate(self);
        self.progress_percent
    }
}

fn require_title(title: &str) -> Result<String, CourseError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::empty_field("title").into());
    }
    Ok(title.to_string())
}

fn validate_score(score: Option<f64>, max_score: f64) -> Result<(), CourseError> {
    if let Some(score) = score {
        if !score.is_finite() || score < 0.0 || score > max_score {
            return Err(ValidationError::out_of_range(
                "score",
                0,
                max_score.round() as i64,
                score.round() as i64,
            )
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course::new(UserId::new(), "Algorithms", "CS201", Some("Fall")).unwrap()
    }

    #[test]
    fn new_course_requires_title_and_code() {
        assert!(Course::new(UserId::new(), "  ", "CS1", None).is_err());
        assert!(Course::new(UserId::new(), "Intro", "", None).is_err());
    }

    #[test]
    fn new_course_defaults_semester_to_empty() {
        let c = Course::new(UserId::new(), " Intro ", "CS1", None).unwrap();
        assert_eq!(c.title, "Intro");
        assert_eq!(c.semester, "");
        assert_eq!(c.progress_percent, Percentage::ZERO);
    }

    #[test]
    fn toggle_flips_completion_and_refreshes_progress() {
        let mut c = course();
        let id = c.add_item(ItemSection::Lesson, "Sorting").unwrap();
        c.add_item(ItemSection::Lesson, "Graphs").unwrap();

        assert!(c.toggle_item(ItemSection::Lesson, &id).unwrap());
        assert_eq!(c.progress_percent.value(), 50);

        assert!(!c.toggle_item(ItemSection::Lesson, &id).unwrap());
        assert_eq!(c.progress_percent.value(), 0);
    }

    #[test]
    fn toggle_unknown_item_reports_section() {
        let mut c = course();
        let err = c.toggle_item(ItemSection::Lab, &ItemId::new()).unwrap_err();
        assert_eq!(err.to_string(), "Lab not found");
    }

    #[test]
    fn toggle_does_not_cross_sections() {
        let mut c = course();
        let id = c.add_item(ItemSection::Module, "Week 1").unwrap();
        assert!(c.toggle_item(ItemSection::Lesson, &id).is_err());
    }

    #[test]
    fn add_item_rejects_blank_title() {
        let mut c = course();
        assert!(matches!(
            c.add_item(ItemSection::Lab, " "),
            Err(CourseError::Validation(_))
        ));
    }

    #[test]
    fn assessment_score_must_fit_max() {
        let mut c = course();
        assert!(c.add_assessment("Quiz", Some(10.0), Some(11.0)).is_err());
        assert!(c.add_assessment("Quiz", Some(0.0), None).is_err());

        let id = c.add_assessment("Quiz", Some(10.0), None).unwrap();
        assert!(c.set_assessment_score(&id, Some(-1.0)).is_err());
        c.set_assessment_score(&id, Some(7.0)).unwrap();
        assert_eq!(c.progress_percent.value(), 70);

        c.set_assessment_score(&id, None).unwrap();
        assert_eq!(c.progress_percent.value(), 0);
    }

    #[test]
    fn section_parses_from_path_segment() {
        assert_eq!("lab".parse::<ItemSection>().unwrap(), ItemSection::Lab);
        assert!(matches!(
            "assessment".parse::<ItemSection>(),
            Err(CourseError::InvalidSection(_))
        ));
    }

    #[test]
    fn course_errors_map_to_domain_codes() {
        let err: DomainError = CourseError::ItemNotFound(ItemSection::Module).into();
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        assert_eq!(err.message, "Module not found");

        let err: DomainError = CourseError::InvalidSection("x".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn ownership_is_checked_by_user_id() {
        let c = course();
        assert!(c.is_owned_by(&c.user_id.clone()));
        assert!(!c.is_owned_by(&UserId::new()));
    }
}
