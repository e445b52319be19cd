//! Core domain model for course assignments.
//!
//! Defines the assignment lifecycle (status and grade), the owning course
//! aggregate, and the invariants shared with the record codec: a grade is
//! optional, lies in `[0, 100]` when present, and implies `Graded` status.

use crate::constants::{DATE_FORMAT, GRADE_MAX, GRADE_MIN};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an assignment
///
/// Each variant carries a canonical display token used by both decoding
/// and encoding; the string/variant mapping lives here and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    /// All statuses in lifecycle order
    pub const ALL: [AssignmentStatus; 3] = [
        AssignmentStatus::Pending,
        AssignmentStatus::Submitted,
        AssignmentStatus::Graded,
    ];

    /// Canonical serialized token for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }

    /// Look up a status from its exact case-sensitive token
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == token)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assignment entry: student, theme, issue date, status, and grade
///
/// Created fully formed either by direct construction or by decoding a
/// record line; mutated in place by [`Assignment::update_status`] and
/// [`Assignment::set_grade`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    student_name: String,
    theme_name: String,
    issue_date: NaiveDate,
    status: AssignmentStatus,
    grade: Option<f64>,
}

impl Assignment {
    /// Create a new assignment with default lifecycle state
    /// (`Pending`, no grade)
    pub fn new(
        student_name: impl Into<String>,
        theme_name: impl Into<String>,
        issue_date: NaiveDate,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            theme_name: theme_name.into(),
            issue_date,
            status: AssignmentStatus::Pending,
            grade: None,
        }
    }

    /// Create an assignment with explicit lifecycle state
    ///
    /// Enforces the model invariants: a present grade must lie in
    /// `[0, 100]` and forces the status to be `Graded`.
    pub fn with_state(
        student_name: impl Into<String>,
        theme_name: impl Into<String>,
        issue_date: NaiveDate,
        status: AssignmentStatus,
        grade: Option<f64>,
    ) -> Result<Self> {
        if let Some(value) = grade {
            if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
                return Err(Error::grade_range(value));
            }
            if status != AssignmentStatus::Graded {
                return Err(Error::decode(format!(
                    "grade {} is set but status is '{}' (expected 'Graded')",
                    value, status
                )));
            }
        }

        Ok(Self {
            student_name: student_name.into(),
            theme_name: theme_name.into(),
            issue_date,
            status,
            grade,
        })
    }

    /// Student name
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    /// Theme name
    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Issue date (immutable once created)
    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    /// Current lifecycle status
    pub fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Grade, if one has been set
    pub fn grade(&self) -> Option<f64> {
        self.grade
    }

    /// Change the status without touching the grade
    pub fn update_status(&mut self, new_status: AssignmentStatus) {
        self.status = new_status;
    }

    /// Set the grade and mark the assignment as graded
    ///
    /// A grade outside `[0, 100]` is rejected and the assignment is left
    /// unchanged (no partial mutation).
    pub fn set_grade(&mut self, grade: f64) -> Result<()> {
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Err(Error::grade_range(grade));
        }
        self.grade = Some(grade);
        self.status = AssignmentStatus::Graded;
        Ok(())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, Theme: {}, Issued: {}, Status: {}",
            self.student_name,
            self.theme_name,
            self.issue_date.format(DATE_FORMAT),
            self.status
        )?;
        if let Some(grade) = self.grade {
            write!(f, ", Grade: {}", grade)?;
        }
        Ok(())
    }
}

/// Named aggregate owning an ordered list of assignments
///
/// Insertion order is preserved and is the basis for display and
/// index-based operations. Duplicate assignments are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    name: String,
    instructor: String,
    assignments: Vec<Assignment>,
}

impl Course {
    /// Create an empty course
    pub fn new(name: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructor: instructor.into(),
            assignments: Vec::new(),
        }
    }

    /// Course name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instructor name
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Append an assignment, preserving insertion order
    pub fn add(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Remove and return the assignment at the given zero-based index
    pub fn remove_at(&mut self, index: usize) -> Result<Assignment> {
        if index >= self.assignments.len() {
            return Err(Error::index_out_of_range(index, self.assignments.len()));
        }
        Ok(self.assignments.remove(index))
    }

    /// Assignments in insertion order
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Borrow the assignment at the given zero-based index
    pub fn assignment_at(&self, index: usize) -> Result<&Assignment> {
        self.assignments
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.assignments.len()))
    }

    /// Mutably borrow the assignment at the given zero-based index
    pub fn assignment_at_mut(&mut self, index: usize) -> Result<&mut Assignment> {
        let len = self.assignments.len();
        self.assignments
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }

    /// Number of assignments in the course
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the course has no assignments
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course: {}, Instructor: {}, Assignments: {}",
            self.name,
            self.instructor,
            self.assignments.len()
        )
    }
}
