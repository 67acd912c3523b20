use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::store::JsonStore;
use crate::utils::errors::AppError;

use super::model::{
    Assignment, AssignmentQuery, CreateAssignmentRequest, SubmitAssignmentRequest, Submission,
};

pub struct AssignmentService;

impl AssignmentService {
    #[instrument(skip(store, caller, dto), fields(course = %dto.course))]
    pub async fn create(
        store: &JsonStore,
        caller: &Claims,
        dto: CreateAssignmentRequest,
    ) -> Result<Assignment, AppError> {
        let assignment = Assignment {
            id: format!("asgn-{}", Uuid::new_v4()),
            title: dto.title,
            description: dto.description.unwrap_or_default(),
            course: dto.course,
            due_date: dto.due_date,
            created_by: caller.sub.clone(),
            created_by_name: caller.name.clone(),
            created_at: Utc::now(),
            submissions: Vec::new(),
        };

        let stored = assignment.clone();
        store
            .assignments
            .update(move |assignments| {
                assignments.push(stored);
                Ok::<_, AppError>(())
            })
            .await?;

        Ok(assignment)
    }

    /// List assignments. Students see every assignment, but each
    /// submissions list is narrowed to their own entry.
    #[instrument(skip(store, caller, query))]
    pub async fn list(
        store: &JsonStore,
        caller: &Claims,
        query: AssignmentQuery,
    ) -> Result<Vec<Assignment>, AppError> {
        let mut assignments = store.assignments.read().await?;

        if let Some(course) = &query.course {
            assignments.retain(|a| &a.course == course);
        }

        if caller.role == UserRole::Student {
            for assignment in &mut assignments {
                assignment
                    .submissions
                    .retain(|s| s.student_id == caller.sub);
            }
        }

        Ok(assignments)
    }

    /// Upsert the caller's submission, keyed by student id. A resubmission
    /// replaces the existing entry in place, keeping its position.
    #[instrument(skip(store, caller, dto))]
    pub async fn submit(
        store: &JsonStore,
        caller: &Claims,
        id: &str,
        dto: SubmitAssignmentRequest,
    ) -> Result<(), AppError> {
        let submission = Submission {
            student_id: caller.sub.clone(),
            student_name: caller.name.clone(),
            content: dto.content.unwrap_or_default(),
            submitted_at: Utc::now(),
        };

        store
            .assignments
            .update(move |assignments| {
                let assignment = assignments
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or_else(|| AppError::not_found(anyhow!("Assignment not found")))?;

                match assignment
                    .submissions
                    .iter_mut()
                    .find(|s| s.student_id == submission.student_id)
                {
                    Some(existing) => *existing = submission,
                    None => assignment.submissions.push(submission),
                }

                Ok(())
            })
            .await
    }
}
