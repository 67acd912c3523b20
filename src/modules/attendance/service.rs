use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::store::JsonStore;
use crate::utils::errors::AppError;

use super::model::{
    AttendanceQuery, AttendanceRecord, AttendanceReportRow, AttendanceStatus,
    MarkAttendanceRequest, ReportQuery,
};

pub struct AttendanceService;

impl AttendanceService {
    /// Mark attendance for a (course, date). Replace-by-key: every prior
    /// record for that course and date is discarded before the new set is
    /// appended. Returns the number of records written.
    #[instrument(skip(store, caller, dto), fields(course = %dto.course, date = %dto.date))]
    pub async fn mark(
        store: &JsonStore,
        caller: &Claims,
        dto: MarkAttendanceRequest,
    ) -> Result<usize, AppError> {
        let MarkAttendanceRequest {
            course,
            date,
            records: entries,
        } = dto;
        let marked_by = caller.sub.clone();
        let marked_at = Utc::now();

        store
            .attendance
            .update(move |records| {
                records.retain(|r| !(r.course == course && r.date == date));

                let count = entries.len();
                records.extend(entries.into_iter().map(|entry| AttendanceRecord {
                    id: format!("att-{}", Uuid::new_v4()),
                    course: course.clone(),
                    date: date.clone(),
                    student_id: entry.student_id,
                    student_name: entry.student_name,
                    status: entry.status,
                    marked_by: marked_by.clone(),
                    marked_at,
                }));

                Ok::<_, AppError>(count)
            })
            .await
    }

    /// List records visible to the caller: students see only their own
    /// rows, faculty and admins see everything. Query filters narrow the
    /// result after the role filter.
    #[instrument(skip(store, caller, query))]
    pub async fn list(
        store: &JsonStore,
        caller: &Claims,
        query: AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let mut records = store.attendance.read().await?;

        if caller.role == UserRole::Student {
            records.retain(|r| r.student_id == caller.sub);
        }
        if let Some(course) = &query.course {
            records.retain(|r| &r.course == course);
        }
        if let Some(date) = &query.date {
            records.retain(|r| &r.date == date);
        }
        if let Some(student_id) = &query.student_id {
            records.retain(|r| &r.student_id == student_id);
        }

        Ok(records)
    }

    /// Aggregate the filtered window per student, in first-seen order.
    #[instrument(skip(store, query))]
    pub async fn report(
        store: &JsonStore,
        query: ReportQuery,
    ) -> Result<Vec<AttendanceReportRow>, AppError> {
        let mut records = store.attendance.read().await?;

        if let Some(course) = &query.course {
            records.retain(|r| &r.course == course);
        }
        if let Some(month) = &query.month {
            records.retain(|r| r.date.starts_with(month.as_str()));
        }

        let mut rows: Vec<AttendanceReportRow> = Vec::new();
        for record in &records {
            let idx = match rows.iter().position(|row| row.student_id == record.student_id) {
                Some(idx) => idx,
                None => {
                    rows.push(AttendanceReportRow {
                        student_id: record.student_id.clone(),
                        student_name: record.student_name.clone(),
                        total: 0,
                        present: 0,
                        percentage: 0,
                    });
                    rows.len() - 1
                }
            };

            rows[idx].total += 1;
            if record.status == AttendanceStatus::Present {
                rows[idx].present += 1;
            }
        }

        for row in &mut rows {
            if row.total > 0 {
                row.percentage =
                    (f64::from(row.present) / f64::from(row.total) * 100.0).round() as u32;
            }
        }

        Ok(rows)
    }
}
