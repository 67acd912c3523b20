use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::store::JsonStore;
use crate::utils::errors::AppError;

use super::model::{CreateNoticeRequest, Notice, NoticeAudience, NoticePriority};

pub struct NoticeService;

impl NoticeService {
    #[instrument(skip(store, caller, dto))]
    pub async fn create(
        store: &JsonStore,
        caller: &Claims,
        dto: CreateNoticeRequest,
    ) -> Result<Notice, AppError> {
        let notice = Notice {
            id: format!("notice-{}", Uuid::new_v4()),
            title: dto.title,
            content: dto.content,
            priority: dto.priority.unwrap_or(NoticePriority::Normal),
            target_audience: dto.target_audience.unwrap_or(NoticeAudience::All),
            posted_by: caller.sub.clone(),
            posted_by_name: caller.name.clone(),
            posted_by_role: caller.role,
            created_at: Utc::now(),
        };

        let stored = notice.clone();
        store
            .notices
            .update(move |notices| {
                // Newest first.
                notices.insert(0, stored);
                Ok::<_, AppError>(())
            })
            .await?;

        Ok(notice)
    }

    /// List notices visible to the caller's role.
    #[instrument(skip(store, caller))]
    pub async fn list(store: &JsonStore, caller: &Claims) -> Result<Vec<Notice>, AppError> {
        let notices = store.notices.read().await?;

        let visible = match caller.role {
            UserRole::Admin => notices,
            UserRole::Faculty => notices
                .into_iter()
                .filter(|n| {
                    matches!(
                        n.target_audience,
                        NoticeAudience::All | NoticeAudience::Faculty
                    )
                })
                .collect(),
            UserRole::Student => notices
                .into_iter()
                .filter(|n| {
                    matches!(
                        n.target_audience,
                        NoticeAudience::All | NoticeAudience::Students
                    )
                })
                .collect(),
        };

        Ok(visible)
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &JsonStore, id: &str) -> Result<(), AppError> {
        store
            .notices
            .update(|notices| {
                let idx = notices
                    .iter()
                    .position(|n| n.id == id)
                    .ok_or_else(|| AppError::not_found(anyhow!("Notice not found")))?;

                notices.remove(idx);
                Ok(())
            })
            .await
    }
}
