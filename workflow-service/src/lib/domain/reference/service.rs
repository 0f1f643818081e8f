use std::sync::Arc;

use crate::domain::reference::errors::ReferenceError;
use crate::domain::reference::models::CodeView;
use crate::domain::reference::models::Priority;
use crate::domain::reference::models::Status;
use crate::domain::reference::ports::PriorityRepository;
use crate::domain::reference::ports::StatusRepository;

/// CRUD passthrough for the priority and status vocabularies.
pub struct ReferenceService<PR, SR>
where
    PR: PriorityRepository,
    SR: StatusRepository,
{
    priorities: Arc<PR>,
    statuses: Arc<SR>,
}

impl<PR, SR> ReferenceService<PR, SR>
where
    PR: PriorityRepository,
    SR: StatusRepository,
{
    pub fn new(priorities: Arc<PR>, statuses: Arc<SR>) -> Self {
        Self {
            priorities,
            statuses,
        }
    }

    pub async fn list_priorities(&self) -> Result<Vec<CodeView>, ReferenceError> {
        let priorities = self.priorities.list_all().await?;
        Ok(priorities.iter().map(CodeView::from).collect())
    }

    pub async fn add_priority(&self, priority: Priority) -> Result<CodeView, ReferenceError> {
        let created = self.priorities.create(priority).await?;
        Ok(CodeView::from(&created))
    }

    pub async fn delete_priority(&self, code: i32) -> Result<bool, ReferenceError> {
        self.priorities.delete(code).await
    }

    pub async fn list_statuses(&self) -> Result<Vec<CodeView>, ReferenceError> {
        let statuses = self.statuses.list_all().await?;
        Ok(statuses.iter().map(CodeView::from).collect())
    }

    pub async fn add_status(&self, status: Status) -> Result<CodeView, ReferenceError> {
        let created = self.statuses.create(status).await?;
        Ok(CodeView::from(&created))
    }

    pub async fn delete_status(&self, code: i32) -> Result<bool, ReferenceError> {
        self.statuses.delete(code).await
    }
}
