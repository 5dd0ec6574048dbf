//! Person directory service

use crate::error::{ApiError, ApiResult};
use crate::storage::Database;
use person_types::{Person, PersonPayload};
use std::sync::Arc;
use tracing::{debug, info};

pub struct PersonDirectory {
    db: Arc<Database>,
}

impl PersonDirectory {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> ApiResult<Vec<Person>> {
        let persons = self.db.list_persons().await?;
        debug!("Listed {} persons", persons.len());
        Ok(persons)
    }

    pub async fn get(&self, id: i64) -> ApiResult<Person> {
        self.db
            .get_person(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    pub async fn create(&self, payload: PersonPayload) -> ApiResult<Person> {
        if payload.is_blank() {
            return Err(ApiError::EmptyName);
        }

        let id = self.db.insert_person(&payload.name).await?;
        info!("Created person: id={}, name={}", id, payload.name);

        Ok(Person::new(id, payload.name))
    }

    pub async fn rename(&self, id: i64, payload: PersonPayload) -> ApiResult<Person> {
        if payload.is_blank() {
            return Err(ApiError::EmptyName);
        }

        let affected = self.db.update_person_name(id, &payload.name).await?;
        if affected == 0 {
            return Err(ApiError::NotFound(id.to_string()));
        }
        info!("Renamed person: id={}, name={}", id, payload.name);

        Ok(Person::new(id, payload.name))
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn remove(&self, id: i64) -> ApiResult<()> {
        let affected = self.db.delete_person(id).await?;
        if affected == 0 {
            debug!("Delete of person {} matched no rows", id);
        } else {
            info!("Deleted person: id={}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn directory() -> PersonDirectory {
        PersonDirectory::new(Arc::new(Database::in_memory().await.unwrap()))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let directory = directory().await;

        let created = directory.create(PersonPayload::new("Ana")).await.unwrap();
        assert_eq!(created.name, "Ana");

        let fetched = directory.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_ignores_payload_id() {
        let directory = directory().await;

        let mut payload = PersonPayload::new("Ana");
        payload.id = Some(999);
        let created = directory.create(payload).await.unwrap();
        assert_ne!(created.id, 999);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let directory = directory().await;

        let err = directory.create(PersonPayload::new("  ")).await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyName));

        let created = directory.create(PersonPayload::new("Ana")).await.unwrap();
        let err = directory
            .rename(created.id, PersonPayload::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyName));
        assert_eq!(directory.get(created.id).await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let directory = directory().await;
        let err = directory.get(i64::MAX).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(id) if id == i64::MAX.to_string()));
    }

    #[tokio::test]
    async fn test_rename() {
        let directory = directory().await;

        let created = directory.create(PersonPayload::new("Ana")).await.unwrap();
        let renamed = directory
            .rename(created.id, PersonPayload::new("Ana Clara"))
            .await
            .unwrap();
        assert_eq!(renamed, Person::new(created.id, "Ana Clara"));
        assert_eq!(directory.get(created.id).await.unwrap(), renamed);

        let err = directory
            .rename(created.id + 1, PersonPayload::new("Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let directory = directory().await;

        let created = directory.create(PersonPayload::new("Ana")).await.unwrap();
        directory.remove(created.id).await.unwrap();
        directory.remove(created.id).await.unwrap();
        assert!(directory.list().await.unwrap().is_empty());
    }
}
