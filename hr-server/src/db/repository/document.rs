//! Document Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Document, DocumentCreate};

#[derive(Clone)]
pub struct DocumentRepository {
    base: BaseRepository,
}

impl DocumentRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find document by id
    pub async fn find_by_id(&self, id: i64) -> Option<Document> {
        self.base.store().documents().get(id)
    }

    /// All documents belonging to an employee, in upload order
    pub async fn find_by_employee_id(&self, employee_id: i64) -> Vec<Document> {
        self.base
            .store()
            .documents()
            .filter(|d| d.employee_id == employee_id)
    }

    /// Create a new document
    pub async fn create(&self, data: DocumentCreate) -> Document {
        let upload_date = Utc::now();
        self.base.store().documents().insert_with(|id| Document {
            id,
            employee_id: data.employee_id,
            name: data.name,
            doc_type: data.doc_type,
            path: data.path,
            metadata: data.metadata,
            upload_date,
        })
    }

    /// Delete a document, reporting whether it existed. No cascade.
    pub async fn delete(&self, id: i64) -> bool {
        self.base.store().documents().remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(employee_id: i64, name: &str) -> DocumentCreate {
        DocumentCreate {
            employee_id,
            name: name.to_string(),
            doc_type: "contract".to_string(),
            path: "/files/contract.pdf".to_string(),
            metadata: None,
        }
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let repo = DocumentRepository::new(Store::new());
        let doc = repo.create(payload(1, "Contract")).await;

        assert!(repo.delete(doc.id).await);
        assert!(!repo.delete(doc.id).await);
        assert!(repo.find_by_id(doc.id).await.is_none());
    }

    #[tokio::test]
    async fn test_find_by_employee_filters_owner() {
        let repo = DocumentRepository::new(Store::new());
        repo.create(payload(1, "A")).await;
        repo.create(payload(2, "B")).await;
        repo.create(payload(1, "C")).await;

        let docs = repo.find_by_employee_id(1).await;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "A");
        assert_eq!(docs[1].name, "C");
    }
}
