// src/services/book_service_tests.rs
//
// BookService tests over a real JSON file repository (tempdir-backed),
// exercising the full load/mutate/replace cycle.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::domain::{BookDraft, BookPatch};
    use crate::error::AppError;
    use crate::repositories::{BookRepository, JsonFileBookRepository};
    use crate::services::book_service::BookService;

    fn service() -> (BookService, TempDir) {
        let dir = TempDir::new().unwrap();
        let repo: Arc<dyn BookRepository> =
            Arc::new(JsonFileBookRepository::new(dir.path().join("books.json")));
        (BookService::new(repo), dir)
    }

    fn draft(key: &str) -> BookDraft {
        BookDraft {
            key: Some(key.to_string()),
            title: Some(format!("Title for {key}")),
            ..Default::default()
        }
    }

    #[test]
    fn insert_assigns_ids_and_defaults() {
        let (service, _dir) = service();

        let outcome = service.insert(draft("OL1W")).unwrap();
        assert_eq!(outcome.id, 1);
        assert!(outcome.created);

        let books = service.list_all().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].rating, 0);
        assert_eq!(books[0].status, "want-to-read");
        assert_eq!(books[0].progress, 0.0);
        assert!(books[0].saved_at.is_some());
        assert!(books[0].updated_at.is_some());
    }

    #[test]
    fn insert_without_key_is_a_validation_error() {
        let (service, _dir) = service();
        let result = service.insert(BookDraft::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn insert_accepts_an_empty_string_key() {
        let (service, _dir) = service();

        let first = service.insert(draft("")).unwrap();
        assert!(first.created);

        // Empty keys dedup against each other like any other key.
        let second = service.insert(draft("")).unwrap();
        assert_eq!(second.id, first.id);
        assert!(!second.created);
    }

    #[test]
    fn insert_is_idempotent_by_key() {
        let (service, _dir) = service();

        let first = service.insert(draft("OL1W")).unwrap();
        let second = service.insert(draft("OL1W")).unwrap();

        assert_eq!(second.id, first.id);
        assert!(!second.created);
        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_ids() {
        let (service, _dir) = service();

        let a = service.insert(draft("OL1W")).unwrap();
        let b = service.insert(draft("OL2W")).unwrap();
        let c = service.insert(draft("OL3W")).unwrap();

        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (service, _dir) = service();

        service.insert(draft("OL1W")).unwrap();
        let b = service.insert(draft("OL2W")).unwrap();
        service.delete(b.id).unwrap();

        // With the legacy len+1 scheme this insert would collide with id 2.
        let c = service.insert(draft("OL3W")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn update_merges_only_patched_fields() {
        let (service, _dir) = service();

        let mut base = draft("OL1W");
        base.notes = Some("first impressions".to_string());
        let outcome = service.insert(base).unwrap();

        let updated = service
            .update(
                outcome.id,
                BookPatch {
                    rating: Some(5),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.rating, 5);
        assert_eq!(updated.notes, "first impressions");
        assert_eq!(updated.status, "want-to-read");
        assert_eq!(updated.title.as_deref(), Some("Title for OL1W"));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let (service, _dir) = service();
        let result = service.update(42, BookPatch::default());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn delete_removes_the_record() {
        let (service, _dir) = service();

        let outcome = service.insert(draft("OL1W")).unwrap();
        service.delete(outcome.id).unwrap();

        assert!(service
            .list_all()
            .unwrap()
            .iter()
            .all(|b| b.id != outcome.id));
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let (service, _dir) = service();
        assert!(matches!(service.delete(99), Err(AppError::NotFound(_))));
    }

    #[test]
    fn import_appends_without_deduplication() {
        let (service, _dir) = service();

        service.insert(draft("OL1W")).unwrap();
        let outcome = service
            .import(vec![draft("OL1W"), draft("OL2W")])
            .unwrap();

        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.total_books, 3);

        let books = service.list_all().unwrap();
        let with_key = books.iter().filter(|b| b.key == "OL1W").count();
        assert_eq!(with_key, 2);
        assert!(books.iter().skip(1).all(|b| b.imported_at.is_some()));
    }

    #[test]
    fn import_of_empty_list_changes_nothing() {
        let (service, _dir) = service();

        service.insert(draft("OL1W")).unwrap();
        let outcome = service.import(Vec::new()).unwrap();

        assert_eq!(outcome.imported, 0);
        assert_eq!(outcome.total_books, 1);
        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[test]
    fn export_then_import_preserves_fields() {
        let (source, _a) = service();
        let (target, _b) = service();

        let mut first = draft("OL1W");
        first.rating = Some(4);
        first.status = Some("completed".to_string());
        source.insert(first).unwrap();
        source.insert(draft("OL2W")).unwrap();

        let snapshot = source.export().unwrap();
        assert_eq!(snapshot.total_books, 2);

        let drafts: Vec<BookDraft> = snapshot
            .books
            .iter()
            .map(|b| serde_json::from_value(serde_json::to_value(b).unwrap()).unwrap())
            .collect();
        target.import(drafts).unwrap();

        let exported = snapshot.books;
        let imported = target.list_all().unwrap();
        assert_eq!(imported.len(), exported.len());
        for (exp, imp) in exported.iter().zip(&imported) {
            assert_eq!(imp.key, exp.key);
            assert_eq!(imp.title, exp.title);
            assert_eq!(imp.rating, exp.rating);
            assert_eq!(imp.status, exp.status);
            assert_eq!(imp.saved_at, exp.saved_at);
            // id and imported_at are freshly assigned
            assert!(imp.imported_at.is_some());
        }
    }
}
