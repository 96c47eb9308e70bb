// src/services/statistics_service.rs
use std::sync::Arc;

use crate::domain::{ReadingStats, STATUS_COMPLETED, STATUS_READING, STATUS_WANT_TO_READ};
use crate::error::AppResult;
use crate::repositories::BookRepository;

pub struct StatisticsService {
    repo: Arc<dyn BookRepository>,
}

impl StatisticsService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    /// Aggregate the whole collection in one pass.
    ///
    /// Records with a status outside the three known values land in no
    /// bucket but still count toward totals and average progress.
    pub fn calculate(&self) -> AppResult<ReadingStats> {
        let books = self.repo.load()?.books;

        let total = books.len() as u64;
        let mut completed = 0u64;
        let mut reading = 0u64;
        let mut want_to_read = 0u64;
        let mut rating_sum = 0i64;
        let mut rated_count = 0u64;
        let mut total_pages = 0i64;
        let mut progress_sum = 0f64;

        for book in &books {
            match book.status.as_str() {
                STATUS_COMPLETED => completed += 1,
                STATUS_READING => reading += 1,
                STATUS_WANT_TO_READ => want_to_read += 1,
                _ => {}
            }

            if book.rating > 0 {
                rating_sum += i64::from(book.rating);
                rated_count += 1;
            }

            // Zero page counts are treated as unset; anything else sums.
            if let Some(pages) = book.pages {
                if pages != 0 {
                    total_pages += pages;
                }
            }

            progress_sum += book.progress;
        }

        let average_rating = if rated_count > 0 {
            rating_sum as f64 / rated_count as f64
        } else {
            0.0
        };
        let average_progress = if total > 0 {
            progress_sum / total as f64
        } else {
            0.0
        };
        let completion_rate = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Ok(ReadingStats {
            total_books: total,
            completed,
            reading,
            want_to_read,
            average_rating: round1(average_rating),
            total_pages,
            average_progress: round1(average_progress),
            completion_rate: round1(completion_rate),
        })
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookCollection, BookDraft, BookRecord};
    use crate::repositories::MockBookRepository;

    fn book(status: &str, rating: i32, pages: Option<i64>, progress: f64) -> BookRecord {
        let mut record = BookRecord::from_draft(
            BookDraft {
                key: Some(format!("OL{rating}{progress}W")),
                ..Default::default()
            },
            1,
        );
        record.status = status.to_string();
        record.rating = rating;
        record.pages = pages;
        record.progress = progress;
        record
    }

    fn service_over(books: Vec<BookRecord>) -> StatisticsService {
        let collection = BookCollection::from_books(books);
        let mut repo = MockBookRepository::new();
        repo.expect_load().returning(move || Ok(collection.clone()));
        StatisticsService::new(Arc::new(repo))
    }

    #[test]
    fn aggregates_a_mixed_collection() {
        let service = service_over(vec![
            book("completed", 4, Some(100), 100.0),
            book("reading", 0, Some(200), 50.0),
        ]);

        let stats = service.calculate().unwrap();

        assert_eq!(stats.total_books, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.reading, 1);
        assert_eq!(stats.want_to_read, 0);
        assert_eq!(stats.average_rating, 4.0);
        assert_eq!(stats.total_pages, 300);
        assert_eq!(stats.average_progress, 75.0);
        assert_eq!(stats.completion_rate, 50.0);
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        let stats = service_over(Vec::new()).calculate().unwrap();

        assert_eq!(stats.total_books, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.average_progress, 0.0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.total_pages, 0);
    }

    #[test]
    fn unknown_status_counts_in_no_bucket() {
        let service = service_over(vec![
            book("on-hold", 0, None, 0.0),
            book("completed", 0, None, 100.0),
        ]);

        let stats = service.calculate().unwrap();

        assert_eq!(stats.total_books, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.reading, 0);
        assert_eq!(stats.want_to_read, 0);
        // the unbucketed record still dilutes the averages
        assert_eq!(stats.average_progress, 50.0);
        assert_eq!(stats.completion_rate, 50.0);
    }

    #[test]
    fn zero_page_counts_are_skipped_but_nonzero_values_sum() {
        let service = service_over(vec![
            book("reading", 0, Some(100), 0.0),
            book("reading", 0, Some(0), 0.0),
            book("reading", 0, Some(-10), 0.0),
            book("reading", 0, None, 0.0),
        ]);

        let stats = service.calculate().unwrap();
        assert_eq!(stats.total_pages, 90);
    }

    #[test]
    fn unrated_books_do_not_dilute_the_average_rating() {
        let service = service_over(vec![
            book("reading", 5, None, 0.0),
            book("reading", 3, None, 0.0),
            book("reading", 0, None, 0.0),
        ]);

        let stats = service.calculate().unwrap();
        assert_eq!(stats.average_rating, 4.0);
    }

    #[test]
    fn rates_round_to_one_decimal() {
        let service = service_over(vec![
            book("completed", 0, None, 0.0),
            book("reading", 0, None, 0.0),
            book("reading", 0, None, 0.0),
        ]);

        let stats = service.calculate().unwrap();
        // 1/3 * 100 = 33.333... -> 33.3
        assert_eq!(stats.completion_rate, 33.3);
    }
}
