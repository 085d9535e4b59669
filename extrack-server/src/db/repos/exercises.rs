//! Exercise repository
//!
//! Dates are stored as ISO `YYYY-MM-DD` text, so SQL ordering and range
//! filtering on the column are chronological.

use chrono::NaiveDate;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::models::{CalendarDate, DateComparison, Description, LogFilter, Minutes};
use super::DbError;

/// Validated input for a new exercise
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: String,
    pub description: Description,
    pub duration: Minutes,
    pub date: CalendarDate,
}

/// Exercise record from database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: CalendarDate,
}

/// One line of a user's exercise log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: CalendarDate,
}

#[derive(FromRow)]
struct LogRow {
    description: String,
    duration: i64,
    date: NaiveDate,
}

impl From<LogRow> for LogEntry {
    fn from(r: LogRow) -> Self {
        Self {
            description: r.description,
            duration: r.duration,
            date: r.date.into(),
        }
    }
}

/// Exercise repository
pub struct ExerciseRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ExerciseRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an exercise. The caller has already checked the user exists.
    pub async fn insert(&self, new: NewExercise) -> Result<Exercise, DbError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&new.user_id)
        .bind(new.description.as_str())
        .bind(new.duration.get())
        .bind(new.date.as_naive())
        .execute(self.pool)
        .await?;

        Ok(Exercise {
            id,
            user_id: new.user_id,
            description: new.description.into_string(),
            duration: new.duration.get(),
            date: new.date,
        })
    }

    /// Fetch a user's log: filter by date bounds, oldest first, then cap.
    ///
    /// Chronological bounds are applied in SQL. Lexicographic bounds compare
    /// rendered calendar strings, which SQLite can't produce, so that mode
    /// filters the ordered rows in memory before applying the limit.
    pub async fn log(
        &self,
        user_id: &str,
        filter: &LogFilter,
        comparison: DateComparison,
    ) -> Result<Vec<LogEntry>, DbError> {
        match comparison {
            DateComparison::Chronological => self.log_chronological(user_id, filter).await,
            DateComparison::Lexicographic => {
                let rows = self.log_chronological(user_id, &LogFilter::default()).await?;
                let limit = filter.limit.map_or(usize::MAX, |l| l as usize);
                Ok(rows
                    .into_iter()
                    .filter(|e| filter.admits(e.date, comparison))
                    .take(limit)
                    .collect())
            }
        }
    }

    async fn log_chronological(
        &self,
        user_id: &str,
        filter: &LogFilter,
    ) -> Result<Vec<LogEntry>, DbError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT description, duration, date FROM exercises WHERE user_id = ",
        );
        qb.push_bind(user_id);

        if let Some(from) = filter.from {
            qb.push(" AND date >= ").push_bind(from.as_naive());
        }
        if let Some(to) = filter.to {
            qb.push(" AND date <= ").push_bind(to.as_naive());
        }

        qb.push(" ORDER BY date ASC, rowid ASC");

        if let Some(limit) = filter.limit {
            qb.push(" LIMIT ").push_bind(limit);
        }

        let rows = qb.build_query_as::<LogRow>().fetch_all(self.pool).await?;
        Ok(rows.into_iter().map(LogEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open_memory_pool, UserRepo};
    use crate::models::Username;

    async fn seed(pool: &SqlitePool, dates: &[&str]) -> String {
        let user = UserRepo::new(pool)
            .create(Username::new("alice").unwrap())
            .await
            .unwrap();

        let repo = ExerciseRepo::new(pool);
        for (i, d) in dates.iter().enumerate() {
            repo.insert(NewExercise {
                user_id: user.id.clone(),
                description: Description::new(&format!("session {i}")).unwrap(),
                duration: Minutes::parse(&format!("{}", (i + 1) * 10)).unwrap(),
                date: CalendarDate::parse("date", d).unwrap(),
            })
            .await
            .unwrap();
        }
        user.id
    }

    fn filter(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> LogFilter {
        LogFilter::parse(from, to, limit).unwrap()
    }

    fn dates(entries: &[LogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.date.to_string()).collect()
    }

    #[tokio::test]
    async fn insert_round_trips_through_log() {
        let pool = open_memory_pool().await.unwrap();
        let user_id = seed(&pool, &["2023-01-15"]).await;

        let log = ExerciseRepo::new(&pool)
            .log(&user_id, &LogFilter::default(), DateComparison::Chronological)
            .await
            .unwrap();

        assert_eq!(
            log,
            vec![LogEntry {
                description: "session 0".into(),
                duration: 10,
                date: CalendarDate::parse("date", "2023-01-15").unwrap(),
            }]
        );
        assert_eq!(log[0].date.to_string(), "Sun Jan 15 2023");
    }

    #[tokio::test]
    async fn log_is_sorted_by_date() {
        let pool = open_memory_pool().await.unwrap();
        let user_id = seed(&pool, &["2023-03-01", "2022-12-31", "2023-01-15"]).await;

        let log = ExerciseRepo::new(&pool)
            .log(&user_id, &LogFilter::default(), DateComparison::Chronological)
            .await
            .unwrap();

        assert_eq!(
            dates(&log),
            vec!["Sat Dec 31 2022", "Sun Jan 15 2023", "Wed Mar 01 2023"]
        );
    }

    #[tokio::test]
    async fn limit_caps_entries() {
        let pool = open_memory_pool().await.unwrap();
        let user_id = seed(&pool, &["2023-01-01", "2023-01-02", "2023-01-03"]).await;

        for cmp in [DateComparison::Chronological, DateComparison::Lexicographic] {
            let log = ExerciseRepo::new(&pool)
                .log(&user_id, &filter(None, None, Some("1")), cmp)
                .await
                .unwrap();
            assert_eq!(dates(&log), vec!["Sun Jan 01 2023"], "{cmp}");
        }
    }

    #[tokio::test]
    async fn chronological_bounds_span_months_and_years() {
        let pool = open_memory_pool().await.unwrap();
        let user_id = seed(&pool, &["2022-12-30", "2023-01-05", "2023-02-10", "2023-03-01"]).await;

        let log = ExerciseRepo::new(&pool)
            .log(
                &user_id,
                &filter(Some("2022-12-31"), Some("2023-02-10"), None),
                DateComparison::Chronological,
            )
            .await
            .unwrap();

        assert_eq!(dates(&log), vec!["Thu Jan 05 2023", "Fri Feb 10 2023"]);
    }

    #[tokio::test]
    async fn future_from_bound_excludes_past_entries() {
        let pool = open_memory_pool().await.unwrap();
        let user_id = seed(&pool, &["2023-01-11", "2024-06-01"]).await;

        let log = ExerciseRepo::new(&pool)
            .log(&user_id, &filter(Some("2099-01-01"), None, None), DateComparison::Chronological)
            .await
            .unwrap();

        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn lexicographic_mode_compares_strings() {
        let pool = open_memory_pool().await.unwrap();
        // Wed Jan 11 2023, Sat Jun 01 2024
        let user_id = seed(&pool, &["2023-01-11", "2024-06-01"]).await;

        let log = ExerciseRepo::new(&pool)
            .log(&user_id, &filter(Some("2099-01-01"), None, None), DateComparison::Lexicographic)
            .await
            .unwrap();

        // "Wed..." >= "Thu Jan 01 2099" as text; "Sat..." is not
        assert_eq!(dates(&log), vec!["Wed Jan 11 2023"]);
    }

    #[tokio::test]
    async fn log_only_contains_own_entries() {
        let pool = open_memory_pool().await.unwrap();
        let alice = seed(&pool, &["2023-01-01", "2023-01-02"]).await;
        let bob = UserRepo::new(&pool)
            .create(Username::new("bob").unwrap())
            .await
            .unwrap();

        let repo = ExerciseRepo::new(&pool);
        let log = repo
            .log(&bob.id, &LogFilter::default(), DateComparison::Chronological)
            .await
            .unwrap();
        assert!(log.is_empty());

        let log = repo
            .log(&alice, &LogFilter::default(), DateComparison::Chronological)
            .await
            .unwrap();
        assert_eq!(log.len(), 2);
    }
}
