use crate::config::Config;
use crate::core::fetcher::Fetcher;
use crate::core::writer;
use crate::domain::model::{RawRecord, TodoRecord};
use crate::domain::ports::{Clock, Storage};
use crate::utils::error::{Result, ServiceError};

/// Aggregate outcome of one run. `written + skipped` equals the number of
/// fetched records; both stay zero when the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunReport {
    pub fetch_succeeded: bool,
    pub written: usize,
    pub skipped: usize,
}

pub struct TodoService<S: Storage, C: Clock> {
    fetcher: Fetcher,
    storage: S,
    clock: C,
}

impl<S: Storage, C: Clock> TodoService<S, C> {
    pub fn new(config: &Config, storage: S, clock: C) -> Self {
        Self {
            fetcher: Fetcher::new(config.api_endpoint.clone()),
            storage,
            clock,
        }
    }

    /// One full fetch-and-persist pass. Directory creation failure is the
    /// only fatal outcome. A failed fetch ends the run early with an empty
    /// report; per-record failures are logged and skipped, never aborting
    /// the batch.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("running todo service");

        self.storage.ensure_dir().await?;

        let Some(records) = self.fetcher.fetch().await else {
            return Ok(RunReport::default());
        };

        let mut report = RunReport {
            fetch_succeeded: true,
            written: 0,
            skipped: 0,
        };
        for raw in &records {
            match self.process(raw).await {
                Ok(file_name) => {
                    tracing::debug!("wrote {}", file_name);
                    report.written += 1;
                }
                Err(e) => {
                    tracing::warn!("error processing todo: {}", e);
                    report.skipped += 1;
                }
            }
        }

        // Reported whenever the fetch itself succeeded, however many
        // individual records were skipped.
        tracing::info!("todos fetched and saved as CSV files successfully");
        Ok(report)
    }

    async fn process(&self, raw: &RawRecord) -> Result<String> {
        let record = TodoRecord::from_raw(raw)?;
        let file_name = writer::file_name(self.clock.today(), &record.id);
        let data = writer::render_csv(&record)?;
        self.storage
            .write_file(&file_name, &data)
            .await
            .map_err(|source| ServiceError::WriteFailed {
                file_name: file_name.clone(),
                source,
            })?;
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, name: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(name).cloned()
        }

        async fn file_count(&self) -> usize {
            self.files.lock().await.len()
        }
    }

    impl Storage for MockStorage {
        async fn ensure_dir(&self) -> io::Result<()> {
            Ok(())
        }

        async fn write_file(&self, name: &str, data: &[u8]) -> io::Result<()> {
            let mut files = self.files.lock().await;
            files.insert(name.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FailingStorage {
        dir_fails: bool,
    }

    impl Storage for FailingStorage {
        async fn ensure_dir(&self) -> io::Result<()> {
            if self.dir_fails {
                Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "cannot create directory",
                ))
            } else {
                Ok(())
            }
        }

        async fn write_file(&self, _name: &str, _data: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "disk full"))
        }
    }

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    fn config_for(server: &MockServer) -> Config {
        Config {
            api_endpoint: server.url("/todos"),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_run_writes_one_file_per_record() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/todos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {"id": 1, "userId": 1, "title": "Todo 1", "completed": false},
                    {"id": 2, "userId": 1, "title": "Todo 2", "completed": true}
                ]));
        });

        let storage = MockStorage::new();
        let service = TodoService::new(&config_for(&server), storage.clone(), fixed_clock());

        let report = service.run().await.unwrap();

        api_mock.assert();
        assert_eq!(
            report,
            RunReport {
                fetch_succeeded: true,
                written: 2,
                skipped: 0
            }
        );

        let first = storage.get_file("2024_03_07_1.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "id,userId,title,completed\n1,1,Todo 1,false\n"
        );
        let second = storage.get_file("2024_03_07_2.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(second).unwrap(),
            "id,userId,title,completed\n2,1,Todo 2,true\n"
        );
    }

    #[tokio::test]
    async fn test_run_skips_incomplete_records_and_keeps_going() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/todos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {},
                    {"id": 2, "userId": 1, "title": "Todo 2", "completed": true},
                    {"id": 3, "userId": 1, "title": "no completed flag"}
                ]));
        });

        let storage = MockStorage::new();
        let service = TodoService::new(&config_for(&server), storage.clone(), fixed_clock());

        let report = service.run().await.unwrap();

        assert_eq!(
            report,
            RunReport {
                fetch_succeeded: true,
                written: 1,
                skipped: 2
            }
        );
        assert_eq!(storage.file_count().await, 1);
        assert!(storage.get_file("2024_03_07_2.csv").await.is_some());
    }

    #[tokio::test]
    async fn test_run_fetch_failure_writes_nothing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/todos");
            then.status(404);
        });

        let storage = MockStorage::new();
        let service = TodoService::new(&config_for(&server), storage.clone(), fixed_clock());

        let report = service.run().await.unwrap();

        assert_eq!(report, RunReport::default());
        assert_eq!(storage.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_run_write_failures_do_not_abort_the_batch() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/todos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {"id": 1, "userId": 1, "title": "Todo 1", "completed": false},
                    {"id": 2, "userId": 1, "title": "Todo 2", "completed": true}
                ]));
        });

        let storage = FailingStorage { dir_fails: false };
        let service = TodoService::new(&config_for(&server), storage, fixed_clock());

        let report = service.run().await.unwrap();

        api_mock.assert();
        assert_eq!(
            report,
            RunReport {
                fetch_succeeded: true,
                written: 0,
                skipped: 2
            }
        );
    }

    #[tokio::test]
    async fn test_run_directory_failure_is_fatal() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/todos");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([]));
        });

        let storage = FailingStorage { dir_fails: true };
        let service = TodoService::new(&config_for(&server), storage, fixed_clock());

        let err = service.run().await.unwrap_err();
        assert!(matches!(err, ServiceError::Io(_)));
        // Nothing is fetched when the directory cannot be created.
        api_mock.assert_hits(0);
    }
}
