//! Test utilities and helper functions for the placescrape test suite

use async_trait::async_trait;
use calamine::{Reader, Xlsx, open_workbook};
use mockito::{Matcher, Mock, Server};
use placescrape::{
    FetchError, OrganicResult, PageSource, ProgressReporter, RunReport, ScrapeConfig,
    SearchError, SearchProvider,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Ordered, timestamped log of events shared between stubs
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct EventLog(Arc<Mutex<Vec<(Instant, String)>>>);

#[allow(dead_code)]
impl EventLog {
    pub fn push(&self, label: impl Into<String>) {
        self.0.lock().unwrap().push((Instant::now(), label.into()));
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().map(|(_, l)| l.clone()).collect()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels().iter().position(|l| l == label)
    }

    pub fn time_of(&self, label: &str) -> Option<Instant> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .find(|(_, l)| l == label)
            .map(|(at, _)| *at)
    }
}

/// Search provider answering from a fixed table, keyed by query phrase
///
/// A `Err(status)` entry simulates a non-2xx search API response.
#[allow(dead_code)]
pub struct StubSearch {
    pub responses: HashMap<String, Result<Vec<OrganicResult>, u16>>,
    pub log: EventLog,
}

#[allow(dead_code)]
impl StubSearch {
    pub fn new(log: EventLog) -> Self {
        Self {
            responses: HashMap::new(),
            log,
        }
    }

    pub fn with(mut self, query: &str, response: Result<Vec<OrganicResult>, u16>) -> Self {
        self.responses.insert(query.to_string(), response);
        self
    }
}

#[async_trait]
impl SearchProvider for StubSearch {
    async fn search(
        &self,
        query: &str,
        _num_results: usize,
    ) -> Result<Vec<OrganicResult>, SearchError> {
        self.log.push(format!("search:{query}"));
        match self.responses.get(query) {
            Some(Ok(results)) => Ok(results.clone()),
            Some(Err(status)) => Err(SearchError::ApiError {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Page source with a per-URL latency and result
#[allow(dead_code)]
pub struct StubPages {
    pub pages: HashMap<String, (Duration, Result<String, u16>)>,
    pub log: EventLog,
}

#[allow(dead_code)]
impl StubPages {
    pub fn new(log: EventLog) -> Self {
        Self {
            pages: HashMap::new(),
            log,
        }
    }

    pub fn with(mut self, url: &str, latency: Duration, body: Result<&str, u16>) -> Self {
        self.pages
            .insert(url.to_string(), (latency, body.map(str::to_string)));
        self
    }
}

#[async_trait]
impl PageSource for StubPages {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.log.push(format!("fetch-start:{url}"));
        let entry = self.pages.get(url).cloned();
        let result = match entry {
            Some((latency, body)) => {
                tokio::time::sleep(latency).await;
                body.map_err(|status| FetchError::Status { status })
            }
            None => Err(FetchError::Status { status: 404 }),
        };
        self.log.push(format!("fetch-done:{url}"));
        result
    }
}

/// Progress reporter that writes batch merges into an [`EventLog`]
#[allow(dead_code)]
pub struct RecordingProgress {
    pub log: EventLog,
}

impl ProgressReporter for RecordingProgress {
    fn report_query_started(&self, _place_type: &str, _query: &str) {}

    fn report_query_failed(&self, place_type: &str, _error: &SearchError) {
        self.log.push(format!("failed:{place_type}"));
    }

    fn report_batch_merged(&self, place_type: &str, _records: usize) {
        self.log.push(format!("merged:{place_type}"));
    }

    fn report_completed(&self, _report: &RunReport) {
        self.log.push("completed");
    }
}

/// In-memory sink for formatted log lines
///
/// `install` makes it the thread's default subscriber until the guard drops.
/// `#[tokio::test]` runs on a current-thread runtime, so every event of the
/// test lands here.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_env_filter(tracing_subscriber::EnvFilter::new("placescrape=debug"))
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Lines emitted at `level` (`"WARN"`, `"ERROR"`, ...)
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().any(|word| word == level))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Minimal valid config for Lahore with no throttling
#[allow(dead_code)]
pub fn test_config<I, S>(place_types: I) -> ScrapeConfig
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ScrapeConfig::builder()
        .api_key("test-key")
        .city("Lahore")
        .place_types(place_types)
        .query_delay_secs(0)
        .build()
        .unwrap()
}

/// Build a SerpApi-style JSON body from (title, snippet, link) triples
#[allow(dead_code)]
pub fn serp_body(results: &[(&str, &str, &str)]) -> String {
    let organic: Vec<serde_json::Value> = results
        .iter()
        .enumerate()
        .map(|(i, (title, snippet, link))| {
            serde_json::json!({
                "position": i + 1,
                "title": title,
                "snippet": snippet,
                "link": link,
            })
        })
        .collect();
    serde_json::json!({
        "search_metadata": { "status": "Success" },
        "organic_results": organic,
    })
    .to_string()
}

/// Mock the search endpoint for one query
#[allow(dead_code)]
pub async fn create_search_mock(
    server: &mut Server,
    query: &str,
    num: usize,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("engine".into(), "google".into()),
            Matcher::UrlEncoded("q".into(), query.into()),
            Matcher::UrlEncoded("num".into(), num.to_string()),
            Matcher::UrlEncoded("api_key".into(), "test-key".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub async fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create_async()
        .await
}

/// Start a server that accepts connections and never answers
///
/// Returns its base URL. Requests against it only end through a timeout.
#[allow(dead_code)]
pub async fn spawn_silent_server() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    (format!("http://{addr}"), handle)
}

/// Read every row of the records worksheet as strings
#[allow(dead_code)]
pub fn read_xlsx_rows(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook
        .worksheet_range(placescrape::exporter::WORKSHEET_NAME)
        .unwrap();
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
