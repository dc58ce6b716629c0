use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::models::vacancy::VacancyRecord;
use crate::services::hh_client::VacancySource;

/// Pause applied after every successfully collected vacancy.
#[async_trait]
pub trait Throttle: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a fixed duration. Used against the real API.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl Throttle for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Throttle for NoDelay {
    async fn pause(&self) {}
}

#[derive(Debug, Clone)]
pub struct CollectQuery {
    pub text: String,
    pub page_count: u32,
    pub per_page: u32,
}

/// Outcome of one collector run.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub records: Vec<VacancyRecord>,
    pub failed_pages: Vec<u32>,
    pub failed_items: Vec<String>,
}

pub struct CollectorService<S, T> {
    source: S,
    throttle: T,
}

impl<S, T> CollectorService<S, T>
where
    S: VacancySource,
    T: Throttle,
{
    pub fn new(source: S, throttle: T) -> Self {
        Self { source, throttle }
    }

    /// Walks pages `0..page_count` one request at a time.
    ///
    /// Failed pages and items are logged and skipped; the run never aborts.
    /// Records keep encounter order and duplicate ids are kept as-is.
    #[instrument(skip(self), fields(text = %query.text))]
    pub async fn collect(&self, query: &CollectQuery) -> CollectReport {
        let mut report = CollectReport::default();

        for page in 0..query.page_count {
            info!(page = page + 1, total = query.page_count, "Parsing search page");

            let listing = match self
                .source
                .search_page(&query.text, page, query.per_page)
                .await
            {
                Ok(listing) => listing,
                Err(e) => {
                    warn!(page, error = %e, "Search page failed, skipping");
                    report.failed_pages.push(page);
                    continue;
                }
            };

            for item in listing.items {
                let Some(vacancy_id) = item.id else {
                    warn!(page, "Search item has no id, skipping");
                    continue;
                };

                let record = match self.source.vacancy_detail(&vacancy_id).await {
                    Ok(detail) => VacancyRecord::try_from(detail),
                    Err(e) => Err(e),
                };

                match record {
                    Ok(record) => report.records.push(record),
                    Err(e) => {
                        warn!(vacancy_id = %vacancy_id, error = %e, "Vacancy fetch failed, skipping");
                        report.failed_items.push(vacancy_id);
                        continue;
                    }
                }

                self.throttle.pause().await;
            }
        }

        info!(
            collected = report.records.len(),
            failed_pages = report.failed_pages.len(),
            failed_items = report.failed_items.len(),
            "Collection finished"
        );
        report
    }
}
