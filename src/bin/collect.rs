use tracing::info;
use tracing_subscriber::EnvFilter;
use vacancy_insights::{
    config::{get_config, init_config},
    services::{
        collector_service::{CollectQuery, CollectorService, FixedDelay},
        hh_client::HhClient,
        vacancy_store::write_vacancies,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    init_config()?;
    let config = get_config();

    let client = HhClient::from_config(config)?;
    let collector = CollectorService::new(client, FixedDelay(config.collect_delay));
    let query = CollectQuery {
        text: config.collect_query.clone(),
        page_count: config.collect_pages,
        per_page: config.collect_per_page,
    };

    info!(
        base_url = %config.hh_api_base_url,
        text = %query.text,
        pages = query.page_count,
        per_page = query.per_page,
        "Starting collector run"
    );
    let report = collector.collect(&query).await;

    write_vacancies(&config.data_file, &report.records).await?;
    info!(
        count = report.records.len(),
        path = %config.data_file.display(),
        "Saved full vacancies"
    );

    Ok(())
}
