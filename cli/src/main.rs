use anyhow::{bail, Context};
use chrono::{Duration, Utc};
use poynt_rust::{
    apis::{orders::OrdersQueryBuilder, transactions::TransactionsQueryBuilder},
    client::{Environment, Region},
    PoyntClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    application_id: String,
    /// Path to the PEM encoded private key of the application.
    private_key_file: String,
    business_id: String,
    #[serde(default)]
    environment: String,
    #[serde(default)]
    region: String,
    /// Overrides the API base URL resolved from environment and region.
    api_url: Option<String>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            // `./poynt.toml`, if any
            .add_source(config::File::with_name("poynt").required(false))
            // e.g. `POYNT_APPLICATION_ID`
            .add_source(config::Environment::with_prefix("POYNT"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

fn usage() -> &'static str {
    "Usage: cli <business|orders|transactions> [days]"
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;
    let mut args = std::env::args().skip(1);
    let command = args.next().context(usage())?;
    let days = match args.next() {
        Some(days) => days.parse().context("Invalid number of days")?,
        None => 7,
    };

    let mut builder = PoyntClient::builder_with_key_file(&config.application_id, &config.private_key_file)?
        .with_environment(config.environment.parse::<Environment>()?)
        .with_region(config.region.parse::<Region>()?);
    if let Some(api_url) = &config.api_url {
        builder = builder.with_api_url(api_url);
    }
    let poynt = builder.build();

    match command.as_str() {
        "business" => {
            let business = poynt.businesses.get_business(&config.business_id).await?;
            tracing::info!("{:#}", business);
        }
        "orders" => {
            let query = OrdersQueryBuilder::default()
                .start_at(Utc::now() - Duration::days(days))
                .limit(100u32)
                .build()?;
            let orders = poynt.orders.get_orders(&config.business_id, &query).await?;
            let orders = orders["orders"].as_array().cloned().unwrap_or_default();
            tracing::info!("Found {} orders in the last {} days", orders.len(), days);
            for order in &orders {
                tracing::info!(
                    "Order {}: {} {}",
                    order["id"],
                    order["amounts"]["netTotal"],
                    order["amounts"]["currency"]
                );
            }
        }
        "transactions" => {
            let query = TransactionsQueryBuilder::default()
                .start_at(Utc::now() - Duration::days(days))
                .limit(100u32)
                .build()?;
            let transactions = poynt
                .transactions
                .get_transactions(&config.business_id, &query)
                .await?;
            let transactions = transactions["transactions"]
                .as_array()
                .cloned()
                .unwrap_or_default();
            tracing::info!(
                "Found {} transactions in the last {} days",
                transactions.len(),
                days
            );
            for transaction in &transactions {
                tracing::info!(
                    "Transaction {}: {} {} ({})",
                    transaction["id"],
                    transaction["action"],
                    transaction["status"],
                    transaction["amounts"]["transactionAmount"]
                );
            }
        }
        other => bail!("Unknown command {}. {}", other, usage()),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
