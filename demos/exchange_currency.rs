use anyhow::Context;
use revolut_business::{
    apis::{
        auth::Credentials,
        exchange::{ExchangeAmountBuilder, ExchangeRateRequest, ExchangeRequestBuilder},
    },
    client::Environment,
    RevolutClient,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    client_id: String,
    issuer: String,
    private_key: String,
    refresh_token: String,
    gbp_account_id: String,
    eur_account_id: String,
    #[serde(default = "default_sandbox")]
    sandbox: bool,
}

fn default_sandbox() -> bool {
    true
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup Revolut client
    let revolut = RevolutClient::builder(Credentials::new(
        config.client_id,
        config.issuer,
        config.private_key,
    ))
    .with_environment(Environment::from_sandbox_flag(config.sandbox))
    .build()?;

    tracing::info!(
        "Authorise the application at: {}",
        revolut
            .oauth
            .authorisation_url("https://example.com/callback")?
    );

    // Obtain a fresh access token
    let token = revolut
        .oauth
        .refresh_access_token(&config.refresh_token.into())
        .await?;
    tracing::info!("Access token expires in {}s", token.expires_in);

    let exchange = revolut.exchange(&token.access_token)?;

    // Quote the rate first
    let quote = exchange
        .rate(&ExchangeRateRequest {
            amount: 10.0,
            ..ExchangeRateRequest::new("GBP", "EUR")
        })
        .await?;
    tracing::info!(
        "{:.2} {} = {:.2} {} (rate {}, fee {:.2} {})",
        quote.from.amount,
        quote.from.currency,
        quote.to.amount,
        quote.to.currency,
        quote.rate,
        quote.fee.amount,
        quote.fee.currency
    );

    // Then sell 10 GBP for EUR
    let res = exchange
        .exchange(
            &ExchangeRequestBuilder::default()
                .from(
                    ExchangeAmountBuilder::default()
                        .account_id(config.gbp_account_id)
                        .currency("GBP")
                        .amount(10.0)
                        .build()?,
                )
                .to(ExchangeAmountBuilder::default()
                    .account_id(config.eur_account_id)
                    .currency("EUR")
                    .build()?)
                .reference("Exchange demo")
                .build()?,
        )
        .await?;

    tracing::info!("{:#?}", res);

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
