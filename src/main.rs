use tracing::{error, info, Level};

use aave_rates::{
    configuration::{
        get_configuration, set_configuration, AppState, Config, State,
    },
    error::Error,
    provider::EthRpc,
    registry, server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let (config, eth) = match init() {
        Ok((config, eth)) => (config, eth),
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    info!(
        "tracking {} reserves via {}",
        registry::tracked_assets().len(),
        config.rpc_url
    );

    let state = State::new(config, eth);
    let app_state = AppState::new(state);

    server::server_task(&app_state).await
}

fn init() -> Result<(Config, EthRpc), Error> {
    set_configuration()?;
    let config = get_configuration()?;
    let eth = EthRpc::new(config.clone())?;
    Ok((config, eth))
}
