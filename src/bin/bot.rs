use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;

use disco::core::{logging, Config};
use disco::messaging::{MessageQueue, RedisMessageQueue};
use disco::Bot;

/// Connect the relay if enabled. A broker that cannot be reached disables
/// the relay instead of stopping the bot.
async fn connect_relay(config: &Config) -> Option<Arc<dyn MessageQueue>> {
    if !config.relay_enabled {
        info!("Message relay disabled by configuration");
        return None;
    }

    match RedisMessageQueue::connect(&config.redis_url()).await {
        Ok(queue) => Some(Arc::new(queue) as Arc<dyn MessageQueue>),
        Err(e) => {
            error!("{e:#}. Message relay disabled.");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Without configuration, report through the default log files
            if logging::init_fallback().is_ok() {
                error!("Invalid configuration: {e:#}");
            }
            return Err(e);
        }
    };
    logging::init(&config)?;

    info!("Running Disco bot...");

    let relay = connect_relay(&config).await;
    let bot = Bot::new(&config, relay);

    bot.start().await.map_err(|e| {
        error!("{e:#}");
        e
    })
}
