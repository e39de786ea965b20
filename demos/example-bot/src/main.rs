//! Runs [`ExampleBot`] on the default bot port.

mod bot;

use skylords_bot::prelude::*;
use skylords_bot::protocol::ProtocolError;

use crate::bot::ExampleBot;

#[tokio::main]
async fn main() -> Result<(), BotError> {
    skylords_bot::init_logging();

    let bind = std::env::var("BOT_BIND").unwrap_or_else(|_| skylords_bot::DEFAULT_BIND.to_string());
    let bot = ExampleBot::new(&TemplateCatalog::builtin()).map_err(ProtocolError::from)?;

    BotServer::<ExampleBot>::builder().bind(&bind).build(bot).run().await
}
