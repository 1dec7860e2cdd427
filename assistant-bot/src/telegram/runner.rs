//! REPL runner: converts teloxide messages to core::Message and runs the HandlerChain on each.

use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;
use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling. Updates from one chat are handled in order; different chats run
/// concurrently. A failing chain is logged and the update dropped without a reply.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                kind = ?core_msg.kind,
                "step: processing message (handler chain started)"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
