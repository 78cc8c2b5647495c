use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};

use synapse_commands::assistant::reply::{failure_message, reply_chunks};
use synapse_core::{Data, Error};
use synapse_utils::COMMAND_PREFIX;
use synapse_utils::mention::strip_user_mention;

const FAILURE_MESSAGE: &str =
    "I encountered an error while processing your request. Please try again later.";

/// Answer messages that mention the bot, and every direct message, through the
/// response pipeline.
pub async fn handle_message_mention_llm(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) -> Result<(), Error> {
    // Ignore bots and webhooks.
    if message.author.bot || message.webhook_id.is_some() {
        return Ok(());
    }

    let bot_user_id = ctx.cache.current_user().id;
    let is_direct = message.guild_id.is_none();
    if !is_direct && !message.mentions_user_id(bot_user_id) {
        return Ok(());
    }

    // Prefix commands in DMs are handled by the framework.
    if is_direct && message.content.trim_start().starts_with(COMMAND_PREFIX) {
        return Ok(());
    }

    let query = strip_user_mention(&message.content, bot_user_id.get());
    info!(
        author_id = message.author.id.get(),
        channel_id = message.channel_id.get(),
        direct = is_direct,
        "answering conversational message"
    );

    let typing = message.channel_id.start_typing(&ctx.http);
    let outcome = data.pipeline.respond(&query).await;
    typing.stop();

    match outcome {
        Ok(answer) => {
            debug!(origin = ?answer.origin, "conversational message answered");
            let mut chunks = reply_chunks(&answer.text).into_iter();
            if let Some(first) = chunks.next() {
                message.reply(ctx, first).await?;
            }
            for chunk in chunks {
                message.channel_id.say(&ctx.http, chunk).await?;
            }
        }
        Err(source) => {
            error!(
                ?source,
                category = ?source.category(),
                last_model = source.last_attempt().model(),
                "failed to answer conversational message"
            );
            message
                .reply(ctx, failure_message(source.category(), FAILURE_MESSAGE))
                .await?;
        }
    }

    Ok(())
}
