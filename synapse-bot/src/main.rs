mod events;

use std::env;
use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use synapse_core::{Data, Error};
use synapse_llm::{GatewayConfig, ResponsePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;
    let guild_id = parse_guild_id(env::var("DISCORD_GUILD_ID").ok())?;

    let config = GatewayConfig::from_env()?;
    let pipeline = Arc::new(ResponsePipeline::from_config(&config)?);
    info!(
        models = ?pipeline.gateway().models(),
        endpoint = %config.endpoint,
        max_tokens = config.params.max_tokens,
        temperature = config.params.temperature,
        "model gateway configured."
    );

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: synapse_commands::commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(synapse_utils::COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            let pipeline = pipeline.clone();
            Box::pin(async move {
                info!("Synapse is online.");

                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        info!(guild_id, "registered commands in guild.");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        info!("registered commands globally.");
                    }
                }

                Ok(Data { pipeline })
            })
        })
        .build();

    info!("Synapse is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

/// Blank means "register globally"; anything else must be a snowflake.
fn parse_guild_id(raw: Option<String>) -> anyhow::Result<Option<u64>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("DISCORD_GUILD_ID is not a valid id: {value:?}")),
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, command = %ctx.command().qualified_name, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(synapse_utils::embed::DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = synapse_commands::COMMANDS
                .iter()
                .find(|meta| meta.name == ctx.command().name)
                .map(|meta| meta.usage.to_owned())
                .unwrap_or_else(|| format!("!{}", ctx.command().qualified_name));
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\nUsage: `{}`", input, usage)
            } else {
                format!("Missing required argument.\nUsage: `{}`", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        events::llm_events::handle_message_mention_llm(ctx, data, new_message).await?;
    }

    Ok(())
}
