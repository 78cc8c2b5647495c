use poise::CreateReply;

use crate::utility::embeds::{HELP_FOOTER, grouped_help_description, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use synapse_core::{Context, Error};
use synapse_utils::embed::build_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Only show commands in this category"] category: Option<String>,
) -> Result<(), Error> {
    let category = category
        .as_deref()
        .map(|raw| raw.trim().to_ascii_lowercase())
        .filter(|raw| !raw.is_empty());

    let categories = known_categories();
    if let Some(wanted) = category.as_deref()
        && !categories.contains(&wanted)
    {
        ctx.say(unknown_category_message(wanted, &categories)).await?;
        return Ok(());
    }

    let commands = sorted_commands(category.as_deref());
    let embed = build_embed(
        "Synapse Commands",
        grouped_help_description(&commands),
        Some(HELP_FOOTER),
    );
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn known_categories() -> Vec<&'static str> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}
