use synapse_core::{Context, Error};

use crate::CommandMeta;
use crate::assistant::reply::answer_query;

pub const META: CommandMeta = CommandMeta {
    name: "medinfo",
    desc: "Get information about medical conditions and treatments.",
    category: "medical",
    usage: "!medinfo <topic>",
};

const FAILURE_MESSAGE: &str =
    "I encountered an error while retrieving information. Please try again later.";

pub fn medinfo_query(topic: &str) -> String {
    format!(
        "Provide information about \"{}\". Include symptoms, causes, and general treatment approaches if applicable.",
        topic.trim()
    )
}

#[poise::command(prefix_command, slash_command, category = "Medical")]
pub async fn medinfo(
    ctx: Context<'_>,
    #[description = "The medical topic you want to learn about"]
    #[rest]
    topic: String,
) -> Result<(), Error> {
    answer_query(ctx, &medinfo_query(&topic), FAILURE_MESSAGE).await
}

#[cfg(test)]
mod tests {
    use super::medinfo_query;

    #[test]
    fn wraps_the_topic_in_a_question() {
        assert_eq!(
            medinfo_query("  migraine "),
            "Provide information about \"migraine\". Include symptoms, causes, and general treatment approaches if applicable."
        );
    }
}
