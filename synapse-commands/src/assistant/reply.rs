use tracing::{debug, error};

use synapse_core::{Context, Error};
use synapse_llm::ErrorCategory;
use synapse_utils::chunk::{DISCORD_MESSAGE_LIMIT, split_message};

pub const EMPTY_ANSWER_MESSAGE: &str =
    "I don't have an answer for that right now. Could you rephrase the question?";

/// User-facing text for a failed answer. Categories with a clear remedy get
/// their own message; everything else uses the caller's `fallback`.
pub fn failure_message(category: ErrorCategory, fallback: &str) -> String {
    match category {
        ErrorCategory::Authentication => {
            "I couldn't authenticate with my AI service. Please let a server administrator know."
                .to_owned()
        }
        ErrorCategory::RateLimit => {
            "I'm receiving too many requests right now. Please try again in a moment.".to_owned()
        }
        ErrorCategory::Network => {
            "I couldn't reach my AI service. Please try again later.".to_owned()
        }
        ErrorCategory::Unknown => fallback.to_owned(),
    }
}

/// Discord-sized pieces of `text`, or a stand-in when the model returned nothing.
pub fn reply_chunks(text: &str) -> Vec<String> {
    let chunks = split_message(text, DISCORD_MESSAGE_LIMIT);
    if chunks.is_empty() {
        vec![EMPTY_ANSWER_MESSAGE.to_owned()]
    } else {
        chunks
    }
}

/// Run `query` through the response pipeline and reply in the invoking channel.
pub async fn answer_query(ctx: Context<'_>, query: &str, fallback: &str) -> Result<(), Error> {
    ctx.defer().await?;

    match ctx.data().pipeline.respond(query).await {
        Ok(answer) => {
            debug!(
                command = %ctx.command().qualified_name,
                origin = ?answer.origin,
                "command answered"
            );
            for chunk in reply_chunks(&answer.text) {
                ctx.say(chunk).await?;
            }
        }
        Err(source) => {
            error!(
                ?source,
                command = %ctx.command().qualified_name,
                category = ?source.category(),
                last_model = source.last_attempt().model(),
                "failed to answer command query"
            );
            ctx.say(failure_message(source.category(), fallback)).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use synapse_llm::ErrorCategory;

    use super::{EMPTY_ANSWER_MESSAGE, failure_message, reply_chunks};

    #[test]
    fn unknown_failures_use_the_command_fallback() {
        assert_eq!(
            failure_message(ErrorCategory::Unknown, "fallback text"),
            "fallback text"
        );
    }

    #[test]
    fn known_categories_get_specific_messages() {
        let messages = [
            failure_message(ErrorCategory::Authentication, "x"),
            failure_message(ErrorCategory::RateLimit, "x"),
            failure_message(ErrorCategory::Network, "x"),
        ];
        assert!(messages.iter().all(|message| message != "x"));
        assert!(messages[1].contains("too many requests"));
    }

    #[test]
    fn blank_answers_are_replaced() {
        assert_eq!(reply_chunks("  \n"), vec![EMPTY_ANSWER_MESSAGE]);
        assert_eq!(reply_chunks("Drink water."), vec!["Drink water."]);
    }
}
