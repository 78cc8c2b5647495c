/// Remove every mention of `user_id` (both `<@id>` and the nickname form
/// `<@!id>`) and trim what is left.
pub fn strip_user_mention(content: &str, user_id: u64) -> String {
    let nickname_form = format!("<@!{user_id}>");
    let plain_form = format!("<@{user_id}>");

    content
        .replace(&nickname_form, "")
        .replace(&plain_form, "")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::strip_user_mention;

    #[test]
    fn strips_both_mention_forms() {
        assert_eq!(strip_user_mention("<@42> what is a fever?", 42), "what is a fever?");
        assert_eq!(strip_user_mention("<@!42>   hi  ", 42), "hi");
        assert_eq!(strip_user_mention("hey <@42> and <@!42>", 42), "hey  and");
    }

    #[test]
    fn leaves_other_users_alone() {
        assert_eq!(strip_user_mention("<@7> <@42> ping", 42), "<@7>  ping");
    }

    #[test]
    fn mention_only_becomes_empty() {
        assert_eq!(strip_user_mention("<@42>", 42), "");
    }
}
