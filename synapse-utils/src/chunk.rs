/// Maximum characters Discord accepts in one message.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Split `text` into pieces of at most `limit` characters, breaking on the last
/// newline, then the last space, inside each window. Words longer than the
/// window are hard-split.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut rest = text.trim();
    let mut chunks = Vec::new();

    while rest.chars().count() > limit {
        let hard_end = rest
            .char_indices()
            .nth(limit)
            .map_or(rest.len(), |(index, _)| index);
        let window = &rest[..hard_end];

        let split_at = window
            .rfind('\n')
            .or_else(|| window.rfind(' '))
            .filter(|index| *index > 0)
            .unwrap_or(hard_end);

        let (head, tail) = rest.split_at(split_at);
        chunks.push(head.trim_end().to_owned());
        rest = tail.trim_start();
    }

    if !rest.is_empty() {
        chunks.push(rest.to_owned());
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::{DISCORD_MESSAGE_LIMIT, split_message};

    #[test]
    fn short_text_is_one_chunk() {
        assert_eq!(split_message("  hello  ", DISCORD_MESSAGE_LIMIT), vec!["hello"]);
    }

    #[test]
    fn blank_text_yields_nothing() {
        assert!(split_message("   \n ", DISCORD_MESSAGE_LIMIT).is_empty());
    }

    #[test]
    fn prefers_line_breaks() {
        assert_eq!(
            split_message("first line\nsecond line", 15),
            vec!["first line", "second line"]
        );
    }

    #[test]
    fn falls_back_to_word_breaks() {
        assert_eq!(
            split_message("alpha beta gamma delta", 11),
            vec!["alpha beta", "gamma delta"]
        );
    }

    #[test]
    fn hard_splits_long_words() {
        assert_eq!(split_message("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "é".repeat(5);
        let chunks = split_message(&text, 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn every_chunk_fits_the_limit() {
        let text = "word ".repeat(1_000);
        let chunks = split_message(&text, DISCORD_MESSAGE_LIMIT);
        assert!(chunks.len() > 1);
        assert!(
            chunks
                .iter()
                .all(|chunk| chunk.chars().count() <= DISCORD_MESSAGE_LIMIT)
        );
    }
}
