use std::borrow::Cow;

/// Brand name that must never reach a user.
pub const FORBIDDEN_BRAND: &str = "BioFusion";
/// Name substituted wherever the forbidden brand appears.
pub const CANONICAL_BRAND: &str = "BioTech";

const FORBIDDEN_BRAND_LOWER: &str = "biofusion";

/// Whether `text` contains the forbidden brand in any ASCII casing.
pub fn mentions_brand(text: &str) -> bool {
    text.to_ascii_lowercase().contains(FORBIDDEN_BRAND_LOWER)
}

/// Replace every case-insensitive occurrence of the forbidden brand with the
/// canonical name, leaving all other bytes untouched.
pub fn replace_brand(text: &str) -> Cow<'_, str> {
    // ASCII lowercasing keeps byte offsets stable, so indices found in
    // `lowered` are valid char boundaries in `text`.
    let lowered = text.to_ascii_lowercase();
    let mut matches = lowered.match_indices(FORBIDDEN_BRAND_LOWER).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, matched) in matches {
        out.push_str(&text[cursor..start]);
        out.push_str(CANONICAL_BRAND);
        cursor = start + matched.len();
    }
    out.push_str(&text[cursor..]);

    Cow::Owned(out)
}
