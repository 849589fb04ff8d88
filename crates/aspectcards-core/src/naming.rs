//! Deterministic output file names.

/// Tag used for per-card files when a card carries no display name.
pub const FALLBACK_TAG: &str = "card";

/// Lower-case, hyphen-joined name built from card/action/art names.
///
/// Whitespace inside a part becomes a hyphen; anything that is not
/// alphanumeric is dropped so the result is always a safe file stem.
pub fn slug<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| slug_part(part.as_ref()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn slug_part(part: &str) -> String {
    part.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// File name of one card inside the `cards` subdirectory: `NN_tag.png`.
///
/// Missing or empty tags use [`FALLBACK_TAG`].
pub fn card_file_name(index: usize, tag: Option<&str>) -> String {
    let tag = tag.filter(|t| !t.is_empty()).unwrap_or(FALLBACK_TAG);
    format!("{:02}_{}.png", index, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_joins_and_folds_case() {
        assert_eq!(slug(["Aggression", "Strike"]), "aggression-strike");
        assert_eq!(slug(["Evasion"]), "evasion");
    }

    #[test]
    fn test_slug_normalizes_parts() {
        assert_eq!(slug(["Old  Growth", "Take Root!"]), "old-growth-take-root");
        assert_eq!(slug(["", "Any"]), "any");
        assert_eq!(slug(["???"]), "");
    }

    #[test]
    fn test_card_file_name() {
        assert_eq!(card_file_name(0, Some("aggression")), "00_aggression.png");
        assert_eq!(card_file_name(4, None), "04_card.png");
        assert_eq!(card_file_name(12, Some("x")), "12_x.png");
        assert_eq!(card_file_name(0, Some("")), "00_card.png");
    }
}
