//! Export file naming.
use uuid::Uuid;

const EXTENSION: &str = "pptx";
const FALLBACK_PREFIX: &str = "presentation";

/// Strip a deck title down to ASCII letters and digits.
///
/// Everything else is removed, including spaces, punctuation and non-Latin
/// scripts, so a Hebrew-only title yields an empty stem.
pub fn sanitize_file_stem(title: &str) -> String {
    title.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// File name for an exported deck.
///
/// Falls back to `presentation-<id>.pptx` with a random eight-character id
/// when nothing of the title survives sanitising.
///
/// ```rust
/// use deckhand::pipeline::export_file_name;
///
/// assert_eq!(export_file_name("Linear Algebra 101!"), "LinearAlgebra101.pptx");
/// assert!(export_file_name("שלום").starts_with("presentation-"));
/// ```
pub fn export_file_name(title: &str) -> String {
    let stem = sanitize_file_stem(title);
    if !stem.is_empty() {
        return format!("{stem}.{EXTENSION}");
    }

    let id = Uuid::new_v4().simple().to_string();
    let name = format!("{FALLBACK_PREFIX}-{}.{EXTENSION}", &id[..8]);
    tracing::debug!(title, file_name = %name, "title has no usable characters, using fallback name");
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_ascii_alphanumerics() {
        assert_eq!(sanitize_file_stem("Vectors & Matrices (Part 2)"), "VectorsMatricesPart2");
        assert_eq!(sanitize_file_stem("וקטורים"), "");
        assert_eq!(sanitize_file_stem("Ünïcode-ok"), "ncodeok");
    }

    #[test]
    fn test_fallback_name_shape() {
        let name = export_file_name("!!! ???");
        let id = name
            .strip_prefix("presentation-")
            .and_then(|rest| rest.strip_suffix(".pptx"))
            .unwrap();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fallback_names_differ() {
        assert_ne!(export_file_name(""), export_file_name(""));
    }
}
