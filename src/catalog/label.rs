// Display label derivation from remote filenames.

/// Suffix stripped from badge filenames before title-casing. Names that do
/// not end with this exact string keep their extension in the label.
const VECTOR_SUFFIX: &str = "_vector.svg";

/// Derive a display label from a directory or file name.
///
/// Hyphens become spaces, a trailing `_vector.svg` is stripped, and each
/// word gets its first character uppercased. Empty words (from repeated or
/// leading hyphens) are skipped.
pub fn derive_label(name: &str) -> String {
    let spaced = name.replace('-', " ");
    let filtered = spaced.strip_suffix(VECTOR_SUFFIX).unwrap_or(&spaced);

    let mut label = String::with_capacity(filtered.len());
    for word in filtered.split(' ') {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        label.extend(first.to_uppercase());
        label.push_str(chars.as_str());
        label.push(' ');
    }

    label.trim_end().to_string()
}
