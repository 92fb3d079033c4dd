/// Segment normalization for taxonomy comparison
///
/// Pure and total: every input, `""` included, has a key.
///
/// Normalized keys are only ever compared against other normalized keys.
/// Descriptor fields always keep the raw segment text.

/// Canonicalizes a raw URL segment into its comparison key
///
/// Lower-cases the segment and folds hyphen-separated words into a single
/// camelCase token. Existing camelCase boundaries count as word boundaries,
/// so the function is idempotent.
///
/// # Examples
///
/// ```
/// use paperpath_router::normalize;
///
/// assert_eq!(normalize("o-level"), "oLevel");
/// assert_eq!(normalize("O-Level"), "oLevel");
/// assert_eq!(normalize("PAST-PAPERS"), "pastPapers");
/// assert_eq!(normalize("MDCAT"), "mdcat");
/// assert_eq!(normalize("9th"), "9th");
/// assert_eq!(normalize(""), "");
///
/// let once = normalize("1st-Year");
/// assert_eq!(normalize(&once), once);
/// ```
pub fn normalize(segment: &str) -> String {
    let mut normalized = String::with_capacity(segment.len());

    for (index, word) in words(segment).enumerate() {
        if index == 0 {
            normalized.extend(word.chars().flat_map(char::to_lowercase));
        } else {
            push_capitalized(&mut normalized, word);
        }
    }

    normalized
}

/// Splits a segment into its hyphen and camelCase words, dropping empty ones
pub(crate) fn words(segment: &str) -> impl Iterator<Item = &str> {
    segment
        .split('-')
        .flat_map(split_camel)
        .filter(|word| !word.is_empty())
}

/// Splits one hyphen-free piece at camelCase boundaries
///
/// A boundary sits before every uppercase letter, except inside an
/// uppercase run that opens the piece (`MDCAT`, `PDFNotes` stay whole).
pub(crate) fn split_camel(piece: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut leading_run = true;
    let mut prev_upper = false;

    for (idx, ch) in piece.char_indices() {
        let upper = ch.is_uppercase();
        if idx > 0 && upper && !(prev_upper && leading_run) {
            words.push(&piece[start..idx]);
            start = idx;
        }
        if !upper {
            leading_run = false;
        }
        prev_upper = upper;
    }

    words.push(&piece[start..]);
    words
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}
