//! Text casing helpers.

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
///
/// Any non-letter starts a new run, so `"year 7-higher"` becomes
/// `"Year 7-Higher"` and `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
