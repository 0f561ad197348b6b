//! UTF-8-safe string truncation and joining utilities
//!
//! Detail snippets are cut to a character budget. Slicing a `&str` at an
//! arbitrary byte offset panics inside multi-byte characters, so every cut
//! goes through [`safe_truncate_chars`].

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Respects UTF-8 character boundaries and never panics, even with
/// multi-byte characters like Urdu script or emoji.
///
/// # Examples
/// ```
/// # use placescrape::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
///
/// // Urdu (2 bytes per character)
/// assert_eq!(safe_truncate_chars("لاہور کیفے", 5), "لاہور");
///
/// // Emoji (4 bytes each)
/// assert_eq!(safe_truncate_chars("☕🍰🥐", 2), "☕🍰");
///
/// // Shorter than the limit
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Join text fragments with single spaces, trimming each and dropping blanks.
///
/// Stops accumulating once `max_chars` characters have been produced, so a
/// huge page never builds a huge intermediate string.
///
/// # Examples
/// ```
/// # use placescrape::utils::string_utils::visible_text_join;
/// let parts = ["  Espresso ", "\n", "Bar\t"];
/// assert_eq!(visible_text_join(parts, 100), "Espresso Bar");
/// assert_eq!(visible_text_join(parts, 4), "Espr");
/// ```
pub fn visible_text_join<'a, I>(fragments: I, max_chars: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut joined = String::new();
    let mut char_count = 0;

    for fragment in fragments {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if char_count >= max_chars {
            break;
        }
        if char_count > 0 {
            joined.push(' ');
            char_count += 1;
        }
        joined.push_str(fragment);
        char_count += fragment.chars().count();
    }

    safe_truncate_chars(&joined, max_chars).to_string()
}
