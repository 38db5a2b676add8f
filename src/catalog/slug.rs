//! Slug and duration helpers shared by catalog loading and lookup.

/// Build a URL slug from a product name.
///
/// Lowercases, turns each run of whitespace into a single `-`, then drops
/// everything outside `[a-z0-9-]`.
///
/// ```
/// use travelgenie_web::catalog::slugify;
///
/// assert_eq!(slugify("Liverpool vs Manchester United"), "liverpool-vs-manchester-united");
/// assert_eq!(slugify("Singapore F1 Grand Prix!"), "singapore-f1-grand-prix");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug
}

/// Extract the night count from a duration such as `"5 Days / 4 Nights"`.
pub fn nights_from_duration(duration: &str) -> Option<u32> {
    let (_, nights) = duration.split_once('/')?;
    nights.split_whitespace().next()?.parse().ok()
}
