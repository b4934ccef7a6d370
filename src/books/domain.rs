use crate::core::library::BookStatus;

pub mod model;

pub trait Book: Sync + Send {
    fn title(&self) -> &str;
    fn status(&self) -> BookStatus;

    fn is_borrowed(&self) -> bool {
        self.status() == BookStatus::Borrowed
    }

    // exact title match ignoring case, compared one character at a time
    fn has_title(&self, title: &str) -> bool {
        let own = self.title();
        own.chars().count() == title.chars().count()
            && own.chars().zip(title.chars()).all(|(a, b)| same_char_ignoring_case(a, b))
    }
}

// Uses single-character case mappings only, so a final sigma or a dotted capital I
// compares like any other letter instead of expanding the string.
fn same_char_ignoring_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
