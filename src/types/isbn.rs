pub fn is_isbn_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'X' || c == '-'
}

pub fn display_isbn(raw: &str) -> String {
    raw.parse::<isbn2::Isbn>()
        .ok()
        .and_then(|isbn| isbn.hyphenate().ok())
        .map(|hyphenated| hyphenated.to_string())
        .unwrap_or_else(|| raw.to_string())
}
