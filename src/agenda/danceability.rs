use crate::agenda::model::Event;

pub const DANCE_KEYWORDS: [&str; 19] = [
    "soul",
    "funk",
    "funky",
    "disco",
    "groove",
    "jazz",
    "jazz-funk",
    "latin",
    "latin jazz",
    "pop",
    "r&b",
    "rhythm and blues",
    "swing",
    "big band",
    "baile",
    "dance",
    "fiesta",
    "dj set",
    "jam",
];

/**
Whether any keyword appears in the text, ignoring case.

Plain substring search: "pop" also matches inside "popular".
*/
pub fn is_danceable(text: &str) -> bool {
    let text = text.to_lowercase();

    DANCE_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

pub fn is_danceable_event(event: &Event) -> bool {
    is_danceable(&event.raw_genre_text)
}
