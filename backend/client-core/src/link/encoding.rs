/// Characters `urlencoding` escapes that URI components leave as-is.
const COMPONENT_SAFE_ESCAPES: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// Percent-encode a query value with URI component rules.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped as UTF-8
/// `%XX` sequences, so a space becomes `%20` rather than `+`.
pub fn encode_component(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escaped, literal) in COMPONENT_SAFE_ESCAPES {
        if encoded.contains(escaped) {
            encoded = encoded.replace(escaped, literal);
        }
    }
    encoded
}
