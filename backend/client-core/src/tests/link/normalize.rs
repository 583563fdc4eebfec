use crate::link::normalize_source_input;

/// **VALUE**: Verifies the "Download" label copied from the TISS page is removed.
///
/// **WHY THIS MATTERS**: Most users triple-click the link line, which selects the
/// trailing label too. Without stripping it, verification fails with a confusing error.
#[test]
fn given_url_with_trailing_download_label_when_normalized_then_label_and_spaces_removed() {
    let raw = "https://example.com/cal?token=abc&locale=de   Download";

    assert_eq!(
        normalize_source_input(raw),
        "https://example.com/cal?token=abc&locale=de"
    );
}

#[test]
fn given_surrounding_whitespace_when_normalized_then_trimmed() {
    assert_eq!(
        normalize_source_input("  \thttps://example.com/cal?token=abc\n"),
        "https://example.com/cal?token=abc"
    );
}

/// **BUG THIS CATCHES**: Would catch a global replace that eats "Download" from
/// the middle of a URL.
#[test]
fn given_download_not_at_end_when_normalized_then_left_alone() {
    let raw = "https://example.com/Download/cal?token=abc";

    assert_eq!(normalize_source_input(raw), raw);
}

#[test]
fn given_label_followed_by_whitespace_when_normalized_then_still_stripped() {
    assert_eq!(
        normalize_source_input("https://example.com/x Download  "),
        "https://example.com/x"
    );
}

#[test]
fn given_repeated_label_when_normalized_then_only_last_one_stripped() {
    assert_eq!(
        normalize_source_input("https://example.com/x DownloadDownload"),
        "https://example.com/x Download"
    );
}

#[test]
fn given_empty_input_when_normalized_then_empty() {
    assert_eq!(normalize_source_input("   "), "");
    assert_eq!(normalize_source_input("Download"), "");
}
