use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

pub const PDF_SUFFIX: &str = ".pdf";

/// 302 Found, axum's `Redirect` only offers 303/307/308.
pub fn found(path: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, path)]).into_response()
}

pub fn is_pdf(filename: &str) -> bool {
    filename.ends_with(PDF_SUFFIX)
}

/// A single path component that can't climb out of the upload directory.
pub fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}

pub fn is_acceptable_upload(filename: &str) -> bool {
    is_pdf(filename) && is_plain_filename(filename)
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_suffix() {
        assert!(is_pdf("report.pdf"));
        assert!(is_pdf("archive.tar.pdf"));
        assert!(!is_pdf("notes.txt"));
        assert!(!is_pdf("report.PDF"));
        assert!(!is_pdf("report.pdf.exe"));
        assert!(!is_pdf(""));
    }

    #[test]
    fn test_plain_filename() {
        assert!(is_plain_filename("report.pdf"));
        assert!(is_plain_filename("my report.pdf"));
        assert!(is_plain_filename("..hidden.pdf"));
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(!is_plain_filename("../evil.pdf"));
        assert!(!is_plain_filename("..\\evil.pdf"));
        assert!(!is_plain_filename("/etc/evil.pdf"));
        assert!(!is_plain_filename("nested/evil.pdf"));
        assert!(!is_plain_filename(".."));
        assert!(!is_plain_filename("."));
        assert!(!is_plain_filename("evil\0.pdf"));
        assert!(!is_plain_filename(""));
    }

    #[test]
    fn test_acceptable_upload() {
        assert!(is_acceptable_upload("report.pdf"));
        assert!(!is_acceptable_upload("notes.txt"));
        assert!(!is_acceptable_upload("../report.pdf"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_found_redirect() {
        let response = found("/portfolio");

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/portfolio");
    }
}
