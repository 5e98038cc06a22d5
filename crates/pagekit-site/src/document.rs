//! HTML document shell.

use pagekit_view::escape_html;

use crate::pages::PageComposer;

/// Render a page as a complete HTML document.
///
/// Wraps the composed fragment in a minimal HTML5 shell with the page
/// title in `<head>` and the fragment inside `<main>`.
#[must_use]
pub fn render_document(page: &dyn PageComposer) -> String {
    let mut body = String::new();
    page.compose().write_html(&mut body);

    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<main>{}</main>\n</body>\n</html>\n",
        escape_html(page.title()),
        body
    )
}
