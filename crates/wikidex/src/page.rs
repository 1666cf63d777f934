//! HTML rendering for the search results page.

use wikidex_index::SearchOutcome;

/// Escapes a string for embedding in HTML text or attribute values.
///
/// The search form echoes the user's query back into an attribute, so the
/// raw (pre-translation) string must never reach the page unescaped.
pub fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Builds the display URL for a page id.
pub fn result_url(base_url: &str, id: &str) -> String {
    format!("{base_url}{id}")
}

/// Renders the search results page.
///
/// Shows the search form with the query echoed back, the result count and
/// elapsed seconds, and one link per hit opening in a new tab.
pub fn render_results(query: &str, base_url: &str, outcome: &SearchOutcome) -> String {
    let escaped_query = html_escape(query);
    let elapsed = outcome.elapsed.as_secs_f32();

    let mut page = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <title>wikidex</title>\n\
         <link rel=\"stylesheet\" href=\"/css/style.css\" />\n\
         </head>\n\
         <body>\n\
         <article class=\"wikidex\">\n\
         <div class=\"title\"><a href=\"/\">wikidex</a></div>\n\
         <div class=\"disclaimer\">Logical operators: ~ (NOT); | (OR); &amp; (AND)</div>\n\
         <div class=\"search\">\n\
         <form action=\"/search\" method=\"get\">\n\
         <input type=\"text\" name=\"q\" value=\"{escaped_query}\" autofocus>\n\
         </form>\n\
         </div>\n"
    );

    page.push_str(&format!(
        "<div class=\"results\">{} results ({elapsed:.6} seconds):</div>\n",
        outcome.hits.len()
    ));

    for hit in &outcome.hits {
        let url = html_escape(&result_url(base_url, &hit.id));
        let label = html_escape(&hit.id);
        page.push_str(&format!(
            "<div class=\"result\"><a href=\"{url}\" target=\"_blank\">{label}</a></div>\n"
        ));
    }

    page.push_str("</article>\n</body>\n</html>\n");
    page
}
