use rust_decimal::RoundingStrategy;
use crate::books::domain::Book;

const REPORT_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Bookstore Report</title>
    <style>
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
    </style>
</head>
<body>
    <h1>Bookstore Inventory Report</h1>
    <table>
        <thead>
            <tr>
                <th>Title</th>
                <th>Author</th>
                <th>Category</th>
                <th>Year</th>
                <th>Price</th>
            </tr>
        </thead>
        <tbody>
"#;

const REPORT_FOOTER: &str = r#"        </tbody>
    </table>
</body>
</html>
"#;

// escape_html replaces the characters that are significant in html text and attribute values
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_cell(html: &mut String, value: &str) {
    html.push_str(&format!("                <td>{}</td>\n", value));
}

// render_report builds a static html table with one row per book in the given order.
pub(crate) fn render_report<B: Book>(books: &[B]) -> String {
    let mut html = String::from(REPORT_HEADER);
    for book in books {
        let mut price = book.price().round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        price.rescale(2);
        html.push_str("            <tr>\n");
        push_cell(&mut html, escape_html(book.title()).as_str());
        push_cell(&mut html, escape_html(book.authors().join(", ").as_str()).as_str());
        push_cell(&mut html, escape_html(book.category()).as_str());
        push_cell(&mut html, book.year().to_string().as_str());
        push_cell(&mut html, format!("${}", price).as_str());
        html.push_str("            </tr>\n");
    }
    html.push_str(REPORT_FOOTER);
    html
}
