//! Server-rendered HTML for the catalog and statistics pages.

use std::fmt::{self, Write as _};

use stardex_core::{Item, Page, SearchStats, format_number};

const STYLE: &str = "body{font-family:sans-serif;background:#111;color:#ddd;margin:2em}\
a{color:#8cf}table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #333;padding:4px 8px;text-align:left}\
nav{margin:1em 0}nav a{margin-right:1em}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn cell(value: Option<&String>) -> String {
    value.map(|v| escape_html(v)).unwrap_or_default()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Search</a><a href=\"/all\">All items</a><a href=\"/stats\">Stats</a></nav>\n\
         {body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn pager(page: &Page<Item>) -> Result<String, fmt::Error> {
    let mut nav = String::from("<nav class=\"pager\">");
    if page.has_prev() {
        write!(nav, "<a href=\"/all/{}\">&laquo; Previous</a>", page.prev_page)?;
    }
    // last_page is 0 for catalogs shorter than one page.
    let shown_last = page.last_page.max(page.current_page);
    write!(nav, "<span>Page {} of {shown_last}</span>", page.current_page)?;
    if page.has_next() {
        write!(nav, "<a href=\"/all/{}\">Next &raquo;</a>", page.next_page)?;
    }
    nav.push_str("</nav>\n");
    Ok(nav)
}

pub fn render_catalog(page: &Page<Item>) -> Result<String, fmt::Error> {
    let mut body = format!(
        "<h1>All items</h1>\n<p>{} items</p>\n",
        format_number(page.total_items)
    );
    body.push_str(&pager(page)?);
    body.push_str(
        "<table>\n<tr><th></th><th>Name</th><th>Item</th><th>Type</th><th>Rarity</th><th>Description</th></tr>\n",
    );
    for item in &page.items {
        let icon = item
            .inventory_icon
            .as_ref()
            .map(|icon| format!("<img src=\"{}\" alt=\"\">", escape_html(icon)))
            .unwrap_or_default();
        writeln!(
            body,
            "<tr><td>{icon}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&item.item_name),
            cell(item.short_description.as_ref()),
            cell(item.item_type.as_ref()),
            cell(item.rarity.as_ref()),
            cell(item.description.as_ref()),
        )?;
    }
    body.push_str("</table>\n");
    body.push_str(&pager(page)?);
    Ok(layout(&format!("All items - page {}", page.current_page), &body))
}

pub fn render_stats(stats: &SearchStats) -> Result<String, fmt::Error> {
    let mut body = String::from("<h1>Statistics</h1>\n<ul>\n");
    writeln!(body, "<li>Total searches: {}</li>", escape_html(&stats.total_searches))?;
    writeln!(body, "<li>Items indexed: {}</li>", escape_html(&stats.indexed_items))?;
    body.push_str("</ul>\n<h2>Popular searches</h2>\n<ol>\n");
    for term in &stats.top_terms {
        writeln!(
            body,
            "<li>{} <small>({})</small></li>",
            escape_html(&term.term),
            escape_html(&term.score)
        )?;
    }
    body.push_str("</ol>\n");
    Ok(layout("Statistics", &body))
}
