//! Presentation helpers for the directory: display strings and the grouped
//! HTML fragment. Fallback text like "No positions listed" lives here, not in
//! the data model, so the canonical records stay render-agnostic.

use crate::models::business::{CanonicalBusinessRecord, CityGroup};

/// Comma-joined position list, or the fallback when the business is not
/// hiring or listed nothing usable.
pub fn positions_text(record: &CanonicalBusinessRecord) -> String {
    if !record.is_hiring || record.positions.is_empty() {
        return "No positions listed".to_string();
    }
    record.positions.join(", ")
}

pub fn hiring_pill_text(record: &CanonicalBusinessRecord) -> &'static str {
    if record.is_hiring {
        "Hiring"
    } else {
        "Not hiring"
    }
}

/// "City, ST" heading for a group.
pub fn group_heading(group: &CityGroup) -> String {
    format!("{}, {}", group.city, group.state)
}

/// "N business(es) found" counter line.
pub fn count_message(count: usize) -> String {
    let noun = if count == 1 { "business" } else { "businesses" };
    format!("{count} {noun} found")
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Renders the grouped directory as an HTML fragment, or the empty-result
/// indicator when there are no groups. All record-derived text is escaped.
pub fn render_groups_html(groups: &[CityGroup]) -> String {
    if groups.is_empty() {
        return r#"<div class="empty">No businesses found for this selection.</div>"#.to_string();
    }

    groups
        .iter()
        .map(|g| {
            let rows: String = g.members.iter().map(render_business_row).collect();
            format!(
                "<div class=\"group\">\
                 <div class=\"group-title\">&bull; {}</div>\
                 <div class=\"group-body\">{}</div>\
                 </div>",
                escape_html(&group_heading(g)),
                rows
            )
        })
        .collect()
}

fn render_business_row(record: &CanonicalBusinessRecord) -> String {
    let pill_class = if record.is_hiring { "pill pill-ok" } else { "pill pill-off" };
    format!(
        "<div class=\"biz-row\">\
         <div class=\"biz-row-head\">\
         <span class=\"biz-name\">{}</span>\
         <span class=\"{}\">{}</span>\
         </div>\
         <div class=\"biz-row-sub\">{}, {} {}</div>\
         <div class=\"biz-row-pos\"><span class=\"label\">Positions:</span> {}</div>\
         </div>",
        escape_html(&record.name),
        pill_class,
        hiring_pill_text(record),
        escape_html(&record.city),
        escape_html(&record.state),
        escape_html(record.zip.as_deref().unwrap_or("")),
        escape_html(&positions_text(record)),
    )
}
