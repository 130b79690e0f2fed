//! # Text Rendering
//!
//! Plain-text views of the dashboard and the product table for the
//! terminal front-end.

use std::fmt::Write;

use crate::commands::dashboard::DashboardDto;
use crate::commands::product::ProductPage;
use crate::state::ConsoleConfig;
use stockroom_core::view::PageLink;

/// Summary cards, status counts and category totals.
pub fn render_dashboard(dashboard: &DashboardDto, config: &ConsoleConfig) -> String {
    let summary = &dashboard.summary;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Inventory Summary");
    let _ = writeln!(out, "  {:<18}{}", "Total Products", summary.total);
    let _ = writeln!(out, "  {:<18}{}", "In Stock", summary.in_stock);
    let _ = writeln!(out, "  {:<18}{}", "Low Stock", summary.low_stock);
    let _ = writeln!(out, "  {:<18}{}", "Out of Stock", summary.out_of_stock);
    let _ = writeln!(
        out,
        "  {:<18}{}",
        "Total Value",
        config.format_currency(summary.total_value)
    );

    let categories = &dashboard.categories;
    if !categories.quantity_by_category.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<20}{:>10}{:>14}", "Category", "Quantity", "Value");
        for (qty, value) in categories
            .quantity_by_category
            .iter()
            .zip(&categories.value_by_category)
        {
            let _ = writeln!(
                out,
                "  {:<18}{:>10}{:>14}",
                qty.category,
                qty.quantity,
                config.format_whole(value.value)
            );
        }
    }

    out
}

/// The product table page with its pager.
pub fn render_page(page: &ProductPage, config: &ConsoleConfig) -> String {
    let mut out = String::new();

    if page.rows.is_empty() {
        let _ = writeln!(out, "No products found");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<5}{:<10}{:<24}{:<18}{:>6}{:>14}  {}",
        "ID", "Code", "Name", "Category", "Qty", "Unit Price", "Status"
    );
    for row in &page.rows {
        let _ = writeln!(
            out,
            "{:<5}{:<10}{:<24}{:<18}{:>6}{:>14}  {}",
            row.id,
            truncate(&row.code, 9),
            truncate(&row.name, 23),
            truncate(&row.category, 17),
            row.quantity,
            config.format_currency(row.unit_price),
            row.status
        );
    }

    if let Some(window) = page.window {
        let _ = writeln!(
            out,
            "\nShowing {}-{} of {}",
            window.start, window.end, window.total
        );
    }

    if !page.links.is_empty() {
        let links: Vec<String> = page
            .links
            .iter()
            .map(|link| match link {
                PageLink::Page(n) if *n == page.current_page => format!("[{n}]"),
                PageLink::Page(n) => n.to_string(),
                PageLink::Ellipsis => "…".to_string(),
            })
            .collect();
        let _ = writeln!(out, "Pages: {}", links.join(" "));
    }

    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
