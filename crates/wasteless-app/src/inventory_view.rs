use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use wasteless_inventory::{
    classify_item, days_until_expiration, filter_by_status, StatusFilter,
};
use wasteless_models::{ExpirationStatus, InventoryItem};

/// Print the inventory table for the given filter and reference date.
pub fn run(status: StatusFilter, reference: NaiveDate) {
    let items = wasteless_inventory::catalog::seed_items();
    print!("{}", render_table(&items, status, reference));
}

/// Render the table as text. Column widths are applied before coloring so
/// ANSI escapes do not break the alignment.
pub fn render_table(items: &[InventoryItem], filter: StatusFilter, reference: NaiveDate) -> String {
    let selected = filter_by_status(items, filter, reference);

    let mut out = String::new();
    out.push_str(&format!(
        "Inventory on {} (filter: {})\n\n",
        reference,
        filter.as_str()
    ));
    out.push_str(&format!(
        "{:>4}  {:<14}{:<14}{:<12}{:<12}{:>5}  {:>5}  {}\n",
        "id", "product", "batch", "bought", "expires", "qty", "days", "status"
    ));

    for item in &selected {
        let days = days_until_expiration(item.expiration_date, reference);
        let status = classify_item(item, reference);
        out.push_str(&format!(
            "{:>4}  {:<14}{:<14}{:<12}{:<12}{:>5}  {:>5}  {}\n",
            item.id,
            item.product,
            item.batch,
            item.date_bought.to_string(),
            item.expiration_date.to_string(),
            item.quantity,
            days,
            colorize_status(status)
        ));
    }

    out.push_str(&format!("\n{} of {} items\n", selected.len(), items.len()));
    out
}

fn colorize_status(status: ExpirationStatus) -> ColoredString {
    match status {
        ExpirationStatus::Good => status.as_str().green(),
        ExpirationStatus::Warning => status.as_str().yellow(),
        ExpirationStatus::Critical => status.as_str().bright_red(),
        ExpirationStatus::Expired => status.as_str().red().bold(),
    }
}
