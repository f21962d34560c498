use chrono::NaiveDate;

use wasteless_models::InventoryItem;

// (id, product, batch, bought, expires, qty) rows for the demo store.
const SEED_ROWS: &[(u32, &str, &str, (i32, u32, u32), (i32, u32, u32), u32)] = &[
    (1, "Milk", "MLK-2025-041", (2025, 9, 28), (2025, 10, 6), 48),
    (2, "Milk", "MLK-2025-042", (2025, 10, 1), (2025, 10, 12), 36),
    (3, "Eggs", "EGG-2025-117", (2025, 9, 25), (2025, 10, 16), 120),
    (4, "Eggs", "EGG-2025-118", (2025, 10, 2), (2025, 10, 30), 90),
    (5, "Strawberries", "STR-2025-063", (2025, 10, 1), (2025, 10, 3), 25),
    (6, "Strawberries", "STR-2025-064", (2025, 10, 3), (2025, 10, 8), 30),
    (7, "Chocolate", "CHO-2025-009", (2025, 8, 15), (2026, 2, 15), 64),
    (8, "Bananas", "BAN-2025-201", (2025, 10, 2), (2025, 10, 9), 55),
    (9, "Bananas", "BAN-2025-202", (2025, 9, 29), (2025, 10, 4), 18),
    (10, "Chocolate", "CHO-2025-010", (2025, 9, 10), (2025, 10, 18), 40),
];

/// The fixed demo inventory the dashboard renders. Built fresh on each call;
/// items are never mutated after construction.
pub fn seed_items() -> Vec<InventoryItem> {
    SEED_ROWS
        .iter()
        .map(|&(id, product, batch, bought, expires, quantity)| InventoryItem {
            id,
            product: product.to_string(),
            batch: batch.to_string(),
            date_bought: ymd(bought),
            expiration_date: ymd(expires),
            quantity,
        })
        .collect()
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    // Seed rows are compile-time constants; every triple is a valid date.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
