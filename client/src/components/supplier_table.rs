//! Supplier performance table.

#[cfg(test)]
#[path = "supplier_table_test.rs"]
mod supplier_table_test;

use leptos::prelude::*;

use crate::net::types::SupplierRow;
use crate::util::format::{MISSING, format_days, format_percent};

/// On-time rate at or above which a supplier is considered reliable.
const GOOD_ON_TIME_RATE: f64 = 90.0;
/// On-time rate below which a supplier is flagged.
const POOR_ON_TIME_RATE: f64 = 75.0;

#[component]
pub fn SupplierTable(suppliers: Vec<SupplierRow>) -> impl IntoView {
    if suppliers.is_empty() {
        return view! { <p class="supplier-table__empty">"No supplier data"</p> }.into_any();
    }

    view! {
        <table class="supplier-table">
            <thead>
                <tr>
                    <th>"Supplier"</th>
                    <th>"On-time rate"</th>
                    <th>"Lead time"</th>
                </tr>
            </thead>
            <tbody>
                {suppliers
                    .into_iter()
                    .map(|row| {
                        let name = if row.name.trim().is_empty() { MISSING.to_owned() } else { row.name };
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td class=on_time_class(row.on_time_rate)>{format_percent(row.on_time_rate)}</td>
                                <td>{format_days(row.lead_time_days)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn on_time_class(rate: Option<f64>) -> &'static str {
    match rate {
        Some(r) if r >= GOOD_ON_TIME_RATE => "supplier-table__rate supplier-table__rate--good",
        Some(r) if r >= POOR_ON_TIME_RATE => "supplier-table__rate supplier-table__rate--fair",
        Some(r) if r.is_finite() => "supplier-table__rate supplier-table__rate--poor",
        _ => "supplier-table__rate",
    }
}
