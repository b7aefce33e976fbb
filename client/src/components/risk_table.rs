//! Stockout forecast table.

#[cfg(test)]
#[path = "risk_table_test.rs"]
mod risk_table_test;

use leptos::prelude::*;

use crate::net::types::RiskRow;
use crate::util::format::format_days;

#[component]
pub fn RiskTable(risks: Vec<RiskRow>) -> impl IntoView {
    if risks.is_empty() {
        return view! { <p class="risk-table__empty">"No materials at risk of stockout"</p> }.into_any();
    }

    view! {
        <table class="risk-table">
            <thead>
                <tr>
                    <th>"Material"</th>
                    <th>"Runs out in"</th>
                    <th>"Urgency"</th>
                </tr>
            </thead>
            <tbody>
                {risks
                    .into_iter()
                    .map(|row| {
                        let status_class = urgency_class(&row);
                        view! {
                            <tr>
                                <td>{row.description}</td>
                                <td>{format_days(Some(row.days_until_stockout))}</td>
                                <td>
                                    <span class=status_class>{row.urgency}</span>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn urgency_class(row: &RiskRow) -> String {
    format!("status-badge status-badge--{}", row.status_key())
}
