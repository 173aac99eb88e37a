//! Plain-HTML table components behind a horizontally scrollable wrapper.
//! Compose as DataTable > DataTableHeader/DataTableBody > DataTableRow >
//! DataTableColumn/DataTableCell.

use dioxus::prelude::*;

/// Scroll container plus the `table` element itself.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "ef-data-table",
            table { {children} }
        }
    }
}

/// `thead` with a single header row; children are [`DataTableColumn`]s.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// `tbody`; children are [`DataTableRow`]s.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Body row. Row-level actions belong in a trailing cell, not on the row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "ef-data-table-row", {children} }
    }
}

/// Body cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
