use leptos::prelude::*;
use thaw::*;

use crate::shared::list_view::{ListData, ListView};
use crate::shared::view_state::{ColumnDef, FilterField};

/// Renders the cells of one row up front, so the table children own them
/// instead of borrowing the row.
fn row_contents<T>(item: &T, columns: &[ColumnDef], cell: fn(&T, &str) -> AnyView) -> Vec<AnyView> {
    columns.iter().map(|c| cell(item, c.id)).collect()
}

/// Table of the loaded rows restricted to the visible columns.
///
/// `cell` renders one value by column id; ids the row type does not know
/// should render empty.
#[component]
pub fn ListTable<F, T>(
    list: ListView<F>,
    data: ListData<T>,
    cell: fn(&T, &str) -> AnyView,
    /// Text shown when the query matches nothing
    #[prop(into)]
    empty_text: String,
) -> impl IntoView
where
    F: FilterField,
    T: Clone + Send + Sync + 'static,
{
    let state = list.state;
    let columns = move || state.with(|s| s.visible_columns.clone());

    view! {
        {move || data.error.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__text">{e}</span>
            </div>
        })}
        <Table>
            <TableHeader>
                <TableRow>
                    {move || columns()
                        .into_iter()
                        .map(|c| view! { <TableHeaderCell>{c.label}</TableHeaderCell> })
                        .collect_view()}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let columns = columns();
                    data.items.with(|items| {
                        items
                            .iter()
                            .map(|item| {
                                let cells = row_contents(item, &columns, cell)
                                    .into_iter()
                                    .map(|content| view! {
                                        <TableCell>
                                            <TableCellLayout>{content}</TableCellLayout>
                                        </TableCell>
                                    })
                                    .collect_view();
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()
                    })
                }}
            </TableBody>
        </Table>
        <Show when=move || !data.loading.get() && data.items.with(|items| items.is_empty())>
            <div class="list-empty">{empty_text.clone()}</div>
        </Show>
        <Show when=move || data.loading.get()>
            <div class="list-loading">"Loading..."</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static RENDERED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    fn record_cell(row: &String, column: &str) -> AnyView {
        RENDERED.with(|r| r.borrow_mut().push(format!("{}:{}", row, column)));
        ().into_any()
    }

    #[test]
    fn test_row_contents_follow_visible_columns() {
        let columns = [
            ColumnDef::new("status", "Status", true),
            ColumnDef::new("name", "Name", true),
        ];
        let row = "spool-1".to_string();
        let contents = row_contents(&row, &columns, record_cell);
        drop(row);

        assert_eq!(contents.len(), 2);
        RENDERED.with(|r| {
            assert_eq!(*r.borrow(), vec!["spool-1:status", "spool-1:name"]);
        });
    }

    #[test]
    fn test_row_contents_without_columns() {
        let row = "spool-2".to_string();
        assert!(row_contents(&row, &[], record_cell).is_empty());
    }
}
