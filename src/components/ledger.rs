use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, LedgerKind};
use crate::components::pagination::TablePagination;
use crate::components::status::render_load;
use crate::format::{display_date, format_amount};
use crate::listing::ListQuery;
use crate::load::LoadState;
use crate::models::{EntryPage, LedgerEntry};
use crate::session::{end_if_unauthorized, use_session};

/// Server id when present, else the row position.
fn row_key(idx: usize, item: &LedgerEntry) -> String {
    if item.id.is_empty() {
        format!("row-{}", idx)
    } else {
        item.id.clone()
    }
}

#[derive(Properties, PartialEq)]
pub struct LedgerHistoryProps {
    pub kind: LedgerKind,
    /// Bumped by the parent after a write to force a reload.
    pub reload: u32,
}

/// Searchable, paginated listing of income or expense entries.
#[function_component(LedgerHistory)]
pub fn ledger_history(props: &LedgerHistoryProps) -> Html {
    let session = use_session();
    let query = use_state(ListQuery::default);
    let search = use_state(String::new);
    let entries = use_state(LoadState::<EntryPage>::default);

    {
        let entries = entries.clone();
        let session = session.clone();
        let kind = props.kind;
        use_effect_with_deps(
            move |(query, _reload): &(ListQuery, u32)| {
                let query = query.clone();
                let client = session.client();
                spawn_local(async move {
                    let result = api::list_entries(&client, kind, &query).await;
                    if let Err(err) = &result {
                        tracing::warn!(%err, ?kind, "could not load entries");
                        end_if_unauthorized(&session, &client, err);
                    }
                    entries.set(result.into());
                });
                || ()
            },
            ((*query).clone(), props.reload),
        );
    }

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_search = {
        let query = query.clone();
        let search = search.clone();
        Callback::from(move |_| query.set(query.with_search(&search)))
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |next: ListQuery| query.set(next))
    };

    let show_receipt = props.kind == LedgerKind::Expense;
    let columns = if show_receipt { 5 } else { 4 };
    let title = match props.kind {
        LedgerKind::Income => "Income History",
        LedgerKind::Expense => "Expense History",
    };

    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="p-5 border-b border-border flex items-center justify-between gap-4">
                <h3 class="font-bold text-lg text-foreground">{ title }</h3>
                <div class="flex gap-2">
                    <input type="search" placeholder="Search" value={(*search).clone()} oninput={on_search_input}
                        class="bg-[#f1f4f9] dark:bg-slate-800 rounded-[10px] px-3 py-2 text-[12px] border-none" />
                    <button onclick={on_search} class="bg-[#B2CBDE] text-[#173E63] px-4 rounded-[10px] text-[11px] font-bold">{"Search"}</button>
                </div>
            </div>
            { render_load(&*entries, |page| html! {
                <>
                    <div class="overflow-x-auto">
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-8 py-4 font-bold">{"Date"}</th>
                                    <th class="px-8 py-4 font-bold">{"Category"}</th>
                                    <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                                    <th class="px-8 py-4 font-bold">{"Description"}</th>
                                    if show_receipt {
                                        <th class="px-8 py-4 font-bold">{"Receipt"}</th>
                                    }
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                if page.items.is_empty() {
                                    <tr><td colspan={columns.to_string()} class="px-8 py-6 text-center text-muted-foreground">{"No entries found."}</td></tr>
                                }
                                { for page.items.iter().enumerate().map(|(idx, item)| html! {
                                    <tr key={row_key(idx, item)} class="text-sm hover:bg-muted/40 transition-colors">
                                        <td class="px-8 py-4 text-muted-foreground">{ display_date(&item.date) }</td>
                                        <td class="px-8 py-4">
                                            <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold capitalize">{ item.category.clone() }</span>
                                        </td>
                                        <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_amount(item.amount) }</td>
                                        <td class="px-8 py-4 text-foreground">{ item.description.clone() }</td>
                                        if show_receipt {
                                            <td class="px-8 py-4">
                                                if let Some(url) = &item.receipt_url {
                                                    <a href={url.clone()} target="_blank" rel="noopener" class="text-primary underline">{"View"}</a>
                                                }
                                            </td>
                                        }
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                    <TablePagination query={(*query).clone()} total={page.total} on_change={on_page_change.clone()} />
                </>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> LedgerEntry {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "category": "food",
            "amount": 12.5,
            "date": "2024-03-02",
        }))
        .unwrap()
    }

    #[test]
    fn rows_are_keyed_by_server_id() {
        assert_eq!(row_key(0, &entry("65f1c0")), "65f1c0");
        assert_eq!(row_key(3, &entry("65f1c1")), "65f1c1");
    }

    #[test]
    fn rows_without_id_fall_back_to_position() {
        assert_eq!(row_key(2, &entry("")), "row-2");
        assert_ne!(row_key(0, &entry("")), row_key(1, &entry("")));
    }
}
