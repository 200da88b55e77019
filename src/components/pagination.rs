use yew::prelude::*;

use crate::config::ROWS_PER_PAGE_OPTIONS;
use crate::listing::ListQuery;

#[derive(Properties, PartialEq)]
pub struct TablePaginationProps {
    pub query: ListQuery,
    pub total: u64,
    pub on_change: Callback<ListQuery>,
}

#[function_component(TablePagination)]
pub fn table_pagination(props: &TablePaginationProps) -> Html {
    let query = &props.query;

    let on_prev = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(query.with_page(query.page.saturating_sub(1))))
    };

    let on_next = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(query.with_page(query.page + 1)))
    };

    let on_limit = {
        let query = query.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(limit) = input.value().parse::<u32>() {
                on_change.emit(query.with_limit(limit));
            }
        })
    };

    html! {
        <div class="flex items-center justify-end gap-6 px-6 py-3 text-xs text-muted-foreground border-t border-border">
            <label class="flex items-center gap-2">
                {"Rows per page"}
                <select onchange={on_limit} class="bg-transparent border border-border rounded px-2 py-1">
                    { for ROWS_PER_PAGE_OPTIONS.iter().map(|n| html! {
                        <option value={n.to_string()} selected={*n == query.limit}>{ n.to_string() }</option>
                    }) }
                </select>
            </label>
            <span>{ query.range_label(props.total) }</span>
            <div class="flex gap-2">
                <button onclick={on_prev} disabled={!query.has_prev()} class="px-2 py-1 rounded disabled:opacity-40">{"‹"}</button>
                <button onclick={on_next} disabled={!query.has_next(props.total)} class="px-2 py-1 rounded disabled:opacity-40">{"›"}</button>
            </div>
        </div>
    }
}
