use yew::prelude::*;

use crate::forms::EntryDraft;

const INPUT_CLASS: &str = "w-full bg-[#f1f4f9] dark:bg-slate-800 rounded-[10px] px-3 py-2 text-[12px] border-none text-foreground";

fn field(label: &'static str, control: Html) -> Html {
    html! {
        <div class="space-y-1">
            <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground">{ label }</label>
            { control }
        </div>
    }
}

/// Category, amount, description and date inputs shared by the income and expense forms.
/// Every edit hands the whole updated draft to `on_change`.
pub fn entry_fields(
    draft: &EntryDraft,
    categories: &[&'static str],
    on_change: Callback<EntryDraft>,
) -> Html {
    let edit = |apply: fn(&mut EntryDraft, String)| {
        let draft = draft.clone();
        let on_change = on_change.clone();
        move |value: String| {
            let mut next = draft.clone();
            apply(&mut next, value);
            on_change.emit(next);
        }
    };

    let on_category = {
        let update = edit(|d, v| d.category = v);
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };
    let on_amount = {
        let update = edit(|d, v| d.amount = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };
    let on_description = {
        let update = edit(|d, v| d.description = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };
    let on_date = {
        let update = edit(|d, v| d.date = v);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            { field("Category", html! {
                <select class={INPUT_CLASS} onchange={on_category}>
                    { for categories.iter().map(|c| html! {
                        <option value={*c} selected={draft.category == *c} class="capitalize">{ *c }</option>
                    }) }
                </select>
            }) }
            { field("Amount", html! {
                <input type="number" min="0" step="0.01" placeholder="0.00" class={INPUT_CLASS}
                    value={draft.amount.clone()} oninput={on_amount} />
            }) }
            { field("Description", html! {
                <input type="text" class={INPUT_CLASS} value={draft.description.clone()} oninput={on_description} />
            }) }
            { field("Date", html! {
                <input type="date" class={INPUT_CLASS} value={draft.date.clone()} oninput={on_date} />
            }) }
        </div>
    }
}
