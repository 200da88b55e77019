use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, LedgerKind};
use crate::components::layout::{icon_trending_up, page_shell};
use crate::components::ledger::LedgerHistory;
use crate::config::INCOME_CATEGORIES;
use crate::forms::EntryDraft;
use crate::pages::entry_fields::entry_fields;
use crate::session::{end_if_unauthorized, use_session};

#[function_component(IncomePage)]
pub fn income_page() -> Html {
    let session = use_session();
    let draft = use_state(|| EntryDraft::new(INCOME_CATEGORIES[0]));
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let reload = use_state(|| 0u32);

    let on_add = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let amount = match draft.amount() {
                Ok(amount) => amount,
                Err(msg) => {
                    form_error.set(Some(msg.to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let income = draft.to_income(amount);
            let client = session.client();
            let session = session.clone();
            let draft = draft.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::add_income(&client, &income).await {
                    Ok(()) => {
                        tracing::info!(category = %income.category, "income recorded");
                        draft.set(draft.cleared());
                    }
                    Err(err) => {
                        tracing::warn!(%err, "could not record income");
                        end_if_unauthorized(&session, &client, &err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                // The listing is refetched after every write, successful or not.
                reload.set(*reload + 1);
                saving.set(false);
            });
        })
    };

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |next: EntryDraft| draft.set(next))
    };

    html! {
        { page_shell(
            "Income",
            html! {},
            html! {
                <>
                    <div class="bg-card p-5 rounded-[10px] shadow-sm border border-border">
                        <div class="flex items-center gap-2 mb-3">
                            <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_trending_up() }</div>
                            <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"Add Income"}</h4>
                        </div>
                        { entry_fields(&draft, &INCOME_CATEGORIES, on_change) }
                        <button onclick={on_add} class="mt-4 bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[11px] font-bold" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Add" } }
                        </button>
                        if let Some(msg) = &*form_error {
                            <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p>
                        }
                    </div>
                    <LedgerHistory kind={LedgerKind::Income} reload={*reload} />
                </>
            }
        ) }
    }
}
