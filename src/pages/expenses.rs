use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::api::{self, LedgerKind};
use crate::components::layout::{icon_credit_card, page_shell};
use crate::components::ledger::LedgerHistory;
use crate::components::notification::{Notice, Notification};
use crate::config::EXPENSE_CATEGORIES;
use crate::forms::{EntryDraft, ExpenseDraft};
use crate::pages::entry_fields::entry_fields;
use crate::session::{end_if_unauthorized, use_session};

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    let session = use_session();
    let draft = use_state(|| ExpenseDraft::<File>::new(EXPENSE_CATEGORIES[0]));
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let reload = use_state(|| 0u32);
    let over_budget = use_state(Notice::default);
    let receipt_input = use_node_ref();

    let on_add = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        let over_budget = over_budget.clone();
        let receipt_input = receipt_input.clone();
        Callback::from(move |_| {
            let amount = match draft.entry.amount() {
                Ok(amount) => amount,
                Err(msg) => {
                    form_error.set(Some(msg.to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let submitted = (*draft).clone();
            let client = session.client();
            let session = session.clone();
            let draft = draft.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            let over_budget = over_budget.clone();
            let receipt_input = receipt_input.clone();
            spawn_local(async move {
                match api::add_expense(&client, &submitted, amount).await {
                    Ok(created) => {
                        let (next, warn) = submitted.after_submit(created.budget_exceeded);
                        tracing::info!(
                            category = %submitted.entry.category,
                            budget_exceeded = warn,
                            "expense recorded"
                        );
                        draft.set(next);
                        if warn {
                            over_budget.set(over_budget.raise());
                        }
                        if let Some(input) = receipt_input.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "could not record expense");
                        end_if_unauthorized(&session, &client, &err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                reload.set(*reload + 1);
                saving.set(false);
            });
        })
    };

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |entry: EntryDraft| {
            draft.set(ExpenseDraft {
                entry,
                receipt: draft.receipt.clone(),
            })
        })
    };

    let on_receipt = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let receipt = input.files().and_then(|files| files.item(0));
            draft.set(ExpenseDraft {
                entry: draft.entry.clone(),
                receipt,
            });
        })
    };

    let on_close_notice = {
        let over_budget = over_budget.clone();
        Callback::from(move |_: ()| over_budget.set(over_budget.dismissed()))
    };

    html! {
        <>
            { page_shell(
                "Expenses",
                html! {},
                html! {
                    <>
                        <div class="bg-card p-5 rounded-[10px] shadow-sm border border-border">
                            <div class="flex items-center gap-2 mb-3">
                                <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_credit_card() }</div>
                                <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"Add Expense"}</h4>
                            </div>
                            { entry_fields(&draft.entry, &EXPENSE_CATEGORIES, on_change) }
                            <div class="mt-4 space-y-1">
                                <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground">{"Receipt"}</label>
                                <input ref={receipt_input} type="file" accept="image/*,application/pdf" onchange={on_receipt}
                                    class="text-[12px] text-foreground" />
                            </div>
                            <button onclick={on_add} class="mt-4 bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[11px] font-bold" disabled={*saving}>
                                { if *saving { "Saving..." } else { "Add" } }
                            </button>
                            if let Some(msg) = &*form_error {
                                <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p>
                            }
                        </div>
                        <LedgerHistory kind={LedgerKind::Expense} reload={*reload} />
                    </>
                }
            ) }
            <Notification notice={*over_budget} message="Budget exceeded" on_close={on_close_notice} />
        </>
    }
}
