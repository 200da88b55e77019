use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::layout::{icon_wallet, page_shell};
use crate::components::status::{render_load, StatCard};
use crate::forms::parse_amount;
use crate::load::LoadState;
use crate::models::{BudgetStatus, NewBudget};
use crate::month::Month;
use crate::session::{end_if_unauthorized, use_session};

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let session = use_session();
    let month = use_state(Month::current);
    let amount = use_state(String::new);
    let status = use_state(LoadState::<BudgetStatus>::default);
    let form_error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let reload = use_state(|| 0u32);

    {
        let session = session.clone();
        let status = status.clone();
        use_effect_with_deps(
            move |(month, _reload): &(Month, u32)| {
                let month = *month;
                let client = session.client();
                status.set(LoadState::Loading);
                spawn_local(async move {
                    let result = api::budget_remaining(&client, month).await;
                    if let Err(err) = &result {
                        tracing::warn!(%err, %month, "could not load budget status");
                        end_if_unauthorized(&session, &client, err);
                    }
                    status.set(result.into());
                });
                || ()
            },
            (*month, *reload),
        );
    }

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            // Half-typed values from the picker are ignored until they parse.
            if let Ok(next) = input.value().parse::<Month>() {
                month.set(next);
            }
        })
    };

    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_save = {
        let month = month.clone();
        let amount = amount.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            let value = match parse_amount(&amount) {
                Ok(value) => value,
                Err(msg) => {
                    form_error.set(Some(msg.to_string()));
                    return;
                }
            };

            form_error.set(None);
            saving.set(true);

            let budget = NewBudget {
                month: (*month).to_string(),
                amount: value,
            };
            let client = session.client();
            let session = session.clone();
            let amount = amount.clone();
            let form_error = form_error.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::save_budget(&client, &budget).await {
                    Ok(()) => {
                        tracing::info!(month = %budget.month, "budget saved");
                        amount.set(String::new());
                    }
                    Err(err) => {
                        tracing::warn!(%err, "could not save budget");
                        end_if_unauthorized(&session, &client, &err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                reload.set(*reload + 1);
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Budget",
            html! {},
            html! {
                <>
                    <div class="bg-card p-5 rounded-[10px] shadow-sm border border-border">
                        <div class="flex items-center gap-2 mb-3">
                            <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_wallet() }</div>
                            <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"Monthly Budget"}</h4>
                        </div>
                        <div class="flex flex-wrap items-end gap-4">
                            <div class="space-y-1">
                                <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground">{"Month"}</label>
                                <input type="month" value={(*month).to_string()} oninput={on_month}
                                    class="bg-[#f1f4f9] dark:bg-slate-800 rounded-[10px] px-3 py-2 text-[12px] border-none text-foreground" />
                            </div>
                            <div class="space-y-1">
                                <label class="block text-[10px] uppercase tracking-widest font-bold text-muted-foreground">{"Amount"}</label>
                                <input type="number" min="0" step="0.01" placeholder="0.00" value={(*amount).clone()} oninput={on_amount}
                                    class="bg-[#f1f4f9] dark:bg-slate-800 rounded-[10px] px-3 py-2 text-[12px] border-none text-foreground" />
                            </div>
                            <button onclick={on_save} class="bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[11px] font-bold" disabled={*saving}>
                                { if *saving { "Saving..." } else { "Save" } }
                            </button>
                        </div>
                        if let Some(msg) = &*form_error {
                            <p class="text-sm text-red-500 mt-3">{ msg.clone() }</p>
                        }
                    </div>

                    { render_load(&*status, |budget| html! {
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                            <StatCard title="Target" amount={budget.target} />
                            <StatCard title="Spent" amount={budget.spent} />
                            <StatCard title="Remaining" amount={budget.remaining} />
                            <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border">
                                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{"Exceeded"}</p>
                                <h3 class={classes!("text-2xl", "font-bold", if budget.exceeded { "text-rose-600" } else { "text-emerald-600" })}>
                                    { if budget.exceeded { "Yes" } else { "No" } }
                                </h3>
                            </div>
                        </div>
                    }) }
                </>
            }
        ) }
    }
}
