use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::layout::page_shell;
use crate::components::status::{render_load, StatCard};
use crate::load::LoadState;
use crate::models::MonthlyReport;
use crate::month::Month;
use crate::session::{end_if_unauthorized, use_session};

/// Opens a download in a new browser context.
fn open_download(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        tracing::error!(?err, url, "could not open download");
    }
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let session = use_session();
    let month = use_state(Month::current);
    let summary = use_state(LoadState::<MonthlyReport>::default);

    {
        let summary = summary.clone();
        use_effect_with_deps(
            move |month: &Month| {
                let month = *month;
                let client = session.client();
                summary.set(LoadState::Loading);
                spawn_local(async move {
                    let result = api::monthly_report(&client, month).await;
                    if let Err(err) = &result {
                        tracing::warn!(%err, %month, "could not load monthly report");
                        end_if_unauthorized(&session, &client, err);
                    }
                    summary.set(result.into());
                });
                || ()
            },
            *month,
        );
    }

    let on_month = {
        let month = month.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            if let Ok(next) = input.value().parse::<Month>() {
                month.set(next);
            }
        })
    };

    let on_pdf = {
        let month = month.clone();
        Callback::from(move |_| open_download(&api::report_pdf_url(*month)))
    };
    let on_csv = Callback::from(|_| open_download(&api::report_csv_url()));

    let actions = html! {
        <div class="flex items-center gap-3">
            <input type="month" value={(*month).to_string()} oninput={on_month}
                class="bg-[#f1f4f9] dark:bg-slate-800 rounded-[10px] px-3 py-2 text-[12px] border-none text-foreground" />
            <button onclick={on_pdf} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-[11px] font-bold">{"Download PDF"}</button>
            <button onclick={on_csv} class="border border-[#173E63] text-[#173E63] dark:text-sky-300 px-4 py-2 rounded-[10px] text-[11px] font-bold">{"Export CSV"}</button>
        </div>
    };

    html! {
        { page_shell(
            "Reports",
            actions,
            render_load(&*summary, |report| html! {
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <StatCard title="Income" amount={report.income} />
                    <StatCard title="Expense" amount={report.expense} />
                    <StatCard title="Savings" amount={report.savings} />
                    <StatCard title="Budget" amount={report.budget.unwrap_or(0.0)} />
                </div>
            }),
        ) }
    }
}
