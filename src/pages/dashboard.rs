use futures::join;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::charts::{BarChart, CategoryBreakdown, Series};
use crate::components::layout::page_shell;
use crate::components::status::{render_load, StatCard};
use crate::load::LoadState;
use crate::models::MonthlyReport;
use crate::month::Month;
use crate::session::{end_if_unauthorized, use_session};
use crate::trend::{category_slices, fetch_trend, TrendPoint};

fn panel(title: &'static str, body: Html) -> Html {
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <h3 class="font-bold text-foreground text-lg mb-4">{ title }</h3>
            { body }
        </div>
    }
}

fn labels(trend: &[TrendPoint]) -> Vec<String> {
    trend.iter().map(|p| p.label.clone()).collect()
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let summary = use_state(LoadState::<MonthlyReport>::default);
    let trend = use_state(LoadState::<Vec<TrendPoint>>::default);

    {
        let summary = summary.clone();
        let trend = trend.clone();
        use_effect_with_deps(
            move |_| {
                let client = session.client();
                let current = Month::current();
                spawn_local(async move {
                    // Summary and trend fail independently; the trend itself is all-or-nothing.
                    let (summary_result, trend_result) = join!(
                        api::monthly_report(&client, current),
                        fetch_trend(current, |m| api::monthly_report(&client, m)),
                    );
                    for err in [summary_result.as_ref().err(), trend_result.as_ref().err()]
                        .into_iter()
                        .flatten()
                    {
                        tracing::warn!(%err, "dashboard report failed");
                        end_if_unauthorized(&session, &client, err);
                    }
                    summary.set(summary_result.into());
                    trend.set(trend_result.into());
                });
                || ()
            },
            (),
        );
    }

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    { render_load(&*summary, |report| html! {
                        <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                            <StatCard title="Income" amount={report.income} />
                            <StatCard title="Expenses" amount={report.expense} />
                            <StatCard title="Savings" amount={report.savings} />
                            <StatCard title="Budget" amount={report.budget.unwrap_or(0.0)} />
                        </div>
                    }) }

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        { panel("Income vs Expenses", render_load(&*trend, |points| html! {
                            <BarChart labels={labels(points)} series={vec![
                                Series { name: "Income", color: "bg-emerald-500", values: points.iter().map(|p| p.income).collect() },
                                Series { name: "Expense", color: "bg-rose-500", values: points.iter().map(|p| p.spend).collect() },
                            ]} />
                        })) }
                        { panel("Category-wise Expenses", render_load(&*summary, |report| html! {
                            <CategoryBreakdown slices={category_slices(report)} />
                        })) }
                        { panel("Savings", render_load(&*trend, |points| html! {
                            <BarChart labels={labels(points)} series={vec![
                                Series { name: "Savings", color: "bg-sky-500", values: points.iter().map(|p| p.savings).collect() },
                            ]} />
                        })) }
                        { panel("Spending Trend", render_load(&*trend, |points| html! {
                            <BarChart labels={labels(points)} series={vec![
                                Series { name: "Spend", color: "bg-amber-500", values: points.iter().map(|p| p.spend).collect() },
                            ]} />
                        })) }
                    </div>
                </>
            }
        ) }
    }
}
