use yew::prelude::*;

use crate::error::ApiError;
use crate::format::format_amount;
use crate::load::LoadState;

pub fn loading_panel() -> Html {
    html! { <p class="text-sm text-muted-foreground">{"Loading..."}</p> }
}

pub fn error_panel(err: &ApiError) -> Html {
    html! {
        <div class="text-sm text-red-600 bg-red-50 border border-red-200 rounded-lg px-4 py-3">
            { err.to_string() }
        </div>
    }
}

/// Renders the loading or error placeholder, or hands the value to `view`.
pub fn render_load<T>(state: &LoadState<T>, view: impl FnOnce(&T) -> Html) -> Html {
    match state {
        LoadState::Loading => loading_panel(),
        LoadState::Failed(err) => error_panel(err),
        LoadState::Loaded(value) => view(value),
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: f64,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border">
            <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
            <h3 class="text-2xl font-bold text-[#1D617A] dark:text-sky-300 tracking-tight">{ format_amount(props.amount) }</h3>
        </div>
    }
}
