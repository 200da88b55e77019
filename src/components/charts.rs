//! Minimal CSS bar charts. Heights and widths are percentages of the largest value.

use yew::prelude::*;

use crate::format::format_amount;
use crate::trend::CategorySlice;

#[derive(Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Percentage of `max` that `value` represents, clamped to `0..=100`.
pub fn scale(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    if props.labels.is_empty() {
        return html! { <p class="text-sm text-muted-foreground">{"No data yet."}</p> };
    }

    let max = props
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);

    html! {
        <div>
            <div class="flex items-end gap-4 h-40">
                { for props.labels.iter().enumerate().map(|(idx, label)| html! {
                    <div class="flex-1 flex flex-col items-center gap-1 h-full">
                        <div class="flex items-end gap-1 w-full flex-1">
                            { for props.series.iter().map(|s| {
                                let value = s.values.get(idx).copied().unwrap_or(0.0);
                                html! {
                                    <div class={classes!("flex-1", "rounded-t", s.color)}
                                        style={format!("height: {}%", scale(value, max))}
                                        title={format!("{}: {}", s.name, format_amount(value))}></div>
                                }
                            }) }
                        </div>
                        <span class="text-[10px] text-muted-foreground">{ label.clone() }</span>
                    </div>
                }) }
            </div>
            <div class="flex gap-4 mt-3 text-xs text-muted-foreground">
                { for props.series.iter().map(|s| html! {
                    <span class="flex items-center gap-1">
                        <span class={classes!("inline-block", "w-3", "h-3", "rounded-sm", s.color)}></span>
                        { s.name }
                    </span>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryBreakdownProps {
    pub slices: Vec<CategorySlice>,
}

#[function_component(CategoryBreakdown)]
pub fn category_breakdown(props: &CategoryBreakdownProps) -> Html {
    if props.slices.is_empty() {
        return html! { <p class="text-sm text-muted-foreground">{"No expenses this month."}</p> };
    }

    html! {
        <div class="space-y-2">
            { for props.slices.iter().map(|slice| html! {
                <div class="flex flex-col gap-1 text-sm">
                    <div class="flex items-center justify-between">
                        <span class="text-foreground capitalize">{ slice.category.clone() }</span>
                        <span class="text-muted-foreground">{ format!("{} ({}%)", format_amount(slice.total), slice.percent.round()) }</span>
                    </div>
                    <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                        <div class="h-full bg-primary" style={format!("width: {}%", slice.percent.clamp(0.0, 100.0))}></div>
                    </div>
                </div>
            }) }
        </div>
    }
}
