use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::{use_session, SessionAction};
use crate::theme::{use_theme, ThemeAction, ThemeMode};

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "Dashboard",
        route: Route::Dashboard,
        icon: icon_layout_grid,
    },
    NavItem {
        label: "Income",
        route: Route::Income,
        icon: icon_trending_up,
    },
    NavItem {
        label: "Expenses",
        route: Route::Expenses,
        icon: icon_credit_card,
    },
    NavItem {
        label: "Budget",
        route: Route::Budget,
        icon: icon_wallet,
    },
    NavItem {
        label: "Reports",
        route: Route::Reports,
        icon: icon_bar_chart,
    },
    NavItem {
        label: "Profile",
        route: Route::Profile,
        icon: icon_user,
    },
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let session = use_session();
    let theme = use_theme();
    let current = use_route::<Route>();
    let navigator = use_navigator();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            tracing::info!("signed out");
            session.dispatch(SessionAction::SignedOut);
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Login);
            }
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.dispatch(ThemeAction::Toggle))
    };

    let user_name = session.user().map(|u| u.name.clone()).unwrap_or_default();

    html! {
        <aside class="fixed inset-y-0 left-0 w-[220px] h-screen bg-[#D8E1E8] dark:bg-slate-900 p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-10 h-10 bg-[#173E63] rounded-full flex items-center justify-center text-white font-black">{"F"}</div>
                <div class="flex flex-col">
                    <span class="text-[#173E63] dark:text-slate-100 text-lg font-black tracking-tight">{"Finance Tracker"}</span>
                    <span class="text-xs text-slate-500 truncate">{ user_name }</span>
                </div>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for NAV_ITEMS.iter().map(|item| {
                        let is_active = current.as_ref() == Some(&item.route);
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        html! {
                            <Link<Route> to={item.route.clone()} classes={classes!(class_name)}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </Link<Route>>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4 space-y-1">
                    <button onclick={on_toggle_theme} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_moon() }
                        <span>{ if *theme == ThemeMode::Dark { "Light mode" } else { "Dark mode" } }</span>
                    </button>
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </aside>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-foreground">
            <path d={path}></path>
        </svg>
    }
}

fn icon_moon() -> Html {
    icon_base("M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z")
}
fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
fn icon_user() -> Html {
    icon_base("M20 21v-2a4 4 0 00-4-4H8a4 4 0 00-4 4v2M12 11a4 4 0 100-8 4 4 0 000 8z")
}
fn icon_log_out() -> Html {
    icon_base("M9 21H5a2 2 0 01-2-2V5a2 2 0 012-2h4M16 17l5-5-5-5M21 12H9")
}
