use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Sidebar;
use crate::guard::{self, Access};
use crate::pages::budget::BudgetPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::expenses::ExpensesPage;
use crate::pages::income::IncomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::reports::ReportsPage;
use crate::routes::Route;
use crate::session::{use_session, AuthStatus, SessionProvider};
use crate::theme::ThemeProvider;

#[derive(Properties, PartialEq)]
struct RedirectProps {
    to: Route,
}

/// Navigates once on mount, replacing the current history entry.
#[function_component(ReplaceRedirect)]
fn replace_redirect(props: &RedirectProps) -> Html {
    let navigator = use_navigator();
    use_effect_with_deps(
        move |to: &Route| {
            if let Some(navigator) = navigator {
                tracing::debug!(?to, "redirecting");
                navigator.replace(to);
            }
            || ()
        },
        props.to.clone(),
    );
    html! {}
}

fn page(route: &Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Income => html! { <IncomePage /> },
        Route::Expenses => html! { <ExpensesPage /> },
        Route::Budget => html! { <BudgetPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::Profile => html! { <ProfilePage /> },
        // Never rendered: unmatched paths always redirect.
        Route::NotFound => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct RouteGateProps {
    route: Route,
}

#[function_component(RouteGate)]
fn route_gate(props: &RouteGateProps) -> Html {
    let session = use_session();
    match guard::check(&props.route, session.status()) {
        Access::Render => page(&props.route),
        Access::Redirect(to) => html! { <ReplaceRedirect {to} /> },
        Access::Wait => html! {
            <div class="min-h-screen flex items-center justify-center bg-background text-muted-foreground">
                {"Checking session..."}
            </div>
        },
    }
}

fn switch(route: Route) -> Html {
    html! { <RouteGate {route} /> }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_session();
    let signed_in = session.status() == AuthStatus::Authenticated;

    html! {
        <div class="min-h-screen bg-background">
            if signed_in {
                <Sidebar />
            }
            <main class={classes!("min-h-screen", signed_in.then_some("ml-[220px]"))}>
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <SessionProvider>
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            </SessionProvider>
        </ThemeProvider>
    }
}
