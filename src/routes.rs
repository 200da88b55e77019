use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/income")]
    Income,
    #[at("/expenses")]
    Expenses,
    #[at("/budget")]
    Budget,
    #[at("/reports")]
    Reports,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Unmatched,
}

impl Route {
    pub fn visibility(&self) -> Visibility {
        match self {
            Route::Login | Route::Register => Visibility::Public,
            Route::NotFound => Visibility::Unmatched,
            Route::Dashboard
            | Route::Income
            | Route::Expenses
            | Route::Budget
            | Route::Reports
            | Route::Profile => Visibility::Protected,
        }
    }
}
