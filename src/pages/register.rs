use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::http::HttpClient;
use crate::routes::Route;
use crate::session::{self, use_session, SessionAction};

fn text_input(label: &'static str, kind: &'static str, value: &UseStateHandle<String>) -> Html {
    let oninput = {
        let value = value.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        })
    };
    html! {
        <div class="space-y-1">
            <label class="text-sm font-medium text-foreground">{ label }</label>
            <input
                type={kind}
                class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                value={(**value).clone()}
                {oninput}
            />
        </div>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = (*name).clone();
            let email_val = (*email).clone();
            let password_val = (*password).clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);
            spawn_local(async move {
                let client = HttpClient::new(None);
                match session::register(&client, &name_val, &email_val, &password_val).await {
                    Ok(credentials) => {
                        session.dispatch(SessionAction::SignedIn(credentials));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-foreground">{"Register"}</h1>
                    <p class="text-sm text-muted-foreground mt-2">{"Start managing your finances."}</p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    { text_input("Name", "text", &name) }
                    { text_input("Email", "email", &email) }
                    { text_input("Password", "password", &password) }

                    if let Some(msg) = &*error {
                        <div class="text-sm text-red-500">{ msg.clone() }</div>
                    }

                    <button
                        type="submit"
                        class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else { "Register" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-muted-foreground">
                    {"Already have an account?"}
                    <Link<Route> to={Route::Login} classes={classes!("ml-2", "text-primary", "font-semibold")}>{"Login"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
