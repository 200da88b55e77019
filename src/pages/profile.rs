use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::page_shell;
use crate::components::status::render_load;
use crate::load::LoadState;
use crate::models::User;
use crate::routes::Route;
use crate::session::{end_if_unauthorized, use_session, AuthApi, SessionAction};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let me = use_state(LoadState::<User>::default);

    {
        let session = session.clone();
        let me = me.clone();
        use_effect_with_deps(
            move |_| {
                let client = session.client();
                spawn_local(async move {
                    let result = client.current_user().await;
                    match &result {
                        Ok(user) => session.dispatch(SessionAction::UserRefreshed(user.clone())),
                        Err(err) => {
                            tracing::warn!(%err, "could not load profile");
                            end_if_unauthorized(&session, &client, err);
                        }
                    }
                    me.set(result.into());
                });
                || ()
            },
            (),
        );
    }

    let on_logout = Callback::from(move |_: MouseEvent| {
        tracing::info!("signed out");
        session.dispatch(SessionAction::SignedOut);
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::Login);
        }
    });

    html! {
        { page_shell(
            "Profile",
            html! {},
            render_load(&*me, |user| html! {
                <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border max-w-md space-y-3">
                    <div>
                        <p class="text-muted-foreground text-[10px] font-bold tracking-widest uppercase">{"Name"}</p>
                        <p class="text-lg font-semibold text-foreground">{ user.name.clone() }</p>
                    </div>
                    <div>
                        <p class="text-muted-foreground text-[10px] font-bold tracking-widest uppercase">{"Email"}</p>
                        <p class="text-lg font-semibold text-foreground">{ user.email.clone() }</p>
                    </div>
                    <button onclick={on_logout.clone()} class="mt-2 border border-[#173E63] text-[#173E63] dark:text-sky-300 px-6 py-2 rounded-[10px] text-[11px] font-bold">
                        {"Logout"}
                    </button>
                </div>
            }),
        ) }
    }
}
