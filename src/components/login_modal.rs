//! Login dialog with username/password form, remember-me toggle, and links
//! to registration and password reset.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::LoginConfig;
use crate::net::api::HttpAuthService;
use crate::net::types::DismissReason;
use crate::state::login::LoginModal;
use crate::util::events::EventManager;
use crate::util::modal::ActiveModal;
use crate::util::navigation::RouterNavigator;
use crate::util::state_storage::SessionStateStorage;

/// Login dialog. `on_dismiss` receives the reason whenever the dialog closes.
///
/// Must be rendered inside a `<Router>`; `events` defaults to a private
/// `EventManager` when the host does not share one.
#[component]
pub fn LoginDialog(
    on_dismiss: Callback<DismissReason>,
    #[prop(optional)] events: Option<EventManager>,
    #[prop(optional)] config: Option<LoginConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let pathname = use_location().pathname;
    let navigator = RouterNavigator::new(use_navigate(), move || pathname.get_untracked());

    let model = LoginModal::new(
        HttpAuthService::new(config.auth_endpoint.clone()),
        SessionStateStorage::new(config.redirect_storage_key.clone()),
        navigator,
        events.unwrap_or_default(),
        ActiveModal::new(move |reason| on_dismiss.run(reason)),
    )
    .with_config(config);
    model.open();
    let focus_username = model.take_focus_request();
    let model = StoredValue::new_local(Rc::new(model));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(true);
    let auth_error = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let username_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if focus_username {
            if let Some(input) = username_ref.get() {
                let _ = input.focus();
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = focus_username;

    let cancel = move || {
        model.with_value(|m| m.cancel());
        username.set(String::new());
        password.set(String::new());
        auth_error.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let model = model.get_value();
            leptos::task::spawn_local(async move {
                model.login().await;
                auth_error.set(model.authentication_error());
                busy.set(false);
            });
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            cancel();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div
                class="dialog dialog--login"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Sign in"</h2>
                <Show when=move || auth_error.get()>
                    <p class="login-message login-message--error">
                        "Failed to sign in! Please check your credentials and try again."
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="username">"Login"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        placeholder="Your username"
                        node_ref=username_ref
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            model.with_value(|m| m.set_username(&value));
                            username.set(value);
                        }
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            model.with_value(|m| m.set_password(&value));
                            password.set(value);
                        }
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                model.with_value(|m| m.set_remember_me(checked));
                                remember_me.set(checked);
                            }
                        />
                        "Remember me"
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="login-links">
                    <a href="/reset/request" on:click=move |ev| {
                        ev.prevent_default();
                        model.with_value(|m| m.request_reset_password());
                    }>
                        "Did you forget your password?"
                    </a>
                </p>
                <p class="login-links">
                    "You don't have an account yet? "
                    <a href="/register" on:click=move |ev| {
                        ev.prevent_default();
                        model.with_value(|m| m.register());
                    }>
                        "Register a new account"
                    </a>
                </p>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| cancel()>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}
