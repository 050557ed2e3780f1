//! Login page — email/password against the auth endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Build the display name stored in the session: "First Last" when either
/// part is present, otherwise the mailbox part of the email address.
fn display_name(first: Option<&str>, last: Option<&str>, email: &str) -> String {
    let name = format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_owned();
    if name.is_empty() {
        email.split('@').next().unwrap_or(email).to_owned()
    } else {
        name
    }
}

/// Login page. A successful login fills the session context and navigates
/// home; a rejected one renders the backend's message inline.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some("Enter your email and password.".to_owned()));
            return;
        }
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(email_value.trim(), &password_value).await {
                    Ok(resp) => {
                        if let Some(user_id) = resp.user_id {
                            let name = display_name(
                                resp.first_name.as_deref(),
                                resp.last_name.as_deref(),
                                email_value.trim(),
                            );
                            session.update(|s| {
                                s.sign_in(
                                    user_id.to_string(),
                                    name,
                                    resp.email.unwrap_or_else(|| email_value.trim().to_owned()),
                                );
                            });
                            navigate("/", NavigateOptions::default());
                        } else {
                            let message =
                                resp.error.unwrap_or_else(|| "login failed".to_owned());
                            error.set(Some(message));
                        }
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit.run(());
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Notewise"</h1>
            <p class="auth-page__tagline">"Explanations that stick."</p>

            <div class="auth-page__card">
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>

                {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

                <button
                    class="btn btn--primary auth-page__submit"
                    on:click=move |_| submit.run(())
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>

                <p class="auth-page__switch">
                    "No account yet? "
                    <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
