//! Signup page — account registration form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Client-side validation mirroring what the backend will reject anyway,
/// so obvious mistakes never leave the page.
fn validate_signup(
    first: &str,
    last: &str,
    email: &str,
    confirm_email: &str,
    password: &str,
) -> Result<(), String> {
    if first.trim().is_empty() || last.trim().is_empty() {
        return Err("Enter your first and last name.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    if email.trim() != confirm_email.trim() {
        return Err("Email addresses do not match.".to_owned());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.".to_owned());
    }
    Ok(())
}

/// Signup page. Successful registration routes to the login page;
/// validation and backend errors report inline.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let first = RwSignal::new(String::new());
    let last = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let confirm_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let first_value = first.get();
        let last_value = last.get();
        let email_value = email.get();
        let confirm_value = confirm_email.get();
        let password_value = password.get();
        if let Err(message) = validate_signup(
            &first_value,
            &last_value,
            &email_value,
            &confirm_value,
            &password_value,
        ) {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::signup(
                    first_value.trim(),
                    last_value.trim(),
                    email_value.trim(),
                    &password_value,
                )
                .await;
                match outcome {
                    Ok(resp) => {
                        if let Some(message) = resp.error {
                            error.set(Some(message));
                        } else {
                            navigate("/login", NavigateOptions::default());
                        }
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (first_value, last_value, email_value, password_value, &navigate);
            busy.set(false);
        }
    });

    let field = move |label: &'static str,
                      kind: &'static str,
                      signal: RwSignal<String>| {
        view! {
            <label class="auth-page__label">
                {label}
                <input
                    class="auth-page__input"
                    type=kind
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Create your account"</h1>

            <div class="auth-page__card">
                {field("First name", "text", first)}
                {field("Last name", "text", last)}
                {field("Email", "email", email)}
                {field("Confirm email", "email", confirm_email)}
                {field("Password", "password", password)}

                {move || error.get().map(|message| view! { <p class="auth-page__error">{message}</p> })}

                <button
                    class="btn btn--primary auth-page__submit"
                    on:click=move |_| submit.run(())
                    disabled=move || busy.get()
                >
                    {move || if busy.get() { "Creating..." } else { "Create account" }}
                </button>

                <p class="auth-page__switch">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
