//! Subscription page — plan matrix with a monthly/yearly toggle.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::state::session::SessionState;

struct Plan {
    id: &'static str,
    name: &'static str,
    monthly_cents: u32,
    blurb: &'static str,
    features: &'static [&'static str],
}

const PLANS: [Plan; 3] = [
    Plan {
        id: "free",
        name: "Free",
        monthly_cents: 0,
        blurb: "Try it out",
        features: &["5 explanations per month", "Basic notes"],
    },
    Plan {
        id: "plus",
        name: "Plus",
        monthly_cents: 900,
        blurb: "For regular learners",
        features: &["Unlimited explanations", "Reference books", "Concept maps"],
    },
    Plan {
        id: "pro",
        name: "Pro",
        monthly_cents: 1900,
        blurb: "Everything, faster",
        features: &["Everything in Plus", "Pro generation mode", "Priority queue"],
    },
];

/// Yearly billing charges ten months for twelve.
fn price_cents(monthly_cents: u32, yearly: bool) -> u32 {
    if yearly { monthly_cents * 10 } else { monthly_cents }
}

/// Human price label for a plan under the chosen billing cycle.
fn price_label(monthly_cents: u32, yearly: bool) -> String {
    let cents = price_cents(monthly_cents, yearly);
    if cents == 0 {
        return "Free".to_owned();
    }
    let period = if yearly { "yr" } else { "mo" };
    format!("${}.{:02}/{period}", cents / 100, cents % 100)
}

/// Subscription page — choose a plan, redirect to checkout.
#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let yearly = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_subscribe = move |plan_id: &'static str| {
        let Some(user_id) = session.get().user_id else {
            error.set(Some("Sign in to change your plan.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let cycle_yearly = yearly.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::start_checkout(&user_id, plan_id, cycle_yearly).await {
                    Ok(resp) if resp.success => {
                        if let Some(url) = resp.checkout_url {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(&url);
                            }
                        }
                    }
                    Ok(resp) => {
                        let message =
                            resp.message.unwrap_or_else(|| "checkout failed".to_owned());
                        error.set(Some(message));
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, plan_id);
        }
    };

    view! {
        <MainLayout>
            <main class="subscription-page">
                <h1>"Choose your plan"</h1>

                <div class="subscription-page__cycle">
                    <button
                        class="subscription-page__cycle-option"
                        class:subscription-page__cycle-option--active=move || !yearly.get()
                        on:click=move |_| yearly.set(false)
                    >
                        "Monthly"
                    </button>
                    <button
                        class="subscription-page__cycle-option"
                        class:subscription-page__cycle-option--active=move || yearly.get()
                        on:click=move |_| yearly.set(true)
                    >
                        "Yearly (2 months free)"
                    </button>
                </div>

                {move || error.get().map(|message| view! { <p class="subscription-page__error">{message}</p> })}

                <div class="subscription-page__plans">
                    {PLANS
                        .iter()
                        .map(|plan| {
                            let plan_id = plan.id;
                            let monthly_cents = plan.monthly_cents;
                            view! {
                                <div class="subscription-page__plan">
                                    <h2>{plan.name}</h2>
                                    <p class="subscription-page__blurb">{plan.blurb}</p>
                                    <p class="subscription-page__price">
                                        {move || price_label(monthly_cents, yearly.get())}
                                    </p>
                                    <ul class="subscription-page__features">
                                        {plan
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| on_subscribe(plan_id)
                                    >
                                        {if monthly_cents == 0 { "Current plan" } else { "Subscribe" }}
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </MainLayout>
    }
}
