use leptos::prelude::*;
use tracing::error;

use crate::dom;

/// Shown instead of the page when a section fails to render.
#[component]
pub fn RecoveryScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    Effect::new(move || {
        for (_, err) in errors.get() {
            error!(%err, "section failed to render");
        }
    });

    view! {
        <div class="recovery">
            <div class="pro-card recovery-card" role="alert">
                <h1>"Something went wrong"</h1>
                <p>
                    "We're sorry, but something unexpected happened. Please try refreshing the page."
                </p>
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| {
                        if let Err(err) = dom::reload() {
                            error!(%err, "reload failed");
                        }
                    }
                >
                    "Refresh Page"
                </button>
            </div>
        </div>
    }
}
