//! Code blocks with a copy-to-clipboard button

use leptos::prelude::*;

use crate::core::landing::CopyState;

/// Write `text` to the system clipboard
#[cfg(not(feature = "ssr"))]
async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Preformatted code sample with a copy button above it
#[component]
pub fn CodeBlock(
    /// Language label shown in the header
    language: &'static str,
    /// Code copied verbatim
    code: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(CopyState::Idle);

    let on_copy = move |_| {
        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            let result = write_clipboard(code).await;
            if let Err(err) = &result {
                leptos::logging::error!("Failed to copy: {}", err);
            }

            let next = CopyState::from_result(&result);
            state.set(next);
            if next.is_transient() {
                gloo_timers::future::TimeoutFuture::new(crate::core::landing::COPY_FEEDBACK_MS)
                    .await;
                state.set(CopyState::Idle);
            }
        });
    };

    view! {
        <div class="code-block">
            <div class="code-header">
                <span class="code-language">{language}</span>
                <button
                    type="button"
                    class=move || format!("copy-btn {}", state.get().class()).trim_end().to_string()
                    on:click=on_copy
                >
                    {move || state.get().label()}
                </button>
            </div>
            <pre><code class=format!("language-{}", language)>{code}</code></pre>
        </div>
    }
}
