//! Hero statistics and the waitlist social-proof counter

use leptos::html;
use leptos::prelude::*;

use crate::core::landing::{HERO_STATS_OBSERVER, WAITLIST_COUNT_START, stat_style, waitlist_label};
use crate::ui::reveal::use_revealed;

/// Delay between the stats becoming visible and their fade-in (ms)
#[cfg(not(feature = "ssr"))]
const STAT_FADE_DELAY_MS: u32 = 100;

/// Frame interval of the counter animation (ms)
#[cfg(not(feature = "ssr"))]
const COUNTER_FRAME_MS: u32 = 16;

/// Hero statistics that fade in once half visible
#[component]
pub fn HeroStats(stats: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_revealed(node, HERO_STATS_OBSERVER);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if in_view.get() && !shown.get_untracked() {
            #[cfg(not(feature = "ssr"))]
            gloo_timers::callback::Timeout::new(STAT_FADE_DELAY_MS, move || set_shown.set(true))
                .forget();
            #[cfg(feature = "ssr")]
            set_shown.set(true);
        }
    });

    view! {
        <div node_ref=node class="hero-stats">
            {stats.iter().map(|(number, label)| view! {
                <div class="stat">
                    <span class="stat-number" style=move || stat_style(shown.get())>{*number}</span>
                    <span class="stat-label">{*label}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

/// "Join N+ developers" counter, animated once `start` turns true
#[component]
pub fn WaitlistCounter(#[prop(into)] start: Signal<bool>) -> impl IntoView {
    let count = RwSignal::new(WAITLIST_COUNT_START);
    let started = StoredValue::new(false);

    Effect::new(move |_| {
        if !start.get() || started.get_value() {
            return;
        }
        started.set_value(true);

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            let animation = crate::core::landing::CounterAnimation::waitlist();
            let began = js_sys::Date::now();
            loop {
                let elapsed = js_sys::Date::now() - began;
                count.set(animation.value_at(elapsed));
                if animation.is_finished(elapsed) {
                    break;
                }
                gloo_timers::future::TimeoutFuture::new(COUNTER_FRAME_MS).await;
            }
        });
    });

    view! {
        <p class="social-proof">
            "Join "
            <strong>{move || waitlist_label(count.get())}</strong>
            " already on the waitlist"
        </p>
    }
}
