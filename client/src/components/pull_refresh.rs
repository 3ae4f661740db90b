//! Pull-to-refresh wrapper around the scrolling task list.

#[cfg(test)]
#[path = "pull_refresh_test.rs"]
mod pull_refresh_test;

use leptos::prelude::*;
use tasks::gesture::{PullPhase, PullToRefresh};

use crate::util::pointer;

fn indicator_label(phase: PullPhase, armed: bool) -> &'static str {
    match phase {
        PullPhase::Refreshing => "Refreshing...",
        PullPhase::Pulling if armed => "Release to refresh",
        PullPhase::Pulling | PullPhase::Idle => "Pull to refresh",
    }
}

/// Scroll container that reports a completed pull through `on_refresh`.
/// `refreshing` going false ends the hold.
#[component]
pub fn PullRefresh(
    #[prop(into)] refreshing: Signal<bool>,
    on_refresh: Callback<()>,
    children: Children,
) -> impl IntoView {
    let pull = RwSignal::new(PullToRefresh::new());
    let scroller = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if !refreshing.get() && pull.with_untracked(|p| p.phase() == PullPhase::Refreshing) {
            pull.update(PullToRefresh::finish);
        }
    });

    let scroll_top = move || {
        #[cfg(feature = "hydrate")]
        {
            scroller.get_untracked().map_or(0.0, |el| f64::from(el.scroll_top()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0.0
        }
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if refreshing.get_untracked() {
            return;
        }
        let (_, y) = pointer::point(&ev);
        let top = scroll_top();
        pull.update(|p| {
            p.start(y, top);
        });
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if pull.with_untracked(|p| p.phase() != PullPhase::Pulling) {
            return;
        }
        let (_, y) = pointer::point(&ev);
        pull.update(|p| {
            p.update(y);
        });
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        let mut fire = false;
        pull.update(|p| fire = p.release());
        if fire {
            on_refresh.run(());
            // Nothing started; drop the hold.
            if !refreshing.get_untracked() {
                pull.update(PullToRefresh::finish);
            }
        }
    };
    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| {
        if pull.with_untracked(|p| p.phase() == PullPhase::Pulling) {
            pull.update(|p| {
                p.release();
            });
        }
    };

    view! {
        <div
            class="pull-refresh"
            node_ref=scroller
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            <div
                class="pull-refresh__indicator"
                class:pull-refresh__indicator--armed=move || pull.with(PullToRefresh::is_armed)
                class:pull-refresh__indicator--busy=move || pull.with(|p| p.phase() == PullPhase::Refreshing)
                style:height=move || format!("{}px", pull.with(PullToRefresh::distance))
            >
                {move || pull.with(|p| indicator_label(p.phase(), p.is_armed()))}
            </div>
            {children()}
        </div>
    }
}
