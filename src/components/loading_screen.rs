//! Full-screen loading sequence shown before the site.
//!
//! ARCHITECTURE
//! ============
//! `effects::loader::Loader` decides what happens and when. This component
//! mirrors its progress into a signal and keeps exactly one timeout pending,
//! aimed at the loader's next deadline. Unmounting clears the `alive` flag;
//! the pending timeout then cancels the loader instead of advancing it, so
//! the completion callback can never fire after teardown.

use leptos::prelude::*;

use effects::LoaderConfig;
use effects::increments::IncrementSource;
use effects::loader::Loader;

#[cfg(feature = "csr")]
use crate::util::clock::{entropy_seed, now_ms};
#[cfg(feature = "csr")]
use crate::util::deadline::wake_at;
#[cfg(feature = "csr")]
use effects::increments::RandomIncrements;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;
#[cfg(feature = "csr")]
use std::sync::Arc;
#[cfg(feature = "csr")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
#[path = "loading_screen_test.rs"]
mod loading_screen_test;

/// Snapshot of loader state for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct LoaderView {
    pub progress: f64,
    pub percent: u8,
    pub label: String,
}

impl LoaderView {
    /// What the screen shows before the first tick.
    #[must_use]
    pub fn initial(config: &LoaderConfig) -> Self {
        Self { progress: 0.0, percent: 0, label: config.phases.first().cloned().unwrap_or_default() }
    }

    #[must_use]
    pub fn of<S: IncrementSource>(loader: &Loader<S>) -> Self {
        Self { progress: loader.progress(), percent: loader.percent(), label: loader.phase_label().to_owned() }
    }
}

/// CSS width of the progress bar fill.
#[must_use]
pub fn bar_width(progress: f64) -> String {
    format!("{:.1}%", progress.clamp(0.0, 100.0))
}

#[must_use]
pub fn percent_label(percent: u8) -> String {
    format!("{percent}%")
}

#[cfg(feature = "csr")]
fn schedule(loader: Rc<RefCell<Loader<RandomIncrements>>>, alive: Arc<AtomicBool>, view_state: RwSignal<LoaderView>) {
    let Some(deadline) = loader.borrow().next_deadline_ms() else {
        return;
    };
    wake_at(deadline, move || {
        if !alive.load(Ordering::Relaxed) {
            loader.borrow_mut().cancel();
            return;
        }
        let events = loader.borrow_mut().advance(now_ms());
        if !events.is_empty() && alive.load(Ordering::Relaxed) {
            view_state.set(LoaderView::of(&loader.borrow()));
        }
        schedule(loader, alive, view_state);
    });
}

/// Loading screen. Calls `on_complete` once the simulated load finishes.
#[component]
pub fn LoadingScreen(config: LoaderConfig, on_complete: Callback<()>) -> impl IntoView {
    let view_state = RwSignal::new(LoaderView::initial(&config));

    #[cfg(feature = "csr")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let seed = entropy_seed();
        match Loader::new(config, RandomIncrements::seeded(seed), move || on_complete.run(()), now_ms()) {
            Ok(loader) => schedule(Rc::new(RefCell::new(loader)), Arc::clone(&alive), view_state),
            Err(err) => {
                log::warn!("loading screen skipped: {err}");
                on_complete.run(());
            }
        }
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, on_complete);
    }

    let label = move || view_state.with(|v| v.label.clone());
    let percent = move || view_state.with(|v| percent_label(v.percent));
    let width = move || view_state.with(|v| bar_width(v.progress));

    view! {
        <div class="loading-screen" role="progressbar" aria-valuemin="0" aria-valuemax="100"
            aria-valuenow=move || view_state.with(|v| v.percent.to_string())>
            <div class="loading-screen__logo">"RAJ.3D"</div>
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">{label}</p>
            <div class="loading-screen__bar">
                <div class="loading-screen__meta">
                    <span>"Progress"</span>
                    <span class="loading-screen__percent">{percent}</span>
                </div>
                <div class="loading-screen__track">
                    <div class="loading-screen__fill" style:width=width></div>
                </div>
            </div>
        </div>
    }
}
