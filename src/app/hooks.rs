use leptos::prelude::*;
use leptos_use::{
    use_interval_fn_with_options, use_window_size, utils::Pausable, UseIntervalFnOptions,
    UseWindowSizeReturn,
};

use crate::carousel::Advance;
use crate::motion::ScrollRange;

pub static WIDE_SCREEN: &str = "(min-width: 768px)";

/// Drives `state` with a repeating interval while its auto-advance timer is active.
///
/// The interval is paused whenever the controller reports its timer as cancelled,
/// resumed (never registered twice) when it starts again, and cleared when the
/// owning component is unmounted. The returned callback restarts the current
/// period; run it after a manual transition.
pub fn use_auto_advance<T>(state: RwSignal<T>) -> Callback<()>
where
    T: Advance + Send + Sync + 'static,
{
    let period = state.with_untracked(|s| s.period());
    let interval_ms = period.as_millis() as u64;
    if interval_ms == 0 {
        return Callback::new(|_| {});
    }

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || state.maybe_update(|s| s.tick(period) > 0),
        interval_ms,
        UseIntervalFnOptions::default().immediate(false),
    );

    let active = Memo::new(move |_| state.with(|s| s.auto_advance_active()));
    let restart = {
        let resume = resume.clone();
        Callback::new(move |_| {
            state.update_untracked(|s| s.rearm());
            // resuming clears the running interval and registers a fresh one
            if active.get_untracked() {
                resume();
            }
        })
    };
    Effect::new(move |_| {
        if active.get() {
            resume();
        } else {
            pause();
        }
    });
    restart
}

/// Scrubbed progress of an element through `range`, given its viewport-relative top.
pub fn use_scroll_progress(top: Signal<f64>, range: Signal<ScrollRange>) -> Signal<f64> {
    let UseWindowSizeReturn { height, .. } = use_window_size();
    Signal::derive(move || range.get().progress(top.get(), height.get()))
}
