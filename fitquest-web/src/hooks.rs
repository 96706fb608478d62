//! Hooks tying controllers to the component lifecycle.

use futures::future::join;
use gloo_timers::callback::{Interval, Timeout};
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_unmount;
use yew_router::prelude::use_navigator;

use crate::controllers::Redirect;
use crate::lifecycle::{MountGuard, ProgressMeter};

/// A [`MountGuard`] released when the calling component unmounts.
#[hook]
pub fn use_mount_guard() -> MountGuard {
    let guard = use_memo((), |_| MountGuard::new());
    {
        let guard = guard.clone();
        use_unmount(move || guard.release());
    }
    (*guard).clone()
}

#[derive(Debug, Clone, Copy)]
pub enum ProgressAction {
    Tick,
    Complete,
}

impl Reducible for ProgressMeter {
    type Action = ProgressAction;

    fn reduce(self: Rc<Self>, action: ProgressAction) -> Rc<Self> {
        Rc::new(match action {
            ProgressAction::Tick => self.tick(),
            ProgressAction::Complete => self.complete(),
        })
    }
}

/// Percentage for a progress bar that creeps forward while `loading` and
/// jumps to 100 when it ends. The ticker stops on completion or unmount.
#[hook]
pub fn use_progress(loading: bool) -> u8 {
    let meter = use_reducer(ProgressMeter::default);
    {
        let dispatcher = meter.dispatcher();
        use_effect_with(loading, move |loading| {
            let ticker = if *loading {
                Some(Interval::new(ProgressMeter::TICK_MILLIS, move || {
                    dispatcher.dispatch(ProgressAction::Tick);
                }))
            } else {
                dispatcher.dispatch(ProgressAction::Complete);
                None
            };
            move || drop(ticker)
        });
    }
    meter.percent()
}

/// Callback scheduling a delayed navigation. A pending navigation is
/// cancelled when the component unmounts.
#[hook]
pub fn use_redirect() -> Callback<Redirect> {
    let navigator = use_navigator();
    let pending = use_mut_ref(|| None::<Timeout>);
    {
        let pending = pending.clone();
        use_unmount(move || {
            pending.borrow_mut().take();
        });
    }
    Callback::from(move |redirect: Redirect| {
        let Some(navigator) = navigator.clone() else {
            log::warn!("no router available for redirect");
            return;
        };
        let millis = u32::try_from(redirect.delay.as_millis()).unwrap_or(u32::MAX);
        let target = redirect.target;
        *pending.borrow_mut() = Some(Timeout::new(millis, move || target.apply(&navigator)));
    })
}

/// Run `task`, re-rendering once it has suspended so the in-flight state
/// shows, then hand back its output.
async fn rendering_while<T>(task: impl Future<Output = T>, refresh: &UseForceUpdateHandle) -> T {
    let (output, ()) = join(task, async { refresh.force_update() }).await;
    output
}

/// What a page needs to run controller operations: re-rendering, the
/// mount guard and delayed navigation.
#[derive(Clone)]
pub struct PageHandle {
    refresh: UseForceUpdateHandle,
    guard: MountGuard,
    redirect: Callback<Redirect>,
}

impl fmt::Debug for PageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHandle")
            .field("mounted", &self.guard.is_mounted())
            .finish_non_exhaustive()
    }
}

impl PageHandle {
    pub fn refresh(&self) {
        self.refresh.force_update();
    }

    pub fn redirect(&self, redirect: Redirect) {
        self.redirect.emit(redirect);
    }

    /// Spawn `task`; once it completes, re-render and call `then`, unless
    /// the page has been unmounted in the meantime.
    pub fn spawn<T: 'static>(
        &self,
        task: impl Future<Output = T> + 'static,
        then: impl FnOnce(&Self, T) + 'static,
    ) {
        let page = self.clone();
        spawn_local(async move {
            let output = rendering_while(task, &page.refresh).await;
            if page.guard.is_mounted() {
                page.refresh();
                then(&page, output);
            } else {
                log::debug!("page unmounted before its task finished, result dropped");
            }
        });
    }
}

#[hook]
pub fn use_page() -> PageHandle {
    PageHandle {
        refresh: use_force_update(),
        guard: use_mount_guard(),
        redirect: use_redirect(),
    }
}
