use super::dom::{self, AnimationLoop, Listener};
use crate::motion::{
    progress::{FrameThrottle, ScrollRange, ScrollTracker},
    reveal::{RevealAnimation, RevealTiming},
    style::VisualStyle,
    visibility::{crosses_threshold, measured_in_view, RevealState, VisibilityOptions},
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_visibility(
    element: &Element,
    options: VisibilityOptions,
    on_change: impl Fn(bool) + 'static,
) -> Option<VisibilityObserver> {
    let state = RefCell::new(RevealState::new(options.once));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let in_view = crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), &options);
                let mut state = state.borrow_mut();
                if let Some(flag) = state.observe(in_view) {
                    on_change(flag);
                }
                if !state.is_observing() {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some(VisibilityObserver {
        observer,
        _callback: callback,
    })
}

/// Entry flag for the referenced element. Without observer support the flag
/// is measured from scroll events instead. While the ref is unset the flag
/// stays `false`.
#[hook]
pub fn use_in_view(node: NodeRef, options: VisibilityOptions) -> bool {
    let in_view = use_state_eq(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with((node, options), move |(node, options)| {
            let options = *options;
            let observer = node.cast::<Element>().and_then(|element| {
                let in_view = in_view.clone();
                observe_visibility(&element, options, move |flag| in_view.set(flag))
            });

            let fallback = if observer.is_some() {
                Vec::new()
            } else {
                let node = node.clone();
                let state = RefCell::new(RevealState::new(options.once));
                throttled_scroll_listeners(Rc::new(move || {
                    if !state.borrow().is_observing() {
                        return;
                    }
                    let (width, height) = dom::viewport_size();
                    let rect = node.cast::<Element>().map(|element| dom::element_rect(&element));
                    if let Some(flag) = state
                        .borrow_mut()
                        .observe(measured_in_view(rect, width, height, &options))
                    {
                        in_view.set(flag);
                    }
                }))
            };

            move || {
                drop(observer);
                drop(fallback);
            }
        });
    }
    *in_view
}

/// Calls `measure` at most once per animation frame while the page scrolls or
/// resizes, plus once on mount.
fn throttled_scroll_listeners(measure: Rc<dyn Fn()>) -> Vec<Listener> {
    measure();
    let throttle = Rc::new(RefCell::new(FrameThrottle::default()));
    let schedule = move |_event: web_sys::Event| {
        if !throttle.borrow_mut().request() {
            return;
        }
        let throttle = throttle.clone();
        let measure = measure.clone();
        dom::request_frame(move || {
            throttle.borrow_mut().begin_frame();
            measure();
        });
    };

    [
        Listener::on_window("scroll", schedule.clone()),
        Listener::on_window("resize", schedule),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(dom::scroll_y);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let listeners = throttled_scroll_listeners(Rc::new(move || scroll_y.set(dom::scroll_y())));
            move || drop(listeners)
        });
    }
    *scroll_y
}

/// Progress of the referenced element through `range`, refreshed per frame.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let tracker = RefCell::new(ScrollTracker::new(range));
            let listeners = throttled_scroll_listeners(Rc::new(move || {
                let Some(element) = node.cast::<Element>() else {
                    return;
                };
                let rect = dom::element_rect(&element);
                let (_, viewport_height) = dom::viewport_size();
                if let Some(next) = tracker.borrow_mut().measure(rect.top, rect.height, viewport_height) {
                    progress.set(next);
                }
            }));
            move || drop(listeners)
        });
    }
    *progress
}

#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let matches = use_state_eq(|| dom::media_matches(query));
    {
        let matches = matches.clone();
        use_effect_with(query, move |query| {
            let query = *query;
            let listener = web_sys::window()
                .and_then(|win| win.match_media(query).ok().flatten())
                .and_then(|list| Listener::new(list.as_ref(), "change", move |_| matches.set(dom::media_matches(query))));
            move || drop(listener)
        });
    }
    *matches
}

/// Inline styles for a group of reveal tweens sharing one hidden style. The
/// tweens run on a single frame loop that stops once every one has settled;
/// without frame support they render their end state.
#[hook]
pub fn use_reveal_styles(visible: bool, hidden: VisualStyle, timings: Vec<RevealTiming>) -> Vec<String> {
    let animations = use_mut_ref(Vec::<RevealAnimation>::new);
    let without_frames = use_mut_ref(|| false);
    let frame_loop = use_mut_ref(|| None::<AnimationLoop>);
    let rerender = use_force_update();

    let count = timings.len();
    if animations.borrow().len() != count {
        *animations.borrow_mut() = timings
            .into_iter()
            .map(|timing| RevealAnimation::from_hidden(hidden, timing))
            .collect();
    }

    {
        let animations = animations.clone();
        let without_frames = without_frames.clone();
        use_effect_with((visible, count), move |(visible, _)| {
            let now = dom::now_ms();
            for animation in animations.borrow_mut().iter_mut() {
                animation.set_visible(*visible, now);
            }

            let next = AnimationLoop::start(move |_timestamp| {
                rerender.force_update();
                let now = dom::now_ms();
                !animations.borrow().iter().all(|animation| animation.is_settled(now))
            });
            *without_frames.borrow_mut() = next.is_none();
            *frame_loop.borrow_mut() = next;

            move || {
                frame_loop.borrow_mut().take();
            }
        });
    }

    let now = if *without_frames.borrow() { f64::INFINITY } else { dom::now_ms() };
    let styles: Vec<String> = animations
        .borrow()
        .iter()
        .map(|animation| animation.style(now).css())
        .collect();
    styles
}
