use super::{
    dom::{AnimationLoop, Listener},
    hooks::use_media_query,
};
use crate::motion::cursor::{cursor_enabled, CursorState, CursorTracker, HoverProbe};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

impl HoverProbe for Element {
    fn closest_matches(&self, selector: &str) -> bool {
        matches!(self.closest(selector), Ok(Some(_)))
    }

    fn closest_attribute(&self, selector: &str, attribute: &str) -> Option<String> {
        self.closest(selector).ok().flatten()?.get_attribute(attribute)
    }
}

fn place(node: &NodeRef, x: f64, y: f64, scale: f64, rotation_deg: f64, visible: bool) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let style = format!(
            "transform: translate3d({x:.2}px, {y:.2}px, 0) translate(-50%, -50%) scale({scale:.4}) rotate({rotation_deg:.2}deg); opacity: {};",
            if visible { 1 } else { 0 }
        );
        let _ = element.set_attribute("style", &style);
    }
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let hover_none = use_media_query("(hover: none)");
    let coarse = use_media_query("(pointer: coarse)");
    let enabled = cursor_enabled(|query| match query {
        "(hover: none)" => hover_none,
        "(pointer: coarse)" => coarse,
        _ => false,
    });

    let dot = use_node_ref();
    let ring = use_node_ref();
    let trail = use_node_ref();
    let state = use_state_eq(|| (CursorState::Default, None::<String>));

    {
        let (dot, ring, trail, state) = (dot.clone(), ring.clone(), trail.clone(), state.clone());
        use_effect_with(enabled, move |enabled| {
            let mut handles = (Vec::new(), None);
            if *enabled {
                let tracker = Rc::new(RefCell::new(CursorTracker::new()));

                let on_move = {
                    let tracker = tracker.clone();
                    move |event: web_sys::Event| {
                        if let Some(event) = event.dyn_ref::<MouseEvent>() {
                            tracker
                                .borrow_mut()
                                .pointer_moved(f64::from(event.client_x()), f64::from(event.client_y()));
                        }
                    }
                };
                let on_over = {
                    let tracker = tracker.clone();
                    move |event: web_sys::Event| {
                        let Some(element) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
                            return;
                        };
                        let mut tracker = tracker.borrow_mut();
                        tracker.pointer_over(&element);
                        state.set((tracker.state(), tracker.label().map(ToString::to_string)));
                    }
                };
                let on_leave = {
                    let tracker = tracker.clone();
                    move |_| tracker.borrow_mut().pointer_left_document()
                };
                let on_enter = {
                    let tracker = tracker.clone();
                    move |_| tracker.borrow_mut().pointer_entered_document()
                };

                handles.0 = [
                    Listener::on_window("mousemove", on_move),
                    Listener::on_document("mouseover", on_over),
                    Listener::on_document("mouseleave", on_leave),
                    Listener::on_document("mouseenter", on_enter),
                ]
                .into_iter()
                .flatten()
                .collect();

                let mut last = None::<f64>;
                handles.1 = AnimationLoop::start(move |timestamp| {
                    let dt = last.map_or(0.0, |previous| (timestamp - previous) / 1_000.0);
                    last = Some(timestamp);
                    let mut tracker = tracker.borrow_mut();
                    let frame = tracker.step(dt);
                    let visible = tracker.is_visible();
                    place(&dot, frame.dot.0, frame.dot.1, frame.dot_scale, 0.0, visible);
                    place(&ring, frame.ring.0, frame.ring.1, frame.ring_scale, frame.ring_rotation_deg, visible);
                    place(&trail, frame.trail.0, frame.trail.1, 1.0, 0.0, visible);
                    true
                });
            }
            move || drop(handles)
        });
    }

    if !enabled {
        return html! {};
    }

    let (cursor_state, label) = (*state).clone();
    html! {
        <div class={classes!("cursor", format!("cursor-{}", cursor_state.as_str()))} aria-hidden="true">
            <div ref={trail} class="cursor-trail" />
            <div ref={ring} class="cursor-ring" />
            <div ref={dot} class="cursor-dot">
                if let Some(label) = label {
                    <span class="cursor-label">{label}</span>
                }
            </div>
        </div>
    }
}
