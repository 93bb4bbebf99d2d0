use super::dom::AnimationLoop;
use crate::{
    logging::{log_event, LogLevel},
    motion::preloader::{
        line_track, subtitle_track, title_track, ExitFrame, Preloader as Sequence, PreloaderFrame, PreloaderPhase,
        SUBTITLE, TITLE,
    },
    motion::reveal::text_units,
};
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

fn letters(text: &str, class: &'static str, progress: impl Fn(usize) -> f64) -> Html {
    html! {
        { for text_units(text).into_iter().enumerate().map(|(index, unit)| {
            let t = progress(index);
            let style = format!(
                "display: inline-block; opacity: {:.4}; transform: translateY({:.2}%);",
                t,
                (1.0 - t) * 100.0
            );
            html! { <span class={class} style={style}>{unit}</span> }
        }) }
    }
}

fn content_style(exit: Option<&ExitFrame>, index: usize) -> String {
    let (opacity, y) = exit.map_or((1.0, 0.0), |frame| frame.content[index]);
    format!("opacity: {opacity:.4}; transform: translateY({y:.2}px);")
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let frame = use_state(|| None::<PreloaderFrame>);

    {
        let frame = frame.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with((), move |_| {
            let sequence = Rc::new(RefCell::new(Sequence::new()));
            let frame_loop = {
                let sequence = sequence.clone();
                let on_complete = on_complete.clone();
                AnimationLoop::start(move |timestamp| {
                    let next = sequence.borrow_mut().tick(timestamp);
                    frame.set(Some(next));
                    if next.completed {
                        log_event(
                            LogLevel::Info,
                            "preloader_complete",
                            serde_json::json!({ "elapsed_ms": next.elapsed_ms.round() }),
                        );
                        on_complete.emit(());
                    }
                    next.phase != PreloaderPhase::Done
                })
            };

            // No frame support: nothing to show, let the page through.
            if frame_loop.is_none() && sequence.borrow_mut().abort() {
                on_complete.emit(());
            }

            move || {
                drop(frame_loop);
                if sequence.borrow_mut().abort() {
                    on_complete.emit(());
                }
            }
        });
    }

    let Some(current) = *frame else {
        return html! { <div class="preloader" aria-hidden="true" /> };
    };
    if current.phase == PreloaderPhase::Done {
        return html! {};
    }

    let elapsed = current.elapsed_ms;
    let exit = current.exit.as_ref();
    let (top, bottom) = exit.map_or((0.0, 0.0), |frame| (frame.curtain_top_percent, frame.curtain_bottom_percent));
    let line = line_track().progress(0, elapsed);

    html! {
        <div class="preloader" role="status" aria-live="polite" aria-label="Loading">
            <div class="preloader-curtain preloader-curtain-top" style={format!("transform: translateY({top:.2}%);")} />
            <div class="preloader-curtain preloader-curtain-bottom" style={format!("transform: translateY({bottom:.2}%);")} />
            <div class="preloader-content">
                <h1 class="preloader-title" style={content_style(exit, 0)}>
                    { letters(TITLE, "preloader-letter", |index| title_track().progress(index, elapsed)) }
                </h1>
                <p class="preloader-subtitle" style={content_style(exit, 1)}>
                    { letters(SUBTITLE, "preloader-subtitle-letter", |index| subtitle_track().progress(index, elapsed)) }
                </p>
                <div class="preloader-counter" style={content_style(exit, 2)}>
                    {format!("{}%", current.counter)}
                </div>
                <div class="preloader-line" style={content_style(exit, 3)}>
                    <div class="preloader-line-track" style={format!("transform: scaleX({line:.4});")}>
                        <div class="preloader-bar" style={format!("transform: scaleX({:.4});", current.bar_fill)} />
                    </div>
                </div>
            </div>
        </div>
    }
}
