use super::hooks::{use_in_view, use_reveal_styles};
use crate::motion::{
    reveal::{
        text_units, RevealPreset, RevealTiming, LETTER_DURATION_MS, LETTER_HIDDEN, LETTER_STAGGER_MS,
        LINE_DURATION_MS, STAGGER_ITEM_DURATION_MS, STAGGER_ITEM_HIDDEN, STAGGER_MS, TEXT_REVEAL_THRESHOLD,
    },
    visibility::VisibilityOptions,
};
use yew::prelude::*;

fn visibility(threshold: f64, once: bool) -> VisibilityOptions {
    let options = VisibilityOptions::threshold(threshold);
    if once {
        options
    } else {
        options.continuous()
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub preset: RevealPreset,
    #[prop_or_default]
    pub delay_ms: f64,
    #[prop_or(800.0)]
    pub duration_ms: f64,
    #[prop_or(0.2)]
    pub threshold: f64,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), visibility(props.threshold, props.once));
    let styles = use_reveal_styles(
        in_view,
        props.preset.hidden(),
        vec![RevealTiming::new(props.delay_ms, props.duration_ms)],
    );
    let style = styles.into_iter().next().unwrap_or_default();

    let content = html! {
        <div class={props.class.clone()} style={style}>
            {props.children.clone()}
        </div>
    };

    // Masked reveals slide inside a clipping parent.
    if props.preset == RevealPreset::MaskUp {
        html! { <div ref={node} class="reveal-mask">{content}</div> }
    } else {
        html! { <div ref={node} class="reveal">{content}</div> }
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(STAGGER_MS)]
    pub stagger_ms: f64,
    #[prop_or_default]
    pub delay_ms: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
}

#[function_component(StaggerReveal)]
pub fn stagger_reveal(props: &StaggerRevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), VisibilityOptions::default());
    let timings = (0..props.children.len())
        .map(|index| RevealTiming::staggered(props.delay_ms, props.stagger_ms, index, STAGGER_ITEM_DURATION_MS))
        .collect();
    let styles = use_reveal_styles(in_view, STAGGER_ITEM_HIDDEN, timings);

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter().zip(styles).map(|(child, style)| html! {
                <div class={props.item_class.clone()} style={style}>{child}</div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub delay_ms: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Per-letter flip-up. Letters carry `.letter` so the cursor reacts to them.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), VisibilityOptions::threshold(TEXT_REVEAL_THRESHOLD));
    let units = text_units(&props.text);
    let timings = (0..units.len())
        .map(|index| RevealTiming::staggered(props.delay_ms, LETTER_STAGGER_MS, index, LETTER_DURATION_MS))
        .collect();
    let styles = use_reveal_styles(in_view, LETTER_HIDDEN, timings);

    html! {
        <span ref={node} class={classes!("text-reveal", props.class.clone())} aria-label={props.text.clone()}>
            { for units.into_iter().zip(styles).map(|(unit, style)| html! {
                <span class="letter" aria-hidden="true" style={format!("display: inline-block; {style}")}>{unit}</span>
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineRevealProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub delay_ms: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LineReveal)]
pub fn line_reveal(props: &LineRevealProps) -> Html {
    html! {
        <ScrollReveal
            preset={RevealPreset::MaskUp}
            delay_ms={props.delay_ms}
            duration_ms={LINE_DURATION_MS}
            threshold={TEXT_REVEAL_THRESHOLD}
            class={props.class.clone()}
        >
            {props.children.clone()}
        </ScrollReveal>
    }
}
