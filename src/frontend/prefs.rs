//! App-wide preference context: created once in `App`, read anywhere below it.

use super::dom::{self, BrowserStorage};
use crate::{
    logging::{log_event, LogLevel},
    site::{
        preferences::{Preferences, Theme},
        sound::{SoundKind, Tone, Waveform},
    },
};
use js_sys::{Function, Reflect};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, AudioContext, OscillatorType};
use yew::prelude::*;

pub fn system_prefers_dark() -> bool {
    dom::media_matches("(prefers-color-scheme: dark)")
}

pub fn apply_theme(theme: Theme) {
    dom::set_root_attribute("data-theme", theme.as_str());
    dom::set_root_attribute("class", theme.as_str());
}

fn apply_theme_with_transition(theme: Theme) {
    if dom::media_matches("(prefers-reduced-motion: reduce)") {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) = Reflect::get(&document_js, &JsValue::from_str("startViewTransition")) else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

/// Lazily created audio context; playback failures are swallowed.
#[derive(Clone, Default)]
pub struct SoundBoard {
    context: Rc<RefCell<Option<AudioContext>>>,
}

impl PartialEq for SoundBoard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context)
    }
}

impl SoundBoard {
    fn play(&self, kind: SoundKind) {
        let result = self.audio_context().and_then(|context| {
            kind.tones()
                .iter()
                .try_for_each(|tone| schedule_tone(&context, tone))
        });

        if let Err(error) = result {
            log_event(
                LogLevel::Debug,
                "audio_unavailable",
                serde_json::json!({ "error": format!("{error:?}") }),
            );
        }
    }

    fn audio_context(&self) -> Result<AudioContext, JsValue> {
        if let Some(context) = self.context.borrow().as_ref() {
            return Ok(context.clone());
        }
        let context = AudioContext::new()?;
        *self.context.borrow_mut() = Some(context.clone());
        Ok(context)
    }
}

fn schedule_tone(context: &AudioContext, tone: &Tone) -> Result<(), JsValue> {
    let oscillator = context.create_oscillator()?;
    let gain = context.create_gain()?;
    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&context.destination())?;

    oscillator.set_type(match tone.waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    });

    let start = context.current_time() + tone.offset_secs;
    let end = start + tone.duration_secs;
    oscillator.frequency().set_value_at_time(tone.frequency_start as f32, start)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(tone.frequency_end as f32, end)?;
    gain.gain().set_value_at_time(tone.gain_start as f32, start)?;
    gain.gain().exponential_ramp_to_value_at_time(tone.gain_end as f32, end)?;
    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(end)?;
    Ok(())
}

#[derive(Clone, PartialEq)]
pub struct PreferencesContext {
    pub prefs: Preferences,
    update: Callback<Preferences>,
    sounds: SoundBoard,
}

impl PreferencesContext {
    pub fn toggle_theme(&self) {
        self.play(SoundKind::Toggle);
        let next = self.prefs.with_theme_toggled();
        apply_theme_with_transition(next.theme);
        self.update.emit(next);
    }

    pub fn toggle_sound(&self) {
        let next = self.prefs.with_sound_toggled();
        self.update.emit(next);
        if next.sound_enabled {
            self.sounds.play(SoundKind::Toggle);
        }
    }

    pub fn play(&self, kind: SoundKind) {
        if self.prefs.sound_enabled {
            self.sounds.play(kind);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PreferencesProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PreferencesProvider)]
pub fn preferences_provider(props: &PreferencesProviderProps) -> Html {
    let prefs = use_state(|| Preferences::load(&BrowserStorage, system_prefers_dark()));
    let sounds = use_memo((), |_| SoundBoard::default());

    {
        let theme = prefs.theme;
        use_effect_with((), move |_| {
            apply_theme(theme);
            || ()
        });
    }

    let update = {
        let prefs = prefs.clone();
        Callback::from(move |next: Preferences| {
            next.persist(&BrowserStorage);
            prefs.set(next);
        })
    };

    let context = PreferencesContext {
        prefs: *prefs,
        update,
        sounds: (*sounds).clone(),
    };

    html! {
        <ContextProvider<PreferencesContext> context={context}>
            {props.children.clone()}
        </ContextProvider<PreferencesContext>>
    }
}

#[hook]
pub fn use_preferences() -> Option<PreferencesContext> {
    use_context::<PreferencesContext>()
}
