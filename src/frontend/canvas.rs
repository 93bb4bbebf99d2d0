use super::dom::{self, AnimationLoop, Listener};
use crate::decor::{FloatingShapes, ParticleField, RenderLayer, Sprite, SpriteKind, WaveField};
use std::{cell::Cell, f64::consts::TAU, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

const PARTICLE_COUNT: usize = 400;
const PARTICLE_SEED: u64 = 0x0A4A_2EBA;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layer {
    Particles,
    Shapes,
    Waves,
}

impl Layer {
    fn build(self) -> Box<dyn RenderLayer> {
        match self {
            Self::Particles => Box::new(ParticleField::new(PARTICLE_COUNT, PARTICLE_SEED)),
            Self::Shapes => Box::new(FloatingShapes::new()),
            Self::Waves => Box::new(WaveField::new()),
        }
    }
}

fn polygon(context: &CanvasRenderingContext2d, sprite: &Sprite, sides: u32) {
    context.begin_path();
    for corner in 0..=sides {
        let angle = sprite.rotation + TAU * f64::from(corner) / f64::from(sides);
        let (x, y) = (sprite.x + sprite.radius * angle.cos(), sprite.y + sprite.radius * angle.sin());
        if corner == 0 {
            context.move_to(x, y);
        } else {
            context.line_to(x, y);
        }
    }
    context.stroke();
}

fn circle(context: &CanvasRenderingContext2d, sprite: &Sprite, radius: f64) {
    context.begin_path();
    let _ = context.arc(sprite.x, sprite.y, radius.max(0.0), 0.0, TAU);
}

fn draw(context: &CanvasRenderingContext2d, sprites: &[Sprite]) {
    for sprite in sprites {
        context.set_global_alpha(sprite.alpha);
        match sprite.kind {
            SpriteKind::Dot | SpriteKind::Sphere => {
                circle(context, sprite, sprite.radius);
                context.fill();
            }
            SpriteKind::Torus => {
                circle(context, sprite, sprite.radius);
                context.stroke();
                circle(context, sprite, sprite.radius * 0.45);
                context.stroke();
            }
            SpriteKind::Ring => {
                circle(context, sprite, sprite.radius);
                context.stroke();
            }
            SpriteKind::Icosahedron => polygon(context, sprite, 6),
            SpriteKind::Octahedron => polygon(context, sprite, 4),
        }
    }
    context.set_global_alpha(1.0);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

#[derive(Properties, PartialEq)]
pub struct DecorCanvasProps {
    pub layer: Layer,
    /// Scroll progress of the host section.
    #[prop_or_default]
    pub progress: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Decorative backdrop. Its clock and buffers stay private to the layer; the
/// page only feeds it progress and pointer position.
#[function_component(DecorCanvas)]
pub fn decor_canvas(props: &DecorCanvasProps) -> Html {
    let canvas = use_node_ref();
    let progress = use_mut_ref(|| props.progress);
    *progress.borrow_mut() = props.progress;

    {
        let canvas = canvas.clone();
        let progress = progress.clone();
        use_effect_with(props.layer, move |layer| {
            let mut layer = layer.build();
            let pointer = Rc::new(Cell::new(None::<(f64, f64)>));

            let listener = {
                let pointer = pointer.clone();
                Listener::on_window("mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        let (width, height) = dom::viewport_size();
                        pointer.set(Some((
                            f64::from(event.client_x()) / width * 2.0 - 1.0,
                            -(f64::from(event.client_y()) / height * 2.0 - 1.0),
                        )));
                    }
                })
            };

            let mut last = None::<f64>;
            let frame_loop = AnimationLoop::start(move |timestamp| {
                let dt = last.map_or(0.0, |previous| (timestamp - previous) / 1_000.0);
                last = Some(timestamp);

                let Some(element) = canvas.cast::<HtmlCanvasElement>() else {
                    return false;
                };
                let (width, height) = (f64::from(element.client_width()), f64::from(element.client_height()));
                if element.width() != width as u32 || element.height() != height as u32 {
                    element.set_width(width as u32);
                    element.set_height(height as u32);
                }
                let Some(context) = context_2d(&element) else {
                    return false;
                };

                layer.advance(dt, *progress.borrow(), pointer.get());
                context.clear_rect(0.0, 0.0, width, height);
                context.set_fill_style_str("rgba(255, 107, 53, 0.9)");
                context.set_stroke_style_str("rgba(255, 107, 53, 0.6)");
                draw(&context, &layer.sprites(width, height));
                true
            });

            move || {
                drop(frame_loop);
                drop(listener);
            }
        });
    }

    html! {
        <canvas ref={canvas} class={classes!("decor-canvas", props.class.clone())} aria-hidden="true" />
    }
}
