//! Home page sections, top to bottom.

use super::{
    canvas::{DecorCanvas, Layer},
    dom::{self, Listener, Timeout},
    hooks::{use_scroll_progress, use_scroll_y},
    prefs::{use_preferences, PreferencesContext},
    reveal::{LineReveal, ScrollReveal, StaggerReveal, TextReveal},
    Route,
};
use crate::{
    logging::{log_event, LogLevel},
    motion::{
        parallax::presets,
        progress::{document_progress, ScrollRange},
        reveal::RevealPreset,
    },
    site::{
        contact::{ContactForm, Field, PhaseTimers, SubmitPhase, RESET_AFTER_MS, SUBMIT_LATENCY_MS},
        content::{
            filter_label, filter_projects, project_by_id, Carousel, CategoryFilter, ExternalLink, Stat, ABOUT_STATS,
            BRAND, CATEGORY_FILTERS, CONTACT_EMAIL, FOOTER_COMPANY_LINKS, FOOTER_SUPPORT_LINKS, NAV_ITEMS,
            PRESENCE_STATS, SERVICES, SOCIAL_LINKS,
        },
        navigation::NavState,
        sound::SoundKind,
    },
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link, Navigator};

fn play(prefs: &Option<PreferencesContext>, kind: SoundKind) {
    if let Some(prefs) = prefs {
        prefs.play(kind);
    }
}

/// Smooth-scrolls to an in-page section, routing back home first when the
/// current page does not have it.
pub fn visit_section(navigator: Option<&Navigator>, section: &'static str) {
    if dom::section_top(section).is_some() {
        dom::scroll_to_section(section);
        return;
    }
    if let Some(navigator) = navigator {
        navigator.push(&Route::Home);
        dom::request_frame(move || dom::scroll_to_section(section));
    }
}

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let scroll_y = use_scroll_y();
    let (_, viewport_height) = dom::viewport_size();
    let progress = document_progress(scroll_y, dom::document_height(), viewport_height);

    html! {
        <div class="scroll-progress" style={format!("transform: scaleX({progress:.4});")} aria-hidden="true" />
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll_y = use_scroll_y();
    let nav = use_state_eq(NavState::default);
    let prefs = use_preferences();
    let navigator = use_navigator();

    {
        let nav = nav.clone();
        use_effect_with(scroll_y, move |scroll_y| {
            let tops: Vec<(&str, f64)> = NAV_ITEMS
                .iter()
                .filter_map(|item| dom::section_top(item.section).map(|top| (item.section, top)))
                .collect();
            let mut next = (*nav).clone();
            if next.on_scroll(*scroll_y, &tops) {
                nav.set(next);
            }
            || ()
        });
    }

    let on_toggle_menu = {
        let nav = nav.clone();
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            play(&prefs, SoundKind::Click);
            let mut next = (*nav).clone();
            next.toggle_menu();
            nav.set(next);
        })
    };

    let on_navigate = |section: &'static str| {
        let nav = nav.clone();
        let prefs = prefs.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            play(&prefs, SoundKind::Click);
            visit_section(navigator.as_ref(), section);
            let mut next = (*nav).clone();
            next.close_menu();
            nav.set(next);
        })
    };

    let on_hover = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| play(&prefs, SoundKind::Hover))
    };

    let (alpha, blur) = presets::navbar_backdrop(scroll_y);
    let backdrop = format!("background-color: hsl(var(--background) / {alpha:.3}); backdrop-filter: blur({blur:.1}px);");

    let links = |class: &'static str| {
        html! {
            { for NAV_ITEMS.iter().map(|item| html! {
                <a
                    href={format!("#{}", item.section)}
                    class={classes!(class, (nav.active == item.section).then_some("is-active"))}
                    onclick={on_navigate(item.section)}
                    onmouseenter={on_hover.clone()}
                >
                    {item.label}
                </a>
            }) }
        }
    };

    let toggles = prefs.as_ref().map(|prefs| {
        let on_theme = {
            let prefs = prefs.clone();
            Callback::from(move |_: MouseEvent| prefs.toggle_theme())
        };
        let on_sound = {
            let prefs = prefs.clone();
            Callback::from(move |_: MouseEvent| prefs.toggle_sound())
        };
        let sound_label = if prefs.prefs.sound_enabled { "Mute sounds" } else { "Enable sounds" };
        html! {
            <div class="nav-toggles">
                <button class="icon-btn sound-toggle" onclick={on_sound} aria-label={sound_label} aria-pressed={prefs.prefs.sound_enabled.to_string()}>
                    {if prefs.prefs.sound_enabled { "♪" } else { "×" }}
                </button>
                <button class="icon-btn theme-toggle" onclick={on_theme} aria-label={prefs.prefs.theme.toggle_label()}>
                    {if prefs.prefs.theme.is_dark() { "☀" } else { "☾" }}
                </button>
            </div>
        }
    });

    html! {
        <header class={classes!("navbar", nav.scrolled.then_some("is-scrolled"))} style={backdrop}>
            <nav class="navbar-inner">
                <a href="#home" class="brand" onclick={on_navigate("home")}>
                    <span class="text-primary">{"AMAZE"}</span>{"BALLS"}
                </a>
                <div class="nav-links">{links("nav-link")}</div>
                {toggles.unwrap_or_default()}
                <button
                    class="icon-btn menu-toggle"
                    onclick={on_toggle_menu}
                    aria-label={if nav.menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={nav.menu_open.to_string()}
                >
                    {if nav.menu_open { "✕" } else { "☰" }}
                </button>
            </nav>
            if nav.menu_open {
                <div class="mobile-menu">{links("mobile-link")}</div>
            }
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), ScrollRange::LEAVING_TOP);
    let content_style = presets::hero_content().style(progress).css();
    let prefs = use_preferences();

    let go_to = |target: &'static str| {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            play(&prefs, SoundKind::Whoosh);
            dom::scroll_to_section(target);
        })
    };

    html! {
        <section id="home" ref={section} class="hero">
            <DecorCanvas layer={Layer::Shapes} progress={progress} class="hero-canvas" />
            <div class="hero-content" style={content_style}>
                <ScrollReveal preset={RevealPreset::FadeDown} delay_ms={200.0}>
                    <p class="hero-pretitle">{"Creative Digital Agency"}</p>
                </ScrollReveal>
                <LineReveal delay_ms={300.0}>
                    <p class="hero-kicker">{"We Are"}</p>
                </LineReveal>
                <h1 class="hero-title">
                    <TextReveal text="AMAZE" delay_ms={400.0} class="text-primary" />
                    <TextReveal text="BALLS" delay_ms={550.0} />
                </h1>
                <ScrollReveal delay_ms={800.0}>
                    <p class="hero-subtitle">
                        {"Crafting extraordinary digital experiences with cutting-edge design and innovative technology"}
                    </p>
                </ScrollReveal>
                <ScrollReveal delay_ms={1_000.0} class="hero-actions">
                    <button class="btn-hero" onclick={go_to("services")}>{"Explore Our Work"}</button>
                    <button class="btn-outline-hero" onclick={go_to("about")}>{"Learn More"}</button>
                </ScrollReveal>
            </div>
            <button class="scroll-indicator" onclick={go_to("about")} aria-label="Scroll to about">
                <span class="scroll-indicator-dot" />
            </button>
        </section>
    }
}

fn stat_card(stat: &Stat) -> Html {
    html! {
        <div class="glass-card stat-card">
            <p class="stat-value">{stat.value}</p>
            <p class="stat-label">{stat.label}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), ScrollRange::THROUGH_VIEWPORT);
    let background = presets::about_background().style(progress).css();
    let drift = presets::decorative_drift().style(progress).css();

    html! {
        <section id="about" ref={section} class="section about">
            <DecorCanvas layer={Layer::Particles} progress={progress} class="about-canvas" />
            <div class="about-backdrop" style={background} aria-hidden="true" />
            <div class="parallax-orb" style={drift} aria-hidden="true" />
            <div class="container about-grid">
                <div>
                    <ScrollReveal preset={RevealPreset::FadeLeft}>
                        <p class="section-eyebrow">{"About Us"}</p>
                    </ScrollReveal>
                    <LineReveal delay_ms={100.0}>
                        <h2 class="section-title">
                            {"We Create "}<span class="text-primary">{"Digital Excellence"}</span>
                        </h2>
                    </LineReveal>
                    <ScrollReveal preset={RevealPreset::FadeLeft} delay_ms={200.0}>
                        <p class="section-copy">
                            {"At AMAZEBALLS, we're not just another digital agency. We're your creative partners in building extraordinary digital experiences. Our team of passionate designers, developers, and strategists work together to transform your vision into reality."}
                        </p>
                    </ScrollReveal>
                    <ScrollReveal preset={RevealPreset::FadeLeft} delay_ms={300.0}>
                        <p class="section-copy">
                            {"With years of experience and a portfolio of successful projects, we've mastered the art of creating websites and applications that not only look stunning but also deliver exceptional user experiences and measurable results."}
                        </p>
                    </ScrollReveal>
                    <StaggerReveal class="pill-row" item_class="pill" delay_ms={400.0}>
                        <span>{"Innovation First"}</span>
                        <span>{"User-Centric"}</span>
                        <span>{"Result Driven"}</span>
                    </StaggerReveal>
                </div>
                <StaggerReveal class="stat-grid">
                    { for ABOUT_STATS.iter().map(stat_card) }
                </StaggerReveal>
            </div>
            <ScrollReveal preset={RevealPreset::Blur} class="container mission">
                <blockquote>
                    {"\"Our mission is simple: to push the boundaries of what's possible in digital design and create experiences that leave lasting impressions.\""}
                </blockquote>
            </ScrollReveal>
        </section>
    }
}

const BANNER_IMAGE: &str = "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=1920&q=80";

#[function_component(PresenceBanner)]
pub fn presence_banner() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), ScrollRange::THROUGH_VIEWPORT);
    let image = presets::banner_image().style(progress).css();
    let overlay = presets::banner_overlay().style(progress).css();

    html! {
        <section ref={section} class="presence-banner">
            <div class="presence-image" style={format!("background-image: url('{BANNER_IMAGE}'); {image}")} aria-hidden="true" />
            <div class="presence-overlay" style={overlay} aria-hidden="true" />
            <div class="container presence-content">
                <ScrollReveal preset={RevealPreset::FadeDown}>
                    <p class="section-eyebrow">{"Worldwide Reach"}</p>
                </ScrollReveal>
                <LineReveal delay_ms={100.0}>
                    <h2 class="section-title">{"Trusted "}<span class="text-gradient-animated">{"Globally"}</span></h2>
                </LineReveal>
                <ScrollReveal delay_ms={200.0}>
                    <p class="section-copy">
                        {"From startups to enterprises, we've partnered with visionary brands across the globe to create digital experiences that transcend boundaries."}
                    </p>
                </ScrollReveal>
                <div class="stat-grid">
                    { for PRESENCE_STATS.iter().enumerate().map(|(index, stat)| html! {
                        <ScrollReveal preset={RevealPreset::Scale} delay_ms={300.0 + index as f64 * 100.0}>
                            {stat_card(stat)}
                        </ScrollReveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let carousel = use_state_eq(|| Carousel::new(SERVICES.len()));
    let track = use_node_ref();
    let prefs = use_preferences();

    {
        let track = track.clone();
        use_effect_with(*carousel, move |carousel| {
            if let Some(element) = track.cast::<Element>() {
                dom::scroll_element_to(&element, carousel.scroll_left_px());
            }
            || ()
        });
    }

    let step = |to: fn(Carousel) -> Carousel| {
        let carousel = carousel.clone();
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| {
            play(&prefs, SoundKind::Click);
            carousel.set(to(*carousel));
        })
    };

    html! {
        <section id="services" class="section services">
            <DecorCanvas layer={Layer::Waves} class="services-canvas" />
            <div class="container">
                <ScrollReveal>
                    <p class="section-eyebrow">{"Our Services"}</p>
                </ScrollReveal>
                <LineReveal delay_ms={100.0}>
                    <h2 class="section-title">{"What We "}<span class="text-primary">{"Offer"}</span></h2>
                </LineReveal>
                <ScrollReveal delay_ms={200.0}>
                    <p class="section-copy">
                        {"We are committed to providing the best services to grow your business, online and offline"}
                    </p>
                </ScrollReveal>
            </div>
            <div class="carousel">
                <div ref={track} class="carousel-track">
                    <StaggerReveal class="carousel-row" item_class="carousel-slide">
                        { for SERVICES.iter().map(|service| html! {
                            <article class="glass-card-glow service-card" data-cursor-text="Explore">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="feature-list">
                                    { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <Link<Route> to={Route::ServiceDetail { slug: service.slug.to_string() }} classes="card-link">
                                    {"Learn more"}
                                </Link<Route>>
                            </article>
                        }) }
                    </StaggerReveal>
                </div>
                <div class="carousel-controls">
                    <button class="icon-btn" onclick={step(Carousel::previous)} aria-label="Previous service">{"←"}</button>
                    <div class="carousel-dots">
                        { for (0..SERVICES.len()).map(|index| {
                            let carousel_handle = carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| carousel_handle.set(carousel_handle.go_to(index)));
                            html! {
                                <button
                                    class={classes!("carousel-dot", (carousel.index() == index).then_some("is-active"))}
                                    onclick={onclick}
                                    aria-label={format!("Go to service {}", index + 1)}
                                />
                            }
                        }) }
                    </div>
                    <button class="icon-btn" onclick={step(Carousel::next)} aria-label="Next service">{"→"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state_eq(|| CategoryFilter::None);
    let selected = use_state_eq(|| None::<u32>);
    let prefs = use_preferences();

    {
        let selected = selected.clone();
        use_effect_with(*selected, move |open| {
            let listener = open.and_then(|_| {
                Listener::on_window("keydown", move |event| {
                    if event
                        .dyn_ref::<web_sys::KeyboardEvent>()
                        .is_some_and(|event| event.key() == "Escape")
                    {
                        selected.set(None);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let lightbox = (*selected).and_then(project_by_id).map(|project| {
        html! {
            <div class="lightbox" onclick={close.clone()} role="dialog" aria-modal="true" aria-label={project.title}>
                <div class="lightbox-card" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                    <button class="icon-btn lightbox-close" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                    <img src={project.image} alt={project.title} />
                    <div class="lightbox-body">
                        <p class="section-eyebrow">{project.category.label()}</p>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <h4>{"Technologies Used"}</h4>
                        <div class="pill-row">
                            { for project.technologies.iter().map(|tech| html! { <span class="pill">{*tech}</span> }) }
                        </div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="portfolio" class="section portfolio">
            <div class="container">
                <ScrollReveal>
                    <p class="section-eyebrow">{"Our Work"}</p>
                </ScrollReveal>
                <LineReveal delay_ms={100.0}>
                    <h2 class="section-title">{"Featured "}<span class="text-primary">{"Projects"}</span></h2>
                </LineReveal>
                <ScrollReveal delay_ms={200.0}>
                    <p class="section-copy">
                        {"Explore our portfolio of successful projects that showcase our expertise and creativity"}
                    </p>
                </ScrollReveal>
                <div class="filter-row" role="tablist">
                    { for CATEGORY_FILTERS.iter().map(|option| {
                        let option = *option;
                        let onclick = {
                            let filter = filter.clone();
                            let prefs = prefs.clone();
                            Callback::from(move |_: MouseEvent| {
                                play(&prefs, SoundKind::Click);
                                filter.set(option);
                            })
                        };
                        html! {
                            <button
                                class={classes!("filter-btn", (*filter == option).then_some("is-active"))}
                                role="tab"
                                aria-selected={(*filter == option).to_string()}
                                onclick={onclick}
                            >
                                {filter_label(option)}
                            </button>
                        }
                    }) }
                </div>
                <div class="project-grid">
                    { for filter_projects(*filter).into_iter().map(|project| {
                        let onclick = {
                            let selected = selected.clone();
                            let prefs = prefs.clone();
                            let id = project.id;
                            Callback::from(move |_: MouseEvent| {
                                play(&prefs, SoundKind::Whoosh);
                                selected.set(Some(id));
                            })
                        };
                        html! {
                            <ScrollReveal key={project.id} preset={RevealPreset::Scale}>
                                <button class="glass-card project-card" data-cursor-text="View" onclick={onclick}>
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <span class="project-category">{project.category.label()}</span>
                                    <span class="project-title">{project.title}</span>
                                </button>
                            </ScrollReveal>
                        }
                    }) }
                </div>
            </div>
            {lightbox.unwrap_or_default()}
        </section>
    }
}

fn field_oninput(form: &Rc<RefCell<ContactForm>>, rerender: &UseForceUpdateHandle, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    let rerender = rerender.clone();
    Callback::from(move |event: InputEvent| {
        let value = match field {
            Field::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
            Field::Name | Field::Email => event.target_unchecked_into::<HtmlInputElement>().value(),
        };
        form.borrow_mut().edit(field, value);
        rerender.force_update();
    })
}

fn field_focus(form: &Rc<RefCell<ContactForm>>, rerender: &UseForceUpdateHandle, field: Option<Field>) -> Callback<FocusEvent> {
    let form = form.clone();
    let rerender = rerender.clone();
    Callback::from(move |_: FocusEvent| {
        form.borrow_mut().focused = field;
        rerender.force_update();
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let timers = use_mut_ref(PhaseTimers::<Timeout>::default);
    let error = use_state_eq(|| None::<String>);
    let rerender = use_force_update();
    let prefs = use_preferences();

    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().clear());
    }

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let rerender = rerender.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let outcome = form.borrow_mut().submit();
            if let Err(reason) = outcome {
                error.set(Some(reason.to_string()));
                return;
            }
            error.set(None);
            play(&prefs, SoundKind::Click);
            rerender.force_update();

            let form = form.clone();
            let rerender = rerender.clone();
            let prefs = prefs.clone();
            let pending = timers.clone();
            let sent = Timeout::new(SUBMIT_LATENCY_MS, move || {
                form.borrow_mut().sent();
                log_event(LogLevel::Info, "contact_submitted", serde_json::json!({}));
                play(&prefs, SoundKind::Success);
                rerender.force_update();

                let reset = Timeout::new(RESET_AFTER_MS, move || {
                    form.borrow_mut().reset();
                    rerender.force_update();
                });
                if let Some(reset) = reset {
                    pending.borrow_mut().arm(SubmitPhase::Submitted, reset);
                }
            });
            if let Some(sent) = sent {
                timers.borrow_mut().arm(SubmitPhase::Submitting, sent);
            }
        })
    };

    let current = form.borrow().clone();
    let submitting = current.phase == SubmitPhase::Submitting;
    let focus_class = |field: Field| (current.focused == Some(field)).then_some("is-focused");

    let body = if current.phase == SubmitPhase::Submitted {
        html! {
            <div class="contact-success" role="status">
                <h3>{"Thank You!"}</h3>
                <p>{"Your message has been sent successfully."}</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                <label class={classes!("field", focus_class(Field::Name))}>
                    <span>{"Your Name"}</span>
                    <input
                        type="text"
                        name="name"
                        value={current.draft.name.clone()}
                        disabled={submitting}
                        oninput={field_oninput(&form, &rerender, Field::Name)}
                        onfocus={field_focus(&form, &rerender, Some(Field::Name))}
                        onblur={field_focus(&form, &rerender, None)}
                    />
                </label>
                <label class={classes!("field", focus_class(Field::Email))}>
                    <span>{"Email Address"}</span>
                    <input
                        type="email"
                        name="email"
                        value={current.draft.email.clone()}
                        disabled={submitting}
                        oninput={field_oninput(&form, &rerender, Field::Email)}
                        onfocus={field_focus(&form, &rerender, Some(Field::Email))}
                        onblur={field_focus(&form, &rerender, None)}
                    />
                </label>
                <label class={classes!("field", focus_class(Field::Message))}>
                    <span>{"Your Message"}</span>
                    <textarea
                        name="message"
                        rows="5"
                        value={current.draft.message.clone()}
                        disabled={submitting}
                        oninput={field_oninput(&form, &rerender, Field::Message)}
                        onfocus={field_focus(&form, &rerender, Some(Field::Message))}
                        onblur={field_focus(&form, &rerender, None)}
                    />
                </label>
                if let Some(message) = (*error).clone() {
                    <p class="field-error" role="alert">{message}</p>
                }
                <button type="submit" class="btn-hero" disabled={submitting}>
                    {if submitting { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        }
    };

    html! {
        <section id="contact" class="section contact">
            <div class="container contact-grid">
                <div>
                    <ScrollReveal preset={RevealPreset::FadeLeft}>
                        <p class="section-eyebrow">{"Get In Touch"}</p>
                    </ScrollReveal>
                    <LineReveal delay_ms={100.0}>
                        <h2 class="section-title">{"Let's Create Something "}<span class="text-primary">{"Amazing"}</span>{" Together"}</h2>
                    </LineReveal>
                    <ScrollReveal preset={RevealPreset::FadeLeft} delay_ms={200.0}>
                        <p class="section-copy">
                            {"Have a project in mind? We'd love to hear about it. Drop us a message and let's start the conversation about bringing your ideas to life."}
                        </p>
                    </ScrollReveal>
                    <ScrollReveal preset={RevealPreset::FadeLeft} delay_ms={300.0} class="glass-card contact-email">
                        <p>{"Email us at"}</p>
                        <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                    </ScrollReveal>
                </div>
                <ScrollReveal preset={RevealPreset::FadeRight} delay_ms={200.0} class="glass-card">
                    {body}
                </ScrollReveal>
            </div>
        </section>
    }
}

fn link_list(title: &'static str, links: &[ExternalLink]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                { for links.iter().map(|link| html! { <li><a href={link.href}>{link.label}</a></li> }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    let prefs = use_preferences();
    let to_top = Callback::from(move |_: MouseEvent| {
        play(&prefs, SoundKind::Whoosh);
        dom::smooth_scroll_to_top();
    });

    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-column">
                    <p class="brand"><span class="text-primary">{"AMAZE"}</span>{"BALLS"}</p>
                    <p>
                        {"We're a creative digital agency passionate about crafting extraordinary digital experiences. From stunning websites to powerful applications, we bring your vision to life."}
                    </p>
                    <ul class="footer-contact">
                        <li>{CONTACT_EMAIL}</li>
                        <li>{"+1 (555) 123-4567"}</li>
                        <li>{"123 Creative Street, Design City"}</li>
                    </ul>
                </div>
                {link_list("Company", &FOOTER_COMPANY_LINKS)}
                {link_list("Support", &FOOTER_SUPPORT_LINKS)}
                <div class="footer-column">
                    <h4>{"Follow Us"}</h4>
                    <div class="social-row">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>{link.label}</a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{format!("© {year} {BRAND}. All rights reserved.")}</p>
                <button class="icon-btn" onclick={to_top} aria-label="Scroll to top">{"↑"}</button>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct DimmedProps {
    #[prop_or_default]
    pub children: Html,
}

/// Fades a section in as it approaches the middle of the viewport.
#[function_component(Dimmed)]
pub fn dimmed(props: &DimmedProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), ScrollRange::SECTION_FOCUS);
    let style = presets::section_dimming().style(progress).css();

    html! {
        <div ref={node} class="section-dim" style={style}>
            {props.children.clone()}
        </div>
    }
}
