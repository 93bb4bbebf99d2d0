use super::{
    canvas::{DecorCanvas, Layer},
    hooks::use_scroll_progress,
    reveal::{LineReveal, ScrollReveal, StaggerReveal},
    sections::{
        visit_section, About, Contact, Dimmed, Footer, Hero, Navbar, Portfolio, PresenceBanner, ScrollProgressBar,
        Services,
    },
    Route,
};
use crate::{
    logging::{log_event, LogLevel},
    motion::{progress::ScrollRange, reveal::RevealPreset},
    site::content::{service_detail, ServiceDetail},
};
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator, Link};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <ScrollProgressBar />
            <Navbar />
            <main>
                <Hero />
                <Dimmed><About /></Dimmed>
                <PresenceBanner />
                <Dimmed><Services /></Dimmed>
                <Dimmed><Portfolio /></Dimmed>
                <Dimmed><Contact /></Dimmed>
            </main>
            <Footer />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailPageProps {
    pub slug: AttrValue,
}

#[function_component(ServiceDetailPage)]
pub fn service_detail_page(props: &ServiceDetailPageProps) -> Html {
    let detail = service_detail(&props.slug);

    use_effect_with(props.slug.clone(), |slug| {
        if service_detail(slug).is_none() {
            log_event(
                LogLevel::Info,
                "service_not_found",
                serde_json::json!({ "slug": slug.as_str() }),
            );
        }
        || ()
    });

    match detail {
        Some(detail) => html! { <ServiceDetailView detail={detail} /> },
        None => html! {
            <div class="not-found">
                <h1>{"Service Not Found"}</h1>
                <Link<Route> to={Route::Home} classes="text-primary">{"Return Home"}</Link<Route>>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ServiceDetailViewProps {
    detail: &'static ServiceDetail,
}

#[function_component(ServiceDetailView)]
fn service_detail_view(props: &ServiceDetailViewProps) -> Html {
    let detail = props.detail;
    let hero = use_node_ref();
    let progress = use_scroll_progress(hero.clone(), ScrollRange::LEAVING_TOP);
    let navigator = use_navigator();

    let to_section = |section: &'static str| {
        let navigator = navigator.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            visit_section(navigator.as_ref(), section);
        })
    };

    html! {
        <div class="service-detail">
            <ScrollProgressBar />
            <Navbar />
            <section ref={hero} class="detail-hero">
                <DecorCanvas layer={Layer::Particles} progress={progress} class="detail-canvas" />
                <div class="container">
                    <a href="/#services" class="back-link" onclick={to_section("services")}>{"← Back to Services"}</a>
                    <ScrollReveal>
                        <h1 class="detail-title">{detail.title}</h1>
                        <p class="detail-subtitle">{detail.subtitle}</p>
                        <p class="section-copy">{detail.description}</p>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section detail-features">
                <div class="container">
                    <LineReveal>
                        <h2 class="section-title">{"What's "}<span class="text-primary">{"Included"}</span></h2>
                    </LineReveal>
                    <StaggerReveal class="feature-grid" item_class="glass-card feature-card">
                        { for detail.features.iter().map(|feature| html! { <p>{*feature}</p> }) }
                    </StaggerReveal>
                </div>
            </section>

            <section class="section detail-process">
                <div class="container">
                    <LineReveal>
                        <h2 class="section-title">{"Our "}<span class="text-primary">{"Process"}</span></h2>
                    </LineReveal>
                    <div class="process-grid">
                        { for detail.process.iter().enumerate().map(|(index, step)| html! {
                            <ScrollReveal preset={RevealPreset::FadeUp} delay_ms={index as f64 * 150.0} class="process-step">
                                <span class="process-index">{format!("{:02}", index + 1)}</span>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section detail-cases">
                <div class="container">
                    <LineReveal>
                        <h2 class="section-title">{"Case "}<span class="text-primary">{"Studies"}</span></h2>
                    </LineReveal>
                    <div class="case-grid">
                        { for detail.case_studies.iter().enumerate().map(|(index, study)| html! {
                            <ScrollReveal
                                preset={if index % 2 == 0 { RevealPreset::FadeLeft } else { RevealPreset::FadeRight }}
                                class="glass-card case-card"
                            >
                                <img src={study.image} alt={study.title} loading="lazy" />
                                <p class="project-category">{study.client}</p>
                                <h3>{study.title}</h3>
                                <p class="text-primary">{study.result}</p>
                            </ScrollReveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section detail-cta">
                <ScrollReveal class="container">
                    <h2 class="section-title">{"Ready to Get Started?"}</h2>
                    <p class="section-copy">
                        {format!(
                            "Let's discuss how our {} services can help transform your business.",
                            detail.title.to_lowercase()
                        )}
                    </p>
                    <a href="/#contact" class="btn-hero" onclick={to_section("contact")}>{"Start a Project →"}</a>
                </ScrollReveal>
            </section>

            <Footer />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let route = use_location().map(|location| location.path().to_string());

    use_effect_with(route, |route| {
        log_event(
            LogLevel::Info,
            "route_not_found",
            serde_json::json!({ "path": route.as_deref().unwrap_or_default() }),
        );
        || ()
    });

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="text-primary">{"Return Home"}</Link<Route>>
        </div>
    }
}
