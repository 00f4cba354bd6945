//! The studio site's choreographies, expressed as data.
//!
//! Element and property names follow the `"<element>.<property>"` convention understood by
//! [`crate::StyleFrame::element`].

use crate::{
    animation::ease::Ease,
    choreo::{
        phase::{PhaseBinding, PhaseExpr, PhaseMapper},
        reveal::TextReveal,
        section::SectionSpec,
        step::StepSpec,
    },
    config::model::{Choreography, OverlaySpec},
    foundation::error::{ScrollfxError, ScrollfxResult},
    overlay::{
        dial::DialSpec,
        lifecycle::{OverlayTimings, WheelPolicy},
    },
    scroll::{
        hijack::HijackSpec,
        smoother::SECTION_DAMPING,
        tracker::{ProgressStrategy, ScrollWindow},
    },
};

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 8] = [
    "hero",
    "about-hero",
    "values",
    "all-work",
    "portfolio",
    "intro",
    "home",
    "about",
];

/// Value titles cycled by the about page's values section.
pub const VALUES: [&str; 3] = ["Vision", "Craft", "Innovation"];

/// Process steps of the all-work section.
pub const PROCESS_STEPS: [&str; 5] = [
    "Audit Stratégique",
    "Identité Visuelle",
    "Production du Site",
    "Optimisation SEO",
    "Mise en Ligne",
];

/// Panels of the services overlay dial.
pub const SERVICES: [&str; 4] = [
    "Webdesign",
    "Identité Visuelle",
    "Stratégie Digitale",
    "Développement",
];

/// Home page intro paragraph.
pub const INTRO_TEXT: &str = "Basé à Marseille, Deep Night Studio est un studio de Webdesign et de Stratégie Digitale. Nous créons des interfaces haute performance et des identités visuelles fortes pour des projets d'envergure, partout en France et à l'international.";

fn bind(property: &str, expr: PhaseExpr) -> PhaseBinding {
    PhaseBinding::new(property, expr)
}

fn range(start: f64, end: f64, from: f64, to: f64) -> PhaseExpr {
    PhaseExpr::range(start, end, from, to)
}

fn smooth(start: f64, end: f64, from: f64, to: f64) -> PhaseExpr {
    PhaseExpr::eased(start, end, from, to, Ease::Smoothstep)
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_lowercase().replace(' ', "-")).collect()
}

/// Shared splash-to-hero curtain: the image opens from a framed card to full bleed.
fn curtain(shade_max: f64, hero_start: f64, hero_rise: f64) -> Vec<PhaseBinding> {
    vec![
        bind("image.inset_top", range(0.0, 1.0, 28.0, 0.0)),
        bind("image.inset_bottom", range(0.0, 1.0, 18.0, 0.0)),
        bind("image.inset_left", range(0.0, 1.0, 20.0, 0.0)),
        bind("image.inset_right", range(0.0, 1.0, 20.0, 0.0)),
        bind("image.radius", range(0.0, 1.0, 12.0, 0.0)),
        bind(
            "shade.opacity",
            PhaseExpr::Clamped {
                inner: Box::new(range(0.5, 1.0, 0.0, 1.0)),
                min: 0.0,
                max: shade_max,
            },
        ),
        bind("splash.opacity", range(0.0, 0.4, 1.0, 0.0)),
        bind("splash.translate_y", range(0.0, 0.4, 0.0, -30.0)),
        bind("hero.opacity", range(hero_start, 1.0, 0.0, 1.0)),
        bind("hero.translate_y", range(hero_start, 1.0, hero_rise, 0.0)),
        bind("backdrop.opacity", range(0.0, 0.6, 1.0, 0.0)),
    ]
}

/// Home hero: 250vh pinned splash with boundary auto-snap, rendered from raw progress.
pub fn hero() -> ScrollfxResult<SectionSpec> {
    Ok(SectionSpec {
        phases: PhaseMapper::new(curtain(0.35, 0.65, 25.0))?,
        hijack: Some(HijackSpec::default()),
        ..SectionSpec::pinned("hero", 2.5)
    })
}

/// About page hero: darker shade, later hero text.
pub fn about_hero() -> ScrollfxResult<SectionSpec> {
    Ok(SectionSpec {
        phases: PhaseMapper::new(curtain(0.55, 0.88, 30.0))?,
        hijack: Some(HijackSpec::default()),
        ..SectionSpec::pinned("about-hero", 2.5)
    })
}

/// About page values: image slides to the left half, then the values cycle.
pub fn values() -> ScrollfxResult<SectionSpec> {
    Ok(SectionSpec {
        damping: Some(SECTION_DAMPING),
        phases: PhaseMapper::new(vec![
            bind("image.inset_right", smooth(0.0, 0.2, 0.0, 50.0)),
            bind("title.opacity", range(0.18, 0.30, 0.0, 1.0)),
            bind("title.translate_y", range(0.18, 0.30, 30.0, 0.0)),
            bind("content.opacity", range(0.1, 0.25, 0.0, 1.0)),
            bind("content.translate_x", range(0.1, 0.25, 30.0, 0.0)),
        ])?,
        steps: Some(StepSpec::new(0.25, 1.0, VALUES.len())),
        items: keys(&VALUES),
        ..SectionSpec::pinned("values", 5.0)
    })
}

/// Portfolio overview: title, mosaic, full-bleed image, then the stepped process panel.
pub fn all_work() -> ScrollfxResult<SectionSpec> {
    let title_land = range(0.0, 0.08, 0.0, 1.0);
    let title_fade = range(0.35, 0.43, 0.0, 1.0);
    Ok(SectionSpec {
        damping: Some(SECTION_DAMPING),
        phases: PhaseMapper::new(vec![
            bind("title.scale", range(0.0, 0.08, 2.2, 1.0)),
            bind("title.translate_y_vh", range(0.0, 0.08, 0.0, 40.0)),
            bind("title.opacity", range(0.35, 0.43, 1.0, 0.0)),
            bind(
                "mosaic.opacity",
                PhaseExpr::Product(vec![
                    range(0.08, 0.161, 0.0, 1.0),
                    PhaseExpr::Complement(Box::new(title_fade.clone())),
                ]),
            ),
            // Clickable once fully landed, until it is a tenth faded out.
            bind(
                "title.interactive",
                PhaseExpr::Product(vec![
                    PhaseExpr::Complement(Box::new(PhaseExpr::Above {
                        inner: Box::new(PhaseExpr::Complement(Box::new(title_land))),
                        threshold: 0.0,
                    })),
                    PhaseExpr::Above {
                        inner: Box::new(PhaseExpr::Complement(Box::new(title_fade))),
                        threshold: 0.9,
                    },
                ]),
            ),
            bind("mosaic.translate_y_vh", range(0.08, 0.35, 0.0, -60.0)),
            bind("full.inset", smooth(0.4, 0.52, 40.0, 0.0)),
            bind("full.radius", smooth(0.4, 0.52, 20.0, 0.0)),
            bind("full.opacity", range(0.4, 0.424, 0.0, 1.0)),
            bind(
                "full.interactive",
                PhaseExpr::Above {
                    inner: Box::new(range(0.4, 0.52, 0.0, 1.0)),
                    threshold: 0.5,
                },
            ),
            bind("process.opacity", range(0.54, 0.64, 0.0, 1.0)),
            bind("process.translate_y", range(0.54, 0.64, 40.0, 0.0)),
            bind(
                "process.interactive",
                PhaseExpr::Above {
                    inner: Box::new(range(0.54, 0.64, 0.0, 1.0)),
                    threshold: 0.5,
                },
            ),
        ])?,
        steps: Some(StepSpec::new(0.56, 1.0, PROCESS_STEPS.len())),
        items: keys(&PROCESS_STEPS),
        ..SectionSpec::pinned("all-work", 7.0)
    })
}

/// Portfolio card: scales up from 0.3 while its brackets spread apart.
pub fn portfolio_card() -> ScrollfxResult<SectionSpec> {
    Ok(SectionSpec {
        damping: Some(0.08),
        phases: PhaseMapper::new(vec![
            bind("card.scale", smooth(0.0, 1.0, 0.3, 1.0)),
            bind("bracket_left.translate_x", smooth(0.0, 1.0, 0.0, -120.0)),
            bind("bracket_right.translate_x", smooth(0.0, 1.0, 0.0, 120.0)),
        ])?,
        ..SectionSpec::reveal("portfolio", ProgressStrategy::ViewportReveal { span: 0.9 })
    })
}

/// Intro paragraph: character reveal, no style bindings.
pub fn intro() -> SectionSpec {
    SectionSpec::reveal(
        "intro",
        ProgressStrategy::Reveal {
            start: 0.9,
            end: -0.5,
        },
    )
}

/// Text revealed by [`intro`].
pub fn intro_text() -> TextReveal {
    TextReveal::new([INTRO_TEXT])
}

/// Services overlay: the wheel drives the panel dial.
pub fn services_overlay() -> OverlaySpec {
    OverlaySpec {
        id: "services".into(),
        timings: OverlayTimings::default(),
        wheel: WheelPolicy::Dial(DialSpec::new(SERVICES.len())),
        panels: SERVICES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Contact overlay: a plain modal that blocks wheel input.
pub fn contact_overlay() -> OverlaySpec {
    OverlaySpec {
        id: "contact".into(),
        timings: OverlayTimings::default(),
        wheel: WheelPolicy::Block,
        panels: Vec::new(),
    }
}

/// Header shown between 1.2 and 2.5 viewport heights of scroll.
pub fn header_window() -> ScrollWindow {
    ScrollWindow {
        from_vh: 1.2,
        to_vh: 2.5,
    }
}

/// Home page, top to bottom, with both overlays.
pub fn home() -> ScrollfxResult<Choreography> {
    Ok(Choreography {
        header: Some(header_window()),
        overlays: vec![services_overlay(), contact_overlay()],
        ..Choreography::new(vec![hero()?, intro(), portfolio_card()?, all_work()?])
    })
}

/// About page.
pub fn about() -> ScrollfxResult<Choreography> {
    let intro = SectionSpec {
        id: "about-intro".into(),
        ..intro()
    };
    Ok(Choreography::new(vec![about_hero()?, intro, values()?]))
}

/// Look a preset up by CLI name; single sections are wrapped in a one-section document.
pub fn by_name(name: &str) -> ScrollfxResult<Choreography> {
    let single = |spec: SectionSpec| Choreography::new(vec![spec]);
    match name {
        "hero" => hero().map(single),
        "about-hero" => about_hero().map(single),
        "values" => values().map(single),
        "all-work" => all_work().map(single),
        "portfolio" => portfolio_card().map(single),
        "intro" => Ok(single(intro())),
        "home" => home(),
        "about" => about(),
        other => Err(ScrollfxError::config(format!(
            "unknown preset '{other}' (known: {})",
            NAMES.join(", ")
        ))),
    }
}
