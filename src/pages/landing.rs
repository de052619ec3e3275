use chrono::Datelike;
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::smooth_scroll::AnchorLink;
use crate::components::typing::TypingTitle;
use crate::components::whatsapp::WhatsAppButton;
use crate::config;
use crate::pages::consultation::ConsultationSection;

const SERVICES: &[(&str, &str, &str)] = &[
    ("🏋️", "Personal Training", "One-to-one sessions built around your body, your schedule and your goals."),
    ("🥗", "Nutrition Coaching", "Sustainable eating plans that fuel training instead of fighting it."),
    ("🧠", "Mindset & Performance", "Habits, focus and recovery work so progress sticks long after the session ends."),
    ("🌍", "Online Coaching", "Programmes and weekly check-ins wherever you are in the world."),
];

const COACHES: &[(&str, &str, &str)] = &[
    ("Maya Okafor", "Head Coach", "Strength & conditioning, 12 years coaching athletes and beginners alike."),
    ("Daniel Brooks", "Nutrition Lead", "Registered nutritionist focused on performance and body recomposition."),
    ("Sofia Lindqvist", "Mindset Coach", "Sports psychologist helping clients build routines that last."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 8rem 1.5rem 4rem;
                        background: linear-gradient(135deg, #fcfcf9 0%, #e8f3f4 100%);
                    }
                    .hero__title {
                        font-size: 3rem;
                        display: inline-block;
                        min-height: 1.2em;
                    }
                    .hero__subtitle {
                        font-size: 1.25rem;
                        color: #626c71;
                        max-width: 640px;
                        margin: 1rem auto 2rem;
                    }
                    .section {
                        padding: 5rem 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                        gap: 1.5rem;
                    }
                    .card {
                        background: #fff;
                        border-radius: 12px;
                        padding: 1.5rem;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                        height: 100%;
                    }
                    .card__icon {
                        font-size: 2rem;
                    }
                    .btn {
                        display: inline-block;
                        padding: 0.85rem 1.75rem;
                        border-radius: 8px;
                        border: none;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        transition: transform 0.1s ease;
                    }
                    .btn--primary {
                        background: #21808d;
                        color: #fff;
                    }
                    .btn--primary:disabled {
                        opacity: 0.7;
                        cursor: not-allowed;
                    }
                    .btn--full-width {
                        width: 100%;
                    }
                    .footer {
                        text-align: center;
                        padding: 2rem;
                        color: #626c71;
                    }
                    .whatsapp-float {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        background: #25d366;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        text-decoration: none;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                        z-index: 900;
                    }
                "#}
            </style>

            <header id="home" class="hero">
                <div class="hero__content">
                    <TypingTitle text="Transform Your Body, Elevate Your Mind" enabled={config::HERO_TYPING_EFFECT} />
                    <p class="hero__subtitle">
                        {"Coaching that treats training, nutrition and mindset as one programme. Start with a free consultation."}
                    </p>
                    <AnchorLink href="#consultation" class={classes!("btn", "btn--primary")}>
                        {"Book a Free Consultation"}
                    </AnchorLink>
                </div>
            </header>

            <section id="services" class="section">
                <h2>{"Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(icon, title, blurb)| html! {
                        <FadeIn class={classes!("service__card")}>
                            <div class="card">
                                <div class="card__icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <section id="coaches" class="section">
                <h2>{"Meet the Coaches"}</h2>
                <div class="card-grid">
                    { for COACHES.iter().map(|(name, role, bio)| html! {
                        <FadeIn class={classes!("coach__card")}>
                            <div class="card">
                                <h3>{*name}</h3>
                                <p><strong>{*role}</strong></p>
                                <p>{*bio}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
            </section>

            <ConsultationSection />

            <footer class="footer">
                <p>{format!("© {} MasterMind Body Global. All rights reserved.", year)}</p>
            </footer>

            <WhatsAppButton
                phone={config::WHATSAPP_NUMBER}
                message="Hi! I'd like to know more about your coaching programmes."
            />
        </div>
    }
}
