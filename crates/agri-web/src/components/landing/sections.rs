//! Marketing sections of the landing page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::use_app_state;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_app_state();
    let start_href = move || {
        let href = if state.user.with(Option::is_some) { "/dashboard" } else { "/auth?tab=signup" };
        href.to_string()
    };

    view! {
        <section class="hero">
            <span class="badge">"🌾 "{move || state.t().landing.badge}</span>
            <h1>{move || state.t().landing.hero_title}</h1>
            <p class="tagline">{move || state.t().landing.hero_subtitle}</p>
            <div class="cta">
                <A href=start_href attr:class="btn btn-primary btn-lg">
                    {move || state.t().landing.get_started}
                </A>
                <a href="#how-it-works" class="btn btn-outline btn-lg">
                    "▶ "{move || state.t().landing.watch_demo}
                </a>
            </div>
            <ul class="trust-badges">
                <li>"✓ Free to start"</li>
                <li>"✓ Works offline"</li>
                <li>"✓ English & বাংলা"</li>
            </ul>
        </section>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    let state = use_app_state();
    let stats = move || {
        let l = &state.t().landing;
        [
            ("10,000+", l.stat_farmers),
            ("500+", l.stat_villages),
            ("95%", l.stat_accuracy),
            ("24/7", l.stat_support),
        ]
    };

    view! {
        <section class="stats">
            {move || {
                stats()
                    .into_iter()
                    .map(|(value, label)| view! {
                        <div class="stat">
                            <p class="stat-value">{value}</p>
                            <p class="stat-label">{label}</p>
                        </div>
                    })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let state = use_app_state();

    view! {
        <section id="features" class="features">
            <span class="badge">"Features"</span>
            <h2>{move || state.t().landing.features_title}</h2>
            <p class="subtitle">
                "Everything you need to transform your farming operations with the power of AI"
            </p>
            <div class="feature-grid">
                {move || {
                    let l = &state.t().landing;
                    [
                        ("📈", &l.feature_yield),
                        ("📶", &l.feature_offline),
                        ("💬", &l.feature_chat),
                        ("📊", &l.feature_dashboard),
                    ]
                    .into_iter()
                    .map(|(icon, f)| view! {
                        <div class="feature">
                            <span class="feature-icon">{icon}</span>
                            <h3>{f.title}</h3>
                            <p>{f.desc}</p>
                        </div>
                    })
                    .collect_view()
                }}
            </div>
        </section>
    }
}

const BENEFITS: [(&str, &str); 6] = [
    ("🌱", "Increase crop yield by up to 40%"),
    ("⛅", "Real-time weather integration"),
    ("📱", "Works offline in remote areas"),
    ("🛡️", "Secure data protection"),
    ("⚡", "Instant AI-powered insights"),
    ("🌐", "Available in English & Bengali"),
];

/// Sample bar heights (percent) for the static preview card
const PREVIEW_BARS: [u8; 6] = [65, 80, 55, 90, 75, 85];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="benefits">
            <div>
                <span class="badge">"Why Choose Us"</span>
                <h2>"Empowering farmers with intelligent technology"</h2>
                <p>
                    "Our AI-powered platform combines cutting-edge technology with local agricultural expertise to help you make smarter farming decisions."
                </p>
                <ul class="benefit-list">
                    {BENEFITS
                        .iter()
                        .map(|(icon, text)| view! { <li><span>{*icon}</span>{*text}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="preview-card">
                <div class="preview-header">
                    <div>
                        <p class="preview-title">"Yield Prediction"</p>
                        <p class="muted">"Rice - Aman Season"</p>
                    </div>
                    <span class="badge">"95% confident"</span>
                </div>
                <div class="preview-bars">
                    {PREVIEW_BARS
                        .iter()
                        .map(|h| view! { <div class="preview-bar" style=format!("height:{h}%")></div> })
                        .collect_view()}
                </div>
                <div class="preview-figures">
                    <div><p class="muted">"Predicted"</p><p>"4.2 tons/ha"</p></div>
                    <div><p class="muted">"Increase"</p><p>"+35%"</p></div>
                    <div><p class="muted">"ROI"</p><p>"3.2x"</p></div>
                </div>
            </div>
        </section>
    }
}

const STEPS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Connect Your Farm",
        "Sign up and input your farm details, location, crop types, and soil conditions in minutes.",
    ),
    (
        "02",
        "AI Analysis",
        "Our advanced AI analyzes weather patterns, soil data, and historical yields to generate insights.",
    ),
    (
        "03",
        "Get Predictions",
        "Receive accurate yield predictions, pest alerts, and personalized recommendations.",
    ),
    (
        "04",
        "Grow Smarter",
        "Implement AI-driven strategies to maximize your harvest and reduce waste.",
    ),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <span class="badge">"How It Works"</span>
            <h2>"From signup to insights in four steps"</h2>
            <p class="subtitle">
                "Our streamlined process gets you from signup to actionable insights in minutes, not weeks."
            </p>
            <ol class="steps">
                {STEPS
                    .iter()
                    .map(|(number, title, description)| view! {
                        <li class="step">
                            <span class="step-number">{*number}</span>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

const PARTNERS: [(&str, &str); 6] = [
    ("Ministry of Agriculture", "Government"),
    ("BRAC", "NGO"),
    ("Bangladesh Agricultural University", "Education"),
    ("Grameen Bank", "Finance"),
    ("FAO Bangladesh", "International"),
    ("CGIAR", "Research"),
];

const IMPACT: [(&str, &str); 4] = [
    ("50+", "Partner Organizations"),
    ("15", "Districts Covered"),
    ("৳2.5B", "Farmer Savings"),
    ("3+", "Years of Impact"),
];

#[component]
pub fn TrustedBy() -> impl IntoView {
    view! {
        <section class="trusted-by">
            <span class="badge">"Trusted Partners"</span>
            <div class="partners">
                {PARTNERS
                    .iter()
                    .map(|(name, kind)| view! {
                        <div class="partner">
                            <p class="partner-name">{*name}</p>
                            <p class="muted">{*kind}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="impact">
                {IMPACT
                    .iter()
                    .map(|(value, label)| view! {
                        <div><p class="stat-value">{*value}</p><p class="muted">{*label}</p></div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "রহিম আহমেদ",
        role: "Farmer, Rajshahi",
        content: "AgriAI Hub helped me increase my rice yield by 35%. The AI predictions are incredibly accurate!",
        rating: 5,
    },
    Testimonial {
        name: "Fatima Begum",
        role: "Agricultural Officer",
        content: "Finally a tool that works offline! Our field officers can now collect data even in remote villages.",
        rating: 5,
    },
    Testimonial {
        name: "করিম উদ্দিন",
        role: "Farmer, Sylhet",
        content: "The Bengali chatbot understands my questions perfectly. It feels like talking to an expert!",
        rating: 5,
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <span class="badge">"Testimonials"</span>
            <h2>"Trusted by farmers across Bangladesh"</h2>
            <div class="testimonial-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        let initial = t.name.chars().next().map(String::from).unwrap_or_default();
                        view! {
                            <div class="testimonial">
                                <div class="stars">{"★".repeat(t.rating)}</div>
                                <p class="quote">{format!("\"{}\"", t.content)}</p>
                                <div class="author">
                                    <span class="avatar">{initial}</span>
                                    <div>
                                        <p class="font-bengali">{t.name}</p>
                                        <p class="muted">{t.role}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    let state = use_app_state();

    view! {
        <section class="cta-section">
            <h2>{move || state.t().landing.cta_title}</h2>
            <p>{move || state.t().landing.cta_subtitle}</p>
            <div class="cta">
                <A href="/auth?tab=signup" attr:class="btn btn-accent btn-lg">
                    {move || state.t().landing.start_free}
                </A>
                <a href="mailto:sales@agriai.com" class="btn btn-outline btn-lg">
                    {move || state.t().landing.contact_sales}
                </a>
            </div>
        </section>
    }
}
