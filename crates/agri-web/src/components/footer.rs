//! Site footer

use agri_core::Language;
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::use_app_state;

struct LinkGroup {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const GROUPS: [LinkGroup; 4] = [
    LinkGroup {
        title: "Product",
        links: &[
            ("AI Predictions", "/dashboard?tab=predictions"),
            ("Data Center", "/dashboard?tab=data"),
            ("Soil Analysis", "/dashboard?tab=soil"),
            ("Pricing", "/#pricing"),
        ],
    },
    LinkGroup {
        title: "Company",
        links: &[("About Us", "#"), ("Careers", "#"), ("Blog", "#"), ("Press", "#")],
    },
    LinkGroup {
        title: "Resources",
        links: &[
            ("Documentation", "#"),
            ("Help Center", "#"),
            ("Community", "#"),
            ("Webinars", "#"),
        ],
    },
    LinkGroup {
        title: "Legal",
        links: &[
            ("Privacy Policy", "#"),
            ("Terms of Service", "#"),
            ("Cookie Policy", "#"),
            ("GDPR", "#"),
        ],
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_app_state();
    let year = Utc::now().year();

    let newsletter = move || match state.language.get() {
        Language::En => (
            "Stay updated with AgriAI",
            "Get the latest farming insights, AI updates, and agricultural tips delivered to your inbox.",
            "Enter your email",
            "Subscribe",
        ),
        Language::Bn => (
            "AgriAI এর সাথে আপডেট থাকুন",
            "সর্বশেষ কৃষি অন্তর্দৃষ্টি এবং AI আপডেট পান।",
            "আপনার ইমেল লিখুন",
            "সাবস্ক্রাইব",
        ),
    };

    view! {
        <footer class="footer">
            <section class="newsletter">
                <div>
                    <h3>{move || newsletter().0}</h3>
                    <p>{move || newsletter().1}</p>
                </div>
                <form class="newsletter-form" on:submit=move |ev| {
                    ev.prevent_default();
                    state.show_success(state.t().common.success);
                }>
                    <input type="email" placeholder=move || newsletter().2 />
                    <button type="submit" class="btn btn-accent">{move || newsletter().3}</button>
                </form>
            </section>

            <div class="footer-grid">
                <div class="footer-brand">
                    <A href="/">"🌾 AgriAI Hub"</A>
                    <p>{move || state.t().landing.hero_subtitle}</p>
                    <ul class="contact">
                        <li>"✉ support@agriai.com"</li>
                        <li>"☎ +880 1700-000000"</li>
                        <li>"📍 Dhaka, Bangladesh"</li>
                    </ul>
                </div>
                {GROUPS
                    .iter()
                    .map(|group| view! {
                        <div class="footer-links">
                            <h4>{group.title}</h4>
                            <ul>
                                {group
                                    .links
                                    .iter()
                                    .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="footer-bottom">
                <span>{format!("© {year} AgriAI Hub. All rights reserved. Made with 💚 in Bangladesh")}</span>
                <nav class="footer-legal">
                    <a href="#">{move || state.t().landing.footer_about}</a>
                    <a href="#">{move || state.t().landing.footer_contact}</a>
                    <a href="#">{move || state.t().landing.footer_privacy}</a>
                    <a href="#">{move || state.t().landing.footer_terms}</a>
                </nav>
            </div>
        </footer>
    }
}
