//! Landing Page

use leptos::prelude::*;

use crate::components::landing::{
    AnnouncementBar, Benefits, CallToAction, Faq, Features, Hero, HowItWorks, Pricing, Stats,
    Testimonials, TrustedBy,
};
use crate::components::{Chatbot, Footer};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AnnouncementBar />
        <div class="landing">
            <Hero />
            <Stats />
            <Features />
            <Benefits />
            <HowItWorks />
            <TrustedBy />
            <Pricing />
            <Testimonials />
            <Faq />
            <CallToAction />
        </div>
        <Footer />
        <Chatbot />
    }
}
