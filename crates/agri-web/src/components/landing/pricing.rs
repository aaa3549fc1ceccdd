//! Pricing cards

use agri_core::Subscription;
use leptos::prelude::*;
use leptos_router::components::A;

struct Plan {
    tier: Subscription,
    description: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    period: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        tier: Subscription::Free,
        description: "Perfect for individual farmers getting started",
        price: "Free",
        original_price: None,
        period: "forever",
        features: &[
            "Up to 5 hectares",
            "Basic yield predictions",
            "Weather alerts",
            "AI chat (10 queries/day)",
            "Mobile app access",
            "Community support",
        ],
        cta: "Get Started Free",
        popular: false,
    },
    Plan {
        tier: Subscription::Pro,
        description: "For serious farmers who want maximum yields",
        price: "৳999",
        original_price: Some("৳1,999"),
        period: "/month",
        features: &[
            "Unlimited hectares",
            "Advanced AI predictions",
            "Real-time satellite imagery",
            "Unlimited AI chat",
            "Soil analysis reports",
            "Priority support",
            "Custom alerts",
            "Export data & reports",
        ],
        cta: "Start 14-Day Trial",
        popular: true,
    },
    Plan {
        tier: Subscription::Enterprise,
        description: "For agribusinesses and cooperatives",
        price: "Custom",
        original_price: None,
        period: "pricing",
        features: &[
            "Everything in Pro",
            "Multi-farm management",
            "API access",
            "Dedicated account manager",
            "Custom integrations",
            "On-site training",
            "SLA guarantee",
            "White-label options",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <span class="badge">"Limited Time: 50% Off Pro Plan"</span>
            <h2>"Simple, transparent pricing"</h2>
            <p class="subtitle">
                "Start for free, upgrade when you're ready. No hidden fees, cancel anytime."
            </p>

            <div class="plans">
                {PLANS
                    .iter()
                    .map(|plan| view! {
                        <div class="plan" class:featured={plan.popular}>
                            {plan.popular.then(|| view! { <span class="badge">"⭐ Most Popular"</span> })}
                            <h3>{plan.tier.display_name()}</h3>
                            <p class="plan-description">{plan.description}</p>
                            <div class="price">
                                {plan.original_price.map(|p| view! { <s class="original">{p}</s> })}
                                {plan.price}
                                <span class="period">{plan.period}</span>
                            </div>
                            <ul>
                                {plan.features.iter().map(|f| view! { <li>"✓ "{*f}</li> }).collect_view()}
                            </ul>
                            <A
                                href="/auth?tab=signup"
                                attr:class={if plan.popular { "btn btn-primary" } else { "btn" }}
                            >
                                {plan.cta}
                            </A>
                        </div>
                    })
                    .collect_view()}
            </div>

            <p class="guarantee">
                "🛡️ 30-day money-back guarantee • No credit card required for free tier"
            </p>
        </section>
    }
}
