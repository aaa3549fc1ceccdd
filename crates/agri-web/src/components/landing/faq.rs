//! FAQ accordion

use leptos::prelude::*;

const FAQS: [(&str, &str); 6] = [
    (
        "How accurate are the AI yield predictions?",
        "Our AI models achieve 95% accuracy on average, trained on decades of agricultural data from Bangladesh and validated by agricultural research institutions. Accuracy improves as you provide more data about your specific farm conditions.",
    ),
    (
        "Does the app work offline in remote areas?",
        "Yes! AgriAI Hub is designed for rural connectivity challenges. Core features like the AI chatbot, saved predictions, and farm records work completely offline. Data syncs automatically when you regain internet connection.",
    ),
    (
        "What crops does the platform support?",
        "We support all major crops grown in Bangladesh including rice (Aman, Aus, Boro), wheat, jute, vegetables, fruits, and more. Our AI is continuously learning to support additional crop varieties.",
    ),
    (
        "Is my farm data secure and private?",
        "Absolutely. We use bank-level encryption for all data. Your farm data is never shared with third parties without your explicit consent. You retain full ownership of your data and can export or delete it anytime.",
    ),
    (
        "Can I use the platform in Bengali?",
        "Yes! The entire platform, including the AI chatbot, is available in both English and Bengali (বাংলা). Our AI understands conversational Bengali and can provide advice in your preferred language.",
    ),
    (
        "How do I get started?",
        "Simply sign up for a free account, add your farm details (location, size, crops), and start exploring. Our onboarding wizard guides you through the process in under 5 minutes. No technical expertise required!",
    ),
];

/// Single-open accordion; clicking the open item closes it
#[component]
pub fn Faq() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section id="faq" class="faq">
            <span class="badge">"FAQ"</span>
            <h2>"Frequently asked questions"</h2>
            <div class="accordion">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| {
                        let is_open = move || open.get() == Some(i);
                        view! {
                            <div class="accordion-item" class:open=is_open>
                                <button
                                    class="accordion-trigger"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| set_open.update(|o| {
                                        *o = if *o == Some(i) { None } else { Some(i) };
                                    })
                                >
                                    <span>{*question}</span>
                                    <span class="chevron">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                <Show when=is_open>
                                    <p class="accordion-content">{*answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
