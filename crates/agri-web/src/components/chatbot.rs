//! Floating assistant widget

use agri_core::{ChatMessage, Conversation, quick_actions};
use leptos::prelude::*;

use crate::state::{simulate_latency, use_app_state};

#[component]
fn Bubble(message: ChatMessage) -> impl IntoView {
    let class = format!("message message-{}", message.role);
    let time = message.timestamp.with_timezone(&chrono::Local).format("%H:%M").to_string();

    view! {
        <div class=class>
            <p class="content">{message.content}</p>
            <span class="time">{time}</span>
        </div>
    }
}

#[component]
pub fn Chatbot() -> impl IntoView {
    let state = use_app_state();
    let conversation = RwSignal::new(Conversation::new(state.language.get_untracked()));
    let (open, set_open) = signal(false);
    let (minimized, set_minimized) = signal(false);
    let (input, set_input) = signal(String::new());
    let (typing, set_typing) = signal(false);

    // A new language starts a new conversation
    Effect::new(move |_| {
        let lang = state.language.get();
        conversation.update(|c| {
            if c.language() != lang {
                c.reset(lang);
            }
        });
    });

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || typing.get_untracked() {
            return;
        }
        conversation.update(|c| {
            c.push_user(&text);
        });
        set_input.set(String::new());
        set_typing.set(true);

        let delay = state.config.chat_delay(&mut rand::thread_rng());
        leptos::task::spawn_local(async move {
            simulate_latency(delay).await;
            conversation.update(|c| {
                c.reply_to_last();
            });
            set_typing.set(false);
        });
    };

    view! {
        <button
            class="chat-fab"
            aria-label=move || state.t().chat.title
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            {move || if open.get() { "✕" } else { "💬" }}
        </button>

        <Show when=move || open.get()>
            <div class="chat-window" class:minimized=move || minimized.get()>
                <header class="chat-header">
                    <div>
                        <h3>{move || state.t().chat.title}<span class="badge">"AI"</span></h3>
                        <p class="presence"><span class="dot"></span>{move || state.t().chat.online}</p>
                    </div>
                    <div class="chat-controls">
                        <button
                            aria-label="Minimize"
                            on:click=move |_| set_minimized.update(|m| *m = !*m)
                        >
                            {move || if minimized.get() { "▢" } else { "–" }}
                        </button>
                        <button aria-label="Close" on:click=move |_| set_open.set(false)>"✕"</button>
                    </div>
                </header>

                <Show when=move || !minimized.get()>
                    <div class="messages">
                        <For
                            each=move || conversation.with(|c| c.messages().to_vec())
                            key=|msg| msg.id.clone()
                            children=|msg| view! { <Bubble message=msg /> }
                        />
                        <Show when=move || typing.get()>
                            <div class="message message-assistant typing">
                                {move || state.t().chat.thinking}
                            </div>
                        </Show>
                    </div>

                    <Show when=move || conversation.with(Conversation::show_quick_actions)>
                        <div class="quick-actions">
                            {move || {
                                quick_actions(state.language.get())
                                    .into_iter()
                                    .map(|action| view! {
                                        <button on:click=move |_| set_input.set(action.query.to_string())>
                                            "✨ "{action.label}
                                        </button>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>

                    <div class="chat-input">
                        <input
                            type="text"
                            placeholder=move || state.t().chat.placeholder
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    send();
                                }
                            }
                        />
                        <button
                            class="btn btn-primary"
                            on:click=move |_| send()
                            disabled=move || input.with(|i| i.trim().is_empty()) || typing.get()
                        >
                            {move || state.t().chat.send}
                        </button>
                    </div>
                    <p class="powered-by">{move || state.t().chat.powered_by}</p>
                </Show>
            </div>
        </Show>
    }
}
