//! Floating chat assistant panel, mounted on every page.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState, ChatTicket};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view after every transcript change.
    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = end_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::End);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let waiting = move || chat.with(ChatState::is_waiting);
    let open = move || chat.with(|c| c.open);

    let do_send = move || {
        let text = input.get_untracked();
        if let Some(Some((ticket, text))) = chat.try_update(|c| c.send(&text)) {
            input.set(String::new());
            run_request(chat, ticket, text);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let can_send = move || !waiting() && !input.with(|t| t.trim().is_empty());

    view! {
        <button
            class="chat-toggle"
            aria-label=move || if open() { "Close chat" } else { "Open chat" }
            aria-expanded=move || open().to_string()
            on:click=move |_| chat.update(ChatState::toggle)
        >
            {move || if open() { "✕" } else { "💬" }}
        </button>

        <Show when=open>
            <section class="chat-widget" aria-label="Chat assistant">
                <header class="chat-widget__header">
                    <h3>"Jimmy - Your AI Tattoo Assistant 🐕"</h3>
                </header>

                <div class="chat-widget__messages" aria-live="polite">
                    {move || {
                        chat.with(|c| {
                            c.messages
                                .iter()
                                .enumerate()
                                .map(|(index, msg)| {
                                    let class = format!("chat-message {}", msg.role.class());
                                    let content = msg.content.clone();
                                    let retry = (msg.role == ChatRole::Error && msg.retryable)
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="chat-message__retry"
                                                    disabled=waiting
                                                    on:click=move |_| {
                                                        if let Some(Some((ticket, text))) =
                                                            chat.try_update(|c| c.retry(index))
                                                        {
                                                            run_request(chat, ticket, text);
                                                        }
                                                    }
                                                >
                                                    "Try again"
                                                </button>
                                            }
                                        });
                                    view! {
                                        <div class=class>
                                            <p>{content}</p>
                                            {retry}
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    <Show when=waiting>
                        <div class="chat-message chat-message--assistant chat-message--typing" aria-label="Waiting for reply">
                            <span></span><span></span><span></span>
                        </div>
                    </Show>
                    <div node_ref=end_ref></div>
                </div>

                <form class="chat-widget__input-row" on:submit=on_submit>
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Type your message..."
                        disabled=waiting
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary" disabled=move || !can_send()>
                        "Send"
                    </button>
                </form>
            </section>
        </Show>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn run_request(chat: RwSignal<ChatState>, ticket: ChatTicket, text: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_chat_message(&text).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("chat request failed: {e}");
            }
            let applied = chat.try_update(|c| c.finish(ticket, outcome)).unwrap_or(false);
            if !applied {
                leptos::logging::log!("dropped chat reply for a closed panel");
            }
        });
    }
}
