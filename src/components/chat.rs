use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Message;
use crate::scroll;
use crate::state::ConversationStore;

/// Main chat area: transcript, working indicator, and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let store = expect_context::<ConversationStore>();
    let transcript = store.transcript();
    let pending = store.pending();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the viewport pinned to the latest entry whenever the
    // transcript grows or the working indicator appears/disappears.
    // Nothing to do on the very first render of an empty conversation.
    let scroll_transcript = transcript.clone();
    let scroll_pending = pending.clone();
    Effect::new(move || {
        let entries = scroll_transcript.get().len();
        let busy = scroll_pending.get();
        if entries == 0 && !busy {
            return;
        }
        if let Some(el) = messages_ref.get() {
            scroll::pin_to_latest(&el);
        }
    });

    let list_transcript = transcript.clone();
    let list_pending = pending.clone();

    view! {
        <main class="chat-area">
            <div class="chat-header">"Ask the knowledge base"</div>

            <div class="messages-container" node_ref=messages_ref>
                {move || {
                    let msgs = list_transcript.get();
                    if msgs.is_empty() && !list_pending.get() {
                        return view! {
                            <div class="empty-state">
                                "Ask a question to get started"
                            </div>
                        }
                        .into_any();
                    }

                    let bubbles = msgs
                        .into_iter()
                        .map(|msg| view! { <MessageBubble message=msg /> })
                        .collect::<Vec<_>>();
                    let working = list_pending.get().then(|| {
                        view! {
                            <div class="message assistant">
                                <div class="role-label">"assistant"</div>
                                <div class="working-indicator">"Thinking…"</div>
                            </div>
                        }
                    });

                    view! {
                        {bubbles}
                        {working}
                    }
                    .into_any()
                }}
            </div>

            <ChatInput />
        </main>
    }
}

/// A single transcript entry with its role label and source badges.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = format!("message {}", message.role.label());
    let label = message.role.label();

    let badges = (!message.sources.is_empty()).then(|| {
        let badges = message
            .sources
            .iter()
            .map(|src| view! { <span class="source-badge">{src.clone()}</span> })
            .collect::<Vec<_>>();
        view! { <div class="sources">{badges}</div> }
    });

    view! {
        <div class=css_class>
            <div class="role-label">{label}</div>
            <div class="message-body">{message.content}</div>
            {badges}
        </div>
    }
}

/// Question input with textarea and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let store = expect_context::<ConversationStore>();
    let pending = store.pending();
    let input = RwSignal::new(String::new());

    let send = {
        let store = store.clone();
        let pending = pending.clone();
        move || {
            let text = input.get();
            if text.trim().is_empty() || pending.get_untracked() {
                return;
            }
            input.set(String::new());
            let store = store.clone();
            spawn_local(async move {
                store.submit(&text).await;
            });
        }
    };

    let send_clone = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_clone();
        }
    };

    let on_submit = move |_| {
        send();
    };

    let busy = pending.clone();
    let is_busy = pending.clone();
    let can_send = move || !busy.get() && !input.get().trim().is_empty();

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="1"
                    placeholder="Type a question… (Enter to send, Shift+Enter for newline)"
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                    }
                    on:keydown=on_keydown
                    disabled=move || is_busy.get()
                />
                <button class="send-btn" on:click=on_submit disabled=move || !can_send()>
                    {
                        let pending = pending.clone();
                        move || if pending.get() { "Sending…" } else { "Send" }
                    }
                </button>
            </div>
        </div>
    }
}
