use dioxus::prelude::*;
use tracing::warn;

use super::components::*;
use crate::study_core::{
    extract, respond, second_ticks, templates, wants_flashcards, ChatTurn, Flashcard, Role,
    StudyTimer,
};

static QUICK_PROMPTS: [&str; 5] = [
    "Explain this concept to me",
    "Create a study plan",
    "Generate practice questions",
    "Help with my homework",
    "Study tips for exams",
];

const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chat,
    Flashcards,
    Timer,
}

fn tab_class(active: Tab, tab: Tab) -> &'static str {
    if active == tab {
        "tab active"
    } else {
        "tab"
    }
}

pub fn app(cx: Scope) -> Element {
    let draft = use_ref(cx, String::new);
    let messages = use_ref(cx, || vec![ChatTurn::assistant(templates::GREETING)]);
    let flashcards = use_ref(cx, Vec::<Flashcard>::new);
    let timer = use_ref(cx, StudyTimer::default);
    let tab = use_state(cx, || Tab::Chat);

    // Restarted whenever the timer is started or stopped, so the first
    // second is counted a full second after Start.
    let running = timer.read().running;
    use_future(cx, (&running,), move |(running,)| {
        to_owned![timer];
        async move {
            if !running {
                return;
            }
            let mut ticks = second_ticks();
            loop {
                ticks.tick().await;
                timer.write().tick();
            }
        }
    });

    let send = move |_: ()| {
        let input = draft.read().clone();
        if input.trim().is_empty() {
            return;
        }
        draft.set(String::new());
        messages.write().push(ChatTurn::user(input.clone()));

        let reply = respond(&messages.read()).unwrap_or_else(|err| {
            warn!(%err, "no reply for chat turn");
            APOLOGY.to_string()
        });

        if wants_flashcards(&input) {
            let cards = extract(&reply);
            if !cards.is_empty() {
                flashcards.set(cards);
                tab.set(Tab::Flashcards);
            }
        }
        messages.write().push(ChatTurn::assistant(reply));
    };

    let active = *tab.get();
    let deck_size = flashcards.read().len();
    let deck_label = if deck_size > 0 {
        format!("🎴 Flashcards ({deck_size})")
    } else {
        "🎴 Flashcards".to_string()
    };
    let elapsed = timer.read().display();
    let timer_label = if timer.read().running { "Pause" } else { "Start" };

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "header",
            h1 {"📚 Student AI Assistant"}
            h2 {"Your personal study companion"}
        }
        div {
            id: "tabs",
            button {
                class: tab_class(active, Tab::Chat),
                onclick: move |_| tab.set(Tab::Chat),
                "💬 Chat"
            }
            button {
                class: tab_class(active, Tab::Flashcards),
                onclick: move |_| tab.set(Tab::Flashcards),
                "{deck_label}"
            }
            button {
                class: tab_class(active, Tab::Timer),
                onclick: move |_| tab.set(Tab::Timer),
                "⏱️ Study Timer"
            }
        }
        match active {
            Tab::Chat => rsx!(
                div {
                    id: "chat-window",
                    class: "chat-window",
                    for turn in messages.read().iter() {
                        match turn.role {
                            Role::User => rsx!(UserMessage { content: turn.text().to_owned() }),
                            Role::Assistant | Role::Other => rsx!(AssistantMessage { content: turn.text().to_owned() }),
                        }
                    }
                }
                div {
                    id: "quick-prompts",
                    for prompt in (QUICK_PROMPTS) {
                        button {
                            class: "quick-prompt",
                            onclick: move |_| draft.set(prompt.to_string()),
                            "{prompt}"
                        }
                    }
                }
                div {
                    id: "input-area",
                    UserInput {
                        draft: draft,
                        on_submit: move |_| send(()),
                    }
                    button {
                        id: "send-button",
                        onclick: move |_| send(()),
                        "Send"
                    }
                }
            ),
            Tab::Flashcards => rsx!(
                div {
                    id: "flashcards",
                    if deck_size == 0 {
                        rsx!(
                            div {
                                class: "empty-deck",
                                h3 {"No flashcards yet"}
                                p {"Ask me to create flashcards or practice questions in the chat!"}
                            }
                        )
                    }
                    for (index, card) in flashcards.read().iter().enumerate() {
                        div {
                            class: "flashcard",
                            onclick: move |_| {
                                if let Some(card) = flashcards.write().get_mut(index) {
                                    card.toggle();
                                }
                            },
                            CardFace { index: index, card: card.clone() }
                        }
                    }
                }
            ),
            Tab::Timer => rsx!(
                div {
                    id: "timer",
                    h3 {"Study Session Timer"}
                    div { class: "timer-display", "{elapsed}" }
                    div {
                        class: "timer-controls",
                        button {
                            onclick: move |_| timer.write().toggle(),
                            "{timer_label}"
                        }
                        button {
                            class: "reset",
                            onclick: move |_| timer.write().reset(),
                            "Reset"
                        }
                    }
                    p {"💡 Tip: Use the Pomodoro Technique"}
                }
            ),
        }
        div {
            id: "bottom-holder"
        }
    ))
}
