#![allow(non_snake_case)]

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::study_core::Flashcard;

#[derive(PartialEq, Props)]
pub struct ContentProps {
    content: String,
}

pub fn UserMessage(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message user-message",
            "{cx.props.content}"
        }
    ))
}

pub fn AssistantMessage(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message other-message",
            "{cx.props.content}"
        }
    ))
}

#[derive(Props)]
pub struct DraftProps<'a> {
    draft: &'a UseRef<String>,
    on_submit: EventHandler<'a, ()>,
}

pub fn UserInput<'a>(cx: Scope<'a, DraftProps<'a>>) -> Element<'a> {
    let draft = cx.props.draft;
    cx.render(rsx!(input {
        id: "user-input",
        r#type: "text",
        placeholder: "Ask me anything about your studies...",
        value: "{draft.read()}",
        oninput: move |e: Event<FormData>| {
            draft.set(e.value.clone());
        },
        onkeydown: move |e: Event<KeyboardData>| {
            if let Key::Enter = e.data.key() {
                cx.props.on_submit.call(());
            }
        },
    }))
}

#[derive(PartialEq, Props)]
pub struct CardProps {
    index: usize,
    card: Flashcard,
}

pub fn CardFace(cx: Scope<CardProps>) -> Element {
    let card = &cx.props.card;
    let number = cx.props.index + 1;
    cx.render(rsx!(
        div {
            class: "card-number",
            "Card {number}"
        }
        div {
            class: "card-question",
            "{card.question}"
        }
        if card.revealed {
            rsx!(div { class: "card-answer", "{card.answer}" })
        }
        if !card.revealed {
            rsx!(div { class: "card-hint", "Click to reveal answer" })
        }
    ))
}
