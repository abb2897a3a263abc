// SPDX-FileCopyrightText: 2026 Fulfil Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the message gate, payload mirroring and context
//! registry.

use fulfil_core::content::{BasicCard, MediaObject, SimpleResponses, TableCard};
use fulfil_core::{ApiVersion, MessageKind, Parameters, Platform, ResponseMediaType};
use fulfil_dialogflow::{
    ContextRegistry, MessageContent, MessageEnvelope, ResponseOptions, WebhookResponse,
};
use proptest::prelude::*;
use serde_json::json;

#[derive(Debug, Clone)]
enum Op {
    Text(Platform),
    Spoken(Platform),
    Image(Platform),
    Card(Platform),
    QuickReplies(Platform),
    LinkOut(Platform),
    Table(Platform),
    Media(Platform),
    ExpectUserResponse(bool),
}

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![
        Just(Platform::Unspecified),
        Just(Platform::Facebook),
        Just(Platform::Slack),
        Just(Platform::ActionsOnGoogle),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_platform().prop_map(Op::Text),
        arb_platform().prop_map(Op::Spoken),
        arb_platform().prop_map(Op::Image),
        arb_platform().prop_map(Op::Card),
        arb_platform().prop_map(Op::QuickReplies),
        arb_platform().prop_map(Op::LinkOut),
        arb_platform().prop_map(Op::Table),
        arb_platform().prop_map(Op::Media),
        any::<bool>().prop_map(Op::ExpectUserResponse),
    ]
}

fn apply(response: &mut WebhookResponse, op: &Op) {
    match op {
        Op::Text(platform) => {
            response.add_text_message(*platform, "hello", "", "");
        }
        Op::Spoken(platform) => {
            response.add_fulfillment_message(MessageEnvelope::new(
                *platform,
                SimpleResponses::default(),
            ));
        }
        Op::Image(platform) => {
            response.add_image(*platform, "https://img", "alt");
        }
        Op::Card(platform) => {
            response.add_card(*platform, BasicCard::new("card"));
        }
        Op::QuickReplies(platform) => {
            response.add_quick_replies(*platform, "pick", ["a", "b"]);
        }
        Op::LinkOut(platform) => {
            response.add_link_out_suggestion(*platform, "https://site", "Site");
        }
        Op::Table(platform) => {
            response.add_table_card(*platform, TableCard::default(), None);
        }
        Op::Media(platform) => {
            response.add_media(
                *platform,
                ResponseMediaType::Audio,
                vec![MediaObject::new("track", "https://cdn/track.mp3")],
            );
        }
        Op::ExpectUserResponse(expect) => {
            response.set_expect_user_response(*expect);
        }
    }
}

fn build(ops: &[Op], create_payload_object: bool) -> WebhookResponse {
    let mut response = WebhookResponse::new(
        "projects/p/agent/sessions/s",
        ResponseOptions {
            version: ApiVersion::V2,
            create_payload_object,
        },
    );
    for op in ops {
        apply(&mut response, op);
    }
    response
}

proptest! {
    /// Every non-speech envelope is preceded by a spoken response for the
    /// same platform.
    #[test]
    fn speech_always_comes_first(
        ops in prop::collection::vec(arb_op(), 0..24),
        mirror in any::<bool>(),
    ) {
        let response = build(&ops, mirror);
        let messages = response.fulfillment_messages();
        for (index, message) in messages.iter().enumerate() {
            if message.kind() == MessageKind::SimpleResponses {
                continue;
            }
            let spoken_before = messages[..index]
                .iter()
                .any(|earlier| earlier.matches(message.platform, MessageKind::SimpleResponses));
            prop_assert!(spoken_before, "{:?} at {} has no spoken response before it", message.kind(), index);
        }
    }

    /// At most one payload envelope per platform, always equal to the
    /// document payload.
    #[test]
    fn payload_envelopes_track_the_document_payload(
        ops in prop::collection::vec(arb_op(), 0..24),
        mirror in any::<bool>(),
    ) {
        let response = build(&ops, mirror);
        for platform in [Platform::Unspecified, Platform::Facebook, Platform::Slack, Platform::ActionsOnGoogle] {
            let payloads: Vec<_> = response
                .fulfillment_messages()
                .iter()
                .filter(|message| message.matches(platform, MessageKind::Payload))
                .collect();
            prop_assert!(payloads.len() <= 1);
            if let Some(envelope) = payloads.first() {
                let MessageContent::Payload(payload) = &envelope.content else {
                    unreachable!("kind and content disagree");
                };
                prop_assert_eq!(Some(&payload.google), response.payload());
            }
        }
        if !mirror {
            prop_assert!(!response
                .fulfillment_messages()
                .iter()
                .any(|message| message.kind() == MessageKind::Payload));
        }
    }

    /// Re-adding a context keeps one entry per name, with the latest lifespan
    /// and the union of every parameter map passed for it.
    #[test]
    fn contexts_stay_unique(
        adds in prop::collection::vec((0usize..4, 0u32..10, 0i64..100), 0..32),
    ) {
        let names = ["alpha", "beta", "gamma", "delta"];
        let mut registry = ContextRegistry::new();
        for (name, lifespan, value) in &adds {
            let mut parameters = Parameters::new();
            parameters.insert(format!("k{value}"), json!(value));
            registry.add(names[*name], *lifespan, parameters);
        }

        for name in names {
            let matching = registry.as_slice().iter().filter(|c| c.name == name).count();
            let last = adds.iter().rev().find(|(n, _, _)| names[*n] == name);
            match last {
                Some((_, lifespan, _)) => {
                    prop_assert_eq!(matching, 1);
                    prop_assert_eq!(registry.get(name).map(|c| c.lifespan_count), Some(*lifespan));

                    let mut union = Parameters::new();
                    for (_, _, value) in adds.iter().filter(|(n, _, _)| names[*n] == name) {
                        union.insert(format!("k{value}"), json!(value));
                    }
                    prop_assert_eq!(registry.get(name).map(|c| &c.parameters), Some(&union));
                }
                None => prop_assert_eq!(matching, 0),
            }
        }

        prop_assert!(registry.delete::<&str>(&[]));
        prop_assert!(registry.is_empty());
    }
}
