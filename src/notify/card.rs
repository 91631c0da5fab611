//! Adaptive Card payload for a creature.

use serde::Serialize;

use crate::models::CreatureRecord;
use crate::utils::title_case;

pub const CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
const CARD_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub version: &'static str,
    pub body: Vec<CardElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock { text: String, weight: &'static str, size: &'static str },
    Image { url: String, size: &'static str },
    FactSet { facts: Vec<Fact> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    fn new(title: &str, value: String) -> Self {
        Self { title: title.to_string(), value }
    }
}

/// Message attachment wrapping a card
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    #[serde(rename = "contentType")]
    pub content_type: &'static str,
    pub content: AdaptiveCard,
}

impl From<AdaptiveCard> for Attachment {
    fn from(content: AdaptiveCard) -> Self {
        Self { content_type: CARD_CONTENT_TYPE, content }
    }
}

/// Title, sprite (when the API has one) and a three-row fact list
pub fn build_card(record: &CreatureRecord) -> AdaptiveCard {
    let mut body = vec![CardElement::TextBlock {
        text: title_case(&record.name),
        weight: "Bolder",
        size: "Medium",
    }];

    if let Some(url) = &record.sprite_url {
        body.push(CardElement::Image { url: url.clone(), size: "Medium" });
    }

    body.push(CardElement::FactSet {
        facts: vec![
            Fact::new("Type(s)", record.types.join(", ")),
            Fact::new("Abilities", record.abilities.join(", ")),
            Fact::new("Base Stats", record.stat_lines().collect::<Vec<_>>().join(", ")),
        ],
    });

    AdaptiveCard { card_type: "AdaptiveCard", version: CARD_VERSION, body }
}
