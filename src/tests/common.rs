use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::PokedexConfig;
use crate::errors::{PokedexResult, ResourceFetchError};
use crate::gateway::{ResourceGateway, Transport};
use crate::pokedex::Pokedex;

pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

/// An in-memory transport. Unknown URLs answer 404, like the real API.
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, Value>,
    failures: HashMap<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url`.
    pub fn with(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), body);
        self
    }

    /// Answer `url` with an error status, even if a body is registered.
    pub fn failing(mut self, url: &str, status: u16) -> Self {
        self.failures.insert(url.to_string(), status);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == url).count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str) -> PokedexResult<Value> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(status) = self.failures.get(url) {
            return Err(ResourceFetchError::Status {
                url: url.to_string(),
                status: *status,
            }
            .into());
        }

        match self.responses.get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(ResourceFetchError::Status {
                url: url.to_string(),
                status: 404,
            }
            .into()),
        }
    }
}

pub fn resource_url(kind: &str, name: &str) -> String {
    format!("{}/{}/{}/", BASE_URL, kind, name)
}

pub fn entry_url(endpoint: &str, name: &str) -> String {
    format!("{}/{}/{}", BASE_URL, endpoint, name)
}

pub fn chain_url(id: u32) -> String {
    resource_url("evolution-chain", &id.to_string())
}

fn named(kind: &str, name: &str) -> Value {
    json!({"name": name, "url": resource_url(kind, name)})
}

/// A type/stat/ability/color resource with the given `(language, name)` pairs.
pub fn localized(name: &str, translations: &[(&str, &str)]) -> Value {
    let names: Vec<Value> = translations
        .iter()
        .map(|(language, text)| json!({"name": text, "language": named("language", language)}))
        .collect();
    json!({"id": 1, "name": name, "names": names})
}

/// A linear chain through `species`, base form first.
pub fn linear_chain(id: u32, species: &[&str]) -> Value {
    let mut node: Option<Value> = None;
    for name in species.iter().rev() {
        let evolves_to: Vec<Value> = node.take().into_iter().collect();
        node = Some(json!({
            "species": named("pokemon-species", name),
            "evolves_to": evolves_to,
        }));
    }
    json!({"id": id, "chain": node.unwrap_or(Value::Null)})
}

pub fn artwork_for(name: &str) -> String {
    format!("https://img.test/artwork/{}.png", name)
}

/// A builder for `/pokemon/{name}` bodies with common defaults.
///
/// # Example
/// ```
/// let detail = TestEntryBuilder::new(25, "pikachu")
///     .with_types(&["electric"])
///     .with_moves(&["thunder-shock"])
///     .build();
/// ```
pub struct TestEntryBuilder {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<String>,
    abilities: Vec<String>,
    stats: Vec<(String, u32)>,
    moves: Vec<String>,
    artwork: bool,
}

impl TestEntryBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            height: 10,
            weight: 100,
            types: vec!["normal".to_string()],
            abilities: vec!["run-away".to_string()],
            stats: vec![("hp".to_string(), 50)],
            moves: Vec::new(),
            artwork: true,
        }
    }

    pub fn with_measurements(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_abilities(mut self, abilities: &[&str]) -> Self {
        self.abilities = abilities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_stats(mut self, stats: &[(&str, u32)]) -> Self {
        self.stats = stats.iter().map(|(s, v)| (s.to_string(), *v)).collect();
        self
    }

    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn without_artwork(mut self) -> Self {
        self.artwork = false;
        self
    }

    pub fn build(self) -> Value {
        let types: Vec<Value> = self
            .types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({"slot": i + 1, "type": named("type", t)}))
            .collect();
        let abilities: Vec<Value> = self
            .abilities
            .iter()
            .enumerate()
            .map(|(i, a)| json!({"ability": named("ability", a), "is_hidden": i > 0, "slot": i + 1}))
            .collect();
        let stats: Vec<Value> = self
            .stats
            .iter()
            .map(|(s, v)| json!({"base_stat": v, "effort": 0, "stat": named("stat", s)}))
            .collect();
        let moves: Vec<Value> = self
            .moves
            .iter()
            .map(|m| json!({"move": named("move", m)}))
            .collect();
        let artwork = if self.artwork {
            json!({
                "front_default": artwork_for(&self.name),
                "front_shiny": format!("https://img.test/artwork/shiny/{}.png", self.name),
            })
        } else {
            json!({"front_default": null, "front_shiny": null})
        };

        json!({
            "id": self.id,
            "name": self.name,
            "height": self.height,
            "weight": self.weight,
            "types": types,
            "abilities": abilities,
            "stats": stats,
            "moves": moves,
            "sprites": {
                "front_default": format!("https://img.test/sprites/{}.png", self.name),
                "other": {"official-artwork": artwork},
            },
        })
    }
}

/// A builder for `/pokemon-species/{name}` bodies.
pub struct TestSpeciesBuilder {
    name: String,
    color: String,
    flavor_texts: Vec<(String, String)>,
    chain_id: u32,
}

impl TestSpeciesBuilder {
    pub fn new(name: &str, chain_id: u32) -> Self {
        Self {
            name: name.to_string(),
            color: "white".to_string(),
            flavor_texts: Vec::new(),
            chain_id,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_flavor_text(mut self, language: &str, text: &str) -> Self {
        self.flavor_texts.push((language.to_string(), text.to_string()));
        self
    }

    pub fn build(self) -> Value {
        let entries: Vec<Value> = self
            .flavor_texts
            .iter()
            .map(|(language, text)| {
                json!({
                    "flavor_text": text,
                    "language": named("language", language),
                    "version": named("version", "red"),
                })
            })
            .collect();

        json!({
            "id": 1,
            "name": self.name,
            "color": named("pokemon-color", &self.color),
            "flavor_text_entries": entries,
            "evolution_chain": {"url": chain_url(self.chain_id)},
        })
    }
}

/// The Pikachu line with Spanish and English translations for everything the
/// detail page needs.
pub fn pikachu_transport() -> MockTransport {
    MockTransport::new()
        .with(
            &entry_url("pokemon", "pikachu"),
            TestEntryBuilder::new(25, "pikachu")
                .with_measurements(4, 60)
                .with_types(&["electric"])
                .with_abilities(&["static", "lightning-rod"])
                .with_stats(&[("hp", 35), ("attack", 55), ("speed", 90)])
                .with_moves(&["mega-punch", "pay-day", "thunder-punch", "slam", "thunder-shock"])
                .build(),
        )
        .with(
            &entry_url("pokemon-species", "pikachu"),
            TestSpeciesBuilder::new("pikachu", 10)
                .with_color("yellow")
                .with_flavor_text("en", "When several of\nthese POKéMON gather.")
                .with_flavor_text("es", "Cuando se reúnen\nvarios de estos\u{000C}POKéMON.")
                .build(),
        )
        .with(
            &resource_url("type", "electric"),
            localized("electric", &[("en", "Electric"), ("es", "Eléctrico")]),
        )
        .with(
            &resource_url("ability", "static"),
            localized("static", &[("en", "Static"), ("es", "Elec. Estática")]),
        )
        .with(
            &resource_url("pokemon-color", "yellow"),
            localized("yellow", &[("en", "Yellow"), ("es", "Amarillo")]),
        )
        .with(
            &resource_url("stat", "hp"),
            localized("hp", &[("en", "HP"), ("es", "PS")]),
        )
        .with(
            &resource_url("stat", "attack"),
            localized("attack", &[("en", "Attack"), ("es", "Ataque")]),
        )
        .with(
            &resource_url("stat", "speed"),
            localized("speed", &[("en", "Speed"), ("es", "Velocidad")]),
        )
        .with(&chain_url(10), linear_chain(10, &["pichu", "pikachu", "raichu"]))
        .with(
            &entry_url("pokemon", "pichu"),
            TestEntryBuilder::new(172, "pichu").build(),
        )
        .with(
            &entry_url("pokemon", "raichu"),
            TestEntryBuilder::new(26, "raichu").build(),
        )
}

pub fn test_config(language: &str) -> PokedexConfig {
    PokedexConfig {
        api_base_url: BASE_URL.to_string(),
        move_seed: Some(1),
        ..PokedexConfig::default()
    }
    .with_language(language)
}

pub fn test_gateway(transport: MockTransport) -> ResourceGateway<MockTransport> {
    ResourceGateway::new(transport, BASE_URL)
}

pub fn test_pokedex(transport: MockTransport, language: &str) -> Pokedex<MockTransport> {
    Pokedex::new(test_gateway(transport), &test_config(language))
}
