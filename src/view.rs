//! The rendering-ready aggregate for one entry and the step that assembles it.

use crate::errors::{MalformedDataError, PokedexResult};
use schema::{EntryDetail, PokemonType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type tag: translated label plus the API's own name for color lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLabel {
    pub name: String,
    pub original_name: String,
}

impl TypeLabel {
    pub fn kind(&self) -> Option<PokemonType> {
        PokemonType::from_api_name(&self.original_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLabel {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub name: String,
    pub image: String,
}

/// Everything a detail page shows for one entry, already in the target language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonView {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub shiny_image: Option<String>,
    pub types: Vec<TypeLabel>,
    pub description: String,
    pub height: f64, // meters
    pub weight: f64, // kilograms
    pub ability: String,
    pub color: String,
    pub stats: Vec<StatLabel>,
    pub moves: Vec<String>,
    pub evolutions: Vec<EvolutionStage>,
}

/// Localized strings produced by the secondary fetch batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedParts {
    pub types: Vec<TypeLabel>,
    pub ability: String,
    pub color: String,
    pub stats: Vec<StatLabel>,
    pub description: String,
}

impl PokemonView {
    /// Merge the raw detail with the already-resolved pieces.
    pub fn assemble(
        detail: &EntryDetail,
        localized: LocalizedParts,
        moves: Vec<String>,
        evolutions: Vec<EvolutionStage>,
    ) -> PokedexResult<PokemonView> {
        let image = detail.artwork().ok_or_else(|| {
            MalformedDataError::MissingField(format!("official artwork for {}", detail.name))
        })?;

        Ok(PokemonView {
            id: detail.id,
            name: detail.name.to_uppercase(),
            image: image.to_string(),
            shiny_image: detail.shiny_artwork().map(str::to_string),
            types: localized.types,
            description: localized.description,
            height: detail.height as f64 / 10.0,
            weight: detail.weight as f64 / 10.0,
            ability: localized.ability,
            color: localized.color,
            stats: localized.stats,
            moves,
            evolutions,
        })
    }

    /// The primary type, used for the card background.
    pub fn primary_type(&self) -> Option<PokemonType> {
        self.types.first().and_then(TypeLabel::kind)
    }

    pub fn to_json(&self) -> PokedexResult<String> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| MalformedDataError::Unencodable(e.to_string()))?;
        Ok(text)
    }
}

impl fmt::Display for PokemonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{:03})", self.name, self.id)?;
        writeln!(f, "--------------------")?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "--------------------")?;

        let type_names: Vec<String> = self
            .types
            .iter()
            .map(|t| match t.kind() {
                Some(kind) => format!("{} [{}]", t.name, kind.tag_color()),
                None => t.name.clone(),
            })
            .collect();
        writeln!(f, "Type(s): {}", type_names.join(" / "))?;
        if let Some(primary) = self.primary_type() {
            writeln!(f, "Card color: {}", primary.background_color())?;
        }

        const LABEL_WIDTH: usize = 16;
        writeln!(f, "{:<LABEL_WIDTH$} : {:.1} m", "Height", self.height)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {:.1} kg", "Weight", self.weight)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Ability", self.ability)?;
        writeln!(f, "{:<LABEL_WIDTH$} : {}", "Color", self.color)?;
        writeln!(f, "--------------------")?;

        for stat in &self.stats {
            writeln!(f, "{:<LABEL_WIDTH$} : {}", stat.name, stat.value)?;
        }
        writeln!(f, "--------------------")?;

        writeln!(f, "Moves: {}", self.moves.join(", "))?;
        let line: Vec<&str> = self.evolutions.iter().map(|e| e.name.as_str()).collect();
        write!(f, "Evolution: {}", line.join(" -> "))
    }
}
