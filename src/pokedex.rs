//! The aggregation pipeline: one identifier in, one localized view model out.

use schema::{EntryDetail, LocalizedResource, SpeciesInfo};
use tracing::{debug, info};

use crate::batch::{fan_in, fan_in_pair};
use crate::config::PokedexConfig;
use crate::errors::{MalformedDataError, PokedexResult};
use crate::evolution;
use crate::gateway::{HttpTransport, ResourceGateway, Transport};
use crate::localization::{resolve_description, resolve_name, NOT_AVAILABLE};
use crate::moves::MoveSampler;
use crate::view::{LocalizedParts, PokemonView, StatLabel, TypeLabel};

/// What a secondary fetch is for, so its result can be routed after the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Type(usize),
    Ability,
    Color,
    Stat(usize),
}

pub struct Pokedex<T> {
    gateway: ResourceGateway<T>,
    language: String,
    sampler: MoveSampler,
}

impl Pokedex<HttpTransport> {
    pub fn from_config(config: &PokedexConfig) -> PokedexResult<Self> {
        Ok(Self::new(ResourceGateway::from_config(config)?, config))
    }
}

impl<T: Transport> Pokedex<T> {
    pub fn new(gateway: ResourceGateway<T>, config: &PokedexConfig) -> Self {
        let sampler = match config.move_seed {
            Some(seed) => MoveSampler::seeded(config.move_sample_size, seed),
            None => MoveSampler::new(config.move_sample_size),
        };

        Self {
            gateway,
            language: config.language.clone(),
            sampler,
        }
    }

    pub fn gateway(&self) -> &ResourceGateway<T> {
        &self.gateway
    }

    /// Build the full view model for `identifier`.
    ///
    /// Every remote read is required: the first failure aborts the call and no
    /// partial view is produced. Nothing is cached between calls.
    pub async fn aggregate(&self, identifier: &str) -> PokedexResult<PokemonView> {
        info!(identifier, language = %self.language, "aggregating entry");

        let (detail, species) = fan_in_pair(
            self.gateway.fetch_entry_detail(identifier),
            self.gateway.fetch_entry_species(identifier),
        )
        .await?;

        let localized = self.localize(&detail, &species).await?;
        let moves = self.sampler.sample(detail.move_names());
        let evolutions =
            evolution::fetch_and_walk(&self.gateway, &species.evolution_chain.url).await?;

        PokemonView::assemble(&detail, localized, moves, evolutions)
    }

    /// Fetch every localized resource the detail and species point at as one
    /// batch, then resolve each to the target language.
    async fn localize(
        &self,
        detail: &EntryDetail,
        species: &SpeciesInfo,
    ) -> PokedexResult<LocalizedParts> {
        let ability = detail
            .abilities
            .first()
            .ok_or_else(|| MalformedDataError::MissingField(format!("abilities of {}", detail.name)))?;

        let mut lookups: Vec<(Lookup, &str)> = Vec::new();
        for (i, slot) in detail.types.iter().enumerate() {
            lookups.push((Lookup::Type(i), slot.type_.url.as_str()));
        }
        lookups.push((Lookup::Ability, ability.ability.url.as_str()));
        lookups.push((Lookup::Color, species.color.url.as_str()));
        for (i, stat) in detail.stats.iter().enumerate() {
            lookups.push((Lookup::Stat(i), stat.stat.url.as_str()));
        }

        let resources: Vec<LocalizedResource> = fan_in(
            lookups
                .iter()
                .map(|(_, url)| self.gateway.fetch_resource::<LocalizedResource>(url)),
        )
        .await?;

        let mut parts = LocalizedParts {
            ability: NOT_AVAILABLE.to_string(),
            color: NOT_AVAILABLE.to_string(),
            ..LocalizedParts::default()
        };

        for ((lookup, _), resource) in lookups.iter().zip(resources) {
            let translated = resolve_name(&resource.names, &self.language);
            if translated == NOT_AVAILABLE {
                debug!(resource = %resource.name, language = %self.language, "no translation");
            }

            match *lookup {
                Lookup::Type(i) => parts.types.push(TypeLabel {
                    name: translated,
                    original_name: detail.types[i].type_.name.clone(),
                }),
                Lookup::Ability => parts.ability = translated,
                Lookup::Color => parts.color = translated,
                Lookup::Stat(i) => parts.stats.push(StatLabel {
                    name: translated,
                    value: detail.stats[i].base_stat,
                }),
            }
        }

        parts.description = resolve_description(&species.flavor_text_entries, &self.language);
        Ok(parts)
    }
}
