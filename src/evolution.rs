use crate::errors::{MalformedDataError, PokedexResult};
use crate::gateway::{ResourceGateway, Transport};
use crate::view::EvolutionStage;
use schema::{EvolutionChain, EvolutionNode};
use tracing::debug;

/// Fetch the chain behind `url` and walk it.
pub async fn fetch_and_walk<T: Transport>(
    gateway: &ResourceGateway<T>,
    url: &str,
) -> PokedexResult<Vec<EvolutionStage>> {
    let chain: EvolutionChain = gateway.fetch_resource(url).await?;
    walk(gateway, &chain.chain).await
}

/// Walk the primary branch of an evolution chain, base form first.
///
/// Each stage needs its own detail fetch for the artwork, and the next node is
/// only known once the current one is read, so the walk is strictly sequential.
/// Sibling branches (`evolves_to[1..]`) are not visited.
pub async fn walk<T: Transport>(
    gateway: &ResourceGateway<T>,
    root: &EvolutionNode,
) -> PokedexResult<Vec<EvolutionStage>> {
    let mut stages = Vec::new();
    let mut current = Some(root);

    while let Some(node) = current {
        let name = &node.species.name;
        let detail = gateway.fetch_entry_detail(name).await?;
        let image = detail
            .artwork()
            .ok_or_else(|| MalformedDataError::MissingField(format!("official artwork for {}", name)))?;

        debug!(stage = stages.len(), species = %name, "evolution stage resolved");
        stages.push(EvolutionStage {
            name: name.clone(),
            image: image.to_string(),
        });

        current = node.primary_successor();
    }

    Ok(stages)
}
