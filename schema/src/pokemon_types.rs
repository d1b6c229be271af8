use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Parse the untranslated type name the API uses (e.g. "grass").
    pub fn from_api_name(name: &str) -> Option<PokemonType> {
        name.trim().parse().ok()
    }

    /// The API's own spelling of this type.
    pub fn api_name(self) -> &'static str {
        self.into()
    }

    /// Saturated color for type tags.
    pub fn tag_color(self) -> &'static str {
        use PokemonType::*;

        match self {
            Normal => "#A8A77A",
            Fire => "#EE8130",
            Water => "#6390F0",
            Electric => "#F7D02C",
            Grass => "#7AC74C",
            Ice => "#96D9D6",
            Fighting => "#C22E28",
            Poison => "#A33EA1",
            Ground => "#E2BF65",
            Flying => "#A98FF3",
            Psychic => "#F95587",
            Bug => "#A6B91A",
            Rock => "#B6A136",
            Ghost => "#735797",
            Dragon => "#6F35FC",
            Dark => "#705746",
            Steel => "#B7B7CE",
            Fairy => "#D685AD",
        }
    }

    /// Pastel color for card backgrounds, keyed by the primary type.
    pub fn background_color(self) -> &'static str {
        use PokemonType::*;

        match self {
            Normal => "#E0E0E0",
            Fire => "#FFDDC1",
            Water => "#D6EFFF",
            Electric => "#FFFACD",
            Grass => "#D9EAD3",
            Ice => "#E0FFFF",
            Fighting => "#E19794",
            Poison => "#E8D5FF",
            Ground => "#F4E7DA",
            Flying => "#E6E6FA",
            Psychic => "#FFE5F1",
            Bug => "#E2F0D9",
            Rock => "#EFEBE9",
            Ghost => "#E1D4E7",
            Dragon => "#D2E6FF",
            Dark => "#D6D5D4",
            Steel => "#E2E2E2",
            Fairy => "#FFF0F5",
        }
    }
}
