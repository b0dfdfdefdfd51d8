//! Named construction recipes a [`Director`](super::Director) can run.
//!
//! Each recipe is a fixed, ordered list of [`PartKind`] steps. Running a recipe
//! issues exactly those steps against the attached builder, nothing more.

use super::error::RecipeParseError;
use crate::model::PartKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard product configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recipe {
    /// Only part A.
    #[serde(rename = "minimal")]
    MinimalViable,
    /// Parts A, B and C, in that order.
    #[serde(rename = "full")]
    FullFeatured,
}

impl Recipe {
    /// The steps this recipe issues, in order.
    pub const fn steps(self) -> &'static [PartKind] {
        match self {
            Recipe::MinimalViable => &[PartKind::A],
            Recipe::FullFeatured => &[PartKind::A, PartKind::B, PartKind::C],
        }
    }

    /// Short name used by [`FromStr`] and [`Display`](fmt::Display).
    pub const fn name(self) -> &'static str {
        match self {
            Recipe::MinimalViable => "minimal",
            Recipe::FullFeatured => "full",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = RecipeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Recipe::MinimalViable),
            "full" => Ok(Recipe::FullFeatured),
            other => Err(RecipeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_steps_are_fixed() {
        assert_eq!(Recipe::MinimalViable.steps(), &[PartKind::A]);
        assert_eq!(
            Recipe::FullFeatured.steps(),
            &[PartKind::A, PartKind::B, PartKind::C]
        );
    }

    #[test]
    fn test_recipe_names_parse_back() {
        for recipe in [Recipe::MinimalViable, Recipe::FullFeatured] {
            assert_eq!(recipe.to_string().parse::<Recipe>(), Ok(recipe));
        }
        assert_eq!(" Full ".parse::<Recipe>(), Ok(Recipe::FullFeatured));
    }

    #[test]
    fn test_recipe_json_uses_recipe_names() {
        for recipe in [Recipe::MinimalViable, Recipe::FullFeatured] {
            let json = serde_json::to_string(&recipe).unwrap();
            assert_eq!(json, format!("\"{}\"", recipe));
            assert_eq!(serde_json::from_str::<Recipe>(&json).unwrap(), recipe);
        }
        assert_eq!(
            serde_json::from_str::<Recipe>("\"minimal\"").unwrap(),
            Recipe::MinimalViable
        );
        assert!(serde_json::from_str::<Recipe>("\"minimal_viable\"").is_err());
    }

    #[test]
    fn test_unknown_recipe_is_rejected() {
        let err = "deluxe".parse::<Recipe>().unwrap_err();
        assert_eq!(err, RecipeParseError("deluxe".to_string()));
    }
}
