// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Catalog generator: dimension tuples in, named rivets out.

use crate::error::Error;
use crate::part::Rivet;
use serde::{Deserialize, Serialize};

/// Batch generator producing a rivet catalog from raw dimension tuples.
///
/// Holds no mutable state: `generate` is a pure transformation and may be
/// called any number of times, each call yielding fresh instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    rivets_definition: Vec<[f64; 4]>,
    name: String,
}

impl Generator {
    /// Each definition is `[rivet_diameter, rivet_length, head_diameter,
    /// head_length]`.
    pub fn new(rivets_definition: Vec<[f64; 4]>, name: impl Into<String>) -> Self {
        Self {
            rivets_definition,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definitions(&self) -> &[[f64; 4]] {
        &self.rivets_definition
    }

    /// Produce one rivet per definition, in input order, named `rivet1`,
    /// `rivet2`, … Fails on the first definition with a non-positive
    /// dimension.
    pub fn generate(&self) -> Result<Vec<Rivet>, Error> {
        self.rivets_definition
            .iter()
            .enumerate()
            .map(|(i, definition)| Rivet::from_definition(*definition, format!("rivet{}", i + 1)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_definitions() -> Vec<[f64; 4]> {
        vec![[0.01, 0.05, 0.012, 0.005], [0.012, 0.05, 0.013, 0.0055]]
    }

    #[test]
    fn test_generate_names_in_input_order() {
        let generator = Generator::new(sample_definitions(), "first_generator");
        let rivets = generator.generate().unwrap();
        assert_eq!(rivets.len(), 2);
        assert_eq!(rivets[0].name(), "rivet1");
        assert_eq!(rivets[1].name(), "rivet2");
        assert_eq!(rivets[0].rivet_diameter(), 0.01);
        assert_eq!(rivets[1].rivet_diameter(), 0.012);
    }

    #[test]
    fn test_generate_is_repeatable() {
        let generator = Generator::new(sample_definitions(), "");
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_definitions_yield_empty_catalog() {
        let generator = Generator::new(Vec::new(), "empty");
        assert!(generator.generate().unwrap().is_empty());
    }

    #[test]
    fn test_bad_definition_fails_generation() {
        let generator = Generator::new(vec![[0.01, 0.05, 0.012, 0.005], [0.0, 0.05, 0.012, 0.005]], "");
        assert!(generator.generate().is_err());
    }
}
