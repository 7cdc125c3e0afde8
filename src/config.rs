use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for `mst-gen`, read from a TOML file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_weight_min")]
    pub weight_min: u32,
    #[serde(default = "default_weight_max")]
    pub weight_max: u32,
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

/// `count` graphs with `min_vertices..=max_vertices` vertices and about
/// `density * V` edges each.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CategoryConfig {
    pub name: String,
    pub count: usize,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub density: f64,
}

impl CategoryConfig {
    fn new(
        name: &str,
        count: usize,
        min_vertices: usize,
        max_vertices: usize,
        density: f64,
    ) -> Self {
        Self {
            name: name.to_owned(),
            count,
            min_vertices,
            max_vertices,
            density,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            weight_min: default_weight_min(),
            weight_max: default_weight_max(),
            categories: default_categories(),
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no generator config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: GeneratorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.weight_min <= self.weight_max,
            "weight_min {} exceeds weight_max {}",
            self.weight_min,
            self.weight_max
        );
        for category in &self.categories {
            ensure!(
                category.min_vertices <= category.max_vertices,
                "category `{}`: min_vertices {} exceeds max_vertices {}",
                category.name,
                category.min_vertices,
                category.max_vertices
            );
            ensure!(
                category.density.is_finite() && category.density >= 0.0,
                "category `{}`: density must be a non-negative number",
                category.name
            );
        }
        Ok(())
    }
}

fn default_seed() -> u64 {
    42
}

fn default_weight_min() -> u32 {
    1
}

fn default_weight_max() -> u32 {
    100
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("Small", 5, 10, 30, 2.0),
        CategoryConfig::new("Medium", 10, 50, 300, 1.5),
        CategoryConfig::new("Large", 10, 400, 1000, 1.2),
        CategoryConfig::new("Extra", 5, 1300, 2000, 1.0),
    ]
}
