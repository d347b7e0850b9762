//! Search space configuration
//!
//! Deserialized from YAML. Axes are ordered sequences of candidate values;
//! per-search scalars (iteration budget, batch size, epoch count) and the
//! data-split section ride alongside. Validation runs before any data is
//! loaded so a broken config never costs a corpus parse.
//!
//! ```yaml
//! hyper_params:
//!   learning_rates: [0.01, 0.1]
//!   margins: [1.0, 2.0]
//!   embedding_dims: [50, 100]
//!   model_families: [trans_e, dist_mult]
//!   max_iters: 10
//!   batch_size: 64
//!   num_epochs: 100
//! data_params:
//!   ratio_test_data: 0.2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ModelFamily;

/// Complete search specification: hyperparameter space plus data split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub hyper_params: SearchSpace,
    pub data_params: DataParams,
}

/// Discrete hyperparameter axes and fixed per-search scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSpace {
    /// Learning-rate axis.
    pub learning_rates: Vec<f64>,
    /// Margin axis for the ranking loss.
    pub margins: Vec<f32>,
    /// Embedding-dimension axis.
    pub embedding_dims: Vec<usize>,
    /// Model-family axis.
    pub model_families: Vec<ModelFamily>,
    /// Iteration budget: number of trials to run.
    pub max_iters: usize,
    /// Mini-batch size used by every trial.
    pub batch_size: usize,
    /// Epoch count used by every trial.
    pub num_epochs: usize,
}

/// Data-split section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataParams {
    /// Fraction of the corpus held out for evaluation, strictly in (0, 1).
    pub ratio_test_data: f64,
    /// Lines starting with this prefix are skipped when parsing the corpus.
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

fn default_comment_prefix() -> String {
    "@Comment@".to_string()
}

impl SearchConfig {
    /// Parse a YAML config string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load and parse a YAML config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reject empty axes, a zero budget, and out-of-range split ratios.
    pub fn validate(&self) -> Result<()> {
        let space = &self.hyper_params;
        for (axis, len) in [
            ("learning_rates", space.learning_rates.len()),
            ("margins", space.margins.len()),
            ("embedding_dims", space.embedding_dims.len()),
            ("model_families", space.model_families.len()),
        ] {
            if len == 0 {
                return Err(Error::Config(format!("{axis} axis is empty")));
            }
        }

        if space.max_iters == 0 {
            return Err(Error::Config("max_iters must be > 0".to_string()));
        }
        if space.batch_size == 0 {
            return Err(Error::Config("batch_size must be > 0".to_string()));
        }
        if space.num_epochs == 0 {
            return Err(Error::Config("num_epochs must be > 0".to_string()));
        }

        let ratio = self.data_params.ratio_test_data;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(Error::Config(format!(
                "ratio_test_data must be in (0, 1), got {ratio}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
hyper_params:
  learning_rates: [0.01, 0.1]
  margins: [1.0, 2.0]
  embedding_dims: [50]
  model_families: [trans_e, dist_mult]
  max_iters: 5
  batch_size: 32
  num_epochs: 20
data_params:
  ratio_test_data: 0.2
"#
    }

    #[test]
    fn test_parse_valid_config() {
        let config = SearchConfig::from_yaml_str(sample_yaml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.hyper_params.learning_rates, vec![0.01, 0.1]);
        assert_eq!(
            config.hyper_params.model_families,
            vec![ModelFamily::TransE, ModelFamily::DistMult]
        );
        assert_eq!(config.hyper_params.max_iters, 5);
        assert_eq!(config.data_params.ratio_test_data, 0.2);
        assert_eq!(config.data_params.comment_prefix, "@Comment@");
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let yaml = "hyper_params:\n  learning_rates: [0.1]\n";
        assert!(matches!(
            SearchConfig::from_yaml_str(yaml),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_unknown_field_is_config_error() {
        let yaml = format!("{}\nextra_section: 1\n", sample_yaml().trim_end());
        assert!(matches!(
            SearchConfig::from_yaml_str(&yaml),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_empty_axis_fails_validation() {
        let mut config = SearchConfig::from_yaml_str(sample_yaml()).unwrap();
        config.hyper_params.learning_rates.clear();
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("learning_rates"));
    }

    #[test]
    fn test_zero_budget_fails_validation() {
        let mut config = SearchConfig::from_yaml_str(sample_yaml()).unwrap();
        config.hyper_params.max_iters = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_ratio_fails_validation() {
        for ratio in [0.0, 1.0, -0.1, 2.0] {
            let mut config = SearchConfig::from_yaml_str(sample_yaml()).unwrap();
            config.data_params.ratio_test_data = ratio;
            assert!(matches!(config.validate(), Err(Error::Config(_))));
        }
    }

    #[test]
    fn test_custom_comment_prefix() {
        let yaml = sample_yaml().replace(
            "ratio_test_data: 0.2",
            "ratio_test_data: 0.2\n  comment_prefix: \"#\"",
        );
        let config = SearchConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(config.data_params.comment_prefix, "#");
    }
}
