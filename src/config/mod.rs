pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const OUTPUT_EXTENSION: &str = ".json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "airdrop-manifest", version)]
#[command(about = "Convert a wallet,tokens CSV into an 18-decimal JSON airdrop manifest")]
pub struct CliConfig {
    /// CSV file with a header row containing `wallet` and `tokens`
    pub input_path: String,

    /// Output path prefix; the manifest is written to <OUTPUT_PREFIX>.json
    pub output_prefix: String,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn new(input_path: impl Into<String>, output_prefix: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_prefix: output_prefix.into(),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> String {
        format!("{}{}", self.output_prefix, OUTPUT_EXTENSION)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_prefix", &self.output_prefix)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_appends_suffix() {
        let config = CliConfig::new("tokens.csv", "out/airdrop");
        assert_eq!(config.output_path(), "out/airdrop.json");

        // 前綴已含 .json 時仍照字面附加
        let config = CliConfig::new("tokens.csv", "airdrop.json");
        assert_eq!(config.output_path(), "airdrop.json.json");
    }

    #[test]
    fn test_parse_positional_args() {
        let config = CliConfig::try_parse_from(["airdrop-manifest", "in.csv", "out"]).unwrap();
        assert_eq!(config.input_path, "in.csv");
        assert_eq!(config.output_prefix, "out");

        assert!(CliConfig::try_parse_from(["airdrop-manifest", "in.csv"]).is_err());
        assert!(CliConfig::try_parse_from(["airdrop-manifest", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(CliConfig::new("in.csv", "out").validate().is_ok());
        assert!(CliConfig::new("", "out").validate().is_err());
        assert!(CliConfig::new("in.csv", "").validate().is_err());
    }
}
