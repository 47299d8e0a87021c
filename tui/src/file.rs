//! Reading configuration files and maps.

use clap::{
    error::{ErrorKind, Result as ClapResult},
    Error,
};
use rautomata_lib::Config;
use std::{fs, path::Path};

/// Formats of configuration files, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

fn read(path: &Path) -> ClapResult<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("cannot read {}: {}\n", path.display(), e),
        )
    })
}

fn parse_config(text: &str, format: Format) -> Result<Config, String> {
    match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
    }
}

/// Reads a configuration from a `.json`, `.yaml` or `.toml` file.
pub(crate) fn read_config(path: &Path) -> ClapResult<Config> {
    let format = Format::from_path(path).ok_or_else(|| {
        Error::raw(
            ErrorKind::InvalidValue,
            "the configuration file should end with .json, .yaml, .yml or .toml\n",
        )
    })?;
    let text = read(path)?;
    parse_config(&text, format).map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid configuration in {}: {}\n", path.display(), e),
        )
    })
}

/// Reads an initial grid in plaintext.
pub(crate) fn read_map(path: &Path) -> ClapResult<String> {
    read(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rautomata_lib::{AutomatonKind, Boundary, Init, Pattern};

    #[test]
    fn formats() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("b/c.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("d.toml")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("e.txt")), None);
        assert_eq!(Format::from_path(Path::new("json")), None);
    }

    #[test]
    fn toml_config() -> Result<(), String> {
        let config = parse_config(
            r#"
            width = 32
            height = 24
            boundary = "reflecting"
            steps_per_rule = 10
            init = { pattern = "toad" }
            automaton = { life = { rules = ["40", "190"] } }
            "#,
            Format::Toml,
        )?;
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 24);
        assert_eq!(config.boundary, Some(Boundary::Reflecting));
        assert_eq!(config.steps_per_rule, 10);
        assert_eq!(config.init, Init::Pattern(Pattern::Toad));
        assert_eq!(
            config.automaton,
            AutomatonKind::Life {
                rules: vec![String::from("40"), String::from("190")]
            }
        );
        assert_eq!(config.seed, None);
        Ok(())
    }

    #[test]
    fn yaml_config() -> Result<(), String> {
        let config = parse_config(
            "width: 100\nheight: 1\nboundary: periodic\nseed: 7\n",
            Format::Yaml,
        )?;
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 1);
        assert_eq!(config.boundary, Some(Boundary::Periodic));
        assert_eq!(config.seed, Some(7));
        Ok(())
    }

    #[test]
    fn json_errors() {
        assert!(parse_config(r#"{ "width": "wide" }"#, Format::Json).is_err());
    }
}
