use crate::error::{CropfitError, Result};
use crate::types::config::CropfitConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "cropfit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".cropfit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/cropfit/config.toml";

/// Layers global, project, local and an explicit file (in that order) and
/// validates the result. Missing optional layers are skipped.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<CropfitConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<CropfitConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    if let Some(path) = global_path {
        layers += merge_file_if_exists(&mut merged, path)?;
    }
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CropfitError::ConfigNotFound(path.display().to_string()));
        }
        layers += merge_file_if_exists(&mut merged, path)?;
    }
    tracing::debug!(layers, "loaded configuration layers");

    let cfg: CropfitConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(1)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CropfitError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(cfg.default_count(), 5);
        assert!(cfg.include_builtin());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[output]
default_count = 3
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
default_count = 8

[[catalog.crops]]
name = "Finger Millet"
ideal_temperature = { min = 20, max = 30 }
ideal_rainfall = { min = 10, max = 25 }
ideal_humidity = { min = 40, max = 70 }
growth_period = { min = 90, max = 120 }
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".cropfit")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[output]
format = "md"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path), None)
            .expect("load should succeed");

        assert_eq!(cfg.default_count(), 8);
        assert_eq!(cfg.default_format(), Some("md"));
        assert_eq!(cfg.extra_crops().len(), 1);
    }

    #[test]
    fn explicit_file_is_layered_last() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[output]\ndefault_count = 8\n",
        )
        .expect("project config should write");
        let explicit = root.path().join("override.toml");
        fs::write(&explicit, "[output]\ndefault_count = 2\n").expect("override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&explicit))
            .expect("load should succeed");
        assert_eq!(cfg.default_count(), 2);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        let err = load_config_with_global(root.path(), None, Some(&root.path().join("nope.toml")))
            .expect_err("missing explicit config should fail");
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[output\n").expect("config should write");
        let err = load_config_with_global(root.path(), None, None).expect_err("parse should fail");
        assert!(err.to_string().contains("config parse error"));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn mistyped_value_reports_toml_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[output]\ndefault_count = \"five\"\n",
        )
        .expect("config should write");
        let err = load_config_with_global(root.path(), None, None)
            .expect_err("mistyped value should fail");
        assert!(matches!(err, CropfitError::Toml(_)));
        assert!(err.to_string().contains("toml parse error"));
    }

    #[test]
    fn merged_config_is_validated() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[output]\ndefault_count = 0\n",
        )
        .expect("config should write");
        let err = load_config_with_global(root.path(), None, None)
            .expect_err("validation should fail");
        assert!(err.to_string().contains("default_count must be greater than 0"));
    }
}
