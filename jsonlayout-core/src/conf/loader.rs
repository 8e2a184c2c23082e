use crate::conf::{ConfigError, LayoutsConfig};
use std::fs;
use std::path::Path;

/// Reads and parses a layout file. Semantic checks happen when layouts are built.
pub fn load_layouts(path: &Path) -> Result<LayoutsConfig, ConfigError> {
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_layouts(&src, path)
}

pub fn parse_layouts(src: &str, path: &Path) -> Result<LayoutsConfig, ConfigError> {
    let cfg: LayoutsConfig = hcl::from_str(src).map_err(|e| ConfigError::parse(path, e))?;

    if cfg.event_layout.is_none() && cfg.access_layout.is_none() {
        return Err(ConfigError::NoLayouts {
            path: path.to_path_buf(),
        });
    }

    Ok(cfg)
}
