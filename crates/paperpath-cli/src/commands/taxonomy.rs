use anyhow::Result;
use paperpath_router::config::TaxonomyConfig;
use paperpath_router::Config;
use std::collections::BTreeMap;

pub fn execute(config: &Config) -> Result<()> {
    let taxonomy = config.taxonomy()?;
    let dump = BTreeMap::from([("taxonomy", TaxonomyConfig::from_taxonomy(&taxonomy))]);

    print!("{}", toml::to_string_pretty(&dump)?);

    Ok(())
}
