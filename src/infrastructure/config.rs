use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub endpoints: EndpointSettings,
}

/// Where the precomputed summary files live; the base URL is the root the
/// per-identifier summary files hang off.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointSettings {
    pub archive_totals_url: String,
    pub all_dataset_totals_url: String,
    pub region_coordinates_url: String,
    pub summaries_base_url: String,
}

pub fn load_endpoint_config(path: &str) -> anyhow::Result<EndpointConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_config_deserializes() {
        let raw = r#"
            [endpoints]
            archive_totals_url = "https://summaries.example.org/archive_totals.json"
            all_dataset_totals_url = "https://summaries.example.org/all_dataset_totals.json"
            region_coordinates_url = "https://summaries.example.org/region_codes_to_coordinates.json"
            summaries_base_url = "https://summaries.example.org/"
        "#;

        let settings = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap();
        let parsed: EndpointConfig = settings.try_deserialize().unwrap();

        assert_eq!(
            parsed.endpoints.summaries_base_url,
            "https://summaries.example.org/"
        );
        assert!(parsed.endpoints.archive_totals_url.ends_with("archive_totals.json"));
    }
}
