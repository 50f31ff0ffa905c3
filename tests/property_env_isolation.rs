// Property tests: variables outside the case-sensitive NVIDIAGPU_ namespace
// never change the bound config, whatever their names or values.

use nvidiagpu_config::{ConfigLoader, MapEnv, NullSink, NvidiaGpuConfig};
use proptest::prelude::*;

fn unrelated_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,24}"
        .prop_filter("must not carry the NVIDIAGPU_ prefix", |name| {
            !name.starts_with("NVIDIAGPU_")
        })
}

proptest! {
    #[test]
    fn prop_unrelated_vars_never_affect_result(
        instance_type in "[a-z0-9.\\-]{0,16}",
        catalog_source in "[a-z0-9\\-]{0,24}",
        noise in prop::collection::btree_map(unrelated_name(), ".{0,16}", 0..12),
    ) {
        let base = MapEnv::new()
            .with("NVIDIAGPU_INSTANCE_TYPE", instance_type.clone())
            .with("NVIDIAGPU_CATALOGSOURCE", catalog_source.clone());

        let noisy: MapEnv = noise
            .into_iter()
            .chain([
                ("NVIDIAGPU_INSTANCE_TYPE".to_string(), instance_type.clone()),
                ("NVIDIAGPU_CATALOGSOURCE".to_string(), catalog_source.clone()),
            ])
            .collect();

        let expected = Some(NvidiaGpuConfig::new(instance_type, catalog_source));
        prop_assert_eq!(ConfigLoader::load_from(&base, &NullSink).into_option(), expected.clone());
        prop_assert_eq!(ConfigLoader::load_from(&noisy, &NullSink).into_option(), expected);
    }

    #[test]
    fn prop_any_unicode_value_round_trips(value in "\\PC{0,32}") {
        let env = MapEnv::new().with("NVIDIAGPU_INSTANCE_TYPE", value.clone());
        let config = ConfigLoader::try_load_from(&env).unwrap();
        prop_assert_eq!(config.instance_type, value);
        prop_assert_eq!(config.catalog_source, "");
    }
}
