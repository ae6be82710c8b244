//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn extension_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,5}".prop_map(|suffix| format!(".{suffix}"))
}

fn extensions_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(extension_strategy(), 0..5))
}

fn mime_types_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec("[a-z]{1,12}", 0..4))
}

// Strategy for generating valid configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        extensions_strategy(),
        extensions_strategy(),
        mime_types_strategy(),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(common_video, common_audio, allowed_mime_types, ignore_hidden, case_sensitive)| {
                Config {
                    common_video,
                    common_audio,
                    allowed_mime_types,
                    ignore_hidden,
                    case_sensitive,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every field takes the higher-precedence value when it is set
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.common_video, high.common_video.or(low.common_video));
        prop_assert_eq!(result.common_audio, high.common_audio.or(low.common_audio));
        prop_assert_eq!(
            result.allowed_mime_types,
            high.allowed_mime_types.or(low.allowed_mime_types)
        );
        prop_assert_eq!(result.ignore_hidden, high.ignore_hidden.or(low.ignore_hidden));
        prop_assert_eq!(result.case_sensitive, high.case_sensitive.or(low.case_sensitive));
    }

    // Empty config is identity element for merge, on either side
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(&from_empty, &config);
    }

    // Merging is associative
    #[test]
    fn config_merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy()
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut right = a;
        let mut b_merge_c = b;
        ConfigMerger::merge_into(&mut b_merge_c, &c);
        ConfigMerger::merge_into(&mut right, &b_merge_c);

        prop_assert_eq!(left, right);
    }

    // Merging valid configs never produces an invalid one
    #[test]
    fn valid_configs_stay_valid_after_merge(a in config_strategy(), b in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&a).is_ok());
        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // Configured media extensions are exactly video plus audio
    #[test]
    fn media_extensions_is_union(config in config_strategy()) {
        let extensions = config.media_extensions();
        if let Some(ref video) = config.common_video {
            for ext in video {
                prop_assert!(extensions.contains(ext));
            }
        }
        if let Some(ref audio) = config.common_audio {
            for ext in audio {
                prop_assert!(extensions.contains(ext));
            }
        }
        if let (Some(video), Some(audio)) = (&config.common_video, &config.common_audio) {
            prop_assert!(extensions.iter().all(|e| video.contains(e) || audio.contains(e)));
        }
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
