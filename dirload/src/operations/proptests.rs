//! Property-based tests for operations module.
//!
//! These tests focus on the plan-execute pattern: whatever the directory
//! holds, executing an autoload plan must leave the playlist in natural
//! order with the playing file in its place.

use super::autoload::{AutoloadOptions, AutoloadOutcome, AutoloadPlan, Capabilities};
use super::executor::PlanExecutor;
use super::plan::PlanAction;
use super::playlist::MemoryPlaylist;
use crate::config::Config;
use crate::error::Result;
use crate::media::{DirectoryLister, FileKind, FileProber, MimeClassifier, MimeType};
use crate::natsort;
use crate::path::Platform;
use proptest::prelude::*;
use std::collections::BTreeSet;

struct Listing(Vec<String>);

impl DirectoryLister for Listing {
    fn list_files(&self, _dir: &str) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

struct AlwaysFile;

impl FileProber for AlwaysFile {
    fn probe(&self, _path: &str) -> Option<FileKind> {
        Some(FileKind::File)
    }
}

struct PlainText;

impl MimeClassifier for PlainText {
    fn classify(&self, _path: &str, _ext: &str) -> Result<MimeType> {
        Ok(MimeType::new("text", "plain"))
    }
}

// Distinct media file names, mixing in digits so natural order matters
fn media_names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(
        ("[a-cA-C]{0,2}", 0u32..200, prop_oneof![Just(".mkv"), Just(".mp3")]).prop_map(
            |(stem, number, ext)| format!("{stem}{number}{ext}"),
        ),
        1..12,
    )
    .prop_map(|names: BTreeSet<String>| names.into_iter().collect())
}

fn plan_for(names: &[String], current: usize, config: &Config) -> AutoloadOutcome {
    let lister = Listing(names.to_vec());
    let capabilities = Capabilities {
        lister: &lister,
        prober: &AlwaysFile,
        classifier: &PlainText,
    };
    let options = AutoloadOptions::new(Some(format!("/media/{}", names[current])))
        .with_platform(Platform::Unix);
    AutoloadPlan::new(options, config)
        .build(&capabilities)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Executing the plan on a single-entry playlist yields the sorted directory
    #[test]
    fn executed_plan_matches_natural_order(
        names in media_names_strategy(),
        pick in any::<prop::sample::Index>(),
        case_sensitive in any::<bool>()
    ) {
        let current = pick.index(names.len());
        let config = Config { case_sensitive: Some(case_sensitive), ..Default::default() };
        let AutoloadOutcome::Planned(planned) = plan_for(&names, current, &config) else {
            return Err(TestCaseError::fail("expected a plan"));
        };

        let playing = format!("/media/{}", names[current]);
        prop_assert_eq!(&planned.entries[planned.current], &playing);

        let mut playlist = MemoryPlaylist::with_entries([playing]);
        PlanExecutor::new(&mut playlist).execute(&planned.plan).unwrap();
        prop_assert_eq!(playlist.entries(), planned.entries.as_slice());

        let expected = natsort::sorted(
            names.iter().map(|name| format!("/media/{name}")),
            case_sensitive,
        );
        prop_assert_eq!(planned.entries, expected);
    }

    // A plan appends every entry but the current one, then moves exactly once
    #[test]
    fn plan_shape(names in media_names_strategy(), pick in any::<prop::sample::Index>()) {
        let current = pick.index(names.len());
        let AutoloadOutcome::Planned(planned) = plan_for(&names, current, &Config::default()) else {
            return Err(TestCaseError::fail("expected a plan"));
        };

        let actions = &planned.plan.actions;
        prop_assert_eq!(actions.len(), names.len());
        let (last, appends) = actions.split_last().unwrap();
        prop_assert_eq!(last, &PlanAction::Move { from: 0, to: planned.current + 1 });
        for action in appends {
            let is_append = matches!(action, PlanAction::Append { .. });
            prop_assert!(is_append);
        }
    }

    // Dry runs report every action and never touch the playlist
    #[test]
    fn dry_run_is_inert(names in media_names_strategy(), pick in any::<prop::sample::Index>()) {
        let current = pick.index(names.len());
        let AutoloadOutcome::Planned(planned) = plan_for(&names, current, &Config::default()) else {
            return Err(TestCaseError::fail("expected a plan"));
        };

        let mut playlist = MemoryPlaylist::with_entries(["playing"]);
        let result = PlanExecutor::new(&mut playlist).dry_run().execute(&planned.plan).unwrap();
        prop_assert_eq!(result.actions_taken.len(), planned.plan.len());
        prop_assert_eq!(playlist.entries(), ["playing"]);
    }
}
