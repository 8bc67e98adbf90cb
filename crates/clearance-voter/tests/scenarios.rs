//! End-to-end voting scenarios for the security-level voter

use clearance_voter::{Identity, ResourceAttribute, SecurityLevelVoter, Vote, VoterConfig};
use std::io::Write;

const SECURITY_LEVEL_1: &str = "SECURITY_LEVEL_1";
const SECURITY_LEVEL_2: &str = "SECURITY_LEVEL_2";
const SECURITY_LEVEL_NOT_A_NUMBER: &str = "SECURITY_LEVEL_NOT_A_NUMBER";
const OTHER_CONFIG_ATTRIBUTE: &str = "OTHER_CONFIG_ATTRIBUTE";

fn vote(requester: &Identity, label: &str) -> Vote {
    SecurityLevelVoter::new().vote(requester, &[ResourceAttribute::new(label)])
}

#[test]
fn grants_when_clearance_meets_requirement() {
    assert_eq!(vote(&Identity::known("1"), SECURITY_LEVEL_1), Vote::Grant);
}

#[test]
fn denies_when_clearance_below_requirement() {
    assert_eq!(vote(&Identity::known("1"), SECURITY_LEVEL_2), Vote::Deny);
}

#[test]
fn abstains_without_security_level_attribute() {
    assert_eq!(vote(&Identity::Other, OTHER_CONFIG_ATTRIBUTE), Vote::Abstain);
    assert_eq!(vote(&Identity::known("9"), OTHER_CONFIG_ATTRIBUTE), Vote::Abstain);
}

#[test]
fn denies_unrecognized_identity() {
    assert_eq!(vote(&Identity::Other, SECURITY_LEVEL_1), Vote::Deny);
}

#[test]
fn denies_non_numeric_clearance() {
    assert_eq!(vote(&Identity::known("NOT A NUMBER"), SECURITY_LEVEL_2), Vote::Deny);
}

#[test]
fn denies_non_numeric_requirement() {
    assert_eq!(vote(&Identity::known("1"), SECURITY_LEVEL_NOT_A_NUMBER), Vote::Deny);
}

#[test]
fn custom_prefix_recognizes_its_own_attributes() {
    let voter = SecurityLevelVoter::with_prefix("SL_");
    let attributes = [ResourceAttribute::new("SL_1")];

    assert!(voter.supports(&attributes[0]));
    assert_eq!(voter.vote(&Identity::known("1"), &attributes), Vote::Grant);
}

#[test]
fn denies_when_both_levels_are_malformed() {
    assert_eq!(
        vote(&Identity::known("NOT A NUMBER"), SECURITY_LEVEL_NOT_A_NUMBER),
        Vote::Deny
    );
}

#[test]
fn voter_built_from_config_file() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(err) => panic!("temp file: {err}"),
    };
    if let Err(err) = writeln!(file, "prefix = \"CLEARANCE_\"") {
        panic!("write config: {err}");
    }

    let config = match VoterConfig::load_from_file(file.path()) {
        Ok(config) => config,
        Err(err) => panic!("load config: {err}"),
    };
    let voter = SecurityLevelVoter::from_config(&config);

    let attributes = [
        ResourceAttribute::new(SECURITY_LEVEL_1),
        ResourceAttribute::new("CLEARANCE_3"),
    ];
    assert_eq!(voter.vote(&Identity::known("3"), &attributes), Vote::Grant);
    assert_eq!(voter.vote(&Identity::known("2"), &attributes), Vote::Deny);
}

#[test]
fn vote_serializes_as_snake_case() {
    match serde_json::to_string(&Vote::Abstain) {
        Ok(json) => assert_eq!(json, "\"abstain\""),
        Err(err) => panic!("serialize vote: {err}"),
    }
}
