//! Library integration tests.

use extcheck::environment::{EnvironmentSnapshot, StaticProvider};
use extcheck::requirements::{
    reconcile, required_extensions, AliasTable, CapabilityChecker, RequiredCapability,
    VersionRange,
};
use extcheck::ExtcheckError;

#[test]
fn error_types_are_public() {
    let err = ExtcheckError::ProbeFailed {
        message: "unexpected output".into(),
    };
    assert!(err.to_string().contains("unexpected output"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> extcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use extcheck::cli::{Cli, Commands};

    let cli = Cli::parse_from(["extcheck", "driver", "--uri", "mongodb://db:27017"]);
    if let Some(Commands::Driver(args)) = cli.command {
        assert_eq!(args.uri.as_deref(), Some("mongodb://db:27017"));
    } else {
        panic!("Expected Driver command");
    }
}

#[test]
fn reconciliation_partitions_required_list_in_order() {
    let snapshot = EnvironmentSnapshot::new(
        "8.3.4",
        80304,
        vec!["CURL".to_string(), "Zend OPcache".to_string()],
    );
    let required = vec![
        RequiredCapability::from("curl"),
        RequiredCapability::from("redis"),
        RequiredCapability::from("opcache"),
        RequiredCapability::when("imap", VersionRange::minor_series(8, 3)),
    ];

    let result = reconcile(&required, &snapshot, &AliasTable::builtin());

    assert_eq!(result.required(), vec!["curl", "redis", "opcache", "imap"]);
    assert_eq!(result.found(), vec!["curl", "opcache"]);
    assert_eq!(result.missing(), vec!["redis", "imap"]);
    assert_eq!(result.found_count() + result.missing_count(), result.required_count());
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn reconciliation_is_deterministic() {
    let snapshot = EnvironmentSnapshot::new("8.4.0", 80400, vec!["curl".to_string()]);
    let aliases = AliasTable::builtin();
    let required = required_extensions();

    let first = reconcile(&required, &snapshot, &aliases);
    let second = reconcile(&required, &snapshot, &aliases);
    assert_eq!(first, second);
}

#[test]
fn adding_an_extension_never_adds_a_missing_entry() {
    let aliases = AliasTable::builtin();
    let required = required_extensions();
    let before = reconcile(
        &required,
        &EnvironmentSnapshot::new("8.3.0", 80300, vec!["curl".to_string()]),
        &aliases,
    );
    let after = reconcile(
        &required,
        &EnvironmentSnapshot::new(
            "8.3.0",
            80300,
            vec!["curl".to_string(), "gd".to_string()],
        ),
        &aliases,
    );

    assert!(after.missing_count() < before.missing_count());
    assert!(after.missing().iter().all(|m| before.missing().contains(m)));
}

#[test]
fn configured_alias_group_extends_builtin() {
    let aliases = AliasTable::builtin().with_group(["spx", "php-spx"]);
    let checker = CapabilityChecker::from_parts(["php-spx", "Zend OPcache"], 80400, &aliases);
    assert!(checker.is_available("SPX"));
    assert!(checker.is_available("opcache"));
}

#[test]
fn static_provider_feeds_checker() {
    use extcheck::environment::CapabilityProvider;

    let provider = StaticProvider::new(EnvironmentSnapshot::new(
        "8.2.20",
        80220,
        vec!["curl".to_string()],
    ));
    let snapshot = provider.snapshot().unwrap();
    let result = reconcile(&required_extensions(), &snapshot, &AliasTable::builtin());

    assert_eq!(result.skipped(), ["imap".to_string()]);
    assert!(!result.required().contains(&"imap"));
}
