//! Integration tests for atm-chain.

#![allow(clippy::expect_used)]

use atm_chain::chain::{Chain, ChainBuilder, Dispatcher, build_chain};
use atm_chain::core::Amount;
use atm_chain::error::{DispenseError, Error};
use test_case::test_case;

fn default_dispatcher() -> Dispatcher {
    Dispatcher::from_denominations(&[50, 20, 10]).expect("default chain")
}

#[test_case(80, &[(50, 1), (20, 1), (10, 1)] ; "one of each")]
#[test_case(140, &[(50, 2), (20, 2)] ; "skips the tail")]
#[test_case(50, &[(50, 1)] ; "single note")]
#[test_case(30, &[(20, 1), (10, 1)] ; "skips the head")]
#[test_case(10, &[(10, 1)] ; "tail only")]
#[test_case(0, &[] ; "zero")]
fn test_dispense_examples(amount: i64, expected: &[(u64, u64)]) {
    let record = default_dispatcher()
        .dispense_request(amount)
        .expect("dispense");
    assert_eq!(record.pairs(), expected.to_vec());
}

#[test_case(25 ; "not a multiple")]
#[test_case(5 ; "below smallest")]
#[test_case(-10 ; "negative")]
#[test_case(i64::MIN ; "most negative")]
fn test_invalid_amounts(amount: i64) {
    let result = default_dispatcher().dispense_request(amount);
    assert!(matches!(
        result,
        Err(Error::Dispense(DispenseError::InvalidAmount { .. }))
    ));
}

#[test_case(&[] ; "empty")]
#[test_case(&[50, 50] ; "duplicate")]
#[test_case(&[10, 20, 50] ; "ascending")]
#[test_case(&[50, 10, 20] ; "unordered")]
#[test_case(&[20, 0] ; "zero")]
fn test_invalid_chains(denominations: &[u64]) {
    assert!(matches!(
        build_chain(denominations),
        Err(Error::Dispense(DispenseError::InvalidConfiguration { .. }))
    ));
}

#[test]
fn test_undispensable_remainder() {
    let dispatcher = Dispatcher::from_denominations(&[25, 10]).expect("chain");
    let result = dispatcher.dispense_request(30);
    assert!(matches!(
        result,
        Err(Error::Dispense(DispenseError::InsufficientDenominations {
            remainder: 5,
            smallest: 10
        }))
    ));

    // 20 skips the 25 tier and is absorbed by the tail.
    let record = dispatcher.dispense_request(20).expect("dispense");
    assert_eq!(record.pairs(), vec![(10, 2)]);
}

#[test]
fn test_large_amount() {
    let record = default_dispatcher()
        .dispense_request(i64::MAX - i64::MAX % 10)
        .expect("dispense");
    assert_eq!(record.total(), u128::try_from(i64::MAX - i64::MAX % 10).expect("fits"));
}

#[test]
fn test_builder_and_extension_agree() {
    let built = ChainBuilder::new()
        .with_denominations([10, 50, 20, 100])
        .build()
        .expect("builder");
    let extended = Chain::default().extended(100).expect("extended");
    assert_eq!(built, extended);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn denomination_lists() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::btree_set(1u64..500, 1..6)
            .prop_map(|set| set.into_iter().rev().collect())
    }

    proptest! {
        #[test]
        fn record_sums_to_amount(units in 0u64..100_000) {
            let amount = units * 10;
            let record = default_dispatcher()
                .dispense(Amount::new(amount))
                .expect("dispense");
            prop_assert_eq!(record.total(), u128::from(amount));
        }

        #[test]
        fn record_is_strictly_descending_with_positive_counts(units in 0u64..100_000) {
            let record = default_dispatcher()
                .dispense(Amount::new(units * 10))
                .expect("dispense");
            for tranche in &record {
                prop_assert!(tranche.count() >= 1);
            }
            for pair in record.tranches().windows(2) {
                prop_assert!(pair[0].denomination() > pair[1].denomination());
            }
        }

        #[test]
        fn dispense_is_idempotent(units in 0i64..10_000) {
            let dispatcher = default_dispatcher();
            let first = dispatcher.dispense_request(units * 10);
            let second = dispatcher.dispense_request(units * 10);
            prop_assert_eq!(first.ok(), second.ok());
        }

        #[test]
        fn non_multiples_are_rejected(units in 0i64..10_000, offset in 1i64..10) {
            let result = default_dispatcher().dispense_request(units * 10 + offset);
            let is_invalid_amount = matches!(
                result,
                Err(Error::Dispense(DispenseError::InvalidAmount { .. }))
            );
            prop_assert!(is_invalid_amount);
        }

        #[test]
        fn arbitrary_chains_sum_or_report_remainder(
            denominations in denomination_lists(),
            multiple in 0u64..1_000,
        ) {
            let dispatcher = Dispatcher::from_denominations(&denominations).expect("valid chain");
            let amount = multiple * dispatcher.smallest().value();
            match dispatcher.dispense(Amount::new(amount)) {
                Ok(record) => {
                    prop_assert_eq!(record.total(), u128::from(amount));
                    prop_assert!(record.iter().all(|t| t.count() >= 1));
                    for pair in record.tranches().windows(2) {
                        prop_assert!(pair[0].denomination() > pair[1].denomination());
                    }
                    for tranche in &record {
                        prop_assert!(denominations.contains(&tranche.denomination().value()));
                    }
                }
                Err(Error::Dispense(DispenseError::InsufficientDenominations {
                    remainder,
                    smallest,
                })) => {
                    prop_assert!(remainder > 0);
                    prop_assert_eq!(smallest, dispatcher.smallest().value());
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }

        #[test]
        fn builder_accepts_any_order(mut denominations in denomination_lists()) {
            let expected = denominations.clone();
            denominations.reverse();
            let chain = ChainBuilder::new()
                .with_denominations(denominations)
                .build()
                .expect("builder");
            prop_assert_eq!(chain.denominations(), expected);
        }
    }
}

/// Binary end-to-end tests.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn atm() -> Command {
        let mut cmd = Command::cargo_bin("atm-chain").expect("binary");
        cmd.env_remove("ATM_DENOMINATIONS").env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_dispense_text() {
        atm()
            .args(["dispense", "80"])
            .assert()
            .success()
            .stdout("Dispensing 1 50$ note\nDispensing 1 20$ note\nDispensing 1 10$ note\n");
    }

    #[test]
    fn test_dispense_invalid_amount() {
        atm()
            .args(["dispense", "25"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("multiple of 10"));
    }

    #[test]
    fn test_dispense_negative_amount() {
        atm()
            .args(["dispense", "-20"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("negative"));
    }

    #[test]
    fn test_dispense_json() {
        atm()
            .args(["--format", "json", "dispense", "140"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"notes\": 4"));
    }

    #[test]
    fn test_json_error_on_stdout() {
        atm()
            .args(["--format", "json", "dispense", "25"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"kind\": \"invalid_amount\""));
    }

    #[test]
    fn test_denominations_from_env() {
        atm()
            .env("ATM_DENOMINATIONS", "100,50")
            .args(["dispense", "150"])
            .assert()
            .success()
            .stdout("Dispensing 1 100$ note\nDispensing 1 50$ note\n");
    }

    #[test]
    fn test_invalid_chain_flag() {
        atm()
            .args(["--denominations", "10,20", "chain"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("strictly decreasing"));
    }

    #[test]
    fn test_chain_command() {
        atm()
            .arg("chain")
            .assert()
            .success()
            .stdout(predicate::str::contains("[2] 10$ (tail)"));
    }

    #[test]
    fn test_session() {
        atm()
            .arg("session")
            .write_stdin("80\n25\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Enter amount to dispense"))
            .stdout(predicate::str::contains("Dispensing 1 50$ note"))
            .stdout(predicate::str::contains("Error: dispense error: invalid amount 25"))
            .stdout(predicate::str::contains(
                "Session ended: 2 requests, 1 dispensed, 1 rejected",
            ));
    }
}
