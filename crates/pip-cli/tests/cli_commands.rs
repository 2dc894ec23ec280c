//! Integration tests for the `pipsqueak` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn pipsqueak() -> Command {
    Command::cargo_bin("pipsqueak").unwrap()
}

// ---------------------------------------------------------------------------
// catalog listings
// ---------------------------------------------------------------------------

#[test]
fn abilities_lists_all_six() {
    pipsqueak()
        .arg("abilities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Brains"))
        .stdout(predicate::str::contains("D20"))
        .stdout(predicate::str::contains("Brawn"))
        .stdout(predicate::str::contains("D4"));
}

#[test]
fn actions_lists_the_catalog() {
    pipsqueak()
        .arg("actions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convince"))
        .stdout(predicate::str::contains("Charm + Brains"))
        .stdout(predicate::str::contains("13 actions"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_single_ability() {
    pipsqueak()
        .args(["roll", "brains", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result:"))
        .stdout(predicate::str::contains("Brains (D20):"));
}

#[test]
fn roll_two_abilities() {
    pipsqueak()
        .args(["roll", "brains", "grit", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brains (D20):"))
        .stdout(predicate::str::contains("Grit (D10):"));
}

#[test]
fn roll_is_reproducible_with_a_seed() {
    let first = pipsqueak()
        .args(["roll", "grit", "--seed", "7"])
        .assert()
        .success();
    let second = pipsqueak()
        .args(["roll", "grit", "--seed", "7"])
        .assert()
        .success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn roll_accepts_die_descriptors() {
    let by_die = pipsqueak()
        .args(["roll", "d20", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brains (D20):"));
    let by_label = pipsqueak()
        .args(["roll", "brains", "--seed", "42"])
        .assert()
        .success();
    assert_eq!(
        by_die.get_output().stdout,
        by_label.get_output().stdout
    );
}

#[test]
fn roll_rejects_made_up_dice() {
    pipsqueak()
        .args(["roll", "d7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ability"));
}

#[test]
fn roll_rejects_unknown_ability() {
    pipsqueak()
        .args(["roll", "luck"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ability"));
}

#[test]
fn roll_rejects_duplicate_ability() {
    pipsqueak()
        .args(["roll", "grit", "grit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("given twice"));
    // The die descriptor and the label name the same ability.
    pipsqueak()
        .args(["roll", "grit", "d10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("given twice"));
}

// ---------------------------------------------------------------------------
// act
// ---------------------------------------------------------------------------

#[test]
fn act_runs_a_catalog_action() {
    pipsqueak()
        .args(["act", "convince", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convince"))
        .stdout(predicate::str::contains("Charm + Brains"))
        .stdout(predicate::str::contains("Result:"));
}

#[test]
fn act_rejects_unknown_action() {
    pipsqueak()
        .args(["act", "juggle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action"));
}

// ---------------------------------------------------------------------------
// play (REPL smoke tests)
// ---------------------------------------------------------------------------

#[test]
fn play_rolls_and_quits() {
    pipsqueak()
        .args(["play", "--seed", "1"])
        .write_stdin("toggle brains\nroll\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Slots: 1) Brains (D20)"))
        .stdout(predicate::str::contains("Result:"))
        .stdout(predicate::str::contains("1st Roll"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_reports_bad_commands_without_exiting() {
    pipsqueak()
        .args(["play", "--seed", "1"])
        .write_stdin("dance\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command"))
        .stdout(predicate::str::contains("TIMMY"));
}

#[test]
fn play_action_auto_rolls() {
    pipsqueak()
        .args(["play", "--seed", "3"])
        .write_stdin("action convince\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action: Convince (Charm + Brains)"))
        .stdout(predicate::str::contains("Result:"));
}
