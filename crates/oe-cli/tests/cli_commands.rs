#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WALKTHROUGH: &str = "\
# outside
take bananaPeel
forward
# ticket machine
click ticketMachine
answer 3
next
answer 3
next
answer 4
next
answer 2
next
answer 2
complete
take popsicle
forward
# queue
drop bananaPeel
click guard
option 2
option 3
option 1
forward
# security
click metalDetector
wait 3
throw
throw
throw
forward
# documents
take passport
take visaApplication
take birthCertificate
take employmentLetter
forward
# interview
click interviewer
answer 1 passport
answer 1 visaApplication
answer 1 birthCertificate
answer 1
answer 1 employmentLetter
answer 1
answer 1
answer 1 stolenDocument
answer 1
answer 1
answer 1
answer 1
forward
forward
";

/// A game command with its save file inside `dir` and no stray env.
fn game(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("office-escape").unwrap();
    cmd.env_remove("OFFICE_ESCAPE_SAVE")
        .env_remove("OFFICE_ESCAPE_PLAYER")
        .env_remove("OFFICE_ESCAPE_STARTER_KIT")
        .env_remove("RUST_LOG")
        .arg("--save-file")
        .arg(dir.join("savegame.txt"));
    cmd
}

// ---------------------------------------------------------------------------
// script
// ---------------------------------------------------------------------------

#[test]
fn script_shows_opening_room() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("script")
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Outside the Irish Immigration Office"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn script_prompts_before_each_read() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("script")
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("to exit.\n\n> You are carrying nothing."))
        // waiting for the next line when stdin runs dry
        .stdout(predicate::str::ends_with("nothing.\n\n> "));
}

#[test]
fn script_quit_stops_prompting() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("script")
        .write_stdin("quit\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("> Goodbye!\n\n"));
}

#[test]
fn script_full_walkthrough_from_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("walkthrough.txt");
    fs::write(&script, WALKTHROUGH).unwrap();

    game(dir.path())
        .arg("script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("You got ticket number 12!"))
        .stdout(predicate::str::contains("The guard accepts your bribe!"))
        .stdout(predicate::str::contains("Welcome to Ireland."))
        .stdout(predicate::str::contains("Congratulations! You escaped the office."));

    let save = fs::read_to_string(dir.path().join("savegame.txt")).unwrap();
    assert_eq!(save.lines().next(), Some("exit"));
}

#[test]
fn script_echo_prints_commands() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .args(["script", "--echo"])
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> inventory"))
        .stdout(predicate::str::contains("You are carrying nothing."));
}

#[test]
fn script_blocked_door() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("script")
        .write_stdin("forward\nforward\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You need to take a ticket from the machine first.",
        ));
}

#[test]
fn script_resumes_save() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("savegame.txt"), "documents\nticketItem\n").unwrap();

    game(dir.path())
        .arg("script")
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Document Verification Room"))
        .stdout(predicate::str::contains("  - ticketItem"));
}

#[test]
fn script_new_ignores_save() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("savegame.txt"), "documents\nticketItem\n").unwrap();

    game(dir.path())
        .args(["script", "--new"])
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Outside the Irish Immigration Office"));
}

#[test]
fn script_no_save_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .args(["script", "--no-save"])
        .write_stdin("forward\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket Machine Room"));
    assert!(!dir.path().join("savegame.txt").exists());
}

#[test]
fn script_starter_kit() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .args(["script", "--starter-kit"])
        .write_stdin("i\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("  - passport"))
        .stdout(predicate::str::contains("  - employmentLetter"));
}

#[test]
fn script_unknown_command_keeps_going() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("script")
        .write_stdin("sing loudly\nlook\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand \"sing loudly\""))
        .stdout(predicate::str::contains("Outside the Irish Immigration Office"));
}

#[test]
fn script_missing_file() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .args(["script", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: failed to open"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_table() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("ticketMachine"))
        .stdout(predicate::str::contains("take a ticket from the machine"))
        .stdout(predicate::str::contains("8 rooms"));
}

#[test]
fn rooms_json() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .args(["rooms", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"outside\""))
        .stdout(predicate::str::contains("\"bananaPeel\""));
}

#[test]
fn rooms_unknown_format() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .args(["rooms", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// ---------------------------------------------------------------------------
// reset
// ---------------------------------------------------------------------------

#[test]
fn reset_deletes_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("savegame.txt");
    fs::write(&save, "queue\nticketItem\n").unwrap();

    game(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    assert!(!save.exists());
}

#[test]
fn reset_without_save() {
    let dir = TempDir::new().unwrap();
    game(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("No save file"));
}
