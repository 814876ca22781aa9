use assert_cmd::Command;
use predicates::prelude::*;

const BOOK_WINDOW: &str = "2\nwindow\ny\nAda\nLovelace\nP1234567\n";

/// Helper function to create a Command with --no-color flag for testing
fn seatbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seatbook").expect("Failed to find seatbook binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper function to create a staff session with fixed references
fn staff_cmd() -> Command {
    let mut cmd = seatbook_cmd();
    cmd.args(["--role", "staff", "--seed", "2024"]);
    cmd
}

/// Extracts the booking reference from a confirmation in the output
fn extract_reference(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("- Reference: "))
        .map(|reference| reference.trim().to_string())
        .expect("No booking reference in output")
}

#[test]
fn test_cli_show_layout() {
    seatbook_cmd()
        .write_stdin("4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Seating Layout (customer view)"))
        .stdout(predicate::str::contains("| 1 | F | F | F | F | X | F | F | F |"))
        .stdout(predicate::str::contains("| 5 | F | F | F | F | X | S | F | F |"))
        .stdout(predicate::str::contains("Free seats: 39 of 39"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_cli_exits_cleanly_at_end_of_input() {
    seatbook_cmd()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seating Layout"))
        .stdout(predicate::str::contains("Goodbye!").not());
}

#[test]
fn test_cli_end_of_input_mid_booking() {
    seatbook_cmd()
        .write_stdin("2\nwindow\ny\nAda\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Last name: \n"))
        .stdout(predicate::str::contains("Booking confirmed").not());
}

#[test]
fn test_cli_customer_books_window_seat() {
    seatbook_cmd()
        .write_stdin(format!("{BOOK_WINDOW}4\n0\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended seat: 1A (row 1, seat A)"))
        .stdout(predicate::str::contains("Confirm booking? (y/n): "))
        .stdout(predicate::str::contains("Booking confirmed for Ada Lovelace."))
        .stdout(predicate::str::contains("- Seat: 1A"))
        .stdout(predicate::str::contains("Success: Seat successfully booked."))
        .stdout(predicate::str::contains("| 1 | R | F | F | F | X | F | F | F |"))
        .stdout(predicate::str::contains("Free seats: 38 of 39"));
}

#[test]
fn test_cli_customer_map_hides_reference() {
    let output = seatbook_cmd()
        .write_stdin(format!("{BOOK_WINDOW}4\n0\n"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Invalid UTF-8");
    let reference = extract_reference(&output);

    let map = output
        .split("## Seating Layout")
        .nth(1)
        .expect("No seat map in output");
    assert!(!map.contains(&reference));
    assert!(!map.contains("Lovelace"));
}

#[test]
fn test_cli_second_window_recommendation() {
    seatbook_cmd()
        .write_stdin(format!("{BOOK_WINDOW}2\nw\nn\n0\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended seat: 1H (row 1, seat H)"))
        .stdout(predicate::str::contains("Note: Booking cancelled."));
}

#[test]
fn test_cli_staff_lists_bookings() {
    staff_cmd()
        .write_stdin(format!("{BOOK_WINDOW}5\n4\n0\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## Bookings (1)"))
        .stdout(predicate::str::contains("- Passenger: Ada Lovelace"))
        .stdout(predicate::str::contains("- Passport: P1234567"))
        .stdout(predicate::str::contains("## Seating Layout (staff view)"));
}

#[test]
fn test_cli_staff_export_json() {
    staff_cmd()
        .write_stdin(format!("{BOOK_WINDOW}7\n0\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("```json"))
        .stdout(predicate::str::contains("\"first_name\": \"Ada\""))
        .stdout(predicate::str::contains("\"passport_number\": \"P1234567\""));
}

#[test]
fn test_cli_customer_refused_staff_options() {
    seatbook_cmd()
        .write_stdin("5\n6\n7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: This option requires staff access.").count(3))
        .stdout(predicate::str::contains("No bookings found.").not());
}

#[test]
fn test_cli_invalid_menu_option() {
    seatbook_cmd()
        .write_stdin("9\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid option. Please select again."));
}

#[test]
fn test_cli_invalid_preference() {
    seatbook_cmd()
        .write_stdin("2\nmiddle\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid seat preference: middle"))
        .stdout(predicate::str::contains("Recommended seat").not());
}

#[test]
fn test_cli_blank_preference_rejected() {
    seatbook_cmd()
        .write_stdin("2\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Missing seat preference. Use window, aisle or none.",
        ))
        .stdout(predicate::str::contains("Recommended seat").not())
        .stdout(predicate::str::contains("Confirm booking?").not());
}

#[test]
fn test_cli_blank_passenger_name_rejected() {
    seatbook_cmd()
        .write_stdin("2\nnone\ny\n\nLovelace\nP1234567\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Invalid input for field 'first_name': must not be blank",
        ))
        .stdout(predicate::str::contains("Free seats: 39 of 39"));
}

#[test]
fn test_cli_check_availability() {
    seatbook_cmd()
        .write_stdin("1\n3C\n1\n5 6\n1\n9A\n1\nnowhere\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat 3C is available."))
        .stdout(predicate::str::contains("Seat 5F is not bookable (storage)."))
        .stdout(predicate::str::contains("Error: Seat 9A does not exist"))
        .stdout(predicate::str::contains("Error: Invalid input for field 'seat'"));
}

#[test]
fn test_cli_unknown_reference() {
    seatbook_cmd()
        .write_stdin("3\nabcd1234\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Booking reference ABCD1234 not found",
        ));
}

#[test]
fn test_cli_free_by_reference_case_insensitive() {
    // The fixed seed makes the second session issue the same reference
    let output = staff_cmd()
        .write_stdin(format!("{BOOK_WINDOW}0\n"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let reference = extract_reference(&String::from_utf8(output).expect("Invalid UTF-8"));

    staff_cmd()
        .write_stdin(format!(
            "{BOOK_WINDOW}3\n{}\n3\n{}\n5\n0\n",
            reference.to_lowercase(),
            reference
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Seat 1A is free again; booking {reference} has been cancelled."
        )))
        .stdout(predicate::str::contains(format!(
            "Error: Booking reference {reference} not found"
        )))
        .stdout(predicate::str::contains("No bookings found."));
}

#[test]
fn test_cli_staff_free_by_position() {
    staff_cmd()
        .write_stdin(format!("{BOOK_WINDOW}6\n1A\n6\n1A\n6\n1E\n0\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat 1A is free again"))
        .stdout(predicate::str::contains("Success: Seat successfully freed.").count(1))
        .stdout(predicate::str::contains("Error: Seat 1A is not booked"))
        .stdout(predicate::str::contains("Note: Choose option 4 to see which seats are free."))
        .stdout(predicate::str::contains("Error: Seat 1E is not bookable (aisle)"));
}

#[test]
fn test_cli_rejects_unknown_role() {
    seatbook_cmd()
        .args(["--role", "pilot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'pilot'"));
}
