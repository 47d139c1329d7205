//! End-to-end tests driving the command processor the way the
//! interactive loop does: parse a line, dispatch, inspect the book.

use anyhow::Result;
use pretty_assertions::assert_eq;

use rolodex::book::AddressBook;
use rolodex::command_processor::{CommandArgs, CommandContext, CommandProcessor, Flow};
use rolodex::config::Config;

fn execute(
    processor: &CommandProcessor,
    book: &mut AddressBook,
    config: &mut Config,
    line: &str,
) -> Result<Flow> {
    let args = CommandArgs::parse(line)?;
    let mut ctx = CommandContext { book, config };
    processor.execute(args, &mut ctx)
}

#[test]
fn add_creates_then_updates_a_contact() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    execute(&processor, &mut book, &mut config, "add Anna 0123456789")?;
    execute(&processor, &mut book, &mut config, "add Anna 9876543210")?;

    let anna = book.find("Anna").expect("contact should exist");
    let phones: Vec<_> = anna.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, ["0123456789", "9876543210"]);

    Ok(())
}

#[test]
fn change_replaces_a_phone() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    execute(&processor, &mut book, &mut config, "add Anna 0123456789")?;
    execute(
        &processor,
        &mut book,
        &mut config,
        "change Anna 0123456789 5556667778",
    )?;

    let anna = book.find("Anna").unwrap();
    assert!(anna.find_phone("5556667778").is_some());
    assert!(anna.find_phone("0123456789").is_none());

    Ok(())
}

#[test]
fn add_birthday_creates_a_missing_contact() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    execute(&processor, &mut book, &mut config, "add-birthday Leo 29.02.2000")?;

    let leo = book.find("Leo").expect("contact should be created");
    assert_eq!(leo.birthday().unwrap().to_string(), "29.02.2000");
    assert!(leo.phones().is_empty());

    Ok(())
}

#[test]
fn invalid_input_leaves_the_book_untouched() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    // Bad phone, bad name, bad date, missing args: all are reported to
    // the user at the dispatch boundary and the session continues.
    for line in [
        "add Anna 123",
        "add Anna2 0123456789",
        "add-birthday Anna 1990-03-05",
        "add Anna",
    ] {
        let flow = execute(&processor, &mut book, &mut config, line)?;
        assert_eq!(flow, Flow::Continue);
    }
    assert!(book.is_empty());

    Ok(())
}

#[test]
fn unknown_contact_lookups_do_not_fail_the_session() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    for line in ["phone Ghost", "show-birthday Ghost", "change Ghost 0123456789 9876543210"] {
        let flow = execute(&processor, &mut book, &mut config, line)?;
        assert_eq!(flow, Flow::Continue);
    }

    Ok(())
}

#[test]
fn exit_commands_signal_exit() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    for line in ["close", "exit", "quit"] {
        let flow = execute(&processor, &mut book, &mut config, line)?;
        assert_eq!(flow, Flow::Exit);
    }

    Ok(())
}

#[test]
fn unrecognized_commands_continue_the_session() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    let flow = execute(&processor, &mut book, &mut config, "frobnicate")?;
    assert_eq!(flow, Flow::Continue);

    Ok(())
}

#[test]
fn commands_are_case_insensitive_but_names_are_not() -> Result<()> {
    let processor = CommandProcessor::new();
    let mut book = AddressBook::new();
    let mut config = Config::default();

    execute(&processor, &mut book, &mut config, "ADD Anna 0123456789")?;
    assert!(book.find("Anna").is_some());
    assert!(book.find("anna").is_none());

    Ok(())
}
