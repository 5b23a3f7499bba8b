use std::io::{self, BufRead, Write};

use super::{CliResult, ask_index, open_session, report};
use crate::cli::commands::ContactsCli;
use crate::cli::output::{format_contact_detail, format_contact_line};
use crate::cli::prompt::Prompter;
use crate::model::{Contact, ContactPatch, Session, StorageConfig};
use crate::ops::contact_ops::{self, SearchResult};
use crate::ops::{Listing, OpError, Outcome};

fn contacts_file(storage: &StorageConfig) -> &str {
    &storage.contacts_file
}

/// Entry point for the `contacts` binary.
pub fn run_contacts(cli: ContactsCli) -> CliResult {
    let (mut session, _config) = open_session::<Contact>(&cli.store, contacts_file)?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    contacts_menu(&mut session, &mut prompter)
}

/// Numbered menu loop over a contact session. Returns on Exit or end of
/// input.
pub fn contacts_menu<R: BufRead, W: Write>(
    session: &mut Session<Contact>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    loop {
        writeln!(
            prompter.out(),
            "\n--- Contact Management ---\n\
             1. Add Contact\n\
             2. View Contacts\n\
             3. Search Contact\n\
             4. Update Contact\n\
             5. Delete Contact\n\
             6. Exit"
        )?;
        let Some(choice) = prompter.ask("Select an option (1-6): ")? else {
            writeln!(prompter.out())?;
            return Ok(());
        };
        match choice.trim() {
            "1" => add(session, prompter)?,
            "2" => view(session, prompter.out())?,
            "3" => search(session, prompter)?,
            "4" => update(session, prompter)?,
            "5" => delete(session, prompter)?,
            "6" => {
                writeln!(prompter.out(), "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(
                prompter.out(),
                "Invalid choice. Please select a valid option."
            )?,
        }
    }
}

fn add<R: BufRead, W: Write>(
    session: &mut Session<Contact>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    writeln!(prompter.out(), "\nAdd New Contact")?;
    let name = prompter.ask_or_empty("Name: ")?;
    let phone = prompter.ask_or_empty("Phone Number: ")?;
    let email = prompter.ask_or_empty("Email: ")?;
    let address = prompter.ask_or_empty("Address: ")?;

    let candidate = Contact::new(name, phone, email, address);
    match contact_ops::add_contact(session, &candidate) {
        Ok(_) => writeln!(prompter.out(), "Contact added successfully.")?,
        Err(e) => report(
            prompter.out(),
            e,
            "A contact with this name or phone number already exists.",
        )?,
    }
    Ok(())
}

fn view<W: Write>(session: &Session<Contact>, out: &mut W) -> CliResult {
    match contact_ops::view_contacts(session) {
        Listing::Empty => writeln!(out, "\nNo contacts found.")?,
        Listing::Entries(entries) => {
            writeln!(out, "\nContact List:")?;
            for (index, contact) in entries {
                writeln!(out, "{}", format_contact_line(index, contact))?;
            }
        }
    }
    Ok(())
}

fn search<R: BufRead, W: Write>(
    session: &Session<Contact>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let query = prompter.ask_or_empty("\nEnter name or phone to search: ")?;
    let out = prompter.out();
    match contact_ops::search_contacts(session, &query) {
        SearchResult::NoContacts => writeln!(out, "No contacts found.")?,
        SearchResult::Matches(matches) if matches.is_empty() => {
            writeln!(out, "No matching contacts found.")?
        }
        SearchResult::Matches(matches) => {
            writeln!(out, "\nSearch Results ({} found):", matches.len())?;
            for (_, contact) in matches {
                for line in format_contact_detail(contact) {
                    writeln!(out, "{}", line)?;
                }
            }
        }
    }
    Ok(())
}

/// Show the list, then ask which contact to act on.
fn pick<R: BufRead, W: Write>(
    session: &Session<Contact>,
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<Option<usize>, Box<dyn std::error::Error>> {
    view(session, prompter.out())?;
    match ask_index::<Contact, _, _>(prompter, prompt, session.records().len())? {
        Ok(index) => Ok(Some(index)),
        Err(e) => {
            let message = match &e {
                OpError::InvalidNumber(_) => "Invalid input.",
                _ => "Invalid contact number.",
            };
            report(prompter.out(), e, message)?;
            Ok(None)
        }
    }
}

fn update<R: BufRead, W: Write>(
    session: &mut Session<Contact>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let Some(index) = pick(session, prompter, "\nEnter contact number to update: ")? else {
        return Ok(());
    };
    let current = session
        .records()
        .id_at(index)
        .and_then(|id| session.records().get(id))
        .cloned()
        .ok_or("contact vanished between prompts")?;

    writeln!(prompter.out(), "\nUpdating Contact: {}", current.name)?;
    let name = prompter.ask_or_empty(&format!("New Name [{}]: ", current.name))?;
    let phone = prompter.ask_or_empty(&format!("New Phone [{}]: ", current.phone))?;
    let email = prompter.ask_or_empty(&format!("New Email [{}]: ", current.email))?;
    let address = prompter.ask_or_empty(&format!("New Address [{}]: ", current.address))?;

    let patch = ContactPatch::from_input(&name, &phone, &email, &address);
    match contact_ops::update_contact(session, index, patch) {
        Ok(Outcome::Updated) => writeln!(prompter.out(), "Contact updated successfully.")?,
        Ok(Outcome::Unchanged) => writeln!(prompter.out(), "Contact unchanged.")?,
        Err(e) => report(prompter.out(), e, "Invalid contact number.")?,
    }
    Ok(())
}

fn delete<R: BufRead, W: Write>(
    session: &mut Session<Contact>,
    prompter: &mut Prompter<R, W>,
) -> CliResult {
    let Some(index) = pick(session, prompter, "\nEnter contact number to delete: ")? else {
        return Ok(());
    };
    match contact_ops::delete_contact(session, index) {
        Ok(removed) => writeln!(prompter.out(), "Deleted contact: {}", removed.name)?,
        Err(e) => report(prompter.out(), e, "Invalid contact number.")?,
    }
    Ok(())
}
