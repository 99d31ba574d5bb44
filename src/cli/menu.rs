use super::prompt::{
    MenuCommand, ask, confirm, display_contact, display_contact_list, get_input,
    is_end_of_input, parse_menu_choice, retry, show_menu,
};
use crate::prelude::{
    AppError, ClearOutcome, Contact, ContactBook, ContactKey, ContactStore, ContactUpdate,
    EditOutcome, is_valid_email, is_valid_phone,
    store::storage_port::{export_contacts_to_vcard, resolve_export_path},
};
use std::path::Path;

/// Runs the numbered menu until the user quits or input ends. Failures of a
/// single action are reported and the menu carries on.
pub fn run_menu<S: ContactStore>(book: &ContactBook<S>, store_path: &Path) -> Result<(), AppError> {
    loop {
        show_menu()?;

        let choice = match get_input() {
            Ok(choice) => choice,
            Err(e) if is_end_of_input(&e) => break,
            Err(e) => return Err(e),
        };

        let command = match parse_menu_choice(&choice) {
            Ok(command) => command,
            Err(_) => {
                eprintln!("Invalid choice. Please enter a valid option.");
                continue;
            }
        };

        let result = match command {
            MenuCommand::Create => create_contact(book),
            MenuCommand::Edit => edit_contact(book),
            MenuCommand::ViewOne => view_contact(book),
            MenuCommand::ViewAll => view_all_contacts(book),
            MenuCommand::DeleteOne => delete_contact(book),
            MenuCommand::DeleteAll => delete_all_contacts(book),
            MenuCommand::Export => export_contacts(book, store_path),
            MenuCommand::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(e) if is_end_of_input(&e) => break,
            Err(e) => eprintln!("{}", e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn not_empty(input: &str) -> Result<bool, AppError> {
    Ok(!input.is_empty())
}

fn empty_or_phone(input: &str) -> Result<bool, AppError> {
    Ok(input.is_empty() || is_valid_phone(input)?)
}

fn empty_or_email(input: &str) -> Result<bool, AppError> {
    Ok(input.is_empty() || is_valid_email(input)?)
}

fn ask_key() -> Result<ContactKey, AppError> {
    let first_name = retry(
        "Please enter the contact's first name(for example: Amin)",
        not_empty,
        "Contact's first name cannot be empty!",
    )?;
    let last_name = retry(
        "Please enter the contact's last name(for example: Khatoon Abadi)",
        not_empty,
        "Contact's last name cannot be empty!",
    )?;
    Ok(ContactKey::new(&first_name, &last_name))
}

fn create_contact<S: ContactStore>(book: &ContactBook<S>) -> Result<(), AppError> {
    println!("Contact information is stored in a case-sensitive manner");

    let key = ask_key()?;

    if let Some(existing) = book.find_by_name(&key)? {
        eprintln!(
            "Contact: {} {} is already saved!",
            existing.first_name, existing.last_name
        );
        if confirm("Do you want to edit this contact?")? {
            return edit_existing(book, &existing);
        }
        return Ok(());
    }

    let phone = retry(
        "Please enter the contact's phone number(for example: 09123456789)",
        is_valid_phone,
        "Your entered format for the phone number is not correct",
    )?;

    let phone2 = loop {
        println!("If you don't want to enter a second phone number just skip by pressing Enter");
        let phone2 = ask("Please enter the contact's second phone number(for example: 09123456789)")?;

        if phone2 == phone {
            eprintln!("You entered the contact's number again in the second number");
            if confirm("Do you want to add another number?")? {
                continue;
            }
            break String::new();
        }

        if empty_or_phone(&phone2)? {
            break phone2;
        }
        eprintln!("Your entered format for the phone number is not correct");
    };

    println!("If you do not want to enter email address just skip by pressing Enter");
    let email = retry(
        "Please enter the contact's email address(for example: aminkhatoonabadi@gmail.com)",
        empty_or_email,
        "Your entered format for email address is not correct",
    )?;

    let contact = Contact::new(key.first_name, key.last_name, phone, phone2, email);
    book.create(contact.clone())?;

    println!(
        "Contact: {} {} added successfully",
        contact.first_name, contact.last_name
    );
    Ok(())
}

fn edit_contact<S: ContactStore>(book: &ContactBook<S>) -> Result<(), AppError> {
    println!("Contact information is stored in a case-sensitive manner");

    let original = book.get(&ask_key()?)?;
    println!("{}", display_contact(&original));

    edit_existing(book, &original)
}

fn edit_existing<S: ContactStore>(book: &ContactBook<S>, original: &Contact) -> Result<(), AppError> {
    println!("You can press Enter to skip editing a specific data");

    let first_name = ask("Please enter the new first name")?;
    let last_name = ask("Please enter the new last name")?;
    let phone = retry(
        "Please enter the new phone number",
        empty_or_phone,
        "Your entered format for the phone number is not correct",
    )?;
    let phone2 = retry(
        "Please enter the new second phone number",
        empty_or_phone,
        "Your entered format for the phone number is not correct",
    )?;
    let email = retry(
        "Please enter the new email address",
        empty_or_email,
        "Your entered format for email address is not correct",
    )?;

    let update = ContactUpdate::from_input(&first_name, &last_name, &phone, &phone2, &email);

    match book.edit(&original.key(), &update)? {
        EditOutcome::NoChange(_) => {
            eprintln!("You have not edited any information. Editing has been cancelled");
        }
        EditOutcome::Updated { before, after } => {
            println!(
                "Contact: Old contact details: {} {} edited to new contact details: {} {} successfully",
                before.first_name, before.last_name, after.first_name, after.last_name
            );
            println!("{}", display_contact(&after));
        }
    }
    Ok(())
}

fn view_contact<S: ContactStore>(book: &ContactBook<S>) -> Result<(), AppError> {
    let contact = book.get(&ask_key()?)?;
    println!("{}", display_contact(&contact));
    Ok(())
}

fn view_all_contacts<S: ContactStore>(book: &ContactBook<S>) -> Result<(), AppError> {
    println!("{}", display_contact_list(&book.list_all()?));
    Ok(())
}

fn delete_contact<S: ContactStore>(book: &ContactBook<S>) -> Result<(), AppError> {
    let contact = book.get(&ask_key()?)?;
    println!("{}", display_contact(&contact));

    let deleted = book.delete_one(&contact.key())?;
    println!(
        "Contact: {} {} was successfully deleted",
        deleted.first_name, deleted.last_name
    );
    Ok(())
}

fn delete_all_contacts<S: ContactStore>(book: &ContactBook<S>) -> Result<(), AppError> {
    if !confirm("Do you want to delete all your saved contacts?")? {
        return Ok(());
    }

    match book.delete_all()? {
        ClearOutcome::AlreadyEmpty => println!("No contacts have been saved yet!"),
        ClearOutcome::Cleared(count) => println!("{} saved contacts have been deleted", count),
    }
    Ok(())
}

fn export_contacts<S: ContactStore>(book: &ContactBook<S>, store_path: &Path) -> Result<(), AppError> {
    let des = ask("Export destination (press Enter for the default)")?;
    let des = if des.is_empty() { None } else { Some(des.as_str()) };

    let path = resolve_export_path(des, store_path)?;
    let total = export_contacts_to_vcard(&book.list_all()?, &path)?;

    println!("Successfully exported {} contacts to {:?}.", total, path);
    Ok(())
}
