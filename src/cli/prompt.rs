use crate::prelude::{AppError, Contact};
use std::io::{self, ErrorKind, Write};

/// Everything the numbered menu can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Create,
    Edit,
    ViewOne,
    ViewAll,
    DeleteOne,
    DeleteAll,
    Export,
    Quit,
}

// OUTPUT FUNCTIONS
pub fn show_menu() -> Result<(), AppError> {
    println!("\nContacts App Menu:");
    println!("1. Create a new contact");
    println!("2. Edit a contact");
    println!("3. View a specific contact");
    println!("4. View all saved contacts");
    println!("5. Delete a specific contact");
    println!("6. Delete all saved contacts");
    println!("7. Export contacts(VCARD) *.vcf file extension");
    println!("8. Quit");
    print!("Enter your choice: ");
    io::stdout().flush()?;
    Ok(())
}

pub fn parse_menu_choice(choice: &str) -> Result<MenuCommand, AppError> {
    match choice {
        "1" => Ok(MenuCommand::Create),
        "2" => Ok(MenuCommand::Edit),
        "3" => Ok(MenuCommand::ViewOne),
        "4" => Ok(MenuCommand::ViewAll),
        "5" => Ok(MenuCommand::DeleteOne),
        "6" => Ok(MenuCommand::DeleteAll),
        "7" => Ok(MenuCommand::Export),
        "8" => Ok(MenuCommand::Quit),
        _ => Err(AppError::ParseCommand(choice.to_string())),
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!("Contact Information:\n```\n{}\n```", contact)
}

pub fn display_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts have been saved yet!".to_string();
    }

    let mut output = format!("{} saved contacts:\n", contacts.len());
    for (mut i, c) in contacts.iter().enumerate() {
        i += 1;
        output.push_str(&format!(
            "{i:>3}. {:<15} {:<20} {:<12} {:<12} {}\n",
            c.first_name, c.last_name, c.primary_phone, c.secondary_phone, c.email
        ));
    }
    output
}

// INPUT FUNCTIONS

/// Reads one trimmed line. End of input is reported as `UnexpectedEof`.
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            ErrorKind::UnexpectedEof,
            "no more input",
        )));
    }
    Ok(input.trim().to_string())
}

pub fn ask(prompt: &str) -> Result<String, AppError> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    get_input()
}

/// Asks until `valid` accepts the answer.
pub fn retry<V>(prompt: &str, valid: V, complaint: &str) -> Result<String, AppError>
where
    V: Fn(&str) -> Result<bool, AppError>,
{
    loop {
        let input = ask(prompt)?;

        if valid(&input)? {
            break Ok(input);
        }

        eprintln!("{}", complaint);
    }
}

/// Asks a yes/no question until it gets y, yes, n or no.
pub fn confirm(question: &str) -> Result<bool, AppError> {
    loop {
        let answer = ask(&format!("{} (Y yes, N no)", question))?.to_lowercase();

        match answer.as_str() {
            "y" | "yes" => break Ok(true),
            "n" | "no" => break Ok(false),
            _ => eprintln!("Invalid choice. Please enter a valid option."),
        }
    }
}

pub fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == ErrorKind::UnexpectedEof)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_to_commands() -> Result<(), AppError> {
        assert_eq!(parse_menu_choice("1")?, MenuCommand::Create);
        assert_eq!(parse_menu_choice("7")?, MenuCommand::Export);
        assert_eq!(parse_menu_choice("8")?, MenuCommand::Quit);

        let err = parse_menu_choice("9").unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized command: '9'");
        Ok(())
    }

    #[test]
    fn list_rendering_numbers_each_contact() {
        let contacts = vec![
            Contact::new("Amin", "Khatoon Abadi", "09123456789", "", ""),
            Contact::new("Sara", "Ahmadi", "09350000000", "", "sara@example.com"),
        ];

        let output = display_contact_list(&contacts);

        assert!(output.starts_with("2 saved contacts:\n"));
        assert!(output.contains("  1. Amin"));
        assert!(output.contains("  2. Sara"));
        assert!(output.contains("sara@example.com"));
        assert_eq!(display_contact_list(&[]), "No contacts have been saved yet!");
    }

    #[test]
    fn eof_is_recognised() {
        let eof = AppError::Io(io::Error::new(ErrorKind::UnexpectedEof, "done"));
        let other = AppError::Io(io::Error::new(ErrorKind::NotFound, "missing"));

        assert!(is_end_of_input(&eof));
        assert!(!is_end_of_input(&other));
    }
}
