use crate::{
    cli::{
        menu::run_menu,
        prompt::{confirm, display_contact, display_contact_list},
    },
    config::{self, Config},
    prelude::{
        AppError, ClearOutcome, Contact, ContactBook, ContactKey, ContactUpdate, EditOutcome,
        command::{Cli, Commands},
        store::storage_port::{export_contacts_to_vcard, resolve_export_path},
    },
};
use clap::Parser;

pub fn run_app() -> Result<(), AppError> {
    config::load_env();

    let cli = Cli::parse();
    let config = Config::resolve(cli.file)?;
    let book = ContactBook::open(config.store())?;

    let Some(command) = cli.command else {
        return run_menu(&book, &config.store_path);
    };

    match command {
        Commands::Add {
            first_name,
            last_name,
            phone,
            phone2,
            email,
        } => {
            let mut new_contact = Contact::new(
                first_name,
                last_name,
                phone,
                phone2.unwrap_or_default(),
                email.unwrap_or_default(),
            );

            if new_contact.has_duplicate_phone() {
                println!("The second phone number repeats the first one and was left out");
                new_contact.secondary_phone.clear();
            }

            book.create(new_contact)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::Edit {
            first_name,
            last_name,
            new_first_name,
            new_last_name,
            new_phone,
            new_phone2,
            new_email,
            clear_phone2,
            clear_email,
        } => {
            let key = ContactKey::new(&first_name, &last_name);

            // An empty value is the same as leaving the flag out.
            let mut update = ContactUpdate::from_input(
                &new_first_name.unwrap_or_default(),
                &new_last_name.unwrap_or_default(),
                &new_phone.unwrap_or_default(),
                &new_phone2.unwrap_or_default(),
                &new_email.unwrap_or_default(),
            );
            if clear_phone2 {
                update.secondary_phone = Some(String::new());
            }
            if clear_email {
                update.email = Some(String::new());
            }

            match book.edit(&key, &update)? {
                EditOutcome::NoChange(_) => {
                    println!("Nothing was changed");
                }
                EditOutcome::Updated { after, .. } => {
                    println!("Contact updated successfully");
                    println!("{}", display_contact(&after));
                }
            }
            Ok(())
        }

        Commands::Show {
            first_name,
            last_name,
        } => {
            let contact = book.get(&ContactKey::new(&first_name, &last_name))?;
            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::List => {
            println!("{}", display_contact_list(&book.list_all()?));
            Ok(())
        }

        Commands::Delete {
            first_name,
            last_name,
        } => {
            let deleted = book.delete_one(&ContactKey::new(&first_name, &last_name))?;
            println!(
                "Contact: {} {} was successfully deleted",
                deleted.first_name, deleted.last_name
            );
            Ok(())
        }

        Commands::Clear { yes } => {
            if !yes && !confirm("Do you want to delete all your saved contacts?")? {
                return Ok(());
            }

            match book.delete_all()? {
                ClearOutcome::AlreadyEmpty => println!("No contacts have been saved yet!"),
                ClearOutcome::Cleared(count) => {
                    println!("{} saved contacts have been deleted", count)
                }
            }
            Ok(())
        }

        Commands::Export { des } => {
            let path = resolve_export_path(des.as_deref(), &config.store_path)?;
            let total = export_contacts_to_vcard(&book.list_all()?, &path)?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
