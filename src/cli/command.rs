use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contacts-app", version, about = "Contact book kept in a CSV file")]
pub struct Cli {
    /// Contacts file (defaults to contacts.csv next to the executable)
    #[arg(long, global = true, env = "CONTACTS_FILE")]
    pub file: Option<PathBuf>,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new contact
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Phone number, 09 followed by 9 digits
        #[arg(long)]
        phone: String,

        /// Second phone number
        #[arg(long)]
        phone2: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Edit an existing contact
    /// Provide the current first and last name
    /// followed by as many new values as you wish to change
    Edit {
        /// Contact current first name
        #[arg(long)]
        first_name: String,

        /// Contact current last name
        #[arg(long)]
        last_name: String,

        #[arg(long)]
        new_first_name: Option<String>,

        #[arg(long)]
        new_last_name: Option<String>,

        #[arg(long)]
        new_phone: Option<String>,

        #[arg(long, conflicts_with = "clear_phone2")]
        new_phone2: Option<String>,

        #[arg(long, conflicts_with = "clear_email")]
        new_email: Option<String>,

        /// Remove the second phone number
        #[arg(long)]
        clear_phone2: bool,

        /// Remove the email address
        #[arg(long)]
        clear_email: bool,
    },
    /// Show a specific contact
    Show {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },
    /// List all saved contacts
    List,
    /// Delete a specific contact
    Delete {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },
    /// Delete all saved contacts
    Clear {
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },
    /// Export contacts to a vCard (.vcf) file
    Export {
        /// Destination file or directory
        #[arg(short, long)]
        des: Option<String>,
    },
}
