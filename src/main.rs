//! contact-forms - Command-line front end.
//!
//! Drives the form controllers against a running contact-storage service:
//! `create` and `edit` go through the full validate/panel/submit path,
//! `list` and `delete` call the store directly.

use anyhow::{bail, Result};
use contact_forms::{
    ApiContactStore, Config, ContactApiClient, ContactStore, CreateContactForm, EditContactForm,
    ErrorPanel, Field, SubmitOutcome,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage:
  contact-forms create <field>=<value> ...
  contact-forms edit <id> <field>=<value> ...
  contact-forms list
  contact-forms delete <id>

Fields: first_name, last_name, email, telephone, company, address, notes";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logging goes to stderr so command output stays clean on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using contact API at {}", config.api_base_url);

    let client = ContactApiClient::new(&config);
    let store = Arc::new(ApiContactStore::new(client)) as Arc<dyn ContactStore>;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!("{}", USAGE);
    };

    match command.as_str() {
        "create" => {
            let mut form = CreateContactForm::new(store);
            apply_field_args(&args[1..], |field, value| form.set_field(field, value))?;

            match form.submit().await {
                SubmitOutcome::Saved => println!("Contact created."),
                SubmitOutcome::Invalid => {
                    print_panel(form.panel());
                    bail!("contact not created");
                }
                SubmitOutcome::Failed => bail!("submission failed, see log for details"),
            }
        }
        "edit" => {
            let Some(id) = args.get(1) else {
                bail!("{}", USAGE);
            };
            let id: i64 = id.parse()?;

            let mut form = EditContactForm::load(store, id).await?;
            apply_field_args(&args[2..], |field, value| form.set_field(field, value))?;

            match form.submit().await {
                SubmitOutcome::Saved => println!("Contact {} updated.", id),
                SubmitOutcome::Invalid => {
                    print_panel(form.panel());
                    bail!("contact not updated");
                }
                SubmitOutcome::Failed => bail!("submission failed, see log for details"),
            }
        }
        "list" => {
            for contact in store.list().await? {
                println!("{:>6}  {}", contact.id, contact.fields.display_name());
            }
        }
        "delete" => {
            let Some(id) = args.get(1) else {
                bail!("{}", USAGE);
            };
            let id: i64 = id.parse()?;
            store.delete(id).await?;
            println!("Contact {} deleted.", id);
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}

/// Parse `field=value` arguments and feed them into a form.
fn apply_field_args(args: &[String], mut set: impl FnMut(Field, String)) -> Result<()> {
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            bail!("expected <field>=<value>, got: {}\n\n{}", arg, USAGE);
        };
        let field: Field = name.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        set(field, value.to_string());
    }
    Ok(())
}

/// Render the error panel the way the UI would: one line per failing field.
fn print_panel(panel: &ErrorPanel) {
    if !panel.is_visible() {
        return;
    }
    eprintln!("Validation Error");
    for (field, message) in panel.current().iter() {
        eprintln!("  {}: {}", field.label(), message);
    }
}
