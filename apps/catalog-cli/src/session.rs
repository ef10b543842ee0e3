//! # Menu Session
//!
//! The interactive loop. Owns the repository for its whole lifetime.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   print MENU ──► read choice ──► Command::from_choice                  │
//! │        ▲                              │                                 │
//! │        │            None ─────────────┤──► "Invalid option."           │
//! │        │                              │                                 │
//! │        │       Some(cmd) ──► match cmd ──► flow ──► repository call    │
//! │        │                              │                                 │
//! │        └──────────────────────────────┘    Exit / EOF ──► return       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation errors from the repository are printed as `Error: <message>`
//! and the loop continues. Only I/O and encoding failures end the session
//! with an error.
//!
//! The session talks to the user only through a [`Prompter`], so the same
//! loop runs on a terminal and over a scripted [`Console`](crate::prompt::Console).

use catalog_core::{Product, ProductId, ProductPatch, ProductRepository};
use tracing::{debug, info, warn};

use crate::command::{Command, MENU};
use crate::config::CatalogConfig;
use crate::display::{format_product, render_list, render_product};
use crate::error::{CliError, CliResult};
use crate::prompt::Prompter;

/// Products created by `--seed`.
pub const SEED_PRODUCTS: &[(&str, f64, i64)] = &[("Teclado", 99.9, 10), ("Mouse", 59.5, 25)];

/// An interactive catalog session.
#[derive(Debug)]
pub struct Session<P> {
    prompter: P,
    repo: ProductRepository,
    config: CatalogConfig,
}

impl<P: Prompter> Session<P> {
    /// Starts a session with an empty repository.
    pub fn new(prompter: P, config: CatalogConfig) -> Self {
        Session {
            prompter,
            repo: ProductRepository::new(),
            config,
        }
    }

    /// Read access to the repository.
    pub fn repository(&self) -> &ProductRepository {
        &self.repo
    }

    /// Ends the session and gives back the prompter.
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Creates the sample products.
    pub fn seed(&mut self) -> CliResult<()> {
        for &(name, price, stock) in SEED_PRODUCTS {
            let product = self.repo.create(name, price, stock)?;
            debug!(id = %product.id(), name = product.name(), "seeded product");
        }
        info!(count = SEED_PRODUCTS.len(), "catalog seeded");
        Ok(())
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(CliError::InputClosed) => {
                    info!("input closed, leaving session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Handles one menu round. Returns `false` when the session should end.
    fn step(&mut self) -> CliResult<bool> {
        let choice = self.prompter.prompt_line(MENU)?;

        let Some(command) = Command::from_choice(&choice) else {
            warn!(choice = %choice, "invalid menu option");
            self.prompter.say("Invalid option.")?;
            return Ok(true);
        };

        debug!(?command, "dispatching command");

        self.prompter.say(&format!("\n{}", command.title()))?;

        match command {
            Command::Create => self.create_flow()?,
            Command::List => self.list_flow()?,
            Command::Show => self.show_flow()?,
            Command::Update => self.update_flow()?,
            Command::Delete => self.delete_flow()?,
            Command::Exit => return Ok(false),
        }

        Ok(true)
    }

    fn create_flow(&mut self) -> CliResult<()> {
        let name = self.prompter.prompt_line("Name: ")?;
        let price = self.prompter.prompt_float("Price: ")?;
        let stock = self.prompter.prompt_int("Stock: ")?;

        match self.repo.create(&name, price, stock) {
            Ok(product) => {
                info!(id = %product.id(), name = product.name(), "product created");
                let line = self.format(&product);
                self.prompter.say(&format!("Created: {line}"))
            }
            Err(e) => {
                warn!(field = e.field(), error = %e, "create rejected");
                self.prompter.say(&format!("Error: {e}"))
            }
        }
    }

    fn list_flow(&mut self) -> CliResult<()> {
        let products = self.repo.list_all();
        match render_list(&products, self.config.format, &self.config.currency_symbol)? {
            Some(text) => self.prompter.say(&text),
            None => self.prompter.say("No products registered"),
        }
    }

    fn show_flow(&mut self) -> CliResult<()> {
        let found = self.prompt_id()?.and_then(|id| self.repo.get_by_id(id));
        match found {
            Some(product) => {
                let text =
                    render_product(&product, self.config.format, &self.config.currency_symbol)?;
                self.prompter.say(&text)
            }
            None => self.prompter.say("Not found"),
        }
    }

    fn update_flow(&mut self) -> CliResult<()> {
        let Some(current) = self.prompt_id()?.and_then(|id| self.repo.get_by_id(id)) else {
            return self.prompter.say("Not found");
        };

        let mut patch = ProductPatch::new();
        patch.name = self.prompter.prompt_optional_line(&format!(
            "New name (Enter to keep '{}'): ",
            current.name()
        ))?;
        patch.price = self.prompter.prompt_optional_float(&format!(
            "New price (Enter to keep {:.2}): ",
            current.price()
        ))?;
        patch.stock = self.prompter.prompt_optional_int(&format!(
            "New stock (Enter to keep {}): ",
            current.stock()
        ))?;

        if patch.is_empty() {
            debug!(id = %current.id(), "nothing entered, product left as is");
            let line = self.format(&current);
            return self.prompter.say(&format!("Unchanged: {line}"));
        }

        match self.repo.update(current.id(), patch) {
            Ok(Some(product)) => {
                info!(id = %product.id(), "product updated");
                let line = self.format(&product);
                self.prompter.say(&format!("Updated: {line}"))
            }
            // Removed between lookup and update; cannot happen in a single session
            Ok(None) => self.prompter.say("Not found"),
            Err(e) => {
                warn!(id = %current.id(), field = e.field(), error = %e, "update rejected");
                self.prompter.say(&format!("Error: {e}"))
            }
        }
    }

    fn delete_flow(&mut self) -> CliResult<()> {
        let deleted = match self.prompt_id()? {
            Some(id) => self.repo.delete(id),
            None => false,
        };

        if deleted {
            info!("product deleted");
            self.prompter.say("Deleted")
        } else {
            self.prompter.say("Not found")
        }
    }

    /// Asks for an id. Negative numbers can never match, so they map to `None`.
    fn prompt_id(&mut self) -> CliResult<Option<ProductId>> {
        let raw = self.prompter.prompt_int("ID: ")?;
        Ok(u64::try_from(raw).ok().map(ProductId::new))
    }

    fn format(&self, product: &Product) -> String {
        format_product(product, &self.config.currency_symbol)
    }
}
