//! The menu loop and its three catalog actions.

use std::io::{BufRead, Write};

use showroom_catalog::{Catalog, Colors, Product, Selection, SquareFootage, UnitPrice};
use showroom_core::DomainError;

use crate::errors::{SessionError, user_message};
use crate::menu::{MENU, MenuChoice, SessionState};

pub const SELECT_AN_OPTION: &str = "Select an option: ";
pub const ENTER_NAME: &str = "Enter flooring name: ";
pub const ENTER_PRICE: &str = "Enter price per square foot: ";
pub const ENTER_COLORS: &str = "Enter available colors (comma separated): ";
pub const SELECT_BY_NUMBER: &str = "Select option by number: ";
pub const ENTER_SQFT: &str = "Enter square footage: ";

const FAREWELL: &str = "Goodbye!\n";

/// One interactive showroom session over an input/output pair.
///
/// Domain rejections are reported to the user and the loop continues; only
/// IO failures escape as [`SessionError`]. Closed input ends the session the
/// same way the Exit choice does.
pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            state: SessionState::Running,
        }
    }

    /// Start from the default seeded catalog.
    pub fn seeded(input: R, output: W) -> Self {
        Self::new(Catalog::seeded(), input, output)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Loop until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), SessionError> {
        while self.state == SessionState::Running {
            self.state = self.step()?;
        }
        self.output.flush()?;
        tracing::info!(products = self.catalog.len(), "showroom session ended");
        Ok(())
    }

    /// One menu turn: print the menu, read a choice, run the action.
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        self.output.write_all(MENU.as_bytes())?;
        let Some(raw) = self.prompt(SELECT_AN_OPTION)? else {
            return self.end_of_input();
        };

        match MenuChoice::parse(&raw) {
            Ok(choice) => {
                tracing::debug!(?choice, "menu choice");
                self.dispatch(choice)
            }
            Err(err) => self.reject(err),
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<SessionState, SessionError> {
        match choice {
            MenuChoice::View => self.view(),
            MenuChoice::Add => self.add(),
            MenuChoice::Calculate => self.calculate(),
            MenuChoice::Exit => {
                self.output.write_all(FAREWELL.as_bytes())?;
                Ok(SessionState::Terminated)
            }
        }
    }

    fn view(&mut self) -> Result<SessionState, SessionError> {
        write!(self.output, "{}", self.catalog.listing())?;
        Ok(SessionState::Running)
    }

    fn add(&mut self) -> Result<SessionState, SessionError> {
        let Some(name) = self.prompt(ENTER_NAME)? else {
            return self.end_of_input();
        };
        let Some(raw_price) = self.prompt(ENTER_PRICE)? else {
            return self.end_of_input();
        };
        let unit_price = match UnitPrice::parse(&raw_price) {
            Ok(price) => price,
            Err(err) => return self.reject(err),
        };
        let Some(raw_colors) = self.prompt(ENTER_COLORS)? else {
            return self.end_of_input();
        };

        let number = self
            .catalog
            .add(Product::new(name, unit_price, Colors::parse(&raw_colors)));
        tracing::info!(number, "product added");

        writeln!(self.output, "Option added.\n")?;
        Ok(SessionState::Running)
    }

    fn calculate(&mut self) -> Result<SessionState, SessionError> {
        if self.catalog.is_empty() {
            return self.reject(DomainError::EmptyCatalog);
        }
        write!(self.output, "{}", self.catalog.listing())?;

        let Some(raw_selection) = self.prompt(SELECT_BY_NUMBER)? else {
            return self.end_of_input();
        };
        let selection = match Selection::parse(&raw_selection) {
            Ok(selection) => selection,
            Err(err) => return self.reject(err),
        };
        let Some(raw_area) = self.prompt(ENTER_SQFT)? else {
            return self.end_of_input();
        };
        let area = match SquareFootage::parse(&raw_area) {
            Ok(area) => area,
            Err(err) => return self.reject(err),
        };

        match self.catalog.estimate(selection, area) {
            Ok(cost) => {
                tracing::debug!(selection = selection.number(), cost = cost.amount(), "cost estimated");
                writeln!(self.output, "Estimated cost: {cost}\n")?;
                Ok(SessionState::Running)
            }
            Err(err) => self.reject(err),
        }
    }

    /// Report a rejected input and stay in the loop.
    fn reject(&mut self, err: DomainError) -> Result<SessionState, SessionError> {
        tracing::debug!(error = %err, "input rejected");
        self.output.write_all(user_message(&err).as_bytes())?;
        Ok(SessionState::Running)
    }

    fn end_of_input(&mut self) -> Result<SessionState, SessionError> {
        tracing::debug!("input closed");
        writeln!(self.output)?;
        self.output.write_all(FAREWELL.as_bytes())?;
        Ok(SessionState::Terminated)
    }

    /// Print `text`, then read one line without its terminator.
    /// `None` means the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
