use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;

use crate::{
    cli::input::{InputError, InputResult, Prompter},
    core::store::StoreError,
    customer::{CustomerDraft, KEEP_SENTINEL, NamePatch},
    report,
    restaurant::{Restaurant, SalesError},
    types::{Category, Code, MAX_CODE, REGULAR_CODE_BASE, format_centavos},
};

const RULE: &str = "===================================================";

/// Numbered menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `0`: leave the program.
    Exit,
    /// `1`: create a customer record.
    Add,
    /// `2`: show one record by code.
    Search,
    /// `3`: show the restaurant and every record.
    View,
    /// `4`: run the three-purchase sales simulation.
    Simulate,
    /// `5`: rename a customer.
    Update,
    /// `6`: delete a customer after confirmation.
    Remove,
}

impl MenuChoice {
    /// Menu number to action; `None` for numbers not on the menu.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            0 => Some(Self::Exit),
            1 => Some(Self::Add),
            2 => Some(Self::Search),
            3 => Some(Self::View),
            4 => Some(Self::Simulate),
            5 => Some(Self::Update),
            6 => Some(Self::Remove),
            _ => None,
        }
    }
}

/// One interactive customer-records session.
pub struct Session<R, W, G> {
    prompter: Prompter<R, W>,
    restaurant: Restaurant,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    /// Session over `restaurant`, reading from `input` and writing to
    /// `output`. `rng` picks the simulation buyers.
    pub fn new(restaurant: Restaurant, input: R, output: W, rng: G) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            restaurant,
            rng,
        }
    }

    /// Restaurant state as modified so far.
    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// Ends the session, returning the restaurant and the i/o handles.
    pub fn into_parts(self) -> (Restaurant, R, W) {
        let (input, output) = self.prompter.into_inner();
        (self.restaurant, input, output)
    }

    /// Greets the user and runs the menu until `0` or end of input.
    pub fn run(&mut self) -> InputResult<()> {
        match self.run_inner() {
            Err(InputError::Eof) => {
                debug!("event=session_end reason=eof");
                Ok(())
            }
            other => other,
        }
    }

    fn run_inner(&mut self) -> InputResult<()> {
        let username = self.prompter.read_nonempty("Enter your name: ")?;
        self.prompter.say(format!(
            "Welcome to {}, {username}! Choose from the options below.",
            self.restaurant.name()
        ))?;

        loop {
            self.print_menu()?;
            let n = self
                .prompter
                .read_int_in_range("Enter choice: ", 0, i64::MAX)?;
            self.prompter.say("")?;
            match MenuChoice::from_number(n) {
                Some(MenuChoice::Exit) => {
                    self.prompter.say(format!(
                        "Thank you for using {}'s Customer Record Manager. Goodbye!",
                        self.restaurant.name()
                    ))?;
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => self.prompter.say("Invalid choice. Please try again.")?,
            }
        }
    }

    /// Runs one menu action to completion.
    pub fn dispatch(&mut self, choice: MenuChoice) -> InputResult<()> {
        debug!("event=menu_choice choice={choice:?}");
        match choice {
            MenuChoice::Add => self.add_customer(),
            MenuChoice::Search => self.find_customer(),
            MenuChoice::View => self.view_records(),
            MenuChoice::Simulate => self.simulate_sales(),
            MenuChoice::Update => self.update_customer(),
            MenuChoice::Remove => self.delete_customer(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> InputResult<()> {
        self.prompter.say("")?;
        self.prompter.say("=== Customer Records Management ===")?;
        for line in [
            "1 | Add customer",
            "2 | Search for customer",
            "3 | View records",
            "4 | Simulate sales",
            "5 | Update customer",
            "6 | Remove customer",
            "0 | Exit",
        ] {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    fn add_customer(&mut self) -> InputResult<()> {
        self.prompter.say("=== Create Customer Record ===")?;
        self.prompter.say("Select Customer Type: ")?;
        self.prompter.say("C | Regular Customer")?;
        self.prompter.say("R | Renter")?;
        let choice = self.prompter.read_choice("Enter choice: ", &["C", "R"])?;
        let category = match choice.as_str() {
            "C" => Category::Regular,
            _ => Category::Renter,
        };

        if self.restaurant.registry().store(category).is_full() {
            return self
                .prompter
                .say("Sorry! The restaurant's customer record limit has been reached.");
        }

        let last_name = self.prompter.read_nonempty("Enter last name:  ")?;
        let first_name = self.prompter.read_nonempty("Enter first name: ")?;
        let draft = match category {
            Category::Regular => {
                let points = self.prompter.read_int_in_range(
                    "Enter loyalty points: ",
                    0,
                    i64::from(u32::MAX),
                )?;
                CustomerDraft::regular(first_name, last_name, points as u32)
            }
            Category::Renter => {
                let min = self.restaurant.policy().min_renter_deposit;
                let prompt = format!("Enter deposit (at least Php{}): ", format_centavos(min));
                let deposit = self.prompter.read_money_at_least(&prompt, min)?;
                CustomerDraft::renter(first_name, last_name, deposit)
            }
        };

        match self.restaurant.registry_mut().add_customer(draft) {
            Ok(code) => {
                self.prompter
                    .say(format!("Customer {code} was added to the record!"))?;
                self.show_customer(code)
            }
            Err(err) => self.report_store_error(&err),
        }
    }

    fn find_customer(&mut self) -> InputResult<()> {
        self.prompter.say("=== Search Customer Record ===")?;
        let empty = "Sorry! There are no customer records to search.";
        let Some(code) = self.read_code(empty)? else {
            return Ok(());
        };
        self.show_customer(code)
    }

    fn view_records(&mut self) -> InputResult<()> {
        self.prompter.say(RULE)?;
        let text = report::render_records(&self.restaurant);
        self.prompter.say(text.trim_end())
    }

    fn simulate_sales(&mut self) -> InputResult<()> {
        let plan = match self.restaurant.plan_simulation(&mut self.rng) {
            Ok(plan) => plan,
            Err(err) => return self.say_sales_error(&err),
        };

        self.prompter.say("=== Simulation Start ===")?;
        for (code, amount) in plan {
            let step = self.restaurant.simulate_step(code, amount);
            self.prompter.say(format!(
                "--- {} trying to buy food worth P{}",
                step.first_name,
                format_centavos(step.amount)
            ))?;
            match step.outcome {
                Ok(receipt) => self.prompter.say(format!(
                    "Success! {} has paid {}!",
                    receipt.customer.full_name(),
                    format_centavos(receipt.amount)
                ))?,
                Err(err) => self.say_sales_error(&err)?,
            }
            self.prompter.say("")?;
            let text = report::render_records(&self.restaurant);
            self.prompter.say(text.trim_end())?;
        }
        self.prompter.say("=== Simulation End ===")
    }

    fn update_customer(&mut self) -> InputResult<()> {
        self.prompter.say("=== Update Customer Record ===")?;
        let empty = "Sorry! There are no customer records to update.";
        let Some(code) = self.read_code(empty)? else {
            return Ok(());
        };
        if self.restaurant.registry().find(code).is_none() {
            return self.report_store_error(&StoreError::NotFound(code));
        }
        self.show_customer(code)?;

        let last = self
            .prompter
            .read_nonempty(&format!("Enter new last name ('{KEEP_SENTINEL}' to keep):  "))?;
        let first = self
            .prompter
            .read_nonempty(&format!("Enter new first name ('{KEEP_SENTINEL}' to keep): "))?;
        let patch = NamePatch::from_inputs(&first, &last);

        match self.restaurant.registry_mut().update(code, &patch) {
            Ok(()) => self
                .prompter
                .say(format!("Successfully updated customer {code}!")),
            Err(err) => self.report_store_error(&err),
        }
    }

    fn delete_customer(&mut self) -> InputResult<()> {
        self.prompter.say("=== Remove Customer Record ===")?;
        let empty = "Sorry! There are no customer records to remove.";
        let Some(code) = self.read_code(empty)? else {
            return Ok(());
        };
        if self.restaurant.registry().find(code).is_none() {
            return self.report_store_error(&StoreError::NotFound(code));
        }
        self.show_customer(code)?;

        if !self
            .prompter
            .confirm("Are you sure you want to delete this customer record? (Y to confirm): ")?
        {
            return self
                .prompter
                .say(format!("Cancelled deletion of customer record {code}."));
        }

        match self.restaurant.registry_mut().delete(code) {
            Ok(_) => self
                .prompter
                .say(format!("Successfully deleted customer record {code}.")),
            Err(err) => self.report_store_error(&err),
        }
    }

    /// Reads a customer code, or prints `empty_message` and returns `None`
    /// when there is nothing to look up.
    fn read_code(&mut self, empty_message: &str) -> InputResult<Option<Code>> {
        if self.restaurant.registry().is_empty() {
            self.prompter.say(empty_message)?;
            return Ok(None);
        }
        let code = self.prompter.read_int_in_range(
            "Enter customer code: ",
            i64::from(REGULAR_CODE_BASE + 1),
            i64::from(MAX_CODE),
        )?;
        Ok(Some(code as Code))
    }

    fn show_customer(&mut self, code: Code) -> InputResult<()> {
        match self.restaurant.registry().find(code) {
            Some(rec) => {
                let text = report::render_customer(rec);
                self.prompter.say("")?;
                self.prompter.say(text.trim_end())
            }
            None => self.report_store_error(&StoreError::NotFound(code)),
        }
    }

    fn say_sales_error(&mut self, err: &SalesError) -> InputResult<()> {
        match err {
            SalesError::Store(inner) => self.report_store_error(inner),
            other => self
                .prompter
                .say(format!("Sorry! {}.", capitalize_first(&other.to_string()))),
        }
    }

    fn report_store_error(&mut self, err: &StoreError) -> InputResult<()> {
        let message = match err {
            StoreError::NotFound(_) => {
                "Sorry! There is no existing customer record for that code.".to_string()
            }
            StoreError::CapacityExceeded { .. } => {
                "Sorry! The restaurant's customer record limit has been reached.".to_string()
            }
            StoreError::DuplicateCode(code) => {
                format!("Sorry! Customer code {code} already exists in the record.")
            }
            StoreError::CodeRangeExhausted(category) => format!(
                "Sorry! No more {} codes are available for new records.",
                category.label()
            ),
        };
        self.prompter.say(message)
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
