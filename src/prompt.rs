//! Line-oriented prompting for the interactive explorer.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::city::City;
use crate::filter::Selection;
use crate::pagination::Decision;
use crate::record::{DayOfWeek, Month};

/// Asks the user questions and shows them output.
pub trait Prompter {
    /// Shows `question` and returns the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Writer for report and page output.
    fn out(&mut self) -> &mut dyn Write;

    /// Re-asks until the answer parses as `T`.
    fn ask_until<T: FromStr>(&mut self, question: &str, invalid: &str) -> Result<T>
    where
        Self: Sized,
    {
        loop {
            let answer = self.ask(question)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out(), "{invalid}")?,
            }
        }
    }
}

/// A [`Prompter`] over any line reader and writer, normally stdin/stdout.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}  ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer");
        }
        Ok(line.trim().to_string())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}

impl FromStr for Decision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Decision::Yes),
            "no" | "n" => Ok(Decision::No),
            _ => Err(()),
        }
    }
}

/// Upper-cases the first letter of every word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn ask_name<P: Prompter>(prompter: &mut P) -> Result<String> {
    loop {
        let name = title_case(&prompter.ask("Before we get started please enter your name:")?);
        if !name.is_empty() {
            return Ok(name);
        }
        writeln!(prompter.out(), "Invalid entry! Name must not be empty!")?;
    }
}

pub fn ask_city<P: Prompter>(prompter: &mut P, name: &str) -> Result<City> {
    let city: City = prompter.ask_until(
        "Please select the city you would like to view. (Chicago, New York City, Washington):",
        &format!("{name}, please enter a valid selection!"),
    )?;
    writeln!(prompter.out(), "You have selected {city} as your city.")?;
    Ok(city)
}

pub fn ask_month<P: Prompter>(prompter: &mut P) -> Result<Selection<Month>> {
    let month = prompter.ask_until(
        "Please select the month you would like to view, or All. (January, February, ...):",
        "Please make a valid selection!",
    )?;
    match month {
        Selection::All => writeln!(prompter.out(), "You have selected to view all months.")?,
        Selection::Only(m) => writeln!(prompter.out(), "You have selected {m} as your month.")?,
    }
    Ok(month)
}

pub fn ask_day<P: Prompter>(prompter: &mut P) -> Result<Selection<DayOfWeek>> {
    let day = prompter.ask_until(
        "Please select the day of week you would like to view, or All. (Sunday, Monday, ...):",
        "Please make a valid selection!",
    )?;
    match day {
        Selection::All => writeln!(prompter.out(), "You have selected to view all week days.")?,
        Selection::Only(d) => {
            writeln!(prompter.out(), "You have selected {d} as your day of week.")?
        }
    }
    Ok(day)
}

pub fn ask_decision<P: Prompter>(prompter: &mut P, question: &str) -> Result<Decision> {
    prompter.ask_until(
        &format!("{question}\nPlease enter Yes or No:"),
        "Please enter a valid selection!",
    )
}
