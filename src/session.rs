//! One query cycle at a time: select, load, filter, report, page, restart.

use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::city::City;
use crate::filter::{FilterCriteria, filter};
use crate::loader::TripSource;
use crate::output::{render_page, render_report};
use crate::pagination::{Decision, PageCursor, Step};
use crate::prompt::{self, Prompter};
use crate::record::{TripRecord, enrich};
use crate::stats::{StatisticsReport, StatsSettings};

/// Loads, enriches, filters and summarises one city without prompting.
///
/// Returns the enriched records alongside the report so callers can page
/// through the filtered view.
#[tracing::instrument(skip(source, settings), fields(city = %city, criteria = %criteria))]
pub fn run_query<S: TripSource + ?Sized>(
    source: &S,
    city: City,
    criteria: &FilterCriteria,
    settings: &StatsSettings,
) -> Result<(Vec<TripRecord>, StatisticsReport)> {
    let records = enrich(source.load(city)?, city)?;
    let view = filter(&records, criteria);
    info!(loaded = records.len(), selected = view.len(), "Records filtered");

    let report = StatisticsReport::compute(&view, city, settings);
    Ok((records, report))
}

/// Shows pages of `view` while the user keeps answering yes. Returns the
/// number of pages shown.
pub fn page_through<P: Prompter>(prompter: &mut P, view: &[&TripRecord]) -> Result<usize> {
    let mut cursor = PageCursor::new();
    let mut pages = 0;
    loop {
        let first_row = cursor.offset();
        let decision =
            prompt::ask_decision(prompter, "\nWould you like to view individual trip details?")?;
        match cursor.step(decision, view) {
            Step::Page(page) => {
                render_page(prompter.out(), page, first_row)?;
                pages += 1;
            }
            Step::Done => return Ok(pages),
        }
    }
}

/// Whether the user asked for another cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Restart,
    Quit,
}

/// Interactive explorer driving a [`Prompter`] against a [`TripSource`].
pub struct Session<S, P> {
    source: S,
    prompter: P,
    settings: StatsSettings,
}

impl<S: TripSource, P: Prompter> Session<S, P> {
    pub fn new(source: S, prompter: P, settings: StatsSettings) -> Self {
        Self {
            source,
            prompter,
            settings,
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Runs cycles until the user declines to restart.
    pub fn run(&mut self) -> Result<()> {
        let mut cycles = 0usize;
        loop {
            cycles += 1;
            if self.run_cycle()? == Outcome::Quit {
                info!(cycles, "Session finished");
                return Ok(());
            }
        }
    }

    /// Runs one full cycle with fresh selections and a fresh load.
    #[tracing::instrument(skip(self))]
    pub fn run_cycle(&mut self) -> Result<Outcome> {
        let p = &mut self.prompter;

        let name = prompt::ask_name(p)?;
        writeln!(p.out(), "Hello {name}! Let's explore some US bikeshare data!")?;
        let city = prompt::ask_city(p, &name)?;
        let month = prompt::ask_month(p)?;
        let day = prompt::ask_day(p)?;
        let criteria = FilterCriteria::new(month, day);

        let (records, report) = run_query(&self.source, city, &criteria, &self.settings)?;
        render_report(p.out(), &report, &criteria)?;

        let view = filter(&records, &criteria);
        let pages = page_through(p, &view)?;
        info!(pages, "Pagination finished");

        let restart = prompt::ask_decision(
            p,
            &format!("\n{name}, would you like to view data for another city or time frame?"),
        )?;
        Ok(match restart {
            Decision::Yes => Outcome::Restart,
            Decision::No => Outcome::Quit,
        })
    }
}
