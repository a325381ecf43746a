//! Interactive dashboard browser.
//!
//! Shows the current view, asks which section to show next or how to change
//! the date filter, and repeats until the user quits. A rejected input is
//! reported and the previous selection is kept.

use chrono::NaiveDate;
use console::style;
use dialoguer::{Input, Select};
use waste_dashboard_dataset_models::DateRange;
use waste_dashboard_view::Session;
use waste_dashboard_view_models::Section;

use crate::render::render_view;

/// One entry of the browse menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Show(Section),
    FilterDates,
    ResetDates,
    Quit,
}

impl Action {
    fn all() -> Vec<Self> {
        Section::all()
            .iter()
            .copied()
            .map(Self::Show)
            .chain([Self::FilterDates, Self::ResetDates, Self::Quit])
            .collect()
    }

    fn label(self, session: &Session) -> String {
        match self {
            Self::Show(section) => section.label().to_string(),
            Self::FilterDates => format!("Select date range ({})", session.state().date_range),
            Self::ResetDates => "Reset date range".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Runs the browse loop on `session`.
///
/// # Errors
///
/// Returns an error if a prompt fails, e.g. because the terminal is not
/// interactive.
pub fn browse(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", style("Waste Management Dashboard").bold().green());
    println!(
        "Welcome to the Waste Management Dashboard. Here, you can view key insights \
         into waste collection, recycling efforts, and waste distribution."
    );
    println!();
    show(session);

    let actions = Action::all();
    loop {
        let labels: Vec<String> = actions.iter().map(|a| a.label(session)).collect();
        let current = actions
            .iter()
            .position(|a| *a == Action::Show(session.state().section))
            .unwrap_or(0);

        let idx = Select::new()
            .with_prompt("Choose a Section")
            .items(&labels)
            .default(current)
            .interact()?;

        match actions[idx] {
            Action::Show(section) => session.select_section(section),
            Action::FilterDates => {
                let range = prompt_range(session.state().date_range)?;
                if let Err(e) = session.set_date_range(range) {
                    println!("{}", style(e).red());
                    continue;
                }
            }
            Action::ResetDates => session.reset_date_range(),
            Action::Quit => break,
        }

        show(session);
    }

    println!("Thank you for exploring the Waste Management Dashboard!");
    Ok(())
}

fn show(session: &Session) {
    match session.view() {
        Ok(view) => println!("{}", render_view(&view)),
        Err(e) => println!("{}", style(e).red()),
    }
}

/// Prompts for both bounds, offering `current` as the defaults.
pub fn prompt_range(current: DateRange) -> Result<DateRange, dialoguer::Error> {
    let start: NaiveDate = Input::new()
        .with_prompt("From (YYYY-MM-DD)")
        .default(current.start)
        .interact_text()?;
    let end: NaiveDate = Input::new()
        .with_prompt("To (YYYY-MM-DD)")
        .default(current.end)
        .interact_text()?;
    Ok(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_section_then_filters() {
        let actions = Action::all();
        assert_eq!(actions.len(), Section::all().len() + 3);
        assert_eq!(actions[0], Action::Show(Section::KeyMetrics));
        assert_eq!(actions[4], Action::Show(Section::RawTable));
        assert_eq!(actions.last(), Some(&Action::Quit));
    }
}
