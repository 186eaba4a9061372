pub mod prompt;
pub mod render;

use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use crate::ui::prelude::*;
use crate::users::{RemoveOutcome, UserDraft, UsersData, ValidationError};

use prompt::Prompter;

/// Top-level commands recognized at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Remove,
    Edit,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "list" => Ok(Action::List),
            "add" => Ok(Action::Add),
            "remove" => Ok(Action::Remove),
            "edit" => Ok(Action::Edit),
            "quit" => Ok(Action::Quit),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// Prompt-dispatch loop. Runs until the operator picks `quit`; every other
/// outcome, including unrecognized input, reports and returns to the
/// prompt.
pub fn run(store: &mut UsersData, prompter: &mut dyn Prompter) -> Result<()> {
    loop {
        let answer = prompter.action()?;
        match answer.parse::<Action>() {
            Ok(Action::List) => render::show_all(store),
            Ok(Action::Add) => add_user(store, prompter)?,
            Ok(Action::Remove) => remove_user(store, prompter)?,
            Ok(Action::Edit) => edit_user(store, prompter)?,
            Ok(Action::Quit) => {
                emit(Level::Info, "app.quit", "Bye bye!", None);
                return Ok(());
            }
            Err(unknown) => {
                debug("app.action", &unknown.to_string());
                emit(Level::Error, "app.unknown_action", "Command not found", None);
            }
        }
    }
}

fn add_user(store: &mut UsersData, prompter: &mut dyn Prompter) -> Result<()> {
    let draft = collect_draft(prompter, "Enter name", "Enter age")?;
    report_add(store.add(draft));
    Ok(())
}

fn remove_user(store: &mut UsersData, prompter: &mut dyn Prompter) -> Result<()> {
    let name = prompter.text("Enter name to remove")?;
    report_remove(&store.remove(&name));
    Ok(())
}

/// Edit is remove-then-add. When the old name has no match, the removal
/// reports not-found and the add still goes through, so editing a missing
/// user degrades to a plain add.
fn edit_user(store: &mut UsersData, prompter: &mut dyn Prompter) -> Result<()> {
    let old_name = prompter.text("Enter name to edit")?;
    let draft = collect_draft(prompter, "New name", "New age")?;
    report_remove(&store.remove(&old_name));
    report_add(store.add(draft));
    Ok(())
}

fn collect_draft(
    prompter: &mut dyn Prompter,
    name_label: &str,
    age_label: &str,
) -> Result<UserDraft> {
    let name = prompter.text(name_label)?;
    let age = prompter.text(age_label)?;
    Ok(UserDraft::new(name, age))
}

fn report_add(outcome: Result<(), ValidationError>) {
    match outcome {
        Ok(()) => emit(
            Level::Success,
            "users.added",
            "User has been successfully added!",
            None,
        ),
        Err(reason) => emit(
            Level::Error,
            "users.rejected",
            &format!("Wrong data: {reason}"),
            None,
        ),
    }
}

fn report_remove(outcome: &RemoveOutcome) {
    match outcome {
        RemoveOutcome::Removed(_) => emit(Level::Success, "users.removed", "User deleted!", None),
        RemoveOutcome::NotFound => emit(Level::Error, "users.not_found", "User not found...", None),
    }
}
