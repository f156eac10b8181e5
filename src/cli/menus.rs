//! Interactive menu loops.
//!
//! Navigation errors (the terminal went away) end the session; anything that goes wrong
//! inside an action is printed and the user lands back on the same menu.

use super::{display, prompts, App, DeleteOutcome};
use crate::db::Repository;
use crate::error::Result;
use crate::models::{Entity, Report, ReportCategory};
use colored::*;
use tracing::error;

const BACK: &str = "Back";

/// Root menu. Returns when the user picks Exit.
pub async fn run<R: Repository>(app: &App<R>) -> Result<()> {
    loop {
        display::banner("UPS MANAGEMENT SYSTEM");
        let options = [
            "Manage Tables (CRUD)",
            "Complex SQL Queries",
            "Initialize Database Schema",
            "Exit",
        ];

        match prompts::select("Select an option", &options)? {
            Some(0) => manage_tables(app).await?,
            Some(1) => complex_queries(app).await?,
            Some(2) => {
                let outcome = initialize_schema(app).await;
                show_outcome(outcome.map(|_| display::success("Schema is ready.")));
            },
            _ => {
                println!("{}", "Exiting... Have a great day!".green());
                return Ok(());
            },
        }
    }
}

async fn initialize_schema<R: Repository>(app: &App<R>) -> Result<()> {
    let spinner = display::spinner("Creating tables...")?;
    let outcome = app.init_schema().await;
    spinner.finish_and_clear();
    outcome
}

async fn manage_tables<R: Repository>(app: &App<R>) -> Result<()> {
    loop {
        display::banner("MANAGE TABLES");
        let mut options: Vec<&str> = Entity::ALL.iter().map(|e| e.name()).collect();
        options.push(BACK);

        match prompts::select("Select a table", &options)? {
            Some(index) if index < Entity::ALL.len() => {
                manage_entity(app, Entity::ALL[index]).await?
            },
            _ => return Ok(()),
        }
    }
}

async fn manage_entity<R: Repository>(app: &App<R>, entity: Entity) -> Result<()> {
    loop {
        display::banner(&format!("{} OPERATIONS", entity.name().to_uppercase()));
        let options = [
            "Add New Record",
            "Read All Records",
            "Find Record by ID",
            "Update Existing Record",
            "Delete Record",
            "Return to Tables Menu",
        ];

        let outcome = match prompts::select("Choose an action", &options)? {
            Some(0) => add(app, entity).await,
            Some(1) => read_all(app, entity).await,
            Some(2) => find(app, entity).await,
            Some(3) => update(app, entity).await,
            Some(4) => delete(app, entity).await,
            _ => return Ok(()),
        };
        show_outcome(outcome);
    }
}

async fn add<R: Repository>(app: &App<R>, entity: Entity) -> Result<()> {
    println!("{}", format!("New {} record", entity).bold());
    let mut inputs = Vec::with_capacity(entity.spec().fields.len());
    for field in entity.spec().fields {
        inputs.push(prompts::field(field)?);
    }

    let id = app.add_record(entity, &inputs).await?;
    display::success(&format!("{} record added with ID {}.", entity, id));
    Ok(())
}

async fn read_all<R: Repository>(app: &App<R>, entity: Entity) -> Result<()> {
    let spinner = display::spinner(&format!("Loading {}...", entity))?;
    let outcome = app.read_records(entity).await;
    spinner.finish_and_clear();

    display::print_result(&outcome?, &format!("No records found in {}.", entity));
    Ok(())
}

async fn find<R: Repository>(app: &App<R>, entity: Entity) -> Result<()> {
    let id = prompts::id(&format!("{} ID", entity))?;
    let result = app.find_record(entity, id).await?;
    display::print_result(&result, "");
    Ok(())
}

async fn update<R: Repository>(app: &App<R>, entity: Entity) -> Result<()> {
    let id = prompts::id(&format!("{} ID to update", entity))?;
    if !app.record_exists(entity, id).await? {
        display::warning(&format!("No {} record with ID {}.", entity, id));
        return Ok(());
    }

    let fields = entity.spec().fields;
    let labels: Vec<&str> = fields.iter().map(|f| f.label).collect();
    let Some(index) = prompts::select("Field to update", &labels)? else {
        return Ok(());
    };
    let field = &fields[index];
    let raw = prompts::field(field)?;

    app.update_record(entity, id, field.column, &raw).await?;
    display::success(&format!("{} updated for {} ID {}.", field.label, entity, id));
    Ok(())
}

async fn delete<R: Repository>(app: &App<R>, entity: Entity) -> Result<()> {
    let id = prompts::id(&format!("{} ID to delete", entity))?;
    if !prompts::confirm(&format!("Delete {} record {}?", entity, id))? {
        display::warning("Delete cancelled.");
        return Ok(());
    }

    match app.delete_record(entity, id).await? {
        DeleteOutcome::Deleted => {
            display::success(&format!("{} record {} deleted.", entity, id))
        },
        DeleteOutcome::NotFound => {
            display::warning(&format!("No {} record with ID {}.", entity, id))
        },
    }
    Ok(())
}

async fn complex_queries<R: Repository>(app: &App<R>) -> Result<()> {
    loop {
        display::banner("COMPLEX SQL QUERIES");
        let mut options: Vec<String> = ReportCategory::ALL
            .iter()
            .map(|c| format!("{} - {}", c.title(), c.description()))
            .collect();
        options.push(BACK.to_string());

        match prompts::select("Select a query category", &options)? {
            Some(index) if index < ReportCategory::ALL.len() => {
                report_category(app, ReportCategory::ALL[index]).await?
            },
            _ => return Ok(()),
        }
    }
}

async fn report_category<R: Repository>(app: &App<R>, category: ReportCategory) -> Result<()> {
    let reports = category.reports();
    loop {
        display::banner(&category.title().to_uppercase());
        let mut options: Vec<&str> = reports.iter().map(|r| r.title).collect();
        options.push(BACK);

        match prompts::select("Select a query", &options)? {
            Some(index) if index < reports.len() => {
                show_outcome(run_report(app, &reports[index]).await)
            },
            _ => return Ok(()),
        }
    }
}

async fn run_report<R: Repository>(app: &App<R>, report: &Report) -> Result<()> {
    println!("{}", report.description.dimmed());
    let raw = match report.param {
        Some(param) => Some(prompts::text(param.prompt())?),
        None => None,
    };

    let spinner = display::spinner("Running query...")?;
    let outcome = app.run_report(report, raw.as_deref()).await;
    spinner.finish_and_clear();

    println!("{}", report.title.bold());
    display::print_result(&outcome?, report.empty_message);
    Ok(())
}

/// Prints a failed action and keeps the session going.
fn show_outcome(outcome: Result<()>) {
    if let Err(e) = outcome {
        error!("Action failed: {:?}", e);
        display::failure(&e);
    }
}
