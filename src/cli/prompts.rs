//! Interactive input helpers built on `dialoguer`.

use crate::error::Result;
use crate::models::{Field, FieldKind};
use crate::validation;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

const LEAVE_EMPTY: &str = "(leave empty)";

/// Shows a menu. `None` when the user cancels with Esc or q.
pub fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(selection)
}

/// Collects one form field, re-prompting until the input validates.
///
/// Returns the raw text; blank means NULL for optional fields.
pub fn field(field: &Field) -> Result<String> {
    let theme = ColorfulTheme::default();
    match field.kind {
        FieldKind::Password => {
            let value = Password::with_theme(&theme)
                .with_prompt(field.label)
                .allow_empty_password(!field.required)
                .interact()?;
            Ok(value)
        },
        FieldKind::Choice(options) => {
            let mut items: Vec<&str> = options.to_vec();
            if !field.required {
                items.push(LEAVE_EMPTY);
            }
            let index = Select::with_theme(&theme)
                .with_prompt(field.label)
                .items(&items)
                .default(0)
                .interact()?;
            Ok(options.get(index).map(|o| o.to_string()).unwrap_or_default())
        },
        _ => {
            let value: String = Input::with_theme(&theme)
                .with_prompt(field.label)
                .allow_empty(!field.required)
                .validate_with(|input: &String| -> std::result::Result<(), String> {
                    field.parse(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()?;
            Ok(value)
        },
    }
}

/// Prompts for a positive record ID.
pub fn id(label: &str) -> Result<i64> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validation::parse_id(label, input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(validation::parse_id(label, &raw)?)
}

/// Free-text prompt; the caller validates.
pub fn text(label: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()?;
    Ok(value)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
