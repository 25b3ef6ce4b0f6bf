// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Card command - validate card details as the form would on blur

use super::Output;
use screenstate::card::{CardDetails, CardForm, FieldInput, FieldKind, FieldStatus};
use anyhow::Result;
use serde::Serialize;

/// Arguments for the card command
#[derive(Debug, Default)]
pub struct CardArgs {
    /// Cardholder name
    pub name: Option<String>,
    /// Card number
    pub number: Option<String>,
    /// Expiry month
    pub month: Option<String>,
    /// Expiry year
    pub year: Option<String>,
    /// Security code
    pub cvv: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldView {
    kind: FieldKind,
    title: &'static str,
    status: FieldStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardView {
    details: CardDetails,
    fields: Vec<FieldView>,
    submit_enabled: bool,
    valid: bool,
}

/// Type each given value into its field, then blur it
fn fill(form: &mut CardForm, kind: FieldKind, inputs: Vec<FieldInput>) {
    if inputs.is_empty() {
        return;
    }
    let field = form.field_mut(kind);
    field.focus();
    for input in inputs {
        field.edit(input);
    }
    field.blur();
}

/// Run the card command
pub fn run(args: CardArgs, out: Output) -> Result<()> {
    let mut form = CardForm::new();

    fill(&mut form, FieldKind::Name, args.name.map(FieldInput::Text).into_iter().collect());
    fill(&mut form, FieldKind::CardNumber, args.number.map(FieldInput::Text).into_iter().collect());
    fill(
        &mut form,
        FieldKind::Expiry,
        args.month
            .map(FieldInput::Month)
            .into_iter()
            .chain(args.year.map(FieldInput::Year))
            .collect(),
    );
    fill(&mut form, FieldKind::Cvv, args.cvv.map(FieldInput::Text).into_iter().collect());

    let view = CardView {
        details: form.details(),
        fields: form
            .fields()
            .iter()
            .map(|f| FieldView {
                kind: f.kind(),
                title: f.kind().title(),
                status: f.status(),
            })
            .collect(),
        submit_enabled: form.submit_enabled(),
        valid: form.is_valid(),
    };

    if out.json {
        return out.print_json(&view);
    }

    for field in &view.fields {
        let status = match field.status {
            FieldStatus::Valid => out.good("ok"),
            FieldStatus::Invalid => out.bad("Incorrect!"),
            FieldStatus::Unvalidated => "-".to_string(),
        };
        println!("  {:<22}{}", field.title.to_uppercase(), status);
    }
    let confirm = if view.submit_enabled { "enabled" } else { "disabled" };
    println!("Confirm: {confirm}");
    Ok(())
}
