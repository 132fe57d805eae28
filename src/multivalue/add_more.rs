//! Add-more trigger handlers
//!
//! The interaction runs in two phases that share nothing but the session
//! store: the submit phase bumps the stored row count and asks for a
//! rebuild, the render phase returns the rebuilt field for the client to
//! splice in at its wrapper id.

use super::state::{get_element_state, set_element_state};
use crate::element::{Element, TriggerAction};
use crate::error::{ElementError, Result};
use crate::session::FormState;
use serde::Serialize;
use tracing::{debug, warn};

/// Partial update returned by the render phase
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AjaxUpdate {
    /// Nothing to replace on the client
    NoUpdate,
    /// Replace the container `wrapper` with `element`
    Replace { wrapper: String, element: Element },
}

/// Element owning the trigger at `trigger`, one level up
fn owning_element<'f>(form: &'f Element, trigger: &[String]) -> Result<&'f Element> {
    let (_, owner) = trigger
        .split_last()
        .ok_or_else(|| ElementError::not_found(trigger))?;
    form.find(owner).ok_or_else(|| ElementError::not_found(owner))
}

/// Submit phase: add one row to the field owning the trigger.
///
/// Returns the new row count.
pub fn add_more_submit(
    form: &Element,
    trigger: &[String],
    form_state: &mut FormState<'_>,
) -> Result<usize> {
    let element = owning_element(form, trigger)?;
    if element.as_multi_value().is_none() {
        return Err(ElementError::NotMultiValue {
            array_parents: element.array_parents.join("/"),
        });
    }
    let name = element.name().ok_or(ElementError::MissingPath)?;

    let mut element_state =
        get_element_state(form_state.store(), &element.parents, name)?.unwrap_or_default();
    element_state.items_count += 1;
    element_state.array_parents = element.array_parents.clone();
    set_element_state(form_state.store_mut(), &element.parents, name, &element_state)?;
    form_state.set_rebuild();

    debug!(
        element = %element.parents.join("/"),
        items_count = element_state.items_count,
        "added row, rebuilding form"
    );
    Ok(element_state.items_count)
}

/// Render phase: the rebuilt field, or no update for bounded fields
pub fn add_more_ajax(form: &Element, trigger: &[String]) -> Result<AjaxUpdate> {
    let element = owning_element(form, trigger)?;
    let Some(settings) = element.as_multi_value() else {
        return Err(ElementError::NotMultiValue {
            array_parents: element.array_parents.join("/"),
        });
    };

    if !settings.cardinality.is_unlimited() {
        warn!(
            element = %element.parents.join("/"),
            "stale add-more trigger for bounded field"
        );
        return Ok(AjaxUpdate::NoUpdate);
    }
    let Some(wrapper) = settings.wrapper_id.clone() else {
        warn!(
            element = %element.parents.join("/"),
            "add-more render requested for field without wrapper"
        );
        return Ok(AjaxUpdate::NoUpdate);
    };

    Ok(AjaxUpdate::Replace {
        wrapper,
        element: element.clone(),
    })
}

fn trigger_action(form: &Element, trigger: &[String]) -> Result<TriggerAction> {
    form.find(trigger)
        .and_then(Element::as_trigger)
        .map(|t| t.action)
        .ok_or_else(|| ElementError::not_found(trigger))
}

/// Route a trigger activation to its submit handler
pub fn dispatch_submit(
    form: &Element,
    trigger: &[String],
    form_state: &mut FormState<'_>,
) -> Result<()> {
    match trigger_action(form, trigger)? {
        TriggerAction::AddMore => add_more_submit(form, trigger, form_state).map(|_| ()),
    }
}

/// Route a follow-up fetch to the trigger's render handler.
///
/// The rebuild may have dropped the trigger, e.g. after the field became
/// bounded. A missing trigger under a multi-value owner is then rendered by
/// the add-more handler, which answers with no update.
pub fn dispatch_render(form: &Element, trigger: &[String]) -> Result<AjaxUpdate> {
    if form.find(trigger).is_none() {
        let owner = owning_element(form, trigger)?;
        if owner.as_multi_value().is_none() {
            return Err(ElementError::not_found(trigger));
        }
        debug!(
            trigger = %trigger.join("/"),
            "trigger missing from rebuilt form"
        );
        return add_more_ajax(form, trigger);
    }
    match trigger_action(form, trigger)? {
        TriggerAction::AddMore => add_more_ajax(form, trigger),
    }
}
