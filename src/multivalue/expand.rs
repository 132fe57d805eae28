//! Expansion of a multi-value element into its rows

use super::settings::Cardinality;
use super::state::{get_element_state, set_element_state, ElementState};
use crate::config::MultiValueConfig;
use crate::element::{
    AjaxSettings, Element, ElementKind, ItemValues, TitleDisplay, Trigger, TriggerAction,
};
use crate::error::{ElementError, Result};
use crate::session::FormState;
use serde_json::Value;
use tracing::{debug, trace};

/// Key of the ordering control within each row
pub const WEIGHT_KEY: &str = "_weight";

/// Key of the add-more trigger within the element
pub const ADD_MORE_KEY: &str = "add_more";

/// Replace the child template of a multi-value element with one copy per row.
///
/// The row count comes from the session for unlimited fields (initialized
/// from the default value on first build) and from the bound otherwise.
/// Unlimited fields also get a wrapper container and an add-more trigger
/// unless the build is programmatic.
pub fn process_element(
    element: &mut Element,
    form_state: &mut FormState<'_>,
    config: &MultiValueConfig,
) -> Result<()> {
    let Some(settings) = element.as_multi_value() else {
        return Err(ElementError::NotMultiValue {
            array_parents: element.array_parents.join("/"),
        });
    };
    let cardinality = settings.cardinality;
    let add_more_label = settings
        .add_more_label
        .clone()
        .unwrap_or_else(|| config.add_more_label.clone());

    element.tree = true;
    let parents = element.parents.clone();
    let element_name = element.name().ok_or(ElementError::MissingPath)?.to_string();

    let element_state = match get_element_state(form_state.store(), &parents, &element_name)? {
        Some(state) => state,
        None => {
            let items = ItemValues::from_default(&parents, element.default_value.as_ref())?;
            let state = ElementState::new(items.len());
            set_element_state(form_state.store_mut(), &parents, &element_name, &state)?;
            debug!(
                element = %parents.join("/"),
                items_count = state.items_count,
                "initialized element state"
            );
            state
        }
    };

    let row_count = match cardinality {
        Cardinality::Unlimited => element_state.items_count,
        Cardinality::Limited(bound) => bound.get(),
    };

    let template = std::mem::take(&mut element.children);
    let values = element
        .value
        .as_ref()
        .map(ItemValues::from_submitted)
        .unwrap_or_default();
    let delta = row_count.saturating_sub(1);

    for index in 0..row_count {
        let mut row = Element::container().with_children(template.clone());
        if let Some(value) = values.get(index) {
            seed_row(&mut row, value);
        }
        row.children.insert(
            WEIGHT_KEY.to_string(),
            weight_control(index, delta, config.weight_order),
        );
        element.children.insert(index.to_string(), row);
    }

    if cardinality.is_unlimited() && !form_state.is_programmed() {
        let id_prefix = parents.join("-");
        let wrapper_id =
            form_state.unique_id(&format!("{id_prefix}-{}", config.wrapper_suffix));
        element.prefix = Some(format!("<div id=\"{wrapper_id}\">"));
        element.suffix = Some("</div>".to_string());

        let trigger = Trigger {
            name: format!("{}_add_more", parents.join("_")),
            label: add_more_label,
            action: TriggerAction::AddMore,
            limit_validation: vec![element.array_parents.clone()],
            ajax: Some(AjaxSettings {
                wrapper: wrapper_id.clone(),
                effect: config.ajax_effect.clone(),
            }),
        };
        element
            .children
            .insert(ADD_MORE_KEY.to_string(), Element::submit(trigger));

        if let ElementKind::MultiValue(settings) = &mut element.kind {
            settings.wrapper_id = Some(wrapper_id);
        }
    }

    Ok(())
}

/// Set the default of every direct child that has a value in `value`
pub fn seed_row(row: &mut Element, value: &Value) {
    let Some(values) = value.as_object() else {
        return;
    };
    for (key, child) in row.children.iter_mut() {
        if let Some(child_value) = values.get(key) {
            trace!(key = %key, "seeding row child");
            child.default_value = Some(child_value.clone());
        }
    }
}

/// Ordering control for the row at `index`
pub fn weight_control(index: usize, delta: usize, order: i32) -> Element {
    Element {
        kind: ElementKind::Weight { delta },
        title: Some(format!("Weight for row {}", index + 1)),
        title_display: TitleDisplay::Invisible,
        default_value: Some(Value::from(index)),
        weight: order,
        ..Element::default()
    }
}
