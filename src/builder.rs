//! Render tree builder
//!
//! Walks a form definition for one request: assigns every element its
//! structural path and runtime location, resolves input values and runs the
//! multi-value hooks.

use crate::config::MultiValueConfig;
use crate::element::Element;
use crate::error::Result;
use crate::multivalue::{process_element, value_callback, RawInput};
use crate::session::FormState;
use serde_json::Value;
use tracing::debug;

/// Builds form definitions into render trees
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    config: MultiValueConfig,
}

impl FormBuilder {
    pub fn new(config: MultiValueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MultiValueConfig {
        &self.config
    }

    /// Build `form` for the current request.
    ///
    /// `input` is the submitted user input of the whole form, `None` for an
    /// initial render.
    pub fn build(
        &self,
        mut form: Element,
        form_state: &mut FormState<'_>,
        input: Option<&Value>,
    ) -> Result<Element> {
        debug!(
            submitted = input.is_some(),
            programmed = form_state.is_programmed(),
            "building form"
        );
        form_state.begin_build();
        form.parents.clear();
        form.array_parents.clear();
        self.build_children(&mut form, form_state, input)?;
        Ok(form)
    }

    fn build_element(
        &self,
        element: &mut Element,
        form_state: &mut FormState<'_>,
        input: Option<&Value>,
    ) -> Result<()> {
        let submitted = input.and_then(|input| lookup(input, &element.parents));

        if element.as_multi_value().is_some() {
            let raw = match submitted {
                Some(value) => RawInput::Submitted(value.clone()),
                None => RawInput::NoSubmission,
            };
            element.value = Some(value_callback(
                &element.parents,
                element.default_value.as_ref(),
                &element.children,
                raw,
            )?);
            process_element(element, form_state, &self.config)?;
        } else if element.has_input() {
            element.value = submitted
                .cloned()
                .or_else(|| element.default_value.clone());
        }

        self.build_children(element, form_state, input)
    }

    fn build_children(
        &self,
        parent: &mut Element,
        form_state: &mut FormState<'_>,
        input: Option<&Value>,
    ) -> Result<()> {
        let tree = parent.tree;
        let parents = parent.parents.clone();
        let array_parents = parent.array_parents.clone();

        for (key, child) in parent.children.iter_mut() {
            child.tree |= tree;
            child.array_parents = extend(&array_parents, key);
            child.parents = if tree {
                extend(&parents, key)
            } else {
                vec![key.clone()]
            };
            self.build_element(child, form_state, input)?;
        }
        Ok(())
    }
}

fn extend(path: &[String], key: &str) -> Vec<String> {
    let mut extended = path.to_vec();
    extended.push(key.to_string());
    extended
}

/// Value at a structural path within submitted input
pub fn lookup<'v>(input: &'v Value, path: &[String]) -> Option<&'v Value> {
    path.iter().try_fold(input, |node, key| match node {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multivalue::{Cardinality, MultiValue, ADD_MORE_KEY, WEIGHT_KEY};
    use crate::session::MemorySessionStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn contact_form() -> Element {
        Element::container()
            .with_child("name", Element::field("textfield").with_default(json!("Ada")))
            .with_child(
                "phones",
                Element::multi_value(MultiValue::new(Cardinality::limited(2).unwrap()))
                    .with_default(json!(["555-0100"]))
                    .with_child("number", Element::field("tel")),
            )
    }

    mod paths {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_top_level_parents() {
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(contact_form(), &mut FormState::new(&mut store), None)
                .unwrap();
            let name = form.child("name").unwrap();
            assert_eq!(name.parents, path(&["name"]));
            assert_eq!(name.array_parents, path(&["name"]));
        }

        #[test]
        fn test_rows_nest_under_tree_element() {
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(contact_form(), &mut FormState::new(&mut store), None)
                .unwrap();
            let number = form.find(&path(&["phones", "1", "number"])).unwrap();
            assert_eq!(number.parents, path(&["phones", "1", "number"]));
            assert!(number.tree);
        }

        #[test]
        fn test_flat_container_does_not_nest_parents() {
            let form = Element::container().with_child(
                "group",
                Element::container().with_child("inner", Element::field("textfield")),
            );
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(form, &mut FormState::new(&mut store), None)
                .unwrap();
            let inner = form.find(&path(&["group", "inner"])).unwrap();
            assert_eq!(inner.parents, path(&["inner"]));
            assert_eq!(inner.array_parents, path(&["group", "inner"]));
        }

        #[test]
        fn test_tree_container_nests_parents() {
            let form = Element::container().with_child(
                "group",
                Element::container()
                    .with_tree(true)
                    .with_child("inner", Element::field("textfield")),
            );
            let input = json!({"group": {"inner": "x"}});
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(form, &mut FormState::new(&mut store), Some(&input))
                .unwrap();
            let inner = form.find(&path(&["group", "inner"])).unwrap();
            assert_eq!(inner.parents, path(&["group", "inner"]));
            assert_eq!(inner.value, Some(json!("x")));
        }
    }

    mod values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_render_uses_defaults() {
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(contact_form(), &mut FormState::new(&mut store), None)
                .unwrap();
            assert_eq!(form.child("name").unwrap().value, Some(json!("Ada")));

            let phones = form.child("phones").unwrap();
            assert_eq!(phones.value, Some(json!({"0": {"number": "555-0100"}})));
            let first = phones.find(&path(&["0", "number"])).unwrap();
            assert_eq!(first.value, Some(json!("555-0100")));
            let second = phones.find(&path(&["1", "number"])).unwrap();
            assert!(second.value.is_none());
            let weight = phones.find(&path(&["1", WEIGHT_KEY])).unwrap();
            assert_eq!(weight.value, Some(json!(1)));
        }

        #[test]
        fn test_submitted_input_wins() {
            let input = json!({
                "name": "Grace",
                "phones": {"0": {"number": "555-0199", "_weight": "1"}},
            });
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(contact_form(), &mut FormState::new(&mut store), Some(&input))
                .unwrap();
            assert_eq!(form.child("name").unwrap().value, Some(json!("Grace")));
            let first = form.find(&path(&["phones", "0", "number"])).unwrap();
            assert_eq!(first.value, Some(json!("555-0199")));
            let weight = form.find(&path(&["phones", "0", WEIGHT_KEY])).unwrap();
            assert_eq!(weight.value, Some(json!("1")));
            assert_eq!(weight.default_value, Some(json!(0)));
        }

        #[test]
        fn test_bounded_field_has_no_trigger() {
            let mut store = MemorySessionStore::new();
            let form = FormBuilder::default()
                .build(contact_form(), &mut FormState::new(&mut store), None)
                .unwrap();
            assert!(form.find(&path(&["phones", ADD_MORE_KEY])).is_none());
        }

        #[test]
        fn test_malformed_default_fails_build() {
            let form = Element::container().with_child(
                "tags",
                Element::multi_value(MultiValue::unlimited())
                    .with_default(json!(true))
                    .with_child("tag", Element::field("textfield")),
            );
            let mut store = MemorySessionStore::new();
            let result = FormBuilder::default().build(form, &mut FormState::new(&mut store), None);
            assert!(result.is_err());
        }
    }

    mod rebuild {
        use super::*;
        use pretty_assertions::assert_eq;

        fn wrapper_of(form: &Element) -> Option<String> {
            form.child("tags")
                .and_then(Element::as_multi_value)
                .and_then(|s| s.wrapper_id.clone())
        }

        #[test]
        fn test_same_state_rebuild_keeps_wrapper_id() {
            let form = Element::container().with_child(
                "tags",
                Element::multi_value(MultiValue::unlimited())
                    .with_child("tag", Element::field("textfield")),
            );
            let builder = FormBuilder::default();
            let mut store = MemorySessionStore::new();
            let mut form_state = FormState::new(&mut store);

            let first = builder.build(form.clone(), &mut form_state, None).unwrap();
            let second = builder.build(form, &mut form_state, None).unwrap();
            assert_eq!(wrapper_of(&first).as_deref(), Some("tags-add-more-wrapper"));
            assert_eq!(wrapper_of(&second), wrapper_of(&first));
        }
    }

    mod lookup_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_lookup_nested_object() {
            let input = json!({"a": {"b": 1}});
            assert_eq!(lookup(&input, &path(&["a", "b"])), Some(&json!(1)));
        }

        #[test]
        fn test_lookup_through_array() {
            let input = json!({"a": [{"b": 1}, {"b": 2}]});
            assert_eq!(lookup(&input, &path(&["a", "1", "b"])), Some(&json!(2)));
        }

        #[test]
        fn test_lookup_missing() {
            let input = json!({"a": 1});
            assert!(lookup(&input, &path(&["a", "b"])).is_none());
        }
    }
}
