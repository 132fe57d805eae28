//! Multi-value form demo
//!
//! Walks one add-more round trip against an in-memory session: initial
//! render, trigger submission with a rebuild, then the asynchronous render
//! whose partial update is printed as JSON on stdout.

use anyhow::Result;
use multivalue_form::multivalue::{dispatch_render, dispatch_submit, order_by_weight, ADD_MORE_KEY};
use multivalue_form::{
    Element, FormBuilder, FormState, MemorySessionStore, MultiValue, MultiValueConfig,
};
use serde_json::{json, Value};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn links_form() -> Element {
    Element::container().with_child(
        "links",
        Element::multi_value(MultiValue::unlimited())
            .with_title("Links")
            .with_default(json!(["https://example.com", "https://example.org"]))
            .with_child("url", Element::field("url").with_title("URL")),
    )
}

fn row_count(form: &Element) -> usize {
    form.child("links")
        .map(|links| {
            links
                .children
                .keys()
                .filter(|key| key.parse::<usize>().is_ok())
                .count()
        })
        .unwrap_or(0)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "multivalue_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let builder = FormBuilder::new(MultiValueConfig::load()?);
    let mut store = MemorySessionStore::new();
    let trigger = vec!["links".to_string(), ADD_MORE_KEY.to_string()];

    // Initial render
    let form = builder.build(links_form(), &mut FormState::new(&mut store), None)?;
    info!(rows = row_count(&form), "initial render");

    // The user swaps the two rows and clicks the add-more trigger
    let input: Value = json!({
        "links": {
            "0": {"url": "https://example.com", "_weight": "1"},
            "1": {"url": "https://example.org", "_weight": "0"},
            (ADD_MORE_KEY): builder.config().add_more_label.clone(),
        }
    });
    let rebuild = {
        let mut form_state = FormState::new(&mut store);
        let submitted = builder.build(links_form(), &mut form_state, Some(&input))?;
        dispatch_submit(&submitted, &trigger, &mut form_state)?;
        form_state.is_rebuilding()
    };
    if let Some(links) = input.get("links") {
        info!(order = ?order_by_weight(links), "submitted row order");
    }

    if rebuild {
        let rebuilt = builder.build(links_form(), &mut FormState::new(&mut store), Some(&input))?;
        info!(rows = row_count(&rebuilt), "rebuilt form");

        let update = dispatch_render(&rebuilt, &trigger)?;
        println!("{}", serde_json::to_string_pretty(&update)?);
    }

    Ok(())
}
