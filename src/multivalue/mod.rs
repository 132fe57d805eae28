//! Multi-value form element
//!
//! Renders a child template as a variable-length, reorderable list of rows.
//! The row count lives in the session store so an add-more interaction can
//! grow the list across rebuilds.

mod add_more;
mod expand;
mod reorder;
mod settings;
mod state;
mod value;

pub use add_more::{add_more_ajax, add_more_submit, dispatch_render, dispatch_submit, AjaxUpdate};
pub use expand::{process_element, seed_row, weight_control, ADD_MORE_KEY, WEIGHT_KEY};
pub use reorder::order_by_weight;
pub use settings::{Cardinality, MultiValue, CARDINALITY_UNLIMITED};
pub use state::{
    get_element_state, set_element_state, state_key, ElementState, ELEMENTS_KEY, PARENTS_KEY,
    STORAGE_NAMESPACE,
};
pub use value::{value_callback, wrap_single_child_values, RawInput};
