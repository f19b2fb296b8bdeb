//! # Option Selection Rules
//!
//! Default pre-selection and constraint validation for product option
//! groups, performed *before* an add-to-cart call ever reaches the network.
//!
//! ## Traversal Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              validate_selection traversal                               │
//! │                                                                         │
//! │  for each top-level group (listed order):                              │
//! │       │                                                                 │
//! │       ├── selected-in-group < min_selection?  → SelectAtLeast          │
//! │       │                                                                 │
//! │       ├── max_selection > 0 &&                                         │
//! │       │   selected-in-group > max_selection?  → SelectAtMost           │
//! │       │                                                                 │
//! │       └── for each SELECTED option (listed order):                     │
//! │               recurse into its child groups                            │
//! │                                                                         │
//! │  First violation anywhere wins; later groups are not inspected.        │
//! │  Child groups of unselected options are never inspected.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Membership of a selected id in a group counts only the group's *direct*
//! options; nested options belong to their own child group.

use crate::error::SelectionError;
use crate::types::{ProductOption, ProductOptionGroup};

/// Result type for selection validation.
pub type SelectionResult = Result<(), SelectionError>;

/// Collects the option ids that should be pre-selected on initial render.
///
/// Walks every group and pushes `is_default` options; for a default option
/// that owns child groups the walk recurses, so defaults of nested groups
/// under a default-selected parent are pre-populated too.
pub fn default_selection(groups: &[ProductOptionGroup]) -> Vec<String> {
    let mut selected = Vec::new();
    collect_defaults(groups, &mut selected);
    selected
}

fn collect_defaults(groups: &[ProductOptionGroup], out: &mut Vec<String>) {
    for group in groups {
        for option in &group.options {
            if option.is_default {
                out.push(option.id.clone());
                if let Some(children) = &option.child_groups {
                    collect_defaults(children, out);
                }
            }
        }
    }
}

/// Validates a selection against every group constraint, recursively.
///
/// Returns the *first* violated constraint in traversal order (see module
/// docs), or `Ok(())` when the whole tree is satisfied. Child groups are
/// only checked while their parent option is currently selected.
pub fn validate_selection(
    groups: &[ProductOptionGroup],
    selected: &[String],
) -> SelectionResult {
    for group in groups {
        let count = selected_in_group(group, selected);

        if count < group.min_selection {
            return Err(SelectionError::SelectAtLeast {
                count: group.min_selection,
                group: group.name.clone(),
            });
        }

        // max_selection == 0 means unlimited
        if group.max_selection > 0 && count > group.max_selection {
            return Err(SelectionError::SelectAtMost {
                count: group.max_selection,
                group: group.name.clone(),
            });
        }

        for option in &group.options {
            if !is_selected(option, selected) {
                continue;
            }
            if let Some(children) = &option.child_groups {
                validate_selection(children, selected)?;
            }
        }
    }

    Ok(())
}

fn selected_in_group(group: &ProductOptionGroup, selected: &[String]) -> u32 {
    group
        .options
        .iter()
        .filter(|opt| is_selected(opt, selected))
        .count() as u32
}

fn is_selected(option: &ProductOption, selected: &[String]) -> bool {
    selected.iter().any(|id| id == &option.id)
}
