//! Navigation tree and the navbar dropdown state machine

use crate::page::LinkTarget;
use crate::routes::Route;
use tracing::trace;

/// A navbar entry, optionally with a submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub label: &'static str,
    pub target: LinkTarget,
    /// Secondary line shown under the label in the submenu
    pub hint: Option<&'static str>,
    pub submenu: &'static [NavRoute],
}

impl NavRoute {
    pub const fn link(label: &'static str, target: LinkTarget) -> Self {
        Self {
            label,
            target,
            hint: None,
            submenu: &[],
        }
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

const SERVICES_MENU: &[NavRoute] = &[
    NavRoute {
        label: "HR Training",
        target: LinkTarget::Route(Route::HrTraining),
        hint: Some("Human Resource (HR) program"),
        submenu: &[],
    },
    NavRoute {
        label: "Customer Care Training",
        target: LinkTarget::Route(Route::CustomerTraining),
        hint: Some("Support, communication, process"),
        submenu: &[],
    },
    NavRoute::link("View All Services", LinkTarget::Route(Route::Services)),
];

const NAV_TREE: &[NavRoute] = &[
    NavRoute::link("Home", LinkTarget::Route(Route::Home)),
    NavRoute {
        label: "Services",
        target: LinkTarget::Route(Route::Services),
        hint: None,
        submenu: SERVICES_MENU,
    },
    NavRoute::link("Contact", LinkTarget::RouteAnchor(Route::Home, "contact")),
];

/// Top-level navbar entries
pub fn nav_tree() -> &'static [NavRoute] {
    NAV_TREE
}

/// Every entry of the tree, submenus included
pub fn all_entries() -> impl Iterator<Item = &'static NavRoute> {
    NAV_TREE
        .iter()
        .flat_map(|entry| std::iter::once(entry).chain(entry.submenu.iter()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Services dropdown owned by a single navbar instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dropdown {
    state: DropdownState,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DropdownState::Open
    }

    /// Trigger clicked
    pub fn toggle(&mut self) -> DropdownState {
        let next = match self.state {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        };
        self.transition(next, "toggle")
    }

    /// Pointer left the open menu
    pub fn pointer_leave(&mut self) -> DropdownState {
        self.transition(DropdownState::Closed, "pointer_leave")
    }

    /// Submenu entry chosen; returns where to navigate
    pub fn select(&mut self, entry: &NavRoute) -> LinkTarget {
        self.transition(DropdownState::Closed, "select");
        entry.target
    }

    /// Location changed underneath the menu
    pub fn route_changed(&mut self) -> DropdownState {
        self.transition(DropdownState::Closed, "route_changed")
    }

    fn transition(&mut self, next: DropdownState, event: &'static str) -> DropdownState {
        if self.state != next {
            trace!(event, from = ?self.state, to = ?next, "dropdown");
        }
        self.state = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_starts_closed() {
        assert_eq!(Dropdown::new().state(), DropdownState::Closed);
    }

    #[test]
    fn test_toggle_flips_exactly_once_per_click() {
        let mut dropdown = Dropdown::new();
        let mut expected = DropdownState::Closed;
        for _ in 0..5 {
            let before = dropdown.state();
            let after = dropdown.toggle();
            assert_ne!(before, after);
            expected = match expected {
                DropdownState::Closed => DropdownState::Open,
                DropdownState::Open => DropdownState::Closed,
            };
            assert_eq!(after, expected);
        }
    }

    #[test]
    fn test_select_always_closes() {
        let services = &nav_tree()[1];
        for entry in services.submenu {
            for open_first in [true, false] {
                let mut dropdown = Dropdown::new();
                if open_first {
                    dropdown.toggle();
                }
                let target = dropdown.select(entry);
                assert_eq!(dropdown.state(), DropdownState::Closed);
                assert_eq!(target, entry.target);
            }
        }
    }

    #[test]
    fn test_pointer_leave_and_route_change_close() {
        let mut dropdown = Dropdown::new();
        dropdown.toggle();
        assert_eq!(dropdown.pointer_leave(), DropdownState::Closed);
        dropdown.toggle();
        assert_eq!(dropdown.route_changed(), DropdownState::Closed);
        assert_eq!(dropdown.pointer_leave(), DropdownState::Closed);
    }

    #[test]
    fn test_services_submenu_targets() {
        let services = nav_tree()
            .iter()
            .find(|entry| entry.has_submenu())
            .expect("services menu");
        let targets: Vec<_> = services.submenu.iter().map(|e| e.target).collect();
        assert_eq!(
            targets,
            vec![
                LinkTarget::Route(Route::HrTraining),
                LinkTarget::Route(Route::CustomerTraining),
                LinkTarget::Route(Route::Services),
            ]
        );
    }

    #[test]
    fn test_every_nav_route_is_in_route_table() {
        for entry in all_entries() {
            if let Some(route) = entry.target.route() {
                assert_eq!(Route::from_path(route.path()), Some(route));
            }
        }
        assert_eq!(all_entries().count(), 6);
    }
}
