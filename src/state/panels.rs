//! Panel visibility as a single active-panel value.
//!
//! Only one of the side menu, cart panel, and login modal can be open at a
//! time: opening one closes whichever was active. Every transition reports
//! what changed so the DOM layer touches only the affected elements.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

/// A slide-in or modal region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    SideMenu,
    Cart,
    Login,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::SideMenu, Panel::Cart, Panel::Login];

    /// DOM id of the panel's root element.
    pub fn element_id(self) -> &'static str {
        match self {
            Panel::SideMenu => "side-menu",
            Panel::Cart => "cart-panel",
            Panel::Login => "login-modal",
        }
    }

    /// How the open state is expressed in the panel's class list.
    pub fn visual(self) -> VisualToggle {
        match self {
            Panel::SideMenu | Panel::Cart => VisualToggle::PresentWhenOpen("open"),
            Panel::Login => VisualToggle::AbsentWhenOpen("hidden"),
        }
    }

    /// Whether opening the panel moves focus into it.
    pub fn takes_focus(self) -> bool {
        matches!(self, Panel::Login)
    }
}

/// A class whose presence encodes a panel's open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualToggle {
    PresentWhenOpen(&'static str),
    AbsentWhenOpen(&'static str),
}

impl VisualToggle {
    pub fn class(self) -> &'static str {
        match self {
            VisualToggle::PresentWhenOpen(c) | VisualToggle::AbsentWhenOpen(c) => c,
        }
    }

    pub fn class_present(self, open: bool) -> bool {
        match self {
            VisualToggle::PresentWhenOpen(_) => open,
            VisualToggle::AbsentWhenOpen(_) => !open,
        }
    }

    /// Recover the open state from the class list, inverse of `class_present`.
    pub fn is_open(self, class_present: bool) -> bool {
        match self {
            VisualToggle::PresentWhenOpen(_) => class_present,
            VisualToggle::AbsentWhenOpen(_) => !class_present,
        }
    }
}

/// Everything the DOM needs to render one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub panel: Panel,
    pub open: bool,
    pub class: &'static str,
    pub class_present: bool,
    pub aria_hidden: bool,
}

impl PanelView {
    pub fn new(panel: Panel, open: bool) -> Self {
        let visual = panel.visual();
        Self { panel, open, class: visual.class(), class_present: visual.class_present(open), aria_hidden: !open }
    }

    /// Value for the `aria-hidden` attribute.
    pub fn aria_value(&self) -> &'static str {
        if self.aria_hidden { "true" } else { "false" }
    }
}

/// The result of one open/close call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelTransition {
    pub closed: Option<Panel>,
    pub opened: Option<Panel>,
    /// Overlay visibility and page scroll lock after the transition.
    pub overlay_visible: bool,
}

impl PanelTransition {
    pub fn is_noop(&self) -> bool {
        self.closed.is_none() && self.opened.is_none()
    }

    /// Views for each panel whose state changed, closed first.
    pub fn views(&self) -> impl Iterator<Item = PanelView> + '_ {
        let closed = self.closed.map(|p| PanelView::new(p, false));
        let opened = self.opened.map(|p| PanelView::new(p, true));
        closed.into_iter().chain(opened)
    }
}

/// Which panel, if any, is currently open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    active: Option<Panel>,
}

impl PanelState {
    pub fn is_open(&self, panel: Panel) -> bool {
        self.active == Some(panel)
    }

    pub fn view(&self, panel: Panel) -> PanelView {
        PanelView::new(panel, self.is_open(panel))
    }

    /// Open `panel`, closing any other active panel.
    ///
    /// Re-opening the active panel reports it as opened again so focus and
    /// classes are re-applied, but closes nothing.
    pub fn open(&mut self, panel: Panel) -> PanelTransition {
        let closed = self.active.filter(|p| *p != panel);
        self.active = Some(panel);
        PanelTransition { closed, opened: Some(panel), overlay_visible: true }
    }

    /// Close `panel` if it is the active one; otherwise a no-op.
    pub fn close(&mut self, panel: Panel) -> PanelTransition {
        if self.active != Some(panel) {
            return PanelTransition { closed: None, opened: None, overlay_visible: self.active.is_some() };
        }
        self.active = None;
        PanelTransition { closed: Some(panel), opened: None, overlay_visible: false }
    }

    /// Close whatever is open. Used by the overlay click and Escape.
    pub fn close_all(&mut self) -> PanelTransition {
        PanelTransition { closed: self.active.take(), opened: None, overlay_visible: false }
    }
}
