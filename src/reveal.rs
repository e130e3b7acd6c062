use crate::constants::{PRIMARY_LABEL_SELECTOR, SECONDARY_LABEL_SELECTOR, VISIBLE_CLASS};
use crate::dom;
use hero_core::RevealTarget;
use web_sys as web;

/// Label elements unlocked by reveal notifications. Either may be absent.
pub struct RevealLabels {
    primary: Option<web::Element>,
    secondary: Option<web::Element>,
}

impl RevealLabels {
    pub fn find(container: &web::Element) -> Self {
        Self {
            primary: dom::query(container, PRIMARY_LABEL_SELECTOR),
            secondary: dom::query(container, SECONDARY_LABEL_SELECTOR),
        }
    }

    #[inline]
    pub fn show(&self, target: RevealTarget) {
        let el = match target {
            RevealTarget::Primary => &self.primary,
            RevealTarget::Secondary => &self.secondary,
        };
        if let Some(el) = el {
            _ = el.class_list().add_1(VISIBLE_CLASS);
        }
    }

    pub fn show_all(&self, targets: &[RevealTarget]) {
        for target in targets {
            self.show(*target);
        }
    }
}
