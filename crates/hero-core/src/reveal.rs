//! One-shot reveal notifications for external presentation elements.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    /// Brand name / headline.
    Primary,
    /// Tagline shown after the headline.
    Secondary,
}

impl RevealTarget {
    pub const ALL: [RevealTarget; 2] = [RevealTarget::Primary, RevealTarget::Secondary];

    fn slot(self) -> usize {
        match self {
            RevealTarget::Primary => 0,
            RevealTarget::Secondary => 1,
        }
    }
}

/// Tracks which targets have been revealed. Each flips at most once.
#[derive(Clone, Debug, Default)]
pub struct RevealEmitter {
    revealed: [bool; 2],
}

impl RevealEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `target` revealed. Returns `true` only on the first call per target.
    pub fn fire(&mut self, target: RevealTarget) -> bool {
        let slot = &mut self.revealed[target.slot()];
        if *slot {
            return false;
        }
        *slot = true;
        log::debug!("[reveal] {:?}", target);
        true
    }

    /// Fire every target, pushing the ones that actually transitioned into `out`.
    pub fn fire_all(&mut self, out: &mut Vec<RevealTarget>) {
        for target in RevealTarget::ALL {
            if self.fire(target) {
                out.push(target);
            }
        }
    }

    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed[target.slot()]
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}
