use crate::models::SentimentLabel;

/// Streak confirmation over the raw label stream: a directional label is only
/// surfaced after `streak` consecutive identical raw occurrences; everything
/// else is downgraded to `Sideways/Chop`. A Moore-style filter, not a
/// statistical smoother.
#[derive(Debug, Clone)]
pub struct StreakConfirmer {
    streak: usize,
    last: Option<SentimentLabel>,
    run_length: usize,
}

impl StreakConfirmer {
    pub fn new(streak: usize) -> Self {
        Self {
            streak,
            last: None,
            run_length: 1,
        }
    }

    /// Feed one raw label, get the confirmed label for the same index.
    ///
    /// The very first label has no history to confirm against and always
    /// comes back as `Not enough data`.
    pub fn step(&mut self, label: SentimentLabel) -> SentimentLabel {
        if self.last.is_none() {
            self.last = Some(label);
            return SentimentLabel::NotEnoughData;
        }

        if self.last == Some(label) && label.is_directional() {
            self.run_length += 1;
        } else {
            self.run_length = 1;
        }
        self.last = Some(label);

        if self.run_length >= self.streak && label.is_directional() {
            label
        } else {
            SentimentLabel::SidewaysChop
        }
    }
}

/// Fold the confirmer over a full raw label sequence.
pub fn confirm_labels(labels: &[SentimentLabel], streak: usize) -> Vec<SentimentLabel> {
    let mut confirmer = StreakConfirmer::new(streak);
    labels.iter().map(|&label| confirmer.step(label)).collect()
}
