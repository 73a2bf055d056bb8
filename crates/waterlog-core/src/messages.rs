//! Motivational message cycle.
//!
//! Each entry is declared against a check-in count. Counts without an entry
//! (13 and 19 in the default table) show the closest earlier entry.

/// An immutable message table.
#[derive(Debug, Clone, Copy)]
pub struct MessageTable {
    /// `(declared count, text)`, ascending by count.
    entries: &'static [(u32, &'static str)],
    start_prompt: &'static str,
    completion: &'static str,
}

const DEFAULT_ENTRIES: &[(u32, &str)] = &[
    (1, "Cheers! Cup one, a healthy start to the day!"),
    (2, "Cup two, your cells are cheering!"),
    (3, "Three cups in, your skin is starting to glow."),
    (4, "Four cups, steady as the seasons."),
    (5, "Five cups, fortune favors the hydrated!"),
    (6, "Six cups, everything runs a little smoother now."),
    (7, "Seven cups, your focus keeps climbing."),
    (8, "Eight cups, energy all around!"),
    (9, "Nine cups, your body is settling into the rhythm."),
    (10, "Ten cups, past the halfway mark for today!"),
    (11, "Eleven cups, keep going, your body says thanks!"),
    (12, "Twelve cups, a full cycle of good habits."),
    (14, "Fourteen cups, the goal is one sip away!"),
    (15, "Fifteen cups, goal complete!"),
    (16, "Sixteen cups, past the goal, hydration pro!"),
    (17, "Seventeen cups, water nourishes everything."),
    (18, "Eighteen cups, still going strong!"),
    (20, "Twenty cups, hydration legend!"),
];

impl MessageTable {
    /// The built-in table.
    pub const DEFAULT: MessageTable = MessageTable {
        entries: DEFAULT_ENTRIES,
        start_prompt: "Tap to log your first cup 💧",
        completion: "🎉 Congratulations! Every check-in for today is done!",
    };

    /// Build a custom table. `entries` must be sorted by declared count.
    pub const fn new(
        entries: &'static [(u32, &'static str)],
        start_prompt: &'static str,
        completion: &'static str,
    ) -> Self {
        Self {
            entries,
            start_prompt,
            completion,
        }
    }

    pub fn start_prompt(&self) -> &'static str {
        self.start_prompt
    }

    pub fn completion(&self) -> &'static str {
        self.completion
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest declared count. Reaching it shows the completion message.
    pub fn last_count(&self) -> u32 {
        self.entries.last().map(|(n, _)| *n).unwrap_or(0)
    }

    /// Message for a check-in count.
    pub fn message_for(&self, count: usize) -> &'static str {
        if count == 0 {
            return self.start_prompt;
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        if count >= self.last_count() {
            return self.completion;
        }
        self.entries
            .iter()
            .rev()
            .find(|(declared, _)| *declared <= count)
            .map(|(_, text)| *text)
            .unwrap_or(self.start_prompt)
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_for(declared: u32) -> &'static str {
        DEFAULT_ENTRIES
            .iter()
            .find(|(n, _)| *n == declared)
            .map(|(_, t)| *t)
            .unwrap()
    }

    #[test]
    fn default_table_has_eighteen_entries() {
        assert_eq!(MessageTable::DEFAULT.len(), 18);
        assert_eq!(MessageTable::DEFAULT.last_count(), 20);
    }

    #[test]
    fn entries_are_sorted() {
        assert!(DEFAULT_ENTRIES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn zero_shows_start_prompt() {
        let table = MessageTable::DEFAULT;
        assert_eq!(table.message_for(0), table.start_prompt());
    }

    #[test]
    fn declared_counts_show_their_entry() {
        let table = MessageTable::DEFAULT;
        for n in [1, 2, 7, 12, 14, 15, 18] {
            assert_eq!(table.message_for(n as usize), text_for(n));
        }
    }

    #[test]
    fn gaps_fall_through_to_previous_entry() {
        let table = MessageTable::DEFAULT;
        assert_eq!(table.message_for(13), text_for(12));
        assert_eq!(table.message_for(19), text_for(18));
    }

    #[test]
    fn twenty_and_beyond_show_completion() {
        let table = MessageTable::DEFAULT;
        assert_eq!(table.message_for(20), table.completion());
        assert_eq!(table.message_for(21), table.completion());
        assert_eq!(table.message_for(usize::MAX), table.completion());
    }

    #[test]
    fn custom_table() {
        const ENTRIES: &[(u32, &str)] = &[(1, "one"), (3, "three")];
        let table = MessageTable::new(ENTRIES, "go", "done");
        assert_eq!(table.message_for(0), "go");
        assert_eq!(table.message_for(2), "one");
        assert_eq!(table.message_for(3), "done");
    }
}
