use rand::Rng;

/// Shown in a toast after each mark. Same register as the original set the
/// product shipped with.
pub const MOTIVATIONAL_PHRASES: &[&str] = &[
    "Small steps every day add up to big changes.",
    "You don't have to be perfect, just consistent.",
    "One day at a time. Today is that day.",
    "Habits are the compound interest of self-improvement.",
    "Done today beats perfect someday.",
    "Keep the chain going.",
    "Discipline is choosing what you want most over what you want now.",
    "Every mark is a vote for the person you want to become.",
    "Showing up is the hardest part, and you just did it.",
    "Progress, not perfection.",
    "Another day, another brick in the wall.",
    "The best time to start was yesterday. The second best is now.",
    "Twenty-one days makes a habit. You're on your way.",
    "Consistency turns effort into identity.",
    "Well done. Future you says thanks.",
];

pub fn random_phrase() -> &'static str {
    let index = rand::rng().random_range(0..MOTIVATIONAL_PHRASES.len());
    MOTIVATIONAL_PHRASES[index]
}
