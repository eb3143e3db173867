use super::AnswerCondition::AtLeast;
use super::{ConsistencyCheck, Severity};

const fn agrees_with_both(
    item_a: &'static str,
    item_b: &'static str,
    title: Option<&'static str>,
    message: &'static str,
) -> ConsistencyCheck {
    ConsistencyCheck {
        item_a,
        when_a: AtLeast(4),
        item_b,
        when_b: AtLeast(4),
        title,
        message,
        severity: Severity::High,
    }
}

pub(super) const CURRENT: [ConsistencyCheck; 8] = [
    agrees_with_both(
        "14",
        "9",
        Some("The Altruistic Strategist"),
        "You say you love to help others, yet you also admit to using others for your own ends. \
         Your generosity may come with an agenda you rarely say out loud.",
    ),
    agrees_with_both(
        "2",
        "16",
        Some("The Anxious Socialite"),
        "You report making friends easily while also finding it difficult to approach others. \
         Social ease may be a skill you perform rather than a comfort you feel.",
    ),
    agrees_with_both(
        "15",
        "105",
        Some("The Flexible Promise-Keeper"),
        "You claim to keep your promises and also to break them. \
         Your commitments may depend more on circumstance than you would like to admit.",
    ),
    agrees_with_both(
        "4",
        "94",
        Some("The Guarded Believer"),
        "You describe yourself as trusting others and as distrusting people. \
         You may want to believe the best while bracing for the worst.",
    ),
    agrees_with_both(
        "20",
        "110",
        Some("The Effortless Achiever"),
        "You say you work hard, yet you also put little time and effort into your work. \
         Your drive may be strong in some areas and absent in others.",
    ),
    agrees_with_both(
        "116",
        "26",
        Some("The Composed Panicker"),
        "You remain calm under pressure but also panic easily. \
         Your outward composure may hide a faster internal alarm than others see.",
    ),
    agrees_with_both(
        "44",
        "89",
        Some("The Selective Listener"),
        "You are concerned about others while not being interested in their problems. \
         Your care may be reserved for a small inner circle.",
    ),
    agrees_with_both(
        "87",
        "71",
        Some("The Smiling Melancholic"),
        "You love life and are also often down in the dumps. \
         Your enthusiasm and your low moods may take turns more than you notice.",
    ),
];

pub(super) const LEGACY: [ConsistencyCheck; 5] = [
    agrees_with_both(
        "7",
        "97",
        None,
        "Loves large parties but avoids crowds.",
    ),
    agrees_with_both(
        "25",
        "115",
        None,
        "Always prepared but has difficulty starting tasks.",
    ),
    agrees_with_both(
        "29",
        "119",
        None,
        "Sympathizes with the homeless but tries not to think about the needy.",
    ),
    agrees_with_both(
        "12",
        "102",
        None,
        "Takes charge but waits for others to lead the way.",
    ),
    agrees_with_both(
        "36",
        "96",
        None,
        "Gets irritated easily but is not easily annoyed.",
    ),
];
