use super::super::domain::Domain::{
    Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness,
};
use super::super::domain::{Domain, FacetKey, Level};
use super::FacetCondition::{All, Above, Any, Below};
use super::{DefaultInsight, InsightRule};

const IMAGINATION: FacetKey = FacetKey::new(Openness, 1);
const ARTISTIC_INTERESTS: FacetKey = FacetKey::new(Openness, 2);
const EMOTIONALITY: FacetKey = FacetKey::new(Openness, 3);
const INTELLECT: FacetKey = FacetKey::new(Openness, 5);
const LIBERALISM: FacetKey = FacetKey::new(Openness, 6);

const ORDERLINESS: FacetKey = FacetKey::new(Conscientiousness, 2);
const ACHIEVEMENT_STRIVING: FacetKey = FacetKey::new(Conscientiousness, 4);
const SELF_DISCIPLINE: FacetKey = FacetKey::new(Conscientiousness, 5);
const DELIBERATION: FacetKey = FacetKey::new(Conscientiousness, 6);

const FRIENDLINESS: FacetKey = FacetKey::new(Extraversion, 1);
const GREGARIOUSNESS: FacetKey = FacetKey::new(Extraversion, 2);
const ASSERTIVENESS: FacetKey = FacetKey::new(Extraversion, 3);
const EXCITEMENT_SEEKING: FacetKey = FacetKey::new(Extraversion, 5);

const TRUST: FacetKey = FacetKey::new(Agreeableness, 1);
const ALTRUISM: FacetKey = FacetKey::new(Agreeableness, 3);
const COOPERATION: FacetKey = FacetKey::new(Agreeableness, 4);
const SYMPATHY: FacetKey = FacetKey::new(Agreeableness, 6);

const ANXIETY: FacetKey = FacetKey::new(Neuroticism, 1);
const ANGER: FacetKey = FacetKey::new(Neuroticism, 2);
const SELF_CONSCIOUSNESS: FacetKey = FacetKey::new(Neuroticism, 4);
const VULNERABILITY: FacetKey = FacetKey::new(Neuroticism, 6);

const fn default_insight(domain: Domain, level: Level, text: &'static str) -> DefaultInsight {
    DefaultInsight {
        domain,
        level,
        text,
    }
}

pub(super) const DEFAULTS: [DefaultInsight; 15] = [
    default_insight(
        Openness,
        Level::Low,
        "You prefer the familiar and the practical. Proven methods and concrete facts \
         appeal to you more than abstract theories or artistic experiments.",
    ),
    default_insight(
        Openness,
        Level::Average,
        "You balance curiosity with practicality, open to new ideas when they have a clear \
         use but comfortable with established routines.",
    ),
    default_insight(
        Openness,
        Level::High,
        "You are imaginative and intellectually curious, drawn to art, new experiences, \
         and ideas that challenge convention.",
    ),
    default_insight(
        Conscientiousness,
        Level::Low,
        "You are spontaneous and flexible, preferring to keep options open rather than \
         follow strict plans or schedules.",
    ),
    default_insight(
        Conscientiousness,
        Level::Average,
        "You are reasonably organized and dependable, able to focus on goals while still \
         leaving room for flexibility.",
    ),
    default_insight(
        Conscientiousness,
        Level::High,
        "You are disciplined, organized, and persistent. Others count on you to plan ahead \
         and follow through.",
    ),
    default_insight(
        Extraversion,
        Level::Low,
        "You are reserved and recharge in quiet settings, preferring depth in a few \
         relationships over constant social activity.",
    ),
    default_insight(
        Extraversion,
        Level::Average,
        "You enjoy company and activity in moderation, comfortable both in a group and \
         on your own.",
    ),
    default_insight(
        Extraversion,
        Level::High,
        "You are energetic and sociable, seeking out people, excitement, and the chance \
         to take the lead.",
    ),
    default_insight(
        Agreeableness,
        Level::Low,
        "You are direct and competitive, willing to challenge others and put your own \
         interests forward when it matters.",
    ),
    default_insight(
        Agreeableness,
        Level::Average,
        "You are generally cooperative and considerate, but you can stand your ground \
         when a situation calls for it.",
    ),
    default_insight(
        Agreeableness,
        Level::High,
        "You are warm, trusting, and helpful, placing a high value on harmony and the \
         wellbeing of others.",
    ),
    default_insight(
        Neuroticism,
        Level::Low,
        "You are calm and emotionally steady, rarely rattled by stress or setbacks.",
    ),
    default_insight(
        Neuroticism,
        Level::Average,
        "You experience the usual ups and downs, reacting to stress in proportion and \
         recovering at a typical pace.",
    ),
    default_insight(
        Neuroticism,
        Level::High,
        "You feel emotions intensely and are sensitive to stress, which can make worry \
         and frustration more frequent visitors.",
    ),
];

const fn rule(
    domain: Domain,
    pattern: &'static str,
    condition: super::FacetCondition,
    text: &'static str,
) -> InsightRule {
    InsightRule {
        domain,
        pattern,
        condition,
        text,
    }
}

/// Override rules. Within a domain, earlier entries take priority.
pub(super) const OVERRIDES: [InsightRule; 15] = [
    rule(
        Conscientiousness,
        "Procrastinator",
        All(&[Above(ORDERLINESS, 60), Below(SELF_DISCIPLINE, 40)]),
        "You like things neat and well planned, yet getting started is the hard part. \
         Your standards are high, but self-discipline lags behind them, so tasks tend to \
         wait until the last moment.",
    ),
    rule(
        Conscientiousness,
        "Restless Achiever",
        All(&[Above(ACHIEVEMENT_STRIVING, 70), Below(DELIBERATION, 30)]),
        "You are ambitious and driven, but you often act before thinking things through. \
         Your energy gets results, though haste can cost you avoidable mistakes.",
    ),
    rule(
        Conscientiousness,
        "Careful Coaster",
        All(&[Above(DELIBERATION, 70), Below(ACHIEVEMENT_STRIVING, 30)]),
        "You think carefully before you act, but you rarely push yourself toward ambitious \
         goals. Caution keeps you safe while leaving some potential untapped.",
    ),
    rule(
        Neuroticism,
        "Silent Worrier",
        All(&[
            Below(ANGER, 40),
            Any(&[Above(ANXIETY, 70), Above(VULNERABILITY, 70)]),
        ]),
        "You rarely show irritation, but worry runs deep beneath a calm surface. Stress \
         tends to turn inward rather than outward, so others may not see how much you \
         carry.",
    ),
    rule(
        Neuroticism,
        "Short Fuse, Steady Core",
        All(&[Above(ANGER, 70), Below(VULNERABILITY, 30)]),
        "You can flare up quickly, yet you handle real pressure well. Frustration shows on \
         the surface while your ability to cope stays solid underneath.",
    ),
    rule(
        Neuroticism,
        "Private Self-Doubter",
        All(&[Above(SELF_CONSCIOUSNESS, 70), Below(ANXIETY, 40)]),
        "You are not a general worrier, but social situations make you self-conscious. \
         Your unease is specific to being seen and judged by others.",
    ),
    rule(
        Agreeableness,
        "Soft-Hearted Fighter",
        All(&[Below(COOPERATION, 30), Above(SYMPATHY, 70)]),
        "You feel deeply for people in need, yet you do not back down from a confrontation. \
         Your compassion comes with a fighting spirit.",
    ),
    rule(
        Agreeableness,
        "Diplomatic Pragmatist",
        All(&[Above(COOPERATION, 70), Below(SYMPATHY, 30)]),
        "You keep the peace and avoid conflict, but your decisions are driven by reason \
         more than by sympathy. Harmony matters to you as a practical tool.",
    ),
    rule(
        Agreeableness,
        "Wary Helper",
        All(&[Below(TRUST, 30), Above(ALTRUISM, 70)]),
        "You are quick to help, even though you do not readily trust people's motives. \
         You give generously while keeping your guard up.",
    ),
    rule(
        Extraversion,
        "Quiet Commander",
        All(&[Above(ASSERTIVENESS, 70), Below(GREGARIOUSNESS, 30)]),
        "You take charge with ease but have little appetite for crowds. You lead best from \
         a small, focused team rather than the center of a party.",
    ),
    rule(
        Extraversion,
        "Private Thrill-Seeker",
        All(&[Above(EXCITEMENT_SEEKING, 70), Below(FRIENDLINESS, 40)]),
        "You crave excitement and intensity, yet you keep most people at a distance. \
         Your adventures tend to be solo ventures rather than social ones.",
    ),
    rule(
        Extraversion,
        "Warm Follower",
        All(&[Above(FRIENDLINESS, 70), Below(ASSERTIVENESS, 30)]),
        "You connect with people easily but prefer to let others set the direction. \
         You are a welcoming presence rather than a commanding one.",
    ),
    rule(
        Openness,
        "Grounded Dreamer",
        All(&[Above(IMAGINATION, 70), Below(INTELLECT, 30)]),
        "Your imagination is vivid, but abstract theory holds little interest for you. \
         You dream in pictures and stories rather than in concepts.",
    ),
    rule(
        Openness,
        "Traditional Thinker",
        All(&[Above(INTELLECT, 70), Below(LIBERALISM, 30)]),
        "You enjoy challenging ideas while holding firmly to traditional values. \
         Intellectual curiosity and respect for convention sit side by side in you.",
    ),
    rule(
        Openness,
        "Sensitive Aesthete",
        All(&[Above(ARTISTIC_INTERESTS, 70), Above(EMOTIONALITY, 70)]),
        "Beauty moves you, and you feel your own emotions vividly. Art, music, and nature \
         are personal experiences for you, not just pastimes.",
    ),
];
