//! Deterministic blueprint synthesis used whenever the language model path
//! is unavailable.

use crate::{
    blueprint::format_amount, Blueprint, BudgetLine, EventType, Phase, QuestionnaireAnswers,
    RiskItem, VendorCategory, Venue,
};

const DEFAULT_EVENT_NAME: &str = "Untitled Event";

/// Budget categories and their share of the total, in display order.
/// The shares must sum to 100.
pub const BUDGET_SPLIT: [(&str, u32); 6] = [
    ("Venue & Facilities", 30),
    ("Catering & F&B", 25),
    ("Marketing & Promotion", 15),
    ("Entertainment & Speakers", 15),
    ("Technology & AV", 10),
    ("Contingency", 5),
];

const VENUE_SHARE: u32 = BUDGET_SPLIT[0].1;
const CATERING_SHARE: u32 = BUDGET_SPLIT[1].1;
const ENTERTAINMENT_SHARE: u32 = BUDGET_SPLIT[3].1;
const TECHNOLOGY_SHARE: u32 = BUDGET_SPLIT[4].1;

const PRE_PLANNING_TASKS: [&str; 4] = [
    "Define event objectives and success metrics",
    "Set and approve the overall budget",
    "Assemble the planning team and assign owners",
    "Shortlist and book the venue",
];

const PLANNING_TASKS: [&str; 4] = [
    "Confirm vendors and sign contracts",
    "Build the agenda and confirm speakers",
    "Launch registration and ticketing",
    "Arrange travel and accommodation blocks",
];

const EXECUTION_TASKS: [&str; 4] = [
    "Finalize the run-of-show and staffing plan",
    "Run AV and technology rehearsals",
    "Send attendee reminders and joining instructions",
    "Confirm final numbers with catering",
];

const EVENT_DAY_TASKS: [&str; 4] = [
    "Open registration and check-in",
    "Coordinate vendors and on-site staff",
    "Monitor sessions and attendee flow",
    "Handle issues through the incident desk",
];

const POST_EVENT_TASKS: [&str; 4] = [
    "Send thank-you messages and feedback surveys",
    "Reconcile invoices against the budget",
    "Share recordings and follow-up content",
    "Run a debrief and capture lessons learned",
];

const VENUE_VENDORS: [&str; 3] = [
    "The Grand Ballroom",
    "Metro Convention Center",
    "Riverside Event Hall",
];

const CATERING_VENDORS: [&str; 3] = [
    "Gourmet Events Co.",
    "Fresh Plate Catering",
    "Elite Banquets",
];

const TECHNOLOGY_VENDORS: [&str; 3] = [
    "ProAV Solutions",
    "StageTech Productions",
    "EventStream Media",
];

const ENTERTAINMENT_VENDORS: [&str; 3] = [
    "Premier Speakers Bureau",
    "Spotlight Entertainment",
    "Keynote Talent Agency",
];

const VENUE_FEATURES: [&str; 5] = [
    "Wheelchair accessible entrances and restrooms",
    "High-speed Wi-Fi throughout",
    "Integrated AV and stage lighting",
    "On-site parking and transit access",
    "Dedicated registration area",
];

const MARKETING: [&str; 8] = [
    "Launch a dedicated event landing page with early-bird pricing",
    "Run targeted social media campaigns on LinkedIn and Instagram",
    "Send segmented email invitations to past attendees",
    "Partner with industry associations for cross-promotion",
    "Publish speaker and agenda announcements every week",
    "Offer referral discounts to registered attendees",
    "Issue a press release to trade publications",
    "Create a branded hashtag and a live social wall",
];

const RISKS: [(&str, &str); 5] = [
    (
        "Low registration numbers",
        "Launch early-bird pricing and track weekly registration targets",
    ),
    (
        "Vendor cancellation",
        "Keep a vetted backup vendor for every critical category",
    ),
    (
        "Budget overrun",
        "Hold the contingency reserve and review spend against plan every week",
    ),
    (
        "Technical failure during sessions",
        "Run full AV rehearsals and keep technicians on standby",
    ),
    (
        "Adverse weather or travel disruption",
        "Secure an indoor backup space and share travel advisories early",
    ),
];

/// Builds a complete blueprint from the questionnaire alone.
///
/// Pure and deterministic: the same answers always produce the same
/// blueprint. Amounts are `floor(budget * share / 100)` of
/// [`QuestionnaireAnswers::budget_amount`].
#[must_use]
pub fn synthesize_blueprint(answers: &QuestionnaireAnswers) -> Blueprint {
    let budget = answers.budget_amount();

    let event_name = match answers.event_name.trim() {
        "" => DEFAULT_EVENT_NAME.to_string(),
        name => name.to_string(),
    };

    Blueprint {
        event_name,
        event_type: answers.event_type.clone(),
        timeline: timeline(answers),
        budget: BUDGET_SPLIT
            .iter()
            .map(|&(category, percentage)| BudgetLine {
                category: category.to_string(),
                amount: format_amount(allocate(budget, percentage)),
                percentage,
            })
            .collect(),
        vendors: vec![
            vendor("Venue", &VENUE_VENDORS, budget, VENUE_SHARE),
            vendor("Catering", &CATERING_VENDORS, budget, CATERING_SHARE),
            vendor(
                "Technology & AV",
                &TECHNOLOGY_VENDORS,
                budget,
                TECHNOLOGY_SHARE,
            ),
            vendor(
                "Entertainment & Speakers",
                &ENTERTAINMENT_VENDORS,
                budget,
                ENTERTAINMENT_SHARE,
            ),
        ],
        venue: Venue {
            layout: venue_layout(answers.event_type.parse().ok()).to_string(),
            capacity: answers.attendees.clone(),
            features: to_strings(&VENUE_FEATURES),
        },
        marketing: to_strings(&MARKETING),
        risks: RISKS
            .iter()
            .map(|&(risk, mitigation)| RiskItem {
                risk: risk.to_string(),
                mitigation: mitigation.to_string(),
            })
            .collect(),
    }
}

/// `floor(budget * percentage / 100)` without overflowing for large budgets.
#[must_use]
pub fn allocate(budget: u64, percentage: u32) -> u64 {
    let percentage = u64::from(percentage);
    (budget / 100) * percentage + (budget % 100) * percentage / 100
}

fn timeline(answers: &QuestionnaireAnswers) -> Vec<Phase> {
    vec![
        phase("Pre-Planning", "8-12 weeks before", &PRE_PLANNING_TASKS),
        phase("Planning & Logistics", "4-8 weeks before", &PLANNING_TASKS),
        phase("Execution", "1-4 weeks before", &EXECUTION_TASKS),
        phase("Event Day", answers.duration.label(), &EVENT_DAY_TASKS),
        phase("Post-Event", "1-2 weeks after", &POST_EVENT_TASKS),
    ]
}

fn phase(name: &str, duration: &str, tasks: &[&str]) -> Phase {
    Phase {
        phase: name.to_string(),
        duration: duration.to_string(),
        tasks: to_strings(tasks),
    }
}

fn vendor(kind: &str, catalog: &[&str], budget: u64, percentage: u32) -> VendorCategory {
    VendorCategory {
        kind: kind.to_string(),
        recommendations: to_strings(catalog),
        estimated: format_amount(allocate(budget, percentage)),
    }
}

fn venue_layout(event_type: Option<EventType>) -> &'static str {
    match event_type {
        Some(EventType::Conference) => {
            "Theater-style main hall with breakout rooms and an exhibitor area"
        }
        Some(EventType::Corporate) => {
            "Boardroom and classroom-style rooms with a reception space"
        }
        Some(EventType::Wedding) => {
            "Ceremony space with banquet rounds, a dance floor and a head table"
        }
        Some(EventType::Festival) => {
            "Open-air grounds with multiple stages, a food court and a vendor village"
        }
        Some(EventType::Networking) => {
            "Cocktail-style open floor with high tables and lounge areas"
        }
        Some(EventType::Workshop) => {
            "Classroom layout with collaborative pods and a presentation wall"
        }
        None => "Flexible multi-purpose space with modular seating",
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
