use crate::{
    completion::{complete_text, strip_code_fences, Generated, SharedModel},
    CompletionParams, GenerationError, ShapeError,
};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, PoisonError,
};

/// Number of insights in every batch.
pub const INSIGHTS_PER_BATCH: usize = 3;

const SYSTEM_PROMPT: &str = "You are an expert event management AI that provides actionable \
insights. Always respond with valid JSON only.";

/// Live counters of a running event, as shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub attendees: AttendeeCounts,
    #[serde(default)]
    pub vendors: VendorCounts,
    #[serde(default)]
    pub sessions: SessionCounts,
    /// Overall completion, in percent.
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub urgent_tasks: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttendeeCounts {
    pub registered: u32,
    pub checked_in: u32,
    pub vip: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorCounts {
    pub total: u32,
    pub active: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionCounts {
    pub total: u32,
    pub live: u32,
    pub upcoming: u32,
}

impl EventSnapshot {
    /// Checked-in attendees as a rounded percentage of registrations.
    /// Zero when nobody has registered.
    #[must_use]
    pub fn check_in_rate(&self) -> u64 {
        let registered = u64::from(self.attendees.registered);
        if registered == 0 {
            return 0;
        }
        (u64::from(self.attendees.checked_in) * 100 + registered / 2) / registered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Critical,
    Opportunity,
    Prediction,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Primary,
    Secondary,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightAction {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

/// A short, typed, ranked recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub actions: Vec<InsightAction>,
    /// 1-based rank, equal to the position in the batch.
    pub priority: u32,
}

/// An insight as the model writes it, before ids and ranks are assigned.
#[derive(Debug, Deserialize)]
struct RawInsight {
    #[serde(rename = "type")]
    kind: InsightKind,
    title: String,
    message: String,
    #[serde(default)]
    actions: Vec<InsightAction>,
}

pub struct InsightGenerator {
    model: Option<SharedModel>,
    params: CompletionParams,
}

impl InsightGenerator {
    #[must_use]
    pub fn new(model: Option<SharedModel>) -> Self {
        Self {
            model,
            params: CompletionParams::INSIGHTS,
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Always returns exactly [`INSIGHTS_PER_BATCH`] insights, computing them
    /// from the snapshot when the remote attempt fails.
    pub async fn generate(&self, snapshot: &EventSnapshot) -> Generated<Vec<Insight>> {
        match self.request(snapshot).await {
            Ok(insights) => Generated::remote(insights),
            Err(error) => {
                tracing::warn!(
                    event = %snapshot.name,
                    %error,
                    "insight generation failed, using computed insights"
                );
                Generated::fallback(fallback_insights(snapshot))
            }
        }
    }

    pub async fn request(&self, snapshot: &EventSnapshot) -> Result<Vec<Insight>, GenerationError> {
        let text = complete_text(
            self.model.as_ref(),
            &self.params,
            SYSTEM_PROMPT,
            render_prompt(snapshot),
        )
        .await?;

        parse_insights(&text, chrono::Utc::now().timestamp_millis())
    }
}

/// Parse a model-written insight array, assigning ids of the form
/// `insight-{batch}-{index}` and priorities by position.
pub fn parse_insights(text: &str, batch: i64) -> Result<Vec<Insight>, GenerationError> {
    let raw: Vec<RawInsight> = serde_json::from_str(strip_code_fences(text))?;

    if raw.len() != INSIGHTS_PER_BATCH {
        return Err(ShapeError::Count {
            section: "insights",
            expected: INSIGHTS_PER_BATCH,
            actual: raw.len(),
        }
        .into());
    }

    raw.into_iter()
        .zip(1_u32..)
        .map(|(insight, priority)| -> Result<Insight, GenerationError> {
            if insight.title.trim().is_empty() {
                return Err(ShapeError::EmptyField("insight title").into());
            }
            if insight.message.trim().is_empty() {
                return Err(ShapeError::EmptyField("insight message").into());
            }
            Ok(Insight {
                id: format!("insight-{batch}-{}", priority - 1),
                kind: insight.kind,
                title: insight.title,
                message: insight.message,
                actions: insight.actions,
                priority,
            })
        })
        .collect()
}

/// Three insights derived purely from the snapshot counters.
#[must_use]
pub fn fallback_insights(snapshot: &EventSnapshot) -> Vec<Insight> {
    vec![
        Insight {
            id: "fallback-1".to_string(),
            kind: InsightKind::Critical,
            title: "Check-in Rate".to_string(),
            message: format!(
                "Currently {}% checked in. Monitor for any delays.",
                snapshot.check_in_rate()
            ),
            actions: vec![action("View Details", ActionKind::Primary)],
            priority: 1,
        },
        Insight {
            id: "fallback-2".to_string(),
            kind: InsightKind::Info,
            title: "Session Status".to_string(),
            message: format!(
                "{} sessions currently live with {} upcoming.",
                snapshot.sessions.live, snapshot.sessions.upcoming
            ),
            actions: vec![action("View Schedule", ActionKind::Secondary)],
            priority: 2,
        },
        Insight {
            id: "fallback-3".to_string(),
            kind: InsightKind::Opportunity,
            title: "Event Progress".to_string(),
            message: format!(
                "Event is {}% complete and on track to finish successfully.",
                snapshot.progress
            ),
            actions: vec![action("View Progress", ActionKind::Primary)],
            priority: 3,
        },
    ]
}

fn action(label: &str, kind: ActionKind) -> InsightAction {
    InsightAction {
        label: label.to_string(),
        kind,
    }
}

fn render_prompt(snapshot: &EventSnapshot) -> String {
    format!(
        r#"You are an AI assistant for EventOS, an event management platform. Analyze this event data and provide 3 actionable insights:

Event: {name} ({kind})
- Registered: {registered} | Checked In: {checked_in}
- Live Sessions: {live} | Upcoming: {upcoming}
- Active Vendors: {active} | Pending: {pending}
- Progress: {progress}%
- Urgent Tasks: {urgent}

Provide exactly 3 insights in this JSON format:
[
  {{
    "type": "critical" | "opportunity" | "prediction" | "info",
    "title": "Short title (2-4 words)",
    "message": "Detailed actionable insight (1-2 sentences)",
    "actions": [{{"label": "Action text", "type": "primary" | "secondary" | "danger"}}]
  }}
]

Focus on:
1. Critical issues that need immediate attention
2. Opportunities to improve the event
3. Predictions based on current trends

Return ONLY the JSON array, no other text."#,
        name = snapshot.name,
        kind = snapshot.event_type,
        registered = snapshot.attendees.registered,
        checked_in = snapshot.attendees.checked_in,
        live = snapshot.sessions.live,
        upcoming = snapshot.sessions.upcoming,
        active = snapshot.vendors.active,
        pending = snapshot.vendors.pending,
        progress = snapshot.progress,
        urgent = snapshot.urgent_tasks,
    )
}

/// Opaque handle for one insight refresh. Only the newest ticket may
/// publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Holds the insight batch a dashboard view is showing.
///
/// Each refresh takes a ticket; a batch that completes after a newer refresh
/// has started is discarded, so a slow response never overwrites a fresher
/// one. Published batches replace the previous batch wholesale.
#[derive(Debug, Default)]
pub struct InsightFeed {
    generation: AtomicU64,
    latest: Mutex<Option<Vec<Insight>>>,
}

impl InsightFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, superseding every earlier ticket.
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store `batch` if `ticket` is still the newest. Returns whether it was
    /// stored.
    pub fn publish(&self, ticket: RefreshTicket, batch: Vec<Insight>) -> bool {
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket.0 != self.generation.load(Ordering::SeqCst) {
            tracing::debug!(ticket = ticket.0, "discarding stale insight batch");
            return false;
        }
        *latest = Some(batch);
        true
    }

    /// The most recently published batch.
    #[must_use]
    pub fn latest(&self) -> Option<Vec<Insight>> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Generate and publish a batch. Returns `None` when a newer refresh
    /// started while this one was in flight.
    pub async fn refresh(
        &self,
        generator: &InsightGenerator,
        snapshot: &EventSnapshot,
    ) -> Option<Vec<Insight>> {
        let ticket = self.begin_refresh();
        let batch = generator.generate(snapshot).await.into_inner();
        self.publish(ticket, batch.clone()).then_some(batch)
    }
}
