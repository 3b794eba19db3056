/// Typed REST payload shapes for the analytics views
///
/// These are the list/summary payloads the dashboard consumes: overview
/// metrics, earnings, leaderboard placement, fan analytics, sales, and
/// payouts. All monetary amounts are integer cents — the collaborator never
/// sends floats for money.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard overview metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total plays across all content
    pub total_plays: u64,

    /// Current follower count
    pub followers: u64,

    /// Number of published uploads
    pub uploads: u64,

    /// Lifetime earnings in cents
    pub earnings_cents: i64,

    /// When the collaborator computed these numbers
    pub generated_at: DateTime<Utc>,
}

/// Earnings breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Lifetime earnings in cents
    pub total_cents: i64,

    /// Earnings in the current period, in cents
    pub period_cents: i64,

    /// Balance not yet paid out, in cents
    pub pending_cents: i64,
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,

    /// Display name of the ranked account
    pub name: String,

    /// Plays in the ranking period
    pub plays: u64,
}

/// Fan/subscriber analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanStats {
    /// Total fans
    pub total: u64,

    /// New fans in the current period
    pub new_this_period: u64,

    /// Fan counts by country name
    #[serde(default)]
    pub by_country: Vec<(String, u64)>,
}

/// One sale record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Server-assigned opaque id
    pub id: String,

    /// Title of the sold item
    pub item: String,

    /// Sale amount in cents
    pub amount_cents: i64,

    /// When the sale occurred
    pub sold_at: DateTime<Utc>,
}

/// One payout record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRecord {
    /// Server-assigned opaque id
    pub id: String,

    /// Payout amount in cents
    pub amount_cents: i64,

    /// Payout status as reported by the collaborator
    pub status: String,

    /// When the payout was issued
    pub issued_at: DateTime<Utc>,
}
